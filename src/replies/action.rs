use poise::serenity_prelude as serenity;

/// One reply to be sent back to the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Sticker(StickerRef),
}

/// A sticker in the collection, by id. The name only shows up in logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerRef {
    pub id: serenity::StickerId,
    pub name: String,
}

/// The transport calls a reply is allowed to make: send text, or send
/// a sticker by id. Implemented over the live Discord context and by
/// the recording fakes in tests.
pub trait Responder {
    async fn reply_text(&self, text: &str) -> Result<(), serenity::Error>;

    async fn reply_sticker(&self, sticker: &StickerRef) -> Result<(), serenity::Error>;
}

impl Reply {
    /// Each variant maps to exactly one transport call.
    pub async fn apply(&self, responder: &impl Responder) -> Result<(), serenity::Error> {
        match self {
            Self::Text(text) => responder.reply_text(text).await,
            Self::Sticker(sticker) => responder.reply_sticker(sticker).await,
        }
    }
}
