use rand::{seq::SliceRandom, Rng};

use super::{
    action::{Reply, StickerRef},
    error::{ReplyError, SourceError},
    weighted::Weighted,
};

/// Where generators read their remote data from. The live
/// implementation goes through the TTL caches to the spreadsheet and
/// to Discord; tests hand back fixed lists.
pub trait ReplySources {
    async fn lines(&self) -> Result<Vec<String>, SourceError>;

    async fn stickers(&self) -> Result<Vec<StickerRef>, SourceError>;
}

/// The reply functions the bot knows how to run.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyFn {
    /// A uniformly random line from the spreadsheet column.
    SheetLine,
    /// A uniformly random sticker from the collection.
    RandomSticker,
    /// A fixed line of text.
    Static(&'static str),
}

impl ReplyFn {
    /// Produces this function's replies for one message.
    ///
    /// An empty candidate list is an error, not a silent no-op.
    pub async fn generate(
        &self,
        sources: &impl ReplySources,
        rng: &mut impl Rng,
    ) -> Result<Vec<Reply>, ReplyError> {
        let replies = match self {
            Self::SheetLine => {
                let lines = sources.lines().await?;
                let line = lines
                    .choose(rng)
                    .ok_or(ReplyError::NoCandidates("spreadsheet column"))?;

                vec![Reply::Text(line.clone())]
            }
            Self::RandomSticker => {
                let stickers = sources.stickers().await?;
                let sticker = stickers
                    .choose(rng)
                    .ok_or(ReplyError::NoCandidates("sticker collection"))?;

                vec![Reply::Sticker(sticker.clone())]
            }
            Self::Static(text) => vec![Reply::Text((*text).to_owned())],
        };

        Ok(replies)
    }
}

/// One step of a dispatcher: either a fixed reply function, or a
/// weighted draw between several.
#[derive(Debug, Clone)]
pub enum Generator {
    One(ReplyFn),
    Weighted(Weighted<ReplyFn>),
}

impl Generator {
    /// Resolves to the reply function to run for this invocation.
    /// Weighted steps draw exactly once and remember nothing.
    pub fn resolve(&self, rng: &mut impl Rng) -> &ReplyFn {
        match self {
            Self::One(reply_fn) => reply_fn,
            Self::Weighted(options) => options.pick(rng),
        }
    }
}
