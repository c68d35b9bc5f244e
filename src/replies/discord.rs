//! Serenity-backed ends of the reply pipeline: where generators read
//! their data from, and where finished replies get sent.

use poise::serenity_prelude::{self as serenity, CreateMessage, Message};

use crate::{framework::Data, utils::Context};

use super::{ReplySources, Responder, SourceError, StickerRef};

/// Remote data reachable from a live event: the spreadsheet column and
/// the configured guild's sticker collection, each behind its cache.
pub struct LiveSources<'a> {
    data: &'a Data,
    http: &'a serenity::Http,
}

impl<'a> LiveSources<'a> {
    pub fn new(data: &'a Data, http: &'a serenity::Http) -> Self {
        Self { data, http }
    }
}

impl ReplySources for LiveSources<'_> {
    async fn lines(&self) -> Result<Vec<String>, SourceError> {
        let sheets = &self.data.sheets;
        let config = &self.data.config.sheets;

        self.data
            .lines
            .get_or_refresh(|| async {
                sheets
                    .column_values(config.sheet(), config.column())
                    .await
                    .map_err(SourceError::from)
            })
            .await
    }

    async fn stickers(&self) -> Result<Vec<StickerRef>, SourceError> {
        let http = self.http;
        let guild = self.data.config.stickers.guild();

        self.data
            .stickers
            .get_or_refresh(|| async move {
                let stickers = http
                    .get_guild_stickers(guild)
                    .await
                    .map_err(SourceError::from)?;

                Ok(stickers
                    .into_iter()
                    .map(|sticker| StickerRef {
                        id: sticker.id,
                        name: sticker.name,
                    })
                    .collect())
            })
            .await
    }
}

/// Replies through a command invocation.
pub struct CommandResponder<'a> {
    ctx: Context<'a>,
}

impl<'a> CommandResponder<'a> {
    pub fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }
}

impl Responder for CommandResponder<'_> {
    async fn reply_text(&self, text: &str) -> Result<(), serenity::Error> {
        self.ctx.reply(text).await?;
        Ok(())
    }

    async fn reply_sticker(&self, sticker: &StickerRef) -> Result<(), serenity::Error> {
        // interaction responses can't carry stickers, so this goes out
        // as a plain channel message for both invocation flavors
        let message = CreateMessage::new().sticker_id(sticker.id);
        self.ctx
            .channel_id()
            .send_message(self.ctx.http(), message)
            .await?;

        Ok(())
    }
}

/// Replies to a plain chat message outside any command.
pub struct MessageResponder<'a> {
    http: &'a serenity::Http,
    message: &'a Message,
}

impl<'a> MessageResponder<'a> {
    pub fn new(http: &'a serenity::Http, message: &'a Message) -> Self {
        Self { http, message }
    }
}

impl Responder for MessageResponder<'_> {
    async fn reply_text(&self, text: &str) -> Result<(), serenity::Error> {
        self.message.reply(self.http, text).await?;
        Ok(())
    }

    async fn reply_sticker(&self, sticker: &StickerRef) -> Result<(), serenity::Error> {
        let message = CreateMessage::new()
            .sticker_id(sticker.id)
            .reference_message(self.message);
        self.message
            .channel_id
            .send_message(self.http, message)
            .await?;

        Ok(())
    }
}
