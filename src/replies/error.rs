use poise::serenity_prelude as serenity;
use thiserror::Error;

use crate::sheets::SheetsError;

/// Failure while producing or delivering the replies for one message.
///
/// Nothing here is caught locally: the error runs up to the framework
/// boundary, which logs it and drops the update. The user simply gets
/// no reply.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("no candidate to select: {0} is empty")]
    NoCandidates(&'static str),

    #[error("sending reply failed: {0}")]
    Send(#[from] serenity::Error),
}

/// Failure fetching the remote data behind a generator.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("spreadsheet fetch failed: {0}")]
    Sheets(#[from] SheetsError),

    #[error("sticker collection fetch failed: {0}")]
    Discord(#[from] serenity::Error),
}
