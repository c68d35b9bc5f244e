use tracing::instrument;

use crate::{
    replies::{Dispatcher, ReplyFn, Weighted},
    utils::{poise::CommandResult, Context},
};

use super::LogCommands;

/// Out of a hundred replies, how many are spreadsheet lines and how
/// many are stickers.
const LINE_WEIGHT: f32 = 95.0;
const STICKER_WEIGHT: f32 = 5.0;

/// The weighted reply used for `/klan` and for free-text chatter.
pub(crate) fn dispatcher() -> Dispatcher {
    let options = Weighted::new([
        (ReplyFn::SheetLine, LINE_WEIGHT),
        (ReplyFn::RandomSticker, STICKER_WEIGHT),
    ])
    .expect("hardcoded weights should be valid");

    Dispatcher::weighted(options)
}

/// answers the way the clan would
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn klan(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;

    super::dispatch(ctx, dispatcher()).await?;

    Ok(())
}
