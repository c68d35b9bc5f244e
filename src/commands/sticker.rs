use tracing::instrument;

use crate::{
    replies::{Dispatcher, ReplyFn},
    utils::{poise::CommandResult, Context},
};

use super::LogCommands;

/// a random sticker from the collection
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn sticker(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;

    super::dispatch(ctx, Dispatcher::single(ReplyFn::RandomSticker)).await?;

    Ok(())
}
