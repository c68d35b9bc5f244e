use tracing::instrument;

use crate::{
    replies::{Dispatcher, ReplyFn},
    utils::{poise::CommandResult, Context},
};

use super::LogCommands;

const GREETING: &str = "Я говорю тебе... Привеееееет)";

/// the bot says hi back
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn start(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;

    super::dispatch(ctx, Dispatcher::single(ReplyFn::Static(GREETING))).await?;

    Ok(())
}
