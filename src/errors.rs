use poise::{serenity_prelude as serenity, BoxFuture, FrameworkError};

use thiserror::Error as ThisError;
use tracing::{error, error_span};
use tracing_unwrap::ResultExt;

use crate::{framework::Data, replies::ReplyError};

/// Everything a command or watcher can fail with.
///
/// None of it is caught along the way; it all lands at
/// [`handle_framework_error`], which logs the failed update and drops
/// it. No error message goes back to the chat.
#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error(transparent)]
    Reply(#[from] ReplyError),

    #[error("serenity error: {0}")]
    Serenity(#[from] serenity::Error),
}

pub fn handle_framework_error(err: FrameworkError<'_, Data, CommandError>) -> BoxFuture<()> {
    Box::pin(async {
        match err {
            FrameworkError::Command { error, ctx, .. } => {
                let command = ctx.invoked_command_name();
                let span = error_span!("", command);
                let _enter = span.enter();

                error!("{error}");
            }
            FrameworkError::MissingBotPermissions {
                missing_permissions,
                ctx,
                ..
            } => {
                let command = ctx.invoked_command_name();
                let span = error_span!("", command);
                let _enter = span.enter();

                error!(%missing_permissions, "bot is missing permissions");
            }
            _ => {
                poise::builtins::on_error(err)
                    .await
                    .expect_or_log("failed to handle framework error");
            }
        };
    })
}
