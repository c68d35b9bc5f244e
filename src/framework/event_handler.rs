use std::{future::Future, pin::Pin};

use poise::{
    serenity_prelude::{self as serenity, CacheHttp, FullEvent, Message},
    FrameworkContext,
};
use rand::SeedableRng;

use crate::{
    errors::CommandError,
    replies::discord::{LiveSources, MessageResponder},
};

use super::Data;

/// Free-text messages get the same weighted reply as `/klan`. Commands
/// are left to the command framework, and the bot never answers
/// itself, DMs, or channels the watcher config excludes.
async fn event_handler(
    serenity_ctx: &serenity::Context,
    event: &FullEvent,
    _framework_ctx: FrameworkContext<'_, Data, CommandError>,
    data: &Data,
) -> Result<(), CommandError> {
    let filter_watcher_msg = move |msg: &Message| {
        !msg.is_own(&serenity_ctx.cache)
            && !msg.is_private()
            && !msg.content.starts_with(data.config().bot.prefix())
            && data.config().watchers.channel_allowed(msg.channel_id)
    };

    match event {
        FullEvent::Message { new_message: msg } if filter_watcher_msg(msg) => {
            let http = serenity_ctx.http();
            let sources = LiveSources::new(data, http);
            let responder = MessageResponder::new(http, msg);
            let mut rng = rand::rngs::StdRng::from_rng(rand::thread_rng()).expect("valid rng");

            crate::commands::klan::dispatcher()
                .handle(&msg.content, &sources, &responder, &mut rng)
                .await?;
        }
        _ => (),
    }

    Ok(())
}

pub fn poise<'a>(
    serenity_ctx: &'a serenity::Context,
    event: &'a FullEvent,
    framework_ctx: FrameworkContext<'a, Data, CommandError>,
    data: &'a Data,
) -> Pin<Box<dyn Future<Output = Result<(), CommandError>> + Send + 'a>> {
    Box::pin(event_handler(serenity_ctx, event, framework_ctx, data))
}
