use rand::SeedableRng;

use crate::{
    replies::{
        discord::{CommandResponder, LiveSources},
        Dispatcher, ReplyError,
    },
    utils::Context,
};

macro_rules! list {
    ($($pub:vis $module:ident),+ $(,)?) => {
        $(
            $pub mod $module;
            use $module::$module;
        )+

        pub fn list() -> Vec<crate::utils::poise::Command> {
            vec![
                $($module()),+
            ]
        }
    };
}

list! {
    start,
    help,
    pub(crate) klan,
    random,
    sticker,
}

trait LogCommands {
    async fn log_command(&self);
}

impl LogCommands for Context<'_> {
    async fn log_command(&self) {
        let channel = self
            .channel_id()
            .name(self.http())
            .await
            .map_or("dms".to_string(), |c| format!("#{c}"));
        tracing::info!(
            "@{} ({}): {}",
            self.author().name,
            channel,
            self.invocation_string()
        );
    }
}

/// Runs a dispatcher against this invocation, with the live data
/// sources and a responder that answers where the command was called.
async fn dispatch(ctx: Context<'_>, dispatcher: Dispatcher) -> Result<(), ReplyError> {
    let sources = LiveSources::new(ctx.data(), ctx.http());
    let responder = CommandResponder::new(ctx);
    let mut rng = rand::rngs::StdRng::from_rng(rand::thread_rng()).expect("valid rng");

    dispatcher
        .handle(&ctx.invocation_string(), &sources, &responder, &mut rng)
        .await
}
