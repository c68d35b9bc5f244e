#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

mod commands;
mod errors;
mod replies;
mod sheets;
mod utils;

mod framework;
use framework::Data;

use poise::serenity_prelude::{self as serenity, GatewayIntents};

#[allow(unused_imports)]
use tracing::{debug, info, trace};

#[tokio::main]
async fn main() {
    framework::logging::init_tracing();

    info!("starting bot");

    let data = Data::new().await;
    let token = data.secrets.bot_token().to_owned();

    let framework = framework::poise::build(data);

    let mut client = serenity::Client::builder(token, GatewayIntents::all())
        .framework(framework)
        .await
        .expect("client should be valid");

    client
        .start()
        .await
        .expect("client should not return error");
}
