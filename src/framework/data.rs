use std::sync::Arc;

use tracing::{info, warn};
use tracing_unwrap::ResultExt;

use crate::{
    replies::{StickerRef, TtlCache},
    sheets::SheetsClient,
};

use super::{config::Config, secrets::Secrets};

/// Shared state handed to every command and watcher.
#[derive(Clone)]
pub struct Data {
    pub(crate) config: Config,
    pub(crate) secrets: Secrets,
    pub(crate) sheets: SheetsClient,

    pub(crate) lines: Arc<TtlCache<Vec<String>>>,
    pub(crate) stickers: Arc<TtlCache<Vec<StickerRef>>>,
}

impl Data {
    /// Loads config and secrets and builds the service handles. Any
    /// failure here is fatal; the bot has nothing to fall back to.
    pub(crate) async fn new() -> Self {
        dotenvy::dotenv().ok();

        let config_file = if let Ok(path) = std::env::var("KLANBOT_TOML") {
            info!(path, "looking for config file with KLANBOT_TOML...");
            path
        } else {
            let path = "./klanbot.toml".to_owned();
            warn!(path, "KLANBOT_TOML env unset, using default path");
            path
        };

        let config: Config = ::config::Config::builder()
            .add_source(::config::File::new(&config_file, ::config::FileFormat::Toml))
            .build()
            .expect_or_log("config file could not be loaded")
            .try_deserialize()
            .expect_or_log("configuration could not be parsed");

        info!("config loaded");

        let secrets = Secrets::load(config.secrets_dir())
            .await
            .expect_or_log("secrets could not be loaded");

        let sheets = SheetsClient::new(config.sheets.spreadsheet(), secrets.sheets_api_key());

        let lines = Arc::new(TtlCache::new("spreadsheet lines", config.sheets.refresh()));
        let stickers = Arc::new(TtlCache::new("sticker collection", config.stickers.refresh()));

        Self {
            config,
            secrets,
            sheets,
            lines,
            stickers,
        }
    }

    pub(crate) const fn config(&self) -> &Config {
        &self.config
    }
}
