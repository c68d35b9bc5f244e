use std::path::{Path, PathBuf};

use poise::serenity_prelude::{ActivityData, ChannelId, GuildId};
use serde::Deserialize;
use tokio::time::Duration;
use tracing::{debug, error, info, warn};

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub bot: BotConfig,
    pub sheets: SheetsConfig,
    pub stickers: StickersConfig,
    pub watchers: WatchersConfig,

    #[serde(default = "default_secrets_dir")]
    secrets_dir: PathBuf,
}

impl Config {
    pub fn secrets_dir(&self) -> &Path {
        &self.secrets_dir
    }
}

fn default_secrets_dir() -> PathBuf {
    PathBuf::from("./secrets")
}

#[derive(Deserialize, Debug, Clone)]
pub struct BotConfig {
    testing_server: Option<GuildId>,
    activity: Option<String>,
    prefix: String,
    status_channel: Option<ChannelId>,
}

impl BotConfig {
    pub fn testing_server(&self) -> Option<&GuildId> {
        if self.testing_server.is_none() {
            warn!("no testing server set in config, slash commands will not be registered");
        }

        self.testing_server.as_ref()
    }

    pub fn activity(&self) -> Option<ActivityData> {
        let activity = self.activity.as_deref()?;

        if activity.is_empty() {
            warn!("bot.activity provided in config as empty string, defaulting to none");
            return None;
        }

        let parsed_activity = if let Some(name) = activity.strip_prefix("playing ") {
            ActivityData::playing(name)
        } else if let Some(name) = activity.strip_prefix("listening to ") {
            ActivityData::listening(name)
        } else if let Some(name) = activity.strip_prefix("watching ") {
            ActivityData::watching(name)
        } else if let Some(name) = activity.strip_prefix("competing in ") {
            ActivityData::competing(name)
        } else {
            error!("bot.activity in config could not be parsed - must start with `playing`, `listening to`, `watching` or `competing in`");
            warn!("disabling bot activity");
            return None;
        };

        debug!(
            "bot.activity parsed as {:?}: {}",
            parsed_activity.kind, parsed_activity.name
        );
        info!("successfully parsed bot activity from config");

        Some(parsed_activity)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn status_channel(&self) -> Option<ChannelId> {
        self.status_channel
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct SheetsConfig {
    spreadsheet: String,
    sheet: String,
    column: String,

    #[serde(default = "SheetsConfig::default_refresh_seconds")]
    refresh_seconds: u64,
}

impl SheetsConfig {
    const fn default_refresh_seconds() -> u64 {
        5
    }

    pub fn spreadsheet(&self) -> &str {
        &self.spreadsheet
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn refresh(&self) -> Duration {
        Duration::from_secs(self.refresh_seconds)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct StickersConfig {
    guild: GuildId,

    #[serde(default = "StickersConfig::default_refresh_seconds")]
    refresh_seconds: u64,
}

impl StickersConfig {
    const fn default_refresh_seconds() -> u64 {
        60
    }

    pub fn guild(&self) -> GuildId {
        self.guild
    }

    pub fn refresh(&self) -> Duration {
        Duration::from_secs(self.refresh_seconds)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct WatchersConfig {
    allow_by_default: bool,
    channels: Option<Vec<WatchersChannelConfig>>,
}

impl WatchersConfig {
    pub fn allow_by_default(&self) -> bool {
        self.allow_by_default
    }

    pub fn channels(&self) -> Option<&Vec<WatchersChannelConfig>> {
        self.channels.as_ref()
    }

    pub fn channel_allowed(&self, id: ChannelId) -> bool {
        if let Some(channels) = self.channels() {
            if let Some(channel) = channels.iter().find(|c| c.id == id) {
                channel.allow
            } else {
                self.allow_by_default()
            }
        } else {
            self.allow_by_default()
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct WatchersChannelConfig {
    id: ChannelId,
    allow: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = r#"
        [bot]
        prefix = "!"
        activity = "watching the clan chat"
        testing_server = 101
        status_channel = 102

        [sheets]
        spreadsheet = "sheet-id"
        sheet = "Sheet1"
        column = "A"

        [stickers]
        guild = 103
        refresh_seconds = 120

        [watchers]
        allow_by_default = true
        channels = [{ id = 104, allow = false }]
    "#;

    fn sample() -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(SAMPLE, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn parses_the_sample() {
        let config = sample();

        assert_eq!(config.bot.prefix(), "!");
        assert_eq!(config.sheets.spreadsheet(), "sheet-id");
        assert_eq!(config.sheets.sheet(), "Sheet1");
        assert_eq!(config.sheets.column(), "A");
        assert_eq!(config.stickers.guild(), GuildId::new(103));
        assert_eq!(config.secrets_dir(), Path::new("./secrets"));
    }

    #[test]
    fn refresh_defaults_differ_per_cache() {
        let config = sample();

        assert_eq!(config.sheets.refresh(), Duration::from_secs(5));
        assert_eq!(config.stickers.refresh(), Duration::from_secs(120));
    }

    #[test]
    fn parses_the_activity() {
        let activity = sample().bot.activity().unwrap();
        assert_eq!(activity.name, "the clan chat");
    }

    #[test]
    fn watcher_rules_resolve_per_channel() {
        let watchers = sample().watchers;

        assert!(watchers.channel_allowed(ChannelId::new(999)));
        assert!(!watchers.channel_allowed(ChannelId::new(104)));
    }
}
