use std::{fmt::Display, path::Path};

/// The two credentials the bot cannot run without. Loaded once at
/// startup; never inspected beyond handing them to the two service
/// clients.
#[derive(Clone, Debug)]
pub struct Secrets {
    bot_token: String,
    sheets_api_key: String,
}

impl Secrets {
    pub async fn from_store(store: impl SecretStore) -> Result<Self, MissingSecretError> {
        let (bot_token, sheets_api_key) = tokio::try_join!(
            store.require(SecretKey::BotToken),
            store.require(SecretKey::SheetsApiKey),
        )
        .map_err(|key: SecretKey| MissingSecretError { secret: key })?;

        Ok(Self {
            bot_token,
            sheets_api_key,
        })
    }

    /// Environment variables first, falling back to one-file-per-secret
    /// in `dir`.
    pub async fn load(dir: &Path) -> Result<Self, MissingSecretError> {
        if let Ok(secrets) = Self::from_store(SecretEnv).await {
            return Ok(secrets);
        }

        Self::from_store(SecretFiles { directory: dir }).await
    }

    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    pub fn sheets_api_key(&self) -> &str {
        &self.sheets_api_key
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecretKey {
    BotToken,
    SheetsApiKey,
}

impl Display for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::BotToken => "bot_token",
            Self::SheetsApiKey => "sheets_api_key",
        })
    }
}

impl SecretKey {
    fn env_var(self) -> &'static str {
        match self {
            Self::BotToken => "KLANBOT_BOT_TOKEN",
            Self::SheetsApiKey => "KLANBOT_SHEETS_API_KEY",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("missing secret: {secret}")]
pub struct MissingSecretError {
    secret: SecretKey,
}

pub trait SecretStore {
    async fn get(&self, secret: SecretKey) -> Option<String>;

    async fn require(&self, secret: SecretKey) -> Result<String, SecretKey> {
        self.get(secret).await.ok_or(secret)
    }
}

pub struct SecretFiles<'path> {
    directory: &'path Path,
}

impl SecretStore for SecretFiles<'_> {
    async fn get(&self, secret: SecretKey) -> Option<String> {
        tokio::fs::read_to_string(self.directory.join(secret.to_string()))
            .await
            .ok()
            .map(|contents| contents.trim_end().to_owned())
    }
}

pub struct SecretEnv;

impl SecretStore for SecretEnv {
    async fn get(&self, secret: SecretKey) -> Option<String> {
        std::env::var(secret.env_var()).ok()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn file_store_trims_trailing_newlines() {
        let dir = std::env::temp_dir().join("klanbot-secrets-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join("bot_token"), "token-value\n")
            .await
            .unwrap();

        let store = SecretFiles { directory: &dir };
        assert_eq!(
            store.get(SecretKey::BotToken).await.as_deref(),
            Some("token-value")
        );

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn missing_file_reports_the_key() {
        let dir = std::env::temp_dir().join("klanbot-secrets-missing");
        tokio::fs::create_dir_all(&dir).await.unwrap();

        let err = Secrets::from_store(SecretFiles { directory: &dir })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "missing secret: bot_token");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
