//! Minimal Google Sheets v4 client.
//!
//! The bot consumes exactly one operation: the ordered list of string
//! values in one column of one sheet.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("invalid values range: {0}")]
    Url(#[from] url::ParseError),

    #[error("sheets request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: reqwest::Client,
    spreadsheet: String,
    api_key: String,
}

impl SheetsClient {
    fn base_url() -> reqwest::Url {
        #[allow(clippy::unwrap_used)]
        reqwest::Url::parse("https://sheets.googleapis.com/v4/spreadsheets/").unwrap()
    }

    pub fn new(spreadsheet: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            spreadsheet: spreadsheet.into(),
            api_key: api_key.into(),
        }
    }

    fn values_url(&self, range: &str) -> Result<reqwest::Url, url::ParseError> {
        Self::base_url().join(&format!("{}/values/{}", self.spreadsheet, range))
    }

    /// Fetches one column of one sheet, top to bottom. Trailing empty
    /// cells never come back from the API, so an unused column is an
    /// empty list, not a list of blanks.
    pub async fn column_values(
        &self,
        sheet: &str,
        column: &str,
    ) -> Result<Vec<String>, SheetsError> {
        let range = format!("'{sheet}'!{column}:{column}");

        let response = self
            .client
            .get(self.values_url(&range)?)
            .query(&[("majorDimension", "COLUMNS"), ("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let values: ValueRange = response.json().await?;
        Ok(values.into_column())
    }
}

/// Response shape of the `values` endpoint. A range with no data at
/// all comes back without a `values` field.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl ValueRange {
    fn into_column(self) -> Vec<String> {
        self.values.into_iter().next().unwrap_or_default()
    }
}
