//! Configuration, read from the environment once at startup.
//!
//! Handlers never touch the environment themselves; whatever they need is
//! built here and injected into the router state.

use crate::error::ConfigError;
use crate::sheets::{ServiceAccountKey, SheetsClient};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 10000;
/// Default worksheet tab name.
pub const DEFAULT_WORKSHEET: &str = "Sheet1";

/// Spreadsheet persistence configuration.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub key: ServiceAccountKey,
    pub spreadsheet_id: String,
    pub worksheet: String,
}

impl SheetsConfig {
    /// Build from environment variables.
    ///
    /// `Ok(None)` when `GOOGLE_SERVICE_ACCOUNT_JSON` is unset (persistence
    /// deliberately disabled); `Err` when it is set but unusable. Callers
    /// log the two cases differently but degrade to disabled either way.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let Ok(blob) = std::env::var("GOOGLE_SERVICE_ACCOUNT_JSON") else {
            return Ok(None);
        };

        let key = ServiceAccountKey::from_json(&blob)?;

        let spreadsheet_id = std::env::var("INTAKE_SPREADSHEET_ID")
            .map_err(|_| ConfigError::MissingEnvVar("INTAKE_SPREADSHEET_ID".to_string()))?;

        let worksheet =
            std::env::var("INTAKE_WORKSHEET").unwrap_or_else(|_| DEFAULT_WORKSHEET.to_string());

        Ok(Some(Self {
            key,
            spreadsheet_id,
            worksheet,
        }))
    }

    /// Build the Sheets client for this configuration.
    pub fn client(&self) -> SheetsClient {
        SheetsClient::new(
            self.key.clone(),
            self.spreadsheet_id.clone(),
            self.worksheet.clone(),
        )
    }
}

/// Listen port from `INTAKE_PORT`, falling back to the default on absence
/// or parse failure.
pub fn server_port() -> u16 {
    std::env::var("INTAKE_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
