//! Error types for the intake backend.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Sheet error: {0}")]
    Sheet(#[from] SheetError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid service account credentials: {0}")]
    InvalidCredentials(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Spreadsheet adapter errors.
///
/// Handlers catch these at the boundary, log, and keep serving — none of
/// them are fatal to a request beyond the error envelope `/find_client`
/// returns.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sheets API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Token exchange failed: {0}")]
    Token(String),

    #[error("Failed to sign token assertion: {0}")]
    Signing(String),

    #[error("Malformed sheet response: {0}")]
    MalformedResponse(String),
}

/// Result type alias for the intake backend.
pub type Result<T> = std::result::Result<T, Error>;
