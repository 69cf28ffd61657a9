use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Calendar fetch error: {0}")]
    #[diagnostic(code(viikkoraportti::fetch))]
    Fetch(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(viikkoraportti::config))]
    Config(String),

    #[error("Calendar payload error: {0}")]
    #[diagnostic(code(viikkoraportti::parse))]
    Parse(String),

    #[error(transparent)]
    #[diagnostic(code(viikkoraportti::io))]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    #[diagnostic(code(viikkoraportti::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type ReportResult<T> = Result<T, Error>;

/// Helper to create calendar fetch errors
pub fn fetch_error(message: &str) -> Error {
    Error::Fetch(message.to_string())
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create payload parse errors
pub fn parse_error(message: &str) -> Error {
    Error::Parse(message.to_string())
}
