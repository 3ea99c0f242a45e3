//! Error types for healthprobe

use thiserror::Error;

/// Engine error type
#[derive(Error, Debug)]
pub enum Error {
    /// The job source is unreadable or malformed. Fatal before probing.
    #[error("source error: {0}")]
    Source(String),

    /// The token exchange failed. Fatal before probing.
    #[error("credential error: {0}")]
    Credential(String),

    /// The final report POST could not be delivered.
    #[error("report error: {0}")]
    Report(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a source error
    pub fn source(msg: impl Into<String>) -> Self {
        Error::Source(msg.into())
    }

    /// Build a credential error
    pub fn credential(msg: impl Into<String>) -> Self {
        Error::Credential(msg.into())
    }

    /// Build a report error
    pub fn report(msg: impl Into<String>) -> Self {
        Error::Report(msg.into())
    }

    /// Build a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Build a configuration error for a missing required field
    pub fn missing_config(field: &str) -> Self {
        Error::Config(format!("missing required field: {field}"))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
