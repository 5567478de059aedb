//! Error types for linelight
//!
//! The highlighting core itself never fails; these errors belong to the
//! collaborators around it (file loading, configuration, the CLI).

use thiserror::Error;

/// Result type alias for linelight operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown style tag: {0}")]
    UnknownStyleTag(String),

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidSetting { key: String, value: String },

    #[error("{0}")]
    Usage(String),
}
