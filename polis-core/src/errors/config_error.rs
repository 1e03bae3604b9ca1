//! Configuration-layer errors.

use std::path::PathBuf;

use super::error_code;
use super::PolisErrorCode;

/// Errors raised while loading config or resolving indicator specs.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    Parse { message: String },

    #[error("Indicator '{id}' is not registered; valid ids: {valid_ids:?}")]
    UnknownIndicator { id: String, valid_ids: Vec<String> },
}

impl PolisErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::CONFIG_IO,
            Self::Parse { .. } => error_code::CONFIG_PARSE,
            Self::UnknownIndicator { .. } => error_code::UNKNOWN_INDICATOR,
        }
    }
}
