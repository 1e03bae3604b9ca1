//! Indicator source errors.

use std::path::PathBuf;

use super::error_code;
use super::PolisErrorCode;

/// Errors raised while reading an indicator's backing source.
///
/// These are fatal for the request: there is no partial-load or retry
/// semantics. Malformed individual rows are NOT errors; the store drops
/// them silently.
#[derive(Debug, thiserror::Error)]
pub enum IndicatorError {
    #[error("Failed to open indicator source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Indicator source {path} is unreadable: {message}")]
    Unreadable { path: PathBuf, message: String },
}

impl PolisErrorCode for IndicatorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::INDICATOR_SOURCE_IO,
            Self::Unreadable { .. } => error_code::INDICATOR_SOURCE_MALFORMED,
        }
    }
}
