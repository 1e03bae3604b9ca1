//! Error types for the Polis engine.
//!
//! Per-bill data problems (missing location, unparsable date, missing
//! lookup values) are deliberately NOT errors: the calculators skip those
//! bills. Only configuration problems and unreadable indicator sources
//! surface as `Err`.

pub mod config_error;
pub mod error_code;
pub mod indicator_error;

pub use config_error::ConfigError;
pub use indicator_error::IndicatorError;

/// Maps every error variant to a stable machine-readable code string.
pub trait PolisErrorCode {
    fn error_code(&self) -> &'static str;
}

/// Umbrella error returned by the engine entry points.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Indicator(#[from] IndicatorError),
}

impl PolisErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Indicator(e) => e.error_code(),
        }
    }
}
