//! # polis-core
//!
//! Foundation crate for the Polis policy recommendation engine.
//! Defines the shared types, errors, config, and tracing setup.
//! The analysis crate depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{IndicatorRegistry, IndicatorSpec, PolisConfig};
pub use errors::error_code;
pub use errors::PolisErrorCode;
pub use errors::{ConfigError, EngineError, IndicatorError};
pub use types::collections::{FxHashMap, FxHashSet};
