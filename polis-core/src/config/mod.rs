//! Engine configuration, loaded from TOML at process start.

mod indicator_spec;

pub use indicator_spec::{IndicatorDescriptor, IndicatorRegistry, IndicatorSpec};

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ConfigError;

/// Top-level configuration for the policy engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PolisConfig {
    /// Registered indicator time series.
    pub indicators: Vec<IndicatorSpec>,
    /// Defaults for the clustering / window-search parameters.
    pub search: SearchConfig,
}

/// Configuration for the clustering and window-search subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// Minimum members for a group to become a policy. Default: 2.
    pub min_group_members: Option<usize>,
    /// Jaccard threshold for joining a group. Default: 0.75.
    pub similarity_threshold: Option<f64>,
    /// Effect window in months. Default: 6.
    pub effect_window_months: Option<i32>,
    /// Additional candidate windows evaluated alongside the selected one.
    #[serde(default)]
    pub extra_windows: Vec<i32>,
}

impl SearchConfig {
    /// Returns the effective minimum group size, defaulting to 2.
    pub fn effective_min_group_members(&self) -> usize {
        self.min_group_members.unwrap_or(2)
    }

    /// Returns the effective similarity threshold, defaulting to 0.75.
    pub fn effective_similarity_threshold(&self) -> f64 {
        self.similarity_threshold.unwrap_or(0.75)
    }

    /// Returns the effective effect window, defaulting to 6 months.
    pub fn effective_effect_window_months(&self) -> i32 {
        self.effect_window_months.unwrap_or(6)
    }
}

impl PolisConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        debug!(
            path = %path.display(),
            indicators = config.indicators.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Build the indicator registry from the configured specs.
    pub fn registry(&self) -> IndicatorRegistry {
        IndicatorRegistry::new(self.indicators.iter().cloned())
    }
}
