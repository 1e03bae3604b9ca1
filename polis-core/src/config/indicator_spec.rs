//! Indicator specs and the id-keyed registry.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

fn default_city_col() -> String {
    "municipio_norm".to_string()
}

fn default_value_col() -> String {
    "valor".to_string()
}

/// One registered indicator time series.
///
/// Immutable after process start; the engine never mutates specs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSpec {
    /// Identifier used by callers to select the indicator.
    pub id: String,
    /// Location of the backing CSV source.
    pub path: PathBuf,
    /// Column holding the (normalized) city name.
    #[serde(default = "default_city_col")]
    pub city_col: String,
    /// Column holding the indicator value.
    #[serde(default = "default_value_col")]
    pub value_col: String,
    /// Human-readable label for presentation.
    #[serde(default)]
    pub alias: Option<String>,
    /// Whether a rising value is desirable (e.g. false for homicide rates).
    #[serde(default)]
    pub positive_is_good: bool,
    /// Floor below which a baseline value is too unreliable to measure an
    /// effect from; bills with `current < min_value` are skipped.
    #[serde(default)]
    pub min_value: f64,
}

impl IndicatorSpec {
    /// Display label, falling back to the id when no alias is configured.
    pub fn display_label(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.id)
    }
}

/// Presentation-facing description of a registered indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorDescriptor {
    pub id: String,
    pub path: PathBuf,
    pub city_col: String,
    pub value_col: String,
    pub alias: String,
    pub positive_is_good: bool,
    pub min_value: f64,
}

/// Registry of indicator specs, looked up by id.
///
/// Backed by a BTreeMap so `ids()` (and the valid-id list in lookup errors)
/// comes out sorted and stable.
#[derive(Debug, Clone, Default)]
pub struct IndicatorRegistry {
    specs: BTreeMap<String, IndicatorSpec>,
}

impl IndicatorRegistry {
    /// Build a registry from specs. A later spec with a duplicate id
    /// replaces the earlier one.
    pub fn new(specs: impl IntoIterator<Item = IndicatorSpec>) -> Self {
        Self {
            specs: specs.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }

    /// Look up a spec by id.
    ///
    /// Unknown ids are a validation failure carrying the full list of valid
    /// ids, so callers can surface it directly.
    pub fn get(&self, id: &str) -> Result<&IndicatorSpec, ConfigError> {
        self.specs.get(id).ok_or_else(|| ConfigError::UnknownIndicator {
            id: id.to_string(),
            valid_ids: self.ids(),
        })
    }

    /// Sorted list of registered indicator ids.
    pub fn ids(&self) -> Vec<String> {
        self.specs.keys().cloned().collect()
    }

    /// Descriptors for every registered indicator, sorted by id.
    pub fn descriptors(&self) -> Vec<IndicatorDescriptor> {
        self.specs
            .values()
            .map(|s| IndicatorDescriptor {
                id: s.id.clone(),
                path: s.path.clone(),
                city_col: s.city_col.clone(),
                value_col: s.value_col.clone(),
                alias: s.display_label().to_string(),
                positive_is_good: s.positive_is_good,
                min_value: s.min_value,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
