//! Indicator time-series rows and per-bill effects.

use serde::{Deserialize, Serialize};

/// One normalized indicator observation: a city/state value for a half-year.
///
/// City and state are upper-cased and trimmed at load time so that lookups
/// are insensitive to the casing of the backing source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub city: String,
    pub state: String,
    pub year: i32,
    /// Half-year within `year`: 1 = Jan–Jun, 2 = Jul–Dec.
    pub semester: u8,
    pub value: f64,
}

/// Percent change of an indicator for one bill over the chosen window.
///
/// Only produced when both the presentation half-year and the forward
/// half-year resolve to values; skipped bills leave no trace here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorEffect {
    /// Index of the source bill.
    pub index: usize,
    pub municipality: String,
    pub state: String,
    pub action: String,
    /// Presentation date of the source bill, `YYYY-MM-DD…`.
    pub presented_at: String,
    /// Signed percent change, `(future - current) / current * 100`.
    pub effect: f64,
}
