//! Value lookup keyed by (city, state, year, semester).

use rustc_hash::FxHashMap;

use polis_core::types::IndicatorRow;

type SemesterKey = (String, String, i32, u8);

/// Indicator values addressable by city/state/half-year.
///
/// When two rows share a key, the later row in input order wins. This is a
/// documented policy: sources occasionally re-ship a half-year with revised
/// values, and the revision comes later in the file.
#[derive(Debug, Default)]
pub struct IndicatorLookup {
    values: FxHashMap<SemesterKey, f64>,
}

impl IndicatorLookup {
    pub fn from_rows(rows: &[IndicatorRow]) -> Self {
        let mut values = FxHashMap::default();
        for row in rows {
            values.insert(
                (row.city.clone(), row.state.clone(), row.year, row.semester),
                row.value,
            );
        }
        Self { values }
    }

    /// Value at (city, state, year, semester). City and state must already
    /// be upper-cased and trimmed.
    pub fn get(&self, city: &str, state: &str, year: i32, semester: u8) -> Option<f64> {
        self.values
            .get(&(city.to_string(), state.to_string(), year, semester))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
