//! Indicator row store: CSV ingestion + process-wide cache.
//!
//! Rows are loaded once per spec id and kept for the process lifetime.
//! Malformed rows are dropped, never raised; an unreadable source is fatal.

use std::sync::Arc;

use moka::sync::Cache;
use tracing::{debug, info};

use polis_core::config::IndicatorSpec;
use polis_core::errors::IndicatorError;
use polis_core::types::IndicatorRow;

/// Process-wide store of indicator rows, keyed by spec id.
///
/// Entries are never invalidated; a fresh process picks up file changes.
/// Loading is a pure function of the backing file, so a concurrent first
/// access for the same id at worst performs a redundant idempotent read.
pub struct IndicatorStore {
    cache: Cache<String, Arc<Vec<IndicatorRow>>>,
}

impl IndicatorStore {
    /// Create a store with the given capacity (number of indicator specs).
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            cache: Cache::new(capacity),
        }
    }

    /// Rows for `spec`, reading and caching the backing source on first
    /// access for its id.
    pub fn rows(&self, spec: &IndicatorSpec) -> Result<Arc<Vec<IndicatorRow>>, IndicatorError> {
        if let Some(rows) = self.cache.get(spec.id.as_str()) {
            return Ok(rows);
        }
        let rows = Arc::new(load_rows(spec)?);
        self.cache.insert(spec.id.clone(), Arc::clone(&rows));
        Ok(rows)
    }

    /// Number of cached indicator series.
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl Default for IndicatorStore {
    fn default() -> Self {
        // A deployment registers at most a handful of indicators.
        Self::with_capacity(64)
    }
}

/// Read and normalize every row of the spec's backing CSV.
///
/// Required columns: the spec's city column, `uf`, `ano`, `semestre`, and
/// the spec's value column. A row missing or malforming any of them is
/// dropped; city/state are upper-cased and trimmed; year/semester/value must
/// parse as finite numbers, with semester restricted to 1 or 2.
pub fn load_rows(spec: &IndicatorSpec) -> Result<Vec<IndicatorRow>, IndicatorError> {
    let file = std::fs::File::open(&spec.path).map_err(|source| IndicatorError::Io {
        path: spec.path.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader
        .headers()
        .map_err(|e| IndicatorError::Unreadable {
            path: spec.path.clone(),
            message: e.to_string(),
        })?
        .clone();

    let city_idx = column_index(&headers, &spec.city_col);
    let state_idx = column_index(&headers, "uf");
    let year_idx = column_index(&headers, "ano");
    let semester_idx = column_index(&headers, "semestre");
    let value_idx = column_index(&headers, &spec.value_col);

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for record in reader.records() {
        let Ok(record) = record else {
            dropped += 1;
            continue;
        };
        match parse_row(&record, city_idx, state_idx, year_idx, semester_idx, value_idx) {
            Some(row) => rows.push(row),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(indicator = %spec.id, dropped, "dropped unparsable indicator rows");
    }
    info!(indicator = %spec.id, rows = rows.len(), "loaded indicator source");
    Ok(rows)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn parse_row(
    record: &csv::StringRecord,
    city_idx: Option<usize>,
    state_idx: Option<usize>,
    year_idx: Option<usize>,
    semester_idx: Option<usize>,
    value_idx: Option<usize>,
) -> Option<IndicatorRow> {
    let city = normalized_name(record.get(city_idx?)?)?;
    let state = normalized_name(record.get(state_idx?)?)?;
    let year = parse_finite(record.get(year_idx?)?)? as i32;
    let semester = parse_finite(record.get(semester_idx?)?)? as i64;
    if semester != 1 && semester != 2 {
        return None;
    }
    let value = parse_finite(record.get(value_idx?)?)?;
    Some(IndicatorRow {
        city,
        state,
        year,
        semester: semester as u8,
        value,
    })
}

/// Upper-cased, trimmed, non-empty name.
fn normalized_name(field: &str) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_uppercase())
}

/// Parse a numeric field, rejecting NaN/infinity. Integer columns exported
/// as floats ("2020.0") truncate cleanly.
fn parse_finite(field: &str) -> Option<f64> {
    let value: f64 = field.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
