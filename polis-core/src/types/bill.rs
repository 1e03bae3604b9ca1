//! Legislative bill records.

use serde::{Deserialize, Serialize};

/// One legislative action, as returned by the upstream retrieval service.
///
/// Municipality, state, and presentation date are optional because the
/// upstream sources are incomplete; the effect calculator skips bills that
/// lack any of them rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillRecord {
    /// Stable index assigned by the retrieval service.
    pub index: usize,
    /// Municipality the bill was presented in.
    #[serde(default)]
    pub municipality: Option<String>,
    /// Two-letter state code.
    #[serde(default)]
    pub state: Option<String>,
    /// Action text, the normative content used for clustering.
    pub action: String,
    /// Original summary (ementa), when available.
    #[serde(default)]
    pub summary: Option<String>,
    /// Presentation date, ISO-like `YYYY-MM-DD…`.
    #[serde(default)]
    pub presented_at: Option<String>,
    /// Canonicalized link to the official bill page.
    #[serde(default)]
    pub source_url: Option<String>,
}

impl BillRecord {
    /// Minimal constructor used by tests and callers that only care about
    /// the clustering path.
    pub fn new(index: usize, municipality: &str, state: &str, action: &str) -> Self {
        Self {
            index,
            municipality: Some(municipality.to_string()),
            state: Some(state.to_string()),
            action: action.to_string(),
            summary: None,
            presented_at: None,
            source_url: None,
        }
    }

    /// Attach a presentation date.
    pub fn presented_at(mut self, date: &str) -> Self {
        self.presented_at = Some(date.to_string());
        self
    }
}
