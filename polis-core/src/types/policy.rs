//! Policy clusters and window-search results.

use serde::{Deserialize, Serialize};

/// Candidate tuple fed to the clustering engine.
///
/// `score` is sign-adjusted at tuple-building time so that a higher score
/// always means the indicator moved in the desirable direction, regardless
/// of the indicator's `positive_is_good` flag. `effect` keeps the raw signed
/// percent change, or `None` when no indicator was used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredAction {
    pub municipality: String,
    pub action: String,
    pub score: f64,
    pub effect: Option<f64>,
}

/// A member of a policy cluster, carrying the raw (non-adjusted) effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterMember {
    pub municipality: String,
    pub action: String,
    pub effect: Option<f64>,
}

/// A named group of similar legislative actions.
///
/// The statistics are `None` when no member carries an effect (indicator
/// not in use), never zero-filled placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyCluster {
    /// Representative label: the most frequent action text among members.
    pub policy: String,
    /// Mean of the sign-adjusted scores of effect-carrying members.
    pub effect_mean: Option<f64>,
    /// Population standard deviation of the same scores.
    pub effect_std: Option<f64>,
    /// Ranking signal, higher is better. Grows with member count, shrinks
    /// with score dispersion.
    pub quality_score: Option<f64>,
    /// Members in formation order.
    pub actions: Vec<ClusterMember>,
}

/// Outcome of one clustering run at a fixed effect window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowResult {
    /// Forward window length in months used for effect measurement.
    pub window_months: i32,
    /// Whether indicator effects were actually computed for this run.
    pub used_indicator: bool,
    /// Number of candidate tuples the clustering engine considered.
    pub total_candidates: usize,
    pub clusters: Vec<PolicyCluster>,
}

/// All evaluated windows plus the two recommendation rankings.
///
/// Both rankings are total orders over the evaluated window set: every
/// window appears exactly once, windows with no clusters rank last.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSearchOutcome {
    pub results: Vec<WindowResult>,
    /// Windows ordered by their best cluster quality, descending.
    pub best_quality_windows: Vec<i32>,
    /// Windows ordered by their strongest favorable mean effect, descending.
    pub best_effect_windows: Vec<i32>,
}

impl WindowSearchOutcome {
    /// The result evaluated at `window_months`, if that window was part of
    /// the candidate set.
    pub fn result_for(&self, window_months: i32) -> Option<&WindowResult> {
        self.results.iter().find(|r| r.window_months == window_months)
    }
}
