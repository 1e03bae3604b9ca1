//! Window search: evaluate candidate effect windows and rank them.
//!
//! Each window's computation is pure given the same bills and spec, so the
//! fan-out runs on rayon and collects in window order.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use rayon::prelude::*;
use tracing::info;

use polis_core::config::IndicatorSpec;
use polis_core::errors::EngineError;
use polis_core::types::{
    BillRecord, IndicatorEffect, ScoredAction, WindowResult, WindowSearchOutcome,
};

use crate::indicators::effects::compute_effects;
use crate::indicators::store::IndicatorStore;
use crate::policies::clustering::cluster_policies;

/// Parameters for one window-search run.
#[derive(Debug, Clone)]
pub struct WindowSearchParams {
    /// The caller's selected effect window in months.
    pub window_months: i32,
    /// Additional candidate windows; duplicates of the selected window (or
    /// of each other) are evaluated once.
    pub extra_windows: Vec<i32>,
    /// Minimum members for a group to become a policy cluster.
    pub min_group_members: usize,
    /// Jaccard threshold in [0, 1] for joining a cluster.
    pub similarity_threshold: f64,
}

/// Evaluate every candidate window and rank the results.
///
/// The indicator is applied only when `use_indicator` is set AND a spec is
/// given; otherwise every bill becomes an unscored candidate and cluster
/// statistics come out empty.
pub fn evaluate_windows(
    store: &IndicatorStore,
    bills: &[BillRecord],
    spec: Option<&IndicatorSpec>,
    use_indicator: bool,
    params: &WindowSearchParams,
) -> Result<WindowSearchOutcome, EngineError> {
    let windows = candidate_windows(params.window_months, &params.extra_windows);
    let apply_indicator = use_indicator && spec.is_some();

    // Warm the row cache before fanning out: the fatal I/O path surfaces
    // once, and the workers share a single load.
    if apply_indicator {
        if let Some(spec) = spec {
            store.rows(spec)?;
        }
    }

    let results = windows
        .par_iter()
        .map(|&window| evaluate_one(store, bills, spec, apply_indicator, window, params))
        .collect::<Result<Vec<WindowResult>, EngineError>>()?;

    let best_quality_windows = rank_windows(&results, quality_key);
    let best_effect_windows = rank_windows(&results, effect_key);

    info!(
        windows = results.len(),
        used_indicator = apply_indicator,
        "window search complete"
    );
    Ok(WindowSearchOutcome {
        results,
        best_quality_windows,
        best_effect_windows,
    })
}

/// The deduplicated candidate set, always containing the selected window,
/// in ascending order.
fn candidate_windows(selected: i32, extra: &[i32]) -> Vec<i32> {
    let mut set: BTreeSet<i32> = extra.iter().copied().collect();
    set.insert(selected);
    set.into_iter().collect()
}

fn evaluate_one(
    store: &IndicatorStore,
    bills: &[BillRecord],
    spec: Option<&IndicatorSpec>,
    apply_indicator: bool,
    window_months: i32,
    params: &WindowSearchParams,
) -> Result<WindowResult, EngineError> {
    let tuples = match spec {
        Some(spec) if apply_indicator => {
            let effects = compute_effects(store, bills, spec, window_months)?;
            scored_tuples(&effects, spec.positive_is_good)
        }
        _ => unscored_tuples(bills),
    };

    let clusters = cluster_policies(&tuples, params.min_group_members, params.similarity_threshold);
    Ok(WindowResult {
        window_months,
        used_indicator: apply_indicator,
        total_candidates: tuples.len(),
        clusters,
    })
}

/// Build candidate tuples from computed effects.
///
/// Sign adjustment lives here and only here: when a rising indicator is
/// undesirable the score is the negated effect, so a higher score always
/// reads "the indicator moved favorably". Bills without an effect were
/// already skipped by the calculator and never become candidates.
fn scored_tuples(effects: &[IndicatorEffect], positive_is_good: bool) -> Vec<ScoredAction> {
    effects
        .iter()
        .map(|e| ScoredAction {
            municipality: e.municipality.clone(),
            action: e.action.clone(),
            score: if positive_is_good { e.effect } else { -e.effect },
            effect: Some(e.effect),
        })
        .collect()
}

/// Without an indicator every bill is a candidate, carrying no effect.
fn unscored_tuples(bills: &[BillRecord]) -> Vec<ScoredAction> {
    bills
        .iter()
        .map(|bill| ScoredAction {
            municipality: bill.municipality.clone().unwrap_or_default(),
            action: bill.action.clone(),
            score: 0.0,
            effect: None,
        })
        .collect()
}

/// Rank windows by a per-result key, descending; ties ascending by window
/// length. Results contributing the sentinel key (no clusters, or no
/// favorable cluster) rank last but are never omitted, so the ranking is a
/// total order over the evaluated set.
fn rank_windows(results: &[WindowResult], key: fn(&WindowResult) -> f64) -> Vec<i32> {
    let mut keyed: Vec<(i32, f64)> = results
        .iter()
        .map(|result| (result.window_months, key(result)))
        .collect();
    keyed.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    keyed.into_iter().map(|(window, _)| window).collect()
}

/// Best cluster quality in the window.
fn quality_key(result: &WindowResult) -> f64 {
    result
        .clusters
        .iter()
        .filter_map(|c| c.quality_score)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Strongest favorable mean effect: the largest positive sign-adjusted
/// cluster mean.
fn effect_key(result: &WindowResult) -> f64 {
    result
        .clusters
        .iter()
        .filter_map(|c| c.effect_mean)
        .filter(|mean| *mean > 0.0)
        .fold(f64::NEG_INFINITY, f64::max)
}
