//! Report assembly: the chosen window's clusters enriched with bill
//! metadata, plus the window recommendations.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use polis_core::types::{BillRecord, WindowSearchOutcome};

/// One recommended action with presentation metadata resolved from the
/// source bills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportedAction {
    pub municipality: String,
    pub action: String,
    /// Raw percent change, when an indicator was used.
    pub effect: Option<f64>,
    pub presented_at: Option<String>,
    pub summary: Option<String>,
    pub source_url: Option<String>,
}

/// One recommended policy group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportedPolicy {
    pub policy: String,
    pub effect_mean: Option<f64>,
    pub effect_std: Option<f64>,
    pub quality_score: Option<f64>,
    pub actions: Vec<ReportedAction>,
}

/// Presentation payload for one window-search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyReport {
    /// Id of the indicator in use, if any.
    pub indicator: Option<String>,
    pub used_indicator: bool,
    pub window_months: i32,
    pub total_candidates: usize,
    pub policies: Vec<ReportedPolicy>,
    pub best_quality_windows: Vec<i32>,
    pub best_effect_windows: Vec<i32>,
}

/// Assemble the user-facing report for the selected window.
///
/// Metadata is resolved by (municipality, action); when several bills share
/// both, the first one in bill order wins.
pub fn assemble_report(
    outcome: &WindowSearchOutcome,
    selected_window: i32,
    bills: &[BillRecord],
    indicator_id: Option<&str>,
) -> PolicyReport {
    let mut by_key: FxHashMap<(&str, &str), &BillRecord> = FxHashMap::default();
    for bill in bills {
        let municipality = bill.municipality.as_deref().unwrap_or_default();
        by_key.entry((municipality, bill.action.as_str())).or_insert(bill);
    }

    let result = outcome.result_for(selected_window);
    let policies = result
        .map(|r| {
            r.clusters
                .iter()
                .map(|cluster| ReportedPolicy {
                    policy: cluster.policy.clone(),
                    effect_mean: cluster.effect_mean,
                    effect_std: cluster.effect_std,
                    quality_score: cluster.quality_score,
                    actions: cluster
                        .actions
                        .iter()
                        .map(|member| {
                            let bill = by_key
                                .get(&(member.municipality.as_str(), member.action.as_str()))
                                .copied();
                            ReportedAction {
                                municipality: member.municipality.clone(),
                                action: member.action.clone(),
                                effect: member.effect,
                                presented_at: bill.and_then(|b| b.presented_at.clone()),
                                summary: bill.and_then(|b| b.summary.clone()),
                                source_url: bill.and_then(|b| b.source_url.clone()),
                            }
                        })
                        .collect(),
                })
                .collect()
        })
        .unwrap_or_default();

    PolicyReport {
        indicator: result
            .filter(|r| r.used_indicator)
            .and(indicator_id)
            .map(str::to_string),
        used_indicator: result.map(|r| r.used_indicator).unwrap_or(false),
        window_months: selected_window,
        total_candidates: result.map(|r| r.total_candidates).unwrap_or(0),
        policies,
        best_quality_windows: outcome.best_quality_windows.clone(),
        best_effect_windows: outcome.best_effect_windows.clone(),
    }
}
