//! Greedy similarity clustering of scored actions.
//!
//! Algorithm:
//! 1. Walk tuples in input order, comparing each action's token set against
//!    every group's representative tokens.
//! 2. Join the most similar group at or above the threshold, else open a
//!    new group with this action as representative.
//! 3. Drop groups smaller than the minimum, label the rest, compute score
//!    statistics, and rank by quality.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use polis_core::types::{ClusterMember, PolicyCluster, ScoredAction};

use super::quality::{mean_and_std, quality_score};
use super::text::{jaccard_similarity, normalize_tokens};

struct Group {
    /// Token set of the first member; all similarity checks run against it.
    rep_tokens: Vec<String>,
    member_indices: Vec<usize>,
}

/// Partition scored actions into named policy clusters.
///
/// Similarity is computed on action text alone: identical actions from
/// different municipalities always land in the same group. Formation is
/// deterministic given input order: ties in the best-group search go to the
/// earliest group, label ties to the earliest member.
pub fn cluster_policies(
    tuples: &[ScoredAction],
    min_group_members: usize,
    similarity_threshold: f64,
) -> Vec<PolicyCluster> {
    if tuples.is_empty() {
        return Vec::new();
    }

    let mut groups: Vec<Group> = Vec::new();
    for (idx, tuple) in tuples.iter().enumerate() {
        let tokens = normalize_tokens(&tuple.action);

        let mut best_idx: Option<usize> = None;
        let mut best_sim = 0.0;
        for (group_idx, group) in groups.iter().enumerate() {
            let sim = jaccard_similarity(&tokens, &group.rep_tokens);
            if sim > best_sim {
                best_sim = sim;
                best_idx = Some(group_idx);
            }
        }

        match best_idx {
            Some(group_idx) if best_sim >= similarity_threshold => {
                groups[group_idx].member_indices.push(idx);
            }
            _ => groups.push(Group {
                rep_tokens: tokens,
                member_indices: vec![idx],
            }),
        }
    }

    let mut clusters: Vec<PolicyCluster> = groups
        .iter()
        .filter(|group| group.member_indices.len() >= min_group_members)
        .map(|group| build_cluster(group, tuples))
        .collect();

    // Best quality first; the sort is stable, so clusters without a quality
    // (and exact ties) keep formation order.
    clusters.sort_by(|a, b| {
        let ka = a.quality_score.unwrap_or(f64::NEG_INFINITY);
        let kb = b.quality_score.unwrap_or(f64::NEG_INFINITY);
        kb.partial_cmp(&ka).unwrap_or(Ordering::Equal)
    });
    clusters
}

fn build_cluster(group: &Group, tuples: &[ScoredAction]) -> PolicyCluster {
    let members: Vec<ClusterMember> = group
        .member_indices
        .iter()
        .map(|&i| ClusterMember {
            municipality: tuples[i].municipality.clone(),
            action: tuples[i].action.clone(),
            effect: tuples[i].effect,
        })
        .collect();

    // Statistics run over sign-adjusted scores of members that actually
    // carry an effect; with no indicator in use there are none.
    let scores: Vec<f64> = group
        .member_indices
        .iter()
        .filter(|&&i| tuples[i].effect.is_some())
        .map(|&i| tuples[i].score)
        .collect();

    let (effect_mean, effect_std, quality) = if scores.is_empty() {
        (None, None, None)
    } else {
        let (mean, std) = mean_and_std(&scores);
        (Some(mean), Some(std), Some(quality_score(scores.len(), std)))
    };

    PolicyCluster {
        policy: representative_label(&members),
        effect_mean,
        effect_std,
        quality_score: quality,
        actions: members,
    }
}

/// Most frequent action text among members; ties go to the earliest
/// appearance.
fn representative_label(members: &[ClusterMember]) -> String {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for member in members {
        *counts.entry(member.action.as_str()).or_default() += 1;
    }

    let mut best_label = "";
    let mut best_count = 0;
    for member in members {
        let count = counts[member.action.as_str()];
        if count > best_count {
            best_count = count;
            best_label = &member.action;
        }
    }
    best_label.to_string()
}
