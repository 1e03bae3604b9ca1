//! # polis-analysis
//!
//! Analysis engine for the Polis policy recommender.
//! Contains the indicator row store, effect calculator, policy clustering,
//! window search, and report assembly.

pub mod indicators;
pub mod policies;
pub mod report;
pub mod windows;

// Re-export the engine entry points at the crate root.
pub use indicators::effects::{compute_effects, effects_from_rows};
pub use indicators::store::IndicatorStore;
pub use policies::clustering::cluster_policies;
pub use report::{assemble_report, PolicyReport};
pub use windows::{evaluate_windows, WindowSearchParams};
