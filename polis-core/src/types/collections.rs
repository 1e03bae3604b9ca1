//! Hash collections used across the workspace.
//!
//! FxHash is deterministic for a fixed key set and measurably faster than
//! SipHash for the short string keys the engine works with.

pub use rustc_hash::{FxHashMap, FxHashSet};
