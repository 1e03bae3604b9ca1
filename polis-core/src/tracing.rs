//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// Filter comes from `POLIS_LOG` (falling back to `info`). Safe to call more
/// than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("POLIS_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
