//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Initialize the global tracing subscriber
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Safe to call
/// once per process; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();
}
