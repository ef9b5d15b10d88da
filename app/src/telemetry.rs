//! Tracing initialisation for embedding shells.
//!
//! The library itself only emits `tracing` events; a shell that wants them
//! rendered calls [`init`] once at startup.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a JSON-formatted subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once: a second initialisation is reported as a
/// warning through the already-installed subscriber instead of failing.
pub fn init() {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %error, "tracing init failed");
    }
}
