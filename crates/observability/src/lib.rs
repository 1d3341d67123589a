//! Tracing/logging setup shared by the plugin binaries.
//!
//! Carrier faults and per-order skips are only visible through these logs
//! (the batch API deliberately never fails as a whole), so the subscriber is
//! JSON-formatted for ingestion by the host platform's log pipeline.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Filter is taken from `RUST_LOG`, defaulting to `info`. Safe to call
/// multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
