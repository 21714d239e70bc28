//! Tracing/logging initialization.
//!
//! Diagnostics go to stderr so the interactive menu on stdout stays clean.
//! The default filter is quiet (`warn`); raise it with `RUST_LOG` (e.g.
//! `RUST_LOG=stockdesk=debug`) to watch individual store operations.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    tracing::debug!("tracing initialized");
}
