//! Tracing/logging setup shared by the stockdesk binaries.

/// Tracing configuration (filters, output).
pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
