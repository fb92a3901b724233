//! Tracing and logging setup.
//!
//! Subscribers are built explicitly. The binary installs one process-wide via
//! [`init`]; tests scope their own with `tracing::subscriber::with_default`.

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber construction (filters, formatting, writers).
pub mod tracing;

pub use crate::tracing::{CapturedLogs, capturing, subscriber};
