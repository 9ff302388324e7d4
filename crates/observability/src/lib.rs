//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide tracing.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Initialize tracing for a terminal tool (stderr, warnings by default).
pub fn init_cli() {
    tracing::init_stderr(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;
