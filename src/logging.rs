//! Structured logging initialization

use tracing_subscriber::EnvFilter;

/// Initialize structured logging for the entrypoint.
///
/// Defaults to INFO; override per-target with `RUST_LOG`. Targets are
/// omitted from output so container logs stay readable.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_target(false)
        .init();
}
