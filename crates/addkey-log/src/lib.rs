// ABOUTME: Shared logging setup for addkey binaries
// ABOUTME: init() logs to stderr at WARN by default so a clean run prints nothing

use tracing_subscriber::EnvFilter;

/// Default level when RUST_LOG is unset.
pub const DEFAULT_LEVEL: tracing::Level = tracing::Level::WARN;

/// Standard logging to stderr. Default: WARN level, RUST_LOG override.
pub fn init() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();
}

/// Build the filter from a RUST_LOG-style directive string.
/// Falls back to DEFAULT_LEVEL when the directives are missing or invalid.
fn filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(DEFAULT_LEVEL.into()))
}
