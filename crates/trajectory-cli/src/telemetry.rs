//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Filter directive in effect: `RUST_LOG`, then the flag, then the config.
pub fn filter(flag: Option<&str>, configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(flag.unwrap_or(configured)))
}

/// Install the global subscriber, logging to stderr.
///
/// A second call leaves the first subscriber in place.
pub fn init(flag: Option<&str>, configured: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(flag, configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
