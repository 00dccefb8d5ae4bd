//! Tracing/logging initialization
//!
//! Log output goes to stderr so it never interleaves with the menu on stdout.
//! `RUST_LOG` takes precedence over the configured level.

use tracing_subscriber::EnvFilter;

/// Fallback filter when neither `RUST_LOG` nor the setting parses
const FALLBACK_FILTER: &str = "warn";

/// Build the filter from `RUST_LOG`, then `default_level`, then the fallback
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Initialize tracing for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
