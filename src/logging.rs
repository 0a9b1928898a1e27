//! Logging setup
//!
//! The library emits `tracing` events only; installing a subscriber is left
//! to the binary, which calls `init_tracing` once at startup.

use tracing_subscriber::EnvFilter;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "CRYPTAL_LOG";

/// Initializes a `tracing_subscriber` using `CRYPTAL_LOG` first, then `RUST_LOG`, then `warn`.
///
/// Logs go to stderr so that stdout only carries digests.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the filter from `CRYPTAL_LOG`, falling back to `RUST_LOG`, then `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

