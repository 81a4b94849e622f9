//! Tracing setup shared by both binaries.
//!
//! Log lines go to stderr so that stdout carries only program output.
//! The level comes from `RUST_LOG` and defaults to `warn`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// ```bash
/// RUST_LOG=rtally=debug tally-cli show
/// ```
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}
