//! Tracing setup for the `calweek` binary.
//!
//! Logs go to stderr so stdout carries nothing but the event listing.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// `--debug` forces debug output; otherwise `RUST_LOG` decides, defaulting to warnings.
pub fn env_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    }
}

/// Installs the global subscriber. Fails if one is already set.
pub fn init_tracing(debug: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(debug))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
