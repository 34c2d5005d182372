//! Errors that abort a run.
//!
//! Problems inside the feed itself are never errors; malformed events are
//! simply left out of the listing.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for calweek operations.
pub type Result<T> = std::result::Result<T, CalweekError>;

#[derive(Debug, Error)]
pub enum CalweekError {
    /// Missing or unusable settings.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Connection, HTTP status, or body read failure.
    #[error("failed to fetch calendar: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("unknown timezone {0:?}")]
    Timezone(String),
}
