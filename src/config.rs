//! Where the calendar lives and how to read it.
//!
//! Settings come from `~/.config/calweek/config.toml` by default:
//!
//! ```toml
//! url = "https://calendar.example.com/private/basic.ics"
//! timeout_secs = 30
//! timezone = "Europe/Helsinki"
//! midnight_aligned = false
//! ```
//!
//! A plain `~/.calweek` file holding only the feed URL is still honoured when
//! the TOML file does not provide one.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono_tz::Tz;
use serde::Deserialize;
use tracing::debug;

use crate::error::{CalweekError, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// iCalendar feed URL.
    pub url: Option<String>,

    /// HTTP timeout for the feed download, in seconds.
    pub timeout_secs: u64,

    /// IANA zone used for "now"; the system zone when unset.
    pub timezone: Option<String>,

    /// Use a Sunday 00:00 to Saturday 23:59:59 week.
    pub midnight_aligned: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            timezone: None,
            midnight_aligned: false,
        }
    }
}

impl Config {
    /// Loads `explicit` if given, otherwise the default locations.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::resolve(explicit, &Self::default_path(), Self::legacy_path().as_deref())
    }

    fn resolve(
        explicit: Option<&Path>,
        default_path: &Path,
        legacy_path: Option<&Path>,
    ) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from(path)?,
            None if default_path.exists() => Self::load_from(default_path)?,
            None => Self::default(),
        };

        if config.url.is_none() {
            if let Some(path) = legacy_path.filter(|p| p.exists()) {
                config.url = read_legacy_url(path)?;
            }
        }

        Ok(config)
    }

    /// Loads a TOML configuration file.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path).map_err(|source| CalweekError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| CalweekError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calweek")
            .join("config.toml")
    }

    pub fn legacy_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".calweek"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parses the configured timezone, if any.
    pub fn tz(&self) -> Result<Option<Tz>> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| CalweekError::Timezone(name.to_string()))
            })
            .transpose()
    }
}

/// Reads a file whose only content is the feed URL.
fn read_legacy_url(path: &Path) -> Result<Option<String>> {
    debug!(path = %path.display(), "reading legacy url file");
    let content = std::fs::read_to_string(path).map_err(|source| CalweekError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let url = content.trim();
    Ok((!url.is_empty()).then(|| url.to_string()))
}
