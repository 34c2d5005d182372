//! Downloads the calendar feed.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::Result;

const USER_AGENT: &str = concat!("calweek/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for a single feed download.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the whole feed body as text. Non-success statuses are errors.
    pub fn fetch(&self, url: &str) -> Result<String> {
        // The feed URL usually embeds a secret; only the host is logged.
        let host = reqwest::Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_owned));
        debug!(host = ?host, "fetching calendar feed");

        let response = self.client.get(url).send()?.error_for_status()?;
        let body = response.text()?;

        debug!(bytes = body.len(), "calendar feed downloaded");
        Ok(body)
    }
}
