pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod format;
pub mod logging;
pub mod week;

use std::time::Duration;

use chrono::{DateTime, TimeZone};

pub use error::{CalweekError, Result};
pub use extract::{week_events, CalendarEvent};
pub use fetch::FeedClient;
pub use format::format_events;
pub use week::WeekWindow;

/// Sorted display lines for the events of `raw` in the week around `now`.
pub fn extract_events<Tz: TimeZone>(raw: &str, filter: &str, now: &DateTime<Tz>) -> Vec<String> {
    week_lines(raw, filter, &WeekWindow::containing(now))
}

/// Sorted display lines for the events of `raw` inside `window`.
pub fn week_lines(raw: &str, filter: &str, window: &WeekWindow) -> Vec<String> {
    format_events(&week_events(raw, filter, window))
}

/// Downloads the feed at `ical_url` and returns this week's display lines.
pub fn events_from_ical_url(
    ical_url: &str,
    filter: &str,
    window: &WeekWindow,
    timeout: Duration,
) -> Result<Vec<String>> {
    let raw = FeedClient::new(timeout)?.fetch(ical_url)?;
    Ok(week_lines(&raw, filter, window))
}
