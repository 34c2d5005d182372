//! Console lines for the week's events.

use std::fmt;

use crate::extract::CalendarEvent;

const DISPLAY_DATE_FORMAT: &str = "%m-%d-%Y";

/// Pads single-day lines so summaries line up with `MM-DD-YYYY - MM-DD-YYYY: `.
const SINGLE_DAY_SEPARATOR: &str = ":              ";

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start_date.format(DISPLAY_DATE_FORMAT);
        if self.start_date == self.end_date {
            write!(f, "{start}{SINGLE_DAY_SEPARATOR}{}", self.summary)
        } else {
            let end = self.end_date.format(DISPLAY_DATE_FORMAT);
            write!(f, "{start} - {end}: {}", self.summary)
        }
    }
}

/// Formats `events` and sorts the lines lexicographically.
///
/// With fixed-width `MM-DD-YYYY` prefixes this is chronological within a
/// year; across a year boundary December sorts before January.
pub fn format_events(events: &[CalendarEvent]) -> Vec<String> {
    let mut lines: Vec<String> = events.iter().map(ToString::to_string).collect();
    lines.sort();
    lines
}
