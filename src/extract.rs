//! Streaming scan of an iCalendar document for this week's events.

use chrono::{Duration, NaiveDate};
use ical::property::Property;
use ical::PropertyParser;
use tracing::{debug, trace};

use crate::week::WeekWindow;

const DATE_VALUE_FORMAT: &str = "%Y%m%d";

/// An all-day event kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub summary: String,
    pub start_date: NaiveDate,
    /// Last day the event covers (inclusive).
    pub end_date: NaiveDate,
}

/// Fields collected between `BEGIN:VEVENT` and `END:VEVENT`.
#[derive(Debug, Default)]
struct EventDraft {
    summary: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl EventDraft {
    fn finish(self, window: &WeekWindow, filter: &str) -> Option<CalendarEvent> {
        let (Some(start_date), Some(end_date)) = (self.start_date, self.end_date) else {
            trace!(summary = %self.summary, "dropping event without usable dates");
            return None;
        };

        if !window.overlaps(start_date, end_date) || !self.summary.contains(filter) {
            return None;
        }

        Some(CalendarEvent {
            summary: self.summary,
            start_date,
            end_date,
        })
    }
}

/// Returns the events of `raw` that fall into `window` and whose summary
/// contains `filter`.
///
/// Only all-day dates (`VALUE=DATE`) are understood. Lines the content-line
/// parser rejects are skipped, and an event whose dates are missing or
/// malformed is dropped without complaint.
pub fn week_events(raw: &str, filter: &str, window: &WeekWindow) -> Vec<CalendarEvent> {
    let mut events = Vec::new();
    let mut draft: Option<EventDraft> = None;

    for property in PropertyParser::from_reader(raw.as_bytes()) {
        let property = match property {
            Ok(property) => property,
            Err(err) => {
                trace!(error = ?err, "skipping unparsable content line");
                continue;
            }
        };
        let value = property.value.as_deref().unwrap_or_default();

        match property.name.as_str() {
            "BEGIN" if value == "VEVENT" => draft = Some(EventDraft::default()),
            "END" if value == "VEVENT" => {
                if let Some(event) = draft.take().and_then(|d| d.finish(window, filter)) {
                    events.push(event);
                }
            }
            _ => {
                if let Some(draft) = draft.as_mut() {
                    apply_property(draft, &property, value);
                }
            }
        }
    }

    debug!(kept = events.len(), "scanned calendar feed");
    events
}

fn apply_property(draft: &mut EventDraft, property: &Property, value: &str) {
    match property.name.as_str() {
        "DTSTART" if is_all_day(property) => draft.start_date = parse_date(value),
        // DTEND names the first day after the event.
        "DTEND" if is_all_day(property) => {
            draft.end_date = parse_date(value).and_then(|d| d.checked_sub_signed(Duration::days(1)));
        }
        "SUMMARY" => draft.summary = value.to_string(),
        _ => {}
    }
}

fn is_all_day(property: &Property) -> bool {
    property.params.as_ref().map_or(false, |params| {
        params
            .iter()
            .any(|(name, values)| name == "VALUE" && values.iter().any(|v| v == "DATE"))
    })
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_VALUE_FORMAT)
        .map_err(|err| trace!(value, error = %err, "unparsable date"))
        .ok()
}
