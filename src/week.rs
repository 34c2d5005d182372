//! The "current week" used to decide which events are shown.
//!
//! Bounds are local wall-clock instants with second granularity. The default
//! window is found by rewinding from `now` one second at a time until the
//! weekday reads Sunday, then stepping forward a single second. On any day
//! but Sunday that lands on Monday 00:00:00; on a Sunday the window starts one
//! second after `now`. [`WeekWindow::midnight_aligned`] offers a plain
//! Sunday-to-Saturday week instead.

use chrono::{
    DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Weekday,
};

const WEEK_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Inclusive `[start, end]` range of instants considered "this week".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl WeekWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Computes the week around `now` by rewinding to the closest Sunday.
    ///
    /// The rewind is done arithmetically, but the result is exactly what the
    /// second-by-second search yields: the first second after the most recent
    /// instant whose weekday is Sunday.
    pub fn containing<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let now = now.naive_local();
        let now = now.with_nanosecond(0).unwrap_or(now);

        let start = if now.weekday() == Weekday::Sun {
            now + Duration::seconds(1)
        } else {
            // The rewind stops at Sunday 23:59:59, one second before this Monday.
            let days_back = i64::from(now.weekday().num_days_from_monday());
            (now.date() - Duration::days(days_back)).and_time(NaiveTime::MIN)
        };

        Self::starting_at(start)
    }

    /// Sunday 00:00:00 through Saturday 23:59:59 of the week containing `now`.
    pub fn midnight_aligned<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let today = now.naive_local().date();
        let days_back = i64::from(today.weekday().num_days_from_sunday());
        Self::starting_at((today - Duration::days(days_back)).and_time(NaiveTime::MIN))
    }

    fn starting_at(start: NaiveDateTime) -> Self {
        Self {
            start,
            end: start + Duration::seconds(WEEK_SECONDS - 1),
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Whether an all-day span `[first, last]` touches the window.
    ///
    /// Days are compared at their midnight: the first day must begin strictly
    /// before the window ends and the last day must begin at or after the
    /// window starts.
    pub fn overlaps(&self, first: NaiveDate, last: NaiveDate) -> bool {
        first.and_time(NaiveTime::MIN) < self.end && last.and_time(NaiveTime::MIN) >= self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use rstest::rstest;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// The literal one-second rewind, used as a reference.
    fn rewind(now: NaiveDateTime) -> WeekWindow {
        let mut start = now;
        while start.weekday() != Weekday::Sun {
            start -= Duration::seconds(1);
        }
        start += Duration::seconds(1);
        WeekWindow::new(start, start + Duration::seconds(WEEK_SECONDS - 1))
    }

    #[test]
    fn midweek_starts_on_monday_midnight() {
        let now = Utc.with_ymd_and_hms(2024, 6, 12, 14, 30, 0).unwrap();
        let window = WeekWindow::containing(&now);

        assert_eq!(window.start(), at(2024, 6, 10, 0, 0, 0));
        assert_eq!(window.end(), at(2024, 6, 16, 23, 59, 59));
    }

    #[test]
    fn sunday_starts_one_second_after_now() {
        let now = Utc.with_ymd_and_hms(2024, 6, 9, 8, 15, 30).unwrap();
        let window = WeekWindow::containing(&now);

        assert_eq!(window.start(), at(2024, 6, 9, 8, 15, 31));
        assert_eq!(window.end(), at(2024, 6, 16, 8, 15, 30));
    }

    #[test]
    fn subsecond_part_is_truncated() {
        let now = Utc
            .with_ymd_and_hms(2024, 6, 9, 8, 15, 30)
            .unwrap()
            .with_nanosecond(750_000_000)
            .unwrap();

        assert_eq!(WeekWindow::containing(&now).start(), at(2024, 6, 9, 8, 15, 31));
    }

    #[test]
    fn uses_wall_clock_of_the_given_zone() {
        // Monday 01:00 in UTC+3 is still Sunday evening in UTC.
        let tz = FixedOffset::east_opt(3 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 6, 10, 1, 0, 0).unwrap();

        assert_eq!(WeekWindow::containing(&now).start(), at(2024, 6, 10, 0, 0, 0));
        assert_eq!(
            WeekWindow::containing(&now.with_timezone(&Utc)).start(),
            at(2024, 6, 9, 22, 0, 1)
        );
    }

    #[rstest]
    #[case(at(2024, 6, 9, 0, 0, 0))]
    #[case(at(2024, 6, 9, 23, 59, 59))]
    #[case(at(2024, 6, 10, 0, 0, 0))]
    #[case(at(2024, 6, 11, 9, 41, 7))]
    #[case(at(2024, 6, 15, 23, 59, 59))]
    #[case(at(2024, 12, 31, 12, 0, 0))]
    #[case(at(2024, 3, 1, 6, 30, 0))]
    fn matches_second_by_second_rewind(#[case] now: NaiveDateTime) {
        assert_eq!(WeekWindow::containing(&now.and_utc()), rewind(now));
    }

    #[rstest]
    #[case(at(2024, 6, 9, 0, 0, 0))]
    #[case(at(2024, 6, 12, 14, 30, 0))]
    #[case(at(2024, 6, 15, 23, 59, 59))]
    fn midnight_aligned_covers_sunday_to_saturday(#[case] now: NaiveDateTime) {
        let window = WeekWindow::midnight_aligned(&now.and_utc());

        assert_eq!(window.start(), at(2024, 6, 9, 0, 0, 0));
        assert_eq!(window.end(), at(2024, 6, 15, 23, 59, 59));
    }

    #[test]
    fn window_spans_a_week_minus_one_second() {
        let now = Utc.with_ymd_and_hms(2024, 2, 28, 17, 5, 9).unwrap();
        let window = WeekWindow::containing(&now);

        assert_eq!(
            window.end() - window.start(),
            Duration::seconds(WEEK_SECONDS - 1)
        );
    }

    #[rstest]
    #[case::inside(date(2024, 6, 10), date(2024, 6, 10), true)]
    #[case::starts_before(date(2024, 6, 1), date(2024, 6, 9), true)]
    #[case::ends_before(date(2024, 6, 1), date(2024, 6, 8), false)]
    #[case::last_day(date(2024, 6, 15), date(2024, 6, 15), true)]
    #[case::next_week(date(2024, 6, 16), date(2024, 6, 16), false)]
    #[case::spans_whole_week(date(2024, 6, 1), date(2024, 6, 30), true)]
    fn overlap_of_all_day_spans(
        #[case] first: NaiveDate,
        #[case] last: NaiveDate,
        #[case] expected: bool,
    ) {
        let window = WeekWindow::new(at(2024, 6, 9, 0, 0, 0), at(2024, 6, 15, 23, 59, 59));

        assert_eq!(window.overlaps(first, last), expected);
    }
}
