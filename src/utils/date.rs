use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Cell format for every `Timestamp`/`Created`/`Added` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).ok()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timezone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

/// Current instant in the configured zone.
pub fn now_in(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}

/// Interpret a wall-clock timestamp in `tz`.
///
/// Ambiguous times (DST fall-back) take the earlier instant; times inside a
/// DST gap return `None`.
pub fn localize(tz: Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}

/// A calendar date at the given time of day, in `tz`.
///
/// When that wall-clock time is skipped by a DST jump, the first valid instant
/// later the same day is used instead.
pub fn at_time_of_day(tz: Tz, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Tz>> {
    let naive = date.and_time(time);
    localize(tz, naive).or_else(|| {
        // gaps are at most a couple of hours; probe forward minute by minute
        (1..=180)
            .map(|m| naive + chrono::Duration::minutes(m))
            .take_while(|n| n.date() == date)
            .find_map(|n| localize(tz, n))
    })
}

/// Whole days elapsed since `start`; zero if `start` lies in the future.
pub fn days_since(start: NaiveDate, today: NaiveDate) -> i64 {
    (today - start).num_days().max(0)
}
