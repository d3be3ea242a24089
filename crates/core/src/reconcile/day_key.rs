//! Date/time normalization for history keys

use chrono::{NaiveDateTime, TimeZone};
use duosync_domain::constants::{CAPTURE_TIME_FORMAT, DATE_KEY_FORMAT};

/// Calendar-day key (`YYYY/MM/DD`) of a Unix timestamp in `tz`.
///
/// Returns `None` for timestamps chrono cannot represent.
pub fn day_key<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<String> {
    tz.timestamp_opt(timestamp, 0)
        .single()
        .map(|moment| moment.date_naive().format(DATE_KEY_FORMAT).to_string())
}

/// Day key of a local wall-clock reading.
pub fn wall_clock_day_key(now: NaiveDateTime) -> String {
    now.date().format(DATE_KEY_FORMAT).to_string()
}

/// `HH:MM:SS` capture stamp of a local wall-clock reading.
pub fn wall_clock_time(now: NaiveDateTime) -> String {
    now.time().format(CAPTURE_TIME_FORMAT).to_string()
}
