//! Date utilities for study-day keys and daily reset hour handling.

use chrono::{DateTime, Duration, Local, NaiveDate, Timelike};

/// Format of persisted study-day keys.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Study day for a local timestamp.
///
/// If the hour is before `daily_reset_hour`, the study day is still the
/// previous calendar day. This lets late-night practice count towards the
/// day it started on.
pub fn study_day(now: DateTime<Local>, daily_reset_hour: u32) -> NaiveDate {
    if now.hour() < daily_reset_hour {
        (now - Duration::days(1)).date_naive()
    } else {
        now.date_naive()
    }
}

/// Format a date as a `YYYY-MM-DD` key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` key.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT).ok()
}
