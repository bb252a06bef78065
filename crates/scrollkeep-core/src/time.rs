//! Timestamp parsing
//!
//! Timestamps are stored as the strings callers supplied. They are parsed on
//! demand: RFC 3339 with offset, naive ISO 8601 date-times (treated as UTC)
//! and plain dates (midnight UTC) are accepted.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Parse a stored timestamp, `None` when no accepted format matches
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Signed days from `from` to `to`, `None` if either fails to parse
pub fn days_between(from: &str, to: &str) -> Option<f64> {
    let from = parse_timestamp(from)?;
    let to = parse_timestamp(to)?;
    Some((to - from).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY)
}

/// Current time as an RFC 3339 string
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339()
}
