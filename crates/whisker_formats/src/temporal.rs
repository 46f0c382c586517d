//! Recognition of date/time strings.
//!
//! JSON and YAML have no native timestamp type that survives parsing, so
//! strings that look like ISO-8601 date-times are promoted to
//! [`Value::DateTime`] during classification.

use chrono::{DateTime, NaiveDateTime, Utc};
use whisker_core::Value;

/// Parse an RFC 3339 timestamp, or a naive ISO-8601 date-time read as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    // YYYY-MM-DDTHH:MM:SS is the shortest accepted form.
    let bytes = s.as_bytes();
    if bytes.len() < 19 || !bytes[..4].iter().all(u8::is_ascii_digit) || bytes[4] != b'-' {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Classify a string scalar.
pub fn string_value(s: &str) -> Value {
    match parse_timestamp(s) {
        Some(dt) => Value::DateTime(dt),
        None => Value::String(s.to_string()),
    }
}
