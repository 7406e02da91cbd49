//! Unix timestamp handling for IP history rows.
//!
//! Tautulli reports timestamps as integers or numeric strings. Anything else
//! is tolerated rather than failing the row.

use chrono::{Local, TimeZone};
use serde_json::Value;

/// Display format for formatted timestamps (local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a raw timestamp value as integer seconds.
///
/// Returns `None` for null, missing or non-numeric values.
pub fn parse_timestamp(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Format a raw timestamp value as `YYYY-MM-DD HH:MM:SS` local time.
///
/// Zero, null, empty and missing values yield `None`. A value that is not an
/// integer at all is passed through in its original string form.
pub fn format_timestamp(value: Option<&Value>) -> Option<String> {
    let value = value?;
    if is_blank(value) {
        return None;
    }

    match parse_timestamp(Some(value)) {
        Some(0) => None,
        Some(secs) => Some(format_unix(secs).unwrap_or_else(|| raw_text(value))),
        None => Some(raw_text(value)),
    }
}

/// Format integer seconds as local time; `None` when out of range.
pub fn format_unix(secs: i64) -> Option<String> {
    Local
        .timestamp_opt(secs, 0)
        .single()
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
