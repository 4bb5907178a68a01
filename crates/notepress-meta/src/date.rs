//! Date parsing for front-matter scheduling values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a date-like front-matter value into a UTC instant.
///
/// Accepted shapes, tried in order:
/// - RFC 3339 (`2026-09-01T10:00:00Z`, with offset)
/// - naive datetime `YYYY-MM-DD HH:MM[:SS]` or `YYYY-MM-DDTHH:MM[:SS]`
///   (UTC assumed)
/// - date only `YYYY-MM-DD` (midnight UTC)
///
/// Anything else — wrong type, garbage string — yields `None`; an
/// unparseable schedule date is silently treated as absent.
#[must_use]
pub fn parse_date_value(value: &serde_yaml::Value) -> Option<DateTime<Utc>> {
    let text = value.as_str()?.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    None
}
