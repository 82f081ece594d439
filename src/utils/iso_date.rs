//! ISO-8601 timestamp formatting shared by storage and JSON.
//!
//! Timestamps are always rendered in UTC with millisecond precision and a
//! `Z` suffix, e.g. `2024-03-25T00:00:00.000Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::Serializer;
use std::sync::LazyLock;

/// `YYYY-MM-DDTHH:MM:SS[.fff]Z`: uppercase `T`, UTC only.
static UTC_DATE_TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?Z$").unwrap());

/// Error returned by [`parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected YYYY-MM-DDTHH:MM:SS[.fff]Z, got '{0}'")]
    Shape(String),
    #[error(transparent)]
    Value(#[from] chrono::ParseError),
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub fn format(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a UTC timestamp such as `2024-03-25T00:00:00.000Z`.
///
/// Fractional seconds are optional. A space or lowercase `t` separator, a
/// lowercase `z` and numeric offsets (`+03:00`) are all rejected.
///
/// # Errors
///
/// Returns [`ParseError::Shape`] if `value` does not have that shape and
/// [`ParseError::Value`] if it names an impossible date or time.
pub fn parse(value: &str) -> Result<DateTime<Utc>, ParseError> {
    if !UTC_DATE_TIME_REGEX.is_match(value) {
        return Err(ParseError::Shape(value.to_string()));
    }

    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

/// `serialize_with` adapter for DTO fields.
pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(date))
}
