//! Lenient input coercion for project payloads.
//!
//! The browser form sends `pid` either as a number or as a numeric string,
//! and dates either as `YYYY-MM-DD` or as full RFC 3339 timestamps. These
//! serde helpers normalize both into typed values at the boundary.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer};

use crate::error::CoreError;
use crate::types::Date;

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    fn into_pid(self) -> Result<i32, CoreError> {
        let value = match self {
            Self::Int(n) => n,
            Self::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| CoreError::Validation(format!("pid must be an integer, got '{s}'")))?,
        };
        i32::try_from(value)
            .map_err(|_| CoreError::Validation(format!("pid {value} is out of range")))
    }
}

/// Parse a date given as `YYYY-MM-DD` or as an RFC 3339 timestamp.
///
/// Timestamps are converted to UTC and truncated to the calendar date.
pub fn parse_date(raw: &str) -> Result<Date, CoreError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| CoreError::Validation(format!("Invalid date '{raw}'. Expected YYYY-MM-DD")))
}

/// `deserialize_with` helper for a required `pid`.
pub fn pid<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(deserializer)?
        .into_pid()
        .map_err(de::Error::custom)
}

/// `deserialize_with` helper for an optional `pid` (use with `#[serde(default)]`).
pub fn optional_pid<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntOrString>::deserialize(deserializer)?
        .map(IntOrString::into_pid)
        .transpose()
        .map_err(de::Error::custom)
}

/// `deserialize_with` helper for a nullable date. `null` and `""` both
/// deserialize to `None`.
pub fn nullable_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s).map(Some).map_err(de::Error::custom),
    }
}

/// `deserialize_with` helper for a nullable date in a partial update.
///
/// Use with `#[serde(default)]`: an absent key stays `None`, an explicit
/// `null` becomes `Some(None)` (clear the date).
pub fn patch_date<'de, D>(deserializer: D) -> Result<Option<Option<Date>>, D::Error>
where
    D: Deserializer<'de>,
{
    nullable_date(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(deserialize_with = "pid")]
        pid: i32,
        #[serde(default, deserialize_with = "nullable_date")]
        start: Option<Date>,
        #[serde(default, deserialize_with = "patch_date")]
        end: Option<Option<Date>>,
    }

    fn date(y: i32, m: u32, d: u32) -> Date {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn pid_accepts_number_and_numeric_string() {
        let p: Payload = serde_json::from_value(json!({"pid": 1001})).unwrap();
        assert_eq!(p.pid, 1001);
        let p: Payload = serde_json::from_value(json!({"pid": " 1002 "})).unwrap();
        assert_eq!(p.pid, 1002);
    }

    #[test]
    fn pid_rejects_non_numeric_string() {
        assert!(serde_json::from_value::<Payload>(json!({"pid": "abc"})).is_err());
    }

    #[test]
    fn pid_rejects_out_of_range() {
        assert!(serde_json::from_value::<Payload>(json!({"pid": 5_000_000_000_i64})).is_err());
    }

    #[test]
    fn dates_accept_plain_and_timestamp_forms() {
        let p: Payload = serde_json::from_value(
            json!({"pid": 1, "start": "2025-01-15", "end": "2025-02-01T10:30:00.000Z"}),
        )
        .unwrap();
        assert_eq!(p.start, Some(date(2025, 1, 15)));
        assert_eq!(p.end, Some(Some(date(2025, 2, 1))));
    }

    #[test]
    fn timestamp_with_offset_is_truncated_in_utc() {
        assert_eq!(
            parse_date("2025-03-01T01:00:00+03:00").unwrap(),
            date(2025, 2, 28)
        );
    }

    #[test]
    fn empty_and_null_dates_are_none() {
        let p: Payload =
            serde_json::from_value(json!({"pid": 1, "start": "", "end": null})).unwrap();
        assert_eq!(p.start, None);
        assert_eq!(p.end, Some(None));
    }

    #[test]
    fn absent_patch_date_stays_none() {
        let p: Payload = serde_json::from_value(json!({"pid": 1})).unwrap();
        assert_eq!(p.end, None);
    }

    #[test]
    fn invalid_date_is_rejected() {
        assert_matches!(parse_date("15/01/2025"), Err(CoreError::Validation(_)));
    }
}
