//! Timestamp value object for immutable points in time.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Renders as ISO-8601 / RFC 3339 with microseconds and a `Z` suffix.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    /// Parses an ISO-8601 string into a UTC timestamp.
    ///
    /// Values without an offset (`2024-05-01T12:00:00.123456`) are read
    /// as UTC.
    pub fn parse_iso8601(value: &str) -> Result<Self, ValidationError> {
        match DateTime::parse_from_rfc3339(value) {
            Ok(dt) => Ok(Self(dt.with_timezone(&Utc))),
            Err(e) => NaiveDateTime::parse_from_str(value, NAIVE_FORMAT)
                .map(|naive| Self(naive.and_utc()))
                .map_err(|_| ValidationError::invalid_format("created_at", e.to_string())),
        }
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn iso8601_uses_utc_suffix() {
        let ts = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap());
        assert_eq!(ts.to_iso8601(), "2024-03-05T14:30:00.000000Z");
    }

    #[test]
    fn iso8601_parses_what_it_renders() {
        let ts = Timestamp::now();
        let parsed = Timestamp::parse_iso8601(&ts.to_iso8601()).unwrap();
        assert_eq!(parsed.to_iso8601(), ts.to_iso8601());
    }

    #[test]
    fn parse_converts_offsets_to_utc() {
        let parsed = Timestamp::parse_iso8601("2024-03-05T11:30:00-03:00").unwrap();
        assert_eq!(parsed.to_iso8601(), "2024-03-05T14:30:00.000000Z");
    }

    #[test]
    fn parse_reads_offsetless_values_as_utc() {
        let parsed = Timestamp::parse_iso8601("2024-05-01T12:00:00.123456").unwrap();
        assert_eq!(parsed.to_iso8601(), "2024-05-01T12:00:00.123456Z");

        let whole_seconds = Timestamp::parse_iso8601("2024-05-01T12:00:00").unwrap();
        assert_eq!(whole_seconds.to_iso8601(), "2024-05-01T12:00:00.000000Z");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Timestamp::parse_iso8601("yesterday").is_err());
    }

    #[test]
    fn now_is_monotonic_enough() {
        let earlier = Timestamp::now();
        let later = Timestamp::now();
        assert!(!later.is_before(&earlier));
    }
}
