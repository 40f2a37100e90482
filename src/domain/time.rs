//! Lenient timestamp parsing for input tables.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Epoch values above this are milliseconds rather than seconds.
const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// Dashed dates are read day-first (`02-01-2024` is 2 January); the trade
/// export writes them that way.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y"];

/// Parse a timestamp cell. Offset-bearing values keep their wall-clock
/// time, so the calendar day is the one written in the cell.
///
/// Accepts RFC 3339, the common `YYYY-MM-DD` and `DD-MM-YYYY` date-time
/// layouts, a bare date (midnight), and integer epoch seconds or
/// milliseconds.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok())
    {
        return Some(dt);
    }
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(value, f).ok())
    {
        return date.and_hms_opt(0, 0, 0);
    }

    let epoch: i64 = value.parse().ok()?;
    let dt = if epoch.abs() > EPOCH_MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(epoch)?
    } else {
        DateTime::from_timestamp(epoch, 0)?
    };
    Some(dt.naive_utc())
}

/// Parse a date cell, keeping only the calendar day of a timestamp.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    parse_timestamp(value).map(|dt| dt.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hm(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn accepts_iso_layouts() {
        assert_eq!(parse_timestamp("2024-01-01T10:00"), Some(ymd_hm(2024, 1, 1, 10, 0)));
        assert_eq!(parse_timestamp("2024-01-01 10:00:00"), Some(ymd_hm(2024, 1, 1, 10, 0)));
        assert_eq!(
            parse_timestamp("2024-01-01T10:00:00+02:00"),
            Some(ymd_hm(2024, 1, 1, 10, 0))
        );
    }

    #[test]
    fn offset_keeps_the_written_calendar_day() {
        assert_eq!(parse_date("2024-01-01T01:00:00+02:00"), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(parse_date("2024-01-01T23:30:00-05:00"), NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn accepts_day_first_layout() {
        assert_eq!(parse_timestamp("02-12-2024 22:50"), Some(ymd_hm(2024, 12, 2, 22, 50)));
        assert_eq!(parse_date("02-01-2024"), NaiveDate::from_ymd_opt(2024, 1, 2));
    }

    #[test]
    fn accepts_epoch_seconds_and_millis() {
        assert_eq!(parse_timestamp("1704103200"), Some(ymd_hm(2024, 1, 1, 10, 0)));
        assert_eq!(parse_timestamp("1704103200000"), Some(ymd_hm(2024, 1, 1, 10, 0)));
    }

    #[test]
    fn bare_date_is_midnight() {
        assert_eq!(parse_date("2024-03-05"), NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(parse_timestamp("2024-03-05"), Some(ymd_hm(2024, 3, 5, 0, 0)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
    }
}
