//! Calendar dates as they cross the API boundary.
//!
//! The roster API exchanges dates as `YYYY-MM-DD`. Some backends serialize
//! date columns as full timestamps (`2000-06-12T00:00:00.000Z`); for those
//! only the date part is read, the time of day is never interpreted.

use chrono::NaiveDate;

use crate::constants::ISO_DATE_FORMAT;
use crate::error::{KindredError, KindredResult};

/// Parse a wire date (`YYYY-MM-DD`, optionally followed by `T...`).
pub fn parse_iso_date(s: &str) -> KindredResult<NaiveDate> {
    let trimmed = s.trim();
    let date_part = match trimmed.split_once('T') {
        Some((date, _time)) => date,
        None => trimmed,
    };

    NaiveDate::parse_from_str(date_part, ISO_DATE_FORMAT)
        .map_err(|_| KindredError::InvalidDate(s.to_string()))
}

/// Format a date for the wire.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse an optional wire date, treating absent, empty and malformed values
/// alike as "no date".
pub fn parse_optional_date(value: Option<&str>) -> Option<NaiveDate> {
    let raw = value?;
    match parse_iso_date(raw) {
        Ok(date) => Some(date),
        Err(_) => {
            log::debug!("ignoring unparseable date {:?}", raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_iso_date("2000-06-12").unwrap(), ymd(2000, 6, 12));
    }

    #[test]
    fn test_parse_timestamp_keeps_date_part() {
        assert_eq!(
            parse_iso_date("2000-06-12T00:00:00.000Z").unwrap(),
            ymd(2000, 6, 12)
        );
        // Late-evening timestamps must not shift to the next day
        assert_eq!(
            parse_iso_date("1999-12-31T23:30:00+05:00").unwrap(),
            ymd(1999, 12, 31)
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(parse_iso_date(""), Err(KindredError::InvalidDate(_))));
        assert!(parse_iso_date("not a date").is_err());
        assert!(parse_iso_date("2001-02-29").is_err());
        assert!(parse_iso_date("12/06/2000").is_err());
    }

    #[test]
    fn test_parse_optional_date() {
        assert_eq!(parse_optional_date(None), None);
        assert_eq!(parse_optional_date(Some("")), None);
        assert_eq!(parse_optional_date(Some("garbage")), None);
        assert_eq!(parse_optional_date(Some("1950-01-31")), Some(ymd(1950, 1, 31)));
    }

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_iso_date(ymd(2024, 2, 9)), "2024-02-09");
    }
}
