/// Utilities for date and time parsing/formatting of table cells
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use contracts::shared::visualization::DEFAULT_DATETIME_FORMAT;
use std::fmt::Write;

/// Parse an ISO date or datetime string
/// Example: "2024-03-15T14:02:26.123Z", "2024-03-15 14:02:26", "2024-03-15"
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Format with a chrono format string, falling back to DD.MM.YYYY HH:MM
/// when the format string is invalid or needs an offset (`%z`, `%Z`)
pub fn format_datetime(value: &NaiveDateTime, format: &str) -> String {
    let valid = !StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
    if valid {
        let mut result = String::new();
        if write!(result, "{}", value.format(format)).is_ok() {
            return result;
        }
    }
    value.format(DEFAULT_DATETIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 2, 26)
            .unwrap();
        assert_eq!(parse_datetime("2024-03-15T14:02:26Z"), Some(expected));
        assert_eq!(parse_datetime("2024-03-15 14:02:26"), Some(expected));
        assert_eq!(
            parse_datetime("2024-03-15").map(|d| d.date()),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_datetime("invalid"), None);
    }

    #[test]
    fn test_format_datetime() {
        let value = parse_datetime("2024-12-31T23:59:59.123Z").unwrap();
        assert_eq!(format_datetime(&value, DEFAULT_DATETIME_FORMAT), "31.12.2024 23:59");
        assert_eq!(format_datetime(&value, "%Y-%m-%d"), "2024-12-31");
    }

    #[test]
    fn test_invalid_format_falls_back() {
        let value = parse_datetime("2024-03-15").unwrap();
        assert_eq!(format_datetime(&value, "%Q"), "15.03.2024 00:00");
    }

    #[test]
    fn test_offset_format_falls_back() {
        let value = parse_datetime("2024-03-15").unwrap();
        assert_eq!(format_datetime(&value, "%d.%m.%Y %z"), "15.03.2024 00:00");
        assert_eq!(format_datetime(&value, "%Z"), "15.03.2024 00:00");
        assert_eq!(format_datetime(&value, "%:z"), "15.03.2024 00:00");
    }
}
