//! Date parsing and display formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder rendered for absent or unparseable dates.
pub const DATE_PLACEHOLDER: &str = "-";

static PLAIN_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid plain date regex"));

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parses a stored date value into a calendar date.
///
/// Accepts plain `YYYY-MM-DD`, RFC 3339 timestamps and naive
/// `YYYY-MM-DD HH:MM:SS` timestamps. Time of day is dropped.
///
/// Returns `None` for blank or unparseable input.
pub fn parse_date_value(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(caps) = PLAIN_DATE_RE.captures(trimmed) {
        let year = caps[1].parse::<i32>().ok()?;
        let month = caps[2].parse::<u32>().ok()?;
        let day = caps[3].parse::<u32>().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|timestamp| timestamp.date())
}

/// Formats a date as `YYYY-MM-DD`, or [`DATE_PLACEHOLDER`] when absent.
pub fn format_iso_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => DATE_PLACEHOLDER.to_string(),
    }
}

/// Parses then formats a raw date value as `YYYY-MM-DD`.
pub fn format_iso_date_str(value: &str) -> String {
    format_iso_date(parse_date_value(value))
}

/// Formats a date for activity feeds, e.g. `15 January, 2026`.
pub fn format_long_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%-d %B, %Y").to_string(),
        None => DATE_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_iso_date, format_iso_date_str, format_long_date, parse_date_value};
    use chrono::NaiveDate;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn parses_plain_dates_and_timestamps() {
        assert_eq!(parse_date_value("1990-01-01"), Some(ymd(1990, 1, 1)));
        assert_eq!(parse_date_value(" 2024-02-29 "), Some(ymd(2024, 2, 29)));
        assert_eq!(
            parse_date_value("2026-01-15T08:30:00+06:00"),
            Some(ymd(2026, 1, 15))
        );
        assert_eq!(
            parse_date_value("2026-01-15 23:59:59"),
            Some(ymd(2026, 1, 15))
        );
    }

    #[test]
    fn rejects_blank_and_malformed_values() {
        assert_eq!(parse_date_value(""), None);
        assert_eq!(parse_date_value("   "), None);
        assert_eq!(parse_date_value("not-a-date"), None);
        assert_eq!(parse_date_value("2023-02-29"), None);
        assert_eq!(parse_date_value("2024-13-01"), None);
    }

    #[test]
    fn iso_format_falls_back_to_placeholder() {
        assert_eq!(format_iso_date(Some(ymd(2050, 1, 1))), "2050-01-01");
        assert_eq!(format_iso_date(None), "-");
        assert_eq!(format_iso_date_str("garbage"), "-");
        assert_eq!(format_iso_date_str("2024-06-15T00:00:00Z"), "2024-06-15");
    }

    #[test]
    fn long_format_uses_unpadded_day_and_month_name() {
        assert_eq!(format_long_date(Some(ymd(2026, 1, 5))), "5 January, 2026");
        assert_eq!(format_long_date(None), "-");
    }
}
