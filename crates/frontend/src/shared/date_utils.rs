/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

/// Format a UTC timestamp as DD.MM.YYYY
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format a UTC timestamp as DD.MM.YYYY HH:MM:SS
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024 14:02:26"
pub fn format_datetime(date: &DateTime<Utc>) -> String {
    date.format("%d.%m.%Y %H:%M:%S").to_string()
}

/// Format an optional timestamp, falling back to a placeholder
pub fn format_date_opt(date: &Option<DateTime<Utc>>) -> String {
    date.as_ref().map(format_date).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_date(&date), "15.03.2024");
    }

    #[test]
    fn test_format_datetime() {
        let date = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_datetime(&date), "31.12.2024 23:59:59");
    }

    #[test]
    fn test_format_date_opt() {
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(format_date_opt(&Some(date)), "15.03.2024");
        assert_eq!(format_date_opt(&None), "—");
    }
}
