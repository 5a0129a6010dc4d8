/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

/// Example: 2025-04-02T10:15:00Z -> "02-APR-2025"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d-%b-%Y").to_string().to_uppercase()
}

/// Example: 2025-04-02T10:15:00Z -> "02-Apr-2025 10:15"
pub fn format_datetime(date: &DateTime<Utc>) -> String {
    date.format("%d-%b-%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&parse("2025-04-02T10:15:00Z")), "02-APR-2025");
        assert_eq!(format_date(&parse("2024-12-31T23:59:59Z")), "31-DEC-2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime(&parse("2025-04-02T10:15:42Z")),
            "02-Apr-2025 10:15"
        );
    }
}
