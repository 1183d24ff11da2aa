#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, NaiveDate};
    use jiralog::libs::formatter::{format_day, format_duration, format_file_day, format_hours, format_seconds, format_started};
    use jiralog::libs::worklog::seconds_to_hours;

    #[test]
    fn test_format_dates() {
        let instant = DateTime::parse_from_rfc3339("2024-01-05T09:07:00+03:00").unwrap();

        assert_eq!(format_day(&instant), "2024-01-05");
        assert_eq!(format_started(&instant), "2024-01-05 09:07");
        assert_eq!(format_file_day(&NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()), "05-01-2024");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(seconds_to_hours(3600)), "1.00");
        assert_eq!(format_hours(seconds_to_hours(5400)), "1.50");
        assert_eq!(format_hours(seconds_to_hours(1200)), "0.33");
        assert_eq!(format_hours(0.0), "0.00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
        assert_eq!(format_duration(&Duration::hours(37)), "37:00");
        assert_eq!(format_duration(&Duration::minutes(-5)), "00:00");
        assert_eq!(format_seconds(8100), "02:15");
    }
}
