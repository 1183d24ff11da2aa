//! Date, duration and hour formatting shared by the view and the exports.
//!
//! ## Formats
//!
//! - days: `YYYY-MM-DD` (info block, tables)
//! - worklog starts: `YYYY-MM-DD HH:MM` in the worklog's own offset
//! - file names: `DD-MM-YYYY`
//! - durations: `HH:MM`, negative values clamp to `00:00`
//! - hours: two decimals, e.g. `1.50`

use chrono::{DateTime, Duration, FixedOffset, NaiveDate};

pub fn format_day(instant: &DateTime<FixedOffset>) -> String {
    instant.format("%Y-%m-%d").to_string()
}

pub fn format_started(instant: &DateTime<FixedOffset>) -> String {
    instant.format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_file_day(day: &NaiveDate) -> String {
    day.format("%d-%m-%Y").to_string()
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// `HH:MM` for a number of seconds.
pub fn format_seconds(seconds: u64) -> String {
    format_duration(&Duration::seconds(seconds as i64))
}
