//! Time utilities: parsing HH:MM, second/hour conversions, hours formatting.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").map_err(|_| AppError::InvalidTime(t.to_string()))
}

pub fn seconds_to_hours(secs: i64) -> f64 {
    secs as f64 / SECONDS_PER_HOUR
}

/// Shortest decimal that reads back to the same value, always with a
/// fractional part (`1.0`, `0.5`, `0.25`).
pub fn format_hours(hours: f64) -> String {
    format!("{:?}", hours)
}

/// Parse the hours column of a timesheet row.
pub fn parse_hours(s: &str) -> AppResult<f64> {
    let hours: f64 = s
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidHours(s.to_string()))?;

    if !hours.is_finite() || hours < 0.0 {
        return Err(AppError::InvalidHours(s.to_string()));
    }
    Ok(hours)
}
