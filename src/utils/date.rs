//! Date utilities: CLI date parsing, git date formats, calendar-day keys.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};

/// Default `git log` date rendering, e.g. `Mon Mar 4 09:00:00 2024 +0000`.
/// Parsing accepts both padded and unpadded days.
pub const GIT_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y %z";

const GIT_MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// Parse a `YYYY-MM-DD` date given on the command line.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Render a date the way `git log --since/--until` gets it: `MAR 5 2024`.
pub fn to_git_date(d: NaiveDate) -> String {
    format!("{} {} {}", GIT_MONTHS[d.month0() as usize], d.day(), d.year())
}

/// Parse a commit timestamp as written by git (and carried in the CSV date column).
/// Surrounding whitespace and stray double quotes are ignored.
pub fn parse_git_timestamp(raw: &str) -> AppResult<DateTime<FixedOffset>> {
    let cleaned = raw.trim().replace('"', "");
    DateTime::parse_from_str(&cleaned, GIT_TIMESTAMP_FORMAT)
        .map_err(|e| AppError::InvalidTimestamp(format!("'{}' ({})", cleaned, e)))
}

/// True when both timestamps fall on the same calendar date, each read in its own offset.
pub fn same_day(a: &DateTime<FixedOffset>, b: &DateTime<FixedOffset>) -> bool {
    a.date_naive() == b.date_naive()
}
