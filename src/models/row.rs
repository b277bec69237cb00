use super::entry::EstimatedEntry;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_git_timestamp;
use crate::utils::time::{format_hours, parse_hours};
use chrono::{DateTime, FixedOffset};
use csv::StringRecord;

/// A timesheet line: `"<date>","<message>",<hours>`.
///
/// Fields are kept as text so that a row read from a file is written back
/// exactly as it was; any columns past the third are carried along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularRow {
    pub date: String,
    pub message: String,
    pub hours: String,
    pub extra: Vec<String>,
}

impl TabularRow {
    pub fn new(date: impl Into<String>, message: impl Into<String>, hours: f64) -> Self {
        Self {
            date: date.into(),
            message: message.into(),
            hours: format_hours(hours),
            extra: Vec::new(),
        }
    }

    /// Build a row from a CSV record; `line` is only used for the error message.
    pub fn from_record(record: &StringRecord, line: u64) -> AppResult<Self> {
        if record.len() < 3 {
            return Err(AppError::MalformedRow(format!(
                "line {}: expected 3 fields, found {}",
                line,
                record.len()
            )));
        }

        Ok(Self {
            date: record[0].to_string(),
            message: record[1].to_string(),
            hours: record[2].to_string(),
            extra: record.iter().skip(3).map(str::to_string).collect(),
        })
    }

    pub fn timestamp(&self) -> AppResult<DateTime<FixedOffset>> {
        parse_git_timestamp(&self.date)
    }

    pub fn hours_value(&self) -> AppResult<f64> {
        parse_hours(&self.hours)
    }
}

impl From<&EstimatedEntry> for TabularRow {
    fn from(entry: &EstimatedEntry) -> Self {
        TabularRow::new(entry.commit.date.clone(), entry.commit.message.clone(), entry.hours())
    }
}
