use crate::errors::AppResult;
use crate::utils::date::parse_git_timestamp;
use chrono::{DateTime, FixedOffset};

/// One `"<date>","<summary> | <body>"` record as framed by the log source,
/// before any parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub date: String,
    pub message: String,
}

impl LogRecord {
    pub fn new(date: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            message: message.into(),
        }
    }
}

/// A commit whose timestamp has been parsed.
#[derive(Debug, Clone)]
pub struct CommitRecord {
    pub date: String,                    // ⇔ date column, trimmed, as git printed it
    pub timestamp: DateTime<FixedOffset>, // ⇔ parsed `date`, offset preserved
    pub message: String,                 // ⇔ message column, untouched
}

impl CommitRecord {
    pub fn parse(record: LogRecord) -> AppResult<Self> {
        let timestamp = parse_git_timestamp(&record.date)?;
        Ok(Self {
            date: record.date.trim().to_string(),
            timestamp,
            message: record.message,
        })
    }
}
