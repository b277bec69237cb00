//! Blacklist filtering and the per-day hours cap.
//!
//! The accumulator is keyed by month and day only ("Mar 05"), so the same
//! date in different years shares one bucket. Known limitation, kept for
//! compatibility with existing timesheets.

use crate::errors::{AppError, AppResult};
use crate::models::TabularRow;
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;
use std::fmt;

pub const DEFAULT_HOURS_THRESHOLD: f64 = 10.0;
pub const DEFAULT_BLACKLIST: &[&str] = &["Merge branch"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blacklist {
    patterns: Vec<String>,
}

impl Blacklist {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// First pattern contained in `message`, if any.
    pub fn matches(&self, message: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| message.contains(p.as_str()))
            .map(String::as_str)
    }
}

impl Default for Blacklist {
    fn default() -> Self {
        Blacklist::new(DEFAULT_BLACKLIST.iter().copied())
    }
}

/// Year-independent calendar-day key, e.g. `Mar 05`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(String);

impl DayKey {
    pub fn from_timestamp(ts: &DateTime<FixedOffset>) -> Self {
        DayKey(ts.format("%b %d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Running hours per day key. Only grows.
#[derive(Debug, Default, Clone)]
pub struct DailyAccumulator {
    totals: HashMap<DayKey, f64>,
}

impl DailyAccumulator {
    /// Add `hours` to the day and return the new total.
    pub fn add(&mut self, day: DayKey, hours: f64) -> f64 {
        let total = self.totals.entry(day).or_insert(0.0);
        *total += hours;
        *total
    }

    pub fn total(&self, day: &DayKey) -> f64 {
        self.totals.get(day).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowDecision {
    Keep,
    Blacklisted { pattern: String },
    OverThreshold { day: DayKey, total: f64 },
}

/// Rows of one file after cleaning.
#[derive(Debug, Default, Clone)]
pub struct CleanedFile {
    pub kept: Vec<TabularRow>,
    pub dropped: Vec<(TabularRow, RowDecision)>,
}

impl CleanedFile {
    pub fn kept_hours(&self) -> f64 {
        self.kept
            .iter()
            .filter_map(|r| r.hours_value().ok())
            .sum()
    }
}

/// Applies blacklist and cap across every file of one invocation.
#[derive(Debug, Clone)]
pub struct RowCleaner {
    blacklist: Blacklist,
    threshold: f64,
    accumulator: DailyAccumulator,
}

impl RowCleaner {
    pub fn new(blacklist: Blacklist, threshold: f64) -> Self {
        Self {
            blacklist,
            threshold,
            accumulator: DailyAccumulator::default(),
        }
    }

    pub fn accumulator(&self) -> &DailyAccumulator {
        &self.accumulator
    }

    /// Decide a single row. Blacklisted rows never reach the accumulator;
    /// every other row is added before the cap is checked, so the row that
    /// first crosses the threshold is itself dropped.
    pub fn judge(&mut self, row: &TabularRow) -> AppResult<RowDecision> {
        if let Some(pattern) = self.blacklist.matches(&row.message) {
            return Ok(RowDecision::Blacklisted {
                pattern: pattern.to_string(),
            });
        }

        let day = DayKey::from_timestamp(&row.timestamp()?);
        let hours = row.hours_value()?;
        let total = self.accumulator.add(day.clone(), hours);

        if total <= self.threshold {
            Ok(RowDecision::Keep)
        } else {
            Ok(RowDecision::OverThreshold { day, total })
        }
    }

    /// Clean one file's rows, preserving their order.
    pub fn clean(&mut self, rows: Vec<TabularRow>) -> AppResult<CleanedFile> {
        let mut cleaned = CleanedFile::default();

        for (i, row) in rows.into_iter().enumerate() {
            let decision = self
                .judge(&row)
                .map_err(|e| AppError::MalformedRow(format!("row {}: {}", i + 1, e)))?;

            match decision {
                RowDecision::Keep => cleaned.kept.push(row),
                other => cleaned.dropped.push((row, other)),
            }
        }

        Ok(cleaned)
    }
}
