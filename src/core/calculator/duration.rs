//! Per-commit duration estimation.
//!
//! Commits arrive newest first. A commit is credited with the time elapsed
//! since the next (older) commit when both fall on the same calendar date;
//! otherwise it is the oldest commit of its day and is measured from the
//! day-start anchor. Negative candidates are replaced by the fallback.

use crate::errors::{AppError, AppResult};
use crate::models::{CommitRecord, Estimate, EstimatedEntry, FallbackReason, LogRecord};
use crate::utils::date::same_day;
use chrono::{DateTime, FixedOffset, NaiveTime};

#[derive(Debug, Clone, Copy)]
pub struct EstimateSettings {
    /// Time of day work is assumed to start.
    pub day_start: NaiveTime,
    /// Hours credited when no sensible delta exists.
    pub fallback_hours: f64,
}

/// Split records into (kept, skipped) by message substring, keeping order.
pub fn partition_skipped(
    records: Vec<LogRecord>,
    skip: Option<&str>,
) -> (Vec<LogRecord>, Vec<LogRecord>) {
    match skip {
        Some(needle) => records.into_iter().partition(|r| !r.message.contains(needle)),
        None => (records, Vec::new()),
    }
}

pub fn parse_commits(records: Vec<LogRecord>) -> AppResult<Vec<CommitRecord>> {
    records.into_iter().map(CommitRecord::parse).collect()
}

/// The day-start time on the commit's own date, in the commit's own offset.
pub fn day_start_anchor(
    timestamp: &DateTime<FixedOffset>,
    day_start: NaiveTime,
) -> AppResult<DateTime<FixedOffset>> {
    timestamp
        .date_naive()
        .and_time(day_start)
        .and_local_timezone(*timestamp.offset())
        .single()
        .ok_or_else(|| {
            AppError::InvalidTimestamp(format!("no day start {} for {}", day_start, timestamp))
        })
}

pub fn estimate_since_day_start(
    timestamp: &DateTime<FixedOffset>,
    settings: &EstimateSettings,
) -> AppResult<Estimate> {
    let anchor = day_start_anchor(timestamp, settings.day_start)?;

    if *timestamp >= anchor {
        Ok(Estimate::SinceDayStart {
            seconds: (*timestamp - anchor).num_seconds(),
        })
    } else {
        Ok(Estimate::Fallback {
            hours: settings.fallback_hours,
            reason: FallbackReason::BeforeDayStart { anchor },
        })
    }
}

pub fn estimate_since_previous(
    current: &DateTime<FixedOffset>,
    previous: &DateTime<FixedOffset>,
    settings: &EstimateSettings,
) -> Estimate {
    let seconds = (*current - *previous).num_seconds();
    if seconds >= 0 {
        Estimate::SincePrevious { seconds }
    } else {
        Estimate::Fallback {
            hours: settings.fallback_hours,
            reason: FallbackReason::OutOfOrder,
        }
    }
}

/// One entry per commit, same order as the input.
pub fn estimate_durations(
    commits: &[CommitRecord],
    settings: &EstimateSettings,
) -> AppResult<Vec<EstimatedEntry>> {
    let mut entries = Vec::with_capacity(commits.len());

    for (i, commit) in commits.iter().enumerate() {
        let estimate = match commits.get(i + 1) {
            Some(older) if same_day(&commit.timestamp, &older.timestamp) => {
                estimate_since_previous(&commit.timestamp, &older.timestamp, settings)
            }
            _ => estimate_since_day_start(&commit.timestamp, settings)?,
        };

        entries.push(EstimatedEntry {
            commit: commit.clone(),
            estimate,
        });
    }

    Ok(entries)
}
