use super::commit::CommitRecord;
use crate::utils::time::seconds_to_hours;
use chrono::{DateTime, FixedOffset};

/// Why the fallback duration replaced a measured one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The commit happened before the day-start anchor.
    BeforeDayStart { anchor: DateTime<FixedOffset> },
    /// The following (older) commit carries a later timestamp than this one.
    OutOfOrder,
}

/// How long a commit is assumed to have taken, and which rule decided it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    /// Whole seconds since the previous commit of the same day.
    SincePrevious { seconds: i64 },
    /// Whole seconds since the day-start anchor.
    SinceDayStart { seconds: i64 },
    /// The configured fallback, in hours.
    Fallback { hours: f64, reason: FallbackReason },
}

impl Estimate {
    pub fn hours(&self) -> f64 {
        match self {
            Estimate::SincePrevious { seconds } | Estimate::SinceDayStart { seconds } => {
                seconds_to_hours(*seconds)
            }
            Estimate::Fallback { hours, .. } => *hours,
        }
    }

    /// True for estimates computed against the day-start anchor, whether the
    /// measured delta or the fallback was used.
    pub fn is_anchor_based(&self) -> bool {
        matches!(
            self,
            Estimate::SinceDayStart { .. }
                | Estimate::Fallback {
                    reason: FallbackReason::BeforeDayStart { .. },
                    ..
                }
        )
    }
}

#[derive(Debug, Clone)]
pub struct EstimatedEntry {
    pub commit: CommitRecord,
    pub estimate: Estimate,
}

impl EstimatedEntry {
    pub fn hours(&self) -> f64 {
        self.estimate.hours()
    }
}
