use crate::core::calculator::duration::{
    EstimateSettings, estimate_durations, parse_commits, partition_skipped,
};
use crate::errors::AppResult;
use crate::export::{notify_write_success, write_rows};
use crate::gitlog::{LogQuery, LogSource, parse_log};
use crate::models::{Estimate, EstimatedEntry, FallbackReason, TabularRow};
use crate::ui::messages::{info, success, warning};
use std::path::PathBuf;

/// Everything `generate` needs, already validated.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub source: LogSource,
    pub output: PathBuf,
    pub query: LogQuery,
    pub skip_commits: Option<String>,
    pub settings: EstimateSettings,
    pub verbose: bool,
}

pub struct GenerateLogic;

impl GenerateLogic {
    pub fn run(opts: &GenerateOptions) -> AppResult<Vec<EstimatedEntry>> {
        if opts.verbose {
            match &opts.source {
                LogSource::File(path) => info(format!("Reading from file: {}", path.display())),
                LogSource::Repository(_) => {
                    info(format!("Running git log {}", opts.query.git_args().join(" ")))
                }
            }
        }

        let text = opts.source.read(&opts.query)?;
        let records = parse_log(&text)?;

        let (kept, skipped) = partition_skipped(records, opts.skip_commits.as_deref());
        if opts.verbose {
            for r in &skipped {
                info(format!("Skipping {} {}", r.date, r.message));
            }
        }

        let commits = parse_commits(kept)?;
        let entries = estimate_durations(&commits, &opts.settings)?;

        if opts.verbose {
            Self::report_fallbacks(&entries, opts.settings.fallback_hours);
        }

        let rows: Vec<TabularRow> = entries.iter().map(TabularRow::from).collect();
        write_rows(&opts.output, &rows)?;

        if opts.verbose {
            for row in &rows {
                println!("{} {} {}", row.date, row.message, row.hours);
            }
        }

        notify_write_success(rows.len(), &opts.output);
        if opts.verbose {
            success("Done!");
        }

        Ok(entries)
    }

    fn report_fallbacks(entries: &[EstimatedEntry], fallback: f64) {
        for entry in entries {
            if let Estimate::Fallback { reason, .. } = entry.estimate {
                match reason {
                    FallbackReason::BeforeDayStart { anchor } => warning(format!(
                        "Commit ({}) happened before estimated start time ({}), using fallback of {}",
                        entry.commit.timestamp, anchor, fallback
                    )),
                    FallbackReason::OutOfOrder => warning(format!(
                        "Commit ({}) is older than the commit before it, using fallback of {}",
                        entry.commit.timestamp, fallback
                    )),
                }
            }
        }
    }
}
