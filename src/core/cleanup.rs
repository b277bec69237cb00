use crate::core::calculator::daily_cap::{Blacklist, CleanedFile, RowCleaner, RowDecision};
use crate::errors::AppResult;
use crate::export::{notify_write_success, read_rows, rows_to_string, write_rows};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::path::output_path_for;
use std::fs;
use std::path::PathBuf;

/// Everything `cleanup` needs, already validated.
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub blacklist: Blacklist,
    pub threshold: f64,
    pub verbose: bool,
}

pub struct CleanupLogic;

impl CleanupLogic {
    /// Filter every input first, then write. Nothing is written if any
    /// input fails to parse.
    pub fn run(opts: &CleanupOptions) -> AppResult<Vec<(PathBuf, CleanedFile)>> {
        let mut cleaner = RowCleaner::new(opts.blacklist.clone(), opts.threshold);
        let mut results = Vec::with_capacity(opts.inputs.len());

        for input in &opts.inputs {
            info(format!("Reading {}", input.display()));

            let rows = read_rows(input)?;
            let cleaned = cleaner.clean(rows)?;

            if opts.verbose {
                Self::report_dropped(&cleaned);
            }
            results.push((input.clone(), cleaned));
        }

        if opts.dry_run {
            for (input, cleaned) in &results {
                header(input.display());
                print!("{}", rows_to_string(&cleaned.kept)?);
            }
        } else {
            fs::create_dir_all(&opts.output_dir)?;
            for (input, cleaned) in &results {
                let out = output_path_for(input, &opts.output_dir)?;
                info(format!("Writing {}", out.display()));
                write_rows(&out, &cleaned.kept)?;
                notify_write_success(cleaned.kept.len(), &out);
            }
        }

        success("Done!");
        Ok(results)
    }

    fn report_dropped(cleaned: &CleanedFile) {
        for (row, decision) in &cleaned.dropped {
            match decision {
                RowDecision::Blacklisted { .. } => {
                    warning(format!("Skipping {} (blacklist)", row.message))
                }
                RowDecision::OverThreshold { day, total } => {
                    warning(format!("Skipping {} ({} hours on {})", row.message, total, day))
                }
                RowDecision::Keep => {}
            }
        }
    }
}
