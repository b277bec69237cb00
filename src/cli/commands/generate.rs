use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::duration::EstimateSettings;
use crate::core::generate::{GenerateLogic, GenerateOptions};
use crate::errors::{AppError, AppResult};
use crate::gitlog::{LogQuery, LogSource};
use crate::utils::date::{epoch, parse_date, today};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_time;

/// Handle the `generate` subcommand: validate everything, then run.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        repo,
        output,
        start_date,
        end_date,
        author,
        skip_commits,
        estimate_start_time,
        estimate_fallback,
    } = &cli.command
    {
        let since = match start_date {
            Some(s) => parse_date(s)?,
            None => epoch(),
        };
        let until = match end_date {
            Some(s) => parse_date(s)?,
            None => today(),
        };
        if since > until {
            return Err(AppError::InvalidArgument(format!(
                "start date {} is after end date {}",
                since, until
            )));
        }

        let day_start = parse_time(
            estimate_start_time
                .as_deref()
                .unwrap_or(&cfg.estimate_start_time),
        )?;

        let fallback_hours = estimate_fallback.unwrap_or(cfg.estimate_fallback);
        if !fallback_hours.is_finite() || fallback_hours < 0.0 {
            return Err(AppError::InvalidArgument(format!(
                "fallback hours must be a non-negative number, got {}",
                fallback_hours
            )));
        }

        let opts = GenerateOptions {
            source: LogSource::detect(&expand_tilde(repo)),
            output: expand_tilde(output),
            query: LogQuery {
                since,
                until,
                author: author.clone(),
            },
            skip_commits: skip_commits.clone(),
            settings: EstimateSettings {
                day_start,
                fallback_hours,
            },
            verbose: cli.verbose,
        };

        GenerateLogic::run(&opts)?;
    }
    Ok(())
}
