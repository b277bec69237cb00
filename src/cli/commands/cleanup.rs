use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::daily_cap::Blacklist;
use crate::core::cleanup::{CleanupLogic, CleanupOptions};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;

/// Handle the `cleanup` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Cleanup {
        csv,
        output,
        dry_run,
        max_hours,
        blacklist,
    } = &cli.command
    {
        let threshold = max_hours.unwrap_or(cfg.hours_threshold);
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(AppError::InvalidArgument(format!(
                "max hours must be a non-negative number, got {}",
                threshold
            )));
        }

        // --blacklist replaces the configured list rather than extending it
        let blacklist = if blacklist.is_empty() {
            Blacklist::new(cfg.blacklist.iter().cloned())
        } else {
            Blacklist::new(blacklist.iter().cloned())
        };

        let opts = CleanupOptions {
            inputs: csv.iter().map(|p| expand_tilde(p)).collect(),
            output_dir: expand_tilde(output),
            dry_run: *dry_run,
            blacklist,
            threshold,
            verbose: cli.verbose,
        };

        CleanupLogic::run(&opts)?;
    }
    Ok(())
}
