use clap::{Parser, Subcommand};

/// Command-line interface definition for githours
/// Estimate worked hours from git history and clean up the resulting CSV timesheets
#[derive(Parser)]
#[command(
    name = "githours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Estimate worked hours from git history and clean up the resulting CSV timesheets",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Report skipped commits, fallbacks and dropped rows
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a configuration file with the default values
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the configuration in use
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Generate an hours estimate CSV from a git log
    Generate {
        /// Path to a git repository, or to a file with captured `git log` output
        #[arg(value_name = "GIT_REPO_PATH")]
        repo: String,

        /// CSV output file
        #[arg(value_name = "OUTPUT")]
        output: String,

        /// Start date (YYYY-MM-DD). Default: 1970-01-01
        #[arg(long = "start-date", short = 's', value_name = "YYYY-MM-DD")]
        start_date: Option<String>,

        /// End date (YYYY-MM-DD). Default: today
        #[arg(long = "end-date", short = 'e', value_name = "YYYY-MM-DD")]
        end_date: Option<String>,

        /// Only commits by this author
        #[arg(long, short = 'a', value_name = "AUTHOR")]
        author: Option<String>,

        /// Skip commits whose message contains this text
        #[arg(
            long = "skip-commits",
            short = 'm',
            alias = "skip_commits",
            value_name = "MESSAGE"
        )]
        skip_commits: Option<String>,

        /// Time of day work starts, used to estimate the first commit of a day (HH:MM)
        #[arg(long = "estimate-start-time", value_name = "HH:MM")]
        estimate_start_time: Option<String>,

        /// Hours credited to a commit when no estimate can be made
        #[arg(long = "estimate-fallback", value_name = "HOURS")]
        estimate_fallback: Option<f64>,
    },

    /// Drop blacklisted rows and cap the hours per day across CSV files
    Cleanup {
        /// One or more CSV files produced by `generate`
        #[arg(value_name = "CSV", required = true)]
        csv: Vec<String>,

        /// Directory for the cleaned copies
        #[arg(long, short = 'o', value_name = "DIR")]
        output: String,

        /// Do not write files, just print results
        #[arg(long = "dry-run", short = 't', alias = "test")]
        dry_run: bool,

        /// Maximum hours kept per day
        #[arg(long = "max-hours", value_name = "HOURS")]
        max_hours: Option<f64>,

        /// Drop rows whose message contains this text (repeatable, replaces the configured list)
        #[arg(long = "blacklist", value_name = "TEXT")]
        blacklist: Vec<String>,
    },
}
