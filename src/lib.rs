//! githours library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod gitlog;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Generate { .. } => cli::commands::generate::handle(cli, cfg),
        Commands::Cleanup { .. } => cli::commands::cleanup::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path: PathBuf = match &cli.config {
        Some(custom) => expand_tilde(custom),
        None => Config::config_file(),
    };

    // `init` must work even when the existing file is broken
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(&config_path)?,
    };

    dispatch(&cli, &cfg, &config_path)
}
