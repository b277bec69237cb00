use crate::cli::parser::{Cli, Commands};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        ConfigLogic::init(path, *force)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
