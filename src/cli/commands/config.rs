use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            info(format!("Current configuration ({}):", path.display()));
            ConfigLogic::print(cfg)?;
        } else {
            println!("{}", path.display());
        }
    }
    Ok(())
}
