use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Write the default configuration to `path`.
    pub fn init(path: &Path, force: bool) -> AppResult<Config> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}
