use crate::core::calculator::daily_cap::{DEFAULT_BLACKLIST, DEFAULT_HOURS_THRESHOLD};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Defaults shared by `generate` and `cleanup`. Every field may be omitted
/// from the file; command-line options win over the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_start_time")]
    pub estimate_start_time: String,
    #[serde(default = "default_fallback")]
    pub estimate_fallback: f64,
    #[serde(default = "default_threshold")]
    pub hours_threshold: f64,
    #[serde(default = "default_blacklist")]
    pub blacklist: Vec<String>,
}

fn default_start_time() -> String {
    "09:00".to_string()
}
fn default_fallback() -> f64 {
    1.0
}
fn default_threshold() -> f64 {
    DEFAULT_HOURS_THRESHOLD
}
fn default_blacklist() -> Vec<String> {
    DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            estimate_start_time: default_start_time(),
            estimate_fallback: default_fallback(),
            hours_threshold: default_threshold(),
            blacklist: default_blacklist(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".githours")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("githours.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        // An empty file deserializes to unit, not to a map.
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write this configuration to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
