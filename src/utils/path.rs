//! Path utilities: expand ~, derive output file names.

use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Destination of a cleaned copy: same file name, inside `out_dir`.
pub fn output_path_for(input: &Path, out_dir: &Path) -> AppResult<PathBuf> {
    let name = input
        .file_name()
        .ok_or_else(|| AppError::InvalidArgument(format!("not a file path: {}", input.display())))?;
    Ok(out_dir.join(name))
}
