//! Commit log retrieval and framing.
//!
//! The log comes either from `git log` run inside a repository or from a
//! file holding previously captured output of the same command. Each commit
//! is framed as one CSV record `"<date>","<summary> | <body>"`.

use crate::errors::{AppError, AppResult};
use crate::models::LogRecord;
use crate::utils::date::to_git_date;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Quotes are part of the value: git prints them around each placeholder.
pub const PRETTY_FORMAT: &str = r#"--pretty="%ad","%s | %b""#;

/// Filters applied by git itself.
#[derive(Debug, Clone)]
pub struct LogQuery {
    pub since: NaiveDate,
    pub until: NaiveDate,
    pub author: Option<String>,
}

impl LogQuery {
    pub fn git_args(&self) -> Vec<String> {
        let mut args = vec![
            "--since".to_string(),
            to_git_date(self.since),
            "--until".to_string(),
            to_git_date(self.until),
            "--date=default".to_string(),
            PRETTY_FORMAT.to_string(),
        ];
        if let Some(author) = &self.author {
            args.push("--author".to_string());
            args.push(author.clone());
        }
        args
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    /// Pre-captured log text.
    File(PathBuf),
    /// Working tree to run `git log` in.
    Repository(PathBuf),
}

impl LogSource {
    pub fn detect(path: &Path) -> Self {
        if path.is_file() {
            LogSource::File(path.to_path_buf())
        } else {
            LogSource::Repository(path.to_path_buf())
        }
    }

    pub fn read(&self, query: &LogQuery) -> AppResult<String> {
        match self {
            LogSource::File(path) => Ok(fs::read_to_string(path)?),
            LogSource::Repository(repo) => run_git_log(repo, query),
        }
    }
}

pub fn run_git_log(repo: &Path, query: &LogQuery) -> AppResult<String> {
    let output = Command::new("git")
        .arg("log")
        .args(query.git_args())
        .current_dir(repo)
        .output()
        .map_err(|e| AppError::Git(format!("git log in {}: {e}", repo.display())))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AppError::Git(format!(
            "git log in {} failed: {}",
            repo.display(),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Split log text into records. Anything that is not exactly two fields is
/// dropped without complaint: bodies with odd quoting are common.
pub fn parse_log(text: &str) -> AppResult<Vec<LogRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote(b'"')
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() == 2 {
            records.push(LogRecord::new(&record[0], &record[1]));
        }
    }
    Ok(records)
}
