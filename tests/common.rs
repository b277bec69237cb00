#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ghs() -> Command {
    cargo_bin_cmd!("githours")
}

/// Unique path inside the system temp dir; any existing file is removed
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_githours.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_githours_dir", name));
    fs::remove_dir_all(&path).ok();
    path
}

/// Write `content` to a fresh temp file and return its path
pub fn write_fixture(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write fixture");
    p
}

/// Config path that does not exist, so built-in defaults apply
pub fn no_config(name: &str) -> String {
    temp_path(name, "conf")
}

/// Captured `git log --pretty="%ad","%s | %b"` output spanning two days
pub const TWO_DAY_LOG: &str = r#""Tue Mar 5 11:00:00 2024 +0000","Add export | "

"Tue Mar 5 10:00:00 2024 +0000","Fix parser | handles empty lines"

"Mon Mar 4 17:30:00 2024 +0000","WIP | "

"Mon Mar 4 12:00:00 2024 +0000","Initial commit | "

"#;
