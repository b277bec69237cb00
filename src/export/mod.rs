// src/export/mod.rs

pub mod csv;

pub use self::csv::{read_rows, rows_to_string, write_rows};

use crate::ui::messages::success;
use std::path::Path;

/// Helper comune per messaggi di completamento scrittura.
pub(crate) fn notify_write_success(rows: usize, path: &Path) {
    success(format!("{rows} rows written: {}", path.display()));
}
