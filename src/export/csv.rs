//! Timesheet CSV files: `"<date>","<message>",<hours>`, no header.
//!
//! Text fields are always quoted, the numeric hours field is not.

use crate::errors::AppResult;
use crate::models::TabularRow;
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

fn writer<W: Write>(inner: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .from_writer(inner)
}

/// Text columns are quoted even when they look numeric; the writer runs
/// with `QuoteStyle::Never`, so escaping happens here.
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn record_for(row: &TabularRow) -> Vec<String> {
    let mut out = vec![quoted(&row.date), quoted(&row.message), row.hours.clone()];
    out.extend(row.extra.iter().map(|f| quoted(f)));
    out
}

pub fn write_rows_to<W: Write>(inner: W, rows: &[TabularRow]) -> AppResult<()> {
    let mut wtr = writer(inner);
    for row in rows {
        wtr.write_record(record_for(row))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Scrive le righe nel file indicato, sovrascrivendolo.
pub fn write_rows(path: &Path, rows: &[TabularRow]) -> AppResult<()> {
    let file = File::create(path)?;
    write_rows_to(file, rows)
}

/// Render rows exactly as they would be written to disk.
pub fn rows_to_string(rows: &[TabularRow]) -> AppResult<String> {
    let mut buf = Vec::new();
    write_rows_to(&mut buf, rows)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn read_rows_from<R: Read>(inner: R) -> AppResult<Vec<TabularRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote(b'"')
        .from_reader(inner);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        rows.push(TabularRow::from_record(&record, line)?);
    }
    Ok(rows)
}

pub fn read_rows(path: &Path) -> AppResult<Vec<TabularRow>> {
    let file = File::open(path)?;
    read_rows_from(file)
}
