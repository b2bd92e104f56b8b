//! Two-column table ingest.
//!
//! A table file holds one `(x, y)` pair per line, whitespace separated. Lines
//! whose first non-space character is `#` are comments; blank lines are skipped.
//! Rows are kept in file order: the file must already be sorted by `x`.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::AppError;

/// Raw columns read from a table file.
#[derive(Debug, Clone, PartialEq)]
pub struct TableColumns {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

/// Open and parse a table file.
pub fn read_table(path: &Path) -> Result<TableColumns, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::config(format!(
            "Could not open default model file '{}': {e}",
            path.display()
        ))
    })?;
    parse_table(file)
        .map_err(|e| AppError::data(format!("Default model file '{}': {e}", path.display())))
}

/// Parse table rows from any reader.
pub fn parse_table<R: Read>(reader: R) -> Result<TableColumns, AppError> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| AppError::data(format!("read error at line {line_no}: {e}")))?;
        let content = line.trim_start();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let mut fields = content.split_whitespace();
        let x = parse_field(fields.next(), line_no, "x")?;
        let y = parse_field(fields.next(), line_no, "y")?;
        xs.push(x);
        ys.push(y);
    }

    Ok(TableColumns { xs, ys })
}

fn parse_field(field: Option<&str>, line_no: usize, name: &str) -> Result<f64, AppError> {
    let raw = field.ok_or_else(|| AppError::data(format!("line {line_no}: missing {name} value")))?;
    raw.parse::<f64>()
        .map_err(|e| AppError::data(format!("line {line_no}: invalid {name} value `{raw}` ({e})")))
}
