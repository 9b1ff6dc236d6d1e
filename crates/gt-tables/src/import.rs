//! Flat-file ingestion of published gas tables.
//!
//! One row per line, whitespace separated, columns in the order of
//! [`TableKind::columns`]. Values are plain floats or the compact
//! exponent form printed by old table generators, where the `E` is
//! dropped: `0.1000+01` is `0.1000e+01`.

use crate::error::{TableError, TableResult};
use crate::schema::TableKind;
use crate::table::Table;
use gt_core::Real;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parse one numeric token in either plain or compact exponent form.
pub fn parse_value(token: &str) -> Option<Real> {
    if let Ok(v) = token.parse::<Real>() {
        return Some(v);
    }
    let split = token.len().checked_sub(3)?;
    let (mantissa, exponent) = token.split_at_checked(split)?;
    if !exponent.starts_with(['+', '-']) || mantissa.is_empty() {
        return None;
    }
    format!("{mantissa}e{exponent}").parse().ok()
}

/// Parse the text of one flat table file. `origin` is only used in errors.
pub fn parse_flat_table(kind: TableKind, text: &str, origin: &Path) -> TableResult<Table> {
    Table::from_values(kind, parse_rows(kind, text, origin)?)
}

fn parse_rows(kind: TableKind, text: &str, origin: &Path) -> TableResult<Vec<Vec<Real>>> {
    let width = kind.columns().len();
    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let values = line
            .split_whitespace()
            .map(|token| {
                parse_value(token).ok_or_else(|| TableError::Parse {
                    path: origin.to_path_buf(),
                    line: index + 1,
                    message: format!("not a number: '{token}'"),
                })
            })
            .collect::<TableResult<Vec<_>>>()?;
        if values.len() != width {
            return Err(TableError::Parse {
                path: origin.to_path_buf(),
                line: index + 1,
                message: format!(
                    "{} table expects {width} columns, found {}",
                    kind.name(),
                    values.len()
                ),
            });
        }
        rows.push(values);
    }
    Ok(rows)
}

/// Read a single flat table file.
pub fn read_flat_file(kind: TableKind, path: &Path) -> TableResult<Table> {
    let text = fs::read_to_string(path)?;
    let table = parse_flat_table(kind, &text, path)?;
    debug!(table = kind.name(), rows = table.len(), path = %path.display(), "imported flat table");
    Ok(table)
}

/// Read every file in `dir`, concatenated in file-name order.
///
/// Published tables are often split over several pages; ids are assigned
/// over the concatenation.
pub fn read_flat_dir(kind: TableKind, dir: &Path) -> TableResult<Table> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    files.retain(|p| p.is_file());
    files.sort();

    let mut rows = Vec::new();
    for file in &files {
        let text = fs::read_to_string(file)?;
        rows.extend(parse_rows(kind, &text, file)?);
    }
    debug!(table = kind.name(), files = files.len(), rows = rows.len(), "imported flat table directory");
    Table::from_values(kind, rows)
}
