//! Table and lookup errors.

use gt_core::GtError;
use gt_relations::RelationError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Unknown table: {name}")]
    UnknownTable { name: String },

    #[error("Unknown column '{column}' in table {table}")]
    UnknownColumn { table: &'static str, column: String },

    #[error("Must input value to lookup")]
    MissingValue,

    #[error("Invalid lookup value for {what}: {value}")]
    InvalidValue { what: &'static str, value: f64 },

    /// No row on either side of the query: the table is empty or corrupted.
    #[error("No bracketing row in {table}.{column} for value {value}")]
    EmptyBracket {
        table: &'static str,
        column: &'static str,
        value: f64,
    },

    #[error("Malformed table {table}: {what}")]
    Malformed { table: &'static str, what: String },

    #[error("Parse error in {}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Failed to read table store: {}", .path.display())]
    StoreRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Table generation failed: {0}")]
    Relation(#[from] RelationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<TableError> for GtError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::EmptyBracket { .. } | TableError::Malformed { .. } => GtError::Invariant {
                what: err.to_string(),
            },
            TableError::Relation(inner) => inner.into(),
            other => GtError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}
