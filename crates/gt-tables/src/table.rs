//! Reference table rows.

use crate::error::{TableError, TableResult};
use crate::schema::{MACH, TableKind};
use gt_core::Real;
use serde::{Deserialize, Serialize};

/// One tabulated row. `id` is the 1-based insertion order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: u32,
    pub values: Vec<Real>,
}

impl Row {
    #[inline]
    pub fn get(&self, column: usize) -> Real {
        self.values[column]
    }

    #[inline]
    pub fn mach(&self) -> Real {
        self.values[MACH]
    }
}

/// Named, ordered, read-only sequence of rows.
///
/// Invariants (checked by [`Table::new`] and [`Table::validate`]):
/// - every row has one value per column of its kind, all finite
/// - ids run 1, 2, 3, ... in row order
/// - the Mach column is strictly increasing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableData")]
pub struct Table {
    kind: TableKind,
    rows: Vec<Row>,
}

/// Unvalidated wire form of a [`Table`].
#[derive(Deserialize)]
pub(crate) struct TableData {
    kind: TableKind,
    rows: Vec<Row>,
}

impl TryFrom<TableData> for Table {
    type Error = TableError;

    fn try_from(data: TableData) -> TableResult<Self> {
        Self::new(data.kind, data.rows)
    }
}

impl Table {
    pub fn new(kind: TableKind, rows: Vec<Row>) -> TableResult<Self> {
        let table = Self { kind, rows };
        table.validate()?;
        Ok(table)
    }

    /// Build a table from bare value rows, assigning ids in order.
    pub fn from_values(kind: TableKind, values: Vec<Vec<Real>>) -> TableResult<Self> {
        let rows = values
            .into_iter()
            .zip(1u32..)
            .map(|(values, id)| Row { id, values })
            .collect();
        Self::new(kind, rows)
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn validate(&self) -> TableResult<()> {
        let table = self.kind.name();
        let width = self.kind.columns().len();
        if self.rows.is_empty() {
            return Err(TableError::Malformed {
                table,
                what: "no rows".to_string(),
            });
        }

        let mut prev_mach = Real::NEG_INFINITY;
        for (index, row) in self.rows.iter().enumerate() {
            let expected_id = index + 1;
            if row.id as usize != expected_id {
                return Err(TableError::Malformed {
                    table,
                    what: format!("row {expected_id} has id {}", row.id),
                });
            }
            if row.values.len() != width {
                return Err(TableError::Malformed {
                    table,
                    what: format!(
                        "row {} has {} values, expected {width}",
                        row.id,
                        row.values.len()
                    ),
                });
            }
            if let Some(col) = row.values.iter().position(|v| !v.is_finite()) {
                return Err(TableError::Malformed {
                    table,
                    what: format!(
                        "row {} has non-finite {}",
                        row.id,
                        self.kind.column_name(col)
                    ),
                });
            }
            if row.mach() <= prev_mach {
                return Err(TableError::Malformed {
                    table,
                    what: format!("Mach not strictly increasing at row {}", row.id),
                });
            }
            prev_mach = row.mach();
        }
        Ok(())
    }
}
