//! Single entry point over a store, including discovery.

use crate::error::{TableError, TableResult};
use crate::interp::InterpolatedRow;
use crate::store::TableStore;
use gt_core::Real;

/// What to ask the store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Query<'a> {
    /// Available table names.
    Tables,
    /// Column names of one table.
    Columns { table: &'a str },
    /// Interpolated rows, or a single column of them when `column` is set.
    Lookup {
        table: &'a str,
        key: &'a str,
        value: Option<Real>,
        column: Option<&'a str>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum QueryOutput {
    Tables(Vec<&'static str>),
    Columns(Vec<&'static str>),
    Rows(Vec<InterpolatedRow>),
    Values(Vec<Real>),
}

pub fn query(store: &TableStore, q: Query<'_>) -> TableResult<QueryOutput> {
    match q {
        Query::Tables => Ok(QueryOutput::Tables(store.table_names())),
        Query::Columns { table } => Ok(QueryOutput::Columns(store.column_names(table)?)),
        Query::Lookup {
            table,
            key,
            value,
            column,
        } => {
            let value = value.ok_or(TableError::MissingValue)?;
            match column {
                Some(column) => Ok(QueryOutput::Values(
                    store.lookup_column(table, key, value, column)?,
                )),
                None => Ok(QueryOutput::Rows(store.lookup(table, key, value)?.into_rows())),
            }
        }
    }
}
