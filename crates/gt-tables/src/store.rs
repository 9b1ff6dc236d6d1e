//! Loaded-once reference data for the interpolation engine.

use crate::error::{TableError, TableResult};
use crate::generate::{self, TableGrid};
use crate::import;
use crate::interp::{self, Lookup};
use crate::schema::TableKind;
use crate::table::{Table, TableData};
use gt_core::Real;
use gt_relations::Gas;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Both reference tables, immutable after construction.
///
/// Build one with [`TableStore::open`], [`TableStore::generate`] or one of the
/// flat-file importers, then pass it by reference to whatever needs lookups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoreData")]
pub struct TableStore {
    isentropic: Table,
    shock: Table,
}

#[derive(Deserialize)]
struct StoreData {
    isentropic: TableData,
    shock: TableData,
}

impl TryFrom<StoreData> for TableStore {
    type Error = TableError;

    fn try_from(data: StoreData) -> TableResult<Self> {
        Self::new(data.isentropic.try_into()?, data.shock.try_into()?)
    }
}

impl TableStore {
    pub fn new(isentropic: Table, shock: Table) -> TableResult<Self> {
        let store = Self { isentropic, shock };
        store.validate()?;
        Ok(store)
    }

    /// Compute both tables from the closed-form relations.
    pub fn generate(gas: &Gas, grid: &TableGrid) -> TableResult<Self> {
        let store = Self::new(
            generate::isentropic_table(gas, grid)?,
            generate::shock_table(gas, grid)?,
        )?;
        info!(
            gamma = gas.gamma,
            mach_max = grid.mach_max,
            isentropic_rows = store.isentropic.len(),
            shock_rows = store.shock.len(),
            "generated gas tables"
        );
        Ok(store)
    }

    /// Import one flat text file per table.
    pub fn import_flat_files(isentropic: &Path, shock: &Path) -> TableResult<Self> {
        Self::new(
            import::read_flat_file(TableKind::Isentropic, isentropic)?,
            import::read_flat_file(TableKind::Shock, shock)?,
        )
    }

    /// Import one directory of flat text pages per table.
    pub fn import_flat_dirs(isentropic: &Path, shock: &Path) -> TableResult<Self> {
        Self::new(
            import::read_flat_dir(TableKind::Isentropic, isentropic)?,
            import::read_flat_dir(TableKind::Shock, shock)?,
        )
    }

    /// Load a store written by [`TableStore::save`].
    pub fn open(path: &Path) -> TableResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| TableError::StoreRead {
            path: path.to_path_buf(),
            source,
        })?;
        let data: StoreData = serde_json::from_str(&content)?;
        let store = TableStore::try_from(data)?;
        debug!(path = %path.display(), "opened table store");
        Ok(store)
    }

    pub fn save(&self, path: &Path) -> TableResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        debug!(path = %path.display(), "saved table store");
        Ok(())
    }

    fn validate(&self) -> TableResult<()> {
        for (table, kind) in [
            (&self.isentropic, TableKind::Isentropic),
            (&self.shock, TableKind::Shock),
        ] {
            if table.kind() != kind {
                return Err(TableError::Malformed {
                    table: kind.name(),
                    what: format!("slot holds a {} table", table.kind().name()),
                });
            }
            table.validate()?;
        }
        Ok(())
    }

    pub fn table(&self, kind: TableKind) -> &Table {
        match kind {
            TableKind::Isentropic => &self.isentropic,
            TableKind::Shock => &self.shock,
        }
    }

    /// Table names available for lookup.
    pub fn table_names(&self) -> Vec<&'static str> {
        TableKind::ALL.iter().map(|k| k.name()).collect()
    }

    /// Column names of the named table (case-insensitive).
    pub fn column_names(&self, table: &str) -> TableResult<Vec<&'static str>> {
        Ok(TableKind::parse(table)?.columns().to_vec())
    }

    /// Interpolate the named table at `key == value`. See [`interp::lookup`].
    pub fn lookup(&self, table: &str, key: &str, value: Real) -> TableResult<Lookup> {
        interp::lookup(self.table(TableKind::parse(table)?), key, value)
    }

    /// Interpolate and keep only `column`. See [`interp::lookup_column`].
    pub fn lookup_column(
        &self,
        table: &str,
        key: &str,
        value: Real,
        column: &str,
    ) -> TableResult<Vec<Real>> {
        interp::lookup_column(self.table(TableKind::parse(table)?), key, value, column)
    }
}
