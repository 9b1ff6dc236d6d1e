//! Fixed layout of the two reference tables.

use crate::error::{TableError, TableResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column names of the Isentropic table: `M`, `P0/P`, `ρ0/ρ`, `T0/T`, `A/A*`.
pub const ISENTROPIC_COLUMNS: [&str; 5] = ["M", "P0P", "rho0rho", "T0T", "AAstar"];

/// Column names of the Shock table: `M1`, `P2/P1`, `ρ2/ρ1`, `T2/T1`, `P02/P01`, `P02/P1`, `M2`.
pub const SHOCK_COLUMNS: [&str; 7] = ["M1", "P2P1", "rho2rho1", "T2T1", "P02P01", "P02P1", "M2"];

/// Index of the Mach column (`M` / `M1`) in either table.
pub const MACH: usize = 0;

/// Index of `A/A*` in the Isentropic table.
pub const AREA_RATIO: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    Isentropic,
    Shock,
}

impl TableKind {
    pub const ALL: [TableKind; 2] = [TableKind::Isentropic, TableKind::Shock];

    pub fn name(self) -> &'static str {
        match self {
            TableKind::Isentropic => "Isentropic",
            TableKind::Shock => "Shock",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            TableKind::Isentropic => &ISENTROPIC_COLUMNS,
            TableKind::Shock => &SHOCK_COLUMNS,
        }
    }

    /// Case-insensitive table name lookup.
    pub fn parse(name: &str) -> TableResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| TableError::UnknownTable {
                name: name.to_string(),
            })
    }

    /// Case-insensitive column index lookup.
    pub fn column_index(self, column: &str) -> TableResult<usize> {
        self.columns()
            .iter()
            .position(|c| c.eq_ignore_ascii_case(column.trim()))
            .ok_or_else(|| TableError::UnknownColumn {
                table: self.name(),
                column: column.to_string(),
            })
    }

    pub fn column_name(self, index: usize) -> &'static str {
        self.columns()[index]
    }

    /// Whether keying on `column` must be split into subsonic and supersonic
    /// branches. Only `A/A*` is two-valued in Mach.
    pub fn splits_branches(self, column: usize) -> bool {
        self == TableKind::Isentropic && column == AREA_RATIO
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableKind {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
