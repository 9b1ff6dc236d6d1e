//! Reference tables computed from the closed-form relations.

use crate::error::{TableError, TableResult};
use crate::schema::TableKind;
use crate::table::Table;
use gt_core::Real;
use gt_relations::Gas;
use serde::{Deserialize, Serialize};

/// Uniform Mach grid for generated tables.
///
/// Grid points are `i / rows_per_unit_mach`, so every integer Mach number
/// (in particular M = 1) lands exactly on a row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableGrid {
    pub mach_max: Real,
    pub rows_per_unit_mach: u32,
}

impl Default for TableGrid {
    fn default() -> Self {
        Self {
            mach_max: 10.0,
            rows_per_unit_mach: 100,
        }
    }
}

impl TableGrid {
    pub fn validate(&self) -> TableResult<()> {
        if !self.mach_max.is_finite() || self.mach_max <= 1.0 {
            return Err(TableError::InvalidValue {
                what: "mach_max (must exceed 1)",
                value: self.mach_max,
            });
        }
        if self.rows_per_unit_mach == 0 {
            return Err(TableError::InvalidValue {
                what: "rows_per_unit_mach",
                value: 0.0,
            });
        }
        Ok(())
    }

    fn last_index(&self) -> u32 {
        (self.mach_max * Real::from(self.rows_per_unit_mach)).round() as u32
    }

    fn mach_at(&self, index: u32) -> Real {
        Real::from(index) / Real::from(self.rows_per_unit_mach)
    }
}

/// Isentropic table from one grid step above rest up to `mach_max`.
///
/// M = 0 itself is skipped since `A/A*` is infinite there.
pub fn isentropic_table(gas: &Gas, grid: &TableGrid) -> TableResult<Table> {
    gas.validate()?;
    grid.validate()?;
    let rows = (1..=grid.last_index())
        .map(|i| -> TableResult<Vec<Real>> {
            let st = gas.isentropic(grid.mach_at(i))?;
            Ok(vec![
                st.mach,
                st.pressure_ratio,
                st.density_ratio,
                st.temperature_ratio,
                st.area_ratio,
            ])
        })
        .collect::<TableResult<Vec<_>>>()?;
    Table::from_values(TableKind::Isentropic, rows)
}

/// Shock table from M1 = 1 up to `mach_max`.
pub fn shock_table(gas: &Gas, grid: &TableGrid) -> TableResult<Table> {
    gas.validate()?;
    grid.validate()?;
    let rows = (grid.rows_per_unit_mach..=grid.last_index())
        .map(|i| -> TableResult<Vec<Real>> {
            let ns = gas.normal_shock(grid.mach_at(i))?;
            Ok(vec![
                ns.mach1,
                ns.pressure_ratio,
                ns.density_ratio,
                ns.temperature_ratio,
                ns.stagnation_pressure_ratio,
                ns.pitot_pressure_ratio,
                ns.mach2,
            ])
        })
        .collect::<TableResult<Vec<_>>>()?;
    Table::from_values(TableKind::Shock, rows)
}
