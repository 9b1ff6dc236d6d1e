//! Table interpolation engine.
//!
//! A lookup keys a table by any of its columns and linearly interpolates every
//! column to the query value between the two bracketing rows:
//!
//! - the nearest row with `key >= value` and the nearest row with
//!   `key <= value` (by absolute distance, ties to the earlier row);
//! - the pair is oriented by row id, not by key, so the interpolation
//!   fraction always runs from the lower id to the higher one;
//! - if the two rows share a key value the fraction is 0.
//!
//! Keying the Isentropic table by `A/A*` is special: the area ratio is
//! U-shaped in Mach, so the search runs separately on the subsonic (`M < 1`)
//! and supersonic (`M > 1`) rows and yields one row per branch.
//!
//! A query outside a branch's range on one side clamps to the nearest
//! endpoint row. This is logged at `warn` and reported through
//! [`InterpolatedRow::is_clamped`] but is not an error.

use crate::error::{TableError, TableResult};
use crate::schema::{MACH, TableKind};
use crate::table::{Row, Table};
use gt_core::{Real, lerp};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Mach branch of a two-valued lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Branch {
    Supersonic,
    Subsonic,
}

impl Branch {
    /// Strict on both sides: the sonic row belongs to neither branch.
    fn admits(self, mach: Real) -> bool {
        match self {
            Branch::Supersonic => mach > 1.0,
            Branch::Subsonic => mach < 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Branch::Supersonic => "supersonic",
            Branch::Subsonic => "subsonic",
        }
    }
}

/// One interpolated table row, addressable by column name.
#[derive(Clone, Debug, PartialEq)]
pub struct InterpolatedRow {
    kind: TableKind,
    values: Vec<Real>,
    clamped: bool,
}

impl InterpolatedRow {
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// Values in column order.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Case-insensitive column access.
    pub fn get(&self, column: &str) -> TableResult<Real> {
        Ok(self.values[self.kind.column_index(column)?])
    }

    pub fn mach(&self) -> Real {
        self.values[MACH]
    }

    /// True when the query fell outside the tabulated range and the row is a
    /// copy of the nearest endpoint.
    pub fn is_clamped(&self) -> bool {
        self.clamped
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Real)> + '_ {
        self.kind
            .columns()
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    pub fn to_map(&self) -> BTreeMap<&'static str, Real> {
        self.iter().collect()
    }
}

/// Result of a lookup: one row, or one row per Mach branch.
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup {
    Single(InterpolatedRow),
    Branches {
        supersonic: InterpolatedRow,
        subsonic: InterpolatedRow,
    },
}

impl Lookup {
    pub fn single(&self) -> Option<&InterpolatedRow> {
        match self {
            Lookup::Single(row) => Some(row),
            Lookup::Branches { .. } => None,
        }
    }

    pub fn branch(&self, branch: Branch) -> Option<&InterpolatedRow> {
        match (self, branch) {
            (Lookup::Branches { supersonic, .. }, Branch::Supersonic) => Some(supersonic),
            (Lookup::Branches { subsonic, .. }, Branch::Subsonic) => Some(subsonic),
            (Lookup::Single(_), _) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Lookup::Single(_) => 1,
            Lookup::Branches { .. } => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Rows as a flat sequence; supersonic before subsonic.
    pub fn rows(&self) -> Vec<&InterpolatedRow> {
        match self {
            Lookup::Single(row) => vec![row],
            Lookup::Branches {
                supersonic,
                subsonic,
            } => vec![supersonic, subsonic],
        }
    }

    pub fn into_rows(self) -> Vec<InterpolatedRow> {
        match self {
            Lookup::Single(row) => vec![row],
            Lookup::Branches {
                supersonic,
                subsonic,
            } => vec![supersonic, subsonic],
        }
    }
}

/// Interpolate every column of `table` at `key == value`.
pub fn lookup(table: &Table, key: &str, value: Real) -> TableResult<Lookup> {
    let kind = table.kind();
    let key = kind.column_index(key)?;
    if !value.is_finite() {
        return Err(TableError::InvalidValue {
            what: "lookup value",
            value,
        });
    }

    let result = if kind.splits_branches(key) {
        Lookup::Branches {
            supersonic: interpolate(table, key, value, Some(Branch::Supersonic))?,
            subsonic: interpolate(table, key, value, Some(Branch::Subsonic))?,
        }
    } else {
        Lookup::Single(interpolate(table, key, value, None)?)
    };
    debug!(
        table = kind.name(),
        column = kind.column_name(key),
        value,
        rows = result.len(),
        "table lookup"
    );
    Ok(result)
}

/// Like [`lookup`] but collapses each row to the value of `column`.
pub fn lookup_column(table: &Table, key: &str, value: Real, column: &str) -> TableResult<Vec<Real>> {
    let column = table.kind().column_index(column)?;
    Ok(lookup(table, key, value)?
        .rows()
        .into_iter()
        .map(|row| row.values[column])
        .collect())
}

#[derive(Clone, Copy)]
enum Side {
    AtOrAbove,
    AtOrBelow,
}

/// Closest row on one side of `value`; the earliest row wins ties.
fn nearest(
    table: &Table,
    key: usize,
    value: Real,
    side: Side,
    branch: Option<Branch>,
) -> Option<&Row> {
    table
        .rows()
        .iter()
        .filter(|row| branch.is_none_or(|b| b.admits(row.mach())))
        .filter(|row| match side {
            Side::AtOrAbove => row.get(key) >= value,
            Side::AtOrBelow => row.get(key) <= value,
        })
        .min_by(|a, b| {
            (a.get(key) - value)
                .abs()
                .total_cmp(&(b.get(key) - value).abs())
        })
}

fn interpolate(
    table: &Table,
    key: usize,
    value: Real,
    branch: Option<Branch>,
) -> TableResult<InterpolatedRow> {
    let kind = table.kind();
    let above = nearest(table, key, value, Side::AtOrAbove, branch);
    let below = nearest(table, key, value, Side::AtOrBelow, branch);

    let (first, second, clamped) = match (above, below) {
        (Some(a), Some(b)) => (a, b, false),
        (Some(edge), None) | (None, Some(edge)) => {
            warn!(
                table = kind.name(),
                column = kind.column_name(key),
                value,
                branch = branch.map(Branch::label),
                row = edge.id,
                "lookup outside tabulated range, clamped to nearest row"
            );
            (edge, edge, true)
        }
        (None, None) => {
            return Err(TableError::EmptyBracket {
                table: kind.name(),
                column: kind.column_name(key),
                value,
            });
        }
    };

    let (low, high) = if first.id <= second.id {
        (first, second)
    } else {
        (second, first)
    };

    let span = high.get(key) - low.get(key);
    let t = if span == 0.0 {
        0.0
    } else {
        (value - low.get(key)) / span
    };

    let values = low
        .values
        .iter()
        .zip(&high.values)
        .map(|(&a, &b)| lerp(a, b, t))
        .collect();

    Ok(InterpolatedRow {
        kind,
        values,
        clamped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gt_core::{Tolerances, nearly_equal};

    /// Isentropic-shaped table with a U-shaped area column.
    fn isen() -> Table {
        Table::from_values(
            TableKind::Isentropic,
            vec![
                vec![0.5, 1.0, 1.0, 1.0, 1.34],
                vec![0.8, 2.0, 2.0, 2.0, 1.04],
                vec![1.0, 3.0, 3.0, 3.0, 1.00],
                vec![1.2, 3.5, 3.5, 3.5, 1.03],
                vec![1.5, 4.0, 4.0, 4.0, 1.18],
                vec![2.0, 5.0, 5.0, 5.0, 1.69],
            ],
        )
        .unwrap()
    }

    fn shock() -> Table {
        Table::from_values(
            TableKind::Shock,
            vec![
                vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.9, 1.0],
                vec![2.0, 4.5, 2.7, 1.7, 0.72, 5.6, 0.58],
                vec![3.0, 10.3, 3.9, 2.7, 0.33, 12.1, 0.48],
            ],
        )
        .unwrap()
    }

    fn close(a: Real, b: Real) -> bool {
        nearly_equal(a, b, Tolerances::rel(1e-12))
    }

    #[test]
    fn midpoint_interpolates_all_columns() {
        let found = lookup(&shock(), "M1", 2.5).unwrap();
        let row = found.single().unwrap();
        assert!(close(row.get("m1").unwrap(), 2.5));
        assert!(close(row.get("P2P1").unwrap(), 7.4));
        assert!(close(row.get("P02P01").unwrap(), 0.525));
        assert!(!row.is_clamped());
    }

    #[test]
    fn exact_hit_returns_row() {
        let found = lookup(&shock(), "M1", 2.0).unwrap();
        let row = found.single().unwrap();
        assert_eq!(row.values(), shock().rows()[1].values.as_slice());
    }

    #[test]
    fn decreasing_key_orients_by_id() {
        // M2 falls as M1 rises; the fraction must still come out right.
        let found = lookup(&shock(), "M2", 0.53).unwrap();
        let row = found.single().unwrap();
        assert!(close(row.get("M1").unwrap(), 2.5));
        assert!(close(row.get("M2").unwrap(), 0.53));
    }

    #[test]
    fn area_ratio_splits_into_branches() {
        let found = lookup(&isen(), "AAstar", 1.1).unwrap();
        assert_eq!(found.len(), 2);
        let sup = found.branch(Branch::Supersonic).unwrap();
        let sub = found.branch(Branch::Subsonic).unwrap();
        assert!(sup.mach() > 1.0 && sub.mach() < 1.0);
        assert!(close(sup.get("AAstar").unwrap(), 1.1));
        assert!(close(sub.get("AAstar").unwrap(), 1.1));
        assert!(close(sup.mach(), 1.2 + 0.3 * (1.1 - 1.03) / (1.18 - 1.03)));
        // Subsonic bracket runs from id 1 (A/A* = 1.34) to id 2 (1.04)
        assert!(close(sub.mach(), 0.74));
        assert!(!sup.is_clamped() && !sub.is_clamped());
    }

    #[test]
    fn sonic_row_belongs_to_neither_branch() {
        // Nothing tabulated strictly between A/A* = 1.00 (M = 1) and 1.03 on
        // the supersonic side, so that branch clamps to M = 1.2.
        let found = lookup(&isen(), "AAstar", 1.01).unwrap();
        let sup = found.branch(Branch::Supersonic).unwrap();
        assert!(sup.is_clamped());
        assert_eq!(sup.mach(), 1.2);
    }

    #[test]
    fn rows_are_supersonic_first() {
        let rows = lookup(&isen(), "aastar", 1.2).unwrap().into_rows();
        assert!(rows[0].mach() > 1.0);
        assert!(rows[1].mach() < 1.0);
    }

    #[test]
    fn mach_key_never_splits() {
        let found = lookup(&isen(), "M", 0.9).unwrap();
        assert!(found.single().is_some());
        assert!(found.branch(Branch::Subsonic).is_none());
    }

    #[test]
    fn below_range_clamps_to_first_row() {
        let found = lookup(&shock(), "M1", 0.5).unwrap();
        let row = found.single().unwrap();
        assert!(row.is_clamped());
        assert_eq!(row.values(), shock().rows()[0].values.as_slice());
    }

    #[test]
    fn above_range_clamps_to_last_row() {
        let found = lookup(&shock(), "M1", 9.0).unwrap();
        assert_eq!(found.single().unwrap().mach(), 3.0);
    }

    #[test]
    fn lookup_column_collapses_rows() {
        let vals = lookup_column(&isen(), "AAstar", 1.1, "m").unwrap();
        assert_eq!(vals.len(), 2);
        assert!(vals[0] > 1.0 && vals[1] < 1.0);
    }

    #[test]
    fn unknown_names_fail_fast() {
        assert!(matches!(
            lookup(&isen(), "P2P1", 1.0),
            Err(TableError::UnknownColumn { .. })
        ));
        assert!(matches!(
            lookup_column(&isen(), "M", 1.0, "bogus"),
            Err(TableError::UnknownColumn { .. })
        ));
    }

    #[test]
    fn non_finite_value_rejected() {
        assert!(matches!(
            lookup(&isen(), "M", Real::NAN),
            Err(TableError::InvalidValue { .. })
        ));
    }

    #[test]
    fn area_ratio_without_subsonic_rows_is_empty_bracket() {
        let table = Table::from_values(
            TableKind::Isentropic,
            vec![
                vec![1.5, 3.67, 2.53, 1.45, 1.18],
                vec![2.0, 7.82, 4.35, 1.8, 1.69],
            ],
        )
        .unwrap();
        let err = lookup(&table, "AAstar", 1.3).unwrap_err();
        assert!(matches!(
            err,
            TableError::EmptyBracket {
                table: "Isentropic",
                column: "AAstar",
                value
            } if value == 1.3
        ));
    }

    #[test]
    fn duplicate_key_uses_zero_fraction() {
        let table = Table::from_values(
            TableKind::Shock,
            vec![
                vec![1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0],
                vec![2.0, 1.0, 2.0, 2.0, 2.0, 3.0, 2.0],
            ],
        )
        .unwrap();
        // Both rows share P2P1 = 1.0
        let row = lookup(&table, "P2P1", 1.0).unwrap().into_rows().remove(0);
        assert_eq!(row.mach(), 1.0);
    }

    #[test]
    fn row_maps_by_name() {
        let row = lookup(&shock(), "M1", 3.0).unwrap().into_rows().remove(0);
        let map = row.to_map();
        assert_eq!(map.len(), 7);
        assert_eq!(map["M2"], 0.48);
    }
}
