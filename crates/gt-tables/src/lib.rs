//! gt-tables: gas-dynamics reference tables and the interpolation engine.
//!
//! Provides:
//! - Table schema for the Isentropic and Shock tables
//! - `TableStore`: the read-only, loaded-once reference data (JSON persistence,
//!   flat-file import, generation from the closed-form relations)
//! - `lookup`: bracketing + linear interpolation by any column, with branch
//!   separation for the two-valued area ratio `A/A*`
//! - `query`: single entry point with table/column discovery
//!
//! # Example
//!
//! ```
//! use gt_relations::Gas;
//! use gt_tables::{Branch, TableGrid, TableStore};
//!
//! let store = TableStore::generate(&Gas::AIR, &TableGrid::default()).unwrap();
//! let found = store.lookup("isentropic", "AAstar", 2.0).unwrap();
//! let supersonic = found.branch(Branch::Supersonic).unwrap();
//! assert!((supersonic.get("M").unwrap() - 2.197).abs() < 1e-2);
//! ```

pub mod error;
pub mod generate;
pub mod import;
pub mod interp;
pub mod query;
pub mod schema;
pub mod store;
pub mod table;

pub use error::{TableError, TableResult};
pub use generate::TableGrid;
pub use interp::{Branch, InterpolatedRow, Lookup, lookup, lookup_column};
pub use query::{Query, QueryOutput, query};
pub use schema::TableKind;
pub use store::TableStore;
pub use table::{Row, Table};
