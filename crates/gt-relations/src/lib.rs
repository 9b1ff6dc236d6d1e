//! gt-relations: closed-form one-dimensional compressible-flow relations.
//!
//! Provides:
//! - Isentropic stagnation-to-static ratios and the area-Mach relation
//! - Normal shock jump conditions
//! - Local speed of sound
//! - `Gas` model bundling γ and R with checked, unit-aware wrappers
//!
//! # Domain errors
//!
//! The free functions follow numeric-library conventions: physically invalid
//! input (e.g. a subsonic upstream Mach number for a normal shock below
//! `sqrt((γ-1)/(2γ))`) yields NaN instead of panicking. Callers consuming the
//! free functions must check `is_finite()`. The `Gas` methods do that check
//! and return `RelationError` instead.
//!
//! # Example
//!
//! ```
//! use gt_relations::{Gas, isentropic, shock};
//!
//! let gamma = 1.4;
//! let a_ratio = isentropic::area_ratio(3.0, gamma);
//! assert!((a_ratio - 4.2346).abs() < 1e-4);
//!
//! let jump = Gas::AIR.normal_shock(3.0).unwrap();
//! assert!((jump.mach2 - shock::mach2(3.0, gamma)).abs() < 1e-12);
//! ```

pub mod error;
pub mod gas;
pub mod isentropic;
pub mod shock;
pub mod sound;

pub use error::{RelationError, RelationResult};
pub use gas::{Gas, IsentropicState, NormalShock};
pub use sound::speed_of_sound;
