//! Relation errors.

use gt_core::GtError;
use thiserror::Error;

/// Result type for checked relation evaluation.
pub type RelationResult<T> = Result<T, RelationError>;

/// Errors raised by the checked `Gas` API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelationError {
    /// Input outside the physical domain of the relation.
    #[error("Outside physical domain for {what}: {value}")]
    Domain { what: &'static str, value: f64 },

    /// Relation produced NaN or infinity.
    #[error("Non-finite result for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Gas properties that no calorically-perfect gas can have.
    #[error("Invalid gas: {what}")]
    InvalidGas { what: &'static str },
}

impl From<RelationError> for GtError {
    fn from(err: RelationError) -> Self {
        match err {
            RelationError::Domain { what, value } => GtError::InvalidArg {
                what: format!("{what} outside physical domain ({value})"),
            },
            RelationError::NonFinite { what, value } => GtError::NonFinite { what, value },
            RelationError::InvalidGas { what } => GtError::InvalidArg {
                what: format!("invalid gas: {what}"),
            },
        }
    }
}

pub(crate) fn finite(value: f64, what: &'static str) -> RelationResult<f64> {
    gt_core::ensure_finite(value, what).map_err(|_| RelationError::NonFinite { what, value })
}
