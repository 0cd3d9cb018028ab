//! Shared error types used across submodules.

use thiserror::Error;

use crate::dimension::{BaseDimension, UnitVector};
use crate::rational::ApproximationError;

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiCalcError {
    /// Raised when two quantities with different units are combined additively
    /// or compared.
    #[error("unit mismatch: [{left}] is not compatible with [{right}]")]
    UnitMismatch {
        /// Unit of the left-hand operand.
        left: UnitVector,
        /// Unit of the right-hand operand.
        right: UnitVector,
    },
    /// Raised when the square root of an odd unit power is requested.
    #[error("cannot take the square root of {}^{exponent}", .dimension.symbol())]
    InvalidUnitPower {
        /// Dimension carrying the odd exponent.
        dimension: BaseDimension,
        /// The offending exponent.
        exponent: i32,
    },
    /// Raised when a scaled unit exponent no longer fits an `i32`.
    #[error("unit exponent overflow")]
    ExponentOverflow,
    /// Raised when a dimensionless argument was required.
    #[error("expected a dimensionless quantity, got [{0}]")]
    NotDimensionless(UnitVector),
    /// Raised when a statistic needs more samples than were provided.
    #[error("need at least {required} samples, got {actual}")]
    InsufficientData {
        /// Minimum sample count for the statistic.
        required: usize,
        /// Number of samples provided.
        actual: usize,
    },
    /// Raised when paired sample sets differ in length.
    #[error("sample sets differ in length: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first set.
        left: usize,
        /// Length of the second set.
        right: usize,
    },
    /// Wraps failures of the rational exponent approximation.
    #[error(transparent)]
    Approximation(#[from] ApproximationError),
}
