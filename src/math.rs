//! Shared numerical primitives.

use crate::errors::SiCalcError;
use crate::quantity::Quantity;

/// Primary scalar type used across the crate.
pub type Scalar = f64;

/// Natural logarithm of a dimensionless quantity.
///
/// # Errors
///
/// Returns [`SiCalcError::NotDimensionless`] if `x` carries a unit.
pub fn ln(x: &Quantity) -> Result<Scalar, SiCalcError> {
    Ok(x.dimensionless_value()?.ln())
}

/// Exponential of a dimensionless quantity.
///
/// # Errors
///
/// Returns [`SiCalcError::NotDimensionless`] if `x` carries a unit.
pub fn exp(x: &Quantity) -> Result<Scalar, SiCalcError> {
    Ok(x.dimensionless_value()?.exp())
}
