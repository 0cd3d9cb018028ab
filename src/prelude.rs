//! Convenience re-exports for unit-checked calculations.

pub use crate::constants::*;
pub use crate::dimension::{BaseDimension, UnitVector};
pub use crate::display::DisplayName;
pub use crate::errors::SiCalcError;
pub use crate::format::FormatOptions;
pub use crate::math::{exp, ln, Scalar};
pub use crate::quantity::{check_compatible, Operand, Quantity};
pub use crate::rational::{approximate, RationalFraction};
pub use crate::stats::{linear_regression, mean};
pub use crate::units::*;
