//! Values tagged with a unit and a first-order uncertainty.
//!
//! Additive operations require both operands to share a [`UnitVector`];
//! multiplicative ones combine the units. Uncertainties of independent
//! operands are combined in quadrature:
//!
//! | operation     | uncertainty of the result                 |
//! |---------------|-------------------------------------------|
//! | `a ± b`       | `√(σa² + σb²)`                            |
//! | `a · b`       | `√((σb·a)² + (σa·b)²)`                    |
//! | `a / b`       | `√((σa/b)² + (f·σb/b)²)` with `f = a/b`   |
//! | `aⁿ`          | `|n · σa · aⁿ⁻¹|`                         |
//! | `k · a`       | `|k| · σa`                                |
//! | `k / a`       | `|f · σa / a|` with `f = k/a`             |

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::dimension::{BaseDimension, UnitVector};
use crate::errors::SiCalcError;
use crate::math::Scalar;

/// Numeric value with a unit and an optional uncertainty (zero when untracked).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    value: Scalar,
    unit: UnitVector,
    uncertainty: Scalar,
}

/// Right-hand side of an operation that accepts either a quantity or a bare number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// A value carrying a unit.
    Quantity(Quantity),
    /// A plain number.
    Number(Scalar),
}

impl From<Quantity> for Operand {
    fn from(q: Quantity) -> Self {
        Self::Quantity(q)
    }
}

impl From<Scalar> for Operand {
    fn from(x: Scalar) -> Self {
        Self::Number(x)
    }
}

impl Quantity {
    /// Creates a quantity without uncertainty.
    #[must_use]
    pub const fn new(value: Scalar, unit: UnitVector) -> Self {
        Self {
            value,
            unit,
            uncertainty: 0.0,
        }
    }

    /// One unit of a single base dimension, e.g. one kilogram.
    #[must_use]
    pub const fn base(dimension: BaseDimension) -> Self {
        Self::new(1.0, UnitVector::base(dimension))
    }

    /// Returns a copy carrying `uncertainty` (stored as its magnitude).
    #[must_use]
    pub fn with_uncertainty(mut self, uncertainty: Scalar) -> Self {
        self.uncertainty = uncertainty.abs();
        self
    }

    /// Numeric magnitude expressed in SI base units.
    #[must_use]
    pub const fn value(&self) -> Scalar {
        self.value
    }

    /// Unit exponent vector.
    #[must_use]
    pub const fn unit(&self) -> UnitVector {
        self.unit
    }

    /// Absolute uncertainty, in the same unit as the value.
    #[must_use]
    pub const fn uncertainty(&self) -> Scalar {
        self.uncertainty
    }

    /// Attaches an uncertainty in place.
    ///
    /// A quantity operand must share this quantity's unit and contributes its
    /// value; a bare number is taken as is. Negative inputs are stored as
    /// their magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`SiCalcError::UnitMismatch`] for a quantity with another unit.
    pub fn set_uncertainty(&mut self, uncertainty: impl Into<Operand>) -> Result<(), SiCalcError> {
        let value = match uncertainty.into() {
            Operand::Quantity(q) => {
                self.check_unit(&q)?;
                q.value
            }
            Operand::Number(x) => x,
        };
        self.uncertainty = value.abs();
        Ok(())
    }

    /// Verifies that `other` has the same unit.
    ///
    /// # Errors
    ///
    /// Returns [`SiCalcError::UnitMismatch`] when the units differ.
    pub fn check_unit(&self, other: &Self) -> Result<(), SiCalcError> {
        if self.unit == other.unit {
            Ok(())
        } else {
            tracing::debug!(left = %self.unit, right = %other.unit, "unit mismatch");
            Err(SiCalcError::UnitMismatch {
                left: self.unit,
                right: other.unit,
            })
        }
    }

    /// Value of a dimensionless quantity.
    ///
    /// # Errors
    ///
    /// Returns [`SiCalcError::NotDimensionless`] if the quantity has a unit.
    pub fn dimensionless_value(&self) -> Result<Scalar, SiCalcError> {
        if self.unit.is_dimensionless() {
            Ok(self.value)
        } else {
            Err(SiCalcError::NotDimensionless(self.unit))
        }
    }

    /// Sum of two quantities with the same unit.
    ///
    /// # Errors
    ///
    /// Returns [`SiCalcError::UnitMismatch`] when the units differ.
    pub fn try_add(self, rhs: Self) -> Result<Self, SiCalcError> {
        self.check_unit(&rhs)?;
        Ok(Self {
            value: self.value + rhs.value,
            unit: self.unit,
            uncertainty: self.uncertainty.hypot(rhs.uncertainty),
        })
    }

    /// Difference of two quantities with the same unit.
    ///
    /// # Errors
    ///
    /// Returns [`SiCalcError::UnitMismatch`] when the units differ.
    pub fn try_sub(self, rhs: Self) -> Result<Self, SiCalcError> {
        self.check_unit(&rhs)?;
        Ok(Self {
            value: self.value - rhs.value,
            unit: self.unit,
            uncertainty: self.uncertainty.hypot(rhs.uncertainty),
        })
    }

    /// `1 / self`.
    #[must_use]
    pub fn recip(self) -> Self {
        1.0 / self
    }

    /// Raises the quantity to an integer power.
    ///
    /// # Errors
    ///
    /// Returns [`SiCalcError::ExponentOverflow`] if a unit exponent overflows.
    pub fn powi(self, n: i32) -> Result<Self, SiCalcError> {
        Ok(Self {
            value: self.value.powi(n),
            unit: self.unit.powi(n)?,
            uncertainty: power_uncertainty(self.value, self.uncertainty, Scalar::from(n)),
        })
    }

    /// Raises the quantity to a real power.
    ///
    /// The unit follows [`UnitVector::powf`], so non-integral exponents are
    /// applied through a rational approximation with floor division.
    ///
    /// # Errors
    ///
    /// Fails when the exponent cannot be approximated or a unit exponent
    /// overflows.
    pub fn powf(self, exponent: Scalar) -> Result<Self, SiCalcError> {
        Ok(Self {
            value: self.value.powf(exponent),
            unit: self.unit.powf(exponent)?,
            uncertainty: power_uncertainty(self.value, self.uncertainty, exponent),
        })
    }

    /// Square root; the unit must have even exponents only.
    ///
    /// # Errors
    ///
    /// Returns [`SiCalcError::InvalidUnitPower`] for an odd unit exponent.
    pub fn sqrt(self) -> Result<Self, SiCalcError> {
        Ok(Self {
            value: self.value.sqrt(),
            unit: self.unit.sqrt()?,
            uncertainty: power_uncertainty(self.value, self.uncertainty, 0.5),
        })
    }
}

/// `|σ · factor|`, with an untracked `σ` staying zero even for an infinite
/// or NaN factor.
fn scaled_error(uncertainty: Scalar, factor: Scalar) -> Scalar {
    if uncertainty == 0.0 {
        return 0.0;
    }
    (uncertainty * factor).abs()
}

/// First-order propagation through `x^n`.
fn power_uncertainty(value: Scalar, uncertainty: Scalar, n: Scalar) -> Scalar {
    if uncertainty == 0.0 {
        return 0.0;
    }
    (n * uncertainty * value.powf(n - 1.0)).abs()
}

/// Checks two optional operands for unit compatibility; an absent operand
/// stands for the dimensionless number one.
///
/// # Errors
///
/// Returns [`SiCalcError::UnitMismatch`] when the units differ.
pub fn check_compatible(a: Option<&Quantity>, b: Option<&Quantity>) -> Result<(), SiCalcError> {
    let one = Quantity::new(1.0, UnitVector::DIMENSIONLESS);
    a.unwrap_or(&one).check_unit(b.unwrap_or(&one))
}

/// # Panics
///
/// Panics when the units differ; use [`Quantity::try_add`] to handle that case.
impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match self.try_add(rhs) {
            Ok(sum) => sum,
            Err(err) => panic!("{err}"),
        }
    }
}

/// # Panics
///
/// Panics when the units differ; use [`Quantity::try_sub`] to handle that case.
impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        match self.try_sub(rhs) {
            Ok(difference) => difference,
            Err(err) => panic!("{err}"),
        }
    }
}

/// # Panics
///
/// Panics if a unit exponent overflows `i32`.
impl Mul for Quantity {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value * rhs.value,
            unit: self.unit * rhs.unit,
            uncertainty: scaled_error(rhs.uncertainty, self.value)
                .hypot(scaled_error(self.uncertainty, rhs.value)),
        }
    }
}

impl Mul<Scalar> for Quantity {
    type Output = Self;

    fn mul(self, rhs: Scalar) -> Self::Output {
        Self {
            value: self.value * rhs,
            unit: self.unit,
            uncertainty: scaled_error(self.uncertainty, rhs),
        }
    }
}

impl Mul<Quantity> for Scalar {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Self::Output {
        rhs * self
    }
}

/// # Panics
///
/// Panics if a unit exponent overflows `i32`.
impl Div for Quantity {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let value = self.value / rhs.value;
        Self {
            value,
            unit: self.unit / rhs.unit,
            uncertainty: scaled_error(self.uncertainty, rhs.value.recip())
                .hypot(scaled_error(rhs.uncertainty, value / rhs.value)),
        }
    }
}

impl Div<Scalar> for Quantity {
    type Output = Self;

    fn div(self, rhs: Scalar) -> Self::Output {
        Self {
            value: self.value / rhs,
            unit: self.unit,
            uncertainty: scaled_error(self.uncertainty, rhs.recip()),
        }
    }
}

impl Div<Quantity> for Scalar {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Self::Output {
        let value = self / rhs.value;
        Quantity {
            value,
            unit: rhs.unit.recip(),
            uncertainty: scaled_error(rhs.uncertainty, value / rhs.value),
        }
    }
}

impl Neg for Quantity {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            value: -self.value,
            ..self
        }
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Quantity {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<Scalar> for Quantity {
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = *self * rhs;
    }
}

impl DivAssign for Quantity {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl DivAssign<Scalar> for Quantity {
    fn div_assign(&mut self, rhs: Scalar) {
        *self = *self / rhs;
    }
}
