//! Base dimensions and the exponent vectors that describe derived units.

use std::fmt;
use std::ops::{Div, Mul};

use crate::errors::SiCalcError;
use crate::math::Scalar;
use crate::rational::{approximate, RationalFraction, DEFAULT_MAX_DENOMINATOR};

/// SI base dimensions tracked by a [`UnitVector`], in canonical order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseDimension {
    /// Mass (kilogram).
    Mass,
    /// Length (meter).
    Length,
    /// Time (second).
    Time,
    /// Electric current (ampere).
    Current,
    /// Thermodynamic temperature (kelvin).
    Temperature,
    /// Amount of substance (mole).
    Amount,
}

impl BaseDimension {
    /// Number of base dimensions.
    pub const COUNT: usize = 6;

    /// All dimensions in canonical order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Mass,
        Self::Length,
        Self::Time,
        Self::Current,
        Self::Temperature,
        Self::Amount,
    ];

    /// Symbol of the SI base unit for this dimension.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mass => "kg",
            Self::Length => "m",
            Self::Time => "s",
            Self::Current => "A",
            Self::Temperature => "K",
            Self::Amount => "mol",
        }
    }

    /// Position of the dimension inside a [`UnitVector`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Integer exponents over every [`BaseDimension`].
///
/// A zero exponent means the dimension is absent; two vectors are equal
/// exactly when all exponents match, which makes the vector usable as a
/// map key. Every operation returns a new vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UnitVector {
    exponents: [i32; BaseDimension::COUNT],
}

impl UnitVector {
    /// The dimensionless unit (all exponents zero).
    pub const DIMENSIONLESS: Self = Self::from_exponents([0; BaseDimension::COUNT]);

    /// Builds a vector from exponents given in canonical dimension order.
    #[must_use]
    pub const fn from_exponents(exponents: [i32; BaseDimension::COUNT]) -> Self {
        Self { exponents }
    }

    /// A single base dimension raised to the first power.
    #[must_use]
    pub const fn base(dimension: BaseDimension) -> Self {
        let mut exponents = [0; BaseDimension::COUNT];
        exponents[dimension.index()] = 1;
        Self { exponents }
    }

    /// Exponent of `dimension`.
    #[must_use]
    pub const fn exponent(&self, dimension: BaseDimension) -> i32 {
        self.exponents[dimension.index()]
    }

    /// All exponents in canonical dimension order.
    #[must_use]
    pub const fn exponents(&self) -> [i32; BaseDimension::COUNT] {
        self.exponents
    }

    /// True when every exponent is zero.
    #[must_use]
    pub const fn is_dimensionless(&self) -> bool {
        let mut i = 0;
        while i < BaseDimension::COUNT {
            if self.exponents[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Per-dimension sum of exponents, or `None` on `i32` overflow.
    #[must_use]
    pub const fn checked_product(self, other: Self) -> Option<Self> {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < BaseDimension::COUNT {
            exponents[i] = match exponents[i].checked_add(other.exponents[i]) {
                Some(exponent) => exponent,
                None => return None,
            };
            i += 1;
        }
        Some(Self { exponents })
    }

    /// Per-dimension difference of exponents, or `None` on `i32` overflow.
    #[must_use]
    pub const fn checked_quotient(self, other: Self) -> Option<Self> {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < BaseDimension::COUNT {
            exponents[i] = match exponents[i].checked_sub(other.exponents[i]) {
                Some(exponent) => exponent,
                None => return None,
            };
            i += 1;
        }
        Some(Self { exponents })
    }

    /// Per-dimension sum of exponents; usable in constant expressions.
    ///
    /// # Panics
    ///
    /// Panics if an exponent overflows `i32`; see [`checked_product`](Self::checked_product).
    #[must_use]
    pub const fn product(self, other: Self) -> Self {
        match self.checked_product(other) {
            Some(unit) => unit,
            None => panic!("unit exponent overflow"),
        }
    }

    /// Per-dimension difference of exponents; usable in constant expressions.
    ///
    /// # Panics
    ///
    /// Panics if an exponent overflows `i32`; see [`checked_quotient`](Self::checked_quotient).
    #[must_use]
    pub const fn quotient(self, other: Self) -> Self {
        match self.checked_quotient(other) {
            Some(unit) => unit,
            None => panic!("unit exponent overflow"),
        }
    }

    /// Multiplicative inverse (negated exponents).
    #[must_use]
    pub const fn recip(self) -> Self {
        Self::DIMENSIONLESS.quotient(self)
    }

    /// Raises the unit to an integer power.
    ///
    /// # Errors
    ///
    /// Returns [`SiCalcError::ExponentOverflow`] if a scaled exponent does
    /// not fit an `i32`.
    pub fn powi(self, n: i32) -> Result<Self, SiCalcError> {
        let mut exponents = self.exponents;
        for exponent in &mut exponents {
            *exponent = exponent.checked_mul(n).ok_or(SiCalcError::ExponentOverflow)?;
        }
        Ok(Self { exponents })
    }

    /// Scales every exponent by `fraction` using floor division.
    ///
    /// `m^3` raised to `1/2` becomes `m^1`; the fraction is used as given,
    /// without reducing it first.
    ///
    /// # Errors
    ///
    /// Returns [`SiCalcError::ExponentOverflow`] if a scaled exponent does
    /// not fit an `i32`.
    pub fn pow_rational(self, fraction: RationalFraction) -> Result<Self, SiCalcError> {
        let mut exponents = [0; BaseDimension::COUNT];
        for (scaled, &exponent) in exponents.iter_mut().zip(self.exponents.iter()) {
            let numerator = i64::from(exponent)
                .checked_mul(fraction.numerator())
                .ok_or(SiCalcError::ExponentOverflow)?;
            *scaled = i32::try_from(numerator.div_euclid(fraction.denominator()))
                .map_err(|_| SiCalcError::ExponentOverflow)?;
        }
        Ok(Self { exponents })
    }

    /// Raises the unit to a real power.
    ///
    /// Integral exponents scale exactly. Anything else is first approximated
    /// by a fraction with denominator at most [`DEFAULT_MAX_DENOMINATOR`] and
    /// applied through [`pow_rational`](Self::pow_rational).
    ///
    /// # Errors
    ///
    /// Fails if `exponent` cannot be approximated (NaN, infinite, too large)
    /// or a scaled exponent overflows.
    pub fn powf(self, exponent: Scalar) -> Result<Self, SiCalcError> {
        let fraction = if exponent.fract() == 0.0 && exponent.abs() <= Scalar::from(i32::MAX) {
            RationalFraction::from_integer(exponent as i64)
        } else {
            approximate(exponent, DEFAULT_MAX_DENOMINATOR)?
        };
        self.pow_rational(fraction)
    }

    /// Exact square root: halves every exponent.
    ///
    /// # Errors
    ///
    /// Returns [`SiCalcError::InvalidUnitPower`] naming the first dimension
    /// with an odd exponent.
    pub fn sqrt(self) -> Result<Self, SiCalcError> {
        let mut exponents = [0; BaseDimension::COUNT];
        for dimension in BaseDimension::ALL {
            let exponent = self.exponent(dimension);
            if exponent % 2 != 0 {
                tracing::debug!(unit = %self, ?dimension, exponent, "odd exponent under square root");
                return Err(SiCalcError::InvalidUnitPower {
                    dimension,
                    exponent,
                });
            }
            exponents[dimension.index()] = exponent / 2;
        }
        Ok(Self { exponents })
    }
}

impl Mul for UnitVector {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.product(rhs)
    }
}

impl Div for UnitVector {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.quotient(rhs)
    }
}

impl From<BaseDimension> for UnitVector {
    fn from(dimension: BaseDimension) -> Self {
        Self::base(dimension)
    }
}

/// Renders `kg^1*m^2*s^-3`; zero exponents are skipped, so the
/// dimensionless unit renders as an empty string.
impl fmt::Display for UnitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for dimension in BaseDimension::ALL {
            let exponent = self.exponent(dimension);
            if exponent == 0 {
                continue;
            }
            if !first {
                f.write_str("*")?;
            }
            write!(f, "{}^{exponent}", dimension.symbol())?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KG: UnitVector = UnitVector::base(BaseDimension::Mass);
    const M: UnitVector = UnitVector::base(BaseDimension::Length);
    const S: UnitVector = UnitVector::base(BaseDimension::Time);
    const A: UnitVector = UnitVector::base(BaseDimension::Current);

    fn samples() -> Vec<UnitVector> {
        vec![
            UnitVector::DIMENSIONLESS,
            KG,
            M * M,
            KG * M / (S * S),
            UnitVector::from_exponents([1, 2, -3, -1, 0, 0]),
            UnitVector::from_exponents([0, -3, 0, 0, 1, 2]),
        ]
    }

    #[test]
    fn multiplication_is_commutative_with_identity() {
        for a in samples() {
            assert_eq!(a * UnitVector::DIMENSIONLESS, a);
            for b in samples() {
                assert_eq!(a * b, b * a);
                assert_eq!((a * b) / b, a);
            }
        }
    }

    #[test]
    fn sqrt_of_square_round_trips() {
        for a in samples() {
            let square = a.powi(2).unwrap();
            let root = square.sqrt().unwrap();
            assert_eq!(root, a);
            assert_eq!(root * root, square);
        }
    }

    #[test]
    fn sqrt_rejects_odd_exponent() {
        let err = (M * M * S).sqrt().unwrap_err();
        assert_eq!(
            err,
            SiCalcError::InvalidUnitPower {
                dimension: BaseDimension::Time,
                exponent: 1,
            }
        );
    }

    #[test]
    fn real_powers_scale_through_fractions() {
        let area = M * M;
        assert_eq!(area.powf(0.5).unwrap(), M);
        assert_eq!(area.powf(1.5).unwrap(), M.powi(3).unwrap());
        assert_eq!(M.powf(-2.0).unwrap(), (M * M).recip());
        // m^3 to the 1/2 floors to m^1
        assert_eq!(M.powi(3).unwrap().powf(0.5).unwrap(), M);
        assert_eq!(M.powf(-0.5).unwrap(), M.recip());
    }

    #[test]
    fn unreduced_fraction_is_applied_as_given() {
        let two_quarters = RationalFraction::new(2, 4).unwrap();
        let one_half = RationalFraction::new(1, 2).unwrap();
        let m3 = M.powi(3).unwrap();
        assert_eq!(m3.pow_rational(two_quarters).unwrap(), M);
        assert_eq!(m3.pow_rational(one_half).unwrap(), M);
        assert_eq!(S.recip().pow_rational(two_quarters).unwrap(), S.recip());
    }

    #[test]
    fn oversized_powers_report_overflow() {
        let area = M * M;
        assert_eq!(area.powi(1 << 30), Err(SiCalcError::ExponentOverflow));
        assert_eq!(area.powf(1_073_741_824.0), Err(SiCalcError::ExponentOverflow));
        assert_eq!(area.powi(1 << 29).unwrap().exponent(BaseDimension::Length), 1 << 30);
        let huge = UnitVector::from_exponents([i32::MAX, 0, 0, 0, 0, 0]);
        assert!(huge.checked_product(KG).is_none());
        assert!(huge.recip().checked_quotient(KG.powi(2).unwrap()).is_none());
        assert_eq!(huge.checked_quotient(KG), Some(UnitVector::from_exponents([i32::MAX - 1, 0, 0, 0, 0, 0])));
    }

    #[test]
    fn non_finite_exponent_is_rejected() {
        assert!(matches!(
            M.powf(Scalar::NAN),
            Err(SiCalcError::Approximation(_))
        ));
    }

    #[test]
    fn display_uses_canonical_order() {
        let volt = KG * M * M / (A * S.powi(3).unwrap());
        assert_eq!(volt.to_string(), "kg^1*m^2*s^-3*A^-1");
        assert_eq!(UnitVector::DIMENSIONLESS.to_string(), "");
        assert_eq!(
            UnitVector::base(BaseDimension::Amount).to_string(),
            "mol^1"
        );
    }

    #[test]
    fn equal_vectors_hash_alike() {
        use std::collections::HashSet;

        let set: HashSet<UnitVector> = [KG * M, M * KG, KG * M * S / S].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
