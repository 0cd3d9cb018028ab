//! Best rational approximation of real numbers by continued fractions.
//!
//! Unit exponents are integers, so a real exponent has to be turned into a
//! fraction before it can scale a [`UnitVector`](crate::dimension::UnitVector).
//! [`approximate`] walks the convergents of the continued-fraction expansion
//! of `x` and stops at the last one whose denominator stays within the bound.
//! Only convergents are considered, not semiconvergents.

use std::fmt;

use nalgebra::Matrix2;
use thiserror::Error;

use crate::math::Scalar;

/// Denominator bound used when a unit is raised to a real exponent.
pub const DEFAULT_MAX_DENOMINATOR: i64 = 1000;

/// Errors produced by [`approximate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApproximationError {
    /// The denominator bound must be strictly positive.
    #[error("denominator bound must be positive, got {0}")]
    InvalidDenominatorBound(i64),
    /// NaN and infinities have no continued-fraction expansion.
    #[error("cannot approximate non-finite value {0}")]
    NonFiniteInput(Scalar),
    /// The integer part does not fit the convergent matrix.
    #[error("value {0} is out of range for rational approximation")]
    OutOfRange(Scalar),
}

/// Exact ratio `numerator / denominator`.
///
/// The denominator is always positive. Fractions are not reduced, so `2/4`
/// and `1/2` are distinct values.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RationalFraction {
    numerator: i64,
    denominator: i64,
}

impl RationalFraction {
    /// Creates a fraction, moving the sign into the numerator.
    ///
    /// Returns `None` when `denominator` is zero.
    #[must_use]
    pub const fn new(numerator: i64, denominator: i64) -> Option<Self> {
        if denominator == 0 {
            None
        } else if denominator < 0 {
            Some(Self {
                numerator: -numerator,
                denominator: -denominator,
            })
        } else {
            Some(Self {
                numerator,
                denominator,
            })
        }
    }

    /// Fraction `n / 1`.
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    /// Signed numerator.
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Positive denominator.
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Floating-point value of the fraction.
    #[must_use]
    pub fn value(&self) -> Scalar {
        self.numerator as Scalar / self.denominator as Scalar
    }
}

impl fmt::Display for RationalFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.numerator, self.denominator)
    }
}

/// Applies one continued-fraction term `a` to the convergent matrix.
///
/// The matrix holds `[[h(n-1), h(n-2)], [k(n-1), k(n-2)]]`; the update is
/// `m * [[a, 1], [1, 0]]` evaluated with overflow checks.
fn advance(m: &Matrix2<i64>, a: i64) -> Option<Matrix2<i64>> {
    let numerator = m[(0, 0)].checked_mul(a)?.checked_add(m[(0, 1)])?;
    let denominator = m[(1, 0)].checked_mul(a)?.checked_add(m[(1, 1)])?;
    Some(Matrix2::new(numerator, m[(0, 0)], denominator, m[(1, 0)]))
}

/// Approximates `x` by the last continued-fraction convergent whose
/// denominator does not exceed `max_denominator`.
///
/// Terms are taken with a true floor, so negative inputs produce a negative
/// numerator and a positive denominator.
///
/// # Errors
///
/// Fails for a non-positive bound, a non-finite `x`, or an `x` whose
/// integer part does not fit an `i64`.
pub fn approximate(x: Scalar, max_denominator: i64) -> Result<RationalFraction, ApproximationError> {
    if max_denominator <= 0 {
        return Err(ApproximationError::InvalidDenominatorBound(max_denominator));
    }
    if !x.is_finite() {
        return Err(ApproximationError::NonFiniteInput(x));
    }
    if x.floor().abs() >= i64::MAX as Scalar {
        return Err(ApproximationError::OutOfRange(x));
    }

    let mut m = Matrix2::<i64>::identity();
    let mut rest = x;
    loop {
        let term = rest.floor();
        // Saturating cast; an oversized term overflows `advance` below.
        let Some(next) = advance(&m, term as i64) else {
            break;
        };
        if next[(1, 0)] > max_denominator {
            break;
        }
        m = next;
        tracing::trace!(
            numerator = m[(0, 0)],
            denominator = m[(1, 0)],
            "continued-fraction convergent"
        );
        if rest == term {
            break;
        }
        rest = 1.0 / (rest - term);
    }

    Ok(RationalFraction {
        numerator: m[(0, 0)],
        denominator: m[(1, 0)],
    })
}
