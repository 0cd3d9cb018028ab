//! Sample statistics that attach their standard errors as uncertainties.

use crate::errors::SiCalcError;
use crate::math::Scalar;
use crate::quantity::Quantity;

/// Sum of a non-empty sample, checking units along the way.
fn sum(values: impl IntoIterator<Item = Quantity>) -> Result<Option<Quantity>, SiCalcError> {
    let mut iter = values.into_iter();
    let Some(first) = iter.next() else {
        return Ok(None);
    };
    iter.try_fold(first, Quantity::try_add).map(Some)
}

fn sum_nonempty(values: impl IntoIterator<Item = Quantity>, n: usize) -> Result<Quantity, SiCalcError> {
    sum(values)?.ok_or(SiCalcError::InsufficientData {
        required: 1,
        actual: n,
    })
}

/// Arithmetic mean of a sample, without touching uncertainties.
fn plain_mean(values: &[Quantity]) -> Result<Quantity, SiCalcError> {
    Ok(sum_nonempty(values.iter().copied(), values.len())? / values.len() as Scalar)
}

/// Mean of `values` with the standard error of the mean as its uncertainty.
///
/// The error is `√(Σ(vᵢ - v̄)² / (n(n-1)))`. A single sample is returned
/// unchanged, since its spread is undefined.
///
/// # Errors
///
/// Fails on an empty sample or on samples with differing units.
pub fn mean(values: &[Quantity]) -> Result<Quantity, SiCalcError> {
    let n = values.len();
    let mut average = plain_mean(values)?;
    if n == 1 {
        return Ok(average);
    }

    let deviations = values.iter().map(|&v| {
        let deviation = v - average;
        deviation * deviation
    });
    let spread = sum_nonempty(deviations, n)?;
    let n = n as Scalar;
    let error = (spread / (n * (n - 1.0))).sqrt()?;
    average.set_uncertainty(error)?;
    tracing::debug!(samples = values.len(), mean = average.value(), error = average.uncertainty(), "sample mean");
    Ok(average)
}

/// Least-squares fit `y = a + b·x`, returning `(a, b)` with their standard
/// errors attached.
///
/// # Errors
///
/// Fails when the samples differ in length, when fewer than three pairs are
/// given, or when the units within `xs` or `ys` differ.
pub fn linear_regression(xs: &[Quantity], ys: &[Quantity]) -> Result<(Quantity, Quantity), SiCalcError> {
    if xs.len() != ys.len() {
        return Err(SiCalcError::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    if xs.len() < 3 {
        return Err(SiCalcError::InsufficientData {
            required: 3,
            actual: xs.len(),
        });
    }

    let count = xs.len();
    let n = count as Scalar;
    let x_mean = plain_mean(xs)?;
    let y_mean = plain_mean(ys)?;

    let sum_xy = sum_nonempty(xs.iter().zip(ys).map(|(&x, &y)| x * y), count)?;
    let sum_xx = sum_nonempty(xs.iter().map(|&x| x * x), count)?;

    let mut slope = sum_xy.try_sub(n * x_mean * y_mean)? / sum_xx.try_sub(n * x_mean * x_mean)?;
    let mut intercept = y_mean.try_sub(slope * x_mean)?;

    let residuals = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| y.try_sub(slope * x)?.try_sub(intercept))
        .collect::<Result<Vec<_>, _>>()?;
    let residual_squares = sum_nonempty(residuals.iter().map(|&d| d * d), count)?;
    let x_spread = xs
        .iter()
        .map(|&x| x.try_sub(x_mean).map(|d| d * d))
        .collect::<Result<Vec<_>, _>>()?;
    let x_spread = sum_nonempty(x_spread, count)?;

    let slope_variance = residual_squares / x_spread / (n - 2.0);
    let intercept_variance = sum_xx * slope_variance / n;
    slope.set_uncertainty(slope_variance.sqrt()?)?;
    intercept.set_uncertainty(intercept_variance.sqrt()?)?;
    tracing::debug!(samples = count, slope = slope.value(), intercept = intercept.value(), "linear regression");
    Ok((intercept, slope))
}
