//! Engineering-notation rendering of quantities.
//!
//! Values are printed as `<mantissa E±xx, unit>` where the exponent is a
//! multiple of three, e.g. `<1.50E+03, m>` or `<(2.40 ± 0.12)E-06, V/m>`.

use std::fmt;

use crate::display;
use crate::math::Scalar;
use crate::quantity::Quantity;

/// Options controlling [`Quantity::to_display_string`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Digits printed after the decimal point of the mantissa.
    pub precision: usize,
    /// Always print the per-dimension unit string instead of a display name.
    pub raw_si_units: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: 5,
            raw_si_units: false,
        }
    }
}

impl FormatOptions {
    /// Returns options with a different mantissa precision.
    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Returns options that bypass the display-name table.
    #[must_use]
    pub const fn with_raw_si_units(mut self, raw_si_units: bool) -> Self {
        self.raw_si_units = raw_si_units;
        self
    }
}

/// Power of ten, snapped down to a multiple of three, used to print `value`.
///
/// Zero and non-finite values have no logarithm and use exponent zero.
#[must_use]
pub fn engineering_exponent(value: Scalar) -> i32 {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }
    let decade = value.abs().log10().floor() as i32;
    decade.div_euclid(3) * 3
}

/// `value / 10^exponent`, applied in two steps so neither power of ten
/// leaves the `f64` range for subnormal or huge values.
fn scale_down(value: Scalar, exponent: i32) -> Scalar {
    let half = exponent / 2;
    value * 10f64.powi(-half) * 10f64.powi(half - exponent)
}

/// Exponent used to print `reference` at `precision` decimals.
///
/// Rounding can push the mantissa to 1000; the exponent is then moved up.
fn display_exponent(reference: Scalar, precision: usize) -> i32 {
    let exponent = engineering_exponent(reference);
    let mantissa = scale_down(reference, exponent);
    let rounded: Scalar = format!("{mantissa:.precision$}").parse().unwrap_or(mantissa);
    if rounded.abs() >= 1000.0 {
        exponent + 3
    } else {
        exponent
    }
}

impl Quantity {
    /// Renders the quantity in engineering notation.
    ///
    /// The unit is shown by its symbol when it appears in the display-name
    /// table and `raw_si_units` is off, otherwise as the raw exponent string.
    #[must_use]
    pub fn to_display_string(&self, options: &FormatOptions) -> String {
        let precision = options.precision;
        let unit_name = match display::lookup(&self.unit()) {
            Some(name) if !options.raw_si_units => name.symbol.to_owned(),
            _ => self.unit().to_string(),
        };

        let number = if !self.value().is_finite() {
            format!("{}", self.value())
        } else {
            // -0.0 prints as zero; a zero value takes its exponent from the error
            let value = if self.value() == 0.0 { 0.0 } else { self.value() };
            let reference = if value == 0.0 { self.uncertainty() } else { value };
            let exponent = display_exponent(reference, precision);
            let mantissa = scale_down(value, exponent);
            if self.uncertainty() == 0.0 {
                format!("{mantissa:.precision$}E{exponent:+03}")
            } else {
                let error = scale_down(self.uncertainty(), exponent);
                format!("({mantissa:.precision$} ± {error:.precision$})E{exponent:+03}")
            }
        };

        if unit_name.is_empty() {
            format!("<{number}>")
        } else {
            format!("<{number}, {unit_name}>")
        }
    }
}

/// Uses [`FormatOptions::default`], taking the precision from the
/// formatter when one is given (`{:.2}`).
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut options = FormatOptions::default();
        if let Some(precision) = f.precision() {
            options = options.with_precision(precision);
        }
        f.write_str(&self.to_display_string(&options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{DIMENSIONLESS, METER, NEWTON, SECOND, VOLT};

    #[test]
    fn snaps_exponent_to_multiple_of_three() {
        assert_eq!(engineering_exponent(1500.0), 3);
        assert_eq!(engineering_exponent(999.0), 0);
        assert_eq!(engineering_exponent(0.00012), -6);
        assert_eq!(engineering_exponent(-2.5e7), 6);
        assert_eq!(engineering_exponent(0.0), 0);
    }

    #[test]
    fn renders_named_unit() {
        let options = FormatOptions::default().with_precision(2);
        let s = (1500.0 * METER).to_display_string(&options);
        assert_eq!(s, "<1.50E+03, m>");
        assert!(s.contains("1.50E+03"));
    }

    #[test]
    fn raw_units_bypass_table() {
        let options = FormatOptions::default().with_precision(1).with_raw_si_units(true);
        assert_eq!(
            (2.0 * NEWTON).to_display_string(&options),
            "<2.0E+00, kg^1*m^1*s^-2>"
        );
        assert_eq!(
            (2.0 * METER * SECOND).to_display_string(&FormatOptions::default().with_precision(1)),
            "<2.0E+00, m^1*s^1>"
        );
    }

    #[test]
    fn zero_and_small_values() {
        let options = FormatOptions::default().with_precision(2);
        assert_eq!((0.0 * VOLT).to_display_string(&options), "<0.00E+00, V>");
        assert_eq!((0.00012 * METER).to_display_string(&options), "<120.00E-06, m>");
        assert_eq!((-0.5 * DIMENSIONLESS).to_display_string(&options), "<-500.00E-03>");
    }

    #[test]
    fn subnormal_and_huge_values_keep_finite_mantissa() {
        let options = FormatOptions::default().with_precision(2);
        assert_eq!((5e-324 * METER).to_display_string(&options), "<4.94E-324, m>");
        assert_eq!((2.5e307 * METER).to_display_string(&options), "<25.00E+306, m>");
    }

    #[test]
    fn zero_value_uses_exponent_of_uncertainty() {
        let options = FormatOptions::default().with_precision(2);
        let q = (0.0 * METER).with_uncertainty(2.0e-6);
        assert_eq!(q.to_display_string(&options), "<(0.00 ± 2.00)E-06, m>");
        assert_eq!((-0.0 * VOLT).to_display_string(&options), "<0.00E+00, V>");
    }

    #[test]
    fn rounding_carries_into_next_exponent() {
        let options = FormatOptions::default().with_precision(1);
        assert_eq!((999.96 * METER).to_display_string(&options), "<1.0E+03, m>");
    }

    #[test]
    fn uncertainty_shares_the_exponent() {
        let q = (1234.0 * METER).with_uncertainty(56.0);
        let options = FormatOptions::default().with_precision(3);
        assert_eq!(q.to_display_string(&options), "<(1.234 ± 0.056)E+03, m>");
    }

    #[test]
    fn display_honours_formatter_precision() {
        assert_eq!(format!("{:.2}", 1500.0 * METER), "<1.50E+03, m>");
        assert_eq!(format!("{}", 1.0 * SECOND), "<1.00000E+00, s>");
    }
}
