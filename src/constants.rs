//! Physical constants expressed as quantities, and helpers built on them.
//!
//! ## Accuracy
//!
//! Constants marked "exact" have zero uncertainty by SI definition (2019 revision).
//! Measured constants are given with their CODATA 2018 digits and carry no
//! uncertainty here; attach one with [`Quantity::with_uncertainty`] when needed.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - CODATA 2018 values published May 20, 2019 (following 2019 SI redefinition)

use std::f64::consts::PI;

use crate::errors::SiCalcError;
use crate::quantity::Quantity;
use crate::units::{COULOMB, FARAD, HENRY, HERTZ, JOULE, KELVIN, KILOGRAM, METER, MOLE, SECOND};

/// Vacuum permittivity ε₀ in F/m (8.8541878128 × 10⁻¹²).
pub const VACUUM_PERMITTIVITY: Quantity =
    Quantity::new(8.854_187_812_8e-12, FARAD.unit().quotient(METER.unit()));
/// Vacuum permeability μ₀ in H/m (1.25663706212 × 10⁻⁶).
pub const VACUUM_PERMEABILITY: Quantity =
    Quantity::new(1.256_637_062_12e-6, HENRY.unit().quotient(METER.unit()));
/// Speed of light in vacuum _c_ in m/s. Exact.
pub const SPEED_OF_LIGHT: Quantity =
    Quantity::new(299_792_458.0, METER.unit().quotient(SECOND.unit()));
/// Elementary charge _e_ in C. Exact.
pub const ELEMENTARY_CHARGE: Quantity = Quantity::new(1.602_176_634e-19, COULOMB.unit());
/// Electron rest mass in kg.
pub const ELECTRON_MASS: Quantity = Quantity::new(9.109_383_701_5e-31, KILOGRAM.unit());
/// Reduced Planck constant ħ in J·s. Exact.
pub const REDUCED_PLANCK_CONSTANT: Quantity =
    Quantity::new(1.054_571_817e-34, JOULE.unit().product(SECOND.unit()));
/// Boltzmann constant _k_B_ in J/K. Exact.
pub const BOLTZMANN_CONSTANT: Quantity =
    Quantity::new(1.380_649e-23, JOULE.unit().quotient(KELVIN.unit()));
/// Rydberg constant in 1/m.
pub const RYDBERG_CONSTANT: Quantity = Quantity::new(1.097_373_156_816_0e7, METER.unit().recip());
/// Molar gas constant _R_ in J/(mol·K). Exact.
pub const MOLAR_GAS_CONSTANT: Quantity = Quantity::new(
    8.314_462_618_153_24,
    JOULE.unit().quotient(MOLE.unit().product(KELVIN.unit())),
);

/// Returns the angular frequency `2πf` for a frequency in hertz.
///
/// # Errors
///
/// Returns [`SiCalcError::UnitMismatch`] if `frequency` is not a frequency.
pub fn angular_frequency(frequency: Quantity) -> Result<Quantity, SiCalcError> {
    frequency.check_unit(&HERTZ)?;
    Ok(2.0 * PI * frequency)
}

/// Returns the wavelength `c/f` of a wave with the given frequency.
///
/// # Errors
///
/// Returns [`SiCalcError::UnitMismatch`] if `frequency` is not a frequency.
pub fn frequency_to_wavelength(frequency: Quantity) -> Result<Quantity, SiCalcError> {
    frequency.check_unit(&HERTZ)?;
    Ok(SPEED_OF_LIGHT / frequency)
}

/// Returns the frequency `c/λ` of a wave with the given wavelength.
///
/// # Errors
///
/// Returns [`SiCalcError::UnitMismatch`] if `wavelength` is not a length.
pub fn wavelength_to_frequency(wavelength: Quantity) -> Result<Quantity, SiCalcError> {
    wavelength.check_unit(&METER)?;
    Ok(SPEED_OF_LIGHT / wavelength)
}

/// Derives `c = 1/√(ε₀μ₀)` from the vacuum constants.
///
/// # Errors
///
/// Never fails for the built-in constants; the square root is checked like
/// any other.
pub fn speed_of_light_from_vacuum() -> Result<Quantity, SiCalcError> {
    Ok((VACUUM_PERMITTIVITY * VACUUM_PERMEABILITY).sqrt()?.recip())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::units::{AMPERE, NEWTON, TESLA, VOLT, WATT};

    #[test]
    fn speed_of_light_matches_vacuum_constants() {
        let c = speed_of_light_from_vacuum().unwrap();
        assert_eq!(c.unit(), SPEED_OF_LIGHT.unit());
        assert_relative_eq!(c.value(), SPEED_OF_LIGHT.value(), max_relative = 1.0e-9);
    }

    #[test]
    fn wavelength_matches_reference() {
        let lambda = frequency_to_wavelength(1.0e9 * HERTZ).unwrap();
        assert_eq!(lambda.unit(), METER.unit());
        assert_relative_eq!(lambda.value(), 0.299_792_458, max_relative = 1.0e-9);
        let f = wavelength_to_frequency(lambda).unwrap();
        assert_relative_eq!(f.value(), 1.0e9, max_relative = 1.0e-12);
    }

    #[test]
    fn helpers_check_their_argument() {
        assert!(wavelength_to_frequency(1.0 * SECOND).is_err());
        assert!(frequency_to_wavelength(1.0 * METER).is_err());
        let omega = angular_frequency(50.0 * HERTZ).unwrap();
        assert_relative_eq!(omega.value(), 100.0 * PI, epsilon = 1.0e-12);
    }

    #[test]
    fn constants_carry_expected_units() {
        assert_eq!(
            VACUUM_PERMITTIVITY.unit(),
            (AMPERE * SECOND / (VOLT * METER)).unit()
        );
        assert_eq!(
            VACUUM_PERMEABILITY.unit(),
            (NEWTON / (AMPERE * AMPERE)).unit()
        );
        assert_eq!((ELEMENTARY_CHARGE * SPEED_OF_LIGHT * TESLA).unit(), NEWTON.unit());
        assert_eq!((BOLTZMANN_CONSTANT * KELVIN / SECOND).unit(), WATT.unit());
    }
}
