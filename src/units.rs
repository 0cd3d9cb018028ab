//! SI base quantities, common derived units and decimal scale factors.
//!
//! Every unit is a [`Quantity`] with magnitude one (or the scale of the
//! unit), so values are written as `3.0 * NEWTON` or `1.0e12 * WATT`.

use crate::dimension::{BaseDimension, UnitVector};
use crate::math::Scalar;
use crate::quantity::Quantity;

const KG: UnitVector = UnitVector::base(BaseDimension::Mass);
const M: UnitVector = UnitVector::base(BaseDimension::Length);
const S: UnitVector = UnitVector::base(BaseDimension::Time);
const A: UnitVector = UnitVector::base(BaseDimension::Current);
const K: UnitVector = UnitVector::base(BaseDimension::Temperature);
const MOL: UnitVector = UnitVector::base(BaseDimension::Amount);

const NEWTON_UNIT: UnitVector = KG.product(M).quotient(S.product(S));
const JOULE_UNIT: UnitVector = NEWTON_UNIT.product(M);
const WATT_UNIT: UnitVector = JOULE_UNIT.quotient(S);
const COULOMB_UNIT: UnitVector = A.product(S);
const VOLT_UNIT: UnitVector = WATT_UNIT.quotient(A);

/// The dimensionless number one.
pub const DIMENSIONLESS: Quantity = Quantity::new(1.0, UnitVector::DIMENSIONLESS);

/// One kilogram.
pub const KILOGRAM: Quantity = Quantity::new(1.0, KG);
/// One meter.
pub const METER: Quantity = Quantity::new(1.0, M);
/// One second.
pub const SECOND: Quantity = Quantity::new(1.0, S);
/// One ampere.
pub const AMPERE: Quantity = Quantity::new(1.0, A);
/// One kelvin.
pub const KELVIN: Quantity = Quantity::new(1.0, K);
/// One mole.
pub const MOLE: Quantity = Quantity::new(1.0, MOL);

/// Mass density, kg/m³.
pub const DENSITY: Quantity = Quantity::new(1.0, KG.quotient(M.product(M).product(M)));
/// Newton, kg·m/s².
pub const NEWTON: Quantity = Quantity::new(1.0, NEWTON_UNIT);
/// Pascal, N/m².
pub const PASCAL: Quantity = Quantity::new(1.0, NEWTON_UNIT.quotient(M.product(M)));
/// Joule, N·m.
pub const JOULE: Quantity = Quantity::new(1.0, JOULE_UNIT);
/// Watt, J/s.
pub const WATT: Quantity = Quantity::new(1.0, WATT_UNIT);
/// Coulomb, A·s.
pub const COULOMB: Quantity = Quantity::new(1.0, COULOMB_UNIT);
/// Tesla, kg/(A·s²).
pub const TESLA: Quantity = Quantity::new(1.0, KG.quotient(A.product(S).product(S)));
/// Volt, W/A.
pub const VOLT: Quantity = Quantity::new(1.0, VOLT_UNIT);
/// Ohm, V/A.
pub const OHM: Quantity = Quantity::new(1.0, VOLT_UNIT.quotient(A));
/// Farad, C/V.
pub const FARAD: Quantity = Quantity::new(1.0, COULOMB_UNIT.quotient(VOLT_UNIT));
/// Henry, V·s/A.
pub const HENRY: Quantity = Quantity::new(1.0, VOLT_UNIT.product(S).quotient(A));
/// Hertz, 1/s.
pub const HERTZ: Quantity = Quantity::new(1.0, S.recip());

/// 10²⁴
pub const YOTTA: Scalar = 1e24;
/// 10²¹
pub const ZETTA: Scalar = 1e21;
/// 10¹⁸
pub const EXA: Scalar = 1e18;
/// 10¹⁵
pub const PETA: Scalar = 1e15;
/// 10¹²
pub const TERA: Scalar = 1e12;
/// 10⁹
pub const GIGA: Scalar = 1e9;
/// 10⁶
pub const MEGA: Scalar = 1e6;
/// 10³
pub const KILO: Scalar = 1e3;
/// 10²
pub const HECTO: Scalar = 1e2;
/// 10¹
pub const DECA: Scalar = 1e1;
/// 10⁻¹
pub const DECI: Scalar = 1e-1;
/// 10⁻²
pub const CENTI: Scalar = 1e-2;
/// 10⁻³
pub const MILLI: Scalar = 1e-3;
/// 10⁻⁶
pub const MICRO: Scalar = 1e-6;
/// 10⁻⁹
pub const NANO: Scalar = 1e-9;
/// 10⁻¹²
pub const PICO: Scalar = 1e-12;
/// 10⁻¹⁵
pub const FEMTO: Scalar = 1e-15;
/// 10⁻¹⁸
pub const ATTO: Scalar = 1e-18;
/// 10⁻²¹
pub const ZEPTO: Scalar = 1e-21;
/// 10⁻²⁴
pub const YOCTO: Scalar = 1e-24;

/// One centimeter.
pub const CENTIMETER: Quantity = Quantity::new(CENTI, M);
/// One micrometer.
pub const MICROMETER: Quantity = Quantity::new(MICRO, M);
/// One nanometer.
pub const NANOMETER: Quantity = Quantity::new(NANO, M);
/// One kilometer.
pub const KILOMETER: Quantity = Quantity::new(KILO, M);
/// One minute.
pub const MINUTE: Quantity = Quantity::new(60.0, S);
/// One hour.
pub const HOUR: Quantity = Quantity::new(3600.0, S);
/// One terawatt.
pub const TERAWATT: Quantity = Quantity::new(TERA, WATT_UNIT);
/// One megahertz.
pub const MEGAHERTZ: Quantity = Quantity::new(MEGA, S.recip());

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn derived_units_match_runtime_algebra() {
        assert_eq!(NEWTON.unit(), (KILOGRAM * METER / (SECOND * SECOND)).unit());
        assert_eq!(PASCAL.unit(), (NEWTON / METER.powi(2).unwrap()).unit());
        assert_eq!(JOULE.unit(), (NEWTON * METER).unit());
        assert_eq!(WATT.unit(), (JOULE / SECOND).unit());
        assert_eq!(COULOMB.unit(), (AMPERE * SECOND).unit());
        assert_eq!(TESLA.unit(), (KILOGRAM / (AMPERE * SECOND * SECOND)).unit());
        assert_eq!(
            VOLT.unit(),
            ((KILOGRAM * METER * METER) / (AMPERE * SECOND * SECOND * SECOND)).unit()
        );
        assert_eq!(OHM.unit(), (VOLT / AMPERE).unit());
        assert_eq!(FARAD.unit(), (COULOMB / VOLT).unit());
        assert_eq!(HENRY.unit(), (VOLT * SECOND / AMPERE).unit());
        assert_eq!(HERTZ.unit(), (1.0 / SECOND).unit());
        assert_eq!(DENSITY.unit(), (KILOGRAM / METER.powi(3).unwrap()).unit());
    }

    #[test]
    fn electric_field_units_coincide() {
        assert_eq!((NEWTON / COULOMB).unit(), (VOLT / METER).unit());
    }

    #[test]
    fn scaled_units_keep_base_dimension() {
        assert_eq!(CENTIMETER.unit(), METER.unit());
        assert_relative_eq!((3.0 * KILOMETER).value(), 3000.0);
        assert_relative_eq!((2.0 * HOUR / MINUTE).dimensionless_value().unwrap(), 120.0);
        assert_eq!(TERAWATT.unit(), WATT.unit());
        assert_relative_eq!(MEGAHERTZ.value(), MEGA * HERTZ.value());
        assert_relative_eq!((KILO * METER).value(), KILOMETER.value());
    }

    #[test]
    fn base_quantities_are_unit_magnitude() {
        for q in [KILOGRAM, METER, SECOND, AMPERE, KELVIN, MOLE, DIMENSIONLESS] {
            assert_relative_eq!(q.value(), 1.0);
            assert_eq!(q.uncertainty(), 0.0);
        }
        assert!(DIMENSIONLESS.unit().is_dimensionless());
    }
}
