//! Read-only table of display names for common derived units.

use crate::dimension::UnitVector;
use crate::quantity::Quantity;
use crate::units::{
    AMPERE, COULOMB, DENSITY, FARAD, HENRY, HERTZ, JOULE, KELVIN, KILOGRAM, METER, MOLE, NEWTON,
    OHM, PASCAL, SECOND, TESLA, VOLT, WATT,
};

/// Short symbol and long name of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayName {
    /// Symbol used when rendering values, e.g. `N`.
    pub symbol: &'static str,
    /// Spelled-out name, e.g. `Newton`.
    pub long_name: &'static str,
}

const fn entry(unit: Quantity, symbol: &'static str, long_name: &'static str) -> (UnitVector, DisplayName) {
    (unit.unit(), DisplayName { symbol, long_name })
}

static STANDARD_NAMES: [(UnitVector, DisplayName); 19] = [
    entry(METER, "m", "Meter"),
    entry(SECOND, "s", "Second"),
    entry(AMPERE, "A", "Ampere"),
    entry(KILOGRAM, "kg", "Kilogram"),
    entry(KELVIN, "K", "Kelvin"),
    entry(MOLE, "mol", "Mole"),
    entry(NEWTON, "N", "Newton"),
    entry(PASCAL, "Pa", "Pascal"),
    entry(JOULE, "J", "Joule"),
    entry(WATT, "W", "Watt"),
    entry(DENSITY, "ρ", "Density"),
    entry(COULOMB, "C", "Coulomb"),
    entry(TESLA, "T", "Tesla"),
    entry(OHM, "Ω", "Ohm"),
    entry(VOLT, "V", "Volt"),
    entry(FARAD, "F", "Farad"),
    entry(HENRY, "H", "Henry"),
    entry(HERTZ, "Hz", "Hertz"),
    (
        VOLT.unit().quotient(METER.unit()),
        DisplayName {
            symbol: "V/m",
            long_name: "Electric field",
        },
    ),
];

/// Looks up the display name registered for `unit`.
#[must_use]
pub fn lookup(unit: &UnitVector) -> Option<&'static DisplayName> {
    STANDARD_NAMES
        .iter()
        .find(|(candidate, _)| candidate == unit)
        .map(|(_, name)| name)
}

/// Iterates over every registered unit and its name.
pub fn entries() -> impl Iterator<Item = (&'static UnitVector, &'static DisplayName)> {
    STANDARD_NAMES.iter().map(|(unit, name)| (unit, name))
}
