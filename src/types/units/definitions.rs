//! Unit table.
//!
//! The SI base units come first. Chemistry units are layered on top as
//! further constants; lookup by symbol goes through [`UNIT_TABLE`].

use super::{AtomicUnit, Quantity};
use crate::types::dimension::{BaseDimension, Dimension};

/// Exact since the 2019 SI redefinition
pub const AVOGADRO_NUMBER: f64 = 6.022_140_76e23;
/// Coulomb, exact
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;
/// J/K, exact
pub const BOLTZMANN: f64 = 1.380_649e-23;
/// F/m, CODATA 2018
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_8128e-12;

// SI base units
pub const METRE: AtomicUnit = AtomicUnit::new("metre", "m", 1.0, Dimension::LENGTH);
pub const KILOGRAM: AtomicUnit = AtomicUnit::new("kilogram", "kg", 1.0, Dimension::MASS);
pub const SECOND: AtomicUnit = AtomicUnit::new("second", "s", 1.0, Dimension::TIME);
pub const AMPERE: AtomicUnit = AtomicUnit::new("ampere", "A", 1.0, Dimension::CURRENT);
pub const KELVIN: AtomicUnit = AtomicUnit::new("kelvin", "K", 1.0, Dimension::TEMPERATURE);
pub const CANDELA: AtomicUnit = AtomicUnit::new("candela", "cd", 1.0, Dimension::LUMINOUS_INTENSITY);
pub const MOLE: AtomicUnit = AtomicUnit::new("mole", "mol", 1.0, Dimension::AMOUNT);

pub const GRAM: AtomicUnit = AtomicUnit::new("gram", "g", 1e-3, Dimension::MASS);
pub const DECIMETRE: AtomicUnit = AtomicUnit::new("decimetre", "dm", 0.1, Dimension::LENGTH);
pub const CENTIMETRE: AtomicUnit = AtomicUnit::new("centimetre", "cm", 1e-2, Dimension::LENGTH);
pub const MILLIMETRE: AtomicUnit = AtomicUnit::new("millimetre", "mm", 1e-3, Dimension::LENGTH);
pub const MINUTE: AtomicUnit = AtomicUnit::new("minute", "min", 60.0, Dimension::TIME);
pub const HOUR: AtomicUnit = AtomicUnit::new("hour", "h", 3600.0, Dimension::TIME);
pub const LITRE: AtomicUnit = AtomicUnit::new("litre", "L", 1e-3, Dimension::VOLUME);
pub const JOULE: AtomicUnit = AtomicUnit::new("joule", "J", 1.0, Dimension::ENERGY);
pub const ELECTRONVOLT: AtomicUnit =
    AtomicUnit::new("electron_volt", "eV", ELEMENTARY_CHARGE, Dimension::ENERGY);
pub const COULOMB: AtomicUnit = AtomicUnit::new("coulomb", "C", 1.0, Dimension::CHARGE);

// Chemistry
/// mol/dm³
pub const MOLAR: AtomicUnit = AtomicUnit::new("molar", "M", 1e3, Dimension::CONCENTRATION);
pub const MICROMOLE: AtomicUnit = AtomicUnit::new("micromole", "μmol", 1e-6, Dimension::AMOUNT);
/// Radiolytic yield unit, 1/(100 eV · N_A)
pub const PER_100_EV: AtomicUnit = AtomicUnit::new(
    "per_100_eV",
    "(100eV)**-1",
    1.0 / (100.0 * ELEMENTARY_CHARGE * AVOGADRO_NUMBER),
    Dimension::RADIOLYTIC_YIELD,
);

/// Every atomic unit that can be resolved from a symbol or name
pub const UNIT_TABLE: &[AtomicUnit] = &[
    METRE, KILOGRAM, SECOND, AMPERE, KELVIN, CANDELA, MOLE, GRAM, DECIMETRE, CENTIMETRE,
    MILLIMETRE, MINUTE, HOUR, LITRE, JOULE, ELECTRONVOLT, COULOMB, MOLAR, MICROMOLE, PER_100_EV,
];

const ALIASES: &[(&str, AtomicUnit)] = &[
    ("meter", METRE),
    ("liter", LITRE),
    ("l", LITRE),
    ("umol", MICROMOLE),
    ("sec", SECOND),
];

impl AtomicUnit {
    /// Resolve a symbol (`dm`), name (`decimetre`) or alias (`umol`)
    pub fn lookup(symbol: &str) -> Option<AtomicUnit> {
        UNIT_TABLE
            .iter()
            .find(|unit| unit.symbol == symbol || unit.name == symbol)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == symbol)
                    .map(|(_, unit)| unit)
            })
            .copied()
    }
}

/// Coherent SI unit of a base dimension
pub fn si_base_unit(base: BaseDimension) -> AtomicUnit {
    match base {
        BaseDimension::Length => METRE,
        BaseDimension::Mass => KILOGRAM,
        BaseDimension::Time => SECOND,
        BaseDimension::Current => AMPERE,
        BaseDimension::Temperature => KELVIN,
        BaseDimension::LuminousIntensity => CANDELA,
        BaseDimension::Amount => MOLE,
    }
}

/// Second order rate constant unit, 1/(M·s)
pub fn per_molar_per_second() -> Quantity {
    MOLAR.recip() / SECOND
}

/// Radiolytic yield in μmol/J
pub fn umol_per_joule() -> Quantity {
    MICROMOLE / JOULE
}

/// Physical constants as quantities in coherent SI units
pub mod constants {
    use super::*;

    /// N_A in 1/mol
    pub fn avogadro_constant() -> Quantity {
        AVOGADRO_NUMBER * MOLE.recip()
    }

    /// e in C
    pub fn elementary_charge() -> Quantity {
        ELEMENTARY_CHARGE * COULOMB
    }

    /// F = e·N_A in C/mol
    pub fn faraday_constant() -> Quantity {
        elementary_charge() * avogadro_constant()
    }

    /// k_B in J/K
    pub fn boltzmann_constant() -> Quantity {
        BOLTZMANN * JOULE / KELVIN
    }

    /// R = k_B·N_A in J/(K·mol)
    pub fn molar_gas_constant() -> Quantity {
        boltzmann_constant() * avogadro_constant()
    }

    /// ε0 in C²·s²/(kg·m³)
    pub fn vacuum_permittivity() -> Quantity {
        let coulomb_squared = COULOMB.powi(2);
        VACUUM_PERMITTIVITY * (coulomb_squared * SECOND.powi(2) / KILOGRAM / METRE.powi(3))
    }
}
