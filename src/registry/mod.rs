//! Unit registries and derived units.
//!
//! A [`UnitRegistry`] picks one unit per base dimension. Derived units such as
//! concentration or radiolytic yield are computed from it on demand. A
//! [`UnitSystem`] is either such a registry or unitless mode, where every
//! unit is the bare number 1.

pub mod config;
pub mod human_readable;

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::types::dimension::BaseDimension;
use crate::types::units::{DisplayRegistryEntry, Quantity, UnitError, si_base_unit};

pub use config::{ConfigError, UnitsConfig};
pub use human_readable::{
    HumanReadableRegistry, UnitSymbol, unit_registry_from_human_readable,
    unit_registry_to_human_readable,
};

/// Quantities whose units follow from the base registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivedQuantity {
    /// length²/time
    Diffusion,
    /// current·time²/mass
    ElectricalMobility,
    /// current²·time⁴/(length³·mass)
    Permittivity,
    /// current·time
    Charge,
    /// mass·length²/time²
    Energy,
    /// amount/length³
    Concentration,
    /// mass/length³
    Density,
    /// amount/energy
    RadiolyticYield,
}

impl DerivedQuantity {
    pub const ALL: [DerivedQuantity; 8] = [
        DerivedQuantity::Diffusion,
        DerivedQuantity::ElectricalMobility,
        DerivedQuantity::Permittivity,
        DerivedQuantity::Charge,
        DerivedQuantity::Energy,
        DerivedQuantity::Concentration,
        DerivedQuantity::Density,
        DerivedQuantity::RadiolyticYield,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DerivedQuantity::Diffusion => "diffusion",
            DerivedQuantity::ElectricalMobility => "electrical_mobility",
            DerivedQuantity::Permittivity => "permittivity",
            DerivedQuantity::Charge => "charge",
            DerivedQuantity::Energy => "energy",
            DerivedQuantity::Concentration => "concentration",
            DerivedQuantity::Density => "density",
            DerivedQuantity::RadiolyticYield => "radiolytic_yield",
        }
    }
}

impl FromStr for DerivedQuantity {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DerivedQuantity::ALL
            .into_iter()
            .find(|q| q.key() == s)
            .ok_or_else(|| UnitError::MissingKey(s.to_string()))
    }
}

/// One unit per base dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitRegistry {
    pub length: Quantity,
    pub mass: Quantity,
    pub time: Quantity,
    pub current: Quantity,
    pub temperature: Quantity,
    pub luminous_intensity: Quantity,
    pub amount: Quantity,
}

impl UnitRegistry {
    /// metre, kilogram, second, ampere, kelvin, candela, mole
    pub fn si() -> Self {
        Self::from_fn(|base| si_base_unit(base).quantity())
    }

    pub fn from_fn(mut f: impl FnMut(BaseDimension) -> Quantity) -> Self {
        Self {
            length: f(BaseDimension::Length),
            mass: f(BaseDimension::Mass),
            time: f(BaseDimension::Time),
            current: f(BaseDimension::Current),
            temperature: f(BaseDimension::Temperature),
            luminous_intensity: f(BaseDimension::LuminousIntensity),
            amount: f(BaseDimension::Amount),
        }
    }

    pub fn try_from_fn(
        mut f: impl FnMut(BaseDimension) -> Result<Quantity, UnitError>,
    ) -> Result<Self, UnitError> {
        Ok(Self {
            length: f(BaseDimension::Length)?,
            mass: f(BaseDimension::Mass)?,
            time: f(BaseDimension::Time)?,
            current: f(BaseDimension::Current)?,
            temperature: f(BaseDimension::Temperature)?,
            luminous_intensity: f(BaseDimension::LuminousIntensity)?,
            amount: f(BaseDimension::Amount)?,
        })
    }

    pub fn base(&self, base: BaseDimension) -> &Quantity {
        match base {
            BaseDimension::Length => &self.length,
            BaseDimension::Mass => &self.mass,
            BaseDimension::Time => &self.time,
            BaseDimension::Current => &self.current,
            BaseDimension::Temperature => &self.temperature,
            BaseDimension::LuminousIntensity => &self.luminous_intensity,
            BaseDimension::Amount => &self.amount,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (BaseDimension, &Quantity)> {
        BaseDimension::ALL.into_iter().map(move |base| (base, self.base(base)))
    }

    pub fn derived(&self, quantity: DerivedQuantity) -> Quantity {
        let (l, m, t) = (&self.length, &self.mass, &self.time);
        let (i, n) = (&self.current, &self.amount);
        match quantity {
            DerivedQuantity::Diffusion => &l.powi(2) / t,
            DerivedQuantity::ElectricalMobility => &(i * &t.powi(2)) / m,
            DerivedQuantity::Permittivity => {
                &(&i.powi(2) * &t.powi(4)) / &(&l.powi(3) * m)
            }
            DerivedQuantity::Charge => i * t,
            DerivedQuantity::Energy => &(m * &l.powi(2)) / &t.powi(2),
            DerivedQuantity::Concentration => n / &l.powi(3),
            DerivedQuantity::Density => m / &l.powi(3),
            DerivedQuantity::RadiolyticYield => n / &self.derived(DerivedQuantity::Energy),
        }
    }

    /// Derived key first, then base key
    pub fn get(&self, key: &str) -> Result<Quantity, UnitError> {
        if let Ok(derived) = key.parse::<DerivedQuantity>() {
            return Ok(self.derived(derived));
        }
        let base = key.parse::<BaseDimension>()?;
        Ok(self.base(base).clone())
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::si()
    }
}

impl Index<BaseDimension> for UnitRegistry {
    type Output = Quantity;

    fn index(&self, base: BaseDimension) -> &Quantity {
        self.base(base)
    }
}

impl fmt::Display for UnitRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (base, unit) in self.iter() {
            writeln!(f, "{}", DisplayRegistryEntry(base, unit))?;
        }
        Ok(())
    }
}

/// Whether quantities carry units at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UnitSystem {
    Dimensional(UnitRegistry),
    /// Every unit is the bare number 1
    #[default]
    Dimensionless,
}

impl UnitSystem {
    pub fn si() -> Self {
        UnitSystem::Dimensional(UnitRegistry::si())
    }

    pub fn registry(&self) -> Option<&UnitRegistry> {
        match self {
            UnitSystem::Dimensional(registry) => Some(registry),
            UnitSystem::Dimensionless => None,
        }
    }

    pub fn is_dimensional(&self) -> bool {
        self.registry().is_some()
    }

    pub fn derived(&self, quantity: DerivedQuantity) -> Quantity {
        match self {
            UnitSystem::Dimensional(registry) => registry.derived(quantity),
            UnitSystem::Dimensionless => Quantity::one(),
        }
    }

    pub fn base(&self, base: BaseDimension) -> Quantity {
        match self {
            UnitSystem::Dimensional(registry) => registry.base(base).clone(),
            UnitSystem::Dimensionless => Quantity::one(),
        }
    }
}

impl From<UnitRegistry> for UnitSystem {
    fn from(registry: UnitRegistry) -> Self {
        UnitSystem::Dimensional(registry)
    }
}

/// Unit of `key` in `system`.
///
/// `key` is a base dimension (`"length"`, ...) or one of `"diffusion"`,
/// `"electrical_mobility"`, `"permittivity"`, `"charge"`, `"energy"`,
/// `"concentration"`, `"density"`, `"radiolytic_yield"`. In unitless mode the
/// result is always 1, whatever the key.
pub fn get_derived_unit(system: &UnitSystem, key: &str) -> Result<Quantity, UnitError> {
    match system {
        UnitSystem::Dimensional(registry) => registry.get(key),
        UnitSystem::Dimensionless => Ok(Quantity::one()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::dimension::Dimension;
    use crate::types::units::*;
    use approx::assert_relative_eq;

    fn chemistry_registry() -> UnitRegistry {
        UnitRegistry {
            length: DECIMETRE.quantity(),
            mass: GRAM.quantity(),
            time: MINUTE.quantity(),
            ..UnitRegistry::si()
        }
    }

    #[test]
    fn test_si_derived_units() {
        let si = UnitSystem::si();
        let energy = get_derived_unit(&si, "energy").unwrap();
        assert!(energy.approx_eq(&JOULE.quantity(), 1e-12));

        let conc = get_derived_unit(&si, "concentration").unwrap();
        assert_eq!(conc.dimension(), Dimension::CONCENTRATION);
        assert_relative_eq!(conc.si_value(), 1.0);

        let charge = get_derived_unit(&si, "charge").unwrap();
        assert!(charge.approx_eq(&COULOMB.quantity(), 1e-12));
    }

    #[test]
    fn test_derived_formulas() {
        let reg = chemistry_registry();
        let (l, m, t) = (DECIMETRE, GRAM, MINUTE);
        let (i, n) = (AMPERE, MOLE);

        let expected = [
            (DerivedQuantity::Diffusion, l.powi(2) / t),
            (DerivedQuantity::ElectricalMobility, i * t.powi(2) / m),
            (
                DerivedQuantity::Permittivity,
                i.powi(2) * t.powi(4) / (l.powi(3) * m),
            ),
            (DerivedQuantity::Charge, i * t),
            (DerivedQuantity::Energy, m * l.powi(2) / t.powi(2)),
            (DerivedQuantity::Concentration, n / l.powi(3)),
            (DerivedQuantity::Density, m / l.powi(3)),
            (
                DerivedQuantity::RadiolyticYield,
                n / (m * l.powi(2) / t.powi(2)),
            ),
        ];
        let system = UnitSystem::from(reg.clone());
        for (quantity, unit) in expected {
            let derived = reg.derived(quantity);
            let by_key = get_derived_unit(&system, quantity.key()).unwrap();
            assert_eq!(by_key, derived, "{}", quantity.key());
            assert!(
                derived.approx_eq(&unit, 1e-12),
                "{}: {} != {}",
                quantity.key(),
                derived,
                unit
            );
        }
    }

    #[test]
    fn test_decimetre_concentration_is_molar() {
        let conc = get_derived_unit(&chemistry_registry().into(), "concentration").unwrap();
        assert!(conc.approx_eq(&MOLAR.quantity(), 1e-12));
    }

    #[test]
    fn test_radiolytic_yield_dimension() {
        let g = UnitRegistry::si().derived(DerivedQuantity::RadiolyticYield);
        assert_eq!(g.dimension(), PER_100_EV.dimension);
        assert_eq!(g.dimension(), Dimension::RADIOLYTIC_YIELD);
    }

    #[test]
    fn test_permittivity_matches_vacuum_permittivity() {
        let unit = UnitRegistry::si().derived(DerivedQuantity::Permittivity);
        let eps0 = constants::vacuum_permittivity();
        assert_eq!(unit.dimension(), eps0.dimension());
        assert_relative_eq!(eps0.in_units_of(&unit).unwrap(), 8.854_187_8128e-12);
    }

    #[test]
    fn test_base_key_fallback() {
        let reg = chemistry_registry();
        assert_eq!(reg.get("length").unwrap(), DECIMETRE.quantity());
        assert_eq!(reg[BaseDimension::Mass], GRAM.quantity());
    }

    #[test]
    fn test_missing_key() {
        let err = get_derived_unit(&UnitSystem::si(), "viscosity").unwrap_err();
        assert_eq!(err, UnitError::MissingKey("viscosity".into()));
    }

    #[test]
    fn test_unitless_mode_returns_one() {
        let system = UnitSystem::Dimensionless;
        for key in ["energy", "length", "radiolytic_yield", "viscosity"] {
            let unit = get_derived_unit(&system, key).unwrap();
            assert!(unit.is_one());
        }
        assert!(system.derived(DerivedQuantity::Density).is_one());
        assert!(system.base(BaseDimension::Time).is_one());
    }

    #[test]
    fn test_registry_display() {
        let text = UnitRegistry::si().to_string();
        assert!(text.starts_with("length: 1 m [L]\n"));
        assert_eq!(text.lines().count(), 7);
    }
}
