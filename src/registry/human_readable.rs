//! Serializable form of a unit registry.
//!
//! Each base dimension maps to `(factor, symbol)`, e.g. `length = [1.0, "dm"]`.
//! The bare numeral 1 is written as `[1.0, 1]`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{UnitRegistry, UnitSystem};
use crate::types::dimension::BaseDimension;
use crate::types::units::{AtomicUnit, Quantity, UnitError};

/// Symbol half of a human-readable entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSymbol", into = "RawSymbol")]
pub enum UnitSymbol {
    /// The numeral 1
    Unity,
    Named(String),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawSymbol {
    Number(i64),
    Text(String),
}

impl TryFrom<RawSymbol> for UnitSymbol {
    type Error = String;

    fn try_from(raw: RawSymbol) -> Result<Self, Self::Error> {
        match raw {
            RawSymbol::Number(1) => Ok(UnitSymbol::Unity),
            RawSymbol::Number(n) => Err(format!("expected unit symbol or 1, got {n}")),
            RawSymbol::Text(symbol) => Ok(UnitSymbol::Named(symbol)),
        }
    }
}

impl From<UnitSymbol> for RawSymbol {
    fn from(symbol: UnitSymbol) -> Self {
        match symbol {
            UnitSymbol::Unity => RawSymbol::Number(1),
            UnitSymbol::Named(symbol) => RawSymbol::Text(symbol),
        }
    }
}

impl From<&str> for UnitSymbol {
    fn from(symbol: &str) -> Self {
        UnitSymbol::Named(symbol.to_string())
    }
}

pub type HumanReadableEntry = (f64, UnitSymbol);

/// `(factor, symbol)` per base dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanReadableRegistry {
    pub length: HumanReadableEntry,
    pub mass: HumanReadableEntry,
    pub time: HumanReadableEntry,
    pub current: HumanReadableEntry,
    pub temperature: HumanReadableEntry,
    pub luminous_intensity: HumanReadableEntry,
    pub amount: HumanReadableEntry,
}

impl HumanReadableRegistry {
    pub fn entry(&self, base: BaseDimension) -> &HumanReadableEntry {
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

    fn try_from_fn(
        mut f: impl FnMut(BaseDimension) -> Result<HumanReadableEntry, UnitError>,
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
}

impl TryFrom<&UnitRegistry> for HumanReadableRegistry {
    type Error = UnitError;

    fn try_from(registry: &UnitRegistry) -> Result<Self, Self::Error> {
        HumanReadableRegistry::try_from_fn(|base| {
            let unit = &registry[base];
            if unit.units.is_empty() {
                return Ok((unit.value, UnitSymbol::Unity));
            }
            match unit.units.as_atomic() {
                Some(atomic) => Ok((unit.value, UnitSymbol::from(atomic.symbol))),
                None => Err(UnitError::CompoundUnit {
                    key: base,
                    units: unit.units.to_string(),
                }),
            }
        })
    }
}

impl TryFrom<&HumanReadableRegistry> for UnitRegistry {
    type Error = UnitError;

    fn try_from(registry: &HumanReadableRegistry) -> Result<Self, Self::Error> {
        UnitRegistry::try_from_fn(|base| {
            let (factor, symbol) = registry.entry(base);
            match symbol {
                UnitSymbol::Unity => Ok(Quantity::dimensionless(*factor)),
                UnitSymbol::Named(symbol) => Ok(*factor * resolve_symbol(base, symbol)?),
            }
        })
    }
}

/// Exactly one atomic unit for `symbol`
fn resolve_symbol(base: BaseDimension, symbol: &str) -> Result<AtomicUnit, UnitError> {
    if let Some(unit) = AtomicUnit::lookup(symbol) {
        return Ok(unit);
    }
    if symbol.contains(['*', '/', ' ', '·']) {
        Err(UnitError::CompoundUnit {
            key: base,
            units: symbol.to_string(),
        })
    } else {
        Err(UnitError::UnknownUnit(symbol.to_string()))
    }
}

/// `None` for unitless mode, else one `(factor, symbol)` per base dimension.
/// Bare numbers become `(value, 1)`.
///
/// Fails with [`UnitError::CompoundUnit`] when an entry is not a multiple of a
/// single atomic unit.
pub fn unit_registry_to_human_readable(
    system: &UnitSystem,
) -> Result<Option<HumanReadableRegistry>, UnitError> {
    let Some(registry) = system.registry() else {
        return Ok(None);
    };
    let readable = HumanReadableRegistry::try_from(registry)?;
    debug!(?readable, "converted unit registry to human readable form");
    Ok(Some(readable))
}

/// Inverse of [`unit_registry_to_human_readable`].
pub fn unit_registry_from_human_readable(
    registry: Option<&HumanReadableRegistry>,
) -> Result<UnitSystem, UnitError> {
    let Some(registry) = registry else {
        return Ok(UnitSystem::Dimensionless);
    };
    let registry = UnitRegistry::try_from(registry)?;
    debug!("resolved unit registry from human readable form");
    Ok(UnitSystem::Dimensional(registry))
}
