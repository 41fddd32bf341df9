//! Dimensional bookkeeping.
//!
//! A dimension is a vector of exponents over the 7 SI base dimensions, in the
//! order of [`BaseDimension::ALL`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::units::UnitError;

/// The 7 SI base dimensions, doubling as the keys of a unit registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    Current,
    Temperature,
    LuminousIntensity,
    Amount,
}

impl BaseDimension {
    /// Registry key order
    pub const ALL: [BaseDimension; 7] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::LuminousIntensity,
        BaseDimension::Amount,
    ];

    pub fn key(self) -> &'static str {
        match self {
            BaseDimension::Length => "length",
            BaseDimension::Mass => "mass",
            BaseDimension::Time => "time",
            BaseDimension::Current => "current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::LuminousIntensity => "luminous_intensity",
            BaseDimension::Amount => "amount",
        }
    }

    /// Position in the exponent vector
    pub fn index(self) -> usize {
        self as usize
    }

    /// The dimension with a single unit exponent at this position
    pub fn dimension(self) -> Dimension {
        let mut exponents = [0; 7];
        exponents[self.index()] = 1;
        Dimension { exponents }
    }
}

impl FromStr for BaseDimension {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BaseDimension::ALL
            .into_iter()
            .find(|dim| dim.key() == s)
            .ok_or_else(|| UnitError::MissingKey(s.to_string()))
    }
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Exponents of the base dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimension {
    /// [length, mass, time, current, temperature, luminous_intensity, amount]
    pub exponents: [i32; 7],
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0]);
    pub const LENGTH: Dimension = Dimension::new([1, 0, 0, 0, 0, 0, 0]);
    pub const MASS: Dimension = Dimension::new([0, 1, 0, 0, 0, 0, 0]);
    pub const TIME: Dimension = Dimension::new([0, 0, 1, 0, 0, 0, 0]);
    pub const CURRENT: Dimension = Dimension::new([0, 0, 0, 1, 0, 0, 0]);
    pub const TEMPERATURE: Dimension = Dimension::new([0, 0, 0, 0, 1, 0, 0]);
    pub const LUMINOUS_INTENSITY: Dimension = Dimension::new([0, 0, 0, 0, 0, 1, 0]);
    pub const AMOUNT: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 1]);

    pub const AREA: Dimension = Dimension::new([2, 0, 0, 0, 0, 0, 0]);
    pub const VOLUME: Dimension = Dimension::new([3, 0, 0, 0, 0, 0, 0]);
    /// [M L^2 T^-2]
    pub const ENERGY: Dimension = Dimension::new([2, 1, -2, 0, 0, 0, 0]);
    /// [I T]
    pub const CHARGE: Dimension = Dimension::new([0, 0, 1, 1, 0, 0, 0]);
    /// [M L^-3]
    pub const DENSITY: Dimension = Dimension::new([-3, 1, 0, 0, 0, 0, 0]);
    /// [N L^-3]
    pub const CONCENTRATION: Dimension = Dimension::new([-3, 0, 0, 0, 0, 0, 1]);
    /// [L^2 T^-1]
    pub const DIFFUSION: Dimension = Dimension::new([2, 0, -1, 0, 0, 0, 0]);
    /// [N M^-1 L^-2 T^2]
    pub const RADIOLYTIC_YIELD: Dimension = Dimension::new([-2, -1, 2, 0, 0, 0, 1]);

    pub const fn new(exponents: [i32; 7]) -> Self {
        Dimension { exponents }
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    pub fn exponent(&self, base: BaseDimension) -> i32 {
        self.exponents[base.index()]
    }

    /// Add exponents
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        let mut exponents = self.exponents;
        for (e, o) in exponents.iter_mut().zip(other.exponents) {
            *e += o;
        }
        Dimension { exponents }
    }

    /// Subtract exponents
    pub fn divide(&self, other: &Dimension) -> Dimension {
        self.multiply(&other.invert())
    }

    pub fn power(&self, exp: i32) -> Dimension {
        Dimension {
            exponents: self.exponents.map(|e| e * exp),
        }
    }

    pub fn invert(&self) -> Dimension {
        self.power(-1)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [&str; 7] = ["L", "M", "T", "I", "Θ", "J", "N"];
        let parts: Vec<String> = self
            .exponents
            .iter()
            .zip(NAMES)
            .filter(|(exp, _)| **exp != 0)
            .map(|(&exp, name)| match exp {
                1 => name.to_string(),
                _ => format!("{name}^{exp}"),
            })
            .collect();

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_keys_round_trip() {
        for dim in BaseDimension::ALL {
            assert_eq!(dim.key().parse::<BaseDimension>().unwrap(), dim);
            assert_eq!(dim.dimension().exponent(dim), 1);
        }
        assert!("volume".parse::<BaseDimension>().is_err());
    }

    #[test]
    fn test_energy_from_base_dimensions() {
        let energy = Dimension::MASS
            .multiply(&Dimension::LENGTH.power(2))
            .divide(&Dimension::TIME.power(2));
        assert_eq!(energy, Dimension::ENERGY);
    }

    #[test]
    fn test_radiolytic_yield_is_amount_per_energy() {
        assert_eq!(
            Dimension::AMOUNT.divide(&Dimension::ENERGY),
            Dimension::RADIOLYTIC_YIELD
        );
    }

    #[test]
    fn test_serde_key_names() {
        let json = serde_json::to_string(&BaseDimension::LuminousIntensity).unwrap();
        assert_eq!(json, "\"luminous_intensity\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimension::DIMENSIONLESS.to_string(), "1");
        assert_eq!(Dimension::CONCENTRATION.to_string(), "L^-3 N");
    }
}
