//! Runtime units and quantities.
//!
//! An [`AtomicUnit`] is a named unit with a single symbol. A [`UnitExpr`] is a
//! product of atomic units raised to integer powers, and a [`Quantity`] is a
//! magnitude attached to a unit expression. A unit is simply a quantity of
//! magnitude 1.

mod definitions;
mod display;
mod error;

use std::ops::{Div, Mul};

use crate::types::dimension::{BaseDimension, Dimension};

pub use definitions::*;
pub use display::DisplayRegistryEntry;
pub use error::UnitError;

/// A unit with its own symbol, defined relative to the coherent SI unit of
/// its dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomicUnit {
    pub name: &'static str,
    pub symbol: &'static str,
    /// Multiple of the coherent SI unit
    pub factor: f64,
    pub dimension: Dimension,
}

impl AtomicUnit {
    pub const fn new(name: &'static str, symbol: &'static str, factor: f64, dimension: Dimension) -> Self {
        Self {
            name,
            symbol,
            factor,
            dimension,
        }
    }

    /// One of this unit
    pub fn quantity(self) -> Quantity {
        Quantity::new(1.0, UnitExpr::from(self))
    }

    pub fn powi(self, exp: i32) -> Quantity {
        self.quantity().powi(exp)
    }

    pub fn recip(self) -> Quantity {
        self.powi(-1)
    }
}

/// Product of atomic units raised to non-zero integer exponents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnitExpr {
    terms: Vec<(AtomicUnit, i32)>,
}

impl UnitExpr {
    pub fn dimensionless() -> Self {
        Self::default()
    }

    pub fn terms(&self) -> &[(AtomicUnit, i32)] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The lone atomic unit of an expression like `dm`, but not `dm**2` or `m*kg`
    pub fn as_atomic(&self) -> Option<AtomicUnit> {
        match self.terms.as_slice() {
            [(unit, 1)] => Some(*unit),
            _ => None,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.terms
            .iter()
            .fold(Dimension::DIMENSIONLESS, |acc, (unit, exp)| {
                acc.multiply(&unit.dimension.power(*exp))
            })
    }

    /// Multiple of the coherent SI unit of the same dimension
    pub fn si_factor(&self) -> f64 {
        self.terms
            .iter()
            .map(|(unit, exp)| unit.factor.powi(*exp))
            .product()
    }

    /// Coherent SI base units for a dimension, e.g. `kg*m**2/s**2` for energy
    pub fn si_base(dimension: Dimension) -> Self {
        let mut expr = UnitExpr::dimensionless();
        for base in BaseDimension::ALL {
            expr.push(si_base_unit(base), dimension.exponent(base));
        }
        expr
    }

    fn push(&mut self, unit: AtomicUnit, exp: i32) {
        if exp == 0 {
            return;
        }
        // terms stay sorted by symbol so equal products compare equal
        match self.terms.binary_search_by(|(u, _)| u.symbol.cmp(unit.symbol)) {
            Ok(i) => {
                self.terms[i].1 += exp;
                if self.terms[i].1 == 0 {
                    self.terms.remove(i);
                }
            }
            Err(i) => self.terms.insert(i, (unit, exp)),
        }
    }

    pub fn multiply(&self, other: &UnitExpr) -> UnitExpr {
        let mut expr = self.clone();
        for (unit, exp) in &other.terms {
            expr.push(*unit, *exp);
        }
        expr
    }

    pub fn power(&self, exp: i32) -> UnitExpr {
        let mut expr = UnitExpr::dimensionless();
        for (unit, e) in &self.terms {
            expr.push(*unit, e * exp);
        }
        expr
    }

    pub fn divide(&self, other: &UnitExpr) -> UnitExpr {
        self.multiply(&other.power(-1))
    }
}

impl From<AtomicUnit> for UnitExpr {
    fn from(unit: AtomicUnit) -> Self {
        let mut expr = UnitExpr::dimensionless();
        expr.push(unit, 1);
        expr
    }
}

/// A magnitude in some unit expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub units: UnitExpr,
}

impl Quantity {
    pub fn new(value: f64, units: UnitExpr) -> Self {
        Self { value, units }
    }

    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, UnitExpr::dimensionless())
    }

    /// The bare numeral 1
    pub fn one() -> Self {
        Self::dimensionless(1.0)
    }

    /// Quantity of `value` coherent SI units of `dimension`
    pub fn from_si(value: f64, dimension: Dimension) -> Self {
        Self::new(value, UnitExpr::si_base(dimension))
    }

    pub fn is_one(&self) -> bool {
        self.units.is_empty() && self.value == 1.0
    }

    pub fn dimension(&self) -> Dimension {
        self.units.dimension()
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension().is_dimensionless()
    }

    /// Magnitude in coherent SI units
    pub fn si_value(&self) -> f64 {
        self.value * self.units.si_factor()
    }

    /// Same units, magnitude 1
    pub fn unit(&self) -> Quantity {
        Quantity::new(1.0, self.units.clone())
    }

    pub fn powi(&self, exp: i32) -> Quantity {
        Quantity::new(self.value.powi(exp), self.units.power(exp))
    }

    pub fn recip(&self) -> Quantity {
        self.powi(-1)
    }

    /// Express in coherent SI base units
    pub fn simplified(&self) -> Quantity {
        Quantity::from_si(self.si_value(), self.dimension())
    }

    /// Express in other units of the same dimension
    pub fn rescale(&self, units: &UnitExpr) -> Result<Quantity, UnitError> {
        let (from, to) = (self.dimension(), units.dimension());
        if from != to {
            return Err(UnitError::IncompatibleDimensions { from, to });
        }
        Ok(Quantity::new(self.si_value() / units.si_factor(), units.clone()))
    }

    /// The pure number of a dimensionless quantity, e.g. `10` for `m/dm`
    pub fn dimensionless_value(&self) -> Result<f64, UnitError> {
        let from = self.dimension();
        if !from.is_dimensionless() {
            return Err(UnitError::IncompatibleDimensions {
                from,
                to: Dimension::DIMENSIONLESS,
            });
        }
        Ok(self.si_value())
    }

    /// How many `unit`s this quantity is
    pub fn in_units_of(&self, unit: &Quantity) -> Result<f64, UnitError> {
        (self / unit).dimensionless_value()
    }

    /// Dimensionally equal with relative tolerance on the SI magnitudes
    pub fn approx_eq(&self, other: &Quantity, rtol: f64) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }
        let (a, b) = (self.si_value(), other.si_value());
        (a - b).abs() <= rtol * a.abs().max(b.abs())
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::dimensionless(value)
    }
}

impl From<AtomicUnit> for Quantity {
    fn from(unit: AtomicUnit) -> Self {
        unit.quantity()
    }
}

impl<'a> Mul<&'a Quantity> for &'a Quantity {
    type Output = Quantity;

    fn mul(self, rhs: &'a Quantity) -> Quantity {
        Quantity::new(self.value * rhs.value, self.units.multiply(&rhs.units))
    }
}

impl<'a> Div<&'a Quantity> for &'a Quantity {
    type Output = Quantity;

    fn div(self, rhs: &'a Quantity) -> Quantity {
        Quantity::new(self.value / rhs.value, self.units.divide(&rhs.units))
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        &self * &rhs
    }
}

impl Div for Quantity {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        &self / &rhs
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.value * rhs, self.units)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<Quantity> for f64 {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        self * rhs.recip()
    }
}

impl Mul<AtomicUnit> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: AtomicUnit) -> Quantity {
        self * rhs.quantity()
    }
}

impl Mul<AtomicUnit> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: AtomicUnit) -> Quantity {
        self * rhs.quantity()
    }
}

impl Div<AtomicUnit> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: AtomicUnit) -> Quantity {
        self / rhs.quantity()
    }
}

impl Mul<Quantity> for AtomicUnit {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        self.quantity() * rhs
    }
}

impl Div<Quantity> for AtomicUnit {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        self.quantity() / rhs
    }
}

impl Mul for AtomicUnit {
    type Output = Quantity;

    fn mul(self, rhs: AtomicUnit) -> Quantity {
        self.quantity() * rhs.quantity()
    }
}

impl Div for AtomicUnit {
    type Output = Quantity;

    fn div(self, rhs: AtomicUnit) -> Quantity {
        self.quantity() / rhs.quantity()
    }
}
