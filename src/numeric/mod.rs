//! Helpers for values that may or may not carry units.
//!
//! Code that runs both with a unit registry and in unitless mode passes
//! around a mix of bare numbers, quantities and arrays of either. [`Value`]
//! names those shapes explicitly.

pub mod compat;

use nalgebra::DVector;
use tracing::trace;

use crate::types::dimension::Dimension;
use crate::types::units::{Quantity, UnitError, UnitExpr};

pub use compat::{DEFAULT_LINSPACE_POINTS, DEFAULT_RTOL, allclose, linspace};

/// Array of magnitudes sharing one unit
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityArray {
    pub values: DVector<f64>,
    pub units: UnitExpr,
}

impl QuantityArray {
    pub fn new(values: DVector<f64>, units: UnitExpr) -> Self {
        Self { values, units }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Quantity> {
        self.values
            .get(i)
            .map(|&value| Quantity::new(value, self.units.clone()))
    }

    pub fn iter(&self) -> impl Iterator<Item = Quantity> + '_ {
        self.values
            .iter()
            .map(move |&value| Quantity::new(value, self.units.clone()))
    }

    pub fn dimension(&self) -> Dimension {
        self.units.dimension()
    }
}

/// A bare or unit-bearing scalar, array, or sequence of those
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Quantity(Quantity),
    Array(DVector<f64>),
    QuantityArray(QuantityArray),
    Sequence(Vec<Value>),
}

impl Value {
    /// Dimension of a unit-bearing value, `None` for bare numbers and
    /// sequences
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            Value::Quantity(q) => Some(q.dimension()),
            Value::QuantityArray(arr) => Some(arr.dimension()),
            Value::Number(_) | Value::Array(_) | Value::Sequence(_) => None,
        }
    }

    /// Number of scalar elements, `None` for scalars
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Number(_) | Value::Quantity(_) => None,
            Value::Array(arr) => Some(arr.len()),
            Value::QuantityArray(arr) => Some(arr.len()),
            Value::Sequence(seq) => Some(seq.len()),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<Quantity> for Value {
    fn from(value: Quantity) -> Self {
        Value::Quantity(value)
    }
}

impl From<DVector<f64>> for Value {
    fn from(value: DVector<f64>) -> Self {
        Value::Array(value)
    }
}

impl From<QuantityArray> for Value {
    fn from(value: QuantityArray) -> Self {
        Value::QuantityArray(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Sequence(values.into_iter().map(Into::into).collect())
    }
}

/// Result of [`to_unitless`]
#[derive(Debug, Clone, PartialEq)]
pub enum Unitless {
    Scalar(f64),
    Array(DVector<f64>),
    /// Sequence whose elements are not all scalars
    Nested(Vec<Unitless>),
}

impl Unitless {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Unitless::Scalar(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&DVector<f64>> {
        match self {
            Unitless::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// All magnitudes in order
    pub fn flatten(&self) -> Vec<f64> {
        match self {
            Unitless::Scalar(x) => vec![*x],
            Unitless::Array(arr) => arr.iter().copied().collect(),
            Unitless::Nested(items) => items.iter().flat_map(Unitless::flatten).collect(),
        }
    }
}

/// True when `expr` carries no physical dimension.
///
/// Bare numbers and arrays are unitless; so are quantities like `m/dm`.
/// A sequence is unitless when all of its elements are.
pub fn is_unitless(expr: &Value) -> bool {
    match expr {
        Value::Number(_) | Value::Array(_) => true,
        Value::Quantity(q) => q.is_dimensionless(),
        Value::QuantityArray(arr) => arr.dimension().is_dimensionless(),
        Value::Sequence(items) => items.iter().all(is_unitless),
    }
}

/// Unit of `expr` as a magnitude-1 quantity; the bare number 1 when `expr`
/// has no units. A sequence reports the unit of its first element.
pub fn unit_of(expr: &Value) -> Quantity {
    match expr {
        Value::Quantity(q) => q.unit(),
        Value::QuantityArray(arr) => Quantity::new(1.0, arr.units.clone()),
        Value::Sequence(items) => items.first().map(unit_of).unwrap_or_else(Quantity::one),
        Value::Number(_) | Value::Array(_) => Quantity::one(),
    }
}

/// Strip units, expressing `value` in multiples of `new_unit` (default:
/// dimensionless). Sequences are converted element by element.
pub fn to_unitless(value: &Value, new_unit: Option<&Quantity>) -> Result<Unitless, UnitError> {
    let one = Quantity::one();
    let new_unit = new_unit.unwrap_or(&one);
    convert(value, new_unit)
}

fn convert(value: &Value, new_unit: &Quantity) -> Result<Unitless, UnitError> {
    match value {
        Value::Number(x) => {
            let scale = Quantity::one().in_units_of(new_unit)?;
            Ok(Unitless::Scalar(x * scale))
        }
        Value::Quantity(q) => Ok(Unitless::Scalar(q.in_units_of(new_unit)?)),
        Value::Array(arr) => {
            let scale = Quantity::one().in_units_of(new_unit)?;
            Ok(Unitless::Array(arr * scale))
        }
        Value::QuantityArray(arr) => {
            let scale = Quantity::new(1.0, arr.units.clone()).in_units_of(new_unit)?;
            Ok(Unitless::Array(&arr.values * scale))
        }
        Value::Sequence(items) => {
            trace!(len = items.len(), "converting sequence element-wise");
            let converted = items
                .iter()
                .map(|item| convert(item, new_unit))
                .collect::<Result<Vec<_>, _>>()?;
            let scalars: Option<Vec<f64>> = converted.iter().map(Unitless::as_scalar).collect();
            Ok(match scalars {
                Some(scalars) => Unitless::Array(DVector::from_vec(scalars)),
                None => Unitless::Nested(converted),
            })
        }
    }
}
