//! NumPy-style `allclose` and `linspace` that accept unit-bearing values.

use nalgebra::DVector;

use super::{QuantityArray, Value, to_unitless, unit_of};
use crate::types::units::{Quantity, UnitError};

pub const DEFAULT_RTOL: f64 = 1e-8;
pub const DEFAULT_LINSPACE_POINTS: usize = 50;

fn broadcast(values: Vec<f64>, len: usize) -> DVector<f64> {
    match values.as_slice() {
        [single] if len != 1 => DVector::from_element(len, *single),
        _ => DVector::from_vec(values),
    }
}

/// Elementwise `|a - b| <= |a|·rtol + atol`.
///
/// `b` and `atol` are expressed in the unit of `a` first. Scalars broadcast
/// against arrays.
pub fn allclose(
    a: impl Into<Value>,
    b: impl Into<Value>,
    rtol: f64,
    atol: Option<Value>,
) -> Result<bool, UnitError> {
    let (a, b) = (a.into(), b.into());
    let unit = unit_of(&a);

    let a_vals = to_unitless(&a, Some(&unit))?.flatten();
    let b_vals = to_unitless(&b, Some(&unit))?.flatten();
    let atol = match atol {
        Some(atol) => match to_unitless(&atol, Some(&unit))?.flatten().as_slice() {
            [single] => *single,
            other => {
                return Err(UnitError::ShapeMismatch {
                    left: 1,
                    right: other.len(),
                });
            }
        },
        None => 0.0,
    };

    let len = match (a_vals.len(), b_vals.len()) {
        (l, r) if l == r => l,
        (1, r) => r,
        (l, 1) => l,
        (left, right) => return Err(UnitError::ShapeMismatch { left, right }),
    };
    let a_vec = broadcast(a_vals, len);
    let b_vec = broadcast(b_vals, len);

    let diff = (&a_vec - &b_vec).abs();
    let limit = (a_vec.abs() * rtol).add_scalar(atol);
    Ok(diff.iter().zip(limit.iter()).all(|(d, lim)| d <= lim))
}

/// `num` evenly spaced points from `start` to `stop` inclusive, in the unit
/// of `start`.
pub fn linspace(
    start: impl Into<Quantity>,
    stop: impl Into<Quantity>,
    num: usize,
) -> Result<QuantityArray, UnitError> {
    let (start, stop) = (start.into(), stop.into());
    let unit = start.unit();
    let first = start.in_units_of(&unit)?;
    let last = stop.in_units_of(&unit)?;

    let values = match num {
        0 => DVector::zeros(0),
        1 => DVector::from_element(1, first),
        _ => {
            let step = (last - first) / (num - 1) as f64;
            DVector::from_fn(num, |i, _| {
                if i == num - 1 {
                    last
                } else {
                    first + step * i as f64
                }
            })
        }
    };
    Ok(QuantityArray::new(values, unit.units))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::units::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_allclose_scalars() {
        assert!(allclose(1.0, 1.0 + 1e-10, DEFAULT_RTOL, None).unwrap());
        assert!(!allclose(1.0, 1.1, DEFAULT_RTOL, None).unwrap());
        assert!(allclose(0.0, 0.0, DEFAULT_RTOL, None).unwrap());
    }

    #[test]
    fn test_allclose_atol() {
        assert!(!allclose(0.0, 1e-6, DEFAULT_RTOL, None).unwrap());
        assert!(allclose(0.0, 1e-6, DEFAULT_RTOL, Some(1e-5.into())).unwrap());
    }

    #[test]
    fn test_allclose_with_units() {
        // 1 m vs 10 dm
        assert!(allclose(1.0 * METRE, 10.0 * DECIMETRE, DEFAULT_RTOL, None).unwrap());
        assert!(!allclose(1.0 * METRE, 11.0 * DECIMETRE, DEFAULT_RTOL, None).unwrap());
        assert!(
            allclose(
                1.0 * METRE,
                1.001 * METRE,
                DEFAULT_RTOL,
                Some((2.0 * MILLIMETRE).into())
            )
            .unwrap()
        );
        assert!(allclose(1.0 * METRE, 1.0 * SECOND, DEFAULT_RTOL, None).is_err());
    }

    #[test]
    fn test_allclose_broadcast() {
        let arr = DVector::from_vec(vec![2.0, 2.0 + 1e-12, 2.0]);
        assert!(allclose(arr.clone(), 2.0, DEFAULT_RTOL, None).unwrap());
        assert!(allclose(2.0, arr, DEFAULT_RTOL, None).unwrap());

        let short = DVector::from_vec(vec![1.0, 2.0]);
        let long = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            allclose(short, long, DEFAULT_RTOL, None).unwrap_err(),
            UnitError::ShapeMismatch { left: 2, right: 3 }
        );
    }

    #[test]
    fn test_linspace() {
        let points = linspace(0.0 * METRE, 10.0 * METRE, 3).unwrap();
        assert_eq!(points.units, METRE.quantity().units);
        assert_eq!(points.values.as_slice(), &[0.0, 5.0, 10.0]);
        assert_eq!(points.get(1), Some(5.0 * METRE));
    }

    #[test]
    fn test_linspace_mixed_units() {
        let points = linspace(0.0 * METRE, 10.0 * DECIMETRE, 5).unwrap();
        assert_relative_eq!(points.values[4], 1.0, epsilon = 1e-12);
        assert_relative_eq!(points.values[2], 0.5, epsilon = 1e-12);
        assert!(linspace(0.0 * METRE, 1.0 * SECOND, 5).is_err());
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).unwrap().is_empty());
        assert_eq!(linspace(2.0, 5.0, 1).unwrap().values.as_slice(), &[2.0]);
        let default = linspace(0.0, 1.0, DEFAULT_LINSPACE_POINTS).unwrap();
        assert_eq!(default.len(), 50);
        assert!(default.units.is_empty());
    }
}
