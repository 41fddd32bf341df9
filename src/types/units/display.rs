use std::fmt;

use super::{Quantity, UnitExpr};
use crate::types::dimension::BaseDimension;

/// One registry line, e.g. `length: 1 dm [L]`
#[derive(Debug)]
pub struct DisplayRegistryEntry<'a>(pub BaseDimension, pub &'a Quantity);

fn write_term(f: &mut fmt::Formatter<'_>, symbol: &str, exp: i32) -> fmt::Result {
    match exp {
        1 => write!(f, "{symbol}"),
        _ => write!(f, "{symbol}**{exp}"),
    }
}

impl fmt::Display for UnitExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "dimensionless");
        }
        let numerator: Vec<_> = self.terms().iter().filter(|(_, e)| *e > 0).collect();
        let denominator: Vec<_> = self.terms().iter().filter(|(_, e)| *e < 0).collect();

        if numerator.is_empty() {
            write!(f, "1")?;
        }
        for (i, (unit, exp)) in numerator.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            write_term(f, unit.symbol, *exp)?;
        }
        for (unit, exp) in denominator {
            write!(f, "/")?;
            write_term(f, unit.symbol, -exp)?;
        }
        Ok(())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.units.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.units)
        }
    }
}

impl fmt::Display for DisplayRegistryEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.0, self.1, self.1.dimension())
    }
}
