pub mod conversion;
pub mod dimension;
pub mod units;

pub use dimension::{BaseDimension, Dimension};
pub use units::{AtomicUnit, Quantity, UnitError, UnitExpr};

// Typed SI quantities for callers that want compile-time dimensions
pub use uom::si::f64::{
    AmountOfSubstance, ElectricCharge, Energy, Length, Mass, MassDensity, MolarConcentration,
    Time, Volume,
};
