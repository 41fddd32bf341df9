pub mod types;
pub mod registry;
pub mod numeric;

pub use types::*;
pub use types::units::{constants, per_molar_per_second, umol_per_joule};
pub use registry::{
    DerivedQuantity, HumanReadableRegistry, UnitRegistry, UnitSymbol, UnitSystem, UnitsConfig,
    get_derived_unit, unit_registry_from_human_readable, unit_registry_to_human_readable,
};
pub use numeric::{
    QuantityArray, Unitless, Value, allclose, is_unitless, linspace, to_unitless, unit_of,
};
