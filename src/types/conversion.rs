//! Bridge between typed `uom` quantities and runtime [`Quantity`] values.
//!
//! Converting into a runtime quantity always lands in coherent SI base units.
//! Converting back checks the dimension first.

use uom::si::f64::{
    AmountOfSubstance, Area, ElectricCharge, ElectricCurrent, Energy, Length, LuminousIntensity,
    Mass, MassDensity, MolarConcentration, ThermodynamicTemperature, Time, Volume,
};
use uom::si::{
    amount_of_substance::mole, area::square_meter, electric_charge::coulomb,
    electric_current::ampere, energy::joule, length::meter, luminous_intensity::candela,
    mass::kilogram, mass_density::kilogram_per_cubic_meter,
    molar_concentration::mole_per_cubic_meter, thermodynamic_temperature::kelvin, time::second,
    volume::cubic_meter,
};

use crate::types::dimension::Dimension;
use crate::types::units::{Quantity, UnitError};

macro_rules! uom_bridge {
    ($($quantity:ident => $dimension:expr, $si_unit:ident;)+) => {$(
        impl From<$quantity> for Quantity {
            fn from(value: $quantity) -> Self {
                Quantity::from_si(value.get::<$si_unit>(), $dimension)
            }
        }

        impl TryFrom<&Quantity> for $quantity {
            type Error = UnitError;

            fn try_from(value: &Quantity) -> Result<Self, Self::Error> {
                let (from, to) = (value.dimension(), $dimension);
                if from != to {
                    return Err(UnitError::IncompatibleDimensions { from, to });
                }
                Ok($quantity::new::<$si_unit>(value.si_value()))
            }
        }
    )+};
}

uom_bridge! {
    Length => Dimension::LENGTH, meter;
    Mass => Dimension::MASS, kilogram;
    Time => Dimension::TIME, second;
    ElectricCurrent => Dimension::CURRENT, ampere;
    ThermodynamicTemperature => Dimension::TEMPERATURE, kelvin;
    LuminousIntensity => Dimension::LUMINOUS_INTENSITY, candela;
    AmountOfSubstance => Dimension::AMOUNT, mole;
    Area => Dimension::AREA, square_meter;
    Volume => Dimension::VOLUME, cubic_meter;
    Energy => Dimension::ENERGY, joule;
    ElectricCharge => Dimension::CHARGE, coulomb;
    MassDensity => Dimension::DENSITY, kilogram_per_cubic_meter;
    MolarConcentration => Dimension::CONCENTRATION, mole_per_cubic_meter;
}
