use chem_units::types::units::*;
use chem_units::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Concentrations in molar, lengths in decimetres
    let registry = UnitRegistry {
        length: DECIMETRE.quantity(),
        ..UnitRegistry::si()
    };
    let system = UnitSystem::from(registry);
    print!("{}", system.registry().ok_or("unitless")?);

    let conc = get_derived_unit(&system, "concentration")?;
    println!("concentration unit: {} ({} M)", conc, conc.in_units_of(&MOLAR.quantity())?);

    let g = get_derived_unit(&system, "radiolytic_yield")?;
    println!("radiolytic yield unit: {} ({} per 100 eV)", g, g.in_units_of(&PER_100_EV.quantity())?);

    let config = UnitsConfig::from_unit_system(&system)?;
    println!("\n{}", config.to_toml_string()?);

    let restored = config.unit_system()?;
    println!("round trip preserved registry: {}", restored == system);

    let times = linspace(0.0 * SECOND, 1.0 * MINUTE, 5)?;
    for t in times.iter() {
        println!("t = {}", t);
    }
    Ok(())
}
