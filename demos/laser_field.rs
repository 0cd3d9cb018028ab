use std::f64::consts::PI;

use sicalc::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SiCalcError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 1 TW focused onto 1 cm², driving a free electron at λ = 1 µm.
    let intensity = 1.0 * TERAWATT / CENTIMETER.powi(2)?;
    let frequency = wavelength_to_frequency(1.0 * MICROMETER)?;
    let omega = angular_frequency(frequency)?;
    let q = ELEMENTARY_CHARGE;

    let e0 = (2.0 * intensity / (SPEED_OF_LIGHT * VACUUM_PERMITTIVITY)).sqrt()?;
    let b0 = (2.0 * intensity * VACUUM_PERMEABILITY / SPEED_OF_LIGHT).sqrt()?;

    let x0 = (e0 * q) / (ELECTRON_MASS * omega * omega);
    let d = 2.0 * x0;
    let p0 = q * d;

    let power = (p0 * p0) * omega.powi(4)? / (12.0 * PI * VACUUM_PERMITTIVITY * SPEED_OF_LIGHT.powi(3)?);
    let area = power / intensity;
    let radius = (area / PI).sqrt()?;

    // The unit of every result must match what the physics says it is.
    check_compatible(Some(&e0), Some(&(NEWTON / COULOMB)))?;
    check_compatible(Some(&b0), Some(&TESLA))?;
    check_compatible(Some(&x0), Some(&METER))?;
    check_compatible(Some(&power), Some(&TERAWATT))?;
    check_compatible(Some(&area), Some(&(METER * METER)))?;
    check_compatible(Some(&radius), Some(&METER))?;

    println!("E_0: {e0}");
    println!("B_0: {b0}");
    println!("x_0: {x0} d: {d}");
    println!("P: {power}");
    println!("r: {radius:.10}");
    println!("r: {radius:.2}");
    println!(
        "r: {}",
        radius.to_display_string(&FormatOptions::default().with_raw_si_units(true))
    );
    Ok(())
}
