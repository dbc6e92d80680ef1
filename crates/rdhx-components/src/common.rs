//! Small helpers shared across the component solvers.

use rdhx_core::units::mps;
use rdhx_core::units::{Density, DynVisc, Length, Velocity, VolumeRate};

use crate::error::{ComponentError, ComponentResult};

/// Flows below this (m³/s) are treated as "no flow" by the hydraulic model.
pub(crate) const FLOW_EPSILON_M3PS: f64 = 1e-12;

/// Rejects non-finite intermediates before they propagate into reports.
pub(crate) fn check_finite(what: &'static str, value: f64) -> ComponentResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComponentError::NonPhysicalResult { what, value })
    }
}

/// Mean velocity of a volumetric flow through a circular cross-section.
pub fn pipe_velocity(flow: VolumeRate, diameter: Length) -> ComponentResult<Velocity> {
    let d = diameter.value;
    if d <= 0.0 {
        return Err(ComponentError::InvalidArg {
            what: "pipe diameter must be positive",
        });
    }
    let area = std::f64::consts::PI * d * d / 4.0;
    Ok(mps(flow.value / area))
}

/// Reynolds number for pipe flow, dimensionless.
pub fn reynolds(density: Density, velocity: Velocity, diameter: Length, viscosity: DynVisc) -> ComponentResult<f64> {
    let mu = viscosity.value;
    if mu <= 0.0 {
        return Err(ComponentError::InvalidArg {
            what: "dynamic viscosity must be positive",
        });
    }
    check_finite(
        "Reynolds number",
        density.value * velocity.value * diameter.value / mu,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdhx_core::units::{kgpm3, m3ph, mm, mpas};

    #[test]
    fn velocity_through_dn25() {
        // 1.767 m³/h through a 25 mm bore is almost exactly 1 m/s.
        let v = pipe_velocity(m3ph(1.767), mm(25.0)).unwrap();
        assert!((v.value - 1.0).abs() < 1e-3, "v = {}", v.value);
    }

    #[test]
    fn reynolds_water_like() {
        let re = reynolds(kgpm3(1000.0), mps(1.0), mm(25.0), mpas(1.0)).unwrap();
        assert!((re - 25_000.0).abs() < 1.0, "Re = {re}");
    }

    #[test]
    fn zero_diameter_rejected() {
        assert!(pipe_velocity(m3ph(1.0), mm(0.0)).is_err());
    }
}
