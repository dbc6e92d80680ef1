//! Altitude derating of the air side.
//!
//! Thinner air carries less heat per volume, so a site above sea level
//! needs more volumetric flow (and therefore fan speed and power) for
//! the same duty. The correction runs once, after the sea-level fan
//! solve.

use rdhx_core::units::constants::{
    AIR_DENSITY_SEA_LEVEL_KGPM3, AIR_MOLAR_MASS_KG_PER_MOL, G0_MPS2, R_UNIVERSAL_J_PER_MOL_K,
};
use rdhx_core::units::{as_m3ph, kgpm3, m3ph, pa, w, Density, Temperature};

use crate::error::{ComponentError, ComponentResult};
use crate::fan::{FanPerformance, FanSystem};

/// Isothermal barometric air density at `altitude_m` above sea level.
///
/// Altitudes at or below sea level return the reference density.
pub fn air_density_at(altitude_m: f64, ambient: Temperature) -> ComponentResult<Density> {
    if altitude_m <= 0.0 {
        return Ok(kgpm3(AIR_DENSITY_SEA_LEVEL_KGPM3));
    }
    let t_kelvin = ambient.value;
    if t_kelvin <= 0.0 {
        return Err(ComponentError::InvalidArg {
            what: "ambient temperature must be above absolute zero",
        });
    }
    let exponent = -G0_MPS2 * AIR_MOLAR_MASS_KG_PER_MOL * altitude_m
        / (R_UNIVERSAL_J_PER_MOL_K * t_kelvin);
    Ok(kgpm3(AIR_DENSITY_SEA_LEVEL_KGPM3 * exponent.exp()))
}

/// Site altitude context applied to a sea-level fan solution.
#[derive(Debug, Clone, Copy)]
pub struct AltitudeCorrection {
    altitude_m: f64,
    density_ratio: f64,
}

impl AltitudeCorrection {
    pub fn new(altitude_m: f64, ambient: Temperature) -> ComponentResult<Self> {
        if !altitude_m.is_finite() {
            return Err(ComponentError::InvalidArg {
                what: "altitude must be finite",
            });
        }
        let density = air_density_at(altitude_m, ambient)?;
        Ok(Self {
            altitude_m,
            density_ratio: density.value / AIR_DENSITY_SEA_LEVEL_KGPM3,
        })
    }

    /// ρ(site) / ρ(sea level), 1.0 at or below sea level.
    pub fn density_ratio(&self) -> f64 {
        self.density_ratio
    }

    pub fn is_noop(&self) -> bool {
        self.altitude_m <= 0.0
    }

    /// Rescales a sea-level operating point for the site density.
    ///
    /// With r = ρ/ρ₀: volumetric flow and speed scale by 1/r, static
    /// pressure by 1/r² on the curve then r for the medium, power by
    /// 1/r³ on the curve then r for the medium. Noise is recomputed at
    /// the corrected speed. A corrected speed past 100 % saturates the
    /// point: the result carries what the bank can actually deliver at
    /// 100 % in the site air, with `sufficient` cleared.
    pub fn apply(&self, fan: &FanSystem, sea_level: &FanPerformance) -> FanPerformance {
        if self.is_noop() {
            return *sea_level;
        }
        let r = self.density_ratio;
        let scale = 1.0 / r;

        let raw_speed = sea_level.speed_pct * scale;
        if !sea_level.sufficient || raw_speed > 100.0 {
            // Fans are volumetric machines: flow at a given speed does not
            // change with density, pressure and power scale with it.
            return FanPerformance {
                speed_pct: 100.0,
                air_flow: fan.nominal_bank_flow(),
                static_pressure: pa(fan.spec().nominal_static_pressure.value * r),
                power: w(fan.electrical_power_w(100.0) * r),
                noise_dba: fan.noise_dba(100.0),
                sufficient: false,
            };
        }

        FanPerformance {
            speed_pct: raw_speed,
            air_flow: m3ph(as_m3ph(sea_level.air_flow) * scale),
            static_pressure: pa(sea_level.static_pressure.value * scale * scale * r),
            power: w(sea_level.power.value * scale * scale * scale * r),
            noise_dba: fan.noise_dba(raw_speed),
            sufficient: true,
        }
    }
}
