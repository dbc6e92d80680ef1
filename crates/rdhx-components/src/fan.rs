//! Fan bank operating-point solver.
//!
//! Fans follow the affinity laws: flow scales linearly with speed,
//! pressure with its square, power with its cube. Electrical power is
//! additionally derated quadratically from the 230 V reference voltage.

use rdhx_catalog::FanSpec;
use rdhx_core::units::constants::REFERENCE_VOLTAGE_V;
use rdhx_core::units::{
    as_m3ph, m3ph, pa, w, Density, Power, Pressure, SpecHeat, TempInterval, VolumeRate,
};

use crate::common::check_finite;
use crate::error::{ComponentError, ComponentResult};

/// Flow at a new speed from a known (flow, speed) point.
pub fn flow_at_speed(flow: f64, speed_pct: f64, new_speed_pct: f64) -> ComponentResult<f64> {
    if speed_pct <= 0.0 {
        return Err(ComponentError::InvalidArg {
            what: "reference fan speed must be positive",
        });
    }
    Ok(flow * new_speed_pct / speed_pct)
}

/// Static pressure at a new speed from a known (pressure, speed) point.
pub fn pressure_at_speed(pressure: f64, speed_pct: f64, new_speed_pct: f64) -> ComponentResult<f64> {
    if speed_pct <= 0.0 {
        return Err(ComponentError::InvalidArg {
            what: "reference fan speed must be positive",
        });
    }
    let r = new_speed_pct / speed_pct;
    Ok(pressure * r * r)
}

/// Shaft power at a new speed from a known (power, speed) point.
pub fn power_at_speed(power: f64, speed_pct: f64, new_speed_pct: f64) -> ComponentResult<f64> {
    if speed_pct <= 0.0 {
        return Err(ComponentError::InvalidArg {
            what: "reference fan speed must be positive",
        });
    }
    let r = new_speed_pct / speed_pct;
    Ok(power * r * r * r)
}

/// Air flow needed to reject `cooling` into air warming by `air_delta_t`.
pub fn required_air_flow(
    cooling: Power,
    air_density: Density,
    cp_air: SpecHeat,
    air_delta_t: TempInterval,
) -> ComponentResult<VolumeRate> {
    let dt = air_delta_t.value;
    if dt <= 0.0 {
        return Err(ComponentError::NonPhysicalResult {
            what: "air temperature rise must be positive",
            value: dt,
        });
    }
    let rho = air_density.value;
    if rho <= 0.0 || cp_air.value <= 0.0 {
        return Err(ComponentError::InvalidArg {
            what: "air density and specific heat must be positive",
        });
    }
    // ṁ [kg/s] = Q [W] / (cp [J/(kg·K)] · ΔT [K])
    let mdot = cooling.value / (cp_air.value * dt);
    let vdot = check_finite("required air flow", mdot / rho)?;
    Ok(m3ph(vdot * 3600.0))
}

/// Door static pressure seen by the fans at a given total air flow.
///
/// Empirical fit to the door's coil and grille resistance.
pub fn door_static_pressure(air_flow: VolumeRate) -> Pressure {
    let q = as_m3ph(air_flow) / 1000.0;
    pa(25.0 + 0.05 * q * q)
}

/// Operating point of the whole fan bank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanPerformance {
    /// Commanded speed, 0..=100 % of nominal.
    pub speed_pct: f64,
    /// Delivered air flow across the bank.
    pub air_flow: VolumeRate,
    pub static_pressure: Pressure,
    /// Electrical power drawn by the bank.
    pub power: Power,
    /// Combined sound pressure level of the bank [dB(A)].
    pub noise_dba: f64,
    /// False when the demand exceeds the bank envelope and the values
    /// above are the best-effort 100 %-speed point instead.
    pub sufficient: bool,
}

impl FanPerformance {
    /// Strict form: rejects a clamped best-effort point as an error.
    pub fn require_sufficient(self) -> ComponentResult<Self> {
        if self.sufficient {
            Ok(self)
        } else {
            Err(ComponentError::InfeasibleOperatingPoint {
                what: format!(
                    "fan bank saturated at 100 % speed ({:.0} m³/h, {:.0} Pa)",
                    as_m3ph(self.air_flow),
                    self.static_pressure.value
                ),
            })
        }
    }
}

/// A bank of identical fans driven at a common speed and supply voltage.
#[derive(Debug, Clone)]
pub struct FanSystem {
    spec: FanSpec,
    voltage: f64,
}

impl FanSystem {
    pub fn new(spec: FanSpec, voltage: f64) -> ComponentResult<Self> {
        if spec.count == 0 {
            return Err(ComponentError::InvalidArg {
                what: "fan count must be at least one",
            });
        }
        if voltage <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "supply voltage must be positive",
            });
        }
        Ok(Self { spec, voltage })
    }

    pub fn spec(&self) -> &FanSpec {
        &self.spec
    }

    /// Total nominal air flow of the bank at 100 % speed.
    pub fn nominal_bank_flow(&self) -> VolumeRate {
        m3ph(as_m3ph(self.spec.nominal_air_flow) * f64::from(self.spec.count))
    }

    /// Solves the speed that meets both the flow and the pressure demand.
    ///
    /// Speed is the larger of the flow ratio and the square root of the
    /// pressure ratio, per the affinity laws. A demand past 100 % speed
    /// yields the saturated 100 % point with `sufficient == false`.
    pub fn operating_point(
        &self,
        air_flow: VolumeRate,
        static_pressure: Pressure,
    ) -> ComponentResult<FanPerformance> {
        let demand_flow = as_m3ph(air_flow);
        let demand_sp = static_pressure.value;
        if demand_flow < 0.0 || demand_sp < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "air flow and static pressure demands must be non-negative",
            });
        }

        let bank_flow = as_m3ph(self.nominal_bank_flow());
        let nominal_sp = self.spec.nominal_static_pressure.value;
        let flow_ratio = demand_flow / bank_flow;
        let pressure_ratio = (demand_sp / nominal_sp).sqrt();
        let raw_speed = check_finite("fan speed", flow_ratio.max(pressure_ratio) * 100.0)?;

        let sufficient = raw_speed <= 100.0;
        let speed = raw_speed.clamp(0.0, 100.0);

        let (delivered_flow, delivered_sp) = if sufficient {
            (demand_flow, demand_sp)
        } else {
            // Saturated: report what the bank can actually do at 100 %.
            (bank_flow, nominal_sp)
        };

        Ok(FanPerformance {
            speed_pct: speed,
            air_flow: m3ph(delivered_flow),
            static_pressure: pa(delivered_sp),
            power: w(self.electrical_power_w(speed)),
            noise_dba: self.noise_dba(speed),
            sufficient,
        })
    }

    /// Bank electrical power at a given speed, derated for voltage.
    pub(crate) fn electrical_power_w(&self, speed_pct: f64) -> f64 {
        let s = speed_pct / 100.0;
        let v = self.voltage / REFERENCE_VOLTAGE_V;
        self.spec.nominal_power.value * f64::from(self.spec.count) * s * s * s * v * v
    }

    /// Combined bank noise at a given speed, floored at 0 dB(A).
    pub fn noise_dba(&self, speed_pct: f64) -> f64 {
        if speed_pct <= 0.0 {
            return 0.0;
        }
        let single = self.spec.nominal_noise_dba + 15.0 * (speed_pct / 100.0).log10();
        let bank = single + 10.0 * f64::from(self.spec.count).log10();
        bank.max(0.0)
    }
}

/// Logarithmic sum of incoherent sound pressure levels.
pub fn combined_noise(levels_dba: &[f64]) -> f64 {
    let sum: f64 = levels_dba.iter().map(|l| 10f64.powf(l / 10.0)).sum();
    if sum > 0.0 {
        10.0 * sum.log10()
    } else {
        0.0
    }
}
