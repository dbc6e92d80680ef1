//! Hydraulic pressure-drop model for the field piping around the door.
//!
//! Straight-run losses use Darcy-Weisbach with a Swamee-Jain friction
//! factor in the turbulent regime, bends use loss coefficients, and the
//! control valve uses its Kv rating.

use std::fmt;
use std::str::FromStr;

use rdhx_catalog::ValveSpec;
use rdhx_core::units::{as_m3ph, m, mm, pa, Length, Pressure, VolumeRate};
use rdhx_fluids::FluidProperties;

use crate::common::{check_finite, pipe_velocity, reynolds, FLOW_EPSILON_M3PS};
use crate::error::{ComponentError, ComponentResult};

/// Where the water connections enter the door.
///
/// Top-fed routing adds one 180° return bend over the door frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipeConfiguration {
    #[default]
    BottomFed,
    TopFed,
}

impl PipeConfiguration {
    pub fn canonical_id(self) -> &'static str {
        match self {
            Self::BottomFed => "bottom_fed",
            Self::TopFed => "top_fed",
        }
    }
}

impl FromStr for PipeConfiguration {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bottom_fed" | "bottom" => Ok(Self::BottomFed),
            "top_fed" | "top" => Ok(Self::TopFed),
            _ => Err(ComponentError::InvalidArg {
                what: "unknown pipe configuration",
            }),
        }
    }
}

impl fmt::Display for PipeConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_id())
    }
}

/// Loss coefficient for a pipe bend of the given angle in degrees.
pub fn bend_loss_coefficient(angle_deg: u32) -> ComponentResult<f64> {
    match angle_deg {
        45 => Ok(0.35),
        90 => Ok(0.75),
        180 => Ok(1.5),
        _ => Err(ComponentError::InvalidArg {
            what: "unsupported bend angle",
        }),
    }
}

/// Itemized hydraulic losses, all gauge pressure drops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureBreakdown {
    pub straight: Pressure,
    pub bends: Pressure,
    pub valve: Pressure,
    pub total: Pressure,
}

/// Field piping between the CDU header and the door.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipingSystem {
    pub configuration: PipeConfiguration,
    pub pipe_length: Length,
    pub pipe_diameter: Length,
    pub roughness: Length,
}

impl Default for PipingSystem {
    /// Typical install: 3.7 m of DN25 steel pipe per door.
    fn default() -> Self {
        Self {
            configuration: PipeConfiguration::BottomFed,
            pipe_length: m(3.7),
            pipe_diameter: mm(25.0),
            roughness: mm(0.2),
        }
    }
}

impl PipingSystem {
    pub fn new(configuration: PipeConfiguration) -> Self {
        Self {
            configuration,
            ..Self::default()
        }
    }

    /// Darcy-Weisbach with Swamee-Jain, plus bend and valve losses.
    ///
    /// Returns an all-zero breakdown at (effectively) zero flow.
    pub fn pressure_drop(
        &self,
        flow: VolumeRate,
        fluid: &FluidProperties,
        valve: Option<&ValveSpec>,
    ) -> ComponentResult<PressureBreakdown> {
        if flow.value < FLOW_EPSILON_M3PS {
            let zero = pa(0.0);
            return Ok(PressureBreakdown {
                straight: zero,
                bends: zero,
                valve: zero,
                total: zero,
            });
        }

        let rho = fluid.density.value;
        let velocity = pipe_velocity(flow, self.pipe_diameter)?;
        let re = reynolds(fluid.density, velocity, self.pipe_diameter, fluid.dynamic_viscosity)?;
        let rel_roughness = self.roughness.value / self.pipe_diameter.value;
        let f = friction_factor(re, rel_roughness)?;

        let dynamic = rho * velocity.value * velocity.value / 2.0; // Pa
        let straight = check_finite(
            "straight pipe pressure drop",
            f * (self.pipe_length.value / self.pipe_diameter.value) * dynamic,
        )?;

        let bends = match self.configuration {
            PipeConfiguration::BottomFed => 0.0,
            PipeConfiguration::TopFed => bend_loss_coefficient(180)? * dynamic,
        };

        let valve_drop = match valve {
            Some(v) => valve_pressure_drop(flow, v)?.value,
            None => 0.0,
        };

        Ok(PressureBreakdown {
            straight: pa(straight),
            bends: pa(bends),
            valve: pa(valve_drop),
            total: pa(straight + bends + valve_drop),
        })
    }
}

/// Darcy friction factor: laminar 64/Re below Re = 2300, Swamee-Jain above.
pub fn friction_factor(re: f64, relative_roughness: f64) -> ComponentResult<f64> {
    if re <= 0.0 || !re.is_finite() {
        return Err(ComponentError::NonPhysicalResult {
            what: "Reynolds number must be positive",
            value: re,
        });
    }
    if re < 2300.0 {
        return Ok(64.0 / re);
    }
    let log_arg = relative_roughness / 3.7 + 5.74 / re.powf(0.9);
    let f = 0.25 / log_arg.log10().powi(2);
    check_finite("friction factor", f)
}

/// Control-valve drop from the Kv rating: Δp [bar] = (V̇ [m³/h] / Kv)².
pub fn valve_pressure_drop(flow: VolumeRate, valve: &ValveSpec) -> ComponentResult<Pressure> {
    if valve.kv <= 0.0 {
        return Err(ComponentError::InvalidArg {
            what: "valve Kv must be positive",
        });
    }
    let ratio = as_m3ph(flow) / valve.kv;
    let bar = check_finite("valve pressure drop", ratio * ratio)?;
    Ok(pa(bar * 1e5))
}
