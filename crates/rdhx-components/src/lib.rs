//! rdhx-components: physical component solvers for rear-door
//! heat-exchanger units.
//!
//! Each module solves one subsystem in isolation:
//! - [`hx`]: water-side thermal balance and coil pressure drop
//! - [`piping`]: field piping and control-valve hydraulics
//! - [`fan`]: fan bank operating point via the affinity laws
//! - [`altitude`]: air-density derating of the fan solution
//! - [`valve`]: control-valve sizing
//!
//! Solvers take canonical SI quantities and catalog specs; orchestration
//! across solvers lives in `rdhx-engine`.

pub mod altitude;
pub mod common;
pub mod error;
pub mod fan;
pub mod hx;
pub mod piping;
pub mod valve;

pub use altitude::{air_density_at, AltitudeCorrection};
pub use error::{ComponentError, ComponentResult};
pub use fan::{
    combined_noise, door_static_pressure, required_air_flow, FanPerformance, FanSystem,
};
pub use hx::{
    capacity_from_flow, effectiveness_ntu, heat_transfer_rate, lmtd, HeatBalance, HeatExchanger,
    WaterSide,
};
pub use piping::{
    bend_loss_coefficient, friction_factor, valve_pressure_drop, PipeConfiguration,
    PipingSystem, PressureBreakdown,
};
pub use valve::{ValveRecommendation, ValveSelector};
