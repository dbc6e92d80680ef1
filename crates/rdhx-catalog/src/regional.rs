//! Regional installation defaults.

use rdhx_core::units::Temperature;
use rdhx_fluids::FluidKind;

/// Key of the fallback region every catalog carries.
pub const GLOBAL_REGION: &str = "global";

/// Fully-resolved settings for one region or subregion.
///
/// Subregion entries are materialized with their parent's fields already
/// merged, so consumers never walk a fallback chain.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionalSettings {
    /// Electricity cost [currency/kWh], passed through to the commercial layer
    pub energy_cost_per_kwh: f64,
    /// Grid carbon intensity [kg CO₂/kWh]
    pub carbon_kg_per_kwh: f64,
    /// Default fan supply voltage [V]
    pub default_voltage: f64,
    pub default_fluid: FluidKind,
    pub default_glycol_pct: f64,
    /// Typical ambient envelope (min, max)
    pub ambient_temp_range: (Temperature, Temperature),
    /// Typical relative humidity envelope [%] (min, max)
    pub humidity_range_pct: (f64, f64),
}
