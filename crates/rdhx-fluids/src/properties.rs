//! Fluid property resolution.

use crate::error::{FluidError, FluidResult};
use crate::kind::FluidKind;
use crate::tables::{
    GlycolTable, ETHYLENE_GLYCOL, GLYCOL_BREAKPOINTS_PCT, PROPYLENE_GLYCOL, WATER_DENSITY_KGPM3,
    WATER_FREEZING_POINT_C, WATER_SPECIFIC_HEAT_KJ_PER_KG_K, WATER_VISCOSITY_MPAS,
};
use rdhx_core::units::{
    as_celsius, celsius, kgpm3, kj_per_kg_k, mpas, Density, DynVisc, SpecHeat, Temperature,
};
use rdhx_core::{lerp_table, RdhxError};

/// Warn when the supply temperature is within this margin of the mixture
/// freezing point.
pub const FREEZE_MARGIN_K: f64 = 3.0;

/// Thermophysical snapshot of a coolant mixture, immutable per calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    pub kind: FluidKind,
    pub glycol_pct: f64,
    pub density: Density,
    pub specific_heat: SpecHeat,
    pub dynamic_viscosity: DynVisc,
    pub freezing_point: Temperature,
}

impl FluidProperties {
    /// True when `supply_temp` is uncomfortably close to (or below) the
    /// freezing point of the mixture.
    pub fn freeze_risk(&self, supply_temp: Temperature) -> bool {
        as_celsius(supply_temp) < as_celsius(self.freezing_point) + FREEZE_MARGIN_K
    }
}

/// Resolve the properties of a (fluid kind, glycol percentage) pair.
///
/// Glycol percentage must be in [0, 100]; water must be specified with 0 %.
/// Pure table lookup with linear interpolation between concentration
/// breakpoints; concentrations past the last breakpoint clamp to it.
pub fn properties(kind: FluidKind, glycol_pct: f64) -> FluidResult<FluidProperties> {
    if !glycol_pct.is_finite() || !(0.0..=100.0).contains(&glycol_pct) {
        return Err(FluidError::InvalidFluidSpec {
            what: "glycol percentage outside [0, 100]",
            value: glycol_pct,
        });
    }
    if kind == FluidKind::Water && glycol_pct > 0.0 {
        return Err(FluidError::InvalidFluidSpec {
            what: "water cannot carry a glycol percentage",
            value: glycol_pct,
        });
    }

    let table = match kind {
        FluidKind::Water => {
            return Ok(FluidProperties {
                kind,
                glycol_pct: 0.0,
                density: kgpm3(WATER_DENSITY_KGPM3),
                specific_heat: kj_per_kg_k(WATER_SPECIFIC_HEAT_KJ_PER_KG_K),
                dynamic_viscosity: mpas(WATER_VISCOSITY_MPAS),
                freezing_point: celsius(WATER_FREEZING_POINT_C),
            });
        }
        FluidKind::EthyleneGlycol => &ETHYLENE_GLYCOL,
        FluidKind::PropyleneGlycol => &PROPYLENE_GLYCOL,
    };

    let factor = |row: &[f64; 7]| -> Result<f64, RdhxError> {
        lerp_table(&GLYCOL_BREAKPOINTS_PCT, row, glycol_pct)
    };
    let interp = |row: &[f64; 7]| {
        factor(row).map_err(|_| FluidError::InvalidFluidSpec {
            what: "glycol concentration table lookup",
            value: glycol_pct,
        })
    };

    let GlycolTable {
        density_factor,
        specific_heat_factor,
        viscosity_factor,
        freezing_point_c,
    } = table;

    Ok(FluidProperties {
        kind,
        glycol_pct,
        density: kgpm3(WATER_DENSITY_KGPM3 * interp(density_factor)?),
        specific_heat: kj_per_kg_k(WATER_SPECIFIC_HEAT_KJ_PER_KG_K * interp(specific_heat_factor)?),
        dynamic_viscosity: mpas(WATER_VISCOSITY_MPAS * interp(viscosity_factor)?),
        freezing_point: celsius(interp(freezing_point_c)?),
    })
}
