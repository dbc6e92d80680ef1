//! The resolution pipeline: request in, performance report out.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};

use rdhx_catalog::Catalog;
use rdhx_components::{
    door_static_pressure, required_air_flow, AltitudeCorrection, FanSystem, HeatBalance,
    HeatExchanger, PipingSystem, ValveSelector,
};
use rdhx_core::units::constants::{AIR_DENSITY_SEA_LEVEL_KGPM3, AIR_SPECIFIC_HEAT_KJ_PER_KG_K};
use rdhx_core::units::{as_celsius, as_kw, as_m3ph, delta, kgpm3, kj_per_kg_k};
use rdhx_fluids::properties;

use crate::error::EngineResult;
use crate::report::{
    EfficiencyBlock, PerformanceReport, ProductBlock, RegionalBlock, WaterBlock,
};
use crate::request::CalculationRequest;

/// Records a non-fatal condition on the report and in the log.
fn note(warnings: &mut Vec<String>, msg: String) {
    warn!("{msg}");
    warnings.push(msg);
}

/// Stateless resolution engine over an immutable catalog.
///
/// `calculate` takes `&self`; batches run in parallel. Hot reload is a
/// new `Engine` around a new `Arc<Catalog>`, swapped at the caller.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Arc<Catalog>,
}

impl Engine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn with_builtin_catalog() -> Self {
        Self::new(Arc::new(Catalog::builtin()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolves one request end to end.
    pub fn calculate(&self, req: &CalculationRequest) -> EngineResult<PerformanceReport> {
        let span = info_span!("calculate", cooling_kw = as_kw(req.cooling));
        let _guard = span.enter();

        req.validate()?;
        let mut warnings: Vec<String> = Vec::new();

        // Regional defaults; explicit request fields win.
        let region = self.catalog.region(req.region.as_deref())?;
        let fluid_kind = req.fluid.unwrap_or(region.default_fluid);
        let glycol_pct = req.glycol_pct.unwrap_or(region.default_glycol_pct);
        let voltage = req.voltage.unwrap_or(region.default_voltage);
        debug!(fluid = %fluid_kind, glycol_pct, voltage, "resolved regional defaults");

        let fluid = properties(fluid_kind, glycol_pct)?;
        if fluid.freeze_risk(req.supply_temp) {
            note(&mut warnings, format!(
                "supply temperature {:.1} °C is within the freeze margin of the \
                 {:.0} % glycol mixture (freezing point {:.1} °C)",
                as_celsius(req.supply_temp),
                glycol_pct,
                as_celsius(fluid.freezing_point),
            ));
        }

        // Product selection: smallest door that covers the duty.
        let product = self.catalog.select_product(req.cooling, req.rack_type)?;
        info!(product = %product.id, "selected product");

        // Water-side balance. Both free variables given is a hard error;
        // neither given falls back to the product's design split.
        let balance = if req.return_temp.is_none() && req.flow_rate.is_none() {
            note(&mut warnings, format!(
                "neither return temperature nor flow rate given; assuming the \
                 product's nominal ΔT of {:.1} K",
                product.nominal_delta_t.value,
            ));
            HeatBalance::BySupplyReturn {
                supply_temp: req.supply_temp,
                return_temp: req.supply_temp + product.nominal_delta_t,
            }
        } else {
            HeatBalance::from_options(req.supply_temp, req.return_temp, req.flow_rate)?
        };

        let hx = HeatExchanger::new(product.coil_geometry(), fluid);
        let water_side = hx.solve(req.cooling, balance)?;
        debug!(
            flow_m3ph = as_m3ph(water_side.flow),
            return_c = as_celsius(water_side.return_temp),
            "water side resolved"
        );

        // Valve sizing, then hydraulics with the chosen valve in line.
        let valve = ValveSelector::new(&product.valve_options)?.recommend(water_side.flow)?;
        if !valve.sufficient {
            note(&mut warnings, format!(
                "duty flow {:.1} m³/h exceeds the largest valve option ({}, {:.1} m³/h)",
                as_m3ph(water_side.flow),
                valve.valve.size,
                as_m3ph(valve.valve.max_flow),
            ));
        }

        let piping = PipingSystem::new(req.pipe_configuration).pressure_drop(
            water_side.flow,
            &fluid,
            Some(&valve.valve),
        )?;
        let total_pressure_drop = water_side.coil_pressure_drop + piping.total;

        // Air side: sea-level solve first, altitude derating after.
        let air_delta_t = delta(req.room_temp, req.target_temp);
        let air_flow = required_air_flow(
            req.cooling,
            kgpm3(AIR_DENSITY_SEA_LEVEL_KGPM3),
            kj_per_kg_k(AIR_SPECIFIC_HEAT_KJ_PER_KG_K),
            air_delta_t,
        )?;
        let fan = FanSystem::new(product.fan.clone(), voltage)?;
        let sea_level = fan.operating_point(air_flow, door_static_pressure(air_flow))?;
        if !sea_level.sufficient {
            note(&mut warnings, format!(
                "fan bank saturated at 100 % speed; delivering {:.0} m³/h of the \
                 {:.0} m³/h demanded",
                as_m3ph(sea_level.air_flow),
                as_m3ph(air_flow),
            ));
        }

        let correction = AltitudeCorrection::new(req.altitude_m, req.room_temp)?;
        let air = correction.apply(&fan, &sea_level);
        if sea_level.sufficient && !air.sufficient {
            note(&mut warnings, format!(
                "altitude of {:.0} m pushes the fan bank past 100 % speed",
                req.altitude_m,
            ));
        }

        let efficiency = EfficiencyBlock::from_powers(req.cooling, air.power);
        info!(cop = efficiency.cop, speed_pct = air.speed_pct, "operating point resolved");

        Ok(PerformanceReport {
            product: ProductBlock {
                id: product.id.clone(),
                series: product.series.clone(),
                name: product.name.clone(),
                max_cooling: product.max_cooling,
            },
            water: WaterBlock {
                state: water_side,
                fluid,
                piping,
                total_pressure_drop,
            },
            air,
            valve,
            efficiency,
            regional: RegionalBlock {
                energy_cost_per_kwh: region.energy_cost_per_kwh,
                carbon_kg_per_kwh: region.carbon_kg_per_kwh,
            },
            warnings,
        })
    }

    /// Resolves many independent requests in parallel.
    ///
    /// Results come back in input order; each request fails or succeeds
    /// on its own.
    pub fn calculate_batch(
        &self,
        requests: &[CalculationRequest],
    ) -> Vec<EngineResult<PerformanceReport>> {
        requests.par_iter().map(|req| self.calculate(req)).collect()
    }
}
