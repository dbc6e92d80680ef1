//! Built-in demo catalog.
//!
//! Four rear-door units across two series and three rack form factors, with
//! DN 25–DN 50 valve options. Numbers are representative of EC-fan active
//! doors in the 65–150 kW class.

use crate::product::{FanSpec, ProductSpec, RackType, ValveSpec};
use crate::regional::{RegionalSettings, GLOBAL_REGION};
use crate::Catalog;
use rdhx_core::units::{celsius, dt_k, kpa, kw, m3ph, pa, w};
use rdhx_fluids::FluidKind;
use std::collections::BTreeMap;

fn valve(model: &str, size: &str, max_flow_m3h: f64, kv: f64) -> ValveSpec {
    ValveSpec {
        model: model.to_string(),
        size: size.to_string(),
        max_flow: m3ph(max_flow_m3h),
        kv,
    }
}

fn dn25() -> ValveSpec {
    valve("2way", "DN 25", 6.3, 10.0)
}

fn dn32() -> ValveSpec {
    valve("2way", "DN 32", 10.0, 16.0)
}

fn dn40() -> ValveSpec {
    valve("2way", "DN 40", 16.0, 25.0)
}

fn dn50() -> ValveSpec {
    valve("2way", "DN 50", 25.0, 40.0)
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    series: &str,
    racks: &[RackType],
    max_cooling_kw: f64,
    nominal_flow_m3h: f64,
    coil_base_drop_kpa: f64,
    fan_count: u32,
    nominal_air_flow_m3h: f64,
    nominal_power_w: f64,
    nominal_noise_dba: f64,
    valves: Vec<ValveSpec>,
) -> ProductSpec {
    ProductSpec {
        id: id.to_string(),
        series: series.to_string(),
        name: format!("{series} rear door heat exchanger {id}"),
        rack_types: racks.to_vec(),
        max_cooling: kw(max_cooling_kw),
        nominal_flow: m3ph(nominal_flow_m3h),
        nominal_delta_t: dt_k(5.0),
        coil_base_drop: kpa(coil_base_drop_kpa),
        fan: FanSpec {
            count: fan_count,
            nominal_air_flow: m3ph(nominal_air_flow_m3h),
            max_air_flow: m3ph(nominal_air_flow_m3h * 1.2),
            nominal_static_pressure: pa(55.0),
            max_static_pressure: pa(80.0),
            nominal_power: w(nominal_power_w),
            nominal_noise_dba,
        },
        valve_options: valves,
    }
}

impl Catalog {
    /// The compiled-in demo catalog.
    pub fn builtin() -> Self {
        let products = vec![
            product(
                "RD100-42U600",
                "RD100",
                &[RackType::R42U600],
                65.0,
                8.6,
                28.0,
                4,
                6847.0,
                60.0,
                54.0,
                vec![dn25(), dn32()],
            ),
            product(
                "RD100-42U800",
                "RD100",
                &[RackType::R42U800],
                75.0,
                10.2,
                30.0,
                5,
                7500.0,
                60.0,
                54.0,
                vec![dn25(), dn32()],
            ),
            product(
                "RD100-48U800",
                "RD100",
                &[RackType::R48U800],
                93.0,
                13.5,
                33.0,
                6,
                8217.0,
                60.0,
                56.0,
                vec![dn32(), dn40()],
            ),
            product(
                "RD200-48U800",
                "RD200",
                &[RackType::R48U600, RackType::R48U800],
                150.0,
                21.5,
                38.0,
                6,
                9400.0,
                95.0,
                58.0,
                vec![dn40(), dn50()],
            ),
        ];

        let mut regions = BTreeMap::new();
        let global = RegionalSettings {
            energy_cost_per_kwh: 0.15,
            carbon_kg_per_kwh: 0.5,
            default_voltage: 230.0,
            default_fluid: FluidKind::Water,
            default_glycol_pct: 0.0,
            ambient_temp_range: (celsius(10.0), celsius(30.0)),
            humidity_range_pct: (30.0, 70.0),
        };

        regions.insert(
            "europe".to_string(),
            RegionalSettings {
                energy_cost_per_kwh: 0.20,
                carbon_kg_per_kwh: 0.275,
                ambient_temp_range: (celsius(10.0), celsius(25.0)),
                humidity_range_pct: (40.0, 70.0),
                ..global.clone()
            },
        );
        regions.insert(
            "europe/uk".to_string(),
            RegionalSettings {
                energy_cost_per_kwh: 0.22,
                carbon_kg_per_kwh: 0.233,
                ambient_temp_range: (celsius(7.0), celsius(20.0)),
                humidity_range_pct: (40.0, 70.0),
                ..global.clone()
            },
        );
        regions.insert(
            "europe/germany".to_string(),
            RegionalSettings {
                energy_cost_per_kwh: 0.23,
                carbon_kg_per_kwh: 0.338,
                ambient_temp_range: (celsius(5.0), celsius(24.0)),
                humidity_range_pct: (40.0, 70.0),
                ..global.clone()
            },
        );
        regions.insert(
            "north_america".to_string(),
            RegionalSettings {
                energy_cost_per_kwh: 0.15,
                carbon_kg_per_kwh: 0.417,
                default_voltage: 208.0,
                ambient_temp_range: (celsius(10.0), celsius(30.0)),
                humidity_range_pct: (30.0, 60.0),
                ..global.clone()
            },
        );
        regions.insert(
            "north_america/west_coast".to_string(),
            RegionalSettings {
                energy_cost_per_kwh: 0.18,
                carbon_kg_per_kwh: 0.227,
                default_voltage: 208.0,
                ambient_temp_range: (celsius(15.0), celsius(30.0)),
                humidity_range_pct: (30.0, 60.0),
                ..global.clone()
            },
        );
        regions.insert(
            "nordic".to_string(),
            RegionalSettings {
                energy_cost_per_kwh: 0.10,
                carbon_kg_per_kwh: 0.028,
                default_fluid: FluidKind::PropyleneGlycol,
                default_glycol_pct: 30.0,
                ambient_temp_range: (celsius(-10.0), celsius(20.0)),
                humidity_range_pct: (30.0, 70.0),
                ..global.clone()
            },
        );
        regions.insert(GLOBAL_REGION.to_string(), global);

        Catalog::from_parts(products, regions)
    }
}
