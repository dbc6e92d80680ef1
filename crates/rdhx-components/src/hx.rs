//! Water-side thermal balance across the rear-door coil.
//!
//! The coil absorbs a known heat load; the solver closes the energy
//! balance `Q = ṁ·cp·ΔT` from whichever pair of knowns the caller has,
//! then prices the hydraulic cost of pushing that flow through the coil.

use rdhx_catalog::CoilGeometry;
use rdhx_core::units::{
    delta, dt_k, kpa, m3ph, w, MassRate, Power, Pressure, SpecHeat, TempInterval, Temperature,
    VolumeRate,
};
use rdhx_fluids::FluidProperties;

use crate::common::check_finite;
use crate::error::{ComponentError, ComponentResult};

/// Tagged closure of the water-side energy balance.
///
/// Exactly one of the two free variables (return temperature, flow rate)
/// must be supplied next to the supply temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatBalance {
    /// Supply and return temperatures known; solve for flow.
    BySupplyReturn {
        supply_temp: Temperature,
        return_temp: Temperature,
    },
    /// Supply temperature and flow known; solve for return temperature.
    BySupplyFlow {
        supply_temp: Temperature,
        flow: VolumeRate,
    },
}

impl HeatBalance {
    /// Builds a balance from optional inputs, rejecting both the
    /// over-specified (both given) and under-specified (neither given)
    /// cases.
    pub fn from_options(
        supply_temp: Temperature,
        return_temp: Option<Temperature>,
        flow: Option<VolumeRate>,
    ) -> ComponentResult<Self> {
        match (return_temp, flow) {
            (Some(_), Some(_)) => Err(ComponentError::UnderOrOverSpecified {
                what: "both return temperature and flow rate given",
            }),
            (None, None) => Err(ComponentError::UnderOrOverSpecified {
                what: "neither return temperature nor flow rate given",
            }),
            (Some(return_temp), None) => Ok(Self::BySupplyReturn {
                supply_temp,
                return_temp,
            }),
            (None, Some(flow)) => Ok(Self::BySupplyFlow { supply_temp, flow }),
        }
    }

    pub fn supply_temp(&self) -> Temperature {
        match *self {
            Self::BySupplyReturn { supply_temp, .. } => supply_temp,
            Self::BySupplyFlow { supply_temp, .. } => supply_temp,
        }
    }
}

/// Resolved water-side operating state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterSide {
    pub flow: VolumeRate,
    pub supply_temp: Temperature,
    pub return_temp: Temperature,
    pub delta_t: TempInterval,
    /// Pressure drop across the coil alone, excluding field piping.
    pub coil_pressure_drop: Pressure,
}

/// Coil geometry plus the circulating fluid, ready to solve duty points.
#[derive(Debug, Clone)]
pub struct HeatExchanger {
    coil: CoilGeometry,
    fluid: FluidProperties,
}

impl HeatExchanger {
    pub fn new(coil: CoilGeometry, fluid: FluidProperties) -> Self {
        Self { coil, fluid }
    }

    pub fn fluid(&self) -> &FluidProperties {
        &self.fluid
    }

    /// Closes the energy balance for `cooling` and prices the coil drop.
    pub fn solve(&self, cooling: Power, balance: HeatBalance) -> ComponentResult<WaterSide> {
        let q_w = cooling.value;
        if !(q_w > 0.0) || !q_w.is_finite() {
            return Err(ComponentError::InvalidArg {
                what: "cooling load must be positive and finite",
            });
        }
        let cp = self.fluid.specific_heat.value; // J/(kg·K)
        let rho = self.fluid.density.value; // kg/m³

        let (flow_si, supply_temp, return_temp, dt_kelvin) = match balance {
            HeatBalance::BySupplyReturn {
                supply_temp,
                return_temp,
            } => {
                let dt = delta(return_temp, supply_temp).value;
                if dt <= 0.0 {
                    return Err(ComponentError::NonPhysicalResult {
                        what: "return temperature must exceed supply temperature",
                        value: dt,
                    });
                }
                let mdot = q_w / (cp * dt); // kg/s
                let flow = check_finite("water flow rate", mdot / rho)?;
                (flow, supply_temp, return_temp, dt)
            }
            HeatBalance::BySupplyFlow { supply_temp, flow } => {
                let flow_si = flow.value; // m³/s
                if flow_si <= 0.0 {
                    return Err(ComponentError::InvalidArg {
                        what: "water flow rate must be positive",
                    });
                }
                let mdot = flow_si * rho;
                let dt = check_finite("water temperature rise", q_w / (mdot * cp))?;
                (flow_si, supply_temp, supply_temp + dt_k(dt), dt)
            }
        };

        Ok(WaterSide {
            flow: m3ph(flow_si * 3600.0),
            supply_temp,
            return_temp,
            delta_t: dt_k(dt_kelvin),
            coil_pressure_drop: self.coil_pressure_drop(m3ph(flow_si * 3600.0))?,
        })
    }

    /// Quadratic scaling of the rated coil drop with flow.
    pub fn coil_pressure_drop(&self, flow: VolumeRate) -> ComponentResult<Pressure> {
        let nominal = self.coil.nominal_flow.value;
        if nominal <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "nominal coil flow must be positive",
            });
        }
        let ratio = flow.value / nominal;
        let drop = check_finite("coil pressure drop", self.coil.base_drop.value * ratio * ratio)?;
        Ok(kpa(drop / 1000.0))
    }
}

/// Forward form of the energy balance: Q = ṁ·cp·ΔT.
pub fn heat_transfer_rate(mass_flow: MassRate, cp: SpecHeat, delta_t: TempInterval) -> Power {
    w(mass_flow.value * cp.value * delta_t.value)
}

/// Duty a volumetric flow of the given fluid carries across a split.
pub fn capacity_from_flow(
    flow: VolumeRate,
    fluid: &FluidProperties,
    delta_t: TempInterval,
) -> Power {
    w(flow.value * fluid.density.value * fluid.specific_heat.value * delta_t.value)
}

/// Log-mean temperature difference between two streams, temperatures in °C.
///
/// Falls back to the arithmetic end difference when the two end
/// differences coincide, where the log form is singular.
pub fn lmtd(hot_in: f64, hot_out: f64, cold_in: f64, cold_out: f64) -> ComponentResult<f64> {
    let dt1 = hot_in - cold_out;
    let dt2 = hot_out - cold_in;
    if dt1 <= 0.0 || dt2 <= 0.0 {
        return Err(ComponentError::NonPhysicalResult {
            what: "temperature cross in exchanger",
            value: dt1.min(dt2),
        });
    }
    if (dt1 - dt2).abs() < 1e-3 {
        return Ok(dt1);
    }
    check_finite("log-mean temperature difference", (dt1 - dt2) / (dt1 / dt2).ln())
}

/// ε-NTU effectiveness for a crossflow exchanger with both streams unmixed.
///
/// `c_min`/`c_max` are the stream heat-capacity rates [W/K], `ua` the
/// overall conductance [W/K]. Result is clamped to [0, 1].
pub fn effectiveness_ntu(c_min: f64, c_max: f64, ua: f64) -> ComponentResult<f64> {
    if c_min <= 0.0 || c_max < c_min {
        return Err(ComponentError::InvalidArg {
            what: "heat-capacity rates must satisfy 0 < c_min <= c_max",
        });
    }
    if ua < 0.0 {
        return Err(ComponentError::InvalidArg {
            what: "overall conductance must be non-negative",
        });
    }
    let ntu = ua / c_min;
    let c_ratio = c_min / c_max;
    let eff = if c_ratio < 1e-9 {
        // One stream effectively isothermal (condensing limit).
        1.0 - (-ntu).exp()
    } else {
        1.0 - ((-(1.0 - (-ntu * c_ratio.powf(-0.22)).exp()) / c_ratio).exp())
    };
    Ok(check_finite("exchanger effectiveness", eff)?.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rdhx_core::units::{as_celsius, as_m3ph, celsius, kw};
    use rdhx_fluids::{properties, FluidKind};

    fn water() -> FluidProperties {
        properties(FluidKind::Water, 0.0).unwrap()
    }

    fn coil() -> CoilGeometry {
        CoilGeometry {
            nominal_flow: m3ph(8.6),
            base_drop: kpa(28.0),
        }
    }

    #[test]
    fn from_options_rejects_both_and_neither() {
        let s = celsius(18.0);
        assert!(matches!(
            HeatBalance::from_options(s, Some(celsius(23.0)), Some(m3ph(8.6))),
            Err(ComponentError::UnderOrOverSpecified { .. })
        ));
        assert!(matches!(
            HeatBalance::from_options(s, None, None),
            Err(ComponentError::UnderOrOverSpecified { .. })
        ));
        assert!(HeatBalance::from_options(s, Some(celsius(23.0)), None).is_ok());
        assert!(HeatBalance::from_options(s, None, Some(m3ph(8.6))).is_ok());
    }

    #[test]
    fn supply_return_gives_expected_flow() {
        // 50 kW at 5 K rise in water: ṁ = 50/(4.182·5) = 2.391 kg/s,
        // V̇ = 2.391/998.2 · 3600 = 8.623 m³/h.
        let hx = HeatExchanger::new(coil(), water());
        let out = hx
            .solve(
                kw(50.0),
                HeatBalance::BySupplyReturn {
                    supply_temp: celsius(18.0),
                    return_temp: celsius(23.0),
                },
            )
            .unwrap();
        assert!((as_m3ph(out.flow) - 8.623).abs() < 5e-3, "flow = {}", as_m3ph(out.flow));
        assert!((out.delta_t.value - 5.0).abs() < 1e-9);
    }

    #[test]
    fn supply_flow_gives_expected_return() {
        let hx = HeatExchanger::new(coil(), water());
        let out = hx
            .solve(
                kw(50.0),
                HeatBalance::BySupplyFlow {
                    supply_temp: celsius(18.0),
                    flow: m3ph(8.623),
                },
            )
            .unwrap();
        assert!((as_celsius(out.return_temp) - 23.0).abs() < 5e-3);
    }

    #[test]
    fn return_below_supply_is_non_physical() {
        let hx = HeatExchanger::new(coil(), water());
        let err = hx
            .solve(
                kw(50.0),
                HeatBalance::BySupplyReturn {
                    supply_temp: celsius(23.0),
                    return_temp: celsius(18.0),
                },
            )
            .unwrap_err();
        assert!(matches!(err, ComponentError::NonPhysicalResult { .. }));
    }

    #[test]
    fn coil_drop_scales_quadratically() {
        let hx = HeatExchanger::new(coil(), water());
        let at_nominal = hx.coil_pressure_drop(m3ph(8.6)).unwrap();
        let at_half = hx.coil_pressure_drop(m3ph(4.3)).unwrap();
        assert!((at_nominal.value - 28_000.0).abs() < 1e-6);
        assert!((at_half.value - 7_000.0).abs() < 1e-6);
    }

    #[test]
    fn forward_energy_balance() {
        // 2.391 kg/s of water across 5 K is 50 kW.
        let q = heat_transfer_rate(
            rdhx_core::units::kgps(2.391),
            rdhx_core::units::kj_per_kg_k(4.182),
            dt_k(5.0),
        );
        assert!((q.value - 49_996.0).abs() < 1.0, "q = {}", q.value);
    }

    #[test]
    fn lmtd_singular_branch_returns_end_difference() {
        assert!((lmtd(30.0, 30.0, 10.0, 10.0).unwrap() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn lmtd_general_case() {
        // dt1 = 20, dt2 = 10: LMTD = 10/ln 2 = 14.427
        let v = lmtd(35.0, 25.0, 15.0, 15.0).unwrap();
        assert!((v - 10.0 / 2.0_f64.ln()).abs() < 1e-12, "lmtd = {v}");
    }

    #[test]
    fn effectiveness_stays_in_unit_interval() {
        for ua in [0.0, 100.0, 1_000.0, 1e6] {
            let e = effectiveness_ntu(500.0, 1_000.0, ua).unwrap();
            assert!((0.0..=1.0).contains(&e), "eff = {e} at ua = {ua}");
        }
    }

    #[test]
    fn effectiveness_grows_with_conductance() {
        let lo = effectiveness_ntu(500.0, 1_000.0, 200.0).unwrap();
        let hi = effectiveness_ntu(500.0, 1_000.0, 2_000.0).unwrap();
        assert!(hi > lo);
    }

    proptest! {
        // Solving by supply/return, then feeding the resulting flow back
        // through the supply/flow form, must recover the return temperature.
        #[test]
        fn balance_round_trip(
            q_kw in 1.0_f64..200.0,
            supply_c in 5.0_f64..30.0,
            dt in 1.0_f64..15.0,
        ) {
            let hx = HeatExchanger::new(coil(), water());
            let by_return = hx.solve(kw(q_kw), HeatBalance::BySupplyReturn {
                supply_temp: celsius(supply_c),
                return_temp: celsius(supply_c + dt),
            }).unwrap();
            let by_flow = hx.solve(kw(q_kw), HeatBalance::BySupplyFlow {
                supply_temp: celsius(supply_c),
                flow: by_return.flow,
            }).unwrap();
            prop_assert!((as_celsius(by_flow.return_temp) - (supply_c + dt)).abs() < 1e-6);
        }

        // The flow the solver returns must carry exactly the duty it was
        // solved for.
        #[test]
        fn solved_flow_carries_the_duty(
            q_kw in 1.0_f64..200.0,
            dt in 1.0_f64..15.0,
        ) {
            let fluid = water();
            let hx = HeatExchanger::new(coil(), fluid);
            let out = hx.solve(kw(q_kw), HeatBalance::BySupplyReturn {
                supply_temp: celsius(18.0),
                return_temp: celsius(18.0 + dt),
            }).unwrap();
            let carried = capacity_from_flow(out.flow, &fluid, out.delta_t);
            prop_assert!((carried.value - q_kw * 1000.0).abs() < 1e-6);
        }

        #[test]
        fn flow_scales_inversely_with_delta_t(
            q_kw in 1.0_f64..200.0,
            dt in 1.0_f64..15.0,
        ) {
            let hx = HeatExchanger::new(coil(), water());
            let narrow = hx.solve(kw(q_kw), HeatBalance::BySupplyReturn {
                supply_temp: celsius(18.0),
                return_temp: celsius(18.0 + dt),
            }).unwrap();
            let wide = hx.solve(kw(q_kw), HeatBalance::BySupplyReturn {
                supply_temp: celsius(18.0),
                return_temp: celsius(18.0 + 2.0 * dt),
            }).unwrap();
            prop_assert!((as_m3ph(narrow.flow) / as_m3ph(wide.flow) - 2.0).abs() < 1e-9);
        }
    }
}
