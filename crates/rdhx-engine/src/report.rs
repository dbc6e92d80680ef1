//! Performance report: everything a resolved duty point tells the caller.

use rdhx_components::{FanPerformance, PressureBreakdown, ValveRecommendation, WaterSide};
use rdhx_core::units::constants::BTU_PER_H_PER_KW;
use rdhx_core::units::{as_kw, Power, Pressure};
use rdhx_fluids::FluidProperties;

/// Selected product, summarized for the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductBlock {
    pub id: String,
    pub series: String,
    pub name: String,
    pub max_cooling: Power,
}

/// Water loop: thermal state plus itemized hydraulic losses.
#[derive(Debug, Clone)]
pub struct WaterBlock {
    pub state: WaterSide,
    pub fluid: FluidProperties,
    /// Field piping and valve losses, excluding the coil.
    pub piping: PressureBreakdown,
    /// Coil plus piping plus valve.
    pub total_pressure_drop: Pressure,
}

/// Electrical efficiency of the resolved point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencyBlock {
    /// Coefficient of performance, kW cooling per kW electrical.
    pub cop: f64,
    /// Energy efficiency ratio, BTU/h cooling per W electrical.
    pub eer: f64,
}

impl EfficiencyBlock {
    /// COP and EER from the duty and the fan electrical draw.
    ///
    /// Zero electrical power (fans off) yields infinite ratios.
    pub fn from_powers(cooling: Power, electrical: Power) -> Self {
        let q_kw = as_kw(cooling);
        let p_w = electrical.value;
        if p_w <= 0.0 {
            return Self {
                cop: f64::INFINITY,
                eer: f64::INFINITY,
            };
        }
        Self {
            cop: q_kw / (p_w / 1000.0),
            eer: q_kw * BTU_PER_H_PER_KW / p_w,
        }
    }
}

/// Regional figures the commercial layer prices against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionalBlock {
    pub energy_cost_per_kwh: f64,
    pub carbon_kg_per_kwh: f64,
}

/// Complete resolution of one request.
#[derive(Debug, Clone)]
pub struct PerformanceReport {
    pub product: ProductBlock,
    pub water: WaterBlock,
    pub air: FanPerformance,
    pub valve: ValveRecommendation,
    pub efficiency: EfficiencyBlock,
    pub regional: RegionalBlock,
    /// Human-readable caveats: best-effort clamps, applied defaults,
    /// freeze risk. Empty means the point resolved cleanly.
    pub warnings: Vec<String>,
}

impl PerformanceReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.air.sufficient && self.valve.sufficient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdhx_core::units::{kw, w};

    #[test]
    fn efficiency_from_powers() {
        // 50 kW duty on 500 W of fans: COP 100, EER 50·3412.14/500.
        let e = EfficiencyBlock::from_powers(kw(50.0), w(500.0));
        assert!((e.cop - 100.0).abs() < 1e-9);
        assert!((e.eer - 50.0 * 3412.14 / 500.0).abs() < 1e-9);
    }

    #[test]
    fn zero_power_is_infinite_efficiency() {
        let e = EfficiencyBlock::from_powers(kw(50.0), w(0.0));
        assert!(e.cop.is_infinite());
        assert!(e.eer.is_infinite());
    }
}
