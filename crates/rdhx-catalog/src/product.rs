//! Product and valve specifications.

use crate::error::CatalogError;
use rdhx_core::units::{Power, Pressure, TempInterval, VolumeRate};
use std::fmt;
use std::str::FromStr;

/// Server rack form factors the doors mount on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RackType {
    R42U600,
    R42U800,
    R48U600,
    R48U800,
}

impl RackType {
    pub fn canonical_id(&self) -> &'static str {
        match self {
            RackType::R42U600 => "42U600",
            RackType::R42U800 => "42U800",
            RackType::R48U600 => "48U600",
            RackType::R48U800 => "48U800",
        }
    }
}

impl fmt::Display for RackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_id())
    }
}

impl FromStr for RackType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "42U600" => Ok(RackType::R42U600),
            "42U800" => Ok(RackType::R42U800),
            "48U600" => Ok(RackType::R48U600),
            "48U800" => Ok(RackType::R48U800),
            other => Err(CatalogError::UnknownRackType {
                name: other.to_string(),
            }),
        }
    }
}

/// One control-valve option offered with a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ValveSpec {
    /// Valve family, e.g. "2way" or "epiv"
    pub model: String,
    /// Nominal diameter label, e.g. "DN 25"
    pub size: String,
    /// Rated maximum flow
    pub max_flow: VolumeRate,
    /// Flow coefficient Kv [m³/h at 1 bar]
    pub kv: f64,
}

/// Fan bank specification, nominal curve referenced to 230 V.
#[derive(Debug, Clone, PartialEq)]
pub struct FanSpec {
    pub count: u32,
    /// Nominal air flow per fan at 100 % speed
    pub nominal_air_flow: VolumeRate,
    /// Hard flow limit per fan
    pub max_air_flow: VolumeRate,
    pub nominal_static_pressure: Pressure,
    pub max_static_pressure: Pressure,
    /// Electrical power per fan at 100 % speed
    pub nominal_power: Power,
    /// Sound pressure level at 100 % speed [dB(A)]
    pub nominal_noise_dba: f64,
}

/// One catalog product: a rear-door heat-exchanger unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSpec {
    pub id: String,
    pub series: String,
    pub name: String,
    /// Rack form factors this door is compatible with
    pub rack_types: Vec<RackType>,
    pub max_cooling: Power,
    /// Water-side nominal flow, the reference point for the coil drop curve
    pub nominal_flow: VolumeRate,
    /// Design water-side temperature split
    pub nominal_delta_t: TempInterval,
    /// Coil pressure drop at nominal flow
    pub coil_base_drop: Pressure,
    pub fan: FanSpec,
    /// Valve options sorted ascending by rated max flow
    pub valve_options: Vec<ValveSpec>,
}

impl ProductSpec {
    pub fn supports_rack(&self, rack: RackType) -> bool {
        self.rack_types.contains(&rack)
    }

    /// The coil-side view consumed by the heat-exchanger solver.
    pub fn coil_geometry(&self) -> CoilGeometry {
        CoilGeometry {
            nominal_flow: self.nominal_flow,
            base_drop: self.coil_base_drop,
        }
    }
}

/// Derived subset of a `ProductSpec` used only by the heat-exchanger solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilGeometry {
    pub nominal_flow: VolumeRate,
    pub base_drop: Pressure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rack_type_parse_round_trip() {
        for rack in [
            RackType::R42U600,
            RackType::R42U800,
            RackType::R48U600,
            RackType::R48U800,
        ] {
            let parsed: RackType = rack.canonical_id().parse().unwrap();
            assert_eq!(parsed, rack);
        }
        assert!(matches!(
            "19U300".parse::<RackType>(),
            Err(CatalogError::UnknownRackType { .. })
        ));
    }
}
