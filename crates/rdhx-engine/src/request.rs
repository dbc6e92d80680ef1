//! Calculation request: the full input surface of one resolution call.

use rdhx_catalog::RackType;
use rdhx_components::PipeConfiguration;
use rdhx_core::units::{Power, Temperature, VolumeRate};
use rdhx_fluids::FluidKind;

use crate::error::{EngineError, EngineResult};

/// One sizing question: "which door, and how will it run?"
///
/// Required fields come in through [`CalculationRequest::new`]; everything
/// else has a builder-style setter and a sensible default (catalog product
/// nominals and regional settings fill the gaps at calculation time).
#[derive(Debug, Clone)]
pub struct CalculationRequest {
    pub cooling: Power,
    pub room_temp: Temperature,
    pub target_temp: Temperature,
    pub supply_temp: Temperature,

    pub rack_type: Option<RackType>,
    pub fluid: Option<FluidKind>,
    pub glycol_pct: Option<f64>,
    /// Site altitude above sea level [m]; ≤ 0 disables the correction.
    pub altitude_m: f64,
    pub voltage: Option<f64>,
    pub pipe_configuration: PipeConfiguration,
    /// `region` or `region/subregion` catalog key.
    pub region: Option<String>,
    /// Water return temperature; mutually exclusive with `flow_rate`.
    pub return_temp: Option<Temperature>,
    /// Water flow rate; mutually exclusive with `return_temp`.
    pub flow_rate: Option<VolumeRate>,
}

impl CalculationRequest {
    pub fn new(
        cooling: Power,
        room_temp: Temperature,
        target_temp: Temperature,
        supply_temp: Temperature,
    ) -> Self {
        Self {
            cooling,
            room_temp,
            target_temp,
            supply_temp,
            rack_type: None,
            fluid: None,
            glycol_pct: None,
            altitude_m: 0.0,
            voltage: None,
            pipe_configuration: PipeConfiguration::default(),
            region: None,
            return_temp: None,
            flow_rate: None,
        }
    }

    pub fn rack_type(mut self, rack: RackType) -> Self {
        self.rack_type = Some(rack);
        self
    }

    pub fn fluid(mut self, kind: FluidKind, glycol_pct: f64) -> Self {
        self.fluid = Some(kind);
        self.glycol_pct = Some(glycol_pct);
        self
    }

    pub fn altitude_m(mut self, altitude_m: f64) -> Self {
        self.altitude_m = altitude_m;
        self
    }

    pub fn voltage(mut self, voltage: f64) -> Self {
        self.voltage = Some(voltage);
        self
    }

    pub fn pipe_configuration(mut self, configuration: PipeConfiguration) -> Self {
        self.pipe_configuration = configuration;
        self
    }

    pub fn region(mut self, key: impl Into<String>) -> Self {
        self.region = Some(key.into());
        self
    }

    pub fn return_temp(mut self, temp: Temperature) -> Self {
        self.return_temp = Some(temp);
        self
    }

    pub fn flow_rate(mut self, flow: VolumeRate) -> Self {
        self.flow_rate = Some(flow);
        self
    }

    /// Structural checks that do not need catalog or fluid data.
    pub(crate) fn validate(&self) -> EngineResult<()> {
        if !(self.cooling.value > 0.0) || !self.cooling.value.is_finite() {
            return Err(EngineError::InvalidRequest {
                what: "cooling load must be positive and finite",
            });
        }
        if self.room_temp.value <= 0.0
            || self.target_temp.value <= 0.0
            || self.supply_temp.value <= 0.0
        {
            return Err(EngineError::InvalidRequest {
                what: "temperatures must be above absolute zero",
            });
        }
        if let Some(v) = self.voltage {
            if v <= 0.0 {
                return Err(EngineError::InvalidRequest {
                    what: "supply voltage must be positive",
                });
            }
        }
        Ok(())
    }
}
