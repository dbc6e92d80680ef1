//! rdhx-engine: end-to-end resolution of rear-door heat-exchanger
//! duty points.
//!
//! Composes the catalog, fluid properties, and component solvers into
//! one pipeline: select a product, close the water-side balance, price
//! the hydraulics, solve the fan bank, derate for altitude, and report
//! efficiency and regional figures. The engine is stateless per call
//! and shares its catalog through an `Arc`, so batches parallelize
//! trivially.

pub mod engine;
pub mod error;
pub mod report;
pub mod request;

pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use report::{
    EfficiencyBlock, PerformanceReport, ProductBlock, RegionalBlock, WaterBlock,
};
pub use request::CalculationRequest;
