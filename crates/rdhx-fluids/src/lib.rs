//! rdhx-fluids: coolant property provider for the rdhx workspace.
//!
//! Provides:
//! - Fluid kind definitions (water, propylene glycol, ethylene glycol)
//! - Tabulated mixture properties with linear interpolation over glycol
//!   concentration breakpoints
//! - Freezing-point lookup and supply-temperature margin checks
//!
//! Properties are pure lookups: no backend, no I/O, no state. Each call
//! returns an immutable [`FluidProperties`] snapshot.

pub mod error;
pub mod kind;
pub mod properties;
mod tables;

pub use error::{FluidError, FluidResult};
pub use kind::FluidKind;
pub use properties::{properties, FluidProperties, FREEZE_MARGIN_K};
