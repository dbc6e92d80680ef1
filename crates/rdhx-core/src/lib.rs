//! rdhx-core: stable foundation for the rdhx workspace.
//!
//! Contains:
//! - units (uom SI types + constructors + physical constants)
//! - numeric (table interpolation)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RdhxError, RdhxResult};
pub use numeric::*;
pub use units::*;
