//! Fluid property errors.

use rdhx_core::RdhxError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while resolving fluid properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// The (fluid kind, glycol percentage) pair is not a valid coolant spec.
    #[error("Invalid fluid spec: {what} (value: {value})")]
    InvalidFluidSpec { what: &'static str, value: f64 },

    /// Unknown fluid kind name.
    #[error("Unknown fluid kind: {name}")]
    UnknownKind { name: String },
}

impl From<FluidError> for RdhxError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::InvalidFluidSpec { what, .. } => RdhxError::InvalidArg { what },
            FluidError::UnknownKind { .. } => RdhxError::InvalidArg {
                what: "fluid kind name",
            },
        }
    }
}
