//! Error type shared by the component solvers.

use rdhx_core::RdhxError;
use rdhx_fluids::FluidError;

/// Failures raised while solving an individual component.
///
/// All variants are recoverable: callers can report them to an operator
/// and retry with adjusted inputs.
#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    /// The caller supplied either too few or too many degrees of freedom.
    #[error("under- or over-specified problem: {what}")]
    UnderOrOverSpecified { what: &'static str },

    /// The math produced a value that cannot occur in a working unit,
    /// e.g. a negative temperature rise across the coil.
    #[error("non-physical result: {what} (got {value})")]
    NonPhysicalResult { what: &'static str, value: f64 },

    /// The demanded duty lies outside the hardware envelope.
    #[error("infeasible operating point: {what}")]
    InfeasibleOperatingPoint { what: String },

    /// An input argument is out of its documented domain.
    #[error("invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Fluid(#[from] FluidError),
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<ComponentError> for RdhxError {
    fn from(err: ComponentError) -> Self {
        match err {
            ComponentError::UnderOrOverSpecified { what } => RdhxError::InvalidArg { what },
            ComponentError::NonPhysicalResult { what, value } => {
                RdhxError::NonFinite { what, value }
            }
            ComponentError::InfeasibleOperatingPoint { .. } => RdhxError::Invariant {
                what: "operating point outside the hardware envelope",
            },
            ComponentError::InvalidArg { what } => RdhxError::InvalidArg { what },
            ComponentError::Fluid(err) => err.into(),
        }
    }
}
