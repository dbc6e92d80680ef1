//! Engine-level error: the union of everything the pipeline can raise.

use rdhx_catalog::CatalogError;
use rdhx_components::ComponentError;
use rdhx_fluids::FluidError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid request: {what}")]
    InvalidRequest { what: &'static str },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Fluid(#[from] FluidError),

    #[error(transparent)]
    Component(#[from] ComponentError),
}

pub type EngineResult<T> = Result<T, EngineError>;
