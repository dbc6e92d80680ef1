//! Catalog errors.

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors from catalog parsing, validation, and product selection.
///
/// All variants are recoverable by the caller; `NoCompatibleProduct` in
/// particular is an expected outcome for oversized cooling requests, not a
/// crash.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("No catalog product meets {cooling_kw} kW{}", .rack.as_deref().map(|r| format!(" on rack {r}")).unwrap_or_default())]
    NoCompatibleProduct {
        cooling_kw: f64,
        rack: Option<String>,
    },

    #[error("Unknown region key: {key}")]
    UnknownRegion { key: String },

    #[error("Unknown rack type: {name}")]
    UnknownRackType { name: String },

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: &'static str,
    },

    #[error("Duplicate product id: {id}")]
    DuplicateId { id: String },
}
