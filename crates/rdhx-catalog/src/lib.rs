//! rdhx-catalog: product, valve, and regional data for the cooling engine.
//!
//! The catalog is loaded (or built in) once at process start and treated as
//! immutable for the life of the process; calculations only ever borrow it.
//! Hot reload is an atomic swap of the owning `Arc<Catalog>` at the caller.
//!
//! Provides:
//! - `ProductSpec` / `ValveSpec` / `CoilGeometry` / `FanSpec` domain types
//! - `RegionalSettings` with `region` / `region/subregion` lookup
//! - A serde JSON schema for the consumed catalog format plus validation
//! - The product selector (smallest sufficient capacity, ranked recommend)

pub mod builtin;
pub mod error;
pub mod product;
pub mod regional;
pub mod schema;
pub mod select;

pub use error::{CatalogError, CatalogResult};
pub use product::{CoilGeometry, FanSpec, ProductSpec, RackType, ValveSpec};
pub use regional::RegionalSettings;
pub use schema::CatalogDef;

use std::collections::BTreeMap;

/// Immutable product + regional database.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<ProductSpec>,
    regions: BTreeMap<String, RegionalSettings>,
}

impl Catalog {
    /// Assemble a catalog from already-validated parts.
    pub(crate) fn from_parts(
        products: Vec<ProductSpec>,
        regions: BTreeMap<String, RegionalSettings>,
    ) -> Self {
        Self { products, regions }
    }

    /// Parse and validate the JSON catalog format.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let def: CatalogDef = serde_json::from_str(json)?;
        def.try_into()
    }

    pub fn products(&self) -> &[ProductSpec] {
        &self.products
    }

    pub fn product(&self, id: &str) -> Option<&ProductSpec> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Resolve regional settings for a `region` or `region/subregion` key.
    ///
    /// `None` resolves to the global defaults. Subregion entries are stored
    /// fully resolved (parent fields already merged in), so lookup is a
    /// plain map hit.
    pub fn region(&self, key: Option<&str>) -> CatalogResult<&RegionalSettings> {
        let key = key.unwrap_or(regional::GLOBAL_REGION);
        self.regions
            .get(key)
            .ok_or_else(|| CatalogError::UnknownRegion {
                key: key.to_string(),
            })
    }

    pub fn region_keys(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }
}
