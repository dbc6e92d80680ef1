//! Product selection against capacity and rack constraints.

use crate::error::{CatalogError, CatalogResult};
use crate::product::{ProductSpec, RackType};
use crate::Catalog;
use rdhx_core::units::{as_kw, Power};

impl Catalog {
    /// Pick the smallest-capacity compatible product whose max cooling
    /// capacity covers the requirement. Ties break on the lower id.
    ///
    /// `NoCompatibleProduct` is a reported, recoverable condition: the
    /// catalog simply has nothing big enough (or nothing for the rack).
    pub fn select_product(
        &self,
        cooling: Power,
        rack: Option<RackType>,
    ) -> CatalogResult<&ProductSpec> {
        self.recommend(cooling, rack).into_iter().next().ok_or(
            CatalogError::NoCompatibleProduct {
                cooling_kw: as_kw(cooling),
                rack: rack.map(|r| r.to_string()),
            },
        )
    }

    /// All products meeting the capacity/rack constraints, ranked ascending
    /// by capacity (then id), smallest adequate unit first.
    pub fn recommend(&self, cooling: Power, rack: Option<RackType>) -> Vec<&ProductSpec> {
        let mut candidates: Vec<&ProductSpec> = self
            .products()
            .iter()
            .filter(|p| rack.map_or(true, |r| p.supports_rack(r)))
            .filter(|p| p.max_cooling >= cooling)
            .collect();
        candidates.sort_by(|a, b| {
            a.max_cooling
                .partial_cmp(&b.max_cooling)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdhx_core::units::kw;

    #[test]
    fn selects_smallest_sufficient_product() {
        let catalog = Catalog::builtin();
        let product = catalog.select_product(kw(50.0), None).unwrap();
        assert_eq!(product.id, "RD100-42U600");

        let product = catalog.select_product(kw(70.0), None).unwrap();
        assert_eq!(product.id, "RD100-42U800");
    }

    #[test]
    fn rack_filter_constrains_selection() {
        let catalog = Catalog::builtin();
        let product = catalog
            .select_product(kw(50.0), Some(RackType::R48U800))
            .unwrap();
        assert_eq!(product.id, "RD100-48U800");
    }

    #[test]
    fn oversized_requirement_is_no_compatible_product() {
        let catalog = Catalog::builtin();
        let err = catalog.select_product(kw(500.0), None).unwrap_err();
        assert!(matches!(err, CatalogError::NoCompatibleProduct { .. }));

        // Rack nothing supports
        let err = catalog
            .select_product(kw(50.0), Some(RackType::R48U600))
            .map(|p| p.id.clone());
        // RD200-48U800 supports 48U600 racks, so this actually selects it
        assert_eq!(err.unwrap(), "RD200-48U800");
    }

    #[test]
    fn recommend_ranks_ascending_by_capacity() {
        let catalog = Catalog::builtin();
        let ranked = catalog.recommend(kw(70.0), None);
        let ids: Vec<&str> = ranked.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["RD100-42U800", "RD100-48U800", "RD200-48U800"]);
    }

    #[test]
    fn recommend_empty_for_impossible_request() {
        let catalog = Catalog::builtin();
        assert!(catalog.recommend(kw(1000.0), None).is_empty());
    }
}
