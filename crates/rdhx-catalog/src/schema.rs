//! Serde schema for the consumed JSON catalog format.
//!
//! The schema is deliberately plain: f64 fields with unit-suffixed names.
//! Conversion into the validated domain types happens in `TryFrom`, which
//! rejects non-physical values and duplicate ids. Unknown keys are rejected
//! so typos in hand-edited catalogs surface immediately.

use crate::error::{CatalogError, CatalogResult};
use crate::product::{FanSpec, ProductSpec, RackType, ValveSpec};
use crate::regional::{RegionalSettings, GLOBAL_REGION};
use crate::Catalog;
use rdhx_core::units::{celsius, dt_k, kpa, kw, m3ph, pa, w};
use rdhx_fluids::FluidKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CatalogDef {
    pub products: Vec<ProductDef>,
    #[serde(default)]
    pub regions: BTreeMap<String, RegionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProductDef {
    pub id: String,
    pub series: String,
    #[serde(default)]
    pub name: String,
    pub rack_types: Vec<String>,
    pub max_cooling_kw: f64,
    pub nominal_flow_m3h: f64,
    #[serde(default = "default_nominal_delta_t")]
    pub nominal_delta_t_k: f64,
    pub coil_base_drop_kpa: f64,
    pub fan: FanDef,
    pub valve_options: Vec<ValveDef>,
}

fn default_nominal_delta_t() -> f64 {
    5.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FanDef {
    pub count: u32,
    pub nominal_air_flow_m3h: f64,
    pub max_air_flow_m3h: f64,
    pub nominal_static_pressure_pa: f64,
    pub max_static_pressure_pa: f64,
    pub nominal_power_w: f64,
    pub nominal_noise_dba: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ValveDef {
    pub model: String,
    pub size: String,
    pub max_flow_m3h: f64,
    pub kv: f64,
}

/// One region entry. Unset fields fall back to the parent region (for
/// subregions) or to built-in global defaults (for top-level regions).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RegionDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_cost_per_kwh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbon_kg_per_kwh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_voltage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_fluid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_glycol_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient_temp_min_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient_temp_max_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity_min_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity_max_pct: Option<f64>,
    #[serde(default)]
    pub subregions: BTreeMap<String, SubregionDef>,
}

/// A subregion overrides individual parent fields; it cannot nest further.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SubregionDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_cost_per_kwh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbon_kg_per_kwh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_voltage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_fluid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_glycol_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient_temp_min_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient_temp_max_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity_min_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity_max_pct: Option<f64>,
}

fn require_positive(value: f64, field: &str) -> CatalogResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CatalogError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be a positive finite number",
        })
    }
}

fn require_non_negative(value: f64, field: &str) -> CatalogResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CatalogError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be a non-negative finite number",
        })
    }
}

fn parse_fluid(name: &str, field: &str) -> CatalogResult<FluidKind> {
    name.parse().map_err(|_| CatalogError::InvalidValue {
        field: field.to_string(),
        value: name.to_string(),
        reason: "unknown fluid kind",
    })
}

impl TryFrom<ProductDef> for ProductSpec {
    type Error = CatalogError;

    fn try_from(def: ProductDef) -> CatalogResult<Self> {
        let rack_types = def
            .rack_types
            .iter()
            .map(|s| s.parse::<RackType>())
            .collect::<CatalogResult<Vec<_>>>()?;

        let mut valve_options = def
            .valve_options
            .into_iter()
            .map(|v| {
                Ok(ValveSpec {
                    max_flow: m3ph(require_positive(
                        v.max_flow_m3h,
                        &format!("{}.valve.max_flow_m3h", def.id),
                    )?),
                    kv: require_positive(v.kv, &format!("{}.valve.kv", def.id))?,
                    model: v.model,
                    size: v.size,
                })
            })
            .collect::<CatalogResult<Vec<_>>>()?;
        valve_options.sort_by(|a, b| {
            a.max_flow
                .partial_cmp(&b.max_flow)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let fan = FanSpec {
            count: def.fan.count.max(1),
            nominal_air_flow: m3ph(require_positive(
                def.fan.nominal_air_flow_m3h,
                &format!("{}.fan.nominal_air_flow_m3h", def.id),
            )?),
            max_air_flow: m3ph(require_positive(
                def.fan.max_air_flow_m3h,
                &format!("{}.fan.max_air_flow_m3h", def.id),
            )?),
            nominal_static_pressure: pa(require_positive(
                def.fan.nominal_static_pressure_pa,
                &format!("{}.fan.nominal_static_pressure_pa", def.id),
            )?),
            max_static_pressure: pa(require_positive(
                def.fan.max_static_pressure_pa,
                &format!("{}.fan.max_static_pressure_pa", def.id),
            )?),
            nominal_power: w(require_positive(
                def.fan.nominal_power_w,
                &format!("{}.fan.nominal_power_w", def.id),
            )?),
            nominal_noise_dba: require_non_negative(
                def.fan.nominal_noise_dba,
                &format!("{}.fan.nominal_noise_dba", def.id),
            )?,
        };

        Ok(ProductSpec {
            max_cooling: kw(require_positive(
                def.max_cooling_kw,
                &format!("{}.max_cooling_kw", def.id),
            )?),
            nominal_flow: m3ph(require_positive(
                def.nominal_flow_m3h,
                &format!("{}.nominal_flow_m3h", def.id),
            )?),
            nominal_delta_t: dt_k(require_positive(
                def.nominal_delta_t_k,
                &format!("{}.nominal_delta_t_k", def.id),
            )?),
            coil_base_drop: kpa(require_non_negative(
                def.coil_base_drop_kpa,
                &format!("{}.coil_base_drop_kpa", def.id),
            )?),
            name: if def.name.is_empty() {
                def.id.clone()
            } else {
                def.name
            },
            id: def.id,
            series: def.series,
            rack_types,
            fan,
            valve_options,
        })
    }
}

/// Built-in fallbacks applied when a catalog omits region fields entirely.
fn global_defaults() -> RegionalSettings {
    RegionalSettings {
        energy_cost_per_kwh: 0.15,
        carbon_kg_per_kwh: 0.5,
        default_voltage: 230.0,
        default_fluid: FluidKind::Water,
        default_glycol_pct: 0.0,
        ambient_temp_range: (celsius(10.0), celsius(30.0)),
        humidity_range_pct: (30.0, 70.0),
    }
}

fn resolve_region(def: &RegionDef, base: &RegionalSettings, key: &str) -> CatalogResult<RegionalSettings> {
    Ok(RegionalSettings {
        energy_cost_per_kwh: def.energy_cost_per_kwh.unwrap_or(base.energy_cost_per_kwh),
        carbon_kg_per_kwh: def.carbon_kg_per_kwh.unwrap_or(base.carbon_kg_per_kwh),
        default_voltage: def.default_voltage.unwrap_or(base.default_voltage),
        default_fluid: match &def.default_fluid {
            Some(name) => parse_fluid(name, &format!("{key}.default_fluid"))?,
            None => base.default_fluid,
        },
        default_glycol_pct: def.default_glycol_pct.unwrap_or(base.default_glycol_pct),
        ambient_temp_range: (
            def.ambient_temp_min_c
                .map(celsius)
                .unwrap_or(base.ambient_temp_range.0),
            def.ambient_temp_max_c
                .map(celsius)
                .unwrap_or(base.ambient_temp_range.1),
        ),
        humidity_range_pct: (
            def.humidity_min_pct.unwrap_or(base.humidity_range_pct.0),
            def.humidity_max_pct.unwrap_or(base.humidity_range_pct.1),
        ),
    })
}

fn resolve_subregion(
    def: &SubregionDef,
    base: &RegionalSettings,
    key: &str,
) -> CatalogResult<RegionalSettings> {
    // Same merge as resolve_region, against the already-resolved parent.
    let as_region = RegionDef {
        energy_cost_per_kwh: def.energy_cost_per_kwh,
        carbon_kg_per_kwh: def.carbon_kg_per_kwh,
        default_voltage: def.default_voltage,
        default_fluid: def.default_fluid.clone(),
        default_glycol_pct: def.default_glycol_pct,
        ambient_temp_min_c: def.ambient_temp_min_c,
        ambient_temp_max_c: def.ambient_temp_max_c,
        humidity_min_pct: def.humidity_min_pct,
        humidity_max_pct: def.humidity_max_pct,
        subregions: BTreeMap::new(),
    };
    resolve_region(&as_region, base, key)
}

impl TryFrom<CatalogDef> for Catalog {
    type Error = CatalogError;

    fn try_from(def: CatalogDef) -> CatalogResult<Self> {
        let mut products = Vec::with_capacity(def.products.len());
        for product_def in def.products {
            let product: ProductSpec = product_def.try_into()?;
            if products.iter().any(|p: &ProductSpec| p.id == product.id) {
                return Err(CatalogError::DuplicateId { id: product.id });
            }
            products.push(product);
        }

        let globals = def
            .regions
            .get(GLOBAL_REGION)
            .map(|r| resolve_region(r, &global_defaults(), GLOBAL_REGION))
            .transpose()?
            .unwrap_or_else(global_defaults);

        let mut regions = BTreeMap::new();
        regions.insert(GLOBAL_REGION.to_string(), globals.clone());
        for (name, region_def) in &def.regions {
            if name == GLOBAL_REGION {
                continue;
            }
            let resolved = resolve_region(region_def, &globals, name)?;
            for (sub_name, sub_def) in &region_def.subregions {
                let key = format!("{name}/{sub_name}");
                let sub_resolved = resolve_subregion(sub_def, &resolved, &key)?;
                regions.insert(key, sub_resolved);
            }
            regions.insert(name.clone(), resolved);
        }

        Ok(Catalog::from_parts(products, regions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_JSON: &str = r#"{
        "products": [{
            "id": "RD100-42U600",
            "series": "RD100",
            "rack_types": ["42U600"],
            "max_cooling_kw": 65.0,
            "nominal_flow_m3h": 8.6,
            "coil_base_drop_kpa": 28.0,
            "fan": {
                "count": 4,
                "nominal_air_flow_m3h": 6847.0,
                "max_air_flow_m3h": 8217.0,
                "nominal_static_pressure_pa": 55.0,
                "max_static_pressure_pa": 80.0,
                "nominal_power_w": 60.0,
                "nominal_noise_dba": 54.0
            },
            "valve_options": [
                { "model": "2way", "size": "DN 32", "max_flow_m3h": 10.0, "kv": 16.0 },
                { "model": "2way", "size": "DN 25", "max_flow_m3h": 6.3, "kv": 10.0 }
            ]
        }],
        "regions": {
            "europe": {
                "energy_cost_per_kwh": 0.20,
                "carbon_kg_per_kwh": 0.275,
                "subregions": {
                    "uk": { "energy_cost_per_kwh": 0.22, "carbon_kg_per_kwh": 0.233 }
                }
            }
        }
    }"#;

    #[test]
    fn parse_minimal_catalog() {
        let catalog = Catalog::from_json(MINIMAL_JSON).unwrap();
        let product = catalog.product("RD100-42U600").unwrap();
        assert_eq!(product.fan.count, 4);
        // Valve options end up sorted ascending by max flow
        assert_eq!(product.valve_options[0].size, "DN 25");
        assert_eq!(product.valve_options[1].size, "DN 32");
    }

    #[test]
    fn subregion_inherits_parent_and_global_fields() {
        let catalog = Catalog::from_json(MINIMAL_JSON).unwrap();
        let uk = catalog.region(Some("europe/uk")).unwrap();
        assert_eq!(uk.energy_cost_per_kwh, 0.22);
        // Voltage not set anywhere: built-in global default
        assert_eq!(uk.default_voltage, 230.0);

        let europe = catalog.region(Some("europe")).unwrap();
        assert_eq!(europe.energy_cost_per_kwh, 0.20);
    }

    #[test]
    fn unknown_region_is_an_error() {
        let catalog = Catalog::from_json(MINIMAL_JSON).unwrap();
        assert!(matches!(
            catalog.region(Some("atlantis")),
            Err(CatalogError::UnknownRegion { .. })
        ));
        // None resolves to global defaults
        assert!(catalog.region(None).is_ok());
    }

    #[test]
    fn unknown_keys_rejected() {
        let json = MINIMAL_JSON.replace("\"series\"", "\"seriess\"");
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn non_positive_capacity_rejected() {
        let json = MINIMAL_JSON.replace("\"max_cooling_kw\": 65.0", "\"max_cooling_kw\": 0.0");
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::InvalidValue { .. })
        ));
    }

    #[test]
    fn duplicate_product_id_rejected() {
        let def: CatalogDef = serde_json::from_str(MINIMAL_JSON).unwrap();
        let mut doubled = def.clone();
        doubled.products.push(def.products[0].clone());
        assert!(matches!(
            Catalog::try_from(doubled),
            Err(CatalogError::DuplicateId { .. })
        ));
    }

    #[test]
    fn catalog_def_json_round_trip() {
        let def: CatalogDef = serde_json::from_str(MINIMAL_JSON).unwrap();
        let json = serde_json::to_string(&def).unwrap();
        let back: CatalogDef = serde_json::from_str(&json).unwrap();
        assert_eq!(def, back);
    }
}
