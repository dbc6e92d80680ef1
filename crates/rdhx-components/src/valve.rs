//! Control-valve sizing against a resolved water flow.

use rdhx_catalog::ValveSpec;
use rdhx_core::units::{as_m3ph, VolumeRate};

use crate::error::{ComponentError, ComponentResult};

/// Sizing outcome for one duty point.
#[derive(Debug, Clone, PartialEq)]
pub struct ValveRecommendation {
    pub valve: ValveSpec,
    /// Duty flow as a percentage of the valve's rated maximum.
    pub utilization_pct: f64,
    /// Preferred modulation band around the duty point, percent of rated
    /// flow, clamped to [0, 100].
    pub band_pct: (f64, f64),
    /// False when even the largest option is undersized for the flow.
    pub sufficient: bool,
}

/// Picks the smallest valve that covers a duty flow.
#[derive(Debug, Clone, Copy)]
pub struct ValveSelector<'a> {
    /// Options sorted ascending by rated maximum flow.
    options: &'a [ValveSpec],
}

impl<'a> ValveSelector<'a> {
    pub fn new(options: &'a [ValveSpec]) -> ComponentResult<Self> {
        if options.is_empty() {
            return Err(ComponentError::InvalidArg {
                what: "product has no valve options",
            });
        }
        Ok(Self { options })
    }

    /// Smallest sufficient valve; falls back to the largest option (with
    /// `sufficient == false`) when the flow exceeds every rating.
    pub fn recommend(&self, flow: VolumeRate) -> ComponentResult<ValveRecommendation> {
        let q = as_m3ph(flow);
        if q < 0.0 || !q.is_finite() {
            return Err(ComponentError::InvalidArg {
                what: "duty flow must be non-negative and finite",
            });
        }

        let pick = self
            .options
            .iter()
            .find(|v| as_m3ph(v.max_flow) >= q)
            .or_else(|| self.options.last());
        // `new` guarantees at least one option.
        let valve = match pick {
            Some(v) => v.clone(),
            None => {
                return Err(ComponentError::InvalidArg {
                    what: "product has no valve options",
                })
            }
        };

        let max = as_m3ph(valve.max_flow);
        let utilization_pct = if max > 0.0 { q / max * 100.0 } else { 100.0 };
        let sufficient = utilization_pct <= 100.0;
        let band_pct = (
            (utilization_pct - 20.0).max(0.0),
            (utilization_pct + 20.0).min(100.0),
        );

        Ok(ValveRecommendation {
            valve,
            utilization_pct,
            band_pct,
            sufficient,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdhx_core::units::m3ph;

    fn options() -> Vec<ValveSpec> {
        vec![
            ValveSpec {
                model: "2way".into(),
                size: "DN 25".into(),
                max_flow: m3ph(6.3),
                kv: 10.0,
            },
            ValveSpec {
                model: "2way".into(),
                size: "DN 32".into(),
                max_flow: m3ph(10.0),
                kv: 16.0,
            },
        ]
    }

    #[test]
    fn picks_smallest_sufficient_valve() {
        let opts = options();
        let sel = ValveSelector::new(&opts).unwrap();
        let rec = sel.recommend(m3ph(5.0)).unwrap();
        assert_eq!(rec.valve.size, "DN 25");
        assert!(rec.sufficient);
        assert!((rec.utilization_pct - 5.0 / 6.3 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn steps_up_when_small_valve_is_undersized() {
        let opts = options();
        let sel = ValveSelector::new(&opts).unwrap();
        let rec = sel.recommend(m3ph(8.0)).unwrap();
        assert_eq!(rec.valve.size, "DN 32");
        assert!(rec.sufficient);
    }

    #[test]
    fn falls_back_to_largest_with_warning_flag() {
        let opts = options();
        let sel = ValveSelector::new(&opts).unwrap();
        let rec = sel.recommend(m3ph(14.0)).unwrap();
        assert_eq!(rec.valve.size, "DN 32");
        assert!(!rec.sufficient);
        assert!(rec.utilization_pct > 100.0);
        assert_eq!(rec.band_pct.1, 100.0);
    }

    #[test]
    fn band_is_clamped_to_percent_range() {
        let opts = options();
        let sel = ValveSelector::new(&opts).unwrap();
        let rec = sel.recommend(m3ph(0.5)).unwrap();
        assert_eq!(rec.band_pct.0, 0.0);
        assert!(rec.band_pct.1 > 0.0);
    }

    #[test]
    fn empty_options_rejected() {
        assert!(ValveSelector::new(&[]).is_err());
    }
}
