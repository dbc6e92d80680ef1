//! End-to-end resolution against the built-in catalog.

use rdhx_catalog::RackType;
use rdhx_components::PipeConfiguration;
use rdhx_core::units::{as_celsius, as_m3ph, celsius, kw, m3ph};
use rdhx_engine::{CalculationRequest, Engine, EngineError};
use rdhx_fluids::FluidKind;

fn base_request(cooling_kw: f64) -> CalculationRequest {
    // 8 K across the air side keeps the builtin fan banks inside their
    // envelope up to their rated capacities.
    CalculationRequest::new(kw(cooling_kw), celsius(30.0), celsius(22.0), celsius(18.0))
}

#[test]
fn fifty_kilowatts_resolves_cleanly_with_explicit_return() {
    let engine = Engine::with_builtin_catalog();
    let report = engine
        .calculate(&base_request(50.0).return_temp(celsius(23.0)))
        .unwrap();

    assert_eq!(report.product.id, "RD100-42U600");
    assert!((as_m3ph(report.water.state.flow) - 8.62).abs() < 0.01);
    assert!(report.air.sufficient);
    assert!(report.air.speed_pct > 0.0 && report.air.speed_pct <= 100.0);
    assert!(report.efficiency.cop > 0.0 && report.efficiency.cop.is_finite());
    assert!(report.water.total_pressure_drop.value > report.water.piping.total.value);
    assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
}

#[test]
fn missing_return_and_flow_falls_back_to_nominal_split() {
    let engine = Engine::with_builtin_catalog();
    let report = engine.calculate(&base_request(50.0)).unwrap();
    // Design split is 5 K, so the return lands at 23 °C with a warning.
    assert!((as_celsius(report.water.state.return_temp) - 23.0).abs() < 1e-9);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("nominal"));
}

#[test]
fn both_return_and_flow_is_a_hard_error() {
    let engine = Engine::with_builtin_catalog();
    let err = engine
        .calculate(
            &base_request(50.0)
                .return_temp(celsius(23.0))
                .flow_rate(m3ph(8.6)),
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::Component(_)), "got {err}");
}

#[test]
fn oversized_duty_has_no_product() {
    let engine = Engine::with_builtin_catalog();
    let err = engine.calculate(&base_request(500.0)).unwrap_err();
    assert!(matches!(err, EngineError::Catalog(_)), "got {err}");
}

#[test]
fn rack_filter_changes_the_selection() {
    let engine = Engine::with_builtin_catalog();
    let report = engine
        .calculate(&base_request(50.0).rack_type(RackType::R48U800))
        .unwrap();
    assert!(report.product.id.contains("48U800"), "got {}", report.product.id);
}

#[test]
fn nordic_region_defaults_to_glycol_and_flags_nothing_at_mild_supply() {
    let engine = Engine::with_builtin_catalog();
    let report = engine
        .calculate(&base_request(50.0).region("nordic").return_temp(celsius(23.0)))
        .unwrap();
    assert_eq!(report.water.fluid.kind, FluidKind::PropyleneGlycol);
    assert_eq!(report.water.fluid.glycol_pct, 30.0);
    // Glycol carries less heat per volume, so the loop runs more flow.
    assert!(as_m3ph(report.water.state.flow) > 8.62);
}

#[test]
fn explicit_fluid_overrides_the_region() {
    let engine = Engine::with_builtin_catalog();
    let report = engine
        .calculate(
            &base_request(50.0)
                .region("nordic")
                .fluid(FluidKind::Water, 0.0)
                .return_temp(celsius(23.0)),
        )
        .unwrap();
    assert_eq!(report.water.fluid.kind, FluidKind::Water);
}

#[test]
fn north_american_voltage_raises_fan_power_ratio() {
    let engine = Engine::with_builtin_catalog();
    let eu = engine
        .calculate(&base_request(50.0).return_temp(celsius(23.0)))
        .unwrap();
    let na = engine
        .calculate(&base_request(50.0).region("north_america").return_temp(celsius(23.0)))
        .unwrap();
    // Same duty, 208 V instead of 230 V: power scales by (208/230)².
    let expected = (208.0_f64 / 230.0).powi(2);
    assert!((na.air.power.value / eu.air.power.value - expected).abs() < 1e-9);
}

#[test]
fn altitude_increases_fan_power_and_warns_when_saturating() {
    let engine = Engine::with_builtin_catalog();
    let sea = engine
        .calculate(&base_request(50.0).return_temp(celsius(23.0)))
        .unwrap();
    let site = engine
        .calculate(&base_request(50.0).return_temp(celsius(23.0)).altitude_m(800.0))
        .unwrap();
    assert!(site.air.power.value > sea.air.power.value);
    assert!(site.air.speed_pct > sea.air.speed_pct);
    assert!(site.efficiency.cop < sea.efficiency.cop);
}

#[test]
fn top_fed_piping_costs_more() {
    let engine = Engine::with_builtin_catalog();
    let bottom = engine
        .calculate(&base_request(50.0).return_temp(celsius(23.0)))
        .unwrap();
    let top = engine
        .calculate(
            &base_request(50.0)
                .return_temp(celsius(23.0))
                .pipe_configuration(PipeConfiguration::TopFed),
        )
        .unwrap();
    assert!(top.water.piping.total > bottom.water.piping.total);
}

#[test]
fn freeze_risk_is_flagged_near_the_freezing_point() {
    let engine = Engine::with_builtin_catalog();
    // 10 % PG freezes at -3 °C; a -0.5 °C supply sits inside the 3 K margin.
    let report = engine
        .calculate(
            &CalculationRequest::new(kw(50.0), celsius(30.0), celsius(22.0), celsius(-0.5))
                .fluid(FluidKind::PropyleneGlycol, 10.0)
                .return_temp(celsius(5.0)),
        )
        .unwrap();
    assert!(
        report.warnings.iter().any(|w| w.contains("freeze")),
        "warnings: {:?}",
        report.warnings
    );
}

#[test]
fn tight_air_approach_saturates_fans_with_warning() {
    let engine = Engine::with_builtin_catalog();
    // 2 K across the air side demands far more flow than the bank has.
    let report = engine
        .calculate(
            &CalculationRequest::new(kw(50.0), celsius(24.0), celsius(22.0), celsius(18.0))
                .return_temp(celsius(23.0)),
        )
        .unwrap();
    assert!(!report.air.sufficient);
    assert!((report.air.speed_pct - 100.0).abs() < 1e-9);
    assert!(
        report.warnings.iter().any(|w| w.contains("saturated")),
        "warnings: {:?}",
        report.warnings
    );
}

#[test]
fn narrow_water_split_outgrows_the_valve_options() {
    let engine = Engine::with_builtin_catalog();
    // 65 kW at a 4 K split needs ~14 m³/h; the largest option on the
    // 42U600 door is rated for 10.
    let report = engine
        .calculate(
            &base_request(65.0)
                .rack_type(RackType::R42U600)
                .return_temp(celsius(22.0)),
        )
        .unwrap();
    assert!(!report.valve.sufficient);
    assert!(report.valve.utilization_pct > 100.0);
    assert!(
        report.warnings.iter().any(|w| w.contains("valve")),
        "warnings: {:?}",
        report.warnings
    );
}

#[test]
fn unknown_region_is_a_catalog_error() {
    let engine = Engine::with_builtin_catalog();
    let err = engine
        .calculate(&base_request(50.0).region("atlantis"))
        .unwrap_err();
    assert!(matches!(err, EngineError::Catalog(_)));
}

#[test]
fn batch_matches_serial() {
    let engine = Engine::with_builtin_catalog();
    let requests: Vec<CalculationRequest> = (1..=8)
        .map(|i| base_request(10.0 * f64::from(i)).return_temp(celsius(23.0)))
        .collect();

    let batch = engine.calculate_batch(&requests);
    assert_eq!(batch.len(), requests.len());
    for (req, out) in requests.iter().zip(&batch) {
        let serial = engine.calculate(req).unwrap();
        let parallel = out.as_ref().unwrap();
        assert_eq!(serial.product.id, parallel.product.id);
        assert!(
            (as_m3ph(serial.water.state.flow) - as_m3ph(parallel.water.state.flow)).abs() < 1e-12
        );
        assert!((serial.air.speed_pct - parallel.air.speed_pct).abs() < 1e-12);
    }
}

#[test]
fn batch_reports_per_request_failures() {
    let engine = Engine::with_builtin_catalog();
    let requests = vec![
        base_request(50.0).return_temp(celsius(23.0)),
        base_request(500.0), // beyond every product
    ];
    let batch = engine.calculate_batch(&requests);
    assert!(batch[0].is_ok());
    assert!(batch[1].is_err());
}
