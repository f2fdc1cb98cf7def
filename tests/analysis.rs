//! 판 매수 산정과 열수지 테스트.
use std::path::Path;

use approx::assert_relative_eq;
use plate_hx::error::{DomainError, HxError};
use plate_hx::exchanger::analysis::{plates_for_area, required_area};
use plate_hx::exchanger::{self, Analysis, ExchangerInput, FlowArrangement, Side, Warning};
use plate_hx::fluid::coolant::ATMOSPHERIC_PRESSURE_BAR;
use plate_hx::fluid::WaterProperties;
use plate_hx::ParameterSet;
use proptest::prelude::*;

fn fixed_u_parameters(extra: &str, overall_u: f64, plate_max_count: u32) -> String {
    format!(
        r#"
[plate-heat-exchanger]
energy = "10 kW"
hot_mass_flow_rate = 0.5
cold_mass_flow_rate = 0.3
hot_inlet_temperature = 60
cold_inlet_temperature = 20
plate_width = "100 mm"
plate_height = "300 mm"
plate_spacing = "2 mm"
plate_thickness = "0.5 mm"
plate_max_count = {plate_max_count}
corrugation_angle = 45
overall_heat_transfer_coefficient = "{overall_u} W/(m^2 K)"
{extra}

[hot-coolant]
name = "oil"
density = 850
dynamic_viscosity = 0.01
prandtl_number = 150
specific_heat = 2000
thermal_conductivity = 0.13

[cold-coolant]
name = "water"
density = 998
dynamic_viscosity = 0.001
prandtl_number = 7
specific_heat = 4180
thermal_conductivity = 0.6
"#
    )
}

fn run(text: &str) -> Result<Analysis, HxError> {
    let params = ParameterSet::from_toml_str(text).expect("valid TOML");
    exchanger::run(&params)
}

#[test]
fn outlet_temperatures_follow_from_energy() {
    let analysis = run(&fixed_u_parameters("", 1500.0, 100)).expect("analysis");
    let t = &analysis.thermal.temperatures;
    // 10 kW / (0.5 kg/s · 2000 J/kg·K) = 10 K
    assert_relative_eq!(t.hot_outlet, 323.15, max_relative = 1e-12);
    assert_relative_eq!(
        t.cold_outlet,
        293.15 + 10_000.0 / (0.3 * 4180.0),
        max_relative = 1e-12
    );
    assert_relative_eq!(analysis.thermal.duty, 10_000.0);
    assert_relative_eq!(analysis.thermal.hot_duty, 10_000.0, max_relative = 1e-9);
    assert_relative_eq!(analysis.thermal.cold_duty, 10_000.0, max_relative = 1e-9);
    assert!(analysis.warnings.is_empty(), "{:?}", analysis.warnings);
}

#[test]
fn fixed_coefficient_gives_exact_plate_count() {
    let analysis = run(&fixed_u_parameters("", 1500.0, 100)).expect("analysis");
    let area = 10_000.0 / (1500.0 * analysis.thermal.lmtd);
    let expected = (area / (0.1 * 0.3)).ceil() as u32;
    assert_eq!(analysis.plate_count(), Some(expected));

    let step = analysis.selected_step().expect("selected");
    assert_relative_eq!(step.required_area, area, max_relative = 1e-12);
    assert_relative_eq!(step.overall_coefficient, 1500.0);
    assert_eq!(step.plates_required, expected);
    // 첫 번째로 충분한 매수에서 멈춘다
    assert_eq!(analysis.sweep.len() as u32, expected);
    assert!(analysis.sweep[..analysis.sweep.len() - 1]
        .iter()
        .all(|s| !s.is_sufficient()));
}

#[test]
fn hot_outlet_without_energy_sets_the_duty() {
    let text = fixed_u_parameters("hot_outlet_temperature = 50", 1500.0, 100)
        .replace("energy = \"10 kW\"\n", "");
    let analysis = run(&text).expect("analysis");
    assert_relative_eq!(analysis.thermal.duty, 10_000.0, max_relative = 1e-9);
    assert_relative_eq!(
        analysis.thermal.temperatures.cold_outlet,
        293.15 + 10_000.0 / (0.3 * 4180.0),
        max_relative = 1e-9
    );
}

#[test]
fn inconsistent_duties_raise_an_imbalance_warning() {
    // 고온측 60→40 °C는 20 kW인데 열량은 10 kW
    let analysis = run(&fixed_u_parameters("hot_outlet_temperature = 40", 1500.0, 100))
        .expect("analysis");
    assert!(analysis.warnings.iter().any(|w| matches!(
        w,
        Warning::EnergyImbalance { hot_duty, cold_duty }
            if (*hot_duty - 20_000.0).abs() < 1e-6 && (*cold_duty - 10_000.0).abs() < 1e-6
    )));
}

#[test]
fn no_solution_within_plate_max_count() {
    let analysis = run(&fixed_u_parameters("", 1500.0, 3)).expect("analysis");
    assert_eq!(analysis.plate_count(), None);
    assert_eq!(analysis.selected, None);
    assert_eq!(analysis.sweep.len(), 3);
    assert_eq!(analysis.operating_step().map(|s| s.plates), Some(3));
    assert!(analysis
        .warnings
        .contains(&Warning::NoPlateCount { plate_max_count: 3 }));
}

#[test]
fn steep_corrugation_angle_is_flagged() {
    let text = fixed_u_parameters("", 1500.0, 100)
        .replace("corrugation_angle = 45", "corrugation_angle = 70");
    let analysis = run(&text).expect("analysis");
    assert!(analysis
        .warnings
        .contains(&Warning::CorrugationAngleOutsideCorrelation { angle: 70.0 }));
}

#[test]
fn low_reynolds_number_is_flagged() {
    // 유량이 아주 작으면 고온측 Re < 2
    let text = fixed_u_parameters("", 1500.0, 100)
        .replace("hot_mass_flow_rate = 0.5", "hot_mass_flow_rate = 0.0005")
        .replace("energy = \"10 kW\"", "energy = \"10 W\"");
    let analysis = run(&text).expect("analysis");
    assert!(analysis.warnings.iter().any(|w| matches!(
        w,
        Warning::ReynoldsOutsideCorrelation { side: Side::Hot, reynolds } if *reynolds < 2.0
    )));
}

#[test]
fn temperature_cross_aborts_with_domain_error() {
    // 고온측이 25→15 °C로 식으면 출구가 저온측 입구(20 °C)보다 낮다
    let text = fixed_u_parameters("", 1500.0, 100)
        .replace("hot_inlet_temperature = 60", "hot_inlet_temperature = 25");
    let err = run(&text).unwrap_err();
    assert!(matches!(
        err,
        HxError::Domain(DomainError::TerminalTemperatureDifference { .. })
    ));
}

#[test]
fn pressure_drop_grows_with_port_losses() {
    let plain = run(&fixed_u_parameters("", 1500.0, 100)).expect("analysis");
    let ported = run(&fixed_u_parameters("port_diameter = \"40 mm\"", 1500.0, 100))
        .expect("analysis");
    let a = plain.selected_step().expect("selected");
    let b = ported.selected_step().expect("selected");
    assert_eq!(a.hot.port_pressure_drop, 0.0);
    assert!(b.hot.port_pressure_drop > 0.0);
    assert_relative_eq!(
        b.hot.pressure_drop(),
        a.hot.channel_pressure_drop + b.hot.port_pressure_drop,
        max_relative = 1e-12
    );
}

#[test]
fn cold_outlet_alone_sets_the_duty() {
    let text = fixed_u_parameters("cold_outlet_temperature = 28", 1500.0, 100)
        .replace("energy = \"10 kW\"\n", "");
    let analysis = run(&text).expect("analysis");
    let duty = 0.3 * 4180.0 * 8.0;
    assert_relative_eq!(analysis.thermal.duty, duty, max_relative = 1e-9);
    assert_relative_eq!(analysis.thermal.hot_duty, duty, max_relative = 1e-9);
    assert_relative_eq!(
        analysis.thermal.temperatures.hot_outlet,
        333.15 - duty / (0.5 * 2000.0),
        max_relative = 1e-12
    );
    assert_relative_eq!(
        analysis.thermal.temperatures.cold_outlet,
        301.15,
        max_relative = 1e-12
    );
}

#[test]
fn parallel_flow_uses_same_end_differences() {
    let text = fixed_u_parameters("flow_arrangement = \"parallel\"", 1500.0, 100);
    let analysis = run(&text).expect("analysis");
    assert_eq!(analysis.arrangement, FlowArrangement::ParallelFlow);

    let cold_outlet = 293.15 + 10_000.0 / (0.3 * 4180.0);
    let dt1: f64 = 333.15 - 293.15;
    let dt2 = 323.15 - cold_outlet;
    let lmtd = (dt1 - dt2) / (dt1 / dt2).ln();
    assert_relative_eq!(analysis.thermal.lmtd, lmtd, max_relative = 1e-9);

    let expected = plates_for_area(10_000.0 / (1500.0 * lmtd), 0.1 * 0.3);
    assert_eq!(analysis.plate_count(), Some(expected));

    // 같은 말단 온도라면 병류 LMTD가 향류보다 작다
    let counter = run(&fixed_u_parameters("", 1500.0, 100)).expect("analysis");
    assert!(analysis.thermal.lmtd < counter.thermal.lmtd);
    assert!(analysis.plate_count() >= counter.plate_count());
}

fn convective_parameters(extra: &str) -> String {
    fixed_u_parameters(extra, 1500.0, 100)
        .replace("overall_heat_transfer_coefficient = \"1500 W/(m^2 K)\"\n", "")
}

#[test]
fn convective_coefficient_combines_both_sides_and_the_wall() {
    let with_wall = run(&convective_parameters(
        "plate_thermal_conductivity = \"16 W/(m K)\"",
    ))
    .expect("analysis");
    let without_wall = run(&convective_parameters("")).expect("analysis");

    // 판 1장, Dh = 2·2 mm
    let dh = 0.004;
    let side = |mass_flow: f64, rho: f64, mu: f64, pr: f64, k: f64| {
        let v = mass_flow / rho / (0.1 * 0.002);
        let re = rho * v * dh / mu;
        let nu = 0.1381 * re.powf(0.75) * pr.powf(0.333);
        nu * k / dh
    };
    let h_hot = side(0.5, 850.0, 0.01, 150.0, 0.13);
    let h_cold = side(0.3, 998.0, 0.001, 7.0, 0.6);

    let step = &with_wall.sweep[0];
    assert_eq!(step.plates, 1);
    assert_relative_eq!(step.hot.convective_coefficient.unwrap(), h_hot, max_relative = 1e-9);
    assert_relative_eq!(step.cold.convective_coefficient.unwrap(), h_cold, max_relative = 1e-9);
    assert_relative_eq!(
        step.overall_coefficient,
        1.0 / (1.0 / h_hot + 1.0 / h_cold + 0.0005 / 16.0),
        max_relative = 1e-9
    );

    let bare = &without_wall.sweep[0];
    assert_relative_eq!(
        bare.overall_coefficient,
        1.0 / (1.0 / h_hot + 1.0 / h_cold),
        max_relative = 1e-9
    );
    assert_relative_eq!(
        1.0 / step.overall_coefficient - 1.0 / bare.overall_coefficient,
        0.0005 / 16.0,
        max_relative = 1e-6
    );
}

#[test]
fn water_properties_follow_the_mean_stream_temperature() {
    let text = r#"
[plate-heat-exchanger]
energy = "50 kW"
hot_mass_flow_rate = 0.5
cold_mass_flow_rate = 0.5
hot_inlet_temperature = 90
cold_inlet_temperature = 20
plate_width = "100 mm"
plate_height = "300 mm"
plate_spacing = "2 mm"
plate_thickness = "0.5 mm"
plate_max_count = 100
corrugation_angle = 45
overall_heat_transfer_coefficient = 1500

[hot-coolant]
density = 850
dynamic_viscosity = 0.01
prandtl_number = 150
specific_heat = 2000
thermal_conductivity = 0.13

[cold-coolant]
fluid = "water"
"#;
    let params = ParameterSet::from_toml_str(text).unwrap();
    let input = ExchangerInput::from_parameters(&params).expect("input");

    let at_inlet = WaterProperties::at(20.0, ATMOSPHERIC_PRESSURE_BAR).unwrap();
    let rise = 50_000.0 / (0.5 * at_inlet.specific_heat);
    let at_mean = WaterProperties::at(20.0 + rise / 2.0, ATMOSPHERIC_PRESSURE_BAR).unwrap();

    let water = &input.cold.coolant;
    assert_relative_eq!(water.density, at_mean.density, max_relative = 1e-9);
    assert_relative_eq!(water.specific_heat, at_mean.specific_heat, max_relative = 1e-9);
    assert!((water.density - at_inlet.density).abs() > 1.0);
    assert_eq!(input.cold.outlet_temperature, None);
    // 명시한 물성은 그대로
    assert_relative_eq!(input.hot.coolant.density, 850.0);
}

#[test]
fn uncertain_coefficient_spreads_to_the_area_only() {
    let text = fixed_u_parameters("", 1500.0, 100)
        .replace("\"1500 W/(m^2 K)\"", "\"(1500 +/- 15) W/(m^2 K)\"");
    let analysis = run(&text).expect("analysis");
    let sigma = analysis.uncertainty.expect("uncertainty");
    let step = analysis.selected_step().expect("selected");

    assert_relative_eq!(step.overall_coefficient, 1500.0);
    assert_relative_eq!(sigma.overall_coefficient, 15.0, max_relative = 1e-6);
    assert_relative_eq!(sigma.required_area, step.required_area * 0.01, max_relative = 1e-6);
    assert_eq!(sigma.duty, 0.0);
    assert_eq!(sigma.lmtd, 0.0);
    assert_eq!(sigma.hot_outlet, 0.0);
}

#[test]
fn uncertain_energy_spreads_to_the_outlets() {
    let text = fixed_u_parameters("", 1500.0, 100)
        .replace("energy = \"10 kW\"", "energy = \"(10 +/- 0.1) kW\"");
    let analysis = run(&text).expect("analysis");
    assert_relative_eq!(analysis.thermal.duty, 10_000.0, max_relative = 1e-12);

    let sigma = analysis.uncertainty.expect("uncertainty");
    assert_relative_eq!(sigma.duty, 100.0, max_relative = 1e-6);
    assert_relative_eq!(sigma.hot_outlet, 0.1, max_relative = 1e-6);
    assert_relative_eq!(sigma.cold_outlet, 100.0 / (0.3 * 4180.0), max_relative = 1e-6);
    assert_eq!(sigma.hot_inlet, 0.0);
    assert!(sigma.lmtd > 0.0);
    assert!(sigma.required_area > 0.0);
    assert_eq!(sigma.overall_coefficient, 0.0);
}

#[test]
fn independent_uncertainties_add_in_quadrature() {
    let text = fixed_u_parameters("", 1500.0, 100)
        .replace("hot_inlet_temperature = 60", "hot_inlet_temperature = \"(60 +/- 0.5) degC\"")
        .replace("energy = \"10 kW\"", "energy = \"(10 +/- 0.1) kW\"");
    let sigma = run(&text).expect("analysis").uncertainty.expect("uncertainty");
    assert_relative_eq!(sigma.hot_inlet, 0.5, max_relative = 1e-6);
    // T_out = T_in − Q/(ṁ·cp): 0.5 K 와 0.1 K
    assert_relative_eq!(
        sigma.hot_outlet,
        (0.5_f64.powi(2) + 0.1_f64.powi(2)).sqrt(),
        max_relative = 1e-6
    );
    assert_relative_eq!(sigma.cold_inlet, 0.0);
}

#[test]
fn exact_inputs_carry_no_uncertainty() {
    let analysis = run(&fixed_u_parameters("", 1500.0, 100)).expect("analysis");
    assert_eq!(analysis.uncertainty, None);
}

#[test]
fn area_helpers() {
    assert_relative_eq!(required_area(10_000.0, 1000.0, 20.0).unwrap(), 0.5);
    assert!(matches!(
        required_area(10_000.0, 0.0, 20.0),
        Err(DomainError::NonPositive { .. })
    ));
    assert!(required_area(10_000.0, 1000.0, 0.0).is_err());
    assert_eq!(plates_for_area(1.5, 0.5), 3);
    assert_eq!(plates_for_area(1.6, 0.5), 4);
    assert_eq!(plates_for_area(1e-6, 0.5), 1);
}

#[test]
fn repeated_runs_are_identical() {
    let text = fixed_u_parameters("", 1500.0, 100);
    assert_eq!(run(&text).unwrap(), run(&text).unwrap());
}

fn sample_parameters() -> ParameterSet {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/parameters.toml");
    ParameterSet::load(path).expect("sample parameter file")
}

#[test]
fn sample_file_selects_the_first_sufficient_plate_count() {
    let params = sample_parameters();
    let analysis = exchanger::run(&params).expect("analysis");
    assert_eq!(analysis.hot_coolant, "dielectric oil");
    assert_eq!(analysis.cold_coolant, "water");

    let step = analysis.selected_step().expect("solution within plate_max_count");
    assert!(step.is_sufficient());
    assert_eq!(Some(step.plates), analysis.plate_count());
    for earlier in &analysis.sweep[..analysis.sweep.len() - 1] {
        assert!(!earlier.is_sufficient());
    }

    // 대류 모델: U는 양쪽 h 중 작은 값보다 작다
    let h_hot = step.hot.convective_coefficient.expect("hot h");
    let h_cold = step.cold.convective_coefficient.expect("cold h");
    assert!(step.overall_coefficient < h_hot.min(h_cold));
    assert!(step.hot.pressure_drop() > 0.0);
    assert!(step.cold.pressure_drop() > 0.0);
}

#[test]
fn sample_file_is_deterministic() {
    let first = exchanger::run(&sample_parameters()).expect("analysis");
    let second = exchanger::run(&sample_parameters()).expect("analysis");
    assert_eq!(first, second);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn plate_count_matches_required_area(overall_u in 200.0f64..5000.0) {
        let analysis = run(&fixed_u_parameters("", overall_u, 1000)).unwrap();
        let area = 10_000.0 / (overall_u * analysis.thermal.lmtd);
        let expected = plates_for_area(area, 0.1 * 0.3);
        prop_assert_eq!(analysis.plate_count(), Some(expected));
    }
}
