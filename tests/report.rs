use plate_hx::config::{self, Settings};
use plate_hx::exchanger;
use plate_hx::i18n::{self, keys, Language, Translator};
use plate_hx::report;
use plate_hx::ParameterSet;

const PARAMETERS: &str = r#"
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
plate_max_count = 100
corrugation_angle = 45
overall_heat_transfer_coefficient = 1500

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
"#;

fn render(params: &str, lang: &str, sweep: bool) -> String {
    let params = ParameterSet::from_toml_str(params).unwrap();
    let analysis = exchanger::run(&params).unwrap();
    report::render(&analysis, &Settings::default(), &Translator::new(lang), sweep)
}

#[test]
fn english_report_lists_labels_with_units() {
    let text = render(PARAMETERS, "en", false);
    assert!(text.starts_with("=== Plate Heat Exchanger Results ==="));
    assert!(text.contains("Hot Coolant :: oil\n"));
    assert!(text.contains("Hot Coolant Ti :: 60.000 °C\n"));
    assert!(text.contains("Hot Coolant To :: 50.000 °C\n"));
    assert!(text.contains("Hot Coolant ΔT :: -10.000 Δ°C\n"));
    assert!(text.contains("Heat Duty :: 10.000 kW\n"));
    assert!(text.contains("Plates Required :: 8\n"));
    assert!(!text.contains("P_used"));
}

#[test]
fn uncertain_inputs_are_reported_with_their_spread() {
    let text = render(
        &PARAMETERS.replace("energy = \"10 kW\"", "energy = \"(10 +/- 0.1) kW\""),
        "en",
        false,
    );
    assert!(text.contains("Heat Duty :: 10.000 ± 0.100 kW\n"), "{text}");
    assert!(text.contains("Hot Coolant To :: 50.000 ± 0.100 °C\n"), "{text}");
    assert!(text.contains("Plates Required :: 8\n"));

    let exact = render(PARAMETERS, "en", false);
    assert!(!exact.contains('±'));
}

#[test]
fn korean_report_and_sweep_rows() {
    let text = render(PARAMETERS, "ko", true);
    assert!(text.contains("필요 판 매수 :: 8\n"));
    assert!(text.contains("판 매수, 필요 매수"));
    // 1~8장 평가 행
    let rows = text
        .lines()
        .skip_while(|l| !l.starts_with("판 매수,"))
        .skip(1)
        .count();
    assert_eq!(rows, 8);
}

#[test]
fn no_solution_is_reported() {
    let text = render(
        &PARAMETERS.replace("plate_max_count = 100", "plate_max_count = 2"),
        "en",
        false,
    );
    assert!(text.contains("Plates Required :: No Solution\n"));
    assert!(text.contains("Warnings:"));
}

#[test]
fn translator_falls_back_to_english() {
    let tr = Translator::new("fr");
    assert_eq!(tr.language(), Language::En);
    assert_eq!(tr.t(keys::PLATES_REQUIRED), "Plates Required");
    assert_eq!(Translator::new("ko-KR").t(keys::NO_SOLUTION), "해 없음");
}

#[test]
fn explicit_language_wins_over_settings() {
    assert_eq!(i18n::resolve_language("ko", Some("en")), "ko");
    assert_eq!(i18n::resolve_language("auto", Some("en")), "en");
    assert_eq!(i18n::resolve_language("EN_us", None), "en");
}

#[test]
fn missing_settings_file_is_created_with_defaults() {
    let path = std::env::temp_dir().join(format!("plate_hx_settings_{}.toml", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let settings = config::load_or_default(&path).expect("settings");
    assert_eq!(settings, Settings::default());
    assert!(path.exists());

    let reloaded = config::load_or_default(&path).expect("settings");
    assert_eq!(reloaded, settings);
    let _ = std::fs::remove_file(&path);
}
