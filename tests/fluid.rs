//! 냉각 유체 물성 테스트. 물은 IAPWS-IF97 값과 비교한다.
use approx::assert_relative_eq;
use plate_hx::fluid::{Coolant, WaterProperties};
use plate_hx::ParameterSet;

#[test]
fn water_at_room_temperature() {
    let w = WaterProperties::at(20.0, 1.01325).expect("IF97");
    assert_relative_eq!(w.density, 998.2, max_relative = 1e-3);
    assert_relative_eq!(w.dynamic_viscosity, 1.0016e-3, max_relative = 2e-2);
    assert_relative_eq!(w.specific_heat, 4184.0, max_relative = 2e-3);
    assert_relative_eq!(w.thermal_conductivity, 0.598, max_relative = 2e-2);
    assert_relative_eq!(w.prandtl_number(), 7.0, max_relative = 5e-2);
}

#[test]
fn water_section_fills_missing_properties() {
    let params = ParameterSet::from_toml_str(
        r#"
        [cold-coolant]
        fluid = "water"
        density = "1 g/cm^3"
        "#,
    )
    .unwrap();
    let coolant = Coolant::from_parameters(&params, "cold-coolant", 293.15).expect("coolant");
    // 직접 적은 물성이 우선한다
    assert_relative_eq!(coolant.density, 1000.0, max_relative = 1e-12);
    assert_eq!(coolant.name, "cold-coolant");
    assert_relative_eq!(coolant.specific_heat, 4184.0, max_relative = 2e-3);
    assert_relative_eq!(
        coolant.prandtl_number,
        coolant.dynamic_viscosity * coolant.specific_heat / coolant.thermal_conductivity,
        max_relative = 1e-12
    );
}

#[test]
fn explicit_property_set() {
    let params = ParameterSet::from_toml_str(
        r#"
        [hot-coolant]
        name = "dielectric oil"
        density = "850 kg/m^3"
        dynamic_viscosity = "10 cP"
        prandtl_number = 150
        specific_heat = "2 kJ/(kg K)"
        thermal_conductivity = "0.13 W/(m K)"
        "#,
    )
    .unwrap();
    let oil = Coolant::from_parameters(&params, "hot-coolant", 333.15).expect("coolant");
    assert_eq!(oil.name, "dielectric oil");
    assert_relative_eq!(oil.dynamic_viscosity, 0.01, max_relative = 1e-12);
    assert_relative_eq!(oil.specific_heat, 2000.0, max_relative = 1e-12);

    // 10 kW가 0.5 kg/s에 전달되면 10 K
    assert_relative_eq!(
        oil.temperature_change(10_000.0, 0.5).unwrap(),
        10.0,
        max_relative = 1e-12
    );
    assert!(oil.temperature_change(10_000.0, 0.0).is_err());
    assert_relative_eq!(
        oil.reynolds_number(1.0, 0.004),
        850.0 * 0.004 / 0.01,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        oil.convective_coefficient(20.0, 0.004),
        20.0 * 0.13 / 0.004,
        max_relative = 1e-12
    );
}
