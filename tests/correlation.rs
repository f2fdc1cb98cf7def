use approx::assert_relative_eq;
use plate_hx::error::DomainError;
use plate_hx::exchanger::correlation::{friction_factor, NusseltCorrelation};
use plate_hx::exchanger::hydraulics;
use proptest::prelude::*;

#[test]
fn friction_factor_matches_closed_form() {
    let re: f64 = 500.0;
    let expected = (1.5_f64).powf(0.83)
        * ((30.2 / re).powi(5) + (6.28 / re.sqrt()).powi(5)).powf(0.2);
    let f = friction_factor(re, 45.0).expect("friction");
    assert_relative_eq!(f, expected, max_relative = 1e-12);
}

#[test]
fn friction_factor_scales_with_corrugation_angle() {
    let f30 = friction_factor(1000.0, 30.0).unwrap();
    let f60 = friction_factor(1000.0, 60.0).unwrap();
    assert_relative_eq!(f60 / f30, 2.0_f64.powf(0.83), max_relative = 1e-12);
}

#[test]
fn friction_factor_rejects_non_positive_inputs() {
    assert!(matches!(
        friction_factor(0.0, 45.0),
        Err(DomainError::OutsideCorrelation { .. })
    ));
    assert!(friction_factor(-10.0, 45.0).is_err());
    assert!(friction_factor(100.0, 0.0).is_err());
}

#[test]
fn power_law_nusselt_uses_default_constants() {
    let nu = NusseltCorrelation::default()
        .nusselt(1000.0, 5.0, 0.0)
        .expect("nusselt");
    let expected = 0.1381 * 1000.0_f64.powf(0.75) * 5.0_f64.powf(0.333);
    assert_relative_eq!(nu, expected, max_relative = 1e-12);
}

#[test]
fn gnielinski_requires_turbulent_reynolds_number() {
    let gnielinski = NusseltCorrelation::Gnielinski;
    assert!(matches!(
        gnielinski.nusselt(800.0, 5.0, 0.05),
        Err(DomainError::OutsideCorrelation { .. })
    ));
    let nu = gnielinski.nusselt(5000.0, 5.0, 0.05).expect("nusselt");
    let f8: f64 = 0.05 / 8.0;
    let expected = f8 * 4000.0 * 5.0 / (1.0 + 12.7 * f8.sqrt() * (5.0_f64.powf(2.0 / 3.0) - 1.0));
    assert_relative_eq!(nu, expected, max_relative = 1e-12);
}

#[test]
fn correlation_names() {
    assert_eq!(
        NusseltCorrelation::from_name("Gnielinski"),
        Some(NusseltCorrelation::Gnielinski)
    );
    assert_eq!(
        NusseltCorrelation::from_name("power-law"),
        Some(NusseltCorrelation::default())
    );
    assert_eq!(NusseltCorrelation::from_name("dittus-boelter"), None);
}

#[test]
fn channel_flow_splits_across_plates() {
    let one = hydraulics::channel_velocity(0.5, 1000.0, 2e-4, 1);
    let four = hydraulics::channel_velocity(0.5, 1000.0, 2e-4, 4);
    assert_relative_eq!(one, 2.5, max_relative = 1e-12);
    assert_relative_eq!(four, one / 4.0, max_relative = 1e-12);
}

#[test]
fn darcy_and_port_losses() {
    // f=0.1, L/Dh=100, ρ=1000, v=1 → 5 kPa
    let dp = hydraulics::channel_pressure_drop(0.1, 0.4, 0.004, 1000.0, 1.0);
    assert_relative_eq!(dp, 5000.0, max_relative = 1e-12);
    assert_relative_eq!(
        hydraulics::port_pressure_drop(1000.0, 2.0),
        2800.0,
        max_relative = 1e-12
    );
    let v = hydraulics::port_velocity(1.0, 1000.0, 0.05);
    assert_relative_eq!(
        v,
        1.0 / 1000.0 / (std::f64::consts::PI * 0.05 * 0.05 / 4.0),
        max_relative = 1e-12
    );
}

proptest! {
    #[test]
    fn friction_factor_decreases_with_reynolds(
        re in 2.0f64..1.0e4,
        factor in 1.01f64..10.0,
        angle in 30.0f64..=60.0,
    ) {
        let low = friction_factor(re, angle).unwrap();
        let high = friction_factor(re * factor, angle).unwrap();
        prop_assert!(high < low);
        prop_assert!(high > 0.0);
    }
}
