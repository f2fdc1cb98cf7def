//! 판 유로의 유속과 압력손실.

use std::f64::consts::PI;

/// 포트 압력손실 계수(속도수두 배수).
pub const PORT_LOSS_COEFFICIENT: f64 = 1.4;

/// 유량을 `channels`개 유로로 나눠 흘릴 때 유로 하나의 평균 유속 [m/s].
pub fn channel_velocity(mass_flow: f64, density: f64, channel_area: f64, channels: u32) -> f64 {
    mass_flow / density / channel_area / f64::from(channels.max(1))
}

/// Darcy-Weisbach 식의 유로 마찰 압력손실 [Pa].
///
/// ΔP = f · (L/Dh) · ρ · v² / 2
pub fn channel_pressure_drop(
    friction_factor: f64,
    flow_length: f64,
    hydraulic_diameter: f64,
    density: f64,
    velocity: f64,
) -> f64 {
    friction_factor * (flow_length / hydraulic_diameter) * density * velocity * velocity / 2.0
}

/// 포트(입출구 구멍)를 통과하는 전체 유량의 유속 [m/s].
pub fn port_velocity(mass_flow: f64, density: f64, port_diameter: f64) -> f64 {
    let area = PI * port_diameter * port_diameter / 4.0;
    mass_flow / density / area
}

/// 포트 압력손실 [Pa]. ΔP = 1.4 · ρ · v² / 2
pub fn port_pressure_drop(density: f64, port_velocity: f64) -> f64 {
    PORT_LOSS_COEFFICIENT * density * port_velocity * port_velocity / 2.0
}
