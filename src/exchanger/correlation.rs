//! 주름(chevron) 판 유로의 마찰계수와 누셀트수 상관식.

use std::ops::RangeInclusive;

use crate::error::DomainError;

/// Muley–Manglik 마찰계수식이 검증된 레이놀즈수 범위.
pub const FRICTION_REYNOLDS_RANGE: RangeInclusive<f64> = 2.0..=1.0e4;
/// Muley–Manglik 마찰계수식이 검증된 주름각 범위 [°].
pub const FRICTION_ANGLE_RANGE: RangeInclusive<f64> = 30.0..=60.0;

/// Gnielinski 식은 Re가 이 값 이하에서 음의 누셀트수를 준다.
const GNIELINSKI_MIN_REYNOLDS: f64 = 1000.0;

/// Muley–Manglik 형태의 (Darcy) 마찰계수.
///
/// f = (β/30)^0.83 · ((30.2/Re)^5 + (6.28/Re^0.5)^5)^0.2
///
/// 두 항 모두 Re에 대해 감소하므로 f는 Re에 대해 단조 감소한다.
pub fn friction_factor(reynolds: f64, corrugation_angle_deg: f64) -> Result<f64, DomainError> {
    if !(reynolds.is_finite() && reynolds > 0.0) {
        return Err(DomainError::OutsideCorrelation {
            correlation: "Muley-Manglik friction factor",
            what: "Reynolds number",
            value: reynolds,
        });
    }
    if !(corrugation_angle_deg.is_finite() && corrugation_angle_deg > 0.0) {
        return Err(DomainError::OutsideCorrelation {
            correlation: "Muley-Manglik friction factor",
            what: "corrugation angle",
            value: corrugation_angle_deg,
        });
    }
    let laminar = (30.2 / reynolds).powi(5);
    let turbulent = (6.28 / reynolds.sqrt()).powi(5);
    Ok((corrugation_angle_deg / 30.0).powf(0.83) * (laminar + turbulent).powf(0.2))
}

/// 누셀트수 상관식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NusseltCorrelation {
    /// Nu = C·Re^m·Pr^n
    PowerLaw {
        coefficient: f64,
        reynolds_exponent: f64,
        prandtl_exponent: f64,
    },
    /// 마찰계수를 쓰는 Gnielinski 식. Re > 1000에서만 정의된다.
    Gnielinski,
}

impl Default for NusseltCorrelation {
    fn default() -> Self {
        NusseltCorrelation::PowerLaw {
            coefficient: 0.1381,
            reynolds_exponent: 0.75,
            prandtl_exponent: 0.333,
        }
    }
}

impl NusseltCorrelation {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "power-law" | "power_law" | "powerlaw" => Some(Self::default()),
            "gnielinski" => Some(NusseltCorrelation::Gnielinski),
            _ => None,
        }
    }

    /// 누셀트수를 계산한다. `friction_factor`는 Gnielinski 식에서만 쓰인다.
    pub fn nusselt(
        &self,
        reynolds: f64,
        prandtl: f64,
        friction_factor: f64,
    ) -> Result<f64, DomainError> {
        let nu = match *self {
            NusseltCorrelation::PowerLaw {
                coefficient,
                reynolds_exponent,
                prandtl_exponent,
            } => coefficient * reynolds.powf(reynolds_exponent) * prandtl.powf(prandtl_exponent),
            NusseltCorrelation::Gnielinski => {
                if reynolds <= GNIELINSKI_MIN_REYNOLDS {
                    return Err(DomainError::OutsideCorrelation {
                        correlation: "Gnielinski Nusselt number",
                        what: "Reynolds number",
                        value: reynolds,
                    });
                }
                let f8 = friction_factor / 8.0;
                (f8 * (reynolds - GNIELINSKI_MIN_REYNOLDS) * prandtl)
                    / (1.0 + 12.7 * f8.sqrt() * (prandtl.powf(2.0 / 3.0) - 1.0))
            }
        };
        if nu.is_finite() && nu > 0.0 {
            Ok(nu)
        } else {
            Err(DomainError::NonPositive {
                what: "Nusselt number",
                value: nu,
            })
        }
    }
}
