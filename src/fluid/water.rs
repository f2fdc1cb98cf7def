//! IAPWS-IF97 물 물성 조회를 seuif97 크레이트로 위임한 래퍼.
//! 입력: 온도(°C), 압력(bar, 절대)
//! 출력: SI 기준 물성(kg/m³, Pa·s, J/kg·K, W/m·K)

use seuif97::{pt, OCP, OD, ODV, OTC};

use crate::error::DomainError;

/// 열교환 계산에 필요한 물 물성.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterProperties {
    pub density: f64,
    pub dynamic_viscosity: f64,
    pub specific_heat: f64,
    pub thermal_conductivity: f64,
}

impl WaterProperties {
    /// 주어진 온도/압력에서 물성을 계산한다.
    pub fn at(temperature_c: f64, pressure_bar_abs: f64) -> Result<Self, DomainError> {
        let p_mpa = pressure_bar_abs / 10.0;
        let lookup = |property: &'static str, o_id: i32| {
            let value = pt(p_mpa, temperature_c, o_id);
            if value.is_finite() && value > 0.0 {
                Ok(value)
            } else {
                Err(DomainError::PropertyLookup {
                    property,
                    temperature_c,
                    pressure_bar: pressure_bar_abs,
                })
            }
        };
        Ok(Self {
            density: lookup("density", OD)?,
            dynamic_viscosity: lookup("dynamic viscosity", ODV)?,
            // seuif97은 kJ/(kg·K)로 돌려준다
            specific_heat: lookup("specific heat", OCP)? * 1000.0,
            thermal_conductivity: lookup("thermal conductivity", OTC)?,
        })
    }

    pub fn prandtl_number(&self) -> f64 {
        self.dynamic_viscosity * self.specific_heat / self.thermal_conductivity
    }
}
