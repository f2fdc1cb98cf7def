use tracing::debug;

use crate::error::{ConfigError, DomainError, HxError};
use crate::fluid::WaterProperties;
use crate::params::ParameterSet;
use crate::quantity::QuantityKind;

/// IF97 조회 시 압력이 없으면 쓰는 대기압(bar, 절대).
pub const ATMOSPHERIC_PRESSURE_BAR: f64 = 1.01325;

/// 열교환기 한쪽 유로를 흐르는 냉각 유체의 물성 세트. 모든 값은 SI 기준이다.
#[derive(Debug, Clone, PartialEq)]
pub struct Coolant {
    pub name: String,
    /// 밀도 [kg/m³]
    pub density: f64,
    /// 점도 [Pa·s]
    pub dynamic_viscosity: f64,
    /// 프란틀수
    pub prandtl_number: f64,
    /// 비열 [J/kg·K]
    pub specific_heat: f64,
    /// 열전도율 [W/m·K]
    pub thermal_conductivity: f64,
}

impl Coolant {
    /// 파라미터 섹션(`hot-coolant` 등)에서 물성을 읽는다.
    ///
    /// `fluid = "water"`인 섹션은 빠진 물성을 IF97로 `temperature_k`, `pressure`에서 계산해 채운다.
    /// 직접 적힌 물성이 항상 우선한다.
    pub fn from_parameters(
        params: &ParameterSet,
        section: &str,
        temperature_k: f64,
    ) -> Result<Self, HxError> {
        let key = |name: &str| format!("{section}.{name}");
        let name = params
            .optional_text(&key("name"))
            .unwrap_or_else(|| section.to_string());

        let water = match params.optional_text(&key("fluid")).as_deref() {
            None => None,
            Some(f) if f.eq_ignore_ascii_case("water") => {
                let pressure_bar = params
                    .optional_positive_quantity(&key("pressure"), QuantityKind::Pressure)?
                    .map(|pa| pa / 100_000.0)
                    .unwrap_or(ATMOSPHERIC_PRESSURE_BAR);
                let temperature_c = temperature_k - 273.15;
                debug!(section, temperature_c, pressure_bar, "looking up IF97 water properties");
                Some(WaterProperties::at(temperature_c, pressure_bar)?)
            }
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: key("fluid"),
                    reason: format!("unknown fluid {other:?}, expected \"water\""),
                }
                .into())
            }
        };

        let property =
            |name: &str, kind: QuantityKind, fallback: Option<f64>| -> Result<f64, ConfigError> {
                let k = key(name);
                match params.optional_positive_quantity(&k, kind)? {
                    Some(v) => Ok(v),
                    None => fallback.ok_or(ConfigError::MissingKey(k)),
                }
            };

        let density = property("density", QuantityKind::Density, water.map(|w| w.density))?;
        let dynamic_viscosity = property(
            "dynamic_viscosity",
            QuantityKind::Viscosity,
            water.map(|w| w.dynamic_viscosity),
        )?;
        let specific_heat = property(
            "specific_heat",
            QuantityKind::SpecificHeat,
            water.map(|w| w.specific_heat),
        )?;
        let thermal_conductivity = property(
            "thermal_conductivity",
            QuantityKind::ThermalConductivity,
            water.map(|w| w.thermal_conductivity),
        )?;
        let prandtl_number = property(
            "prandtl_number",
            QuantityKind::Dimensionless,
            water.map(|_| dynamic_viscosity * specific_heat / thermal_conductivity),
        )?;

        Ok(Self {
            name,
            density,
            dynamic_viscosity,
            prandtl_number,
            specific_heat,
            thermal_conductivity,
        })
    }

    /// 열량 `heat_w`[W]가 유량 `mass_flow`[kg/s]에 전달될 때의 온도 변화[K]. 부호는 열량을 따른다.
    pub fn temperature_change(&self, heat_w: f64, mass_flow: f64) -> Result<f64, DomainError> {
        let capacity_rate = mass_flow * self.specific_heat;
        if capacity_rate <= 0.0 || !capacity_rate.is_finite() {
            return Err(DomainError::NonPositive {
                what: "capacitance rate",
                value: capacity_rate,
            });
        }
        Ok(heat_w / capacity_rate)
    }

    /// 유량 `mass_flow`의 온도가 `delta_k`만큼 변할 때의 열량[W].
    pub fn heat_flow(&self, mass_flow: f64, delta_k: f64) -> f64 {
        mass_flow * self.specific_heat * delta_k
    }

    /// 레이놀즈수 Re = ρ·v·Dh/μ.
    pub fn reynolds_number(&self, velocity: f64, hydraulic_diameter: f64) -> f64 {
        self.density * velocity * hydraulic_diameter / self.dynamic_viscosity
    }

    /// 대류 열전달계수 h = Nu·k/Dh [W/m²·K].
    pub fn convective_coefficient(&self, nusselt: f64, hydraulic_diameter: f64) -> f64 {
        nusselt * self.thermal_conductivity / hydraulic_diameter
    }
}
