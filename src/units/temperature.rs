use serde::{Deserialize, Serialize};

use super::UnitScale;

/// 온도 단위를 정의한다. 내부 기준은 켈빈이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

impl TemperatureUnit {
    /// 켈빈 기준 온도차를 이 단위의 온도차로 바꾼다. 기준점 없이 배율만 고려한다.
    pub fn difference_from_kelvin(self, delta_k: f64) -> f64 {
        match self {
            TemperatureUnit::Kelvin | TemperatureUnit::Celsius => delta_k,
            TemperatureUnit::Fahrenheit | TemperatureUnit::Rankine => delta_k * 9.0 / 5.0,
        }
    }

    /// 온도차 출력용 단위 기호.
    pub fn difference_symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "Δ°C",
            TemperatureUnit::Fahrenheit => "Δ°F",
            TemperatureUnit::Rankine => "°R",
        }
    }
}

impl UnitScale for TemperatureUnit {
    fn from_symbol(symbol: &str) -> Option<Self> {
        // 절대 온도만 받는다. delta_degC 같은 온도차 기호는 거부한다
        match symbol {
            "k" | "kelvin" => Some(TemperatureUnit::Kelvin),
            "c" | "degc" | "°c" | "celsius" => Some(TemperatureUnit::Celsius),
            "f" | "degf" | "°f" | "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            "r" | "degr" | "°r" | "rankine" => Some(TemperatureUnit::Rankine),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Rankine => "°R",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Kelvin => value,
            TemperatureUnit::Celsius => value + 273.15,
            TemperatureUnit::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
            TemperatureUnit::Rankine => value * 5.0 / 9.0,
        }
    }

    fn from_base(self, value_k: f64) -> f64 {
        match self {
            TemperatureUnit::Kelvin => value_k,
            TemperatureUnit::Celsius => value_k - 273.15,
            TemperatureUnit::Fahrenheit => value_k * 9.0 / 5.0 - 459.67,
            TemperatureUnit::Rankine => value_k * 9.0 / 5.0,
        }
    }
}
