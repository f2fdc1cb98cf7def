use serde::{Deserialize, Serialize};

use super::UnitScale;

/// 각도 단위. 상관식이 도(°) 단위 계수를 쓰므로 내부 기준은 도이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleUnit {
    Degree,
    Radian,
}

impl UnitScale for AngleUnit {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "deg" | "degree" | "degrees" | "°" => Some(AngleUnit::Degree),
            "rad" | "radian" | "radians" => Some(AngleUnit::Radian),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            AngleUnit::Degree => "°",
            AngleUnit::Radian => "rad",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degree => value,
            AngleUnit::Radian => value.to_degrees(),
        }
    }

    fn from_base(self, value_deg: f64) -> f64 {
        match self {
            AngleUnit::Degree => value_deg,
            AngleUnit::Radian => value_deg.to_radians(),
        }
    }
}
