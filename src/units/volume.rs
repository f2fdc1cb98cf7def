use serde::{Deserialize, Serialize};

use super::UnitScale;

/// 체적 단위. 내부 기준은 입방미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    Liter,
    Milliliter,
    CubicCentimeter,
}

impl UnitScale for VolumeUnit {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "m3" | "m^3" => Some(VolumeUnit::CubicMeter),
            "l" | "liter" | "litre" => Some(VolumeUnit::Liter),
            "ml" | "milliliter" => Some(VolumeUnit::Milliliter),
            "cm3" | "cm^3" | "cc" => Some(VolumeUnit::CubicCentimeter),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::CubicMeter => "m³",
            VolumeUnit::Liter => "L",
            VolumeUnit::Milliliter => "mL",
            VolumeUnit::CubicCentimeter => "cm³",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            VolumeUnit::CubicMeter => value,
            VolumeUnit::Liter => value / 1000.0,
            VolumeUnit::Milliliter | VolumeUnit::CubicCentimeter => value / 1_000_000.0,
        }
    }

    fn from_base(self, value_m3: f64) -> f64 {
        match self {
            VolumeUnit::CubicMeter => value_m3,
            VolumeUnit::Liter => value_m3 * 1000.0,
            VolumeUnit::Milliliter | VolumeUnit::CubicCentimeter => value_m3 * 1_000_000.0,
        }
    }
}
