use serde::{Deserialize, Serialize};

use super::UnitScale;

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Centimeter,
    Micrometer,
    Inch,
    Foot,
}

impl UnitScale for LengthUnit {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "m" | "meter" | "metre" => Some(LengthUnit::Meter),
            "mm" | "millimeter" => Some(LengthUnit::Millimeter),
            "cm" | "centimeter" => Some(LengthUnit::Centimeter),
            "um" | "µm" | "micrometer" => Some(LengthUnit::Micrometer),
            "in" | "inch" => Some(LengthUnit::Inch),
            "ft" | "foot" => Some(LengthUnit::Foot),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Micrometer => "µm",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            LengthUnit::Meter => value,
            LengthUnit::Millimeter => value / 1000.0,
            LengthUnit::Centimeter => value / 100.0,
            LengthUnit::Micrometer => value / 1_000_000.0,
            LengthUnit::Inch => value * 0.0254,
            LengthUnit::Foot => value * 0.3048,
        }
    }

    fn from_base(self, value_m: f64) -> f64 {
        match self {
            LengthUnit::Meter => value_m,
            LengthUnit::Millimeter => value_m * 1000.0,
            LengthUnit::Centimeter => value_m * 100.0,
            LengthUnit::Micrometer => value_m * 1_000_000.0,
            LengthUnit::Inch => value_m / 0.0254,
            LengthUnit::Foot => value_m / 0.3048,
        }
    }
}
