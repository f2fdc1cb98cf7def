use serde::{Deserialize, Serialize};

use super::UnitScale;

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareCentimeter,
    SquareMillimeter,
    SquareFoot,
}

impl UnitScale for AreaUnit {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "m2" | "m^2" | "sqm" => Some(AreaUnit::SquareMeter),
            "cm2" | "cm^2" => Some(AreaUnit::SquareCentimeter),
            "mm2" | "mm^2" => Some(AreaUnit::SquareMillimeter),
            "ft2" | "ft^2" | "sqft" => Some(AreaUnit::SquareFoot),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "m²",
            AreaUnit::SquareCentimeter => "cm²",
            AreaUnit::SquareMillimeter => "mm²",
            AreaUnit::SquareFoot => "ft²",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            AreaUnit::SquareMeter => value,
            AreaUnit::SquareCentimeter => value / 1.0e4,
            AreaUnit::SquareMillimeter => value / 1.0e6,
            AreaUnit::SquareFoot => value * 0.092903,
        }
    }

    fn from_base(self, value_m2: f64) -> f64 {
        match self {
            AreaUnit::SquareMeter => value_m2,
            AreaUnit::SquareCentimeter => value_m2 * 1.0e4,
            AreaUnit::SquareMillimeter => value_m2 * 1.0e6,
            AreaUnit::SquareFoot => value_m2 / 0.092903,
        }
    }
}
