use serde::{Deserialize, Serialize};

use super::UnitScale;

/// 밀도 단위. 내부 기준은 kg/m³이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    KgPerCubicMeter,
    GramPerCubicCentimeter,
    KgPerLiter,
    PoundPerCubicFoot,
}

impl UnitScale for DensityUnit {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "kg/m3" | "kg/m^3" => Some(DensityUnit::KgPerCubicMeter),
            "g/cm3" | "g/cm^3" | "g/ml" | "g/cc" => Some(DensityUnit::GramPerCubicCentimeter),
            "kg/l" => Some(DensityUnit::KgPerLiter),
            "lb/ft3" | "lb/ft^3" => Some(DensityUnit::PoundPerCubicFoot),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            DensityUnit::KgPerCubicMeter => "kg/m³",
            DensityUnit::GramPerCubicCentimeter => "g/cm³",
            DensityUnit::KgPerLiter => "kg/L",
            DensityUnit::PoundPerCubicFoot => "lb/ft³",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            DensityUnit::KgPerCubicMeter => value,
            DensityUnit::GramPerCubicCentimeter | DensityUnit::KgPerLiter => value * 1000.0,
            DensityUnit::PoundPerCubicFoot => value * 16.018_46,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            DensityUnit::KgPerCubicMeter => value,
            DensityUnit::GramPerCubicCentimeter | DensityUnit::KgPerLiter => value / 1000.0,
            DensityUnit::PoundPerCubicFoot => value / 16.018_46,
        }
    }
}
