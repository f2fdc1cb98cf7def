use serde::{Deserialize, Serialize};

use super::UnitScale;

/// 질량 유량 단위. 내부 기준은 kg/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassFlowUnit {
    KgPerSecond,
    KgPerMinute,
    KgPerHour,
    GramPerSecond,
    PoundPerHour,
}

impl UnitScale for MassFlowUnit {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "kg/s" => Some(MassFlowUnit::KgPerSecond),
            "kg/min" => Some(MassFlowUnit::KgPerMinute),
            "kg/h" | "kg/hr" => Some(MassFlowUnit::KgPerHour),
            "g/s" => Some(MassFlowUnit::GramPerSecond),
            "lb/h" | "lb/hr" | "lbm/h" => Some(MassFlowUnit::PoundPerHour),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            MassFlowUnit::KgPerSecond => "kg/s",
            MassFlowUnit::KgPerMinute => "kg/min",
            MassFlowUnit::KgPerHour => "kg/h",
            MassFlowUnit::GramPerSecond => "g/s",
            MassFlowUnit::PoundPerHour => "lb/h",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            MassFlowUnit::KgPerSecond => value,
            MassFlowUnit::KgPerMinute => value / 60.0,
            MassFlowUnit::KgPerHour => value / 3600.0,
            MassFlowUnit::GramPerSecond => value / 1000.0,
            MassFlowUnit::PoundPerHour => value * 0.453_592_37 / 3600.0,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            MassFlowUnit::KgPerSecond => value,
            MassFlowUnit::KgPerMinute => value * 60.0,
            MassFlowUnit::KgPerHour => value * 3600.0,
            MassFlowUnit::GramPerSecond => value * 1000.0,
            MassFlowUnit::PoundPerHour => value * 3600.0 / 0.453_592_37,
        }
    }
}
