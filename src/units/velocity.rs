use serde::{Deserialize, Serialize};

use super::UnitScale;

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    MillimeterPerSecond,
    FootPerSecond,
}

impl UnitScale for VelocityUnit {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "m/s" | "mps" => Some(VelocityUnit::MeterPerSecond),
            "mm/s" => Some(VelocityUnit::MillimeterPerSecond),
            "ft/s" | "fps" => Some(VelocityUnit::FootPerSecond),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::MillimeterPerSecond => "mm/s",
            VelocityUnit::FootPerSecond => "ft/s",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            VelocityUnit::MeterPerSecond => value,
            VelocityUnit::MillimeterPerSecond => value / 1000.0,
            VelocityUnit::FootPerSecond => value * 0.3048,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            VelocityUnit::MeterPerSecond => value,
            VelocityUnit::MillimeterPerSecond => value * 1000.0,
            VelocityUnit::FootPerSecond => value / 0.3048,
        }
    }
}
