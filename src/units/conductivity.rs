use serde::{Deserialize, Serialize};

use super::UnitScale;

/// 열전도율 단위. 내부 기준은 W/m·K이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConductivityUnit {
    WPerMeterK,
    BtuPerHourFootF,
}

impl UnitScale for ConductivityUnit {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "w/mk" | "w/m*k" | "w/m/k" | "w/m/degc" | "w/m*degc" => {
                Some(ConductivityUnit::WPerMeterK)
            }
            "btu/h-ft-f" | "btu/h*ft*f" | "btu/h/ft/f" => Some(ConductivityUnit::BtuPerHourFootF),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            ConductivityUnit::WPerMeterK => "W/(m·K)",
            ConductivityUnit::BtuPerHourFootF => "Btu/(h·ft·°F)",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            ConductivityUnit::WPerMeterK => value,
            ConductivityUnit::BtuPerHourFootF => value * 1.730735,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            ConductivityUnit::WPerMeterK => value,
            ConductivityUnit::BtuPerHourFootF => value / 1.730735,
        }
    }
}
