use serde::{Deserialize, Serialize};

use super::UnitScale;

/// 동력(열량) 단위. 내부 기준은 W이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    Megawatt,
    KcalPerHour,
    BtuPerHour,
}

impl UnitScale for PowerUnit {
    fn from_prefixed_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "MW" => Some(PowerUnit::Megawatt),
            _ => None,
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "w" | "watt" | "j/s" => Some(PowerUnit::Watt),
            "kw" | "kilowatt" | "kj/s" => Some(PowerUnit::Kilowatt),
            "megawatt" => Some(PowerUnit::Megawatt),
            "kcal/h" | "kcal/hr" => Some(PowerUnit::KcalPerHour),
            "btu/h" | "btu/hr" => Some(PowerUnit::BtuPerHour),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            PowerUnit::Watt => "W",
            PowerUnit::Kilowatt => "kW",
            PowerUnit::Megawatt => "MW",
            PowerUnit::KcalPerHour => "kcal/h",
            PowerUnit::BtuPerHour => "Btu/h",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            PowerUnit::Watt => value,
            PowerUnit::Kilowatt => value * 1000.0,
            PowerUnit::Megawatt => value * 1.0e6,
            PowerUnit::KcalPerHour => value * 4184.0 / 3600.0,
            PowerUnit::BtuPerHour => value * 0.293_071,
        }
    }

    fn from_base(self, value_w: f64) -> f64 {
        match self {
            PowerUnit::Watt => value_w,
            PowerUnit::Kilowatt => value_w / 1000.0,
            PowerUnit::Megawatt => value_w / 1.0e6,
            PowerUnit::KcalPerHour => value_w * 3600.0 / 4184.0,
            PowerUnit::BtuPerHour => value_w / 0.293_071,
        }
    }
}
