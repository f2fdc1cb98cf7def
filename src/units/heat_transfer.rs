use serde::{Deserialize, Serialize};

use super::UnitScale;

/// 열전달계수(U, h) 단위. 내부 기준은 W/m²·K이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatTransferUnit {
    WPerSquareMeterK,
    KwPerSquareMeterK,
    BtuPerHourSquareFootF,
}

impl UnitScale for HeatTransferUnit {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "w/m2k" | "w/m^2k" | "w/m^2*k" | "w/m^2/k" | "w/m2/k" | "w/m^2/degc"
            | "w/m^2*degc" | "w/m2/degc" => Some(HeatTransferUnit::WPerSquareMeterK),
            "kw/m2k" | "kw/m^2k" | "kw/m^2*k" | "kw/m^2/k" | "kw/m2/k" => {
                Some(HeatTransferUnit::KwPerSquareMeterK)
            }
            "btu/h-ft2-f" | "btu/h*ft^2*f" | "btu/h/ft^2/f" => {
                Some(HeatTransferUnit::BtuPerHourSquareFootF)
            }
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            HeatTransferUnit::WPerSquareMeterK => "W/(m²·K)",
            HeatTransferUnit::KwPerSquareMeterK => "kW/(m²·K)",
            HeatTransferUnit::BtuPerHourSquareFootF => "Btu/(h·ft²·°F)",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            HeatTransferUnit::WPerSquareMeterK => value,
            HeatTransferUnit::KwPerSquareMeterK => value * 1000.0,
            HeatTransferUnit::BtuPerHourSquareFootF => value * 5.678263,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            HeatTransferUnit::WPerSquareMeterK => value,
            HeatTransferUnit::KwPerSquareMeterK => value / 1000.0,
            HeatTransferUnit::BtuPerHourSquareFootF => value / 5.678263,
        }
    }
}
