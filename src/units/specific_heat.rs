use serde::{Deserialize, Serialize};

use super::UnitScale;

/// 비열 단위. 내부 기준은 J/kg·K이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificHeatUnit {
    JPerKgK,
    KjPerKgK,
    KcalPerKgK,
    BtuPerPoundF,
}

impl UnitScale for SpecificHeatUnit {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "j/kgk" | "j/kg*k" | "j/kg/k" | "j/kg/degc" | "j/kg*degc" => {
                Some(SpecificHeatUnit::JPerKgK)
            }
            "kj/kgk" | "kj/kg*k" | "kj/kg/k" | "kj/kg/degc" | "kj/kg*degc" => {
                Some(SpecificHeatUnit::KjPerKgK)
            }
            "kcal/kgk" | "kcal/kg*k" | "kcal/kg/k" | "kcal/kg/degc" => {
                Some(SpecificHeatUnit::KcalPerKgK)
            }
            "btu/lbf" | "btu/lb*f" | "btu/lb/f" | "btu/lb/degf" => {
                Some(SpecificHeatUnit::BtuPerPoundF)
            }
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            SpecificHeatUnit::JPerKgK => "J/(kg·K)",
            SpecificHeatUnit::KjPerKgK => "kJ/(kg·K)",
            SpecificHeatUnit::KcalPerKgK => "kcal/(kg·K)",
            SpecificHeatUnit::BtuPerPoundF => "Btu/(lb·°F)",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            SpecificHeatUnit::JPerKgK => value,
            SpecificHeatUnit::KjPerKgK => value * 1000.0,
            SpecificHeatUnit::KcalPerKgK | SpecificHeatUnit::BtuPerPoundF => value * 4186.8,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            SpecificHeatUnit::JPerKgK => value,
            SpecificHeatUnit::KjPerKgK => value / 1000.0,
            SpecificHeatUnit::KcalPerKgK | SpecificHeatUnit::BtuPerPoundF => value / 4186.8,
        }
    }
}
