use serde::{Deserialize, Serialize};

use super::UnitScale;

/// 점도 단위. 내부 기준은 Pa·s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViscosityUnit {
    PascalSecond,
    MilliPascalSecond,
    Centipoise,
    Poise,
}

impl UnitScale for ViscosityUnit {
    fn from_prefixed_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "mPa*s" | "mPa.s" | "mPas" => Some(ViscosityUnit::MilliPascalSecond),
            _ => None,
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "pa*s" | "pa.s" | "pas" | "kg/m/s" | "kg/m*s" => Some(ViscosityUnit::PascalSecond),
            "cp" | "cps" | "centipoise" => Some(ViscosityUnit::Centipoise),
            "p" | "poise" => Some(ViscosityUnit::Poise),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            ViscosityUnit::PascalSecond => "Pa·s",
            ViscosityUnit::MilliPascalSecond => "mPa·s",
            ViscosityUnit::Centipoise => "cP",
            ViscosityUnit::Poise => "P",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            ViscosityUnit::PascalSecond => value,
            ViscosityUnit::MilliPascalSecond | ViscosityUnit::Centipoise => value / 1000.0,
            ViscosityUnit::Poise => value / 10.0,
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            ViscosityUnit::PascalSecond => value,
            ViscosityUnit::MilliPascalSecond | ViscosityUnit::Centipoise => value * 1000.0,
            ViscosityUnit::Poise => value * 10.0,
        }
    }
}
