use serde::{Deserialize, Serialize};

use super::UnitScale;

/// 압력 단위. 내부 기준은 Pa이며 배율만 고려한다.
/// 게이지/절대 구분은 사용하는 쪽에서 정한다(유체 물성 조회는 절대압, 압력손실은 차압).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    MilliBar,
    Psi,
    Atm,
}

const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_ATM: f64 = 101_325.0;
const PA_PER_PSI: f64 = 6_894.757;

impl UnitScale for PressureUnit {
    fn from_prefixed_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "MPa" => Some(PressureUnit::MegaPascal),
            _ => None,
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "pa" | "pascal" => Some(PressureUnit::Pascal),
            "kpa" | "kilopascal" => Some(PressureUnit::KiloPascal),
            "megapascal" => Some(PressureUnit::MegaPascal),
            "bar" | "bara" => Some(PressureUnit::Bar),
            "mbar" | "millibar" => Some(PressureUnit::MilliBar),
            "psi" | "psia" => Some(PressureUnit::Psi),
            "atm" => Some(PressureUnit::Atm),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Bar => "bar",
            PressureUnit::MilliBar => "mbar",
            PressureUnit::Psi => "psi",
            PressureUnit::Atm => "atm",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            PressureUnit::Pascal => value,
            PressureUnit::KiloPascal => value * 1000.0,
            PressureUnit::MegaPascal => value * 1.0e6,
            PressureUnit::Bar => value * PA_PER_BAR,
            PressureUnit::MilliBar => value * PA_PER_BAR / 1000.0,
            PressureUnit::Psi => value * PA_PER_PSI,
            PressureUnit::Atm => value * PA_PER_ATM,
        }
    }

    fn from_base(self, value_pa: f64) -> f64 {
        match self {
            PressureUnit::Pascal => value_pa,
            PressureUnit::KiloPascal => value_pa / 1000.0,
            PressureUnit::MegaPascal => value_pa / 1.0e6,
            PressureUnit::Bar => value_pa / PA_PER_BAR,
            PressureUnit::MilliBar => value_pa * 1000.0 / PA_PER_BAR,
            PressureUnit::Psi => value_pa / PA_PER_PSI,
            PressureUnit::Atm => value_pa / PA_PER_ATM,
        }
    }
}
