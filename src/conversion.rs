use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 해당 물리량에서 알 수 없는 단위 문자열
    #[error("unknown {kind} unit: {unit}")]
    UnknownUnit { kind: &'static str, unit: String },
}

/// 공백과 괄호를 없애고 `**`는 `^`로, `·`는 `*`로 바꾼다. 대소문자는 유지한다.
pub fn compact_symbol(unit: &str) -> String {
    unit.replace("**", "^")
        .replace('·', "*")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
        .collect()
}

/// 단위 문자열을 비교 가능한 형태로 정규화한다.
///
/// [`compact_symbol`] 결과를 소문자화한다.
/// 예: `"W/(m^2 K)"` → `"w/m^2k"`, `"kg/m**3"` → `"kg/m^3"`.
pub fn normalize_symbol(unit: &str) -> String {
    compact_symbol(unit).to_lowercase()
}

fn parse_unit<U: UnitScale>(kind: QuantityKind, unit: &str) -> Result<U, ConversionError> {
    let compact = compact_symbol(unit);
    if let Some(u) = U::from_prefixed_symbol(&compact) {
        return Ok(u);
    }
    let symbol = if compact.is_empty() {
        kind.default_symbol().to_string()
    } else {
        compact.to_lowercase()
    };
    U::from_symbol(&symbol).ok_or_else(|| ConversionError::UnknownUnit {
        kind: kind.name(),
        unit: unit.to_string(),
    })
}

fn base_value<U: UnitScale>(
    kind: QuantityKind,
    value: f64,
    unit: &str,
) -> Result<f64, ConversionError> {
    let unit = parse_unit::<U>(kind, unit)?;
    Ok(unit.to_base(value))
}

/// 문자열로 주어진 단위의 값을 해당 물리량의 내부 기준 단위 값으로 환산한다.
///
/// 단위 문자열이 비어 있으면 [`QuantityKind::default_symbol`]로 해석한다.
pub fn to_base(kind: QuantityKind, value: f64, unit: &str) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => base_value::<TemperatureUnit>(kind, value, unit),
        QuantityKind::Length => base_value::<LengthUnit>(kind, value, unit),
        QuantityKind::Area => base_value::<AreaUnit>(kind, value, unit),
        QuantityKind::Volume => base_value::<VolumeUnit>(kind, value, unit),
        QuantityKind::Velocity => base_value::<VelocityUnit>(kind, value, unit),
        QuantityKind::MassFlow => base_value::<MassFlowUnit>(kind, value, unit),
        QuantityKind::Density => base_value::<DensityUnit>(kind, value, unit),
        QuantityKind::Viscosity => base_value::<ViscosityUnit>(kind, value, unit),
        QuantityKind::SpecificHeat => base_value::<SpecificHeatUnit>(kind, value, unit),
        QuantityKind::ThermalConductivity => base_value::<ConductivityUnit>(kind, value, unit),
        QuantityKind::HeatTransferCoeff => base_value::<HeatTransferUnit>(kind, value, unit),
        QuantityKind::Power => base_value::<PowerUnit>(kind, value, unit),
        QuantityKind::Pressure => base_value::<PressureUnit>(kind, value, unit),
        QuantityKind::Angle => base_value::<AngleUnit>(kind, value, unit),
        QuantityKind::Dimensionless => match normalize_symbol(unit).as_str() {
            "" | "-" | "1" | "dimensionless" => Ok(value),
            _ => Err(ConversionError::UnknownUnit {
                kind: kind.name(),
                unit: unit.to_string(),
            }),
        },
    }
}
