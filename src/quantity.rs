/// 파라미터 파일이 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Temperature,
    Length,
    Area,
    Volume,
    Velocity,
    MassFlow,
    Density,
    Viscosity,
    SpecificHeat,
    ThermalConductivity,
    HeatTransferCoeff,
    Power,
    Pressure,
    Angle,
    Dimensionless,
}

impl QuantityKind {
    /// 단위 없이 숫자만 적힌 값을 해석할 때 쓰는 단위 기호.
    ///
    /// 온도는 °C, 각도는 도(°), 나머지는 SI 기준 단위로 읽는다.
    pub fn default_symbol(self) -> &'static str {
        match self {
            QuantityKind::Temperature => "degc",
            QuantityKind::Length => "m",
            QuantityKind::Area => "m^2",
            QuantityKind::Volume => "m^3",
            QuantityKind::Velocity => "m/s",
            QuantityKind::MassFlow => "kg/s",
            QuantityKind::Density => "kg/m^3",
            QuantityKind::Viscosity => "pa*s",
            QuantityKind::SpecificHeat => "j/kg/k",
            QuantityKind::ThermalConductivity => "w/m/k",
            QuantityKind::HeatTransferCoeff => "w/m^2/k",
            QuantityKind::Power => "w",
            QuantityKind::Pressure => "pa",
            QuantityKind::Angle => "deg",
            QuantityKind::Dimensionless => "",
        }
    }

    /// 오류 메시지용 이름.
    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::Temperature => "temperature",
            QuantityKind::Length => "length",
            QuantityKind::Area => "area",
            QuantityKind::Volume => "volume",
            QuantityKind::Velocity => "velocity",
            QuantityKind::MassFlow => "mass flow",
            QuantityKind::Density => "density",
            QuantityKind::Viscosity => "viscosity",
            QuantityKind::SpecificHeat => "specific heat",
            QuantityKind::ThermalConductivity => "thermal conductivity",
            QuantityKind::HeatTransferCoeff => "heat transfer coefficient",
            QuantityKind::Power => "power",
            QuantityKind::Pressure => "pressure",
            QuantityKind::Angle => "angle",
            QuantityKind::Dimensionless => "dimensionless",
        }
    }
}

/// `"<숫자> <단위>"` 또는 `"(<숫자> +/- <오차>) <단위>"` 형태의 측정값.
/// 단위 문자열은 원문 그대로 보관한다.
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    pub value: f64,
    /// 표준 불확도(1σ). 값과 같은 단위이다.
    pub uncertainty: Option<f64>,
    pub unit: String,
}

impl Measure {
    /// 문자열을 숫자와 단위로 나눈다. 첫 토큰이 숫자가 아니면 `None`.
    ///
    /// 단위가 없으면 빈 문자열을 단위로 돌려준다. 예: `"0.5 kg/s"`, `"2.5e3 W/(m^2 K)"`, `"45"`,
    /// `"(90 +/- 0.5) degC"`, `"(1.0 ± 0.1)e+3 W"`.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if let Some(rest) = trimmed.strip_prefix('(') {
            return Self::parse_uncertain(rest);
        }
        let (number, unit) = split_unit(trimmed);
        let value = parse_finite(number)?;
        Some(Self {
            value,
            uncertainty: None,
            unit: unit.to_string(),
        })
    }

    /// 여는 괄호 뒤의 `값 +/- 오차)[e지수] 단위`. 지수는 값과 오차에 함께 적용한다.
    fn parse_uncertain(rest: &str) -> Option<Self> {
        let (inner, tail) = rest.split_once(')')?;
        let (value, error) = inner
            .split_once("+/-")
            .or_else(|| inner.split_once('±'))?;
        let (exponent, unit) = split_unit(tail);
        let scale = match exponent {
            "" => 1.0,
            e if e.starts_with(['e', 'E']) => parse_finite(&format!("1{e}"))?,
            _ => return None,
        };
        let value = parse_finite(value.trim())? * scale;
        let error = parse_finite(error.trim())? * scale;
        if error < 0.0 {
            return None;
        }
        Some(Self {
            value,
            uncertainty: Some(error),
            unit: unit.to_string(),
        })
    }
}

fn split_unit(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], text[idx..].trim()),
        None => (text, ""),
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
