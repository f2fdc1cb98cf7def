use crate::error::ConfigError;
use crate::params::ParameterSet;
use crate::quantity::QuantityKind;

/// 판 한 장과 판 사이 유로의 형상. 길이는 m 기준이다.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateGeometry {
    /// 판 폭(유로 폭)
    pub plate_width: f64,
    /// 판 높이. 유체가 흐르는 길이로 사용한다.
    pub plate_height: f64,
    /// 판 간격(유로 두께 b)
    pub plate_spacing: f64,
    /// 판 두께
    pub plate_thickness: f64,
    /// 유로 체적. 없으면 폭·높이·간격으로 계산한다.
    pub channel_volume: Option<f64>,
    /// 전열면적 확대계수 φ (주름 전개 면적 / 투영 면적)
    pub area_enlargement_factor: f64,
}

impl PlateGeometry {
    /// `section`의 형상 파라미터를 읽는다.
    pub fn from_parameters(params: &ParameterSet, section: &str) -> Result<Self, ConfigError> {
        let key = |name: &str| format!("{section}.{name}");
        let area_enlargement_factor = params
            .optional_quantity(&key("area_enlargement_factor"), QuantityKind::Dimensionless)?
            .unwrap_or(1.0);
        if !(1.0..).contains(&area_enlargement_factor) {
            return Err(ConfigError::InvalidValue {
                key: key("area_enlargement_factor"),
                reason: format!("must be at least 1, got {area_enlargement_factor}"),
            });
        }
        Ok(Self {
            plate_width: params.positive_quantity(&key("plate_width"), QuantityKind::Length)?,
            plate_height: params.positive_quantity(&key("plate_height"), QuantityKind::Length)?,
            plate_spacing: params.positive_quantity(&key("plate_spacing"), QuantityKind::Length)?,
            plate_thickness: params
                .positive_quantity(&key("plate_thickness"), QuantityKind::Length)?,
            channel_volume: params
                .optional_positive_quantity(&key("channel_volume"), QuantityKind::Volume)?,
            area_enlargement_factor,
        })
    }

    /// 유로 단면적 W·b [m²]
    pub fn channel_area(&self) -> f64 {
        self.plate_width * self.plate_spacing
    }

    /// 판 한 장의 전열면적 W·H [m²]
    pub fn plate_area(&self) -> f64 {
        self.plate_width * self.plate_height
    }

    /// 유로 체적 [m³]
    pub fn channel_volume(&self) -> f64 {
        self.channel_volume
            .unwrap_or(self.plate_width * self.plate_height * self.plate_spacing)
    }

    /// 판 한 장의 체적 [m³]
    pub fn plate_volume(&self) -> f64 {
        self.plate_area() * self.plate_thickness
    }

    /// 수력직경 Dh = 2b/φ [m]
    pub fn hydraulic_diameter(&self) -> f64 {
        2.0 * self.plate_spacing / self.area_enlargement_factor
    }
}
