use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::ConfigError;
use crate::units::*;

/// 보고서에 쓰는 단위 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportUnits {
    pub temperature: TemperatureUnit,
    pub power: PowerUnit,
    pub pressure: PressureUnit,
    pub velocity: VelocityUnit,
    pub heat_transfer: HeatTransferUnit,
    pub length: LengthUnit,
    pub area: AreaUnit,
    pub volume: VolumeUnit,
}

impl Default for ReportUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            power: PowerUnit::Kilowatt,
            pressure: PressureUnit::KiloPascal,
            velocity: VelocityUnit::MeterPerSecond,
            heat_transfer: HeatTransferUnit::WPerSquareMeterK,
            length: LengthUnit::Millimeter,
            area: AreaUnit::SquareMeter,
            volume: VolumeUnit::Liter,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// auto / ko / en
    pub language: String,
    /// 보고서 소수점 자릿수
    pub precision: usize,
    pub report_units: ReportUnits,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            precision: 3,
            report_units: ReportUnits::default(),
        }
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Settings, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    } else {
        let settings = Settings::default();
        settings.save(path)?;
        info!(path = %path.display(), "created default settings file");
        Ok(settings)
    }
}

impl Settings {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
