//! 파라미터 로드와 계산 과정의 오류 종류.
//!
//! 설정 오류([`ConfigError`])와 수학적으로 정의되지 않는 중간값([`DomainError`])
//! 두 가지로 나누며, 어느 쪽이든 한 번의 계산 실행을 중단시킨다.

use std::path::PathBuf;

use thiserror::Error;

use crate::conversion::ConversionError;

/// 파라미터 파일 또는 설정 파일과 관련된 오류.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML 문법 오류
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 필수 파라미터 누락
    #[error("missing required parameter `{0}`")]
    MissingKey(String),
    /// 숫자로 해석할 수 없는 값
    #[error("parameter `{key}` is not numeric: {value:?}")]
    NotNumeric { key: String, value: String },
    /// 물리량에 맞지 않는 단위
    #[error("parameter `{key}`: {source}")]
    Unit {
        key: String,
        #[source]
        source: ConversionError,
    },
    /// 범위를 벗어나거나 알 수 없는 선택지
    #[error("parameter `{key}` is invalid: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// 계산 중간값이 수학적으로 정의되지 않는 경우.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// 말단 온도차가 0 이하이거나 유한하지 않아 로그 평균을 구할 수 없음
    #[error("log mean temperature difference is undefined for terminal differences {delta1} K and {delta2} K")]
    TerminalTemperatureDifference { delta1: f64, delta2: f64 },
    /// 양수여야 하는 중간값이 0 이하
    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },
    /// 상관식을 적용할 수 없는 영역
    #[error("{correlation} is not defined at {what} = {value}")]
    OutsideCorrelation {
        correlation: &'static str,
        what: &'static str,
        value: f64,
    },
    /// IF97 물성 계산 실패
    #[error("IF97 property lookup failed for {property} at {temperature_c} °C, {pressure_bar} bar")]
    PropertyLookup {
        property: &'static str,
        temperature_c: f64,
        pressure_bar: f64,
    },
}

/// 한 번의 계산 실행에서 발생할 수 있는 모든 오류.
#[derive(Debug, Error)]
pub enum HxError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}
