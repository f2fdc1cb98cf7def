//! 파라미터 저장소. TOML 파라미터 파일을 평탄화된 이름 → 값 맵으로 한 번 읽어 들인다.
//!
//! 테이블은 `.`으로 이어 붙인 경로로 접근한다(`plate-heat-exchanger.plate_width`).
//! 값은 숫자, `"<숫자> <단위>"` 문자열, 또는 선택지 문자열이며, 단위 환산은 조회 시점에
//! 물리량 종류에 맞춰 수행한다.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::conversion;
use crate::error::ConfigError;
use crate::quantity::{Measure, QuantityKind};

/// 파라미터 하나의 원본 값.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// TOML 숫자. 물리량의 기본 단위로 읽는다.
    Number(f64),
    /// 숫자(또는 `(값 +/- 오차)`)로 시작하는 문자열. `raw`는 파일에 적힌 원문이다.
    Measure { measure: Measure, raw: String },
    /// 숫자로 시작하지 않는 문자열(이름, 선택지 등)
    Text(String),
}

impl ParamValue {
    fn from_toml(value: &toml::Value) -> Self {
        match value {
            toml::Value::Integer(i) => ParamValue::Number(*i as f64),
            toml::Value::Float(f) => ParamValue::Number(*f),
            toml::Value::String(s) => match Measure::parse(s) {
                Some(measure) => ParamValue::Measure {
                    measure,
                    raw: s.clone(),
                },
                None => ParamValue::Text(s.clone()),
            },
            other => ParamValue::Text(other.to_string()),
        }
    }

    fn describe(&self) -> String {
        match self {
            ParamValue::Number(v) => v.to_string(),
            ParamValue::Measure { raw, .. } => raw.clone(),
            ParamValue::Text(s) => s.clone(),
        }
    }

    fn uncertainty(&self) -> Option<f64> {
        match self {
            ParamValue::Measure { measure, .. } => measure.uncertainty,
            _ => None,
        }
    }
}

/// 불변 파라미터 집합.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    entries: BTreeMap<String, ParamValue>,
}

impl ParameterSet {
    /// 파라미터 파일을 읽는다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_toml_str(&content)?;
        info!(path = %path.display(), entries = set.len(), "loaded parameter file");
        Ok(set)
    }

    /// TOML 문자열을 파싱한다.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(content)?;
        let mut entries = BTreeMap::new();
        flatten("", &table, &mut entries);
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// 원본 값을 조회한다.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    /// 필수 물리량을 기준 단위로 환산해 돌려준다.
    pub fn quantity(&self, key: &str, kind: QuantityKind) -> Result<f64, ConfigError> {
        self.optional_quantity(key, kind)?
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    /// 선택 물리량. 키가 없으면 `Ok(None)`.
    pub fn optional_quantity(
        &self,
        key: &str,
        kind: QuantityKind,
    ) -> Result<Option<f64>, ConfigError> {
        let Some(value) = self.entries.get(key) else {
            return Ok(None);
        };
        let (number, unit) = match value {
            ParamValue::Number(v) => (*v, ""),
            ParamValue::Measure { measure, .. } => (measure.value, measure.unit.as_str()),
            ParamValue::Text(s) => {
                return Err(ConfigError::NotNumeric {
                    key: key.to_string(),
                    value: s.clone(),
                })
            }
        };
        let base = conversion::to_base(kind, number, unit).map_err(|source| ConfigError::Unit {
            key: key.to_string(),
            source,
        })?;
        debug!(key, raw = %value.describe(), base, "resolved parameter");
        Ok(Some(base))
    }

    /// 양수여야 하는 필수 물리량.
    pub fn positive_quantity(&self, key: &str, kind: QuantityKind) -> Result<f64, ConfigError> {
        let value = self.quantity(key, kind)?;
        require_positive(key, value)
    }

    /// 양수여야 하는 선택 물리량.
    pub fn optional_positive_quantity(
        &self,
        key: &str,
        kind: QuantityKind,
    ) -> Result<Option<f64>, ConfigError> {
        self.optional_quantity(key, kind)?
            .map(|v| require_positive(key, v))
            .transpose()
    }

    /// 1 이상의 정수 개수. 불확도를 붙일 수 없다.
    pub fn count(&self, key: &str) -> Result<u32, ConfigError> {
        let value = self.quantity(key, QuantityKind::Dimensionless)?;
        if self.entries.get(key).and_then(ParamValue::uncertainty).is_some() {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                reason: "a count cannot carry an uncertainty".to_string(),
            });
        }
        if value < 1.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                reason: format!("expected a whole number >= 1, got {value}"),
            });
        }
        Ok(value as u32)
    }

    /// 문자열 값. 숫자로 적힌 값도 원문 그대로 돌려준다.
    pub fn optional_text(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(ParamValue::describe)
    }

    /// 불확도가 적힌 파라미터와 그 불확도(파일에 적힌 단위 기준).
    pub fn uncertain_entries(&self) -> Vec<(&str, f64)> {
        self.entries
            .iter()
            .filter_map(|(key, value)| value.uncertainty().map(|sigma| (key.as_str(), sigma)))
            .collect()
    }

    /// `key`의 값을 파일에 적힌 단위로 `delta`만큼 옮긴 사본. 숫자가 아니면 `None`.
    pub fn shifted(&self, key: &str, delta: f64) -> Option<Self> {
        let mut copy = self.clone();
        match copy.entries.get_mut(key)? {
            ParamValue::Number(v) => *v += delta,
            ParamValue::Measure { measure, .. } => measure.value += delta,
            ParamValue::Text(_) => return None,
        }
        Some(copy)
    }
}

fn require_positive(key: &str, value: f64) -> Result<f64, ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            reason: format!("must be positive, got {value}"),
        })
    }
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut BTreeMap<String, ParamValue>) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::Table(inner) => flatten(&path, inner, out),
            other => {
                out.insert(path, ParamValue::from_toml(other));
            }
        }
    }
}
