//! 입력 불확도의 1차(선형) 전파.
//!
//! `(10 +/- 0.5) kW`처럼 불확도가 적힌 입력마다 값을 ±h 만큼 움직여 중앙차분으로 민감도를 구하고,
//! σ_y² = Σ(∂y/∂x·σ_x)² 로 합친다. 입력끼리는 서로 독립이라고 본다.
//! 판 매수는 원래 계산에서 고른 운전 매수로 고정한다.

use tracing::debug;

use crate::error::HxError;
use crate::exchanger::analysis::{evaluate_step, resolve_thermal, Analysis, ExchangerInput};
use crate::params::ParameterSet;

/// 차분 간격 h = σ·STEP_FRACTION (입력 파일의 단위 기준)
const STEP_FRACTION: f64 = 1e-3;

const OUTPUTS: usize = 10;

/// 주요 결과의 표준 불확도(1σ). 단위는 결과 값과 같은 SI 단위이다.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Uncertainty {
    /// [K]
    pub hot_inlet: f64,
    pub cold_inlet: f64,
    /// [W]
    pub duty: f64,
    /// [K]
    pub hot_outlet: f64,
    pub cold_outlet: f64,
    /// [K]
    pub lmtd: f64,
    /// [W/m²·K]
    pub overall_coefficient: f64,
    /// [m²]
    pub required_area: f64,
    /// 유로 + 포트 [Pa]
    pub hot_pressure_drop: f64,
    pub cold_pressure_drop: f64,
}

impl Uncertainty {
    fn from_variances(v: [f64; OUTPUTS]) -> Self {
        let s = v.map(f64::sqrt);
        Self {
            hot_inlet: s[0],
            cold_inlet: s[1],
            duty: s[2],
            hot_outlet: s[3],
            cold_outlet: s[4],
            lmtd: s[5],
            overall_coefficient: s[6],
            required_area: s[7],
            hot_pressure_drop: s[8],
            cold_pressure_drop: s[9],
        }
    }
}

/// 불확도가 적힌 입력이 없으면 `None`.
pub fn propagate(
    params: &ParameterSet,
    analysis: &Analysis,
) -> Result<Option<Uncertainty>, HxError> {
    let entries = params.uncertain_entries();
    if entries.is_empty() {
        return Ok(None);
    }
    let plates = analysis.operating_step().map_or(1, |s| s.plates);

    let mut variances = [0.0; OUTPUTS];
    for (key, sigma) in entries {
        if sigma <= 0.0 {
            continue;
        }
        let h = sigma * STEP_FRACTION;
        let (Some(plus), Some(minus)) = (params.shifted(key, h), params.shifted(key, -h)) else {
            continue;
        };
        let y_plus = outputs(&plus, plates)?;
        let y_minus = outputs(&minus, plates)?;
        for (variance, (a, b)) in variances.iter_mut().zip(y_plus.iter().zip(&y_minus)) {
            let contribution = (a - b) / (2.0 * h) * sigma;
            *variance += contribution * contribution;
        }
        debug!(key, sigma, plates, "propagated input uncertainty");
    }
    Ok(Some(Uncertainty::from_variances(variances)))
}

fn outputs(params: &ParameterSet, plates: u32) -> Result<[f64; OUTPUTS], HxError> {
    let input = ExchangerInput::from_parameters(params)?;
    let thermal = resolve_thermal(&input, &mut Vec::new())?;
    let step = evaluate_step(&input, &thermal, plates)?;
    let t = &thermal.temperatures;
    Ok([
        t.hot_inlet,
        t.cold_inlet,
        thermal.duty,
        t.hot_outlet,
        t.cold_outlet,
        thermal.lmtd,
        step.overall_coefficient,
        step.required_area,
        step.hot.pressure_drop(),
        step.cold.pressure_drop(),
    ])
}
