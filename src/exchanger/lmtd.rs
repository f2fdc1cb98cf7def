//! 로그 평균 온도차(LMTD).

use crate::error::DomainError;

/// 양 끝 온도차가 이 상대 오차 안에서 같으면 산술 평균(극한값)을 쓴다.
const EQUAL_ENDS_TOLERANCE: f64 = 1e-9;

/// 유동 배열.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowArrangement {
    #[default]
    CounterFlow,
    ParallelFlow,
}

impl FlowArrangement {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "counter" | "counterflow" | "counter-flow" | "counter_flow" | "counter-current" => {
                Some(FlowArrangement::CounterFlow)
            }
            "parallel" | "parallelflow" | "parallel-flow" | "parallel_flow" | "co-current" => {
                Some(FlowArrangement::ParallelFlow)
            }
            _ => None,
        }
    }
}

/// 두 유체의 입출구 온도 [K].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalTemperatures {
    pub hot_inlet: f64,
    pub hot_outlet: f64,
    pub cold_inlet: f64,
    pub cold_outlet: f64,
}

impl TerminalTemperatures {
    /// 양 끝의 고온측-저온측 온도차 (ΔT1, ΔT2).
    ///
    /// 대향류는 (Th,in − Tc,out, Th,out − Tc,in), 병류는 (Th,in − Tc,in, Th,out − Tc,out).
    pub fn terminal_differences(&self, arrangement: FlowArrangement) -> (f64, f64) {
        match arrangement {
            FlowArrangement::CounterFlow => (
                self.hot_inlet - self.cold_outlet,
                self.hot_outlet - self.cold_inlet,
            ),
            FlowArrangement::ParallelFlow => (
                self.hot_inlet - self.cold_inlet,
                self.hot_outlet - self.cold_outlet,
            ),
        }
    }

    /// 이 온도 조건의 LMTD.
    pub fn lmtd(&self, arrangement: FlowArrangement) -> Result<f64, DomainError> {
        let (delta1, delta2) = self.terminal_differences(arrangement);
        log_mean_temperature_difference(delta1, delta2)
    }
}

/// LMTD = (ΔT1 − ΔT2) / ln(ΔT1/ΔT2).
///
/// 두 온도차가 같으면 식의 극한인 산술 평균을 돌려준다. 어느 한쪽이라도 0 이하이거나
/// 유한하지 않으면 로그 항이 정의되지 않으므로 [`DomainError`]이다.
pub fn log_mean_temperature_difference(delta1: f64, delta2: f64) -> Result<f64, DomainError> {
    let valid = |d: f64| d.is_finite() && d > 0.0;
    if !valid(delta1) || !valid(delta2) {
        return Err(DomainError::TerminalTemperatureDifference { delta1, delta2 });
    }
    if (delta1 - delta2).abs() <= EQUAL_ENDS_TOLERANCE * delta1.max(delta2) {
        return Ok(0.5 * (delta1 + delta2));
    }
    // ln(ΔT1/ΔT2)를 ln_1p로 계산해 양 끝이 가까울 때의 자릿수 손실을 줄인다
    let log_ratio = ((delta1 - delta2) / delta2).ln_1p();
    Ok((delta1 - delta2) / log_ratio)
}
