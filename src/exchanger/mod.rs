//! 판형 열교환기 열/수력 계산 모듈을 모아둔다.
//! 형상, LMTD, 마찰계수/누셀트 상관식, 압력손실, 판 매수 산정, 그리고 입력 불확도 전파로 구성한다.

pub mod analysis;
pub mod correlation;
pub mod geometry;
pub mod hydraulics;
pub mod lmtd;
pub mod uncertainty;

pub use analysis::{analyze, run, Analysis, ExchangerInput, Side, SizingStep, Warning};
pub use geometry::PlateGeometry;
pub use lmtd::{log_mean_temperature_difference, FlowArrangement, TerminalTemperatures};
pub use uncertainty::Uncertainty;
