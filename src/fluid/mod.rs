//! 냉각 유체 물성 모듈 모음.
//! 파라미터 파일에 적힌 고정 물성 세트와, 물의 경우 IF97로 보충하는 물성 조회로 구성한다.

pub mod coolant;
pub mod water;

pub use coolant::Coolant;
pub use water::WaterProperties;
