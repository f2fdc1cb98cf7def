//! 판형 열교환기 계산 로직을 라이브러리로 분리하여 CLI 밖에서도 재사용할 수 있게 한다.

pub mod config;
pub mod conversion;
pub mod error;
pub mod exchanger;
pub mod fluid;
pub mod i18n;
pub mod params;
pub mod quantity;
pub mod report;
pub mod units;

pub use error::{ConfigError, DomainError, HxError};
pub use params::ParameterSet;
