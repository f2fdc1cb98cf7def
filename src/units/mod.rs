//! 단위 정의 및 변환 모듈 모음.
//!
//! 각 단위 enum은 [`UnitScale`]을 구현하며, 계산 내부에서는 항상 SI 기준 단위
//! (온도=K, 길이=m, 압력=Pa, 동력=W 등)를 사용한다.

pub mod angle;
pub mod area;
pub mod conductivity;
pub mod density;
pub mod heat_transfer;
pub mod length;
pub mod mass_flow;
pub mod power;
pub mod pressure;
pub mod specific_heat;
pub mod temperature;
pub mod velocity;
pub mod viscosity;
pub mod volume;

pub use angle::AngleUnit;
pub use area::AreaUnit;
pub use conductivity::ConductivityUnit;
pub use density::DensityUnit;
pub use heat_transfer::HeatTransferUnit;
pub use length::LengthUnit;
pub use mass_flow::MassFlowUnit;
pub use power::PowerUnit;
pub use pressure::PressureUnit;
pub use specific_heat::SpecificHeatUnit;
pub use temperature::TemperatureUnit;
pub use velocity::VelocityUnit;
pub use viscosity::ViscosityUnit;
pub use volume::VolumeUnit;

/// 기준 단위와의 환산 규칙을 가진 단위.
pub trait UnitScale: Copy + Sized {
    /// 정규화된 단위 기호(소문자, 공백/괄호 제거)를 해석한다.
    fn from_symbol(symbol: &str) -> Option<Self>;

    /// 대소문자로 SI 접두어가 갈리는 기호(`MPa`와 `mPa` 등)를 원래 대소문자 그대로 해석한다.
    /// 소문자 표에 없는 기호만 여기서 받는다.
    fn from_prefixed_symbol(_symbol: &str) -> Option<Self> {
        None
    }

    /// 출력용 단위 기호.
    fn symbol(self) -> &'static str;

    /// 이 단위의 값을 기준 단위 값으로 바꾼다.
    fn to_base(self, value: f64) -> f64;

    /// 기준 단위 값을 이 단위의 값으로 바꾼다.
    fn from_base(self, value: f64) -> f64;
}

/// 같은 물리량의 두 단위 사이에서 값을 변환한다.
pub fn convert<U: UnitScale>(value: f64, from: U, to: U) -> f64 {
    to.from_base(from.to_base(value))
}
