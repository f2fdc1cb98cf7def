//! 파라미터 세트 → 열/수력 계산 결과로 이어지는 단일 계산 경로.
//!
//! 순서: 말단 온도와 열량 → LMTD → 필요 전열면적 → 레이놀즈수 → 마찰계수 → 압력손실.
//! 종합전열계수 U가 주어지지 않으면 판 매수별로 대류 열전달계수에서 U를 구하며,
//! 판 매수 1장부터 최대 매수까지 차례로 평가해 `판 매수 ≥ 필요 판 매수`인 첫 매수를 고른다.

use tracing::{debug, info, warn};

use crate::error::{ConfigError, DomainError, HxError};
use crate::exchanger::correlation::{
    self, NusseltCorrelation, FRICTION_ANGLE_RANGE, FRICTION_REYNOLDS_RANGE,
};
use crate::exchanger::geometry::PlateGeometry;
use crate::exchanger::hydraulics;
use crate::exchanger::lmtd::{FlowArrangement, TerminalTemperatures};
use crate::exchanger::uncertainty::{self, Uncertainty};
use crate::fluid::Coolant;
use crate::params::ParameterSet;
use crate::quantity::QuantityKind;

pub const EXCHANGER_SECTION: &str = "plate-heat-exchanger";
pub const HOT_SECTION: &str = "hot-coolant";
pub const COLD_SECTION: &str = "cold-coolant";

/// 판 매수 탐색의 상한. 탐색 결과는 모두 메모리에 남는다.
pub const PLATE_MAX_COUNT_LIMIT: u32 = 10_000;

/// 고온측/저온측 열량 차이가 이 비율을 넘으면 경고한다.
const IMBALANCE_TOLERANCE: f64 = 0.05;

/// 열교환기의 한쪽 유로.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Hot,
    Cold,
}

/// 한쪽 유체의 운전 조건. 온도는 K, 유량은 kg/s.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamInput {
    pub coolant: Coolant,
    pub mass_flow: f64,
    pub inlet_temperature: f64,
    pub outlet_temperature: Option<f64>,
}

/// 종합전열계수를 정하는 방법.
#[derive(Debug, Clone, PartialEq)]
pub enum HeatTransferModel {
    /// 파라미터로 주어진 고정 U [W/m²·K]
    Fixed { overall_coefficient: f64 },
    /// 양쪽 대류 열전달계수(와 판 전도 저항)로 U를 구한다.
    Convective {
        nusselt: NusseltCorrelation,
        /// 판 재질 열전도율 [W/m·K]. 없으면 벽 저항을 무시한다.
        wall_conductivity: Option<f64>,
    },
}

/// 검증을 마친 계산 입력. 모든 값은 SI 기준이다.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangerInput {
    pub hot: StreamInput,
    pub cold: StreamInput,
    /// 설계 열량 [W]
    pub energy: Option<f64>,
    pub arrangement: FlowArrangement,
    pub geometry: PlateGeometry,
    /// 주름각 β [°]
    pub corrugation_angle: f64,
    pub plate_max_count: u32,
    pub heat_transfer: HeatTransferModel,
    /// 포트 직경 [m]. 없으면 포트 손실을 무시한다.
    pub port_diameter: Option<f64>,
}

impl ExchangerInput {
    /// 파라미터 세트에서 계산 입력을 구성한다. 필수 키는 모두 여기서 확인한다.
    pub fn from_parameters(params: &ParameterSet) -> Result<Self, HxError> {
        let key = |name: &str| format!("{EXCHANGER_SECTION}.{name}");

        let energy = params.optional_positive_quantity(&key("energy"), QuantityKind::Power)?;
        let hot_mass_flow =
            params.positive_quantity(&key("hot_mass_flow_rate"), QuantityKind::MassFlow)?;
        let cold_mass_flow =
            params.positive_quantity(&key("cold_mass_flow_rate"), QuantityKind::MassFlow)?;
        let hot_inlet =
            params.quantity(&key("hot_inlet_temperature"), QuantityKind::Temperature)?;
        let cold_inlet =
            params.quantity(&key("cold_inlet_temperature"), QuantityKind::Temperature)?;
        let hot_outlet =
            params.optional_quantity(&key("hot_outlet_temperature"), QuantityKind::Temperature)?;
        let cold_outlet =
            params.optional_quantity(&key("cold_outlet_temperature"), QuantityKind::Temperature)?;
        if energy.is_none() && hot_outlet.is_none() && cold_outlet.is_none() {
            return Err(ConfigError::MissingKey(key("energy")).into());
        }

        let geometry = PlateGeometry::from_parameters(params, EXCHANGER_SECTION)?;
        let plate_max_count = params.count(&key("plate_max_count"))?;
        if plate_max_count > PLATE_MAX_COUNT_LIMIT {
            return Err(ConfigError::InvalidValue {
                key: key("plate_max_count"),
                reason: format!("must not exceed {PLATE_MAX_COUNT_LIMIT}, got {plate_max_count}"),
            }
            .into());
        }

        let corrugation_angle =
            params.quantity(&key("corrugation_angle"), QuantityKind::Angle)?;
        if !(corrugation_angle > 0.0 && corrugation_angle < 90.0) {
            return Err(ConfigError::InvalidValue {
                key: key("corrugation_angle"),
                reason: format!("must lie between 0° and 90°, got {corrugation_angle}°"),
            }
            .into());
        }

        let arrangement = match params.optional_text(&key("flow_arrangement")) {
            None => FlowArrangement::default(),
            Some(name) => {
                FlowArrangement::from_name(&name).ok_or_else(|| ConfigError::InvalidValue {
                    key: key("flow_arrangement"),
                    reason: format!("unknown arrangement {name:?}, expected counter or parallel"),
                })?
            }
        };

        let heat_transfer = heat_transfer_model(params)?;
        let port_diameter =
            params.optional_positive_quantity(&key("port_diameter"), QuantityKind::Length)?;

        // IF97 물성 조회는 알려진 입출구 온도의 평균에서 한다
        let mean = |inlet: f64, outlet: Option<f64>| 0.5 * (inlet + outlet.unwrap_or(inlet));
        let mut hot_coolant =
            Coolant::from_parameters(params, HOT_SECTION, mean(hot_inlet, hot_outlet))?;
        let mut cold_coolant =
            Coolant::from_parameters(params, COLD_SECTION, mean(cold_inlet, cold_outlet))?;

        // 출구온도가 없는 쪽은 입구 물성으로 출구를 추정하고 평균 온도에서 한 번 더 읽는다
        let provisional_duty = energy
            .or_else(|| hot_outlet.map(|t| hot_coolant.heat_flow(hot_mass_flow, hot_inlet - t)))
            .or_else(|| {
                cold_outlet.map(|t| cold_coolant.heat_flow(cold_mass_flow, t - cold_inlet))
            })
            .filter(|q| q.is_finite() && *q > 0.0);
        if let Some(q) = provisional_duty {
            if hot_outlet.is_none() {
                if let Ok(dt) = hot_coolant.temperature_change(q, hot_mass_flow) {
                    let estimate = Some(hot_inlet - dt);
                    hot_coolant =
                        Coolant::from_parameters(params, HOT_SECTION, mean(hot_inlet, estimate))?;
                }
            }
            if cold_outlet.is_none() {
                if let Ok(dt) = cold_coolant.temperature_change(q, cold_mass_flow) {
                    let estimate = Some(cold_inlet + dt);
                    cold_coolant =
                        Coolant::from_parameters(params, COLD_SECTION, mean(cold_inlet, estimate))?;
                }
            }
        }

        Ok(Self {
            hot: StreamInput {
                coolant: hot_coolant,
                mass_flow: hot_mass_flow,
                inlet_temperature: hot_inlet,
                outlet_temperature: hot_outlet,
            },
            cold: StreamInput {
                coolant: cold_coolant,
                mass_flow: cold_mass_flow,
                inlet_temperature: cold_inlet,
                outlet_temperature: cold_outlet,
            },
            energy,
            arrangement,
            geometry,
            corrugation_angle,
            plate_max_count,
            heat_transfer,
            port_diameter,
        })
    }
}

fn heat_transfer_model(params: &ParameterSet) -> Result<HeatTransferModel, ConfigError> {
    let key = |name: &str| format!("{EXCHANGER_SECTION}.{name}");
    if let Some(overall_coefficient) = params.optional_positive_quantity(
        &key("overall_heat_transfer_coefficient"),
        QuantityKind::HeatTransferCoeff,
    )? {
        return Ok(HeatTransferModel::Fixed {
            overall_coefficient,
        });
    }

    let mut nusselt = match params.optional_text(&key("nusselt_correlation")) {
        None => NusseltCorrelation::default(),
        Some(name) => {
            NusseltCorrelation::from_name(&name).ok_or_else(|| ConfigError::InvalidValue {
                key: key("nusselt_correlation"),
                reason: format!("unknown correlation {name:?}, expected power-law or gnielinski"),
            })?
        }
    };
    if let NusseltCorrelation::PowerLaw {
        coefficient,
        reynolds_exponent,
        prandtl_exponent,
    } = &mut nusselt
    {
        let dimensionless = |name: &str| {
            params.optional_quantity(&key(name), QuantityKind::Dimensionless)
        };
        if let Some(c) = dimensionless("nusselt_coefficient")? {
            *coefficient = c;
        }
        if let Some(m) = dimensionless("nusselt_reynolds_exponent")? {
            *reynolds_exponent = m;
        }
        if let Some(n) = dimensionless("nusselt_prandtl_exponent")? {
            *prandtl_exponent = n;
        }
    }

    let wall_conductivity = params.optional_positive_quantity(
        &key("plate_thermal_conductivity"),
        QuantityKind::ThermalConductivity,
    )?;
    Ok(HeatTransferModel::Convective {
        nusselt,
        wall_conductivity,
    })
}

/// 계산 중 발견된 주의 사항. 계산은 계속 진행된다.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// 고온측과 저온측 열량이 5% 이상 다름 [W]
    EnergyImbalance { hot_duty: f64, cold_duty: f64 },
    /// 운전점 레이놀즈수가 마찰계수식 검증 범위 밖
    ReynoldsOutsideCorrelation { side: Side, reynolds: f64 },
    /// 주름각이 마찰계수식 검증 범위 밖 [°]
    CorrugationAngleOutsideCorrelation { angle: f64 },
    /// 최대 판 매수까지 해가 없음
    NoPlateCount { plate_max_count: u32 },
}

/// 열수지 결과. 온도는 K, 열량은 W.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalResult {
    pub temperatures: TerminalTemperatures,
    /// 계산에 쓴 열량
    pub duty: f64,
    /// 고온측 ṁ·cp·ΔT
    pub hot_duty: f64,
    /// 저온측 ṁ·cp·ΔT
    pub cold_duty: f64,
    /// (ΔT1, ΔT2)
    pub terminal_differences: (f64, f64),
    pub lmtd: f64,
}

impl ThermalResult {
    pub fn hot_temperature_change(&self) -> f64 {
        self.temperatures.hot_outlet - self.temperatures.hot_inlet
    }

    pub fn cold_temperature_change(&self) -> f64 {
        self.temperatures.cold_outlet - self.temperatures.cold_inlet
    }
}

/// 한쪽 유로의 수력/열전달 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct SideHydraulics {
    /// 유로 평균 유속 [m/s]
    pub velocity: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    /// 유로 마찰 압력손실 [Pa]
    pub channel_pressure_drop: f64,
    /// 포트 압력손실 [Pa]
    pub port_pressure_drop: f64,
    /// 대류 모델에서만 계산된다.
    pub nusselt: Option<f64>,
    /// 대류 열전달계수 [W/m²·K]
    pub convective_coefficient: Option<f64>,
}

impl SideHydraulics {
    /// 유로 + 포트 압력손실 [Pa]
    pub fn pressure_drop(&self) -> f64 {
        self.channel_pressure_drop + self.port_pressure_drop
    }
}

/// 판 매수 하나에 대한 평가 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingStep {
    /// 유로를 나누는 판 매수
    pub plates: u32,
    pub hot: SideHydraulics,
    pub cold: SideHydraulics,
    /// 종합전열계수 U [W/m²·K]
    pub overall_coefficient: f64,
    /// 필요 전열면적 [m²]
    pub required_area: f64,
    pub plates_required: u32,
}

impl SizingStep {
    pub fn is_sufficient(&self) -> bool {
        self.plates >= self.plates_required
    }
}

/// 한 번의 계산 결과 전체.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub hot_coolant: String,
    pub cold_coolant: String,
    pub arrangement: FlowArrangement,
    pub thermal: ThermalResult,
    pub geometry: PlateGeometry,
    pub corrugation_angle: f64,
    /// 판 매수 1장부터 평가한 결과. 해를 찾으면 그 매수에서 멈춘다.
    pub sweep: Vec<SizingStep>,
    /// `sweep`에서 선택된 매수의 위치
    pub selected: Option<usize>,
    pub warnings: Vec<Warning>,
    /// 입력에 불확도가 적혀 있을 때만 채워진다.
    pub uncertainty: Option<Uncertainty>,
}

impl Analysis {
    pub fn selected_step(&self) -> Option<&SizingStep> {
        self.selected.and_then(|i| self.sweep.get(i))
    }

    /// 수력 결과를 보고할 운전점. 해가 없으면 마지막(최대 매수) 평가 결과이다.
    pub fn operating_step(&self) -> Option<&SizingStep> {
        self.selected_step().or_else(|| self.sweep.last())
    }

    pub fn plate_count(&self) -> Option<u32> {
        self.selected_step().map(|s| s.plates)
    }
}

/// 파라미터 세트를 검증하고 계산한다. 불확도가 적힌 입력이 있으면 결과 불확도도 구한다.
pub fn run(params: &ParameterSet) -> Result<Analysis, HxError> {
    let input = ExchangerInput::from_parameters(params)?;
    let mut analysis = analyze(&input)?;
    analysis.uncertainty = uncertainty::propagate(params, &analysis)?;
    Ok(analysis)
}

/// 검증된 입력으로 한 번의 계산을 수행한다.
pub fn analyze(input: &ExchangerInput) -> Result<Analysis, DomainError> {
    let mut warnings = Vec::new();

    let thermal = resolve_thermal(input, &mut warnings)?;
    info!(
        duty_w = thermal.duty,
        lmtd_k = thermal.lmtd,
        "resolved terminal temperatures"
    );

    if !FRICTION_ANGLE_RANGE.contains(&input.corrugation_angle) {
        warnings.push(Warning::CorrugationAngleOutsideCorrelation {
            angle: input.corrugation_angle,
        });
    }

    let mut sweep = Vec::new();
    let mut selected = None;
    for plates in 1..=input.plate_max_count {
        let step = evaluate_step(input, &thermal, plates)?;
        debug!(
            plates,
            plates_required = step.plates_required,
            u = step.overall_coefficient,
            area_m2 = step.required_area,
            "evaluated plate count"
        );
        let sufficient = step.is_sufficient();
        sweep.push(step);
        if sufficient {
            selected = Some(sweep.len() - 1);
            break;
        }
    }
    if selected.is_none() {
        warnings.push(Warning::NoPlateCount {
            plate_max_count: input.plate_max_count,
        });
    }

    let operating = selected.or(sweep.len().checked_sub(1)).and_then(|i| sweep.get(i));
    if let Some(step) = operating {
        for (side, hydraulics) in [(Side::Hot, &step.hot), (Side::Cold, &step.cold)] {
            if !FRICTION_REYNOLDS_RANGE.contains(&hydraulics.reynolds) {
                warnings.push(Warning::ReynoldsOutsideCorrelation {
                    side,
                    reynolds: hydraulics.reynolds,
                });
            }
        }
    }
    for w in &warnings {
        warn!(warning = ?w, "calculation warning");
    }

    Ok(Analysis {
        hot_coolant: input.hot.coolant.name.clone(),
        cold_coolant: input.cold.coolant.name.clone(),
        arrangement: input.arrangement,
        thermal,
        geometry: input.geometry.clone(),
        corrugation_angle: input.corrugation_angle,
        sweep,
        selected,
        warnings,
        uncertainty: None,
    })
}

pub(super) fn resolve_thermal(
    input: &ExchangerInput,
    warnings: &mut Vec<Warning>,
) -> Result<ThermalResult, DomainError> {
    let hot = &input.hot;
    let cold = &input.cold;

    let duty = match (input.energy, hot.outlet_temperature, cold.outlet_temperature) {
        (Some(q), _, _) => q,
        (None, Some(t_out), _) => hot
            .coolant
            .heat_flow(hot.mass_flow, hot.inlet_temperature - t_out),
        (None, None, Some(t_out)) => cold
            .coolant
            .heat_flow(cold.mass_flow, t_out - cold.inlet_temperature),
        (None, None, None) => 0.0,
    };
    if !(duty.is_finite() && duty > 0.0) {
        return Err(DomainError::NonPositive {
            what: "heat duty",
            value: duty,
        });
    }

    let hot_outlet = match hot.outlet_temperature {
        Some(t) => t,
        None => hot.inlet_temperature - hot.coolant.temperature_change(duty, hot.mass_flow)?,
    };
    let cold_outlet = match cold.outlet_temperature {
        Some(t) => t,
        None => cold.inlet_temperature + cold.coolant.temperature_change(duty, cold.mass_flow)?,
    };
    let temperatures = TerminalTemperatures {
        hot_inlet: hot.inlet_temperature,
        hot_outlet,
        cold_inlet: cold.inlet_temperature,
        cold_outlet,
    };

    let hot_duty = hot
        .coolant
        .heat_flow(hot.mass_flow, hot.inlet_temperature - hot_outlet);
    let cold_duty = cold
        .coolant
        .heat_flow(cold.mass_flow, cold_outlet - cold.inlet_temperature);
    if (hot_duty - cold_duty).abs() > IMBALANCE_TOLERANCE * hot_duty.abs().max(cold_duty.abs()) {
        warnings.push(Warning::EnergyImbalance {
            hot_duty,
            cold_duty,
        });
    }

    let terminal_differences = temperatures.terminal_differences(input.arrangement);
    let lmtd = temperatures.lmtd(input.arrangement)?;

    Ok(ThermalResult {
        temperatures,
        duty,
        hot_duty,
        cold_duty,
        terminal_differences,
        lmtd,
    })
}

/// 필요 전열면적 A = Q / (U·LMTD) [m²].
pub fn required_area(duty: f64, overall_coefficient: f64, lmtd: f64) -> Result<f64, DomainError> {
    if !(overall_coefficient.is_finite() && overall_coefficient > 0.0) {
        return Err(DomainError::NonPositive {
            what: "overall heat transfer coefficient",
            value: overall_coefficient,
        });
    }
    if !(lmtd.is_finite() && lmtd > 0.0) {
        return Err(DomainError::NonPositive {
            what: "log mean temperature difference",
            value: lmtd,
        });
    }
    Ok(duty / (overall_coefficient * lmtd))
}

/// 전열면적을 덮는 데 필요한 판 매수(올림, 최소 1장).
pub fn plates_for_area(area: f64, plate_area: f64) -> u32 {
    let plates = (area / plate_area).ceil();
    if plates.is_finite() && plates >= 1.0 {
        plates.min(f64::from(u32::MAX)) as u32
    } else {
        1
    }
}

pub(super) fn evaluate_step(
    input: &ExchangerInput,
    thermal: &ThermalResult,
    plates: u32,
) -> Result<SizingStep, DomainError> {
    let mut hot = side_hydraulics(input, &input.hot, plates)?;
    let mut cold = side_hydraulics(input, &input.cold, plates)?;

    let overall_coefficient = match &input.heat_transfer {
        HeatTransferModel::Fixed {
            overall_coefficient,
        } => *overall_coefficient,
        HeatTransferModel::Convective {
            nusselt,
            wall_conductivity,
        } => {
            let dh = input.geometry.hydraulic_diameter();
            let mut resistance = 0.0;
            for (stream, side) in [(&input.hot, &mut hot), (&input.cold, &mut cold)] {
                let nu = nusselt.nusselt(
                    side.reynolds,
                    stream.coolant.prandtl_number,
                    side.friction_factor,
                )?;
                let h = stream.coolant.convective_coefficient(nu, dh);
                side.nusselt = Some(nu);
                side.convective_coefficient = Some(h);
                resistance += 1.0 / h;
            }
            if let Some(k_wall) = wall_conductivity {
                resistance += input.geometry.plate_thickness / k_wall;
            }
            1.0 / resistance
        }
    };

    let area = required_area(thermal.duty, overall_coefficient, thermal.lmtd)?;
    Ok(SizingStep {
        plates,
        hot,
        cold,
        overall_coefficient,
        required_area: area,
        plates_required: plates_for_area(area, input.geometry.plate_area()),
    })
}

fn side_hydraulics(
    input: &ExchangerInput,
    stream: &StreamInput,
    plates: u32,
) -> Result<SideHydraulics, DomainError> {
    let geometry = &input.geometry;
    let coolant = &stream.coolant;
    let dh = geometry.hydraulic_diameter();

    let velocity = hydraulics::channel_velocity(
        stream.mass_flow,
        coolant.density,
        geometry.channel_area(),
        plates,
    );
    let reynolds = coolant.reynolds_number(velocity, dh);
    let friction_factor = correlation::friction_factor(reynolds, input.corrugation_angle)?;
    let channel_pressure_drop = hydraulics::channel_pressure_drop(
        friction_factor,
        geometry.plate_height,
        dh,
        coolant.density,
        velocity,
    );
    let port_pressure_drop = input
        .port_diameter
        .map(|d| {
            let v_port = hydraulics::port_velocity(stream.mass_flow, coolant.density, d);
            hydraulics::port_pressure_drop(coolant.density, v_port)
        })
        .unwrap_or(0.0);

    Ok(SideHydraulics {
        velocity,
        reynolds,
        friction_factor,
        channel_pressure_drop,
        port_pressure_drop,
        nusselt: None,
        convective_coefficient: None,
    })
}
