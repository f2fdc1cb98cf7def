//! 계산 결과를 `라벨 :: 값 단위` 형식의 텍스트 보고서로 만든다.

use crate::config::Settings;
use crate::exchanger::{Analysis, FlowArrangement, Side, Warning};
use crate::i18n::{keys, Translator};
use crate::units::UnitScale;

/// 보고서 문자열을 만든다. `include_sweep`이면 판 매수별 평가 행을 덧붙인다.
pub fn render(
    analysis: &Analysis,
    settings: &Settings,
    tr: &Translator,
    include_sweep: bool,
) -> String {
    let units = &settings.report_units;
    let p = settings.precision;
    let mut out = String::new();
    let mut line = |key: &str, value: String| {
        out.push_str(&format!("{} :: {}\n", tr.t(key), value));
    };

    // 불확도는 입력에 ± 가 적혀 있을 때만 붙는다
    let sigma = analysis.uncertainty;
    let spread = |s: Option<f64>| -> String {
        s.map(|dk| format!(" ± {:.p$}", units.temperature.difference_from_kelvin(dk)))
            .unwrap_or_default()
    };
    let temperature = |k: f64, s: Option<f64>| {
        format!(
            "{:.p$}{} {}",
            units.temperature.from_base(k),
            spread(s),
            units.temperature.symbol()
        )
    };
    let difference = |dk: f64, s: Option<f64>| {
        format!(
            "{:.p$}{} {}",
            units.temperature.difference_from_kelvin(dk),
            spread(s),
            units.temperature.difference_symbol()
        )
    };
    let thermal = &analysis.thermal;
    let t = &thermal.temperatures;
    line(keys::HOT_COOLANT, analysis.hot_coolant.clone());
    line(keys::COLD_COOLANT, analysis.cold_coolant.clone());
    line(
        keys::FLOW_ARRANGEMENT,
        tr.t(match analysis.arrangement {
            FlowArrangement::CounterFlow => keys::COUNTER_FLOW,
            FlowArrangement::ParallelFlow => keys::PARALLEL_FLOW,
        })
        .to_string(),
    );
    line(keys::HOT_INLET, temperature(t.hot_inlet, sigma.map(|u| u.hot_inlet)));
    line(keys::HOT_OUTLET, temperature(t.hot_outlet, sigma.map(|u| u.hot_outlet)));
    line(keys::HOT_DELTA, difference(thermal.hot_temperature_change(), None));
    line(keys::COLD_INLET, temperature(t.cold_inlet, sigma.map(|u| u.cold_inlet)));
    line(keys::COLD_OUTLET, temperature(t.cold_outlet, sigma.map(|u| u.cold_outlet)));
    line(keys::COLD_DELTA, difference(thermal.cold_temperature_change(), None));
    line(
        keys::HEAT_DUTY,
        measured(thermal.duty, sigma.map(|u| u.duty), units.power, p),
    );
    line(keys::LMTD, difference(thermal.lmtd, sigma.map(|u| u.lmtd)));

    let g = &analysis.geometry;
    line(
        keys::CHANNEL_AREA,
        format!(
            "{:.6e} {}",
            units.area.from_base(g.channel_area()),
            units.area.symbol()
        ),
    );
    line(keys::CHANNEL_VOLUME, quantity(g.channel_volume(), units.volume, p));
    line(keys::PLATE_AREA, quantity(g.plate_area(), units.area, p));
    line(
        keys::PLATE_VOLUME,
        format!(
            "{:.4e} {}",
            units.volume.from_base(g.plate_volume()),
            units.volume.symbol()
        ),
    );
    line(
        keys::HYDRAULIC_DIAMETER,
        quantity(g.hydraulic_diameter(), units.length, p),
    );
    line(keys::CORRUGATION_ANGLE, format!("{:.1} °", analysis.corrugation_angle));

    if let Some(step) = analysis.operating_step() {
        let velocity = |v: f64| quantity(v, units.velocity, p);
        let pressure = |v: f64, s: Option<f64>| measured(v, s, units.pressure, p);
        let coefficient = |v: f64| quantity(v, units.heat_transfer, p);

        line(keys::HOT_VELOCITY, velocity(step.hot.velocity));
        line(keys::COLD_VELOCITY, velocity(step.cold.velocity));
        line(keys::HOT_REYNOLDS, format!("{:.0}", step.hot.reynolds));
        line(keys::COLD_REYNOLDS, format!("{:.0}", step.cold.reynolds));
        line(keys::HOT_FRICTION, format!("{:.4}", step.hot.friction_factor));
        line(keys::COLD_FRICTION, format!("{:.4}", step.cold.friction_factor));
        line(
            keys::HOT_PRESSURE_DROP,
            pressure(step.hot.pressure_drop(), sigma.map(|u| u.hot_pressure_drop)),
        );
        line(
            keys::COLD_PRESSURE_DROP,
            pressure(step.cold.pressure_drop(), sigma.map(|u| u.cold_pressure_drop)),
        );
        if let Some(h) = step.hot.convective_coefficient {
            line(keys::HOT_CONVECTIVE, coefficient(h));
        }
        if let Some(h) = step.cold.convective_coefficient {
            line(keys::COLD_CONVECTIVE, coefficient(h));
        }
        line(
            keys::OVERALL_COEFFICIENT,
            measured(
                step.overall_coefficient,
                sigma.map(|u| u.overall_coefficient),
                units.heat_transfer,
                p,
            ),
        );
        line(
            keys::REQUIRED_AREA,
            measured(step.required_area, sigma.map(|u| u.required_area), units.area, p),
        );
    }
    line(
        keys::PLATES_REQUIRED,
        match analysis.plate_count() {
            Some(n) => n.to_string(),
            None => tr.t(keys::NO_SOLUTION).to_string(),
        },
    );

    let mut text = format!("{}\n{}", tr.t(keys::REPORT_TITLE), out);

    if !analysis.warnings.is_empty() {
        text.push_str(tr.t(keys::WARNINGS));
        text.push('\n');
        for w in &analysis.warnings {
            text.push_str(&format!("  - {}\n", describe_warning(w, tr)));
        }
    }

    if include_sweep {
        text.push_str(tr.t(keys::SWEEP_HEADER));
        text.push('\n');
        for step in &analysis.sweep {
            text.push_str(&format!(
                "{}, {}, {:.6}, {:.6}, {:.0}, {:.0}, {:.3}\n",
                step.plates,
                step.plates_required,
                step.hot.velocity,
                step.cold.velocity,
                step.hot.reynolds,
                step.cold.reynolds,
                step.overall_coefficient
            ));
        }
    }
    text
}

fn quantity<U: UnitScale>(value_base: f64, unit: U, precision: usize) -> String {
    measured(value_base, None, unit, precision)
}

/// `값 ± σ 단위`. σ는 단위 배율만 적용한다.
fn measured<U: UnitScale>(
    value_base: f64,
    sigma_base: Option<f64>,
    unit: U,
    precision: usize,
) -> String {
    let value = unit.from_base(value_base);
    match sigma_base {
        Some(s) => {
            let sigma = (unit.from_base(value_base + s) - value).abs();
            format!("{value:.precision$} ± {sigma:.precision$} {}", unit.symbol())
        }
        None => format!("{value:.precision$} {}", unit.symbol()),
    }
}

fn describe_warning(warning: &Warning, tr: &Translator) -> String {
    match warning {
        Warning::EnergyImbalance {
            hot_duty,
            cold_duty,
        } => format!(
            "{} ({:.1} W / {:.1} W)",
            tr.t(keys::WARN_ENERGY_IMBALANCE),
            hot_duty,
            cold_duty
        ),
        Warning::ReynoldsOutsideCorrelation { side, reynolds } => {
            let label = match side {
                Side::Hot => keys::HOT_REYNOLDS,
                Side::Cold => keys::COLD_REYNOLDS,
            };
            format!(
                "{} ({} = {:.0})",
                tr.t(keys::WARN_REYNOLDS_RANGE),
                tr.t(label),
                reynolds
            )
        }
        Warning::CorrugationAngleOutsideCorrelation { angle } => {
            format!("{} ({:.1}°)", tr.t(keys::WARN_ANGLE_RANGE), angle)
        }
        Warning::NoPlateCount { plate_max_count } => {
            format!("{} ({})", tr.t(keys::WARN_NO_PLATE_COUNT), plate_max_count)
        }
    }
}
