use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const REPORT_TITLE: &str = "report.title";
    pub const NO_SOLUTION: &str = "report.no_solution";

    pub const HOT_COOLANT: &str = "coolant.hot";
    pub const COLD_COOLANT: &str = "coolant.cold";
    pub const FLOW_ARRANGEMENT: &str = "thermal.flow_arrangement";
    pub const COUNTER_FLOW: &str = "thermal.counter_flow";
    pub const PARALLEL_FLOW: &str = "thermal.parallel_flow";

    pub const HOT_INLET: &str = "thermal.hot_inlet";
    pub const HOT_OUTLET: &str = "thermal.hot_outlet";
    pub const HOT_DELTA: &str = "thermal.hot_delta";
    pub const COLD_INLET: &str = "thermal.cold_inlet";
    pub const COLD_OUTLET: &str = "thermal.cold_outlet";
    pub const COLD_DELTA: &str = "thermal.cold_delta";
    pub const HEAT_DUTY: &str = "thermal.heat_duty";
    pub const LMTD: &str = "thermal.lmtd";

    pub const CHANNEL_AREA: &str = "geometry.channel_area";
    pub const CHANNEL_VOLUME: &str = "geometry.channel_volume";
    pub const PLATE_AREA: &str = "geometry.plate_area";
    pub const PLATE_VOLUME: &str = "geometry.plate_volume";
    pub const HYDRAULIC_DIAMETER: &str = "geometry.hydraulic_diameter";
    pub const CORRUGATION_ANGLE: &str = "geometry.corrugation_angle";

    pub const HOT_VELOCITY: &str = "hydraulics.hot_velocity";
    pub const COLD_VELOCITY: &str = "hydraulics.cold_velocity";
    pub const HOT_REYNOLDS: &str = "hydraulics.hot_reynolds";
    pub const COLD_REYNOLDS: &str = "hydraulics.cold_reynolds";
    pub const HOT_FRICTION: &str = "hydraulics.hot_friction";
    pub const COLD_FRICTION: &str = "hydraulics.cold_friction";
    pub const HOT_PRESSURE_DROP: &str = "hydraulics.hot_pressure_drop";
    pub const COLD_PRESSURE_DROP: &str = "hydraulics.cold_pressure_drop";
    pub const HOT_CONVECTIVE: &str = "hydraulics.hot_convective";
    pub const COLD_CONVECTIVE: &str = "hydraulics.cold_convective";

    pub const OVERALL_COEFFICIENT: &str = "sizing.overall_coefficient";
    pub const REQUIRED_AREA: &str = "sizing.required_area";
    pub const PLATES_REQUIRED: &str = "sizing.plates_required";
    pub const SWEEP_HEADER: &str = "sizing.sweep_header";

    pub const WARNINGS: &str = "warning.heading";
    pub const WARN_ENERGY_IMBALANCE: &str = "warning.energy_imbalance";
    pub const WARN_REYNOLDS_RANGE: &str = "warning.reynolds_range";
    pub const WARN_ANGLE_RANGE: &str = "warning.angle_range";
    pub const WARN_NO_PLATE_COUNT: &str = "warning.no_plate_count";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 보고서 라벨 번역기.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류:",
        REPORT_TITLE => "=== 판형 열교환기 계산 결과 ===",
        NO_SOLUTION => "해 없음",
        HOT_COOLANT => "고온측 유체",
        COLD_COOLANT => "저온측 유체",
        FLOW_ARRANGEMENT => "유동 배열",
        COUNTER_FLOW => "대향류",
        PARALLEL_FLOW => "병류",
        HOT_INLET => "고온측 입구온도",
        HOT_OUTLET => "고온측 출구온도",
        HOT_DELTA => "고온측 ΔT",
        COLD_INLET => "저온측 입구온도",
        COLD_OUTLET => "저온측 출구온도",
        COLD_DELTA => "저온측 ΔT",
        HEAT_DUTY => "열량",
        LMTD => "LMTD",
        CHANNEL_AREA => "유로 단면적",
        CHANNEL_VOLUME => "유로 체적",
        PLATE_AREA => "판 전열면적",
        PLATE_VOLUME => "판 체적",
        HYDRAULIC_DIAMETER => "수력직경",
        CORRUGATION_ANGLE => "주름각",
        HOT_VELOCITY => "고온측 유속",
        COLD_VELOCITY => "저온측 유속",
        HOT_REYNOLDS => "고온측 Re",
        COLD_REYNOLDS => "저온측 Re",
        HOT_FRICTION => "고온측 마찰계수",
        COLD_FRICTION => "저온측 마찰계수",
        HOT_PRESSURE_DROP => "고온측 압력손실",
        COLD_PRESSURE_DROP => "저온측 압력손실",
        HOT_CONVECTIVE => "고온측 대류 열전달계수",
        COLD_CONVECTIVE => "저온측 대류 열전달계수",
        OVERALL_COEFFICIENT => "종합전열계수",
        REQUIRED_AREA => "필요 전열면적",
        PLATES_REQUIRED => "필요 판 매수",
        SWEEP_HEADER => "판 매수, 필요 매수, 고온측 유속, 저온측 유속, 고온측 Re, 저온측 Re, U",
        WARNINGS => "경고:",
        WARN_ENERGY_IMBALANCE => "고온측/저온측 열량 불균형이 5%를 초과합니다",
        WARN_REYNOLDS_RANGE => "레이놀즈수가 마찰계수 상관식 범위(2~10000)를 벗어났습니다",
        WARN_ANGLE_RANGE => "주름각이 마찰계수 상관식 범위(30°~60°)를 벗어났습니다",
        WARN_NO_PLATE_COUNT => "최대 판 매수 안에서 해를 찾지 못했습니다",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error:",
        REPORT_TITLE => "=== Plate Heat Exchanger Results ===",
        NO_SOLUTION => "No Solution",
        HOT_COOLANT => "Hot Coolant",
        COLD_COOLANT => "Cold Coolant",
        FLOW_ARRANGEMENT => "Flow Arrangement",
        COUNTER_FLOW => "counter flow",
        PARALLEL_FLOW => "parallel flow",
        HOT_INLET => "Hot Coolant Ti",
        HOT_OUTLET => "Hot Coolant To",
        HOT_DELTA => "Hot Coolant ΔT",
        COLD_INLET => "Cold Coolant Ti",
        COLD_OUTLET => "Cold Coolant To",
        COLD_DELTA => "Cold Coolant ΔT",
        HEAT_DUTY => "Heat Duty",
        LMTD => "LMTD",
        CHANNEL_AREA => "Channel Area",
        CHANNEL_VOLUME => "Channel Volume",
        PLATE_AREA => "Plate Area",
        PLATE_VOLUME => "Plate Volume",
        HYDRAULIC_DIAMETER => "Hydraulic Diameter",
        CORRUGATION_ANGLE => "Corrugation Angle",
        HOT_VELOCITY => "Hot Fluid Velocity",
        COLD_VELOCITY => "Cold Fluid Velocity",
        HOT_REYNOLDS => "Hot Coolant Re",
        COLD_REYNOLDS => "Cold Coolant Re",
        HOT_FRICTION => "Hot Friction Factor",
        COLD_FRICTION => "Cold Friction Factor",
        HOT_PRESSURE_DROP => "Hot Pressure Drop",
        COLD_PRESSURE_DROP => "Cold Pressure Drop",
        HOT_CONVECTIVE => "Hot Convective Coefficient",
        COLD_CONVECTIVE => "Cold Convective Coefficient",
        OVERALL_COEFFICIENT => "Overall Heat Transfer Coefficient",
        REQUIRED_AREA => "Required Area",
        PLATES_REQUIRED => "Plates Required",
        SWEEP_HEADER => "P_used, P_req, V_h, V_c, Re_h, Re_c, U",
        WARNINGS => "Warnings:",
        WARN_ENERGY_IMBALANCE => "hot/cold duty imbalance exceeds 5%",
        WARN_REYNOLDS_RANGE => "Reynolds number outside the friction correlation range (2-10000)",
        WARN_ANGLE_RANGE => "corrugation angle outside the friction correlation range (30°-60°)",
        WARN_NO_PLATE_COUNT => "no plate count satisfies the duty within the maximum",
        _ => "",
    }
}
