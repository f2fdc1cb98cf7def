use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use plate_hx::i18n::{self, keys, Translator};
use plate_hx::{config, exchanger, report, ParameterSet};

/// 판형 열교환기 LMTD / 마찰계수 / 압력손실 계산기
#[derive(Debug, Parser)]
#[command(name = "plate_hx", version, about)]
struct Cli {
    /// 파라미터 파일 (TOML)
    #[arg(default_value = "data/parameters.toml")]
    parameters: PathBuf,

    /// 보고서 언어 (auto, ko, en)
    #[arg(long, default_value = "auto")]
    lang: String,

    /// 보고서 설정 파일. 없으면 기본값으로 생성한다.
    #[arg(long, default_value = "config.toml")]
    settings: PathBuf,

    /// 판 매수별 평가 결과를 함께 출력한다.
    #[arg(long)]
    sweep: bool,

    /// 디버그 로그를 출력한다.
    #[arg(short, long)]
    verbose: bool,
}

/// 프로그램의 엔트리 포인트. 설정과 파라미터를 로드한 뒤 계산 결과를 출력한다.
fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    let tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
    match try_run(&cli) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let settings = config::load_or_default(&cli.settings)?;
    let lang = i18n::resolve_language(&cli.lang, Some(&settings.language));
    let tr = Translator::new(&lang);
    tracing::debug!(lang = tr.language().as_code(), "resolved report language");

    let params = ParameterSet::load(&cli.parameters)?;
    let analysis = exchanger::run(&params)?;
    Ok(report::render(&analysis, &settings, &tr, cli.sweep))
}
