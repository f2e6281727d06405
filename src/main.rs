use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use solar_finance_toolbox::{app, config, export, finance, i18n, report};
use tracing_subscriber::EnvFilter;

/// 태양광 설비 재무 계산기 (CLI)
#[derive(Debug, Parser)]
#[command(name = "solar_finance_toolbox_cli", version, about)]
struct Cli {
    /// 언어 (auto/ko/en-us)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: PathBuf,
    /// 저장된 구성으로 예측 표를 출력하고 종료한다
    #[arg(long)]
    project: bool,
    /// 예측 결과를 JSON으로 저장하고 종료한다 ("-"이면 표준 출력)
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_create(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    if cli.project || cli.json.is_some() {
        let projection = finance::project(&cfg.system);
        if let Some(path) = cli.json {
            if path.as_os_str() == "-" {
                println!("{}", export::to_json(&cfg.system, &projection)?);
            } else {
                export::write_json(&path, &cfg.system, &projection)?;
            }
        }
        if cli.project {
            print!("{}", report::projection_table(&tr, &cfg.currency_symbol, &projection.rows));
            println!("{}", tr.t(i18n::keys::SUMMARY_HEADING));
            print!("{}", report::summary_block(&tr, &cfg.currency_symbol, &projection.summary));
        }
        return Ok(());
    }

    app::run(&mut cfg, &tr, &cli.config)
}
