use std::path::Path;

use crate::config::{self, Config};
use crate::export::ExportError;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] config::ConfigError),
    /// 결과 내보내기 오류
    #[error("내보내기 오류: {0}")]
    Export(#[from] ExportError),
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 종료 시 설정을 `config_path`에 저장한다.
pub fn run(config: &mut Config, tr: &Translator, config_path: &Path) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::EditSystem => {
                ui_cli::handle_edit_system(tr, config)?;
                config::save_to(config, config_path)?;
                println!("{}", tr.t(i18n::keys::EDIT_SAVED));
            }
            MenuChoice::Projection => ui_cli::handle_projection(tr, config)?,
            MenuChoice::LoanCalculator => ui_cli::handle_loan_calculator(tr, config)?,
            MenuChoice::CreditLookup => ui_cli::handle_credit_lookup(tr, config)?,
            MenuChoice::Export => ui_cli::handle_export(tr, config)?,
            MenuChoice::ApiKeys => ui_cli::handle_api_keys(tr, config),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config::save_to(config, config_path)?;
                println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                config::save_to(config, config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
