//! 설정 파일 저장/로드 테스트.
use solar_finance_toolbox::config::{self, Config};
use solar_finance_toolbox::finance::resolve_loan_rate;
use solar_finance_toolbox::system::{FinancingMode, PricingMode};

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_create(&path).expect("load_or_create");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

#[test]
fn saved_configuration_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.language = "ko".into();
    cfg.system.financing = FinancingMode::Loan;
    cfg.system.panels.mode = PricingMode::Bulk;
    cfg.system.loan_term_years = 20;
    cfg.api_keys.google_unified = "g-key".into();
    config::save_to(&cfg, &path).expect("save");

    let loaded = config::load_from(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn partial_file_fills_defaults() {
    let src = r#"
language = "en-us"

[system]
financing = "loan"
loan_amount = 5000.0

[system.panels]
mode = "bulk"
unit_cost = 300.0
bulk_cost = 6000.0
bulk_count = 20
quantity = 20
"#;
    let cfg: Config = toml::from_str(src).expect("parse");
    assert_eq!(cfg.language, "en-us");
    assert_eq!(cfg.currency_symbol, "$");
    assert_eq!(cfg.system.financing, FinancingMode::Loan);
    assert_eq!(cfg.system.loan_amount, 5000.0);
    assert_eq!(cfg.system.panels.bulk_cost, 6000.0);
    assert_eq!(cfg.system.loan_term_years, 15);
    assert!(cfg.api_keys.ai_unified.is_empty());
}

#[test]
fn malformed_file_reports_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = [").expect("write");
    let err = config::load_from(&path).expect_err("should fail");
    assert!(matches!(err, config::ConfigError::Serde(_)));
}

#[test]
fn negative_credit_score_and_pack_dir_load() {
    let src = r#"
language_pack_dir = "my_locales"

[system]
credit_score = -30
rate_from_credit_score = true
"#;
    let cfg: Config = toml::from_str(src).expect("parse");
    assert_eq!(cfg.language_pack_dir.as_deref(), Some("my_locales"));
    assert_eq!(cfg.system.credit_score, -30.0);
    assert_eq!(resolve_loan_rate(&cfg.system), 12.0);
}
