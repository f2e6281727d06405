//! 번역/표 출력/JSON 내보내기 테스트.
use solar_finance_toolbox::export;
use solar_finance_toolbox::finance::{project, BreakEven};
use solar_finance_toolbox::i18n::{self, keys, Language, Translator};
use solar_finance_toolbox::report::{format_break_even, format_currency, projection_table};
use solar_finance_toolbox::system::SystemConfiguration;

#[test]
fn currency_formatting() {
    assert_eq!(format_currency("$", 0.0), "$0.00");
    assert_eq!(format_currency("$", 1234567.891), "$1,234,567.89");
    assert_eq!(format_currency("$", -999.5), "-$999.50");
    assert_eq!(format_currency("₩", 100.0), "₩100.00");
}

#[test]
fn translator_languages_and_fallback() {
    let ko = Translator::new("ko");
    let en = Translator::new("en-us");
    assert_eq!(ko.language(), Language::Ko);
    assert_eq!(en.language(), Language::En);
    assert_eq!(en.t(keys::MAIN_MENU_EXIT), "0) Exit");
    assert_eq!(ko.t(keys::MAIN_MENU_EXIT), "0) 종료");
    assert_eq!(en.t("no.such.key"), "no.such.key");
}

#[test]
fn explicit_language_flag_wins() {
    assert_eq!(i18n::resolve_language("ko", Some("en-us")), "ko");
    assert_eq!(i18n::resolve_language("auto", Some("en")), "en-us");
}

#[test]
fn language_pack_flattens_tables() {
    let map = i18n::parse_toml_to_map("[main_menu]\nexit = \"0) Quit\"\n").expect("map");
    assert_eq!(map.get("main_menu.exit").map(String::as_str), Some("0) Quit"));
    assert!(i18n::parse_toml_to_map("").is_none());
}

#[test]
fn break_even_text() {
    let en = Translator::new("en");
    assert_eq!(format_break_even(&en, BreakEven::Year(7)), "year 7");
    assert_eq!(format_break_even(&en, BreakEven::NotWithinHorizon), "not within 25 years");
}

#[test]
fn projection_table_has_header_and_rows() {
    let p = project(&SystemConfiguration::default());
    let table = projection_table(&Translator::new("en"), "$", &p.rows);
    assert_eq!(table.lines().count(), 26);
}

#[test]
fn json_export_contains_rows_and_summary() {
    let cfg = SystemConfiguration::default();
    let p = project(&cfg);
    let json = export::to_json(&cfg, &p).expect("json");
    let v: serde_json::Value = serde_json::from_str(&json).expect("parse");
    assert_eq!(v["projection"]["rows"].as_array().map(Vec::len), Some(25));
    assert_eq!(v["projection"]["summary"]["break_even"]["year"], 6);
    assert_eq!(v["configuration"]["financing"], "cash");

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out.json");
    export::write_json(&path, &cfg, &p).expect("write");
    assert!(std::fs::read_to_string(&path).expect("read").contains("\"rows\""));
}

#[test]
fn energy_formatting_picks_unit() {
    use solar_finance_toolbox::report::format_energy;
    assert_eq!(format_energy(14_016.0), "14.02 MWh");
    assert_eq!(format_energy(850.0), "850 kWh");
    assert_eq!(format_energy(0.25), "250 Wh");
}

#[test]
fn configured_language_pack_overrides_builtin_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("en-us.toml"),
        "[main_menu]\nexit = \"0) Quit\"\n",
    )
    .expect("write pack");
    let pack = dir.path().to_str().expect("utf-8 path");
    let tr = Translator::new_with_pack("en-us", Some(pack));
    assert_eq!(tr.t(keys::MAIN_MENU_EXIT), "0) Quit");
    assert_eq!(tr.t(keys::SUMMARY_HEADING), Translator::new("en-us").t(keys::SUMMARY_HEADING));
}
