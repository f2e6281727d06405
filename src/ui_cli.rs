use std::io::{self, Write};
use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::app::AppError;
use crate::config::Config;
use crate::export;
use crate::finance::{self, CreditTier, LoanTerms};
use crate::i18n::{keys, Translator};
use crate::integrations::{resolve_api_key_from_env, ApiService, KeySource};
use crate::report;
use crate::system::{EquipmentPricing, FinancingMode, PricingMode};
use crate::units::{SunHoursMode, UsagePeriod};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EditSystem,
    Projection,
    LoanCalculator,
    CreditLookup,
    Export,
    ApiKeys,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_EDIT_SYSTEM,
        keys::MAIN_MENU_PROJECTION,
        keys::MAIN_MENU_LOAN,
        keys::MAIN_MENU_CREDIT,
        keys::MAIN_MENU_EXPORT,
        keys::MAIN_MENU_API_KEYS,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::EditSystem),
            "2" => return Ok(MenuChoice::Projection),
            "3" => return Ok(MenuChoice::LoanCalculator),
            "4" => return Ok(MenuChoice::CreditLookup),
            "5" => return Ok(MenuChoice::Export),
            "6" => return Ok(MenuChoice::ApiKeys),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 시스템 구성 입력 메뉴를 처리한다. 빈 입력은 현재값을 유지한다.
pub fn handle_edit_system(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EDIT_HEADING));
    println!("{}", tr.t(keys::EDIT_KEEP_HINT));
    let sys = &mut cfg.system;

    println!("{}", tr.t(keys::EQUIP_PANELS));
    edit_equipment(tr, &mut sys.panels)?;
    sys.panel_wattage_w = read_f64_or(&tr.t(keys::PROMPT_PANEL_WATTAGE), sys.panel_wattage_w)?;
    println!("{}", tr.t(keys::EQUIP_INVERTERS));
    edit_equipment(tr, &mut sys.inverters)?;
    println!("{}", tr.t(keys::EQUIP_BATTERIES));
    edit_equipment(tr, &mut sys.batteries)?;

    sys.sun_hours_mode = read_choice_or(
        &tr.t(keys::PROMPT_SUN_HOURS_MODE),
        sys.sun_hours_mode,
        &[("1", SunHoursMode::Daily), ("2", SunHoursMode::Yearly)],
    )?;
    sys.sun_hours = read_f64_or(&tr.t(keys::PROMPT_SUN_HOURS), sys.sun_hours)?;
    sys.performance_ratio =
        read_f64_or(&tr.t(keys::PROMPT_PERFORMANCE_RATIO), sys.performance_ratio)?;
    sys.usage_period = read_choice_or(
        &tr.t(keys::PROMPT_USAGE_PERIOD),
        sys.usage_period,
        &[("1", UsagePeriod::Monthly), ("2", UsagePeriod::Yearly)],
    )?;
    sys.energy_usage_kwh = read_f64_or(&tr.t(keys::PROMPT_USAGE), sys.energy_usage_kwh)?;
    sys.energy_cost = read_f64_or(&tr.t(keys::PROMPT_ENERGY_COST), sys.energy_cost)?;
    sys.installation_cost = read_f64_or(&tr.t(keys::PROMPT_INSTALLATION), sys.installation_cost)?;
    sys.labor_cost = read_f64_or(&tr.t(keys::PROMPT_LABOR), sys.labor_cost)?;

    sys.financing = read_choice_or(
        &tr.t(keys::PROMPT_FINANCING),
        sys.financing,
        &[("1", FinancingMode::Cash), ("2", FinancingMode::Loan)],
    )?;
    if sys.is_loan() {
        sys.loan_amount = read_f64_or(&tr.t(keys::PROMPT_LOAN_AMOUNT), sys.loan_amount)?;
        sys.loan_term_years = read_u32_in_range_or(
            tr,
            &tr.t(keys::PROMPT_LOAN_TERM),
            sys.loan_term_years,
            1..=finance::MAX_LOAN_TERM_YEARS,
        )?;
        sys.rate_from_credit_score =
            read_yes_no_or(&tr.t(keys::PROMPT_RATE_FROM_CREDIT), sys.rate_from_credit_score)?;
        if sys.rate_from_credit_score {
            sys.credit_score = read_f64_or(&tr.t(keys::PROMPT_CREDIT_SCORE), sys.credit_score)?;
        } else {
            sys.loan_interest_rate =
                read_f64_or(&tr.t(keys::PROMPT_LOAN_RATE), sys.loan_interest_rate)?;
        }
    }

    sys.degradation_rate = read_f64_or(&tr.t(keys::PROMPT_DEGRADATION), sys.degradation_rate)?;
    sys.utility_inflation_rate =
        read_f64_or(&tr.t(keys::PROMPT_INFLATION), sys.utility_inflation_rate)?;
    Ok(())
}

fn edit_equipment(tr: &Translator, eq: &mut EquipmentPricing) -> Result<(), AppError> {
    eq.quantity = read_u32_or(&tr.t(keys::PROMPT_QUANTITY), eq.quantity)?;
    eq.mode = read_choice_or(
        &tr.t(keys::PROMPT_PRICING_MODE),
        eq.mode,
        &[("1", PricingMode::PerUnit), ("2", PricingMode::Bulk)],
    )?;
    match eq.mode {
        PricingMode::PerUnit => {
            eq.unit_cost = read_f64_or(&tr.t(keys::PROMPT_UNIT_COST), eq.unit_cost)?;
        }
        PricingMode::Bulk => {
            eq.bulk_cost = read_f64_or(&tr.t(keys::PROMPT_BULK_COST), eq.bulk_cost)?;
            eq.bulk_count = read_u32_or(&tr.t(keys::PROMPT_BULK_COUNT), eq.bulk_count)?;
        }
    }
    Ok(())
}

/// 저장된 구성으로 25년 예측과 요약을 출력한다.
pub fn handle_projection(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PROJECTION_HEADING));
    let projection = finance::project(&cfg.system);
    print!(
        "{}",
        report::projection_table(tr, &cfg.currency_symbol, &projection.rows)
    );
    println!("{}", tr.t(keys::SUMMARY_HEADING));
    print!(
        "{}",
        report::summary_block(tr, &cfg.currency_symbol, &projection.summary)
    );
    Ok(())
}

/// 단독 대출 계산기. 구성과 무관하게 원금/이율/기간을 입력받는다.
pub fn handle_loan_calculator(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::LOAN_HEADING));
    let principal = read_f64(&tr.t(keys::PROMPT_PRINCIPAL))?;
    let rate = read_f64(&format!("{}: ", tr.t(keys::PROMPT_LOAN_RATE)))?;
    let years = loop {
        let v = read_f64(&format!("{}: ", tr.t(keys::PROMPT_LOAN_TERM)))?;
        if v.fract() == 0.0 && (1.0..=f64::from(finance::MAX_LOAN_TERM_YEARS)).contains(&v) {
            break v as u32;
        }
        print_out_of_range(tr, 1, finance::MAX_LOAN_TERM_YEARS);
    };
    let terms = LoanTerms::new(principal, rate, years);
    let sym = &cfg.currency_symbol;
    println!(
        "{} {}",
        tr.t(keys::SUMMARY_MONTHLY_PAYMENT),
        report::format_currency(sym, terms.monthly_payment)
    );
    println!(
        "{} {}",
        tr.t(keys::SUMMARY_TOTAL_INTEREST),
        report::format_currency(sym, terms.total_interest())
    );
    if read_yes_no_or(&tr.t(keys::PROMPT_SHOW_SCHEDULE), false)? {
        println!("{}", tr.t(keys::AMORTIZATION_HEADING));
        let schedule = finance::amortization_schedule(&terms);
        print!("{}", report::amortization_table(tr, sym, &schedule));
    }
    Ok(())
}

/// 신용점수로 금리 구간을 조회한다.
pub fn handle_credit_lookup(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CREDIT_HEADING));
    let score = read_f64_or(&tr.t(keys::PROMPT_CREDIT_SCORE), cfg.system.credit_score)?;
    let tier = CreditTier::from_score(score);
    println!(
        "{} {:.1}% ({})",
        tr.t(keys::RESULT_CREDIT_RATE),
        tier.annual_rate_percent(),
        tr.t(tier.label_key())
    );
    Ok(())
}

/// 예측 결과를 JSON 파일로 저장한다.
pub fn handle_export(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EXPORT_HEADING));
    let input = read_line(&tr.t(keys::PROMPT_EXPORT_PATH))?;
    let path = match input.trim() {
        "" => PathBuf::from("projection.json"),
        p => PathBuf::from(p),
    };
    let projection = finance::project(&cfg.system);
    export::write_json(&path, &cfg.system, &projection)?;
    println!("{} {}", tr.t(keys::EXPORT_DONE), path.display());
    Ok(())
}

/// 서비스별 API 키 확인 결과를 출력한다. 키 값 자체는 표시하지 않는다.
pub fn handle_api_keys(tr: &Translator, cfg: &Config) {
    println!("{}", tr.t(keys::API_KEYS_HEADING));
    for service in ApiService::ALL {
        match resolve_api_key_from_env(&cfg.api_keys, service) {
            Some(resolved) => {
                let source = match resolved.source {
                    KeySource::ConfigUnified => "config (unified)",
                    KeySource::ConfigService => "config",
                    KeySource::EnvUnified => service.unified_env_var(),
                    KeySource::EnvService => service.service_env_var(),
                };
                println!(
                    "{:<14} {} [{source}]",
                    service.display_name(),
                    tr.t(keys::API_KEY_FOUND)
                );
            }
            None => println!(
                "{:<14} {}",
                service.display_name(),
                tr.t(keys::API_KEY_MISSING)
            ),
        }
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    let lang = read_line(&tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    match lang.trim() {
        "" => {}
        "auto" | "ko" | "en-us" => cfg.language = lang.trim().to_string(),
        _ => println!("{}", tr.t(keys::INVALID_SELECTION)),
    }
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_CURRENCY),
        cfg.currency_symbol
    );
    let sym = read_line(&tr.t(keys::SETTINGS_PROMPT_CURRENCY))?;
    if !sym.trim().is_empty() {
        cfg.currency_symbol = sym.trim().to_string();
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_f64_or(label: &str, current: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{current}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_u32_or(label: &str, current: u32) -> Result<u32, AppError> {
    loop {
        let s = read_line(&format!("{label} [{current}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_u32_in_range_or(
    tr: &Translator,
    label: &str,
    current: u32,
    range: RangeInclusive<u32>,
) -> Result<u32, AppError> {
    loop {
        let v = read_u32_or(label, current)?;
        if range.contains(&v) {
            return Ok(v);
        }
        print_out_of_range(tr, *range.start(), *range.end());
    }
}

fn print_out_of_range(tr: &Translator, min: u32, max: u32) {
    println!(
        "{}",
        tr.t(keys::ERROR_OUT_OF_RANGE)
            .replace("{min}", &min.to_string())
            .replace("{max}", &max.to_string())
    );
}

fn read_yes_no_or(label: &str, current: bool) -> Result<bool, AppError> {
    let shown = if current { "y" } else { "n" };
    let s = read_line(&format!("{label} [{shown}]: "))?;
    Ok(match s.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => current,
    })
}

fn read_choice_or<T: Copy + PartialEq>(
    label: &str,
    current: T,
    options: &[(&str, T)],
) -> Result<T, AppError> {
    let shown = options
        .iter()
        .find(|(_, v)| *v == current)
        .map_or("?", |(k, _)| *k);
    let s = read_line(&format!("{label} [{shown}]: "))?;
    let picked = options
        .iter()
        .find(|(k, _)| *k == s.trim())
        .map_or(current, |(_, v)| *v);
    Ok(picked)
}
