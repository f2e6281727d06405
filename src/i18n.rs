use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_EDIT_SYSTEM: &str = "main_menu.edit_system";
    pub const MAIN_MENU_PROJECTION: &str = "main_menu.projection";
    pub const MAIN_MENU_LOAN: &str = "main_menu.loan";
    pub const MAIN_MENU_CREDIT: &str = "main_menu.credit";
    pub const MAIN_MENU_EXPORT: &str = "main_menu.export";
    pub const MAIN_MENU_API_KEYS: &str = "main_menu.api_keys";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const INVALID_SELECTION: &str = "error.invalid_selection";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_OUT_OF_RANGE: &str = "error.out_of_range";

    pub const EDIT_HEADING: &str = "edit.heading";
    pub const EDIT_KEEP_HINT: &str = "edit.keep_hint";
    pub const EDIT_SAVED: &str = "edit.saved";
    pub const EQUIP_PANELS: &str = "equipment.panels";
    pub const EQUIP_INVERTERS: &str = "equipment.inverters";
    pub const EQUIP_BATTERIES: &str = "equipment.batteries";
    pub const PROMPT_PRICING_MODE: &str = "prompt.pricing_mode";
    pub const PROMPT_QUANTITY: &str = "prompt.quantity";
    pub const PROMPT_UNIT_COST: &str = "prompt.unit_cost";
    pub const PROMPT_BULK_COST: &str = "prompt.bulk_cost";
    pub const PROMPT_BULK_COUNT: &str = "prompt.bulk_count";
    pub const PROMPT_PANEL_WATTAGE: &str = "prompt.panel_wattage";
    pub const PROMPT_PERFORMANCE_RATIO: &str = "prompt.performance_ratio";
    pub const PROMPT_SUN_HOURS: &str = "prompt.sun_hours";
    pub const PROMPT_SUN_HOURS_MODE: &str = "prompt.sun_hours_mode";
    pub const PROMPT_USAGE: &str = "prompt.usage";
    pub const PROMPT_ENERGY_COST: &str = "prompt.energy_cost";
    pub const PROMPT_USAGE_PERIOD: &str = "prompt.usage_period";
    pub const PROMPT_INSTALLATION: &str = "prompt.installation";
    pub const PROMPT_LABOR: &str = "prompt.labor";
    pub const PROMPT_FINANCING: &str = "prompt.financing";
    pub const PROMPT_LOAN_AMOUNT: &str = "prompt.loan_amount";
    pub const PROMPT_LOAN_TERM: &str = "prompt.loan_term";
    pub const PROMPT_LOAN_RATE: &str = "prompt.loan_rate";
    pub const PROMPT_CREDIT_SCORE: &str = "prompt.credit_score";
    pub const PROMPT_RATE_FROM_CREDIT: &str = "prompt.rate_from_credit";
    pub const PROMPT_DEGRADATION: &str = "prompt.degradation";
    pub const PROMPT_INFLATION: &str = "prompt.inflation";

    pub const PROJECTION_HEADING: &str = "projection.heading";
    pub const AMORTIZATION_HEADING: &str = "projection.amortization_heading";
    pub const TABLE_YEAR: &str = "table.year";
    pub const TABLE_PRODUCTION: &str = "table.production";
    pub const TABLE_RATE: &str = "table.rate";
    pub const TABLE_VALUE: &str = "table.value";
    pub const TABLE_LOAN: &str = "table.loan";
    pub const TABLE_CUMULATIVE: &str = "table.cumulative";
    pub const TABLE_PRINCIPAL: &str = "table.principal";
    pub const TABLE_INTEREST: &str = "table.interest";
    pub const TABLE_BALANCE: &str = "table.balance";

    pub const SUMMARY_HEADING: &str = "summary.heading";
    pub const SUMMARY_SYSTEM_SIZE: &str = "summary.system_size";
    pub const SUMMARY_FIRST_YEAR_PRODUCTION: &str = "summary.first_year_production";
    pub const SUMMARY_TOTAL_COST: &str = "summary.total_cost";
    pub const SUMMARY_EFFECTIVE_COST: &str = "summary.effective_cost";
    pub const SUMMARY_TOTAL_SAVINGS: &str = "summary.total_savings";
    pub const SUMMARY_NET_BENEFIT: &str = "summary.net_benefit";
    pub const SUMMARY_ROI: &str = "summary.roi";
    pub const SUMMARY_BREAK_EVEN: &str = "summary.break_even";
    pub const SUMMARY_BREAK_EVEN_YEAR: &str = "summary.break_even_year";
    pub const SUMMARY_BREAK_EVEN_NEVER: &str = "summary.break_even_never";
    pub const SUMMARY_MONTHLY_PAYMENT: &str = "summary.monthly_payment";
    pub const SUMMARY_TOTAL_INTEREST: &str = "summary.total_interest";

    pub const LOAN_HEADING: &str = "loan.heading";
    pub const PROMPT_PRINCIPAL: &str = "prompt.principal";
    pub const PROMPT_SHOW_SCHEDULE: &str = "prompt.show_schedule";

    pub const CREDIT_HEADING: &str = "credit.heading";
    pub const RESULT_CREDIT_RATE: &str = "result.credit_rate";

    pub const EXPORT_HEADING: &str = "export.heading";
    pub const PROMPT_EXPORT_PATH: &str = "prompt.export_path";
    pub const EXPORT_DONE: &str = "export.done";

    pub const API_KEYS_HEADING: &str = "api_keys.heading";
    pub const API_KEY_FOUND: &str = "api_keys.found";
    pub const API_KEY_MISSING: &str = "api_keys.missing";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_CURRENT_CURRENCY: &str = "settings.current_currency";
    pub const SETTINGS_PROMPT_CURRENCY: &str = "settings.prompt_currency";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const GUI_SECTION_EQUIPMENT: &str = "gui.section.equipment";
    pub const GUI_SECTION_ENERGY: &str = "gui.section.energy";
    pub const GUI_SECTION_FINANCING: &str = "gui.section.financing";
    pub const GUI_SECTION_ASSUMPTIONS: &str = "gui.section.assumptions";
    pub const GUI_TAB_PROJECTION: &str = "gui.tab.projection";
    pub const GUI_TAB_AMORTIZATION: &str = "gui.tab.amortization";
    pub const GUI_EXPORT_BUTTON: &str = "gui.export_button";
    pub const GUI_SAVE_BUTTON: &str = "gui.save_button";
    pub const GUI_RESET_BUTTON: &str = "gui.reset_button";
    pub const GUI_MODE_PER_UNIT: &str = "gui.mode.per_unit";
    pub const GUI_MODE_BULK: &str = "gui.mode.bulk";
    pub const GUI_MODE_CASH: &str = "gui.mode.cash";
    pub const GUI_MODE_LOAN: &str = "gui.mode.loan";
    pub const GUI_MODE_MONTHLY: &str = "gui.mode.monthly";
    pub const GUI_MODE_YEARLY: &str = "gui.mode.yearly";
    pub const GUI_MODE_DAILY: &str = "gui.mode.daily";
    pub const GUI_NO_LOAN: &str = "gui.no_loan";
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
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순으로 찾고, 영어에 없으면 한국어로 폴백한다.
    pub fn t(&self, key: &str) -> Cow<'static, str> {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return Cow::Owned(v.clone());
        }
        let s = match self.lang {
            Language::En => en(key).or_else(|| ko(key)),
            Language::Ko => ko(key),
        };
        match s {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(key.to_string()),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
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
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// 중첩 테이블을 점(.)으로 이은 플랫 맵으로 변환한다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "Solar Finance Toolbox",
        MAIN_MENU_TITLE => "\n=== Solar Finance Toolbox ===",
        MAIN_MENU_EDIT_SYSTEM => "1) 시스템 구성 입력",
        MAIN_MENU_PROJECTION => "2) 25년 재무 예측",
        MAIN_MENU_LOAN => "3) 대출 상환 계산기",
        MAIN_MENU_CREDIT => "4) 신용점수 금리 조회",
        MAIN_MENU_EXPORT => "5) JSON 내보내기",
        MAIN_MENU_API_KEYS => "6) API 키 상태",
        MAIN_MENU_SETTINGS => "7) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        INVALID_SELECTION => "잘못된 선택입니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_OUT_OF_RANGE => "{min}~{max} 범위로 입력하세요.",
        EDIT_HEADING => "\n-- 시스템 구성 입력 --",
        EDIT_KEEP_HINT => "엔터를 누르면 [현재값]을 유지합니다.",
        EDIT_SAVED => "구성이 저장되었습니다.",
        EQUIP_PANELS => "[패널]",
        EQUIP_INVERTERS => "[인버터]",
        EQUIP_BATTERIES => "[배터리]",
        PROMPT_PRICING_MODE => "가격 방식 (1=개당, 2=묶음)",
        PROMPT_QUANTITY => "수량",
        PROMPT_UNIT_COST => "개당 단가",
        PROMPT_BULK_COST => "묶음 가격",
        PROMPT_BULK_COUNT => "묶음 수량",
        PROMPT_PANEL_WATTAGE => "패널 정격 출력 [W]",
        PROMPT_PERFORMANCE_RATIO => "성능 계수 (0~1)",
        PROMPT_SUN_HOURS => "피크 일사 시간",
        PROMPT_SUN_HOURS_MODE => "일사 시간 기준 (1=일, 2=연)",
        PROMPT_USAGE => "전력 사용량 [kWh]",
        PROMPT_ENERGY_COST => "전기 요금",
        PROMPT_USAGE_PERIOD => "사용량/요금 기간 (1=월, 2=연)",
        PROMPT_INSTALLATION => "설치비",
        PROMPT_LABOR => "인건비",
        PROMPT_FINANCING => "자금 조달 (1=현금, 2=대출)",
        PROMPT_LOAN_AMOUNT => "대출 금액",
        PROMPT_LOAN_TERM => "대출 기간 [년]",
        PROMPT_LOAN_RATE => "대출 연이율 [%]",
        PROMPT_CREDIT_SCORE => "신용점수",
        PROMPT_RATE_FROM_CREDIT => "신용점수로 금리 추정 (y/n)",
        PROMPT_DEGRADATION => "연간 출력 저하율 [%]",
        PROMPT_INFLATION => "연간 전기요금 상승률 [%]",
        PROJECTION_HEADING => "\n-- 25년 재무 예측 --",
        AMORTIZATION_HEADING => "\n-- 연도별 상환표 --",
        TABLE_YEAR => "연도",
        TABLE_PRODUCTION => "발전량kWh",
        TABLE_RATE => "요금/kWh",
        TABLE_VALUE => "절감액",
        TABLE_LOAN => "대출상환",
        TABLE_CUMULATIVE => "누적편익",
        TABLE_PRINCIPAL => "원금",
        TABLE_INTEREST => "이자",
        TABLE_BALANCE => "잔액",
        SUMMARY_HEADING => "\n-- 요약 --",
        SUMMARY_SYSTEM_SIZE => "설비 용량:",
        SUMMARY_FIRST_YEAR_PRODUCTION => "1년차 발전량(사용량 대비):",
        SUMMARY_TOTAL_COST => "총 시스템 비용:",
        SUMMARY_EFFECTIVE_COST => "실부담 비용:",
        SUMMARY_TOTAL_SAVINGS => "총 전기요금 절감액:",
        SUMMARY_NET_BENEFIT => "25년 순편익:",
        SUMMARY_ROI => "투자수익률:",
        SUMMARY_BREAK_EVEN => "손익분기:",
        SUMMARY_BREAK_EVEN_YEAR => "{year}년차",
        SUMMARY_BREAK_EVEN_NEVER => "25년 내 도달하지 않음",
        SUMMARY_MONTHLY_PAYMENT => "월 상환액:",
        SUMMARY_TOTAL_INTEREST => "총 이자:",
        LOAN_HEADING => "\n-- 대출 상환 계산기 --",
        PROMPT_PRINCIPAL => "대출 원금: ",
        PROMPT_SHOW_SCHEDULE => "상환표를 표시할까요? (y/n): ",
        CREDIT_HEADING => "\n-- 신용점수 금리 조회 --",
        RESULT_CREDIT_RATE => "예상 연이율:",
        "credit.tier.excellent" => "최우수",
        "credit.tier.very_good" => "우수",
        "credit.tier.good" => "양호",
        "credit.tier.fair" => "보통",
        "credit.tier.poor" => "미흡",
        "credit.tier.bad" => "불량",
        EXPORT_HEADING => "\n-- JSON 내보내기 --",
        PROMPT_EXPORT_PATH => "저장 경로 (기본 projection.json): ",
        EXPORT_DONE => "저장 완료:",
        API_KEYS_HEADING => "\n-- API 키 상태 --",
        API_KEY_FOUND => "설정됨",
        API_KEY_MISSING => "없음",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_PROMPT_LANGUAGE => "언어 (auto/ko/en-us, 엔터=유지): ",
        SETTINGS_CURRENT_CURRENCY => "현재 통화 기호:",
        SETTINGS_PROMPT_CURRENCY => "통화 기호 (엔터=유지): ",
        SETTINGS_SAVED => "설정이 저장되었습니다. 언어 변경은 재시작 후 적용됩니다.",
        GUI_SECTION_EQUIPMENT => "장비",
        GUI_SECTION_ENERGY => "에너지 사용",
        GUI_SECTION_FINANCING => "자금 조달",
        GUI_SECTION_ASSUMPTIONS => "가정",
        GUI_TAB_PROJECTION => "연도별 예측",
        GUI_TAB_AMORTIZATION => "상환표",
        GUI_EXPORT_BUTTON => "JSON 내보내기",
        GUI_SAVE_BUTTON => "설정 저장",
        GUI_RESET_BUTTON => "기본값",
        GUI_MODE_PER_UNIT => "개당",
        GUI_MODE_BULK => "묶음",
        GUI_MODE_CASH => "현금",
        GUI_MODE_LOAN => "대출",
        GUI_MODE_MONTHLY => "월",
        GUI_MODE_YEARLY => "연",
        GUI_MODE_DAILY => "일",
        GUI_NO_LOAN => "현금 구매에는 상환표가 없습니다.",
        _ => return None,
    };
    Some(s)
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        APP_TITLE => "Solar Finance Toolbox",
        MAIN_MENU_TITLE => "\n=== Solar Finance Toolbox ===",
        MAIN_MENU_EDIT_SYSTEM => "1) Edit system configuration",
        MAIN_MENU_PROJECTION => "2) 25-year financial projection",
        MAIN_MENU_LOAN => "3) Loan payment calculator",
        MAIN_MENU_CREDIT => "4) Credit score rate lookup",
        MAIN_MENU_EXPORT => "5) Export JSON",
        MAIN_MENU_API_KEYS => "6) API key status",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        INVALID_SELECTION => "Invalid selection.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_OUT_OF_RANGE => "Enter a value between {min} and {max}.",
        EDIT_HEADING => "\n-- Edit system configuration --",
        EDIT_KEEP_HINT => "Press Enter to keep the [current value].",
        EDIT_SAVED => "Configuration saved.",
        EQUIP_PANELS => "[Panels]",
        EQUIP_INVERTERS => "[Inverters]",
        EQUIP_BATTERIES => "[Batteries]",
        PROMPT_PRICING_MODE => "Pricing mode (1=per unit, 2=bulk)",
        PROMPT_QUANTITY => "Quantity",
        PROMPT_UNIT_COST => "Unit cost",
        PROMPT_BULK_COST => "Bulk package cost",
        PROMPT_BULK_COUNT => "Units in bulk package",
        PROMPT_PANEL_WATTAGE => "Panel rating [W]",
        PROMPT_PERFORMANCE_RATIO => "Performance ratio (0-1)",
        PROMPT_SUN_HOURS => "Peak sun hours",
        PROMPT_SUN_HOURS_MODE => "Sun hours basis (1=daily, 2=yearly)",
        PROMPT_USAGE => "Energy usage [kWh]",
        PROMPT_ENERGY_COST => "Electricity bill",
        PROMPT_USAGE_PERIOD => "Usage/bill period (1=monthly, 2=yearly)",
        PROMPT_INSTALLATION => "Installation cost",
        PROMPT_LABOR => "Labor cost",
        PROMPT_FINANCING => "Financing (1=cash, 2=loan)",
        PROMPT_LOAN_AMOUNT => "Loan amount",
        PROMPT_LOAN_TERM => "Loan term [years]",
        PROMPT_LOAN_RATE => "Loan annual rate [%]",
        PROMPT_CREDIT_SCORE => "Credit score",
        PROMPT_RATE_FROM_CREDIT => "Estimate rate from credit score (y/n)",
        PROMPT_DEGRADATION => "Annual degradation [%]",
        PROMPT_INFLATION => "Annual utility inflation [%]",
        PROJECTION_HEADING => "\n-- 25-year projection --",
        AMORTIZATION_HEADING => "\n-- Amortization by year --",
        TABLE_YEAR => "Year",
        TABLE_PRODUCTION => "kWh",
        TABLE_RATE => "Rate/kWh",
        TABLE_VALUE => "Savings",
        TABLE_LOAN => "Loan",
        TABLE_CUMULATIVE => "Cumulative",
        TABLE_PRINCIPAL => "Principal",
        TABLE_INTEREST => "Interest",
        TABLE_BALANCE => "Balance",
        SUMMARY_HEADING => "\n-- Summary --",
        SUMMARY_SYSTEM_SIZE => "System size:",
        SUMMARY_FIRST_YEAR_PRODUCTION => "Year 1 production (usage offset):",
        SUMMARY_TOTAL_COST => "Total system cost:",
        SUMMARY_EFFECTIVE_COST => "Out-of-pocket cost:",
        SUMMARY_TOTAL_SAVINGS => "Total energy savings:",
        SUMMARY_NET_BENEFIT => "25-year net benefit:",
        SUMMARY_ROI => "ROI:",
        SUMMARY_BREAK_EVEN => "Break-even:",
        SUMMARY_BREAK_EVEN_YEAR => "year {year}",
        SUMMARY_BREAK_EVEN_NEVER => "not within 25 years",
        SUMMARY_MONTHLY_PAYMENT => "Monthly payment:",
        SUMMARY_TOTAL_INTEREST => "Total interest:",
        LOAN_HEADING => "\n-- Loan payment calculator --",
        PROMPT_PRINCIPAL => "Principal: ",
        PROMPT_SHOW_SCHEDULE => "Show amortization schedule? (y/n): ",
        CREDIT_HEADING => "\n-- Credit score rate lookup --",
        RESULT_CREDIT_RATE => "Estimated annual rate:",
        "credit.tier.excellent" => "Excellent",
        "credit.tier.very_good" => "Very good",
        "credit.tier.good" => "Good",
        "credit.tier.fair" => "Fair",
        "credit.tier.poor" => "Poor",
        "credit.tier.bad" => "Bad",
        EXPORT_HEADING => "\n-- Export JSON --",
        PROMPT_EXPORT_PATH => "Output path (default projection.json): ",
        EXPORT_DONE => "Saved:",
        API_KEYS_HEADING => "\n-- API key status --",
        API_KEY_FOUND => "configured",
        API_KEY_MISSING => "missing",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_PROMPT_LANGUAGE => "Language (auto/ko/en-us, Enter=keep): ",
        SETTINGS_CURRENT_CURRENCY => "Current currency symbol:",
        SETTINGS_PROMPT_CURRENCY => "Currency symbol (Enter=keep): ",
        SETTINGS_SAVED => "Settings saved. Language changes apply after restart.",
        GUI_SECTION_EQUIPMENT => "Equipment",
        GUI_SECTION_ENERGY => "Energy usage",
        GUI_SECTION_FINANCING => "Financing",
        GUI_SECTION_ASSUMPTIONS => "Assumptions",
        GUI_TAB_PROJECTION => "Projection",
        GUI_TAB_AMORTIZATION => "Amortization",
        GUI_EXPORT_BUTTON => "Export JSON",
        GUI_SAVE_BUTTON => "Save settings",
        GUI_RESET_BUTTON => "Defaults",
        GUI_MODE_PER_UNIT => "Per unit",
        GUI_MODE_BULK => "Bulk",
        GUI_MODE_CASH => "Cash",
        GUI_MODE_LOAN => "Loan",
        GUI_MODE_MONTHLY => "Monthly",
        GUI_MODE_YEARLY => "Yearly",
        GUI_MODE_DAILY => "Daily",
        GUI_NO_LOAN => "No amortization schedule for cash purchases.",
        _ => return None,
    };
    Some(s)
}
