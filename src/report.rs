//! CLI용 텍스트 표 렌더링.

use std::fmt::Write;

use crate::finance::{AmortizationYear, BreakEven, FinancialSummary, ProjectionRow};
use crate::i18n::{keys, Translator};
use crate::units::{convert_energy, EnergyUnit};

/// 천 단위 구분 기호와 소수 둘째 자리까지 금액을 표시한다.
pub fn format_currency(symbol: &str, value: f64) -> String {
    if !value.is_finite() {
        return format!("{symbol}{value}");
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{symbol}{grouped}.{:02}", cents % 100)
}

/// kWh 값을 크기에 맞는 단위로 표시한다.
pub fn format_energy(kwh: f64) -> String {
    let unit = EnergyUnit::best_fit(kwh);
    let value = convert_energy(kwh, EnergyUnit::KilowattHour, unit);
    let precision: usize = if unit == EnergyUnit::MegawattHour { 2 } else { 0 };
    format!("{value:.precision$} {}", unit.symbol())
}

pub fn format_break_even(tr: &Translator, break_even: BreakEven) -> String {
    match break_even {
        BreakEven::Year(y) => tr.t(keys::SUMMARY_BREAK_EVEN_YEAR).replace("{year}", &y.to_string()),
        BreakEven::NotWithinHorizon => tr.t(keys::SUMMARY_BREAK_EVEN_NEVER).into_owned(),
    }
}

/// 연도별 예측 표.
pub fn projection_table(tr: &Translator, symbol: &str, rows: &[ProjectionRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4} {:>12} {:>9} {:>14} {:>14} {:>16}",
        tr.t(keys::TABLE_YEAR),
        tr.t(keys::TABLE_PRODUCTION),
        tr.t(keys::TABLE_RATE),
        tr.t(keys::TABLE_VALUE),
        tr.t(keys::TABLE_LOAN),
        tr.t(keys::TABLE_CUMULATIVE),
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>4} {:>12.0} {:>9.4} {:>14} {:>14} {:>16}",
            row.year,
            row.production_kwh,
            row.electricity_rate,
            format_currency(symbol, row.energy_value),
            format_currency(symbol, row.loan_payment),
            format_currency(symbol, row.cumulative_benefit),
        );
    }
    out
}

/// 연도별 상환표.
pub fn amortization_table(tr: &Translator, symbol: &str, schedule: &[AmortizationYear]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4} {:>14} {:>14} {:>16}",
        tr.t(keys::TABLE_YEAR),
        tr.t(keys::TABLE_PRINCIPAL),
        tr.t(keys::TABLE_INTEREST),
        tr.t(keys::TABLE_BALANCE),
    );
    for y in schedule {
        let _ = writeln!(
            out,
            "{:>4} {:>14} {:>14} {:>16}",
            y.year,
            format_currency(symbol, y.principal_paid),
            format_currency(symbol, y.interest_paid),
            format_currency(symbol, y.remaining_balance),
        );
    }
    out
}

/// 요약 블록.
pub fn summary_block(tr: &Translator, symbol: &str, summary: &FinancialSummary) -> String {
    let mut out = String::new();
    let line = |out: &mut String, key: &str, value: String| {
        let _ = writeln!(out, "{} {value}", tr.t(key));
    };
    line(&mut out, keys::SUMMARY_SYSTEM_SIZE, format!("{:.2} kW", summary.system_size_kw));
    line(
        &mut out,
        keys::SUMMARY_FIRST_YEAR_PRODUCTION,
        format!(
            "{} ({:.0}%)",
            format_energy(summary.first_year_production_kwh),
            summary.usage_offset_percent
        ),
    );
    line(&mut out, keys::SUMMARY_TOTAL_COST, format_currency(symbol, summary.total_cost));
    line(&mut out, keys::SUMMARY_EFFECTIVE_COST, format_currency(symbol, summary.effective_cost));
    line(&mut out, keys::SUMMARY_TOTAL_SAVINGS, format_currency(symbol, summary.total_energy_savings));
    line(&mut out, keys::SUMMARY_NET_BENEFIT, format_currency(symbol, summary.net_benefit));
    line(&mut out, keys::SUMMARY_ROI, format!("{:.1}%", summary.roi_percent));
    line(&mut out, keys::SUMMARY_BREAK_EVEN, format_break_even(tr, summary.break_even));
    if let Some(loan) = summary.loan {
        line(
            &mut out,
            keys::SUMMARY_MONTHLY_PAYMENT,
            format!(
                "{} ({:.2}%, {}y)",
                format_currency(symbol, loan.monthly_payment),
                loan.annual_rate_percent,
                loan.term_years
            ),
        );
        line(&mut out, keys::SUMMARY_TOTAL_INTEREST, format_currency(symbol, loan.total_interest));
    }
    out
}
