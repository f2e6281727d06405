//! 25년 예측/손익분기/요약 회귀 테스트.
use solar_finance_toolbox::finance::{
    build_projection, detect_break_even, project, upfront_cost, BreakEven, LoanTerms,
    ProjectionRow, PROJECTION_YEARS,
};
use solar_finance_toolbox::system::{FinancingMode, SystemConfiguration};
use solar_finance_toolbox::units::{SunHoursMode, UsagePeriod};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

fn loan_config(term: u32) -> SystemConfiguration {
    SystemConfiguration {
        financing: FinancingMode::Loan,
        loan_amount: 10_000.0,
        loan_term_years: term,
        loan_interest_rate: 6.5,
        ..SystemConfiguration::default()
    }
}

fn row(year: u32, cumulative_benefit: f64) -> ProjectionRow {
    ProjectionRow {
        year,
        production_kwh: 0.0,
        electricity_rate: 0.0,
        energy_value: 0.0,
        loan_payment: 0.0,
        annual_benefit: 0.0,
        cumulative_benefit,
    }
}

#[test]
fn derived_inputs_from_default_configuration() {
    let cfg = SystemConfiguration::default();
    assert_close("size", cfg.system_size_kw(), 9.6, 1e-9);
    assert_close("production", cfg.base_annual_production_kwh(), 14_016.0, 1e-6);
    assert_close("rate", cfg.base_electricity_rate(), 0.15, 1e-12);
    assert_close("usage", cfg.annual_usage_kwh(), 10_800.0, 1e-9);
}

#[test]
fn yearly_modes_match_daily_and_monthly_inputs() {
    let daily = SystemConfiguration::default();
    let yearly = SystemConfiguration {
        sun_hours: 5.0 * 365.0,
        sun_hours_mode: SunHoursMode::Yearly,
        energy_usage_kwh: 10_800.0,
        energy_cost: 1_620.0,
        usage_period: UsagePeriod::Yearly,
        ..SystemConfiguration::default()
    };
    assert_close(
        "production",
        yearly.base_annual_production_kwh(),
        daily.base_annual_production_kwh(),
        1e-6,
    );
    assert_close("rate", yearly.base_electricity_rate(), daily.base_electricity_rate(), 1e-12);
}

#[test]
fn zero_usage_gives_zero_rate() {
    let cfg = SystemConfiguration {
        energy_usage_kwh: 0.0,
        ..SystemConfiguration::default()
    };
    assert_eq!(cfg.base_electricity_rate(), 0.0);
    let p = project(&cfg);
    assert!(p.rows.iter().all(|r| r.energy_value == 0.0));
    assert_eq!(p.summary.break_even, BreakEven::NotWithinHorizon);
}

#[test]
fn projection_has_twenty_five_ascending_years() {
    let p = project(&SystemConfiguration::default());
    assert_eq!(p.rows.len(), PROJECTION_YEARS as usize);
    for (i, r) in p.rows.iter().enumerate() {
        assert_eq!(r.year, i as u32 + 1);
    }
}

#[test]
fn cash_projection_compounds_degradation_and_inflation() {
    let cfg = SystemConfiguration::default();
    let p = project(&cfg);
    let first = &p.rows[0];
    assert_close("y1 production", first.production_kwh, 14_016.0, 1e-6);
    assert_close("y1 value", first.energy_value, 2_102.4, 1e-6);
    assert_close("y1 cumulative", first.cumulative_benefit, -10_117.6, 1e-6);

    let y10 = &p.rows[9];
    assert_close("y10 production", y10.production_kwh, 14_016.0 * 0.995_f64.powi(9), 1e-6);
    assert_close("y10 rate", y10.electricity_rate, 0.15 * 1.03_f64.powi(9), 1e-12);

    assert_eq!(p.summary.break_even, BreakEven::Year(6));
    assert_close("net", p.summary.net_benefit, 59_453.93, 0.01);
    assert!(p.summary.loan.is_none());
    assert!(p.amortization.is_empty());
}

#[test]
fn cumulative_follows_recurrence_from_negative_upfront() {
    let cfg = loan_config(15);
    let up = upfront_cost(&cfg);
    let p = project(&cfg);
    let mut expected = -up.effective;
    for r in &p.rows {
        assert_close("annual", r.annual_benefit, r.energy_value - r.loan_payment, 1e-9);
        expected += r.annual_benefit;
        assert_close("cumulative", r.cumulative_benefit, expected, 1e-6);
    }
}

#[test]
fn loan_payments_stop_after_term() {
    let p = project(&loan_config(15));
    let annual = p.summary.loan.expect("loan summary").monthly_payment * 12.0;
    for r in &p.rows[..15] {
        assert_close("in term", r.loan_payment, annual, 1e-9);
        assert!(r.loan_payment > 0.0);
    }
    for r in &p.rows[15..] {
        assert_eq!(r.loan_payment, 0.0, "year {}", r.year);
    }
}

#[test]
fn loan_summary_reports_interest_and_break_even() {
    let p = project(&loan_config(15));
    let loan = p.summary.loan.expect("loan summary");
    assert_close("monthly", loan.monthly_payment, 87.1107, 1e-3);
    assert_close("interest", loan.total_interest, 5_679.93, 0.01);
    assert_eq!(loan.term_years, 15);
    assert_eq!(p.summary.effective_cost, 2_220.0);
    assert_eq!(p.summary.break_even, BreakEven::Year(3));
    assert_eq!(p.amortization.len(), 15);
}

#[test]
fn credit_score_rate_overrides_configured_rate() {
    let cfg = SystemConfiguration {
        rate_from_credit_score: true,
        credit_score: 619.0,
        ..loan_config(10)
    };
    let loan = project(&cfg).summary.loan.expect("loan summary");
    assert_eq!(loan.annual_rate_percent, 12.0);
}

#[test]
fn unreachable_break_even_reports_sentinel() {
    let cfg = SystemConfiguration {
        installation_cost: 5_000_000.0,
        ..SystemConfiguration::default()
    };
    let p = project(&cfg);
    assert_eq!(p.summary.break_even, BreakEven::NotWithinHorizon);
    assert_eq!(p.summary.break_even.year(), None);
    assert!(p.summary.net_benefit < 0.0);
}

#[test]
fn loan_exceeding_cost_breaks_even_in_first_year() {
    let cfg = SystemConfiguration {
        loan_amount: 50_000.0,
        ..loan_config(15)
    };
    let p = project(&cfg);
    assert!(p.upfront.effective < 0.0);
    assert_eq!(p.summary.break_even, BreakEven::Year(1));
}

#[test]
fn break_even_returns_first_crossing_without_monotonicity() {
    let rows = vec![
        row(1, -100.0),
        row(2, 10.0),
        row(3, -5.0),
        row(4, 50.0),
    ];
    assert_eq!(detect_break_even(&rows), BreakEven::Year(2));
    assert_eq!(detect_break_even(&[row(1, -1.0), row(2, 0.0)]), BreakEven::Year(2));
    assert_eq!(detect_break_even(&[]), BreakEven::NotWithinHorizon);
}

#[test]
fn build_projection_accepts_explicit_loan_terms() {
    let cfg = SystemConfiguration::default();
    let up = upfront_cost(&cfg);
    let terms = LoanTerms::new(12_000.0, 0.0, 10);
    let rows = build_projection(&cfg, &up, Some(&terms));
    assert_eq!(rows[9].loan_payment, 1_200.0);
    assert_eq!(rows[10].loan_payment, 0.0);
}

#[test]
fn summary_ratios() {
    let p = project(&SystemConfiguration::default());
    let s = p.summary;
    assert_close("offset", s.usage_offset_percent, 14_016.0 / 10_800.0 * 100.0, 1e-9);
    assert_close("roi", s.roi_percent, s.net_benefit / 12_220.0 * 100.0, 1e-9);
    let savings: f64 = p.rows.iter().map(|r| r.energy_value).sum();
    assert_close("savings", s.total_energy_savings, savings, 1e-9);
}

#[test]
fn unbounded_loan_term_still_projects() {
    let cfg = loan_config(400_000_000);
    let p = project(&cfg);
    assert_eq!(p.rows.len(), PROJECTION_YEARS as usize);
    assert!(p.amortization.is_empty());
    let payment = p.summary.loan.as_ref().expect("loan summary").monthly_payment;
    assert!(payment.is_finite());
    assert!(p.rows.iter().all(|r| r.loan_payment > 0.0));
}
