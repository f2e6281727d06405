//! 대출 상환액/신용점수 금리 회귀 테스트.
use solar_finance_toolbox::finance::{
    amortization_schedule, estimate_rate_from_credit_score, monthly_payment, CreditTier, LoanTerms,
    MAX_LOAN_TERM_YEARS,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

#[test]
fn standard_amortization_payment() {
    // 20,000 @ 6.5% / 25년
    let m = monthly_payment(20_000.0, 6.5, 25);
    assert_close("monthly", m, 135.04, 0.03);
}

#[test]
fn zero_rate_is_straight_line() {
    let m = monthly_payment(12_000.0, 0.0, 10);
    assert_eq!(m, 100.0);
}

#[test]
fn zero_term_propagates_non_finite() {
    assert!(!monthly_payment(10_000.0, 5.0, 0).is_finite());
    assert!(!monthly_payment(10_000.0, 0.0, 0).is_finite());
}

#[test]
fn very_long_term_converges_to_interest_only() {
    // 12 × 기간이 u32 범위를 넘어도 계산은 유한하게 끝난다
    let m = monthly_payment(10_000.0, 5.0, 400_000_000);
    assert_close("interest only", m, 10_000.0 * 0.05 / 12.0, 1e-9);
    let m0 = monthly_payment(10_000.0, 0.0, u32::MAX);
    assert!(m0 > 0.0 && m0 < 1e-3);
}

#[test]
fn schedule_is_skipped_for_unbounded_terms() {
    let huge = LoanTerms::new(10_000.0, 5.0, 50_000_000);
    assert!(amortization_schedule(&huge).is_empty());

    let longest = LoanTerms::new(10_000.0, 5.0, MAX_LOAN_TERM_YEARS);
    assert_eq!(amortization_schedule(&longest).len(), MAX_LOAN_TERM_YEARS as usize);

    let zero_term = LoanTerms::new(10_000.0, 5.0, 0);
    assert!(amortization_schedule(&zero_term).is_empty());
}

#[test]
fn credit_score_bracket_boundaries() {
    assert_eq!(estimate_rate_from_credit_score(780.0), 5.5);
    assert_eq!(estimate_rate_from_credit_score(779.0), 6.5);
    assert_eq!(estimate_rate_from_credit_score(740.0), 6.5);
    assert_eq!(estimate_rate_from_credit_score(739.0), 7.5);
    assert_eq!(estimate_rate_from_credit_score(700.0), 7.5);
    assert_eq!(estimate_rate_from_credit_score(699.0), 8.5);
    assert_eq!(estimate_rate_from_credit_score(660.0), 8.5);
    assert_eq!(estimate_rate_from_credit_score(659.0), 10.0);
    assert_eq!(estimate_rate_from_credit_score(620.0), 10.0);
    assert_eq!(estimate_rate_from_credit_score(619.0), 12.0);
}

#[test]
fn out_of_range_scores_use_edge_brackets() {
    assert_eq!(CreditTier::from_score(0.0), CreditTier::Bad);
    assert_eq!(CreditTier::from_score(10_000.0), CreditTier::Excellent);
    assert_eq!(estimate_rate_from_credit_score(900.0), 5.5);
    assert_eq!(CreditTier::from_score(-50.0), CreditTier::Bad);
    assert_eq!(CreditTier::from_score(f64::NAN), CreditTier::Bad);
}

#[test]
fn fractional_scores_use_lower_bracket_until_threshold() {
    assert_eq!(estimate_rate_from_credit_score(779.9), 6.5);
    assert_eq!(estimate_rate_from_credit_score(619.5), 12.0);
    assert_eq!(estimate_rate_from_credit_score(620.0), 10.0);
}

#[test]
fn loan_terms_totals() {
    let terms = LoanTerms::new(10_000.0, 6.5, 15);
    assert_close("monthly", terms.monthly_payment, 87.1107, 1e-3);
    assert_close("total_paid", terms.total_paid(), 15_679.93, 0.01);
    assert_close("interest", terms.total_interest(), 5_679.93, 0.01);
    assert_eq!(terms.annual_payment_in_year(15), terms.monthly_payment * 12.0);
    assert_eq!(terms.annual_payment_in_year(16), 0.0);
}

#[test]
fn schedule_pays_off_principal() {
    let terms = LoanTerms::new(20_000.0, 6.5, 25);
    let schedule = amortization_schedule(&terms);
    assert_eq!(schedule.len(), 25);
    let last = schedule.last().expect("schedule");
    assert_close("final balance", last.remaining_balance, 0.0, 1e-4);

    let principal: f64 = schedule.iter().map(|y| y.principal_paid).sum();
    let interest: f64 = schedule.iter().map(|y| y.interest_paid).sum();
    assert_close("principal", principal, 20_000.0, 1e-4);
    assert_close("interest", interest, terms.total_interest(), 1e-4);
    // 초반에는 이자 비중이 원금보다 크다
    assert!(schedule[0].interest_paid > schedule[0].principal_paid);
}

#[test]
fn zero_rate_schedule_has_no_interest() {
    let terms = LoanTerms::new(12_000.0, 0.0, 10);
    let schedule = amortization_schedule(&terms);
    assert!(schedule.iter().all(|y| y.interest_paid == 0.0));
    assert_close("year1 principal", schedule[0].principal_paid, 1_200.0, 1e-9);
}
