use serde::{Deserialize, Serialize};

use crate::finance::rates::resolve_loan_rate;
use crate::system::SystemConfiguration;

/// 입력 화면에서 허용하는 최대 대출 기간 [년]. 상환 스케줄도 이 기간까지만 만든다.
pub const MAX_LOAN_TERM_YEARS: u32 = 40;

/// 원리금 균등 상환 월 납입액을 계산한다.
///
/// `M = P·r·(1+r)^n / ((1+r)^n − 1)`, r = 연이율/100/12, n = 기간×12.
/// 같은 식을 `P·r / (1 − (1+r)^−n)`로 계산해 n이 매우 커도 `P·r`로 수렴한다.
/// 이율이 정확히 0이면 분모가 0이 되므로 `P / n`(무이자 균등분할)으로 처리한다.
/// 기간 0 같은 잘못된 입력은 NaN/∞로 그대로 전파된다.
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, term_years: u32) -> f64 {
    let n = f64::from(term_years) * 12.0;
    if annual_rate_percent == 0.0 {
        return principal / n;
    }
    let r = annual_rate_percent / 100.0 / 12.0;
    principal * r / (1.0 - (1.0 + r).powf(-n))
}

/// 대출 조건과 그로부터 계산된 월 납입액.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
    pub monthly_payment: f64,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
            monthly_payment: monthly_payment(principal, annual_rate_percent, term_years),
        }
    }

    /// 해당 연도의 연간 상환액. 상환 기간이 끝난 뒤에는 0.
    pub fn annual_payment_in_year(&self, year: u32) -> f64 {
        if year <= self.term_years {
            self.monthly_payment * 12.0
        } else {
            0.0
        }
    }

    /// 전체 기간 총 상환액.
    pub fn total_paid(&self) -> f64 {
        self.monthly_payment * 12.0 * f64::from(self.term_years)
    }

    /// 총 이자 = 총 상환액 − 원금.
    pub fn total_interest(&self) -> f64 {
        self.total_paid() - self.principal
    }
}

/// 대출 방식일 때만 대출 조건을 만든다.
pub fn loan_terms(cfg: &SystemConfiguration) -> Option<LoanTerms> {
    if !cfg.is_loan() {
        return None;
    }
    Some(LoanTerms::new(
        cfg.loan_amount,
        resolve_loan_rate(cfg),
        cfg.loan_term_years,
    ))
}

/// 연도별 상환 내역 한 줄.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationYear {
    pub year: u32,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub remaining_balance: f64,
}

/// 월 단위로 상환을 진행하여 연도별 원금/이자/잔액을 집계한다.
///
/// 기간이 [`MAX_LOAN_TERM_YEARS`]를 넘거나 월 납입액이 유한하지 않으면 빈 스케줄을 반환한다.
pub fn amortization_schedule(terms: &LoanTerms) -> Vec<AmortizationYear> {
    if terms.term_years > MAX_LOAN_TERM_YEARS || !terms.monthly_payment.is_finite() {
        tracing::warn!(
            term_years = terms.term_years,
            monthly_payment = terms.monthly_payment,
            "상환 스케줄 생략"
        );
        return Vec::new();
    }
    let r = terms.annual_rate_percent / 100.0 / 12.0;
    let mut balance = terms.principal;
    let mut schedule = Vec::with_capacity(terms.term_years as usize);
    for year in 1..=terms.term_years {
        let mut principal_paid = 0.0;
        let mut interest_paid = 0.0;
        for _ in 0..12 {
            let interest = balance * r;
            let principal = terms.monthly_payment - interest;
            balance -= principal;
            principal_paid += principal;
            interest_paid += interest;
        }
        schedule.push(AmortizationYear {
            year,
            principal_paid,
            interest_paid,
            // 마지막 달 부동소수 오차 제거
            remaining_balance: if balance.abs() < 1e-6 { 0.0 } else { balance },
        });
    }
    schedule
}
