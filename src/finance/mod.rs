//! 태양광 설비 재무 예측 코어.
//!
//! 모든 함수는 `SystemConfiguration` 스냅샷에 대한 순수 함수이며 상태를 유지하지 않는다.
//! 설정이 바뀔 때마다 전체를 다시 계산한다.

pub mod break_even;
pub mod loan;
pub mod pricing;
pub mod projection;
pub mod rates;
pub mod summary;
pub mod upfront;

pub use break_even::{detect_break_even, BreakEven};
pub use loan::{
    amortization_schedule, loan_terms, monthly_payment, AmortizationYear, LoanTerms,
    MAX_LOAN_TERM_YEARS,
};
pub use pricing::effective_cost;
pub use projection::{build_projection, ProjectionRow, PROJECTION_YEARS};
pub use rates::{estimate_rate_from_credit_score, resolve_loan_rate, CreditTier};
pub use summary::{build_summary, FinancialSummary, LoanSummary};
pub use upfront::{upfront_cost, UpfrontCost};

use serde::{Deserialize, Serialize};

use crate::system::SystemConfiguration;

/// 예측 전체 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub upfront: UpfrontCost,
    pub rows: Vec<ProjectionRow>,
    pub summary: FinancialSummary,
    pub amortization: Vec<AmortizationYear>,
}

/// 구성 스냅샷으로 초기 비용, 25년 예측, 요약, 상환표를 한 번에 계산한다.
pub fn project(cfg: &SystemConfiguration) -> Projection {
    let upfront = upfront_cost(cfg);
    let loan = loan_terms(cfg);
    let rows = build_projection(cfg, &upfront, loan.as_ref());
    let summary = build_summary(cfg, &upfront, loan.as_ref(), &rows);
    let amortization = loan.as_ref().map(amortization_schedule).unwrap_or_default();
    tracing::debug!(
        total_cost = upfront.total,
        effective_cost = upfront.effective,
        monthly_payment = ?loan.map(|l| l.monthly_payment),
        break_even = ?summary.break_even,
        "재무 예측 완료"
    );
    Projection {
        upfront,
        rows,
        summary,
        amortization,
    }
}
