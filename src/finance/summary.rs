use serde::{Deserialize, Serialize};

use crate::finance::break_even::{detect_break_even, BreakEven};
use crate::finance::loan::LoanTerms;
use crate::finance::projection::ProjectionRow;
use crate::finance::upfront::UpfrontCost;
use crate::system::SystemConfiguration;

/// 대출 요약.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub monthly_payment: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
    pub total_paid: f64,
    /// (월 납입액 × 12 × 기간) − 대출 원금
    pub total_interest: f64,
}

/// 재무 요약.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_cost: f64,
    pub effective_cost: f64,
    /// 기간 전체 전기요금 절감액 합계
    pub total_energy_savings: f64,
    /// 마지막 연도 누적 편익
    pub net_benefit: f64,
    pub break_even: BreakEven,
    pub loan: Option<LoanSummary>,
    pub system_size_kw: f64,
    pub first_year_production_kwh: f64,
    /// 1년차 발전량 / 연간 사용량 [%]
    pub usage_offset_percent: f64,
    /// 순편익 / 총비용 [%]
    pub roi_percent: f64,
}

/// 초기 비용, 예측 결과, 대출 조건을 요약으로 묶는다.
pub fn build_summary(
    cfg: &SystemConfiguration,
    upfront: &UpfrontCost,
    loan: Option<&LoanTerms>,
    rows: &[ProjectionRow],
) -> FinancialSummary {
    let net_benefit = rows
        .last()
        .map_or(-upfront.effective, |row| row.cumulative_benefit);
    let first_year_production_kwh = rows.first().map_or(0.0, |row| row.production_kwh);
    let annual_usage = cfg.annual_usage_kwh();

    FinancialSummary {
        total_cost: upfront.total,
        effective_cost: upfront.effective,
        total_energy_savings: rows.iter().map(|row| row.energy_value).sum(),
        net_benefit,
        break_even: detect_break_even(rows),
        loan: loan.map(|l| LoanSummary {
            monthly_payment: l.monthly_payment,
            annual_rate_percent: l.annual_rate_percent,
            term_years: l.term_years,
            total_paid: l.total_paid(),
            total_interest: l.total_interest(),
        }),
        system_size_kw: cfg.system_size_kw(),
        first_year_production_kwh,
        usage_offset_percent: if annual_usage > 0.0 {
            first_year_production_kwh / annual_usage * 100.0
        } else {
            0.0
        },
        roi_percent: if upfront.total > 0.0 {
            net_benefit / upfront.total * 100.0
        } else {
            0.0
        },
    }
}
