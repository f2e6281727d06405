use serde::{Deserialize, Serialize};

use crate::finance::loan::LoanTerms;
use crate::finance::upfront::UpfrontCost;
use crate::system::SystemConfiguration;

/// 예측 기간 [년]
pub const PROJECTION_YEARS: u32 = 25;

/// 연도별 예측 한 줄.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub year: u32,
    /// 발전량 [kWh]
    pub production_kwh: f64,
    /// 해당 연도 전기 요금 [통화/kWh]
    pub electricity_rate: f64,
    /// 발전량의 금전 가치
    pub energy_value: f64,
    /// 연간 대출 상환액. 상환 기간 밖이면 0.
    pub loan_payment: f64,
    pub annual_benefit: f64,
    pub cumulative_benefit: f64,
}

/// 25년 연도별 예측을 만든다.
///
/// 각 행의 누적 편익은 직전 행에만 의존하므로 반드시 연도 순서대로 계산한다.
/// 0년차 누적값은 `-upfront.effective`이다.
pub fn build_projection(
    cfg: &SystemConfiguration,
    upfront: &UpfrontCost,
    loan: Option<&LoanTerms>,
) -> Vec<ProjectionRow> {
    let base_production = cfg.base_annual_production_kwh();
    let base_rate = cfg.base_electricity_rate();
    let degradation = cfg.degradation_rate / 100.0;
    let inflation = cfg.utility_inflation_rate / 100.0;

    let mut rows = Vec::with_capacity(PROJECTION_YEARS as usize);
    let mut cumulative = -upfront.effective;
    for year in 1..=PROJECTION_YEARS {
        let exponent = (year - 1) as i32;
        let production_kwh = base_production * (1.0 - degradation).powi(exponent);
        let electricity_rate = base_rate * (1.0 + inflation).powi(exponent);
        let energy_value = production_kwh * electricity_rate;
        let loan_payment = loan.map_or(0.0, |l| l.annual_payment_in_year(year));
        let annual_benefit = energy_value - loan_payment;
        cumulative += annual_benefit;
        rows.push(ProjectionRow {
            year,
            production_kwh,
            electricity_rate,
            energy_value,
            loan_payment,
            annual_benefit,
            cumulative_benefit: cumulative,
        });
    }
    rows
}
