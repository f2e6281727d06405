use serde::{Deserialize, Serialize};

use crate::finance::pricing::effective_cost;
use crate::system::SystemConfiguration;

/// 초기 비용 집계 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpfrontCost {
    pub panels: f64,
    pub inverters: f64,
    pub batteries: f64,
    /// 설치비 + 인건비
    pub fixed: f64,
    /// 명목 총 시스템 비용
    pub total: f64,
    /// 실부담 비용. 대출이면 총액 − 대출금, 현금이면 총액.
    pub effective: f64,
}

/// 장비 실비용과 고정비를 합산한다.
///
/// 대출금이 총액보다 커서 실부담이 음수가 되어도 보정하지 않는다.
pub fn upfront_cost(cfg: &SystemConfiguration) -> UpfrontCost {
    let panels = effective_cost(&cfg.panels);
    let inverters = effective_cost(&cfg.inverters);
    let batteries = effective_cost(&cfg.batteries);
    let fixed = cfg.installation_cost + cfg.labor_cost;
    let total = panels + inverters + batteries + fixed;
    let effective = if cfg.is_loan() {
        total - cfg.loan_amount
    } else {
        total
    };
    if effective < 0.0 {
        tracing::warn!(total, loan_amount = cfg.loan_amount, "대출금이 시스템 총액을 초과함");
    }
    UpfrontCost {
        panels,
        inverters,
        batteries,
        fixed,
        total,
        effective,
    }
}
