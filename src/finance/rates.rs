use serde::{Deserialize, Serialize};

use crate::system::SystemConfiguration;

/// 신용점수 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditTier {
    Excellent,
    VeryGood,
    Good,
    Fair,
    Poor,
    Bad,
}

impl CreditTier {
    /// 점수로 구간을 판정한다. 범위를 벗어난 점수(음수 포함)도 같은 규칙으로 최상/최하 구간에 들어가며,
    /// NaN은 최하 구간이다.
    pub fn from_score(score: f64) -> Self {
        if score >= 780.0 {
            CreditTier::Excellent
        } else if score >= 740.0 {
            CreditTier::VeryGood
        } else if score >= 700.0 {
            CreditTier::Good
        } else if score >= 660.0 {
            CreditTier::Fair
        } else if score >= 620.0 {
            CreditTier::Poor
        } else {
            CreditTier::Bad
        }
    }

    /// 구간별 연 이자율 [%]
    pub fn annual_rate_percent(&self) -> f64 {
        match self {
            CreditTier::Excellent => 5.5,
            CreditTier::VeryGood => 6.5,
            CreditTier::Good => 7.5,
            CreditTier::Fair => 8.5,
            CreditTier::Poor => 10.0,
            CreditTier::Bad => 12.0,
        }
    }

    /// 번역 키.
    pub fn label_key(&self) -> &'static str {
        match self {
            CreditTier::Excellent => "credit.tier.excellent",
            CreditTier::VeryGood => "credit.tier.very_good",
            CreditTier::Good => "credit.tier.good",
            CreditTier::Fair => "credit.tier.fair",
            CreditTier::Poor => "credit.tier.poor",
            CreditTier::Bad => "credit.tier.bad",
        }
    }
}

/// 신용점수로 연 이자율 [%]을 추정한다.
pub fn estimate_rate_from_credit_score(score: f64) -> f64 {
    CreditTier::from_score(score).annual_rate_percent()
}

/// 대출 계산에 쓸 연 이자율 [%]을 결정한다.
pub fn resolve_loan_rate(cfg: &SystemConfiguration) -> f64 {
    if cfg.rate_from_credit_score {
        estimate_rate_from_credit_score(cfg.credit_score)
    } else {
        cfg.loan_interest_rate
    }
}
