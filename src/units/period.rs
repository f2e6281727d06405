use serde::{Deserialize, Serialize};

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// 사용량/요금 입력 기간. 내부 기준은 연간 값이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsagePeriod {
    Monthly,
    Yearly,
}

/// 일사 시간 입력 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SunHoursMode {
    /// 하루 평균 피크 일사 시간
    Daily,
    /// 연간 누적 피크 일사 시간
    Yearly,
}

/// 주어진 기간 값을 연간 값으로 환산한다.
pub fn annualize(value: f64, period: UsagePeriod) -> f64 {
    match period {
        UsagePeriod::Monthly => value * MONTHS_PER_YEAR,
        UsagePeriod::Yearly => value,
    }
}

/// 하루 평균 피크 일사 시간으로 환산한다.
pub fn daily_sun_hours(value: f64, mode: SunHoursMode) -> f64 {
    match mode {
        SunHoursMode::Daily => value,
        SunHoursMode::Yearly => value / DAYS_PER_YEAR,
    }
}
