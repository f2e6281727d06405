//! 태양광 시스템 구성 입력값. UI/설정 계층이 소유하며, 계산 코어에는 불변 스냅샷으로 전달된다.

use serde::{Deserialize, Serialize};

use crate::units::{annualize, convert_power, daily_sun_hours, PowerUnit, SunHoursMode, UsagePeriod};
use crate::units::period::DAYS_PER_YEAR;

/// 장비 단가 적용 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// 개당 단가 × 수량
    PerUnit,
    /// 묶음 패키지 고정가
    Bulk,
}

/// 구입 자금 조달 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancingMode {
    Cash,
    Loan,
}

/// 장비 종류(패널/인버터/배터리) 하나의 가격 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentPricing {
    pub mode: PricingMode,
    /// 개당 단가
    pub unit_cost: f64,
    /// 묶음 패키지 가격
    pub bulk_cost: f64,
    /// 묶음 패키지에 포함된 수량
    pub bulk_count: u32,
    /// 설치 수량
    pub quantity: u32,
}

impl EquipmentPricing {
    pub fn per_unit(unit_cost: f64, quantity: u32) -> Self {
        Self {
            mode: PricingMode::PerUnit,
            unit_cost,
            bulk_cost: unit_cost * quantity as f64,
            bulk_count: quantity,
            quantity,
        }
    }
}

/// 재무 예측에 필요한 모든 스칼라 입력.
///
/// 비율 필드(`degradation_rate`, `utility_inflation_rate`, `loan_interest_rate`)는
/// 화면에 보이는 그대로 퍼센트 값으로 저장한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfiguration {
    pub panels: EquipmentPricing,
    pub inverters: EquipmentPricing,
    pub batteries: EquipmentPricing,
    /// 패널 1장의 정격 출력 [W]
    pub panel_wattage_w: f64,
    /// 인버터/배선/온도 손실을 반영한 성능 계수 (0~1)
    pub performance_ratio: f64,
    pub sun_hours: f64,
    pub sun_hours_mode: SunHoursMode,
    /// 전력 사용량 [kWh / 기간]
    pub energy_usage_kwh: f64,
    /// 전기 요금 [통화 / 기간]
    pub energy_cost: f64,
    pub usage_period: UsagePeriod,
    pub installation_cost: f64,
    pub labor_cost: f64,
    pub financing: FinancingMode,
    pub loan_amount: f64,
    pub loan_term_years: u32,
    /// 연 이자율 [%]
    pub loan_interest_rate: f64,
    pub credit_score: f64,
    /// true면 `loan_interest_rate` 대신 신용점수 구간 금리를 사용한다.
    pub rate_from_credit_score: bool,
    /// 연간 패널 출력 저하율 [%]
    pub degradation_rate: f64,
    /// 연간 전기요금 상승률 [%]
    pub utility_inflation_rate: f64,
}

impl Default for SystemConfiguration {
    fn default() -> Self {
        Self {
            panels: EquipmentPricing {
                mode: PricingMode::PerUnit,
                unit_cost: 280.0,
                bulk_cost: 6720.0,
                bulk_count: 24,
                quantity: 24,
            },
            inverters: EquipmentPricing::per_unit(1500.0, 1),
            batteries: EquipmentPricing::per_unit(9000.0, 0),
            panel_wattage_w: 400.0,
            performance_ratio: 0.8,
            sun_hours: 5.0,
            sun_hours_mode: SunHoursMode::Daily,
            energy_usage_kwh: 900.0,
            energy_cost: 135.0,
            usage_period: UsagePeriod::Monthly,
            installation_cost: 2500.0,
            labor_cost: 1500.0,
            financing: FinancingMode::Cash,
            loan_amount: 10_000.0,
            loan_term_years: 15,
            loan_interest_rate: 6.5,
            credit_score: 740.0,
            rate_from_credit_score: false,
            degradation_rate: 0.5,
            utility_inflation_rate: 3.0,
        }
    }
}

impl SystemConfiguration {
    pub fn is_loan(&self) -> bool {
        self.financing == FinancingMode::Loan
    }

    /// 연간 전력 사용량 [kWh/년]
    pub fn annual_usage_kwh(&self) -> f64 {
        annualize(self.energy_usage_kwh, self.usage_period)
    }

    /// 연간 전기 요금 [통화/년]
    pub fn annual_energy_cost(&self) -> f64 {
        annualize(self.energy_cost, self.usage_period)
    }

    /// 현재 kWh당 전기 요금. 사용량이 0 이하이면 0을 반환한다.
    pub fn base_electricity_rate(&self) -> f64 {
        let usage = self.annual_usage_kwh();
        if usage > 0.0 {
            self.annual_energy_cost() / usage
        } else {
            0.0
        }
    }

    /// 설비 용량 [kW]
    pub fn system_size_kw(&self) -> f64 {
        convert_power(
            self.panels.quantity as f64 * self.panel_wattage_w,
            PowerUnit::Watt,
            PowerUnit::Kilowatt,
        )
    }

    /// 1년차 발전량 [kWh/년] = 용량 × 일 평균 일사시간 × 365 × 성능계수
    pub fn base_annual_production_kwh(&self) -> f64 {
        self.system_size_kw()
            * daily_sun_hours(self.sun_hours, self.sun_hours_mode)
            * DAYS_PER_YEAR
            * self.performance_ratio
    }
}
