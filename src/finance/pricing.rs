use crate::system::{EquipmentPricing, PricingMode};

/// 장비 한 종류의 실제 적용 비용을 계산한다.
///
/// 묶음가는 `bulk_count` 수량을 덮는 고정 가격이며 수량에 따라 비례 조정하지 않는다.
/// 0 또는 음수 입력은 검증하지 않고 그대로 산술 처리한다.
pub fn effective_cost(pricing: &EquipmentPricing) -> f64 {
    match pricing.mode {
        PricingMode::PerUnit => pricing.unit_cost * pricing.quantity as f64,
        PricingMode::Bulk => pricing.bulk_cost,
    }
}

/// 묶음가를 개당 가격으로 환산한다. 비교 표시용이며 `bulk_count`가 0이면 None.
pub fn bulk_unit_price(pricing: &EquipmentPricing) -> Option<f64> {
    if pricing.bulk_count == 0 {
        None
    } else {
        Some(pricing.bulk_cost / pricing.bulk_count as f64)
    }
}
