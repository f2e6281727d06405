//! 장비 실비용/초기 비용 집계 테스트.
use solar_finance_toolbox::finance::{effective_cost, upfront_cost};
use solar_finance_toolbox::finance::pricing::bulk_unit_price;
use solar_finance_toolbox::system::{EquipmentPricing, FinancingMode, PricingMode, SystemConfiguration};

fn panels(mode: PricingMode, quantity: u32) -> EquipmentPricing {
    EquipmentPricing {
        mode,
        unit_cost: 280.0,
        bulk_cost: 6720.0,
        bulk_count: 24,
        quantity,
    }
}

#[test]
fn per_unit_and_bulk_agree_at_package_size() {
    assert_eq!(effective_cost(&panels(PricingMode::PerUnit, 24)), 6720.0);
    assert_eq!(effective_cost(&panels(PricingMode::Bulk, 24)), 6720.0);
}

#[test]
fn bulk_ignores_quantity() {
    assert_eq!(effective_cost(&panels(PricingMode::Bulk, 1)), 6720.0);
    assert_eq!(effective_cost(&panels(PricingMode::Bulk, 300)), 6720.0);
    assert_eq!(effective_cost(&panels(PricingMode::PerUnit, 30)), 8400.0);
}

#[test]
fn bulk_unit_price_handles_empty_package() {
    assert_eq!(bulk_unit_price(&panels(PricingMode::Bulk, 24)), Some(280.0));
    let mut empty = panels(PricingMode::Bulk, 24);
    empty.bulk_count = 0;
    assert_eq!(bulk_unit_price(&empty), None);
}

#[test]
fn upfront_sums_equipment_and_fixed_costs() {
    let cfg = SystemConfiguration::default();
    let up = upfront_cost(&cfg);
    assert_eq!(up.panels, 6720.0);
    assert_eq!(up.inverters, 1500.0);
    assert_eq!(up.batteries, 0.0);
    assert_eq!(up.fixed, 4000.0);
    assert_eq!(up.total, 12_220.0);
    assert_eq!(up.effective, 12_220.0);
}

#[test]
fn loan_reduces_effective_cost_without_clamping() {
    let mut cfg = SystemConfiguration::default();
    cfg.financing = FinancingMode::Loan;
    cfg.loan_amount = 10_000.0;
    assert_eq!(upfront_cost(&cfg).effective, 2_220.0);

    cfg.loan_amount = 15_000.0;
    let up = upfront_cost(&cfg);
    assert_eq!(up.total, 12_220.0);
    assert_eq!(up.effective, -2_780.0);
}

#[test]
fn cash_mode_ignores_loan_amount() {
    let mut cfg = SystemConfiguration::default();
    cfg.loan_amount = 50_000.0;
    assert_eq!(upfront_cost(&cfg).effective, upfront_cost(&cfg).total);
}
