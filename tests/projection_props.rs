//! 임의 구성에 대한 예측 불변식 속성 테스트.
use proptest::prelude::*;
use solar_finance_toolbox::finance::{project, BreakEven, PROJECTION_YEARS};
use solar_finance_toolbox::system::{EquipmentPricing, FinancingMode, PricingMode, SystemConfiguration};

fn pricing_strategy() -> impl Strategy<Value = EquipmentPricing> {
    (any::<bool>(), 0.0..5_000.0f64, 0.0..50_000.0f64, 0u32..100, 0u32..100).prop_map(
        |(bulk, unit_cost, bulk_cost, bulk_count, quantity)| EquipmentPricing {
            mode: if bulk { PricingMode::Bulk } else { PricingMode::PerUnit },
            unit_cost,
            bulk_cost,
            bulk_count,
            quantity,
        },
    )
}

prop_compose! {
    fn config_strategy()(
        panels in pricing_strategy(),
        inverters in pricing_strategy(),
        sun_hours in 0.0..10.0f64,
        usage in 0.0..3_000.0f64,
        cost in 0.0..1_000.0f64,
        loan in any::<bool>(),
        loan_amount in 0.0..100_000.0f64,
        loan_term_years in 1u32..=30,
        loan_interest_rate in 0.0..20.0f64,
        degradation_rate in 0.0..5.0f64,
        utility_inflation_rate in -5.0..10.0f64,
    ) -> SystemConfiguration {
        SystemConfiguration {
            panels,
            inverters,
            sun_hours,
            energy_usage_kwh: usage,
            energy_cost: cost,
            financing: if loan { FinancingMode::Loan } else { FinancingMode::Cash },
            loan_amount,
            loan_term_years,
            loan_interest_rate,
            degradation_rate,
            utility_inflation_rate,
            ..SystemConfiguration::default()
        }
    }
}

proptest! {
    #[test]
    fn always_twenty_five_rows_in_order(cfg in config_strategy()) {
        let p = project(&cfg);
        prop_assert_eq!(p.rows.len(), PROJECTION_YEARS as usize);
        for (i, r) in p.rows.iter().enumerate() {
            prop_assert_eq!(r.year, i as u32 + 1);
        }
    }

    #[test]
    fn loan_payments_only_within_term(cfg in config_strategy()) {
        let p = project(&cfg);
        let annual = p.summary.loan.map(|l| l.monthly_payment * 12.0);
        for r in &p.rows {
            if cfg.financing == FinancingMode::Loan && r.year <= cfg.loan_term_years {
                prop_assert_eq!(Some(r.loan_payment), annual);
            } else {
                prop_assert_eq!(r.loan_payment, 0.0);
            }
        }
    }

    #[test]
    fn break_even_is_first_non_negative_year(cfg in config_strategy()) {
        let p = project(&cfg);
        let expected = p.rows.iter().find(|r| r.cumulative_benefit >= 0.0).map(|r| r.year);
        match p.summary.break_even {
            BreakEven::Year(y) => {
                prop_assert_eq!(Some(y), expected);
                prop_assert!(y >= 1);
            }
            BreakEven::NotWithinHorizon => prop_assert_eq!(expected, None),
        }
    }
}
