//! Property-based tests for pricing and sensitivity monotonicity.

use compete_core::types::{CompetitorSpec, Dimensions, ProductSpec};
use compete_strategy::pricing::generate_pricing_recommendations;
use compete_strategy::risk::{assess_profit_risk, RiskLevel};
use compete_strategy::sensitivity::{perform_sensitivity_analysis, SensitivityTable};
use compete_metrics::profit::ProfitAnalysis;
use proptest::prelude::*;

/// Impacts in grid order (the default grids are ascending).
fn impacts(table: &SensitivityTable) -> Vec<f64> {
    table.points.iter().map(|p| p.resulting_impact_percent).collect()
}

fn product(cost: f64, investment: f64, sales: f64) -> ProductSpec {
    ProductSpec::new(
        cost,
        200.0,
        Dimensions::new(10.0, 5.0, 2.0),
        investment,
        sales,
        vec!["a".to_string()],
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// cost < min ≤ recommended ≤ max ≤ competitorPrice whenever feasible.
    #[test]
    fn test_pricing_ordering(price in 1.0_f64..10_000.0, fraction in 0.01_f64..0.99) {
        let cost = price * fraction;
        let pricing = generate_pricing_recommendations(
            &product(cost, 1_000.0, 10.0),
            &CompetitorSpec::new(price, vec![]),
        );
        if pricing.feasible {
            prop_assert!(cost < pricing.price_range.min);
            prop_assert!(pricing.price_range.min <= pricing.recommended_price);
            prop_assert!(pricing.recommended_price <= pricing.price_range.max);
            prop_assert!(pricing.price_range.max <= price);
        } else {
            prop_assert!(pricing.price_range.min > pricing.price_range.max);
            prop_assert_eq!(pricing.recommended_price, pricing.price_range.max);
        }
    }

    /// Costs below two thirds of the competitor price are always feasible.
    #[test]
    fn test_pricing_feasible_region(price in 10.0_f64..10_000.0, fraction in 0.01_f64..0.66) {
        let pricing = generate_pricing_recommendations(
            &product(price * fraction, 1_000.0, 10.0),
            &CompetitorSpec::new(price, vec![]),
        );
        prop_assert!(pricing.feasible);
    }

    /// Cost up lowers margin, price up raises it, sales up shortens payback.
    #[test]
    fn test_sensitivity_monotonic(
        price in 1.0_f64..10_000.0,
        fraction in 0.1_f64..0.9,
        investment in 1.0_f64..1e6,
        sales in 1.0_f64..10_000.0,
    ) {
        let analysis = perform_sensitivity_analysis(
            &product(price * fraction, investment, sales),
            price,
        )
        .unwrap();

        prop_assert!(analysis.cost_sensitivity.is_strictly_decreasing());
        prop_assert!(analysis.price_sensitivity.is_strictly_increasing());
        prop_assert!(analysis.sales_sensitivity.is_strictly_increasing());
        prop_assert_eq!(analysis.cost_sensitivity.impact_at(0.0), Some(0.0));
    }

    /// One-decimal rounding can flatten the cost table when cost is tiny
    /// relative to price, so only weak monotonicity holds over the full range.
    #[test]
    fn test_sensitivity_weakly_monotonic(
        price in 1.0_f64..10_000.0,
        fraction in 0.000_01_f64..0.99,
        investment in 1.0_f64..1e6,
        sales in 1.0_f64..10_000.0,
    ) {
        let analysis = perform_sensitivity_analysis(
            &product(price * fraction, investment, sales),
            price,
        )
        .unwrap();

        prop_assert!(impacts(&analysis.cost_sensitivity).windows(2).all(|w| w[0] >= w[1]));
        prop_assert!(analysis.price_sensitivity.is_strictly_increasing());
        prop_assert!(analysis.sales_sensitivity.is_strictly_increasing());
    }

    /// Risk tiers never improve as margin falls.
    #[test]
    fn test_risk_monotonic_in_margin(rate in 0.0_f64..1.0, delta in 0.0_f64..0.5, roi in 0.0_f64..48.0) {
        let better = assess_profit_risk(&ProfitAnalysis::new(0.0, (rate + delta).min(1.0), roi)).level;
        let worse = assess_profit_risk(&ProfitAnalysis::new(0.0, rate, roi)).level;
        prop_assert!(worse >= better);
    }
}

/// Risk scenarios from the product brief.
#[test]
fn test_risk_scenarios() {
    assert_eq!(
        assess_profit_risk(&ProfitAnalysis::new(10.0, 0.1, 30.0)).level,
        RiskLevel::High
    );
    assert_eq!(
        assess_profit_risk(&ProfitAnalysis::new(50.0, 0.5, 6.0)).level,
        RiskLevel::Low
    );
}

/// A cost of one cent against a 100 price moves the margin by far less than
/// 0.05 %, so every cost impact rounds to zero.
#[test]
fn test_tiny_cost_flattens_cost_table() {
    let analysis = perform_sensitivity_analysis(&product(0.01, 1_000.0, 10.0), 100.0).unwrap();

    assert_eq!(impacts(&analysis.cost_sensitivity), vec![0.0; 5]);
    assert!(!analysis.cost_sensitivity.is_strictly_decreasing());
    assert!(analysis.price_sensitivity.is_strictly_increasing());
    assert_eq!(analysis.price_sensitivity.impact_at(10.0), Some(10.0));
}
