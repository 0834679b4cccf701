//! Role adaptation never touches numbers and keeps line counts.

use compete_core::types::{CompetitorSpec, Dimensions, ProductSpec, RoleView};
use compete_insights::{generate_intelligent_insights, generate_role_specific_insights};
use compete_metrics::profit::ProfitAnalysis;
use compete_metrics::radar::RadarScores;
use proptest::prelude::*;

fn product(features: usize) -> ProductSpec {
    ProductSpec::new(
        60.0,
        200.0,
        Dimensions::new(10.0, 5.0, 2.0),
        12_000.0,
        25.0,
        (0..features).map(|i| format!("feature {}", i)).collect(),
    )
}

fn score() -> impl Strategy<Value = f64> {
    (0u32..=100).prop_map(|tenths| f64::from(tenths) / 10.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn test_role_rewrite_preserves_counts(
        profitability in score(),
        roi_speed in score(),
        portability in score(),
        features in score(),
        price_advantage in score(),
        rate in 0.01_f64..0.99,
        months in 0.0_f64..60.0,
    ) {
        let scores = RadarScores::new(profitability, roi_speed, portability, features, price_advantage);
        let insights = generate_intelligent_insights(
            &scores,
            &ProfitAnalysis::new(rate * 100.0, rate, months),
            &product(4),
            &CompetitorSpec::new(100.0, vec![]),
        );

        for role in RoleView::ALL {
            let adapted = generate_role_specific_insights(&insights, role);
            prop_assert_eq!(adapted.advantages.len(), insights.advantages.len());
            prop_assert_eq!(adapted.risks.len(), insights.risks.len());
            prop_assert!(adapted.recommendations.len() >= 3);
        }

        let retail = generate_role_specific_insights(&insights, RoleView::Retail);
        prop_assert_eq!(retail.recommendations.len(), insights.recommendations.len() + 3);
    }
}

#[test]
fn test_manufacturing_view_of_weak_product() {
    let insights = generate_intelligent_insights(
        &RadarScores::new(3.0, 2.0, 4.0, 2.5, 4.0),
        &ProfitAnalysis::new(15.0, 0.15, 40.0),
        &product(1),
        &CompetitorSpec::new(20.0, vec![]),
    );
    let adapted = generate_role_specific_insights(&insights, RoleView::Manufacturing);

    assert_eq!(adapted.risks.len(), 5);
    assert!(adapted.risks[3].ends_with("better production processes"));
    assert!(adapted.risks[4].starts_with("Intense production cost competition"));
    assert_eq!(adapted.recommendations.len(), insights.recommendations.len() + 3);
    assert_eq!(
        adapted.recommendations.last().map(String::as_str),
        Some("Draw up a capacity expansion plan to meet market demand")
    );
}
