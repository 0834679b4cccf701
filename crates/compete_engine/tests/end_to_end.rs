//! End-to-end analysis scenarios.

use approx::assert_relative_eq;
use compete_core::types::{
    AnalysisError, CompetitorSpec, Dimensions, ExtractionConfidence, ProductSpec, RoleView,
};
use compete_engine::{analyze, analyze_many, generate_complete_report, AnalysisCache};
use compete_strategy::pricing::PricingStrategyKind;
use compete_strategy::risk::RiskLevel;
use compete_strategy::sensitivity::SensitivityAxis;

fn product() -> ProductSpec {
    ProductSpec::new(
        60.0,
        200.0,
        Dimensions::new(10.0, 5.0, 2.0),
        12_000.0,
        25.0,
        vec!["waterproof".to_string(), "usb-c".to_string()],
    )
    .with_id("bottle-1")
    .with_name("Trail bottle")
}

#[test]
fn test_full_pipeline_reference_scenario() {
    let competitor = CompetitorSpec::new(100.0, vec!["waterproof".to_string()])
        .with_weight(250.0)
        .with_dimensions(Dimensions::new(10.0, 5.0, 2.0))
        .with_confidence(ExtractionConfidence::new(0.95, 0.9, 0.85, 0.8));

    let result = analyze(&product(), &competitor, Some(RoleView::Retail)).unwrap();

    // 250 / 200 * 5 = 6.25 by weight, 5 by volume
    assert_eq!(result.radar_scores.portability, 5.6);
    assert_eq!(result.risk.level, RiskLevel::Low);
    assert_eq!(result.pricing.strategy, PricingStrategyKind::Competitive);
    assert_relative_eq!(result.pricing.recommended_price, 85.72);

    let break_even = result.break_even.unwrap();
    // 12000 / 25.72 = 466.56
    assert_eq!(break_even.break_even_units, 467);

    assert_eq!(result.sensitivity.table(SensitivityAxis::Cost).len(), 5);
    assert_eq!(result.sensitivity.cost_sensitivity.impact_at(20.0), Some(-30.0));

    assert_eq!(result.profit_explanation.input("competitorPrice"), Some(100.0));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["role"], "retail");
    assert!(json["profitAnalysis"]["marginRate"].is_number());
    assert!(json.get("sessionId").is_none());
}

#[test]
fn test_invalid_competitor_price_is_not_retryable() {
    let zero_price = CompetitorSpec::new(0.0, vec![]);
    let err = analyze(&product(), &zero_price, None).unwrap_err();
    assert!(matches!(err, AnalysisError::Validation(_)));
    assert_eq!(err.kind(), "VALIDATION_ERROR");
    assert!(!err.is_retryable());
}

#[test]
fn test_batch_and_cache_agree() {
    let competitors: Vec<CompetitorSpec> = [90.0, 120.0, 150.0]
        .iter()
        .map(|&price| CompetitorSpec::new(price, vec![]))
        .collect();
    let batch = analyze_many(&product(), &competitors, Some(RoleView::Manufacturing));

    let cache = AnalysisCache::new();
    for (competitor, batch_result) in competitors.iter().zip(&batch) {
        let cached = cache
            .get_or_analyze(&product(), competitor, Some(RoleView::Manufacturing))
            .unwrap();
        let batch_result = batch_result.as_ref().unwrap();
        assert_eq!(cached.radar_scores, batch_result.radar_scores);
        assert_eq!(cached.role_insights, batch_result.role_insights);
    }
    assert_eq!(cache.stats().misses, 3);
}

#[test]
fn test_report_for_weak_product() {
    let product = product().with_cost(88.0);
    let competitor = CompetitorSpec::new(100.0, vec!["a".into(), "b".into(), "c".into(), "d".into()]);
    let result = analyze(&product, &competitor, None).unwrap();

    assert!(!result.pricing.feasible);
    let report = generate_complete_report(&result, &product, &competitor, RoleView::Retail);
    assert!(report.full_report.contains("no price is commercially feasible"));
    assert!(!report.full_report.contains("## Break-even"));
    assert!(!report.insights.risks.is_empty());
    assert!(report.full_report.contains("To be confirmed"));
}
