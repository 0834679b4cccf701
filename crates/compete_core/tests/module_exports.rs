//! Integration tests for module exports.
//!
//! Verify that all public modules and types are exported and accessible
//! via absolute paths.

/// Input value objects are reachable from `types`.
#[test]
fn test_types_module_exports() {
    use compete_core::types::{
        CompetitorSpec, ConfidenceLevel, Currency, Dimensions, ExtractionConfidence, ProductSpec,
        RoleView,
    };

    let product = ProductSpec::new(
        10.0,
        100.0,
        Dimensions::new(1.0, 1.0, 1.0),
        0.0,
        1.0,
        vec!["x".to_string()],
    );
    let competitor = CompetitorSpec::new(20.0, vec![]);
    assert_eq!(product.feature_count(), 1);
    assert_eq!(competitor.feature_count(), 0);
    assert_eq!(
        ExtractionConfidence::default().quality(),
        ConfidenceLevel::High
    );
    assert_eq!(Currency::default(), Currency::USD);
    assert_eq!(RoleView::default(), RoleView::Retail);
}

/// Error types are reachable both from `types` and `types::error`.
#[test]
fn test_error_module_exports() {
    use compete_core::types::error::{CurrencyError, RoleError};
    use compete_core::types::{AnalysisError, CalculationError, ValidationError};

    let validation = ValidationError::NegativeCost { cost: -1.0 };
    let calculation = CalculationError::new("failed");
    let analysis: AnalysisError = validation.clone().into();

    assert_eq!(analysis, AnalysisError::Validation(validation));
    assert_eq!(calculation.message, "failed");
    let _ = CurrencyError::UnknownCurrency("X".to_string());
    let _ = RoleError::UnknownRole("x".to_string());
}

/// Guards, helpers and explanations are reachable.
#[test]
fn test_function_module_exports() {
    use compete_core::explain::{CalculationResult, Explanation};
    use compete_core::format::{format_currency, format_percentage, format_time_period};
    use compete_core::math::{change_percentage, clamp, round1, round2, round_to, safe_divide};
    use compete_core::types::Currency;
    use compete_core::validation::{
        validate_competitor, validate_investment, validate_margin_per_unit,
        validate_monthly_profit, validate_monthly_sales, validate_price_and_cost,
        validate_product, validate_scenario,
    };

    let _ = CalculationResult::new(1.0, Explanation::new("x"));
    let _ = format_currency(1.0, Currency::USD);
    let _ = format_percentage(0.5, 1);
    let _ = format_time_period(3.0);
    let _ = (
        change_percentage(1.0, 2.0),
        clamp(1.0, 0.0, 2.0),
        round1(1.0),
        round2(1.0),
        round_to(1.0, 3),
        safe_divide(1.0, 1.0, 0.0),
    );

    assert!(validate_investment(0.0).is_ok());
    assert!(validate_margin_per_unit(1.0).is_ok());
    assert!(validate_monthly_profit(1.0).is_ok());
    assert!(validate_monthly_sales(1.0).is_ok());
    assert!(validate_price_and_cost(2.0, 1.0).is_ok());

    let _ = validate_product;
    let _ = validate_competitor;
    let _ = validate_scenario;
}
