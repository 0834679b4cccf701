//! Input guards executed before any arithmetic.
//!
//! Each function returns `Ok(())` or the first [`ValidationError`] it finds.
//! Non-finite values are rejected before any range check, so a NaN never
//! reaches a comparison that would silently evaluate to `false`.
//!
//! Precedence for the price/cost pair:
//! 1. price must be `> 0`
//! 2. cost must be `≥ 0`
//! 3. cost must be `< price`

use crate::types::{CompetitorSpec, ProductSpec, ValidationError};

/// Inclusive bounds accepted for product unit cost.
pub const COST_RANGE: (f64, f64) = (0.01, 100_000.0);
/// Inclusive bounds accepted for product weight (g).
pub const WEIGHT_RANGE: (f64, f64) = (0.1, 50_000.0);
/// Inclusive bounds accepted for each product dimension (cm).
pub const DIMENSION_RANGE: (f64, f64) = (0.1, 1_000.0);
/// Inclusive bounds accepted for fixed investment.
pub const INVESTMENT_RANGE: (f64, f64) = (0.0, 10_000_000.0);
/// Inclusive bounds accepted for estimated monthly sales.
pub const MONTHLY_SALES_RANGE: (f64, f64) = (1.0, 1_000_000.0);
/// Maximum number of product features.
pub const MAX_FEATURES: usize = 20;
/// Maximum product name length in characters.
pub const MAX_NAME_LEN: usize = 100;

fn ensure_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}

fn ensure_in_range(
    field: &'static str,
    value: f64,
    (min, max): (f64, f64),
) -> Result<(), ValidationError> {
    ensure_finite(field, value)?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn ensure_positive_measurement(field: &'static str, value: f64) -> Result<(), ValidationError> {
    ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveMeasurement { field, value });
    }
    Ok(())
}

/// Validate a selling price against a unit cost.
///
/// # Examples
///
/// ```
/// use compete_core::validation::validate_price_and_cost;
/// use compete_core::types::ValidationError;
///
/// assert!(validate_price_and_cost(100.0, 60.0).is_ok());
/// assert_eq!(
///     validate_price_and_cost(50.0, 60.0),
///     Err(ValidationError::CostNotBelowPrice { cost: 60.0, price: 50.0 })
/// );
/// ```
pub fn validate_price_and_cost(price: f64, cost: f64) -> Result<(), ValidationError> {
    ensure_finite("competitorPrice", price)?;
    ensure_finite("cost", cost)?;
    if price <= 0.0 {
        return Err(ValidationError::NonPositivePrice { price });
    }
    if cost < 0.0 {
        return Err(ValidationError::NegativeCost { cost });
    }
    if cost >= price {
        return Err(ValidationError::CostNotBelowPrice { cost, price });
    }
    Ok(())
}

/// Validate a fixed investment amount (`≥ 0`).
pub fn validate_investment(investment: f64) -> Result<(), ValidationError> {
    ensure_finite("fixedInvestment", investment)?;
    if investment < 0.0 {
        return Err(ValidationError::NegativeInvestment { investment });
    }
    Ok(())
}

/// Validate a monthly profit (`> 0`).
pub fn validate_monthly_profit(profit: f64) -> Result<(), ValidationError> {
    ensure_finite("monthlyProfit", profit)?;
    if profit <= 0.0 {
        return Err(ValidationError::NonPositiveMonthlyProfit { profit });
    }
    Ok(())
}

/// Validate a monthly sales volume (`> 0`).
pub fn validate_monthly_sales(sales: f64) -> Result<(), ValidationError> {
    ensure_finite("estimatedMonthlySales", sales)?;
    if sales <= 0.0 {
        return Err(ValidationError::NonPositiveMonthlySales { sales });
    }
    Ok(())
}

/// Validate a per-unit margin (`≥ 0`).
pub fn validate_margin_per_unit(margin: f64) -> Result<(), ValidationError> {
    ensure_finite("marginPerUnit", margin)?;
    if margin < 0.0 {
        return Err(ValidationError::NegativeUnitMargin { margin });
    }
    Ok(())
}

/// Validate every field of the user's product against the accepted form
/// bounds.
///
/// An empty name is accepted (the product is then shown under a generic
/// label), but a name longer than [`MAX_NAME_LEN`] characters is not.
pub fn validate_product(product: &ProductSpec) -> Result<(), ValidationError> {
    if product.name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::InvalidName {
            reason: format!("name must be at most {} characters", MAX_NAME_LEN),
        });
    }

    ensure_in_range("cost", product.cost, COST_RANGE)?;
    ensure_in_range("weight", product.weight, WEIGHT_RANGE)?;
    ensure_in_range("dimensions.length", product.dimensions.length, DIMENSION_RANGE)?;
    ensure_in_range("dimensions.width", product.dimensions.width, DIMENSION_RANGE)?;
    ensure_in_range("dimensions.height", product.dimensions.height, DIMENSION_RANGE)?;
    ensure_in_range("fixedInvestment", product.fixed_investment, INVESTMENT_RANGE)?;
    ensure_in_range(
        "estimatedMonthlySales",
        product.estimated_monthly_sales,
        MONTHLY_SALES_RANGE,
    )?;

    if product.features.is_empty() {
        return Err(ValidationError::InvalidFeatures {
            reason: "at least one feature is required".to_string(),
        });
    }
    if product.features.len() > MAX_FEATURES {
        return Err(ValidationError::InvalidFeatures {
            reason: format!(
                "at most {} features are allowed, got {}",
                MAX_FEATURES,
                product.features.len()
            ),
        });
    }
    if let Some(index) = product.features.iter().position(|f| f.trim().is_empty()) {
        return Err(ValidationError::InvalidFeatures {
            reason: format!("feature #{} is blank", index + 1),
        });
    }

    Ok(())
}

/// Validate extracted competitor data.
///
/// Optional measurements are only checked when present.
pub fn validate_competitor(competitor: &CompetitorSpec) -> Result<(), ValidationError> {
    ensure_finite("competitorPrice", competitor.price)?;
    if competitor.price <= 0.0 {
        return Err(ValidationError::NonPositivePrice {
            price: competitor.price,
        });
    }

    if let Some(weight) = competitor.weight {
        ensure_positive_measurement("competitorWeight", weight)?;
    }
    if let Some(dims) = competitor.dimensions {
        ensure_positive_measurement("competitorDimensions.length", dims.length)?;
        ensure_positive_measurement("competitorDimensions.width", dims.width)?;
        ensure_positive_measurement("competitorDimensions.height", dims.height)?;
    }

    let confidence = &competitor.extraction_confidence;
    for (field, value) in [
        ("extractionConfidence.price", confidence.price),
        ("extractionConfidence.weight", confidence.weight),
        ("extractionConfidence.dimensions", confidence.dimensions),
        ("extractionConfidence.features", confidence.features),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::InvalidConfidence { field, value });
        }
    }

    Ok(())
}

/// Validate a product/competitor pair before analysis.
///
/// Runs [`validate_product`], [`validate_competitor`], then the price/cost
/// relationship.
pub fn validate_scenario(
    product: &ProductSpec,
    competitor: &CompetitorSpec,
) -> Result<(), ValidationError> {
    validate_product(product)?;
    validate_competitor(competitor)?;
    validate_price_and_cost(competitor.price, product.cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Dimensions, ExtractionConfidence};

    fn product() -> ProductSpec {
        ProductSpec::new(
            60.0,
            200.0,
            Dimensions::new(10.0, 5.0, 2.0),
            12_000.0,
            25.0,
            vec!["a".to_string(), "b".to_string()],
        )
    }

    #[test]
    fn test_price_and_cost_precedence() {
        // price is checked before cost
        assert_eq!(
            validate_price_and_cost(0.0, -10.0),
            Err(ValidationError::NonPositivePrice { price: 0.0 })
        );
        assert_eq!(
            validate_price_and_cost(100.0, -10.0),
            Err(ValidationError::NegativeCost { cost: -10.0 })
        );
        assert_eq!(
            validate_price_and_cost(60.0, 60.0),
            Err(ValidationError::CostNotBelowPrice {
                cost: 60.0,
                price: 60.0
            })
        );
        assert!(validate_price_and_cost(100.0, 0.0).is_ok());
    }

    #[test]
    fn test_non_finite_rejected_first() {
        let err = validate_price_and_cost(f64::NAN, 10.0).unwrap_err();
        assert_eq!(err.field(), "competitorPrice");
        let err = validate_investment(f64::INFINITY).unwrap_err();
        assert!(matches!(err, ValidationError::NonFinite { .. }));
    }

    #[test]
    fn test_scalar_guards() {
        assert!(validate_investment(0.0).is_ok());
        assert!(validate_investment(-1.0).is_err());
        assert!(validate_monthly_profit(0.0).is_err());
        assert!(validate_monthly_profit(0.01).is_ok());
        assert!(validate_monthly_sales(-3.0).is_err());
        assert!(validate_margin_per_unit(0.0).is_ok());
        assert!(validate_margin_per_unit(-0.5).is_err());
    }

    #[test]
    fn test_validate_product_accepts_sample() {
        assert!(validate_product(&product()).is_ok());
    }

    #[test]
    fn test_validate_product_bounds() {
        let mut p = product();
        p.weight = 0.05;
        assert_eq!(validate_product(&p).unwrap_err().field(), "weight");

        let mut p = product();
        p.dimensions.height = 1_500.0;
        assert_eq!(validate_product(&p).unwrap_err().field(), "dimensions.height");

        let mut p = product();
        p.estimated_monthly_sales = 0.5;
        assert_eq!(
            validate_product(&p).unwrap_err().field(),
            "estimatedMonthlySales"
        );
    }

    #[test]
    fn test_validate_product_features() {
        let mut p = product();
        p.features.clear();
        assert!(matches!(
            validate_product(&p),
            Err(ValidationError::InvalidFeatures { .. })
        ));

        let mut p = product();
        p.features = (0..21).map(|i| format!("f{}", i)).collect();
        assert!(validate_product(&p).is_err());

        let mut p = product();
        p.features.push("   ".to_string());
        let err = validate_product(&p).unwrap_err();
        assert!(err.to_string().contains("#3"));
    }

    #[test]
    fn test_validate_product_name_length() {
        let p = product().with_name("x".repeat(101));
        assert_eq!(validate_product(&p).unwrap_err().field(), "name");
        assert!(validate_product(&product().with_name("x".repeat(100))).is_ok());
    }

    #[test]
    fn test_validate_competitor() {
        let competitor = CompetitorSpec::new(100.0, vec![]);
        assert!(validate_competitor(&competitor).is_ok());

        let err = validate_competitor(&competitor.clone().with_weight(0.0)).unwrap_err();
        assert_eq!(err.field(), "competitorWeight");

        let err = validate_competitor(
            &competitor
                .clone()
                .with_confidence(ExtractionConfidence::new(1.2, 1.0, 1.0, 1.0)),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidConfidence { .. }));

        let err = validate_competitor(&competitor.with_price(-5.0)).unwrap_err();
        assert!(err.concerns_competitor_price());
    }

    #[test]
    fn test_validate_scenario_checks_relationship() {
        let competitor = CompetitorSpec::new(50.0, vec![]);
        let err = validate_scenario(&product(), &competitor).unwrap_err();
        assert!(matches!(err, ValidationError::CostNotBelowPrice { .. }));
    }
}
