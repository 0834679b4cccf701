//! Break-even volume at a chosen selling price.

use compete_core::explain::{CalculationResult, Explanation};
use compete_core::math::round1;
use compete_core::types::{ProductSpec, ValidationError};
use compete_core::validation::{validate_investment, validate_monthly_sales};
use serde::Serialize;

/// Payback horizon (months) used for the monthly break-even target.
pub const BREAK_EVEN_TARGET_MONTHS: f64 = 12.0;

/// Units and time needed to recover the fixed investment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenAnalysis {
    /// Units to sell before the investment is recovered
    pub break_even_units: u64,
    /// Months to reach `break_even_units` at the estimated sales rate (one decimal)
    pub break_even_months: f64,
    /// Units per month needed to break even within a year
    pub monthly_break_even_units: u64,
}

/// Compute the break-even point for `product` sold at `selling_price`.
///
/// # Errors
///
/// [`ValidationError::CostNotBelowPrice`] when the selling price does not
/// cover the unit cost, plus the usual investment and sales guards.
///
/// # Examples
///
/// ```
/// use compete_core::types::{Dimensions, ProductSpec};
/// use compete_metrics::break_even::calculate_break_even_point;
///
/// let product = ProductSpec::new(
///     60.0, 200.0, Dimensions::new(10.0, 5.0, 2.0), 10_000.0, 25.0, vec!["a".into()],
/// );
/// let analysis = calculate_break_even_point(&product, 90.0).unwrap().result;
/// assert_eq!(analysis.break_even_units, 334);
/// assert_eq!(analysis.break_even_months, 13.4);
/// assert_eq!(analysis.monthly_break_even_units, 28);
/// ```
pub fn calculate_break_even_point(
    product: &ProductSpec,
    selling_price: f64,
) -> Result<CalculationResult<BreakEvenAnalysis>, ValidationError> {
    validate_investment(product.fixed_investment)?;
    validate_monthly_sales(product.estimated_monthly_sales)?;

    let unit_margin = selling_price - product.cost;
    if unit_margin.is_nan() || unit_margin <= 0.0 {
        return Err(ValidationError::CostNotBelowPrice {
            cost: product.cost,
            price: selling_price,
        });
    }

    let units = (product.fixed_investment / unit_margin).ceil();
    let months = units / product.estimated_monthly_sales;
    let monthly_units = (units / BREAK_EVEN_TARGET_MONTHS).ceil();

    let details = Explanation::new(
        "breakEvenUnits = ceil(fixedInvestment / (price - cost)); \
         breakEvenMonths = breakEvenUnits / monthlySales",
    )
    .with_input("sellingPrice", selling_price)
    .with_input("myCost", product.cost)
    .with_input("fixedInvestment", product.fixed_investment)
    .with_input("monthlySales", product.estimated_monthly_sales)
    .with_step("unitMargin", unit_margin)
    .with_step("breakEvenMonths", months);

    Ok(CalculationResult::new(
        BreakEvenAnalysis {
            break_even_units: units as u64,
            break_even_months: round1(months),
            monthly_break_even_units: monthly_units as u64,
        },
        details,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use compete_core::types::Dimensions;

    fn product(investment: f64, sales: f64) -> ProductSpec {
        ProductSpec::new(
            60.0,
            200.0,
            Dimensions::new(1.0, 1.0, 1.0),
            investment,
            sales,
            vec!["a".to_string()],
        )
    }

    #[test]
    fn test_break_even_exact_division() {
        let result = calculate_break_even_point(&product(12_000.0, 25.0), 100.0)
            .unwrap()
            .result;
        assert_eq!(result.break_even_units, 300);
        assert_eq!(result.break_even_months, 12.0);
        assert_eq!(result.monthly_break_even_units, 25);
    }

    #[test]
    fn test_break_even_zero_investment() {
        let result = calculate_break_even_point(&product(0.0, 25.0), 100.0)
            .unwrap()
            .result;
        assert_eq!(result.break_even_units, 0);
        assert_eq!(result.break_even_months, 0.0);
        assert_eq!(result.monthly_break_even_units, 0);
    }

    #[test]
    fn test_break_even_rejects_price_at_cost() {
        let err = calculate_break_even_point(&product(1_000.0, 25.0), 60.0).unwrap_err();
        assert!(matches!(err, ValidationError::CostNotBelowPrice { .. }));
    }

    #[test]
    fn test_break_even_rejects_nan_price() {
        assert!(calculate_break_even_point(&product(1_000.0, 25.0), f64::NAN).is_err());
    }
}
