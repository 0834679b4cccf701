//! Profit and return-on-investment calculators.
//!
//! The three primitive calculators validate their own inputs and fail with
//! a [`ValidationError`]. [`calculate_complete_profit_analysis`] chains
//! them (profit → monthly profit → ROI) and reports any failure along the
//! chain as a [`CalculationError`] carrying the original cause.

use compete_core::explain::{CalculationResult, Explanation};
use compete_core::types::{CalculationError, ProductSpec, ValidationError};
use compete_core::validation::{
    validate_investment, validate_margin_per_unit, validate_monthly_profit,
    validate_monthly_sales, validate_price_and_cost,
};
use serde::Serialize;

/// Per-unit margin at a given price.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitResult {
    /// `price - cost`
    pub margin: f64,
    /// `margin / price`, strictly in `(0, 1)`
    pub margin_rate: f64,
}

/// Margin, margin rate, and payback period of a product at a price.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitAnalysis {
    /// Absolute profit per unit
    pub margin: f64,
    /// Margin as a fraction of price
    pub margin_rate: f64,
    /// Months for monthly profit to repay the fixed investment
    pub roi_months: f64,
}

impl ProfitAnalysis {
    /// Create a profit analysis from its three components.
    pub fn new(margin: f64, margin_rate: f64, roi_months: f64) -> Self {
        Self {
            margin,
            margin_rate,
            roi_months,
        }
    }
}

/// Compute margin and margin rate.
///
/// # Examples
///
/// ```
/// use compete_metrics::profit::calculate_profit;
///
/// let profit = calculate_profit(100.0, 60.0).unwrap().result;
/// assert_eq!(profit.margin, 40.0);
/// assert_eq!(profit.margin_rate, 0.4);
///
/// assert!(calculate_profit(0.0, 50.0).is_err());
/// assert!(calculate_profit(100.0, -10.0).is_err());
/// assert!(calculate_profit(50.0, 60.0).is_err());
/// ```
pub fn calculate_profit(
    competitor_price: f64,
    my_cost: f64,
) -> Result<CalculationResult<ProfitResult>, ValidationError> {
    validate_price_and_cost(competitor_price, my_cost)?;

    let margin = competitor_price - my_cost;
    let margin_rate = margin / competitor_price;

    let details = Explanation::new("margin = price - cost; marginRate = margin / price")
        .with_input("competitorPrice", competitor_price)
        .with_input("myCost", my_cost)
        .with_step("margin", margin)
        .with_step("marginRatePercent", margin_rate * 100.0);

    Ok(CalculationResult::new(
        ProfitResult {
            margin,
            margin_rate,
        },
        details,
    ))
}

/// Compute monthly profit as `marginPerUnit × monthlySales`.
pub fn calculate_monthly_profit(
    margin_per_unit: f64,
    monthly_sales: f64,
) -> Result<CalculationResult<f64>, ValidationError> {
    validate_margin_per_unit(margin_per_unit)?;
    validate_monthly_sales(monthly_sales)?;

    let monthly_profit = margin_per_unit * monthly_sales;
    let details = Explanation::new("monthlyProfit = marginPerUnit × monthlySales")
        .with_input("marginPerUnit", margin_per_unit)
        .with_input("monthlySales", monthly_sales);

    Ok(CalculationResult::new(monthly_profit, details))
}

/// Compute the payback period in months as `fixedInvestment / monthlyProfit`.
///
/// # Examples
///
/// ```
/// use compete_metrics::profit::calculate_roi;
///
/// assert_eq!(calculate_roi(12_000.0, 1_000.0).unwrap().result, 12.0);
/// assert_eq!(calculate_roi(0.0, 1_000.0).unwrap().result, 0.0);
/// assert!(calculate_roi(12_000.0, 0.0).is_err());
/// ```
pub fn calculate_roi(
    fixed_investment: f64,
    monthly_profit: f64,
) -> Result<CalculationResult<f64>, ValidationError> {
    validate_investment(fixed_investment)?;
    validate_monthly_profit(monthly_profit)?;

    let roi_months = fixed_investment / monthly_profit;
    let details = Explanation::new("roiMonths = fixedInvestment / monthlyProfit")
        .with_input("fixedInvestment", fixed_investment)
        .with_input("monthlyProfit", monthly_profit);

    Ok(CalculationResult::new(roi_months, details))
}

/// Chain profit, monthly profit, and ROI for a product sold at
/// `competitor_price`.
///
/// # Errors
///
/// Returns a [`CalculationError`] wrapping the first [`ValidationError`]
/// raised along the chain. The error is retryable only when the
/// competitor price is at fault.
pub fn calculate_complete_profit_analysis(
    product: &ProductSpec,
    competitor_price: f64,
) -> Result<CalculationResult<ProfitAnalysis>, CalculationError> {
    let wrap = |cause| CalculationError::from_validation("Complete profit analysis failed", cause);

    let profit = calculate_profit(competitor_price, product.cost)
        .map_err(wrap)?
        .result;
    let monthly_profit = calculate_monthly_profit(profit.margin, product.estimated_monthly_sales)
        .map_err(wrap)?
        .result;
    let roi_months = calculate_roi(product.fixed_investment, monthly_profit)
        .map_err(wrap)?
        .result;

    let details = Explanation::new("complete analysis = profit calculation + ROI calculation")
        .with_input("competitorPrice", competitor_price)
        .with_input("myCost", product.cost)
        .with_input("fixedInvestment", product.fixed_investment)
        .with_input("monthlySales", product.estimated_monthly_sales)
        .with_step("margin", profit.margin)
        .with_step("marginRatePercent", profit.margin_rate * 100.0)
        .with_step("monthlyProfit", monthly_profit)
        .with_step("roiMonths", roi_months);

    Ok(CalculationResult::new(
        ProfitAnalysis::new(profit.margin, profit.margin_rate, roi_months),
        details,
    ))
}
