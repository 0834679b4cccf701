//! Sensitivity execution and result tables.

use compete_core::math::{round1, round_to};
use compete_core::types::{AnalysisError, ProductSpec};
use compete_metrics::profit::calculate_complete_profit_analysis;
use serde::Serialize;
use tracing::debug;

use super::shifts::{SensitivityAxis, SensitivityConfig};

/// One row of a sensitivity table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityPoint {
    /// Input change in percent (e.g. `-10.0`)
    pub percent_change: f64,
    /// Response in percent, one decimal
    pub resulting_impact_percent: f64,
}

/// Ordered responses for one perturbed input.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SensitivityTable {
    /// Perturbed input
    pub axis: SensitivityAxis,
    /// Rows in grid order
    pub points: Vec<SensitivityPoint>,
}

impl SensitivityTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Impact at a given percent change, if the grid contains it.
    pub fn impact_at(&self, percent_change: f64) -> Option<f64> {
        self.points
            .iter()
            .find(|p| (p.percent_change - percent_change).abs() < 1e-9)
            .map(|p| p.resulting_impact_percent)
    }

    /// Largest absolute impact in the table.
    pub fn max_abs_impact(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.resulting_impact_percent.abs())
            .fold(0.0, f64::max)
    }

    /// Whether impacts strictly increase with the input change.
    pub fn is_strictly_increasing(&self) -> bool {
        self.sorted_impacts().windows(2).all(|w| w[0] < w[1])
    }

    /// Whether impacts strictly decrease with the input change.
    pub fn is_strictly_decreasing(&self) -> bool {
        self.sorted_impacts().windows(2).all(|w| w[0] > w[1])
    }

    fn sorted_impacts(&self) -> Vec<f64> {
        let mut points = self.points.clone();
        points.sort_by(|a, b| a.percent_change.total_cmp(&b.percent_change));
        points.iter().map(|p| p.resulting_impact_percent).collect()
    }
}

/// Cost, price, and sales sensitivity tables around a base scenario.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityAnalysis {
    /// Margin response to unit cost changes
    pub cost_sensitivity: SensitivityTable,
    /// Margin response to competitor price changes
    pub price_sensitivity: SensitivityTable,
    /// Payback response to sales volume changes (positive = faster payback)
    pub sales_sensitivity: SensitivityTable,
    /// Base per-unit margin
    pub base_margin: f64,
    /// Base payback period in months
    pub base_roi_months: f64,
}

impl SensitivityAnalysis {
    /// Table for one axis.
    pub fn table(&self, axis: SensitivityAxis) -> &SensitivityTable {
        match axis {
            SensitivityAxis::Cost => &self.cost_sensitivity,
            SensitivityAxis::Price => &self.price_sensitivity,
            SensitivityAxis::Sales => &self.sales_sensitivity,
        }
    }

    /// Axis whose table shows the largest absolute impact.
    ///
    /// Ties resolve to the earlier axis in [`SensitivityAxis::ALL`].
    pub fn most_sensitive_axis(&self) -> SensitivityAxis {
        let mut best = SensitivityAxis::Cost;
        for axis in SensitivityAxis::ALL {
            if self.table(axis).max_abs_impact() > self.table(best).max_abs_impact() {
                best = axis;
            }
        }
        best
    }
}

fn percent(change: f64) -> f64 {
    round_to(change * 100.0, 6)
}

fn build_table(
    axis: SensitivityAxis,
    changes: &[f64],
    impact: impl Fn(f64) -> f64,
) -> SensitivityTable {
    SensitivityTable {
        axis,
        points: changes
            .iter()
            .map(|&change| SensitivityPoint {
                percent_change: percent(change),
                resulting_impact_percent: round1(impact(change)),
            })
            .collect(),
    }
}

/// Run the default ±20 % / ±50 % sensitivity analysis.
///
/// # Examples
///
/// ```
/// use compete_core::types::{Dimensions, ProductSpec};
/// use compete_strategy::sensitivity::perform_sensitivity_analysis;
///
/// let product = ProductSpec::new(
///     60.0, 200.0, Dimensions::new(10.0, 5.0, 2.0), 12_000.0, 25.0, vec!["a".into()],
/// );
/// let analysis = perform_sensitivity_analysis(&product, 100.0).unwrap();
///
/// // +10 % cost removes 6 of the 40 margin
/// assert_eq!(analysis.cost_sensitivity.impact_at(10.0), Some(-15.0));
/// // +10 % price adds 10 to the margin
/// assert_eq!(analysis.price_sensitivity.impact_at(10.0), Some(25.0));
/// // +25 % sales shortens payback from 12 to 9.6 months
/// assert_eq!(analysis.sales_sensitivity.impact_at(25.0), Some(20.0));
/// ```
pub fn perform_sensitivity_analysis(
    product: &ProductSpec,
    competitor_price: f64,
) -> Result<SensitivityAnalysis, AnalysisError> {
    perform_sensitivity_analysis_with(product, competitor_price, &SensitivityConfig::default())
}

/// Run a sensitivity analysis with custom perturbation grids.
///
/// # Errors
///
/// - [`AnalysisError::Validation`] if a grid contains an invalid change
/// - [`AnalysisError::Calculation`] if the base scenario cannot be analysed
pub fn perform_sensitivity_analysis_with(
    product: &ProductSpec,
    competitor_price: f64,
    config: &SensitivityConfig,
) -> Result<SensitivityAnalysis, AnalysisError> {
    config.validate()?;
    let base = calculate_complete_profit_analysis(product, competitor_price)?.result;
    let base_margin = base.margin;
    let base_roi = base.roi_months;

    debug!(
        base_margin,
        base_roi_months = base_roi,
        "running sensitivity analysis"
    );

    let cost_sensitivity = build_table(
        SensitivityAxis::Cost,
        config.changes(SensitivityAxis::Cost),
        |change| {
            let new_margin = competitor_price - product.cost * (1.0 + change);
            (new_margin - base_margin) / base_margin * 100.0
        },
    );

    let price_sensitivity = build_table(
        SensitivityAxis::Price,
        config.changes(SensitivityAxis::Price),
        |change| {
            let new_margin = competitor_price * (1.0 + change) - product.cost;
            (new_margin - base_margin) / base_margin * 100.0
        },
    );

    let sales_sensitivity = build_table(
        SensitivityAxis::Sales,
        config.changes(SensitivityAxis::Sales),
        |change| {
            // no investment means nothing to pay back
            if base_roi == 0.0 {
                return 0.0;
            }
            let monthly_profit = base_margin * product.estimated_monthly_sales * (1.0 + change);
            let new_roi = product.fixed_investment / monthly_profit;
            (base_roi - new_roi) / base_roi * 100.0
        },
    );

    Ok(SensitivityAnalysis {
        cost_sensitivity,
        price_sensitivity,
        sales_sensitivity,
        base_margin,
        base_roi_months: base_roi,
    })
}
