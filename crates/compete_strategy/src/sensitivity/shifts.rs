//! Perturbation axes and grids.
//!
//! Provides the one-factor-at-a-time perturbation setup:
//! - `SensitivityAxis`: which input is perturbed and which metric responds
//! - `SensitivityConfig`: the fractional changes applied on each axis

use std::fmt;

use compete_core::types::ValidationError;
use serde::{Deserialize, Serialize};

/// Default cost and price perturbations (±20 %).
pub const DEFAULT_COST_CHANGES: [f64; 5] = [-0.2, -0.1, 0.0, 0.1, 0.2];

/// Default price perturbations (±20 %).
pub const DEFAULT_PRICE_CHANGES: [f64; 5] = [-0.2, -0.1, 0.0, 0.1, 0.2];

/// Default sales-volume perturbations (±50 %).
pub const DEFAULT_SALES_CHANGES: [f64; 5] = [-0.5, -0.25, 0.0, 0.25, 0.5];

/// Input perturbed by a sensitivity table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitivityAxis {
    /// Unit cost; response is the margin change
    Cost,
    /// Competitor price; response is the margin change
    Price,
    /// Monthly sales volume; response is the payback improvement
    Sales,
}

impl SensitivityAxis {
    /// All axes in reporting order.
    pub const ALL: [SensitivityAxis; 3] = [
        SensitivityAxis::Cost,
        SensitivityAxis::Price,
        SensitivityAxis::Sales,
    ];

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            SensitivityAxis::Cost => "Cost",
            SensitivityAxis::Price => "Price",
            SensitivityAxis::Sales => "Sales volume",
        }
    }

    /// Name of the responding metric.
    pub fn metric(&self) -> &'static str {
        match self {
            SensitivityAxis::Cost | SensitivityAxis::Price => "Margin impact",
            SensitivityAxis::Sales => "ROI impact",
        }
    }

    /// Field name used in validation errors.
    pub(crate) fn field(&self) -> &'static str {
        match self {
            SensitivityAxis::Cost => "costChange",
            SensitivityAxis::Price => "priceChange",
            SensitivityAxis::Sales => "salesChange",
        }
    }
}

impl fmt::Display for SensitivityAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fractional changes applied on each axis (`0.1` means +10 %).
///
/// # Examples
///
/// ```
/// use compete_strategy::sensitivity::{SensitivityAxis, SensitivityConfig};
///
/// let config = SensitivityConfig::default().with_sales_changes(vec![-0.1, 0.0, 0.1]);
/// assert_eq!(config.changes(SensitivityAxis::Sales), &[-0.1, 0.0, 0.1]);
/// assert_eq!(config.changes(SensitivityAxis::Cost).len(), 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityConfig {
    /// Cost perturbations
    pub cost_changes: Vec<f64>,
    /// Price perturbations
    pub price_changes: Vec<f64>,
    /// Sales perturbations
    pub sales_changes: Vec<f64>,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            cost_changes: DEFAULT_COST_CHANGES.to_vec(),
            price_changes: DEFAULT_PRICE_CHANGES.to_vec(),
            sales_changes: DEFAULT_SALES_CHANGES.to_vec(),
        }
    }
}

impl SensitivityConfig {
    /// Replace the cost grid.
    pub fn with_cost_changes(mut self, changes: Vec<f64>) -> Self {
        self.cost_changes = changes;
        self
    }

    /// Replace the price grid.
    pub fn with_price_changes(mut self, changes: Vec<f64>) -> Self {
        self.price_changes = changes;
        self
    }

    /// Replace the sales grid.
    pub fn with_sales_changes(mut self, changes: Vec<f64>) -> Self {
        self.sales_changes = changes;
        self
    }

    /// Grid for one axis.
    pub fn changes(&self, axis: SensitivityAxis) -> &[f64] {
        match axis {
            SensitivityAxis::Cost => &self.cost_changes,
            SensitivityAxis::Price => &self.price_changes,
            SensitivityAxis::Sales => &self.sales_changes,
        }
    }

    /// Check every change is finite and greater than -100 %.
    ///
    /// A cost may drop to zero, so the cost axis accepts exactly -100 %.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for axis in SensitivityAxis::ALL {
            for &change in self.changes(axis) {
                let floor_ok = match axis {
                    SensitivityAxis::Cost => change >= -1.0,
                    SensitivityAxis::Price | SensitivityAxis::Sales => change > -1.0,
                };
                if !change.is_finite() || !floor_ok {
                    return Err(ValidationError::InvalidPerturbation {
                        axis: axis.field(),
                        change,
                    });
                }
            }
        }
        Ok(())
    }
}
