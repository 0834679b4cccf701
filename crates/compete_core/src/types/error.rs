//! Error types for structured error handling.
//!
//! This module provides:
//! - `ValidationError`: a caller-supplied value violates a precondition
//! - `CalculationError`: a composed computation could not produce a result
//! - `AnalysisError`: union of the two, returned by end-to-end pipelines
//! - `CurrencyError`: errors from currency parsing
//! - `RoleError`: errors from role-view parsing

use serde::Serialize;
use thiserror::Error;

/// Precondition violations detected before any arithmetic runs.
///
/// Every variant identifies exactly which constraint failed. Validation
/// errors are never retryable: the caller must correct the input first.
///
/// # Examples
/// ```
/// use compete_core::types::ValidationError;
///
/// let err = ValidationError::CostNotBelowPrice { cost: 60.0, price: 50.0 };
/// assert_eq!(err.field(), "cost");
/// assert!(!err.is_retryable());
/// assert!(format!("{}", err).contains("must be lower than price"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "constraint", rename_all = "snake_case")]
pub enum ValidationError {
    /// Input is NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Price (or competitor price) is zero or negative.
    #[error("Competitor price must be greater than 0, got {price}")]
    NonPositivePrice {
        /// The rejected price
        price: f64,
    },

    /// Cost is negative.
    #[error("Cost cannot be negative, got {cost}")]
    NegativeCost {
        /// The rejected cost
        cost: f64,
    },

    /// Cost is equal to or above the selling price.
    #[error("Cost must be lower than price (cost: {cost}, price: {price})")]
    CostNotBelowPrice {
        /// Unit cost
        cost: f64,
        /// Selling price
        price: f64,
    },

    /// Fixed investment is negative.
    #[error("Fixed investment cannot be negative, got {investment}")]
    NegativeInvestment {
        /// The rejected investment
        investment: f64,
    },

    /// Monthly profit is zero or negative.
    #[error("Monthly profit must be greater than 0, got {profit}")]
    NonPositiveMonthlyProfit {
        /// The rejected monthly profit
        profit: f64,
    },

    /// Monthly sales volume is zero or negative.
    #[error("Monthly sales must be greater than 0, got {sales}")]
    NonPositiveMonthlySales {
        /// The rejected sales volume
        sales: f64,
    },

    /// Margin per unit is negative.
    #[error("Margin per unit cannot be negative, got {margin}")]
    NegativeUnitMargin {
        /// The rejected margin
        margin: f64,
    },

    /// A product field lies outside its accepted range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// An optional competitor measurement is present but not positive.
    #[error("{field} must be greater than 0 when present, got {value}")]
    NonPositiveMeasurement {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Extraction confidence outside `[0, 1]`.
    #[error("Extraction confidence for {field} must be within [0, 1], got {value}")]
    InvalidConfidence {
        /// Name of the offending confidence field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Feature list is empty, too long, or contains a blank entry.
    #[error("Invalid feature list: {reason}")]
    InvalidFeatures {
        /// Why the list was rejected
        reason: String,
    },

    /// Product name is empty or too long.
    #[error("Invalid product name: {reason}")]
    InvalidName {
        /// Why the name was rejected
        reason: String,
    },

    /// A sensitivity perturbation would drive its input to zero or below.
    #[error("Perturbation for {axis} must be finite and greater than -100%, got {change}")]
    InvalidPerturbation {
        /// Perturbed input
        axis: &'static str,
        /// The rejected fractional change
        change: f64,
    },
}

impl ValidationError {
    /// Name of the field whose constraint failed.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NonFinite { field, .. } => *field,
            ValidationError::NonPositivePrice { .. } => "price",
            ValidationError::NegativeCost { .. } => "cost",
            ValidationError::CostNotBelowPrice { .. } => "cost",
            ValidationError::NegativeInvestment { .. } => "fixedInvestment",
            ValidationError::NonPositiveMonthlyProfit { .. } => "monthlyProfit",
            ValidationError::NonPositiveMonthlySales { .. } => "estimatedMonthlySales",
            ValidationError::NegativeUnitMargin { .. } => "marginPerUnit",
            ValidationError::OutOfRange { field, .. } => *field,
            ValidationError::NonPositiveMeasurement { field, .. } => *field,
            ValidationError::InvalidConfidence { field, .. } => *field,
            ValidationError::InvalidFeatures { .. } => "features",
            ValidationError::InvalidName { .. } => "name",
            ValidationError::InvalidPerturbation { axis, .. } => *axis,
        }
    }

    /// Validation errors always require corrected input.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Whether the failure involves the competitor price.
    ///
    /// Competitor data comes from the extraction collaborator, so a caller
    /// can plausibly obtain a different value by re-running extraction.
    pub fn concerns_competitor_price(&self) -> bool {
        matches!(
            self,
            ValidationError::NonPositivePrice { .. }
                | ValidationError::CostNotBelowPrice { .. }
                | ValidationError::NonFinite { field: "competitorPrice", .. }
        )
    }
}

/// Failure of a composed computation (e.g. profit → monthly profit → ROI).
///
/// Carries a human-readable message, optional details, a retry hint, and
/// the originating [`ValidationError`] when one caused the failure.
///
/// # Examples
/// ```
/// use compete_core::types::{CalculationError, ValidationError};
///
/// let cause = ValidationError::NonPositivePrice { price: 0.0 };
/// let err = CalculationError::from_validation("Complete profit analysis failed", cause);
/// assert!(err.retryable);
/// assert!(err.details.as_deref().unwrap().contains("greater than 0"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{message}")]
pub struct CalculationError {
    /// Human-readable summary
    pub message: String,
    /// Optional detail line (usually the underlying validation message)
    pub details: Option<String>,
    /// Whether different upstream data could make a retry succeed
    pub retryable: bool,
    /// Underlying validation failure, if any
    pub source: Option<ValidationError>,
}

impl CalculationError {
    /// Create a non-retryable calculation error with no details.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
            retryable: false,
            source: None,
        }
    }

    /// Attach a detail line.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Wrap a validation failure raised inside a composed computation.
    pub fn from_validation(message: impl Into<String>, cause: ValidationError) -> Self {
        Self {
            message: message.into(),
            details: Some(cause.to_string()),
            retryable: cause.concerns_competitor_price(),
            source: Some(cause),
        }
    }
}

/// Error returned by end-to-end analysis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Input precondition failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Composed computation failed.
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),
}

impl AnalysisError {
    /// Stable error kind tag surfaced to callers.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Validation(_) => "VALIDATION_ERROR",
            AnalysisError::Calculation(_) => "CALCULATION_ERROR",
        }
    }

    /// Whether a retry action makes sense.
    pub fn is_retryable(&self) -> bool {
        match self {
            AnalysisError::Validation(err) => err.is_retryable(),
            AnalysisError::Calculation(err) => err.retryable,
        }
    }

    /// Detail line, if the error carries one.
    pub fn details(&self) -> Option<String> {
        match self {
            AnalysisError::Validation(_) => None,
            AnalysisError::Calculation(err) => err.details.clone(),
        }
    }
}

/// Currency-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

/// Role-view parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoleError {
    /// Unknown role tag.
    #[error("Unknown role view: {0}. Must be one of: retail, manufacturing")]
    UnknownRole(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_validation_error_fields() {
        assert_eq!(
            ValidationError::NonPositivePrice { price: 0.0 }.field(),
            "price"
        );
        assert_eq!(ValidationError::NegativeCost { cost: -1.0 }.field(), "cost");
        assert_eq!(
            ValidationError::NegativeInvestment { investment: -5.0 }.field(),
            "fixedInvestment"
        );
        assert_eq!(
            ValidationError::OutOfRange {
                field: "weight",
                value: 0.0,
                min: 0.1,
                max: 50_000.0
            }
            .field(),
            "weight"
        );
    }

    #[test]
    fn test_validation_error_never_retryable() {
        let errors = [
            ValidationError::NonPositivePrice { price: -1.0 },
            ValidationError::CostNotBelowPrice {
                cost: 10.0,
                price: 5.0,
            },
            ValidationError::NonPositiveMonthlySales { sales: 0.0 },
        ];
        assert!(errors.iter().all(|e| !e.is_retryable()));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::NegativeCost { cost: -10.0 };
        assert_eq!(format!("{}", err), "Cost cannot be negative, got -10");

        let err = ValidationError::NonFinite {
            field: "competitorPrice",
            value: f64::NAN,
        };
        assert!(format!("{}", err).contains("finite"));
    }

    #[test]
    fn test_calculation_error_from_product_side_is_not_retryable() {
        let cause = ValidationError::NonPositiveMonthlySales { sales: 0.0 };
        let err = CalculationError::from_validation("Complete profit analysis failed", cause);
        assert!(!err.retryable);
        assert_eq!(format!("{}", err), "Complete profit analysis failed");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_calculation_error_from_competitor_price_is_retryable() {
        let cause = ValidationError::CostNotBelowPrice {
            cost: 60.0,
            price: 50.0,
        };
        let err = CalculationError::from_validation("Complete profit analysis failed", cause);
        assert!(err.retryable);
    }

    #[test]
    fn test_calculation_error_builder() {
        let err = CalculationError::new("Radar scoring failed").with_details("roiMonths is NaN");
        assert_eq!(err.details.as_deref(), Some("roiMonths is NaN"));
        assert!(!err.retryable);
        assert!(err.source.is_none());
    }

    #[test]
    fn test_analysis_error_kind_and_retry() {
        let err: AnalysisError = ValidationError::NegativeCost { cost: -1.0 }.into();
        assert_eq!(err.kind(), "VALIDATION_ERROR");
        assert!(!err.is_retryable());
        assert!(err.details().is_none());

        let err: AnalysisError = CalculationError::from_validation(
            "failed",
            ValidationError::NonPositivePrice { price: 0.0 },
        )
        .into();
        assert_eq!(err.kind(), "CALCULATION_ERROR");
        assert!(err.is_retryable());
        assert!(err.details().is_some());
    }

    #[test]
    fn test_validation_error_serialises_with_constraint_tag() {
        let err = ValidationError::NonPositivePrice { price: 0.0 };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"constraint\":\"non_positive_price\""));
    }

    #[test]
    fn test_role_error_display() {
        let err = RoleError::UnknownRole("wholesale".to_string());
        assert!(err.to_string().contains("retail, manufacturing"));
    }
}
