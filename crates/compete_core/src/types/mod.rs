//! Input value objects and error types.
//!
//! This module provides:
//! - `product`: the user's own product (`ProductSpec`, `Dimensions`)
//! - `competitor`: extracted competitor data (`CompetitorSpec`, `ExtractionConfidence`)
//! - `role`: audience lens for narrative output (`RoleView`)
//! - `currency`: display currencies
//! - `error`: validation and calculation error taxonomy
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level.

pub mod competitor;
pub mod currency;
pub mod error;
pub mod product;
pub mod role;

pub use competitor::{ConfidenceLevel, CompetitorSpec, ExtractionConfidence};
pub use currency::Currency;
pub use error::{AnalysisError, CalculationError, CurrencyError, RoleError, ValidationError};
pub use product::{Dimensions, ProductSpec};
pub use role::RoleView;
