//! # compete_core: Foundation for Competitive Analysis
//!
//! ## Layer 1 (Foundation) Role
//!
//! compete_core is the bottom layer of the analysis workspace, providing:
//! - Input value objects: `ProductSpec`, `CompetitorSpec`, `ExtractionConfidence` (`types`)
//! - The audience lens `RoleView` and display `Currency` (`types`)
//! - The error taxonomy: `ValidationError`, `CalculationError`, `AnalysisError` (`types::error`)
//! - Input guards run before any arithmetic (`validation`)
//! - Computation provenance: `Explanation`, `CalculationResult` (`explain`)
//! - Rounding and formatting helpers (`math`, `format`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other compete_* crates and only two
//! external ones:
//! - thiserror: error derives
//! - serde: serialisation of inputs, errors and explanations
//!
//! ## Usage Examples
//!
//! ```rust
//! use compete_core::types::{CompetitorSpec, Dimensions, ProductSpec};
//! use compete_core::validation::validate_scenario;
//!
//! let product = ProductSpec::new(
//!     60.0,
//!     200.0,
//!     Dimensions::new(10.0, 5.0, 2.0),
//!     12_000.0,
//!     25.0,
//!     vec!["waterproof".to_string()],
//! );
//! let competitor = CompetitorSpec::new(100.0, vec!["waterproof".to_string()]);
//!
//! assert!(validate_scenario(&product, &competitor).is_ok());
//! assert!(validate_scenario(&product, &competitor.with_price(50.0)).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod explain;
pub mod format;
pub mod math;
pub mod types;
pub mod validation;
