//! One-factor-at-a-time sensitivity analysis.
//!
//! This module provides infrastructure for:
//! - Perturbation axes and grids (cost, price, sales volume)
//! - Table execution around a base scenario
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            Sensitivity Analyzer               │
//! ├──────────────────────────────────────────────┤
//! │  SensitivityAxis     - perturbed input       │
//! │  SensitivityConfig   - perturbation grids    │
//! │  SensitivityTable    - ordered responses     │
//! │  SensitivityAnalysis - three tables + base   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Cost and price tables report the margin change relative to the base
//! margin. The sales table reports the payback change with a shorter
//! payback counted as a positive improvement. All impacts are rounded to
//! one decimal.

mod engine;
mod shifts;

pub use engine::{
    perform_sensitivity_analysis, perform_sensitivity_analysis_with, SensitivityAnalysis,
    SensitivityPoint, SensitivityTable,
};
pub use shifts::{
    SensitivityAxis, SensitivityConfig, DEFAULT_COST_CHANGES, DEFAULT_PRICE_CHANGES,
    DEFAULT_SALES_CHANGES,
};
