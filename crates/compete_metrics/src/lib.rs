//! # compete_metrics (L2: Metrics)
//!
//! Financial and competitiveness metrics computed from validated inputs.
//!
//! This crate provides:
//! - Profit, monthly profit and ROI calculators (`profit`)
//! - The five-dimension radar scorer (`radar`)
//! - Break-even volume analysis (`break_even`)
//!
//! Every calculator returns a [`CalculationResult`](compete_core::explain::CalculationResult)
//! whose explanation records the formula and inputs used.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          compete_metrics (L2)           │
//! ├─────────────────────────────────────────┤
//! │  profit/      - margin, ROI, chaining   │
//! │  radar/       - five 0-10 scores        │
//! │  break_even/  - units and months        │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            compete_core (L1)            │
//! │  inputs, validation, error taxonomy     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use compete_core::types::{CompetitorSpec, Dimensions, ProductSpec};
//! use compete_metrics::profit::calculate_complete_profit_analysis;
//! use compete_metrics::radar::calculate_radar_scores;
//!
//! let product = ProductSpec::new(
//!     60.0, 200.0, Dimensions::new(10.0, 5.0, 2.0), 12_000.0, 25.0,
//!     vec!["waterproof".into()],
//! );
//! let competitor = CompetitorSpec::new(100.0, vec!["waterproof".into()]).with_weight(250.0);
//!
//! let profit = calculate_complete_profit_analysis(&product, competitor.price)?.result;
//! assert_eq!(profit.roi_months, 12.0);
//!
//! let scores = calculate_radar_scores(&product, &competitor, &profit)?.result;
//! assert!(scores.portability > 5.0);
//! # Ok::<(), compete_core::types::CalculationError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod break_even;
pub mod profit;
pub mod radar;

pub use break_even::{calculate_break_even_point, BreakEvenAnalysis};
pub use profit::{
    calculate_complete_profit_analysis, calculate_monthly_profit, calculate_profit, calculate_roi,
    ProfitAnalysis, ProfitResult,
};
pub use radar::{calculate_radar_scores, RadarDimension, RadarScores};
