//! # compete_strategy (L3: Strategy)
//!
//! Classification and advice built on top of the metrics layer.
//!
//! This crate provides:
//! - Profit risk tiers (`risk`)
//! - Price recommendation and strategy label (`pricing`)
//! - Cost, price, and sales sensitivity tables (`sensitivity`)
//! - Market opportunity assessment (`opportunity`)
//! - Strength/weakness breakdown (`competitiveness`)
//!
//! Every function here is pure. The only side effect is a `tracing`
//! warning when a price recommendation turns out to be infeasible.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          compete_strategy (L3)          │
//! ├─────────────────────────────────────────┤
//! │  risk/            - low/medium/high     │
//! │  pricing/         - floor, ceiling      │
//! │  sensitivity/     - ±% response tables  │
//! │  opportunity/     - market tier         │
//! │  competitiveness/ - strengths, gaps     │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │          compete_metrics (L2)           │
//! │  profit, ROI, radar scores              │
//! └─────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod competitiveness;
pub mod opportunity;
pub mod pricing;
pub mod risk;
pub mod sensitivity;

pub use competitiveness::{analyze_competitiveness, CompetitiveAnalysis, CompetitivenessLevel};
pub use opportunity::{assess_market_opportunity, MarketOpportunity, OpportunityLevel};
pub use pricing::{generate_pricing_recommendations, PriceRange, PricingStrategy, PricingStrategyKind};
pub use risk::{assess_profit_risk, RiskAssessment, RiskLevel};
pub use sensitivity::{perform_sensitivity_analysis, SensitivityAnalysis, SensitivityTable};
