//! # compete_insights (L3: Narrative)
//!
//! Plain-language reading of the metrics and strategy layers.
//!
//! This crate provides:
//! - Threshold-driven advantages, risks and recommendations (`generator`)
//! - Role profiles, dimension priority, role hints and role rewrites (`role`)
//!
//! Everything here is a pure text transform over already-computed numbers.
//! No function in this crate changes a radar score or a profit figure.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          compete_insights (L3)          │
//! ├─────────────────────────────────────────┤
//! │  generator/  - scores → insight lines   │
//! │  role/       - retail / manufacturing   │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │          compete_metrics (L2)           │
//! │  profit, ROI, radar scores              │
//! └─────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod generator;
pub mod role;

pub use generator::{generate_intelligent_insights, AnalysisInsights};
pub use role::{
    dimension_priority, generate_role_specific_insights, role_analysis_hints, role_profile,
    weighted_score, DimensionPriority, RoleProfile,
};
