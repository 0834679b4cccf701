//! # compete_engine (L4: Application)
//!
//! End-to-end competitive analysis built from the lower layers.
//!
//! This crate provides:
//! - The staged analysis pipeline and parallel batch analysis (`pipeline`)
//! - An LFU memoization cache for finished analyses (`cache`)
//! - Markdown report rendering (`report`)
//!
//! The pipeline itself performs no I/O. Callers decide where inputs come
//! from and where reports go.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           compete_engine (L4)           │
//! ├─────────────────────────────────────────┤
//! │  pipeline/  - analyze, analyze_many     │
//! │  cache/     - Arc-shared LFU memo       │
//! │  report/    - Markdown report           │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌───────────────────┬─────────────────────┐
//! │ compete_strategy  │  compete_insights   │
//! │ (L3)              │  (L3)               │
//! └───────────────────┴─────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │     compete_metrics (L2) / core (L1)    │
//! └─────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod cache;
pub mod pipeline;
pub mod report;

pub use cache::{AnalysisCache, AnalysisKey, CacheStats};
pub use pipeline::{analyze, analyze_many, analyze_with, best_match, AnalysisResult};
pub use report::{generate_complete_report, generate_complete_report_with, CompleteReport, ReportConfig};
