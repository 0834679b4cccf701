//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! output to the given writer and log progress through `tracing`.

pub mod analyze;
pub mod check;
pub mod report;
pub mod sensitivity;
