//! Command-line front end for the competitive analysis engine.
//!
//! # Commands
//!
//! - `compete analyze --input <file>` - analyse a product against its competitors
//! - `compete report --input <file>` - render the Markdown report
//! - `compete sensitivity --input <file>` - cost, price and sales sensitivity tables
//! - `compete check --input <file>` - validate a scenario file
//!
//! Configuration is layered: command-line flags override `COMPETE_*`
//! environment variables, which override the TOML config file, which
//! overrides the built-in defaults.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;

pub use error::{CliError, Result};
