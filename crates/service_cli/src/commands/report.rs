//! Report command implementation
//!
//! Renders the Markdown report for the scenario's first competitor.

use std::io::Write;
use std::path::Path;

use compete_core::types::RoleView;
use compete_engine::{analyze, generate_complete_report_with, ReportConfig};
use tracing::info;

use crate::config::CliConfig;
use crate::input::ScenarioFile;
use crate::{CliError, Result};

/// Run the report command
///
/// Writes the report to `output` when given, otherwise to `out`.
pub fn run(
    scenario: &ScenarioFile,
    role: RoleView,
    config: &CliConfig,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let competitor = scenario.primary_competitor().ok_or_else(|| {
        CliError::InvalidArgument("scenario has no competitor to report on".to_string())
    })?;
    let skipped = scenario.competitors().len().saturating_sub(1);
    if skipped > 0 {
        info!(skipped, "Report covers the first competitor only");
    }

    info!(product = %scenario.product.display_name(), role = %role, "Generating report...");
    let result = analyze(&scenario.product, competitor, Some(role))?;
    let report_config = ReportConfig {
        currency: config.currency,
        ..ReportConfig::default()
    };
    let report =
        generate_complete_report_with(&result, &scenario.product, competitor, role, &report_config);

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &report.full_report)?;
            info!(path = %path.display(), "Report written");
        }
        None => writeln!(out, "{}", report.full_report)?,
    }

    Ok(())
}
