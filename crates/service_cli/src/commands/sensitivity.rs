//! Sensitivity command implementation
//!
//! Prints the cost, price and sales sensitivity tables for every
//! competitor in the scenario.

use std::io::Write;

use compete_core::validation::validate_scenario;
use compete_strategy::sensitivity::{perform_sensitivity_analysis, SensitivityAnalysis, SensitivityAxis};
use serde::Serialize;
use tracing::info;

use crate::config::OutputFormat;
use crate::input::ScenarioFile;
use crate::Result;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    competitor: usize,
    axis: SensitivityAxis,
    metric: &'static str,
    percent_change: f64,
    impact_percent: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonEntry<'a> {
    competitor: usize,
    competitor_price: f64,
    most_sensitive: SensitivityAxis,
    analysis: &'a SensitivityAnalysis,
}

/// Run the sensitivity command
pub fn run(scenario: &ScenarioFile, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let competitors = scenario.competitors();
    info!(competitors = competitors.len(), format = %format, "Running sensitivity analysis");

    let analyses = competitors
        .iter()
        .map(|competitor| -> Result<(f64, SensitivityAnalysis)> {
            validate_scenario(&scenario.product, competitor)?;
            Ok((
                competitor.price,
                perform_sensitivity_analysis(&scenario.product, competitor.price)?,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    match format {
        OutputFormat::Table => write_table(&analyses, out),
        OutputFormat::Csv => write_csv(&analyses, out),
        OutputFormat::Json => {
            let entries: Vec<JsonEntry<'_>> = analyses
                .iter()
                .enumerate()
                .map(|(index, (price, analysis))| JsonEntry {
                    competitor: index + 1,
                    competitor_price: *price,
                    most_sensitive: analysis.most_sensitive_axis(),
                    analysis,
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_table(analyses: &[(f64, SensitivityAnalysis)], out: &mut impl Write) -> Result<()> {
    for (index, (price, analysis)) in analyses.iter().enumerate() {
        writeln!(out, "=== Competitor {} (price {:.2}) ===", index + 1, price)?;
        writeln!(
            out,
            "Base margin {:.2}, base payback {:.1} months",
            analysis.base_margin, analysis.base_roi_months
        )?;
        for axis in SensitivityAxis::ALL {
            writeln!(out)?;
            writeln!(out, "{:<14}{:>16}", axis.name(), axis.metric())?;
            for point in &analysis.table(axis).points {
                writeln!(
                    out,
                    "{:>+13.0}%{:>+15.1}%",
                    point.percent_change, point.resulting_impact_percent
                )?;
            }
        }
        writeln!(out)?;
        writeln!(out, "Most sensitive to: {}", analysis.most_sensitive_axis().name())?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_csv(analyses: &[(f64, SensitivityAnalysis)], out: &mut impl Write) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for (index, (_, analysis)) in analyses.iter().enumerate() {
        for axis in SensitivityAxis::ALL {
            for point in &analysis.table(axis).points {
                writer.serialize(CsvRow {
                    competitor: index + 1,
                    axis,
                    metric: axis.metric(),
                    percent_change: point.percent_change,
                    impact_percent: point.resulting_impact_percent,
                })?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
