//! Analyze command implementation
//!
//! Runs the full analysis of the scenario's product against every
//! competitor in the file.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use compete_core::format::{format_currency, format_percentage, format_time_period};
use compete_core::types::{AnalysisError, RoleView};
use compete_engine::cache::DEFAULT_MAX_AGE;
use compete_engine::{best_match, AnalysisCache, AnalysisResult, CacheStats};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::{CliConfig, OutputFormat};
use crate::input::ScenarioFile;
use crate::{CliError, Result};

/// One competitor's outcome in JSON output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompetitorOutcome<'a> {
    index: usize,
    competitor_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<&'a AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeOutput<'a> {
    session_id: String,
    product: &'a str,
    role: RoleView,
    best_match: Option<usize>,
    results: Vec<CompetitorOutcome<'a>>,
    cache: CacheStats,
}

/// Run the analyze command
///
/// Fails only when every competitor fails; partial failures are reported
/// inline.
pub fn run(
    scenario: &ScenarioFile,
    role: RoleView,
    format: OutputFormat,
    config: &CliConfig,
    out: &mut impl Write,
) -> Result<()> {
    run_with_max_age(scenario, role, format, config, DEFAULT_MAX_AGE, out)
}

fn run_with_max_age(
    scenario: &ScenarioFile,
    role: RoleView,
    format: OutputFormat,
    config: &CliConfig,
    max_age: Duration,
    out: &mut impl Write,
) -> Result<()> {
    if format == OutputFormat::Csv {
        return Err(CliError::InvalidArgument(
            "analyze supports table and json output".to_string(),
        ));
    }

    let product = &scenario.product;
    let competitors = scenario.competitors();
    let session_id = Uuid::new_v4().to_string();
    info!(
        session = %session_id,
        product = %product.display_name(),
        competitors = competitors.len(),
        role = %role,
        "Running analysis"
    );

    let cache = AnalysisCache::with_limits(config.cache_capacity, max_age);
    let results = cache.get_or_analyze_many(product, &competitors, Some(role));

    for (index, result) in results.iter().enumerate() {
        if let Err(e) = result {
            warn!(competitor = index + 1, error = %e, "Analysis failed");
        }
    }

    let best = best_match(&results);
    match format {
        OutputFormat::Json => {
            let output = AnalyzeOutput {
                session_id,
                product: product.display_name(),
                role,
                best_match: best,
                results: results
                    .iter()
                    .zip(&competitors)
                    .enumerate()
                    .map(|(index, (result, competitor))| CompetitorOutcome {
                        index,
                        competitor_price: competitor.price,
                        analysis: result.as_ref().ok().map(Arc::as_ref),
                        error: result.as_ref().err().map(ToString::to_string),
                    })
                    .collect(),
                cache: cache.stats(),
            };
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
        _ => write_table(&results, best, config, out)?,
    }

    first_error_if_all_failed(results)
}

fn write_table(
    results: &[std::result::Result<Arc<AnalysisResult>, AnalysisError>],
    best: Option<usize>,
    config: &CliConfig,
    out: &mut impl Write,
) -> Result<()> {
    let currency = config.currency;
    for (index, result) in results.iter().enumerate() {
        let marker = if best == Some(index) { " (best match)" } else { "" };
        writeln!(out, "=== Competitor {}{} ===", index + 1, marker)?;

        let result = match result {
            Ok(result) => result,
            Err(e) => {
                writeln!(out, "Analysis failed: {}", e)?;
                writeln!(out)?;
                continue;
            }
        };

        let profit = &result.profit_analysis;
        writeln!(out, "{:<22}{}", "Unit margin", format_currency(profit.margin, currency))?;
        writeln!(out, "{:<22}{}", "Margin rate", format_percentage(profit.margin_rate, 1))?;
        writeln!(out, "{:<22}{}", "Payback", format_time_period(profit.roi_months))?;
        writeln!(out, "{:<22}{}", "Risk", result.risk.level)?;

        writeln!(out)?;
        writeln!(out, "{:<22}{:>6}", "Dimension", "Score")?;
        for (dimension, score) in result.radar_scores.entries() {
            writeln!(out, "{:<22}{:>6.1}", dimension.label(), score)?;
        }
        writeln!(out, "{:<22}{:>6.1}", "Average", result.radar_scores.average())?;

        let pricing = &result.pricing;
        writeln!(out)?;
        writeln!(
            out,
            "{:<22}{} ({})",
            "Recommended price",
            format_currency(pricing.recommended_price, currency),
            pricing.description
        )?;
        writeln!(
            out,
            "{:<22}{} - {}",
            "Price range",
            format_currency(pricing.price_range.min, currency),
            format_currency(pricing.price_range.max, currency)
        )?;
        if !pricing.feasible {
            writeln!(out, "Warning: the margin floor is above the competitive ceiling")?;
        }
        if let Some(break_even) = &result.break_even {
            writeln!(
                out,
                "{:<22}{} units ({})",
                "Break-even",
                break_even.break_even_units,
                format_time_period(break_even.break_even_months)
            )?;
        }
        writeln!(
            out,
            "{:<22}{} ({:.1})",
            "Market opportunity", result.market_opportunity.level, result.market_opportunity.score
        )?;

        let insights = result.display_insights();
        for (title, lines) in [
            ("Advantages", &insights.advantages),
            ("Risks", &insights.risks),
            ("Recommendations", &insights.recommendations),
        ] {
            if lines.is_empty() {
                continue;
            }
            writeln!(out)?;
            writeln!(out, "{}:", title)?;
            for line in lines {
                writeln!(out, "  - {}", line)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn first_error_if_all_failed(
    results: Vec<std::result::Result<Arc<AnalysisResult>, AnalysisError>>,
) -> Result<()> {
    if results.iter().any(|r| r.is_ok()) {
        return Ok(());
    }
    match results.into_iter().find_map(|r| r.err()) {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compete_core::types::{CompetitorSpec, Dimensions, ProductSpec};

    fn scenario(prices: &[f64]) -> ScenarioFile {
        ScenarioFile {
            product: ProductSpec::new(
                60.0,
                200.0,
                Dimensions::new(10.0, 5.0, 2.0),
                12_000.0,
                25.0,
                vec!["waterproof".to_string()],
            )
            .with_id("p-1")
            .with_name("Trail bottle"),
            competitor: None,
            competitors: prices
                .iter()
                .map(|&p| CompetitorSpec::new(p, vec!["waterproof".to_string()]))
                .collect(),
        }
    }

    fn render(scenario: &ScenarioFile, format: OutputFormat) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = run(scenario, RoleView::Retail, format, &CliConfig::default(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_table_output() {
        let (result, text) = render(&scenario(&[100.0]), OutputFormat::Table);
        assert!(result.is_ok());
        assert!(text.contains("=== Competitor 1 (best match) ==="));
        assert!(text.contains("$40.00"));
        assert!(text.contains("$85.72"));
        assert!(text.contains("Recommendations:"));
    }

    #[test]
    fn test_json_output() {
        let (result, text) = render(&scenario(&[100.0, 50.0]), OutputFormat::Json);
        assert!(result.is_ok());
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["product"], "Trail bottle");
        assert_eq!(json["role"], "retail");
        assert_eq!(json["bestMatch"], 0);
        assert_eq!(json["results"][0]["analysis"]["profitAnalysis"]["margin"], 40.0);
        assert!(json["results"][1]["error"].is_string());
        assert_eq!(json["cache"]["misses"], 2);
        assert_eq!(json["sessionId"].as_str().unwrap().len(), 36);
    }

    #[test]
    fn test_all_failures_is_an_error() {
        let (result, text) = render(&scenario(&[50.0]), OutputFormat::Table);
        assert!(matches!(result, Err(CliError::Analysis(_))));
        assert!(text.contains("Analysis failed"));
    }

    #[test]
    fn test_csv_rejected() {
        let (result, _) = render(&scenario(&[100.0]), OutputFormat::Csv);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_max_age_still_analyses() {
        let mut out = Vec::new();
        run_with_max_age(
            &scenario(&[100.0, 100.0]),
            RoleView::Manufacturing,
            OutputFormat::Table,
            &CliConfig::default(),
            Duration::ZERO,
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("=== Competitor").count(), 2);
    }
}
