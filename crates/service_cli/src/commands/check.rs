//! Check command implementation
//!
//! Validates a scenario without running the analysis.

use std::io::Write;

use compete_core::format::format_percentage;
use compete_core::types::competitor::MEDIUM_CONFIDENCE_THRESHOLD;
use compete_core::types::ValidationError;
use compete_core::validation::{validate_competitor, validate_price_and_cost, validate_product};
use tracing::{info, warn};

use crate::input::ScenarioFile;
use crate::Result;

/// Run the check command
///
/// Every problem is listed; the first one is returned as the error.
pub fn run(scenario: &ScenarioFile, out: &mut impl Write) -> Result<()> {
    info!("Checking scenario...");
    let mut first_error: Option<ValidationError> = None;

    match validate_product(&scenario.product) {
        Ok(()) => writeln!(out, "[ok]   Product {}", scenario.product.display_name())?,
        Err(e) => {
            writeln!(out, "[fail] Product {}: {}", scenario.product.display_name(), e)?;
            first_error.get_or_insert(e);
        }
    }

    for (index, competitor) in scenario.competitors().iter().enumerate() {
        let number = index + 1;
        let checked = validate_competitor(competitor)
            .and_then(|()| validate_price_and_cost(competitor.price, scenario.product.cost));
        match checked {
            Ok(()) => writeln!(out, "[ok]   Competitor {} at {:.2}", number, competitor.price)?,
            Err(e) => {
                writeln!(out, "[fail] Competitor {}: {}", number, e)?;
                first_error.get_or_insert(e);
                continue;
            }
        }

        let confidence = &competitor.extraction_confidence;
        let uncertain = confidence.low_confidence_fields(MEDIUM_CONFIDENCE_THRESHOLD);
        if !uncertain.is_empty() {
            warn!(competitor = number, fields = ?uncertain, "Low extraction confidence");
            writeln!(
                out,
                "[warn] Competitor {}: {} extraction confidence ({}), confirm {}",
                number,
                confidence.quality().label(),
                format_percentage(confidence.average(), 0),
                uncertain.join(", ")
            )?;
        }
    }

    match first_error {
        Some(e) => Err(e.into()),
        None => {
            info!("Scenario is valid");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use compete_core::types::{CompetitorSpec, Dimensions, ExtractionConfidence, ProductSpec};

    fn scenario(competitors: Vec<CompetitorSpec>) -> ScenarioFile {
        ScenarioFile {
            product: ProductSpec::new(
                60.0,
                200.0,
                Dimensions::new(10.0, 5.0, 2.0),
                12_000.0,
                25.0,
                vec!["waterproof".to_string()],
            )
            .with_name("Trail bottle"),
            competitor: None,
            competitors,
        }
    }

    fn render(scenario: &ScenarioFile) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = run(scenario, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_valid_scenario() {
        let (result, text) = render(&scenario(vec![CompetitorSpec::new(100.0, vec![])]));
        assert!(result.is_ok());
        assert!(text.contains("[ok]   Product Trail bottle"));
        assert!(text.contains("[ok]   Competitor 1 at 100.00"));
        assert!(!text.contains("[warn]"));
    }

    #[test]
    fn test_low_confidence_is_a_warning() {
        let competitor = CompetitorSpec::new(100.0, vec![])
            .with_confidence(ExtractionConfidence::new(0.9, 0.3, 0.4, 0.9));
        let (result, text) = render(&scenario(vec![competitor]));
        assert!(result.is_ok());
        assert!(text.contains("confirm weight, dimensions"));
    }

    #[test]
    fn test_lists_every_failure() {
        let (result, text) = render(&scenario(vec![
            CompetitorSpec::new(50.0, vec![]),
            CompetitorSpec::new(100.0, vec![]),
            CompetitorSpec::new(-1.0, vec![]),
        ]));
        assert!(matches!(
            result,
            Err(CliError::Validation(ValidationError::CostNotBelowPrice { .. }))
        ));
        assert!(text.contains("[fail] Competitor 1"));
        assert!(text.contains("[ok]   Competitor 2"));
        assert!(text.contains("[fail] Competitor 3"));
    }
}
