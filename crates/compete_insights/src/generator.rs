//! Threshold-driven insight text.
//!
//! Each radar dimension lands in one of three bands. Scores at or above
//! [`STRONG_ADVANTAGE_SCORE`] produce a strong advantage line, scores at or
//! above [`MODERATE_ADVANTAGE_SCORE`] a moderate one, and anything lower a
//! risk line. Lines quote the raw numbers behind the score so the text and
//! the radar never disagree.

use compete_core::math::round1;
use compete_core::types::{CompetitorSpec, ProductSpec};
use compete_metrics::profit::ProfitAnalysis;
use compete_metrics::radar::{RadarDimension, RadarScores};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Score at or above which a dimension is a strong advantage.
pub const STRONG_ADVANTAGE_SCORE: f64 = 8.0;
/// Score at or above which a dimension is a moderate advantage.
pub const MODERATE_ADVANTAGE_SCORE: f64 = 6.0;
/// Margin rate below which cost optimisation is recommended.
pub const COST_OPTIMISATION_MARGIN_RATE: f64 = 0.3;
/// Payback above which a phased investment is recommended.
pub const PHASED_INVESTMENT_ROI_MONTHS: f64 = 12.0;

/// Advantages, risks and recommendations in plain language.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInsights {
    /// Dimensions working in the product's favour
    pub advantages: Vec<String>,
    /// Dimensions working against it
    pub risks: Vec<String>,
    /// Suggested actions, ending with the overall strategic line
    pub recommendations: Vec<String>,
}

impl AnalysisInsights {
    /// Total number of lines.
    pub fn len(&self) -> usize {
        self.advantages.len() + self.risks.len() + self.recommendations.len()
    }

    /// Whether there are no lines at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

enum Band {
    Strong,
    Moderate,
    Risk,
}

impl Band {
    fn of(score: f64) -> Self {
        if score >= STRONG_ADVANTAGE_SCORE {
            Band::Strong
        } else if score >= MODERATE_ADVANTAGE_SCORE {
            Band::Moderate
        } else {
            Band::Risk
        }
    }
}

/// Line for one dimension, `Ok` for an advantage and `Err` for a risk.
fn dimension_line(
    dimension: RadarDimension,
    score: f64,
    profit: &ProfitAnalysis,
    product: &ProductSpec,
    competitor: &CompetitorSpec,
) -> Result<String, String> {
    let rate = profit.margin_rate * 100.0;
    let months = profit.roi_months;
    let features = product.feature_count();
    let price = competitor.price;

    match (dimension, Band::of(score)) {
        (RadarDimension::Profitability, Band::Strong) => Ok(format!(
            "Strong profit position: the margin rate reaches {:.1}%, well above the industry average",
            rate
        )),
        (RadarDimension::Profitability, Band::Moderate) => Ok(format!(
            "Solid profit position: the margin rate is {:.1}%, which gives a competitive edge",
            rate
        )),
        (RadarDimension::Profitability, Band::Risk) => Err(format!(
            "Thin profit position: the margin rate is only {:.1}%, so the cost structure or pricing needs work",
            rate
        )),

        (RadarDimension::RoiSpeed, Band::Strong) => Ok(format!(
            "Very fast payback: the investment is recovered in about {:.1} months with low risk",
            months
        )),
        (RadarDimension::RoiSpeed, Band::Moderate) => Ok(format!(
            "Reasonable payback of about {:.1} months, in line with industry expectations",
            months
        )),
        (RadarDimension::RoiSpeed, Band::Risk) => Err(format!(
            "Long payback: {:.1} months are needed to recover the investment, which carries investment risk",
            months
        )),

        (RadarDimension::Portability, Band::Strong) => Ok(
            "Excellent portability with clear weight and size advantages, well suited to mobile use"
                .to_string(),
        ),
        (RadarDimension::Portability, Band::Moderate) => {
            Ok("Good portability with an edge over similar products".to_string())
        }
        (RadarDimension::Portability, Band::Risk) => Err(
            "Portability needs improvement: the product is heavier or bulkier than the competitor"
                .to_string(),
        ),

        (RadarDimension::Features, Band::Strong) => Ok(format!(
            "Rich feature set: {} core features cover diverse user needs",
            features
        )),
        (RadarDimension::Features, Band::Moderate) => Ok(format!(
            "Reasonable feature set: {} main features cover the basic user needs",
            features
        )),
        (RadarDimension::Features, Band::Risk) => Err(format!(
            "Limited feature set: only {} features, which may not cover all user needs",
            features
        )),

        (RadarDimension::PriceAdvantage, Band::Strong) => Ok(format!(
            "Ample room for pricing: the competitor sells at {}, a solid reference point for our own",
            price
        )),
        (RadarDimension::PriceAdvantage, Band::Moderate) => {
            Ok("Moderate price competitiveness with some room for market pricing".to_string())
        }
        (RadarDimension::PriceAdvantage, Band::Risk) => Err(format!(
            "Intense price competition: the competitor sells at {}, so cost control is essential",
            price
        )),
    }
}

fn overall_recommendation(average: f64) -> &'static str {
    if average >= STRONG_ADVANTAGE_SCORE {
        "Strong overall competitiveness: speed up the go-to-market push and get ahead of rivals"
    } else if average >= MODERATE_ADVANTAGE_SCORE {
        "Basic competitiveness in place: reinforce the strongest dimensions and close the gaps"
    } else {
        "Competitiveness needs work: reconsider the product positioning and market strategy"
    }
}

/// Turn scores and raw figures into advantages, risks and recommendations.
///
/// Advantages and risks follow the canonical dimension order. Targeted
/// recommendations come first (cost, payback, features, portability), then
/// exactly one overall line chosen by the average score.
///
/// # Examples
///
/// ```
/// use compete_core::types::{CompetitorSpec, Dimensions, ProductSpec};
/// use compete_insights::generator::generate_intelligent_insights;
/// use compete_metrics::profit::ProfitAnalysis;
/// use compete_metrics::radar::RadarScores;
///
/// let product = ProductSpec::new(
///     60.0, 200.0, Dimensions::new(10.0, 5.0, 2.0), 12_000.0, 25.0,
///     vec!["waterproof".into()],
/// );
/// let competitor = CompetitorSpec::new(100.0, vec![]);
/// let insights = generate_intelligent_insights(
///     &RadarScores::new(8.0, 1.0, 5.0, 10.0, 10.0),
///     &ProfitAnalysis::new(40.0, 0.4, 12.0),
///     &product,
///     &competitor,
/// );
///
/// assert!(insights.advantages[0].contains("40.0%"));
/// assert_eq!(insights.risks.len(), 2);
/// ```
pub fn generate_intelligent_insights(
    scores: &RadarScores,
    profit: &ProfitAnalysis,
    product: &ProductSpec,
    competitor: &CompetitorSpec,
) -> AnalysisInsights {
    let mut insights = AnalysisInsights::default();

    for (dimension, score) in scores.entries() {
        match dimension_line(dimension, score, profit, product, competitor) {
            Ok(advantage) => insights.advantages.push(advantage),
            Err(risk) => insights.risks.push(risk),
        }
    }

    let recommendations = &mut insights.recommendations;
    if profit.margin_rate < COST_OPTIMISATION_MARGIN_RATE {
        recommendations.push(
            "Prioritise cost optimisation through supply chain consolidation and process improvements"
                .to_string(),
        );
    }
    if profit.roi_months > PHASED_INVESTMENT_ROI_MONTHS {
        recommendations.push(
            "Phase the investment: start small and scale up as market feedback comes in".to_string(),
        );
    }
    if scores.features < MODERATE_ADVANTAGE_SCORE {
        recommendations.push(
            "Strengthen the feature set with differentiated capabilities that raise user value"
                .to_string(),
        );
    }
    if scores.portability < MODERATE_ADVANTAGE_SCORE {
        recommendations.push(
            "Refine the design to cut weight and volume without giving up functionality".to_string(),
        );
    }

    let average = scores.average();
    recommendations.push(overall_recommendation(average).to_string());

    debug!(
        average = round1(average),
        advantages = insights.advantages.len(),
        risks = insights.risks.len(),
        "generated insights"
    );

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use compete_core::types::Dimensions;

    fn product(features: usize) -> ProductSpec {
        ProductSpec::new(
            60.0,
            200.0,
            Dimensions::new(10.0, 5.0, 2.0),
            12_000.0,
            25.0,
            (0..features).map(|i| format!("feature {}", i)).collect(),
        )
    }

    fn competitor() -> CompetitorSpec {
        CompetitorSpec::new(100.0, vec![])
    }

    #[test]
    fn test_each_dimension_lands_in_exactly_one_list() {
        for score in [0.0, 5.9, 6.0, 7.9, 8.0, 10.0] {
            let scores = RadarScores::new(score, score, score, score, score);
            let insights = generate_intelligent_insights(
                &scores,
                &ProfitAnalysis::new(40.0, 0.4, 12.0),
                &product(3),
                &competitor(),
            );
            assert_eq!(insights.advantages.len() + insights.risks.len(), 5);
        }
    }

    #[test]
    fn test_lines_quote_raw_numbers() {
        let insights = generate_intelligent_insights(
            &RadarScores::new(2.0, 3.0, 7.0, 4.0, 2.0),
            &ProfitAnalysis::new(12.5, 0.125, 18.25),
            &product(2),
            &CompetitorSpec::new(10.0, vec![]),
        );
        assert!(insights.risks[0].contains("12.5%"));
        assert!(insights.risks[1].contains("18.2 months") || insights.risks[1].contains("18.3 months"));
        assert!(insights.risks[2].contains("only 2 features"));
        assert!(insights.risks[3].contains("sells at 10,"));
        assert_eq!(insights.advantages.len(), 1);
        assert!(insights.advantages[0].starts_with("Good portability"));
    }

    #[test]
    fn test_targeted_recommendations_in_order() {
        let insights = generate_intelligent_insights(
            &RadarScores::new(2.0, 3.0, 5.0, 4.0, 2.0),
            &ProfitAnalysis::new(10.0, 0.1, 30.0),
            &product(1),
            &competitor(),
        );
        let recs = &insights.recommendations;
        assert_eq!(recs.len(), 5);
        assert!(recs[0].contains("cost optimisation"));
        assert!(recs[1].starts_with("Phase the investment"));
        assert!(recs[2].contains("feature set"));
        assert!(recs[3].contains("weight and volume"));
        assert!(recs[4].starts_with("Competitiveness needs work"));
    }

    #[test]
    fn test_overall_recommendation_bands() {
        assert!(overall_recommendation(8.0).starts_with("Strong overall"));
        assert!(overall_recommendation(7.99).starts_with("Basic competitiveness"));
        assert!(overall_recommendation(6.0).starts_with("Basic competitiveness"));
        assert!(overall_recommendation(5.99).starts_with("Competitiveness needs work"));
    }

    #[test]
    fn test_healthy_product_gets_single_recommendation() {
        let insights = generate_intelligent_insights(
            &RadarScores::new(9.0, 10.0, 8.0, 10.0, 10.0),
            &ProfitAnalysis::new(45.0, 0.45, 1.2),
            &product(5),
            &competitor(),
        );
        assert!(insights.risks.is_empty());
        assert_eq!(insights.recommendations.len(), 1);
        assert_eq!(insights.len(), 6);
    }
}
