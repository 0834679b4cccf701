//! Market opportunity from the average radar score.

use std::fmt;

use compete_core::math::round1;
use compete_metrics::radar::{RadarDimension, RadarScores};
use serde::{Deserialize, Serialize};

/// Average score at or above which the opportunity is high.
pub const HIGH_OPPORTUNITY_SCORE: f64 = 8.0;
/// Average score at or above which the opportunity is medium.
pub const MEDIUM_OPPORTUNITY_SCORE: f64 = 6.0;
/// Dimension score at or above which a success factor is positive.
pub const SUCCESS_FACTOR_SCORE: f64 = 7.0;

/// Opportunity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityLevel {
    /// Strong competitiveness, broad prospects
    High,
    /// Basic competitiveness, needs precise positioning
    Medium,
    /// Fierce competition, strategy needs rethinking
    Low,
}

impl OpportunityLevel {
    /// Classify an average radar score.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_OPPORTUNITY_SCORE {
            OpportunityLevel::High
        } else if score >= MEDIUM_OPPORTUNITY_SCORE {
            OpportunityLevel::Medium
        } else {
            OpportunityLevel::Low
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            OpportunityLevel::High => "High-opportunity market",
            OpportunityLevel::Medium => "Medium-opportunity market",
            OpportunityLevel::Low => "Challenging market",
        }
    }
}

impl fmt::Display for OpportunityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Market opportunity assessment.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOpportunity {
    /// Tier
    pub level: OpportunityLevel,
    /// Average radar score, one decimal
    pub score: f64,
    /// One-line description
    pub description: String,
    /// One line per radar dimension, positive or cautionary
    pub success_factors: Vec<String>,
    /// Market recommendations for the tier
    pub recommendations: Vec<String>,
}

fn success_factor(dimension: RadarDimension, score: f64) -> String {
    let (positive, caution) = match dimension {
        RadarDimension::Profitability => (
            "Ample margin to fund market entry",
            "Limited margin, keep costs under control",
        ),
        RadarDimension::RoiSpeed => (
            "Fast payback keeps investment risk contained",
            "Long payback, invest cautiously",
        ),
        RadarDimension::Portability => (
            "Clear portability advantage, easy to promote",
            "Portability needs improvement",
        ),
        RadarDimension::Features => (
            "Rich feature set with high user value",
            "Feature set is thin, strengthen the value proposition",
        ),
        RadarDimension::PriceAdvantage => (
            "Ample pricing headroom allows flexible strategy",
            "Price competition is intense, position precisely",
        ),
    };
    if score >= SUCCESS_FACTOR_SCORE {
        format!("✅ {}", positive)
    } else {
        format!("⚠️ {}", caution)
    }
}

/// Assess the market opportunity from the radar scores.
///
/// # Examples
///
/// ```
/// use compete_metrics::radar::RadarScores;
/// use compete_strategy::opportunity::{assess_market_opportunity, OpportunityLevel};
///
/// let opportunity = assess_market_opportunity(&RadarScores::new(9.0, 8.0, 7.0, 8.0, 9.0));
/// assert_eq!(opportunity.level, OpportunityLevel::High);
/// assert_eq!(opportunity.score, 8.2);
/// assert_eq!(opportunity.success_factors.len(), 5);
/// ```
pub fn assess_market_opportunity(scores: &RadarScores) -> MarketOpportunity {
    let average = scores.average();
    let level = OpportunityLevel::from_score(average);

    let (description, recommendations): (&str, [&str; 4]) = match level {
        OpportunityLevel::High => (
            "High-opportunity market: the product is strongly competitive with broad prospects",
            [
                "Enter the market quickly to secure a first-mover advantage",
                "Increase marketing investment to build brand awareness",
                "Consider a multi-channel launch to widen market coverage",
                "Build a user community to cultivate brand loyalty",
            ],
        ),
        OpportunityLevel::Medium => (
            "Medium-opportunity market: the product is competitive but needs precise positioning",
            [
                "Advance steadily and reinforce the strongest dimensions",
                "Target a niche segment to avoid head-on competition",
                "Keep refining the product to improve user experience",
                "Build a differentiated competitive advantage",
            ],
        ),
        OpportunityLevel::Low => (
            "Challenging market: competition is fierce and the strategy needs re-evaluation",
            [
                "Re-evaluate product positioning and the target market",
                "Look for blue-ocean markets or niche opportunities",
                "Consider a product redesign or feature upgrade",
                "Assess whether a strategic partnership or technology licence is needed",
            ],
        ),
    };

    MarketOpportunity {
        level,
        score: round1(average),
        description: description.to_string(),
        success_factors: scores
            .entries()
            .iter()
            .map(|&(dimension, score)| success_factor(dimension, score))
            .collect(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
    }
}
