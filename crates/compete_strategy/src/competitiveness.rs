//! Strength and weakness breakdown of the radar.

use std::fmt;

use compete_core::math::round1;
use compete_metrics::radar::{RadarDimension, RadarScores};
use serde::{Deserialize, Serialize};

/// Dimension score at or above which the dimension is a strength.
pub const STRENGTH_SCORE: f64 = 7.0;
/// Dimension score below which the dimension is a weakness.
pub const WEAKNESS_SCORE: f64 = 6.0;
/// Dimension score below which a weakness is severe.
pub const SEVERE_WEAKNESS_SCORE: f64 = 4.0;

/// Impact of a strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Score ≥ 9
    High,
    /// Score ≥ 8
    Medium,
    /// Score ≥ 7
    Low,
}

impl Impact {
    fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            Impact::High
        } else if score >= 8.0 {
            Impact::Medium
        } else {
            Impact::Low
        }
    }
}

/// Overall competitiveness band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitivenessLevel {
    /// Average < 5
    Poor,
    /// Average ≥ 5
    Average,
    /// Average ≥ 6.5
    Good,
    /// Average ≥ 8
    Excellent,
}

impl CompetitivenessLevel {
    /// Classify an average radar score.
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            CompetitivenessLevel::Excellent
        } else if score >= 6.5 {
            CompetitivenessLevel::Good
        } else if score >= 5.0 {
            CompetitivenessLevel::Average
        } else {
            CompetitivenessLevel::Poor
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            CompetitivenessLevel::Excellent => {
                "Outstanding competitiveness across several dimensions with strong market potential"
            }
            CompetitivenessLevel::Good => {
                "Good competitiveness with clear strengths that optimisation can build on"
            }
            CompetitivenessLevel::Average => {
                "Average competitiveness; key dimensions need improvement to gain an edge"
            }
            CompetitivenessLevel::Poor => {
                "Weak competitiveness; the product strategy needs re-evaluation or major improvement"
            }
        }
    }
}

impl fmt::Display for CompetitivenessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CompetitivenessLevel::Excellent => "Excellent",
            CompetitivenessLevel::Good => "Good",
            CompetitivenessLevel::Average => "Average",
            CompetitivenessLevel::Poor => "Poor",
        };
        write!(f, "{}", label)
    }
}

/// A dimension scoring at or above [`STRENGTH_SCORE`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Strength {
    /// Dimension
    pub dimension: RadarDimension,
    /// Score
    pub score: f64,
    /// Description
    pub description: String,
    /// Impact band
    pub impact: Impact,
}

/// A dimension scoring below [`WEAKNESS_SCORE`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Weakness {
    /// Dimension
    pub dimension: RadarDimension,
    /// Score
    pub score: f64,
    /// Description
    pub description: String,
    /// Suggested improvement
    pub improvement: String,
}

/// Overall band with summary.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverallCompetitiveness {
    /// Average radar score, one decimal
    pub score: f64,
    /// Band
    pub level: CompetitivenessLevel,
    /// Summary line
    pub summary: String,
}

/// Strengths, weaknesses, and overall band.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveAnalysis {
    /// Strong dimensions in canonical order
    pub strengths: Vec<Strength>,
    /// Weak dimensions in canonical order
    pub weaknesses: Vec<Weakness>,
    /// Overall band
    pub overall_competitiveness: OverallCompetitiveness,
}

fn strength_description(dimension: RadarDimension, score: f64) -> String {
    let top = score >= 9.0;
    match dimension {
        RadarDimension::Profitability => format!(
            "{} profitability provides ample funding for growth",
            if top { "Exceptional" } else { "Strong" }
        ),
        RadarDimension::RoiSpeed => format!(
            "{} payback greatly reduces investment risk",
            if top { "Very fast" } else { "Fast" }
        ),
        RadarDimension::Portability => format!(
            "{} portability delivers a better user experience",
            if top { "Outstanding" } else { "Strong" }
        ),
        RadarDimension::Features => format!(
            "{} feature set meets diverse user needs",
            if top { "A very rich" } else { "A rich" }
        ),
        RadarDimension::PriceAdvantage => format!(
            "{} price competitiveness gives a clear market edge",
            if top { "Very strong" } else { "Strong" }
        ),
    }
}

fn weakness_description(dimension: RadarDimension, score: f64) -> String {
    let severe = score < SEVERE_WEAKNESS_SCORE;
    match dimension {
        RadarDimension::Profitability => format!(
            "Profit margin is {} and may threaten sustainable growth",
            if severe { "seriously insufficient" } else { "limited" }
        ),
        RadarDimension::RoiSpeed => format!(
            "Payback period is {}, carrying investment risk",
            if severe { "far too long" } else { "on the long side" }
        ),
        RadarDimension::Portability => format!(
            "Portability is {} and may hurt the user experience",
            if severe { "poor" } else { "only average" }
        ),
        RadarDimension::Features => format!(
            "Feature set is {} and may not meet user needs",
            if severe { "far too basic" } else { "relatively basic" }
        ),
        RadarDimension::PriceAdvantage => format!(
            "Price competitiveness is {}, leaving the product at a market disadvantage",
            if severe { "very weak" } else { "insufficient" }
        ),
    }
}

fn improvement_suggestion(dimension: RadarDimension) -> &'static str {
    match dimension {
        RadarDimension::Profitability => {
            "Optimise the cost structure, add product value, or adjust the pricing strategy"
        }
        RadarDimension::RoiSpeed => {
            "Reduce fixed investment, raise the sales forecast, or phase the investment"
        }
        RadarDimension::Portability => "Refine the design to cut weight and shrink volume",
        RadarDimension::Features => {
            "Add core features, raise user value, or focus on a niche need"
        }
        RadarDimension::PriceAdvantage => {
            "Lower costs, improve value for money, or find a differentiated position"
        }
    }
}

/// Break the radar down into strengths, weaknesses, and an overall band.
///
/// Scores in `[6, 7)` are neither strengths nor weaknesses.
///
/// # Examples
///
/// ```
/// use compete_metrics::radar::{RadarDimension, RadarScores};
/// use compete_strategy::competitiveness::{analyze_competitiveness, CompetitivenessLevel, Impact};
///
/// let analysis = analyze_competitiveness(&RadarScores::new(9.5, 6.5, 3.0, 8.0, 7.0));
/// assert_eq!(analysis.strengths.len(), 3);
/// assert_eq!(analysis.strengths[0].impact, Impact::High);
/// assert_eq!(analysis.weaknesses[0].dimension, RadarDimension::Portability);
/// assert_eq!(analysis.overall_competitiveness.level, CompetitivenessLevel::Good);
/// ```
pub fn analyze_competitiveness(scores: &RadarScores) -> CompetitiveAnalysis {
    let entries = scores.entries();

    let strengths = entries
        .iter()
        .filter(|(_, score)| *score >= STRENGTH_SCORE)
        .map(|&(dimension, score)| Strength {
            dimension,
            score,
            description: strength_description(dimension, score),
            impact: Impact::from_score(score),
        })
        .collect();

    let weaknesses = entries
        .iter()
        .filter(|(_, score)| *score < WEAKNESS_SCORE)
        .map(|&(dimension, score)| Weakness {
            dimension,
            score,
            description: weakness_description(dimension, score),
            improvement: improvement_suggestion(dimension).to_string(),
        })
        .collect();

    let average = scores.average();
    let level = CompetitivenessLevel::from_score(average);

    CompetitiveAnalysis {
        strengths,
        weaknesses,
        overall_competitiveness: OverallCompetitiveness {
            score: round1(average),
            level,
            summary: level.summary().to_string(),
        },
    }
}
