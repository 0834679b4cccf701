//! Five-dimension competitiveness radar.
//!
//! Maps heterogeneous signals onto a common `[0, 10]` scale:
//!
//! | Dimension | Raw score | Saturates at |
//! |-----------|-----------|--------------|
//! | profitability | `marginRate / 0.5 × 10` | 50 % margin rate |
//! | roiSpeed | `12 / roiMonths` | 1-month payback |
//! | portability | `competitor / mine × 5` (weight, volume) | competitor twice as heavy/large |
//! | features | `myCount / max(theirCount, 1) × 10` | feature parity |
//! | priceAdvantage | `competitorPrice / 50 × 10` | price of 50 |
//!
//! Every score is clamped to `[0, 10]` and rounded to one decimal.
//! Downstream components (risk, insights, role adaptation) consume only
//! these five numbers and the raw profit analysis.

use std::fmt;

use compete_core::explain::{CalculationResult, Explanation};
use compete_core::math::{clamp, round1};
use compete_core::types::{CalculationError, CompetitorSpec, ProductSpec};
use serde::{Deserialize, Serialize};

use crate::profit::ProfitAnalysis;

/// Upper bound of every radar score.
pub const MAX_SCORE: f64 = 10.0;

/// Margin rate at which the profitability score saturates.
pub const PROFITABILITY_SATURATION_RATE: f64 = 0.5;

/// Payback horizon (months) used by the ROI speed score.
pub const ROI_SPEED_REFERENCE_MONTHS: f64 = 12.0;

/// Competitor price at which the price advantage score saturates.
///
/// A calibration reference for mid-priced consumer goods, not a
/// universal constant.
pub const PRICE_ADVANTAGE_BASELINE: f64 = 50.0;

/// Portability score when no competitor measurement is known.
pub const NEUTRAL_PORTABILITY: f64 = 5.0;

/// Multiplier applied to a competitor/own size ratio.
pub const PORTABILITY_RATIO_SCALE: f64 = 5.0;

/// One axis of the radar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RadarDimension {
    /// Margin headroom
    Profitability,
    /// Payback speed
    RoiSpeed,
    /// Lightness and compactness relative to the competitor
    Portability,
    /// Feature count relative to the competitor
    Features,
    /// Pricing headroom implied by the competitor price
    PriceAdvantage,
}

impl RadarDimension {
    /// All dimensions in canonical order.
    pub const ALL: [RadarDimension; 5] = [
        RadarDimension::Profitability,
        RadarDimension::RoiSpeed,
        RadarDimension::Portability,
        RadarDimension::Features,
        RadarDimension::PriceAdvantage,
    ];

    /// Machine key (camelCase).
    pub fn key(&self) -> &'static str {
        match self {
            RadarDimension::Profitability => "profitability",
            RadarDimension::RoiSpeed => "roiSpeed",
            RadarDimension::Portability => "portability",
            RadarDimension::Features => "features",
            RadarDimension::PriceAdvantage => "priceAdvantage",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            RadarDimension::Profitability => "Profitability",
            RadarDimension::RoiSpeed => "ROI speed",
            RadarDimension::Portability => "Portability",
            RadarDimension::Features => "Feature richness",
            RadarDimension::PriceAdvantage => "Price advantage",
        }
    }

    /// One-line description of what the score measures.
    pub fn description(&self) -> &'static str {
        match self {
            RadarDimension::Profitability => "Gross margin rate at the competitor's price",
            RadarDimension::RoiSpeed => "How quickly monthly profit repays the fixed investment",
            RadarDimension::Portability => "Weight and volume compared with the competitor",
            RadarDimension::Features => "Number of features compared with the competitor",
            RadarDimension::PriceAdvantage => "Room to price below an established market price",
        }
    }
}

impl fmt::Display for RadarDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Normalised competitiveness scores, each in `[0, 10]` with one decimal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarScores {
    /// Profitability score
    pub profitability: f64,
    /// ROI speed score
    pub roi_speed: f64,
    /// Portability score
    pub portability: f64,
    /// Feature richness score
    pub features: f64,
    /// Price advantage score
    pub price_advantage: f64,
}

impl RadarScores {
    /// Create a score set. Values are taken as given.
    pub fn new(
        profitability: f64,
        roi_speed: f64,
        portability: f64,
        features: f64,
        price_advantage: f64,
    ) -> Self {
        Self {
            profitability,
            roi_speed,
            portability,
            features,
            price_advantage,
        }
    }

    /// Score for one dimension.
    pub fn get(&self, dimension: RadarDimension) -> f64 {
        match dimension {
            RadarDimension::Profitability => self.profitability,
            RadarDimension::RoiSpeed => self.roi_speed,
            RadarDimension::Portability => self.portability,
            RadarDimension::Features => self.features,
            RadarDimension::PriceAdvantage => self.price_advantage,
        }
    }

    /// Dimensions paired with their score, in canonical order.
    pub fn entries(&self) -> [(RadarDimension, f64); 5] {
        RadarDimension::ALL.map(|dimension| (dimension, self.get(dimension)))
    }

    /// Unweighted mean of the five scores.
    pub fn average(&self) -> f64 {
        self.entries().iter().map(|(_, score)| score).sum::<f64>() / 5.0
    }
}

fn normalise(raw: f64) -> f64 {
    round1(clamp(raw, 0.0, MAX_SCORE))
}

fn size_ratio_score(competitor_value: f64, my_value: f64) -> f64 {
    (competitor_value / my_value * PORTABILITY_RATIO_SCALE).min(MAX_SCORE)
}

/// Raw portability score before rounding.
///
/// Uses weight and volume when both competitor measurements are known,
/// weight alone when only weight is known, and [`NEUTRAL_PORTABILITY`]
/// otherwise. A non-positive measurement on either side counts as unknown.
fn portability_raw(product: &ProductSpec, competitor: &CompetitorSpec) -> f64 {
    let weight_score = match competitor.weight {
        Some(theirs) if theirs > 0.0 && product.weight > 0.0 => {
            Some(size_ratio_score(theirs, product.weight))
        }
        _ => None,
    };
    let volume_score = match competitor.volume() {
        Some(theirs) if theirs > 0.0 && product.volume() > 0.0 => {
            Some(size_ratio_score(theirs, product.volume()))
        }
        _ => None,
    };

    match (weight_score, volume_score) {
        (Some(weight), Some(volume)) => (weight + volume) / 2.0,
        (Some(weight), None) => weight,
        _ => NEUTRAL_PORTABILITY,
    }
}

/// Score the product against the competitor on all five dimensions.
///
/// # Errors
///
/// Returns a [`CalculationError`] if the profit analysis carries a
/// non-finite or negative value, since no meaningful score exists for it.
///
/// # Examples
///
/// ```
/// use compete_core::types::{CompetitorSpec, Dimensions, ProductSpec};
/// use compete_metrics::profit::ProfitAnalysis;
/// use compete_metrics::radar::calculate_radar_scores;
///
/// let product = ProductSpec::new(
///     60.0, 200.0, Dimensions::new(10.0, 5.0, 2.0), 12_000.0, 25.0,
///     vec!["a".into(), "b".into()],
/// );
/// let competitor = CompetitorSpec::new(100.0, vec!["a".into(), "b".into(), "c".into(), "d".into()]);
/// let profit = ProfitAnalysis::new(40.0, 0.4, 12.0);
///
/// let scores = calculate_radar_scores(&product, &competitor, &profit).unwrap().result;
/// assert_eq!(scores.profitability, 8.0);
/// assert_eq!(scores.roi_speed, 1.0);
/// assert_eq!(scores.portability, 5.0);
/// assert_eq!(scores.features, 5.0);
/// assert_eq!(scores.price_advantage, 10.0);
/// ```
pub fn calculate_radar_scores(
    product: &ProductSpec,
    competitor: &CompetitorSpec,
    profit: &ProfitAnalysis,
) -> Result<CalculationResult<RadarScores>, CalculationError> {
    for (name, value) in [
        ("marginRate", profit.margin_rate),
        ("roiMonths", profit.roi_months),
        ("competitorPrice", competitor.price),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(
                CalculationError::new("Radar score calculation failed").with_details(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )),
            );
        }
    }

    let profitability = profit.margin_rate / PROFITABILITY_SATURATION_RATE * MAX_SCORE;
    // zero payback (no investment) divides to +inf and saturates
    let roi_speed = ROI_SPEED_REFERENCE_MONTHS / profit.roi_months;
    let portability = portability_raw(product, competitor);

    let my_feature_count = product.feature_count() as f64;
    let competitor_feature_count = competitor.feature_count() as f64;
    let features = my_feature_count / competitor_feature_count.max(1.0) * MAX_SCORE;

    let price_advantage = competitor.price / PRICE_ADVANTAGE_BASELINE * MAX_SCORE;

    let scores = RadarScores::new(
        normalise(profitability),
        normalise(roi_speed),
        normalise(portability),
        normalise(features),
        normalise(price_advantage),
    );

    let details = Explanation::new("radar score = five normalised dimension scores")
        .with_input("marginRate", profit.margin_rate)
        .with_input("roiMonths", profit.roi_months)
        .with_input("myWeight", product.weight)
        .with_input("competitorWeight", competitor.weight.unwrap_or(0.0))
        .with_input("myFeatureCount", my_feature_count)
        .with_input("competitorFeatureCount", competitor_feature_count)
        .with_input("competitorPrice", competitor.price)
        .with_step("profitability", profitability)
        .with_step("roiSpeed", roi_speed)
        .with_step("portability", portability)
        .with_step("features", features)
        .with_step("priceAdvantage", price_advantage);

    Ok(CalculationResult::new(scores, details))
}
