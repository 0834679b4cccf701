//! Competitor data as produced by the extraction collaborator.
//!
//! Only the price and the feature list are always observed. Weight and
//! dimensions are `Option`s: `None` means "not found in the source text",
//! and every consumer must degrade to a neutral value rather than fail.

use serde::{Deserialize, Serialize};

use super::product::Dimensions;

/// Confidence threshold at or above which extraction is considered reliable.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Confidence threshold at or above which extraction is usable with review.
pub const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Qualitative band for extraction confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Average confidence ≥ 0.8
    High,
    /// Average confidence ≥ 0.5
    Medium,
    /// Anything lower
    Low,
}

impl ConfidenceLevel {
    /// Classify a confidence value in `[0, 1]`.
    pub fn from_value(value: f64) -> Self {
        if value >= HIGH_CONFIDENCE_THRESHOLD {
            ConfidenceLevel::High
        } else if value >= MEDIUM_CONFIDENCE_THRESHOLD {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

/// Per-field extraction confidence, each in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use compete_core::types::{ConfidenceLevel, ExtractionConfidence};
///
/// let confidence = ExtractionConfidence::new(0.9, 0.4, 0.6, 0.9);
/// assert!((confidence.average() - 0.7).abs() < 1e-12);
/// assert_eq!(confidence.quality(), ConfidenceLevel::Medium);
/// assert_eq!(confidence.low_confidence_fields(0.5), vec!["weight"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfidence {
    /// Price confidence
    pub price: f64,
    /// Weight confidence
    pub weight: f64,
    /// Dimensions confidence
    pub dimensions: f64,
    /// Feature list confidence
    pub features: f64,
}

impl ExtractionConfidence {
    /// Create a confidence record.
    pub fn new(price: f64, weight: f64, dimensions: f64, features: f64) -> Self {
        Self {
            price,
            weight,
            dimensions,
            features,
        }
    }

    /// Fully confident record, used for manually entered data.
    pub fn certain() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Field names paired with their confidence, in display order.
    pub fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("price", self.price),
            ("weight", self.weight),
            ("dimensions", self.dimensions),
            ("features", self.features),
        ]
    }

    /// Arithmetic mean of the four confidences.
    pub fn average(&self) -> f64 {
        (self.price + self.weight + self.dimensions + self.features) / 4.0
    }

    /// Overall extraction quality band.
    pub fn quality(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_value(self.average())
    }

    /// Fields whose confidence is strictly below `threshold`.
    pub fn low_confidence_fields(&self, threshold: f64) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| *value < threshold)
            .map(|(name, _)| name)
            .collect()
    }
}

impl Default for ExtractionConfidence {
    fn default() -> Self {
        Self::certain()
    }
}

/// Structured competitor information.
///
/// # Examples
///
/// ```
/// use compete_core::types::CompetitorSpec;
///
/// let competitor = CompetitorSpec::new(100.0, vec!["waterproof".to_string()])
///     .with_weight(250.0);
/// assert_eq!(competitor.weight, Some(250.0));
/// assert!(competitor.dimensions.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorSpec {
    /// Observed selling price
    pub price: f64,
    /// Weight in grams, if observed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Dimensions in centimetres, if observed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    /// Feature list
    #[serde(default)]
    pub features: Vec<String>,
    /// Per-field extraction confidence
    #[serde(default)]
    pub extraction_confidence: ExtractionConfidence,
    /// Source text the data was extracted from (may be empty)
    #[serde(default)]
    pub raw_text: String,
}

impl CompetitorSpec {
    /// Create a competitor with only price and features observed.
    pub fn new(price: f64, features: Vec<String>) -> Self {
        Self {
            price,
            weight: None,
            dimensions: None,
            features,
            extraction_confidence: ExtractionConfidence::default(),
            raw_text: String::new(),
        }
    }

    /// Set the observed weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the observed dimensions.
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Set the extraction confidence.
    pub fn with_confidence(mut self, confidence: ExtractionConfidence) -> Self {
        self.extraction_confidence = confidence;
        self
    }

    /// Set the source text.
    pub fn with_raw_text(mut self, raw_text: impl Into<String>) -> Self {
        self.raw_text = raw_text.into();
        self
    }

    /// Return a copy with a different price.
    pub fn with_price(&self, price: f64) -> Self {
        Self {
            price,
            ..self.clone()
        }
    }

    /// Number of listed features.
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Volume in cubic centimetres, if dimensions were observed.
    pub fn volume(&self) -> Option<f64> {
        self.dimensions.map(|d| d.volume())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_confidence_level_thresholds() {
        assert_eq!(ConfidenceLevel::from_value(0.8), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_value(0.79), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_value(0.5), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_value(0.49), ConfidenceLevel::Low);
    }

    #[test]
    fn test_confidence_average_and_quality() {
        let confidence = ExtractionConfidence::new(1.0, 0.2, 0.2, 0.2);
        assert_relative_eq!(confidence.average(), 0.4);
        assert_eq!(confidence.quality(), ConfidenceLevel::Low);
        assert_eq!(ExtractionConfidence::certain().quality(), ConfidenceLevel::High);
    }

    #[test]
    fn test_low_confidence_fields_in_display_order() {
        let confidence = ExtractionConfidence::new(0.3, 0.9, 0.1, 0.6);
        assert_eq!(
            confidence.low_confidence_fields(0.7),
            vec!["price", "dimensions", "features"]
        );
        assert!(confidence.low_confidence_fields(0.0).is_empty());
    }

    #[test]
    fn test_competitor_optional_fields() {
        let competitor = CompetitorSpec::new(80.0, vec![])
            .with_dimensions(Dimensions::new(10.0, 10.0, 1.0))
            .with_raw_text("Lamp, $80");
        assert!(competitor.weight.is_none());
        assert_eq!(competitor.volume(), Some(100.0));
        assert_eq!(competitor.raw_text, "Lamp, $80");
    }

    #[test]
    fn test_competitor_json_missing_optionals() {
        let json = r#"{ "price": 99.5, "features": ["a", "b"] }"#;
        let competitor: CompetitorSpec = serde_json::from_str(json).unwrap();
        assert_eq!(competitor.price, 99.5);
        assert!(competitor.weight.is_none());
        assert!(competitor.dimensions.is_none());
        assert_eq!(competitor.extraction_confidence, ExtractionConfidence::certain());
    }

    #[test]
    fn test_competitor_json_camel_case_confidence() {
        let json = r#"{
            "price": 50,
            "weight": 300,
            "features": [],
            "extractionConfidence": { "price": 0.9, "weight": 0.7, "dimensions": 0.0, "features": 0.5 },
            "rawText": "text"
        }"#;
        let competitor: CompetitorSpec = serde_json::from_str(json).unwrap();
        assert_eq!(competitor.weight, Some(300.0));
        assert_relative_eq!(competitor.extraction_confidence.weight, 0.7);
    }
}
