//! Profit risk tiers.
//!
//! A state-free classifier on `(marginRate, roiMonths)`. The high tier is
//! checked first, so a thin margin is high risk even with a fast payback.

use std::fmt;

use compete_metrics::profit::ProfitAnalysis;
use serde::{Deserialize, Serialize};

/// Margin rate below which risk is high.
pub const HIGH_RISK_MARGIN_RATE: f64 = 0.2;
/// Payback (months) above which risk is high.
pub const HIGH_RISK_ROI_MONTHS: f64 = 24.0;
/// Margin rate below which risk is at least medium.
pub const MEDIUM_RISK_MARGIN_RATE: f64 = 0.4;
/// Payback (months) above which risk is at least medium.
pub const MEDIUM_RISK_ROI_MONTHS: f64 = 12.0;

/// Risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Healthy margin and payback
    Low,
    /// Margin or payback needs work
    Medium,
    /// Margin too thin or payback too long
    High,
}

impl RiskLevel {
    /// Classify a margin rate and payback period.
    pub fn classify(margin_rate: f64, roi_months: f64) -> Self {
        if margin_rate < HIGH_RISK_MARGIN_RATE || roi_months > HIGH_RISK_ROI_MONTHS {
            RiskLevel::High
        } else if margin_rate < MEDIUM_RISK_MARGIN_RATE || roi_months > MEDIUM_RISK_ROI_MONTHS {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            RiskLevel::High => "High risk: margin rate is too low or the payback period is too long",
            RiskLevel::Medium => "Medium risk: margin rate or payback period needs optimisation",
            RiskLevel::Low => "Low risk: margin rate and payback period both look healthy",
        }
    }

    fn recommendations(&self) -> [&'static str; 3] {
        match self {
            RiskLevel::High => [
                "Consider lowering costs or raising the selling price",
                "Re-evaluate the market positioning",
                "Look for a differentiated competitive advantage",
            ],
            RiskLevel::Medium => [
                "Optimise the cost structure",
                "Increase the product's added value",
                "Consider phasing the investment",
            ],
            RiskLevel::Low => [
                "Maintain the current strategy",
                "Consider scaling up the investment",
                "Keep monitoring market changes",
            ],
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Risk tier with its narrative.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// Tier
    pub level: RiskLevel,
    /// One-line description of the tier
    pub description: String,
    /// Fixed recommendations for the tier
    pub recommendations: Vec<String>,
}

/// Classify the risk of a profit analysis.
///
/// # Examples
///
/// ```
/// use compete_metrics::profit::ProfitAnalysis;
/// use compete_strategy::risk::{assess_profit_risk, RiskLevel};
///
/// let high = assess_profit_risk(&ProfitAnalysis::new(10.0, 0.1, 30.0));
/// assert_eq!(high.level, RiskLevel::High);
///
/// let low = assess_profit_risk(&ProfitAnalysis::new(50.0, 0.5, 6.0));
/// assert_eq!(low.level, RiskLevel::Low);
/// assert_eq!(low.recommendations.len(), 3);
/// ```
pub fn assess_profit_risk(profit: &ProfitAnalysis) -> RiskAssessment {
    let level = RiskLevel::classify(profit.margin_rate, profit.roi_months);
    RiskAssessment {
        level,
        description: level.description().to_string(),
        recommendations: level
            .recommendations()
            .iter()
            .map(|r| r.to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_dominates_short_roi() {
        assert_eq!(RiskLevel::classify(0.1, 2.0), RiskLevel::High);
    }

    #[test]
    fn test_long_roi_is_high_risk() {
        assert_eq!(RiskLevel::classify(0.6, 25.0), RiskLevel::High);
    }

    #[test]
    fn test_medium_tier() {
        assert_eq!(RiskLevel::classify(0.3, 6.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(0.5, 13.0), RiskLevel::Medium);
        // boundaries are exclusive
        assert_eq!(RiskLevel::classify(0.2, 24.0), RiskLevel::Medium);
    }

    #[test]
    fn test_low_tier_boundaries() {
        assert_eq!(RiskLevel::classify(0.4, 12.0), RiskLevel::Low);
    }

    #[test]
    fn test_assessment_text() {
        let assessment = assess_profit_risk(&ProfitAnalysis::new(30.0, 0.3, 18.0));
        assert_eq!(assessment.level, RiskLevel::Medium);
        assert!(assessment.description.starts_with("Medium risk"));
        assert_eq!(assessment.recommendations[0], "Optimise the cost structure");
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::High > RiskLevel::Medium);
        assert!(RiskLevel::Medium > RiskLevel::Low);
    }
}
