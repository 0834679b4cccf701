//! Role-specific narrative.
//!
//! Role views change wording, ordering and emphasis. They never change a
//! computed number: [`weighted_score`] exists for narrative ranking only.
//!
//! ## Rewrite rules
//!
//! | Role          | Advantages                           | Risks                              | Recommendations                     |
//! |---------------|--------------------------------------|------------------------------------|-------------------------------------|
//! | Manufacturing | "profit" becomes "cost control"; portability gains a design note | "price" becomes "production cost"; features gain a process note | drop marketing lines, add three production lines |
//! | Retail        | portability gains a selling-point note; profit gains a pricing note | features gain a user-experience note | add three market lines |

use compete_core::math::round1;
use compete_core::types::RoleView;
use compete_metrics::radar::{RadarDimension, RadarScores};
use serde::Serialize;

use crate::generator::AnalysisInsights;

const PROFIT_KEYWORD: &str = "profit";
const PORTABILITY_KEYWORD: &str = "portab";
const PRICE_KEYWORD: &str = "price";
const FEATURE_KEYWORD: &str = "feature";
const MARKETING_KEYWORD: &str = "marketing";

/// Weight and emphasis of one radar dimension for a role.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionWeight {
    /// Dimension
    pub dimension: RadarDimension,
    /// Relative importance in `[0, 1]`
    pub weight: f64,
    /// Whether the dimension is highlighted for the role
    pub emphasized: bool,
    /// Why the role cares about the dimension
    pub role_description: &'static str,
}

/// Static description of a role view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleProfile {
    /// Role
    pub role: RoleView,
    /// Display name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Topics the role focuses on
    pub focus_areas: &'static [&'static str],
    /// Per-dimension weights in declaration order
    pub dimension_weights: &'static [DimensionWeight],
}

impl RoleProfile {
    /// Weight entry for `dimension`.
    pub fn weight_of(&self, dimension: RadarDimension) -> Option<&DimensionWeight> {
        self.dimension_weights.iter().find(|w| w.dimension == dimension)
    }
}

const RETAIL_WEIGHTS: [DimensionWeight; 5] = [
    DimensionWeight {
        dimension: RadarDimension::Profitability,
        weight: 1.0,
        emphasized: true,
        role_description: "Margin rate drives retail profitability directly",
    },
    DimensionWeight {
        dimension: RadarDimension::RoiSpeed,
        weight: 1.0,
        emphasized: true,
        role_description: "Fast payback lowers market risk",
    },
    DimensionWeight {
        dimension: RadarDimension::PriceAdvantage,
        weight: 0.9,
        emphasized: true,
        role_description: "Price competitiveness decides market share",
    },
    DimensionWeight {
        dimension: RadarDimension::Features,
        weight: 0.7,
        emphasized: false,
        role_description: "Features influence what users choose",
    },
    DimensionWeight {
        dimension: RadarDimension::Portability,
        weight: 0.6,
        emphasized: false,
        role_description: "Portability shapes the user experience",
    },
];

const MANUFACTURING_WEIGHTS: [DimensionWeight; 5] = [
    DimensionWeight {
        dimension: RadarDimension::Portability,
        weight: 1.0,
        emphasized: true,
        role_description: "Lightweight design reflects manufacturing craft",
    },
    DimensionWeight {
        dimension: RadarDimension::Profitability,
        weight: 1.0,
        emphasized: true,
        role_description: "Cost control feeds straight into profit",
    },
    DimensionWeight {
        dimension: RadarDimension::Features,
        weight: 0.9,
        emphasized: true,
        role_description: "Feature delivery reflects technical capability",
    },
    DimensionWeight {
        dimension: RadarDimension::RoiSpeed,
        weight: 0.7,
        emphasized: false,
        role_description: "Payback informs investment decisions",
    },
    DimensionWeight {
        dimension: RadarDimension::PriceAdvantage,
        weight: 0.6,
        emphasized: false,
        role_description: "Price reflects the ability to control cost",
    },
];

static RETAIL_PROFILE: RoleProfile = RoleProfile {
    role: RoleView::Retail,
    name: "Online retail PM",
    description: "Focused on market pricing and profit optimisation",
    focus_areas: &["Profit margin", "ROI speed", "Price competitiveness", "Market positioning"],
    dimension_weights: &RETAIL_WEIGHTS,
};

static MANUFACTURING_PROFILE: RoleProfile = RoleProfile {
    role: RoleView::Manufacturing,
    name: "Factory production PM",
    description: "Focused on cost control and process comparison",
    focus_areas: &["Portability", "Cost control", "Feature richness", "Process comparison"],
    dimension_weights: &MANUFACTURING_WEIGHTS,
};

/// Profile for `role`.
pub fn role_profile(role: RoleView) -> &'static RoleProfile {
    match role {
        RoleView::Retail => &RETAIL_PROFILE,
        RoleView::Manufacturing => &MANUFACTURING_PROFILE,
    }
}

/// A dimension ranked by importance for a role.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DimensionPriority {
    /// Dimension
    pub dimension: RadarDimension,
    /// Display name
    pub name: &'static str,
    /// Rank starting at 1
    pub priority: usize,
    /// Why the role cares about the dimension
    pub description: &'static str,
}

/// Dimensions ordered by descending weight for `role`.
///
/// Equal weights keep the profile's declaration order.
///
/// # Examples
///
/// ```
/// use compete_core::types::RoleView;
/// use compete_insights::role::dimension_priority;
/// use compete_metrics::radar::RadarDimension;
///
/// let ranked = dimension_priority(RoleView::Manufacturing);
/// assert_eq!(ranked[0].dimension, RadarDimension::Portability);
/// assert_eq!(ranked[4].priority, 5);
/// ```
pub fn dimension_priority(role: RoleView) -> Vec<DimensionPriority> {
    let mut weights = role_profile(role).dimension_weights.to_vec();
    weights.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    weights
        .into_iter()
        .enumerate()
        .map(|(index, w)| DimensionPriority {
            dimension: w.dimension,
            name: w.dimension.label(),
            priority: index + 1,
            description: w.role_description,
        })
        .collect()
}

/// Role-weighted average of the radar scores, one decimal.
pub fn weighted_score(role: RoleView, scores: &RadarScores) -> f64 {
    let (sum, total) = role_profile(role)
        .dimension_weights
        .iter()
        .fold((0.0, 0.0), |(sum, total), w| {
            (sum + w.weight * scores.get(w.dimension), total + w.weight)
        });
    if total > 0.0 {
        round1(sum / total)
    } else {
        0.0
    }
}

/// Short hints on what the role should look at first.
///
/// Scores between the low and high thresholds produce no hint.
pub fn role_analysis_hints(role: RoleView, scores: &RadarScores) -> Vec<String> {
    let mut hints = Vec::new();
    let mut banded = |score: f64, high: &str, low: &str| {
        if score >= 8.0 {
            hints.push(high.to_string());
        } else if score < 6.0 {
            hints.push(low.to_string());
        }
    };

    match role {
        RoleView::Retail => {
            banded(
                scores.profitability,
                "💰 Ample margin, an aggressive promotion strategy is affordable",
                "⚠️ Thin margin, revisit the pricing strategy or cost structure",
            );
            banded(
                scores.roi_speed,
                "🚀 Fast payback, suited to rapid market expansion",
                "⏰ Long payback, phase the investment to limit risk",
            );
            if scores.price_advantage >= 7.0 {
                hints.push("🎯 Strong price competitiveness, consider value-based pricing".to_string());
            }
        }
        RoleView::Manufacturing => {
            banded(
                scores.portability,
                "🏆 Excellent lightweight design that shows advanced craft",
                "🔧 Portability lags, optimise the structure and material choice",
            );
            banded(
                scores.features,
                "⚙️ Complete feature delivery with high technical integration",
                "🛠️ Features are basic, consider adding differentiated capabilities",
            );
            banded(
                scores.profitability,
                "💡 Excellent cost control and production efficiency",
                "📊 Production cost needs work, look at process or supply chain improvements",
            );
        }
    }

    hints
}

fn manufacturing_view(insights: &AnalysisInsights) -> AnalysisInsights {
    let advantages = insights
        .advantages
        .iter()
        .map(|line| {
            if line.contains(PROFIT_KEYWORD) {
                line.replacen(PROFIT_KEYWORD, "cost control", 1)
            } else if line.contains(PORTABILITY_KEYWORD) {
                format!("{}, reflecting strong structural design", line)
            } else {
                line.clone()
            }
        })
        .collect();

    let risks = insights
        .risks
        .iter()
        .map(|line| {
            if line.contains(PRICE_KEYWORD) {
                line.replacen(PRICE_KEYWORD, "production cost", 1)
            } else if line.contains(FEATURE_KEYWORD) {
                format!("{}, and may call for better production processes", line)
            } else {
                line.clone()
            }
        })
        .collect();

    let mut recommendations: Vec<String> = insights
        .recommendations
        .iter()
        .filter(|line| !line.contains(MARKETING_KEYWORD))
        .cloned()
        .collect();
    recommendations.extend(
        [
            "Optimise the production process to lower unit cost",
            "Evaluate supply chain stability and raw material cost swings",
            "Draw up a capacity expansion plan to meet market demand",
        ]
        .map(String::from),
    );

    AnalysisInsights {
        advantages,
        risks,
        recommendations,
    }
}

fn retail_view(insights: &AnalysisInsights) -> AnalysisInsights {
    let advantages = insights
        .advantages
        .iter()
        .map(|line| {
            if line.contains(PORTABILITY_KEYWORD) {
                format!("{}, and can anchor the marketing message", line)
            } else if line.contains(PROFIT_KEYWORD) {
                format!("{}, leaving room for pricing strategy", line)
            } else {
                line.clone()
            }
        })
        .collect();

    let risks = insights
        .risks
        .iter()
        .map(|line| {
            if line.contains(FEATURE_KEYWORD) {
                format!("{}, and may hurt user experience and repeat purchases", line)
            } else {
                line.clone()
            }
        })
        .collect();

    let mut recommendations = insights.recommendations.clone();
    recommendations.extend(
        [
            "Build a differentiated marketing strategy around the product's strengths",
            "Offer several price tiers to reach different customer groups",
            "Set up a user feedback loop to keep improving the product",
        ]
        .map(String::from),
    );

    AnalysisInsights {
        advantages,
        risks,
        recommendations,
    }
}

/// Reword insights for a role view.
///
/// Advantage and risk counts are preserved. Manufacturing drops any
/// recommendation mentioning marketing; both roles append three
/// role-specific recommendations.
///
/// # Examples
///
/// ```
/// use compete_core::types::RoleView;
/// use compete_insights::generator::AnalysisInsights;
/// use compete_insights::role::generate_role_specific_insights;
///
/// let insights = AnalysisInsights {
///     advantages: vec!["Strong profit position".into()],
///     risks: vec![],
///     recommendations: vec![],
/// };
/// let adapted = generate_role_specific_insights(&insights, RoleView::Manufacturing);
/// assert_eq!(adapted.advantages[0], "Strong cost control position");
/// assert_eq!(adapted.recommendations.len(), 3);
/// ```
pub fn generate_role_specific_insights(insights: &AnalysisInsights, role: RoleView) -> AnalysisInsights {
    match role {
        RoleView::Manufacturing => manufacturing_view(insights),
        RoleView::Retail => retail_view(insights),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> AnalysisInsights {
        AnalysisInsights {
            advantages: vec![
                "Strong profit position: the margin rate reaches 45.0%".to_string(),
                "Good portability with an edge over similar products".to_string(),
                "Very fast payback".to_string(),
            ],
            risks: vec![
                "Intense price competition: the competitor sells at 40".to_string(),
                "Limited feature set: only 1 features".to_string(),
            ],
            recommendations: vec![
                "Increase marketing spend".to_string(),
                "Reinforce the strongest dimensions".to_string(),
            ],
        }
    }

    #[test]
    fn test_profile_weights() {
        let retail = role_profile(RoleView::Retail);
        assert_relative_eq!(retail.weight_of(RadarDimension::PriceAdvantage).unwrap().weight, 0.9);
        assert_relative_eq!(retail.weight_of(RadarDimension::Portability).unwrap().weight, 0.6);
        let manufacturing = role_profile(RoleView::Manufacturing);
        assert!(manufacturing.weight_of(RadarDimension::Features).unwrap().emphasized);
        assert!(!manufacturing.weight_of(RadarDimension::RoiSpeed).unwrap().emphasized);
        for role in RoleView::ALL {
            assert_eq!(role_profile(role).dimension_weights.len(), 5);
            assert_eq!(role_profile(role).role, role);
        }
    }

    #[test]
    fn test_dimension_priority_is_stable() {
        let ranked = dimension_priority(RoleView::Retail);
        let order: Vec<RadarDimension> = ranked.iter().map(|p| p.dimension).collect();
        assert_eq!(
            order,
            vec![
                RadarDimension::Profitability,
                RadarDimension::RoiSpeed,
                RadarDimension::PriceAdvantage,
                RadarDimension::Features,
                RadarDimension::Portability,
            ]
        );
        assert_eq!(ranked.iter().map(|p| p.priority).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_weighted_score() {
        let scores = RadarScores::new(10.0, 10.0, 0.0, 0.0, 0.0);
        // (10 + 10) / 4.2
        assert_relative_eq!(weighted_score(RoleView::Retail, &scores), 4.8);
        // (10 + 7) / 4.2
        assert_relative_eq!(weighted_score(RoleView::Manufacturing, &scores), 4.0);
        let flat = RadarScores::new(7.0, 7.0, 7.0, 7.0, 7.0);
        assert_relative_eq!(weighted_score(RoleView::Retail, &flat), 7.0);
    }

    #[test]
    fn test_retail_hints() {
        let hints = role_analysis_hints(RoleView::Retail, &RadarScores::new(8.0, 5.0, 0.0, 0.0, 7.0));
        assert_eq!(hints.len(), 3);
        assert!(hints[0].starts_with("💰"));
        assert!(hints[1].starts_with("⏰"));
        assert!(hints[2].starts_with("🎯"));

        let quiet = role_analysis_hints(RoleView::Retail, &RadarScores::new(7.0, 7.0, 0.0, 0.0, 6.9));
        assert!(quiet.is_empty());
    }

    #[test]
    fn test_manufacturing_hints() {
        let hints =
            role_analysis_hints(RoleView::Manufacturing, &RadarScores::new(5.0, 0.0, 9.0, 6.5, 0.0));
        assert_eq!(hints.len(), 2);
        assert!(hints[0].starts_with("🏆"));
        assert!(hints[1].starts_with("📊"));
    }

    #[test]
    fn test_manufacturing_rewrite() {
        let adapted = generate_role_specific_insights(&sample(), RoleView::Manufacturing);
        assert_eq!(
            adapted.advantages[0],
            "Strong cost control position: the margin rate reaches 45.0%"
        );
        assert!(adapted.advantages[1].ends_with("reflecting strong structural design"));
        assert_eq!(adapted.advantages[2], "Very fast payback");
        assert!(adapted.risks[0].starts_with("Intense production cost competition"));
        assert!(adapted.risks[1].ends_with("better production processes"));
        assert_eq!(adapted.recommendations.len(), 4);
        assert!(adapted.recommendations.iter().all(|r| !r.contains("marketing")));
    }

    #[test]
    fn test_retail_rewrite() {
        let adapted = generate_role_specific_insights(&sample(), RoleView::Retail);
        assert!(adapted.advantages[0].ends_with("room for pricing strategy"));
        assert!(adapted.advantages[1].ends_with("anchor the marketing message"));
        assert_eq!(adapted.risks[0], sample().risks[0]);
        assert!(adapted.risks[1].ends_with("repeat purchases"));
        assert_eq!(adapted.recommendations.len(), 5);
        assert_eq!(adapted.recommendations[..2], sample().recommendations[..]);
    }
}
