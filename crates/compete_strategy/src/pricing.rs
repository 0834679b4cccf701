//! Price recommendation relative to a competitor.
//!
//! - floor: `cost / 0.7`, the lowest price keeping a 30 % margin rate
//! - ceiling: `competitorPrice × 0.95`, just under the competitor
//! - anchor: `competitorPrice × 0.8`
//! - recommended: `min(max(floor, anchor), ceiling)`
//!
//! Prices are expressed in cents: the floor is rounded up and the ceiling
//! down, so the rounded range never loosens the margin target or crosses
//! the competitor price. When the floor exceeds the ceiling the product
//! cannot meet the margin target under the competitor, and the result is
//! flagged as infeasible instead of failing.

use std::fmt;

use compete_core::math::round2;
use compete_core::types::{CompetitorSpec, ProductSpec};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Minimum margin rate the floor price guarantees.
pub const MIN_MARGIN_RATE_TARGET: f64 = 0.3;
/// Ceiling as a fraction of the competitor price.
pub const MAX_PRICE_RATIO: f64 = 0.95;
/// Anchor as a fraction of the competitor price.
pub const ANCHOR_PRICE_RATIO: f64 = 0.8;
/// Below this fraction of the competitor price the strategy is penetration.
pub const PENETRATION_THRESHOLD: f64 = 0.7;
/// Below this fraction of the competitor price the strategy is competitive.
pub const COMPETITIVE_THRESHOLD: f64 = 0.9;

// absorbs representation error before rounding to cents
const CENT_EPSILON: f64 = 1e-9;

fn ceil_cents(price: f64) -> f64 {
    (price * 100.0 - CENT_EPSILON).ceil() / 100.0
}

fn floor_cents(price: f64) -> f64 {
    (price * 100.0 + CENT_EPSILON).floor() / 100.0
}

/// Pricing strategy label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingStrategyKind {
    /// Well under the competitor to win share
    Penetration,
    /// Moderately under the competitor
    Competitive,
    /// At or just under the competitor, justified by value
    Value,
    /// Above the competitor
    Premium,
}

impl PricingStrategyKind {
    /// Classify `price` by its position relative to `competitor_price`.
    ///
    /// # Examples
    ///
    /// ```
    /// use compete_strategy::pricing::PricingStrategyKind;
    ///
    /// assert_eq!(PricingStrategyKind::classify(60.0, 100.0), PricingStrategyKind::Penetration);
    /// assert_eq!(PricingStrategyKind::classify(80.0, 100.0), PricingStrategyKind::Competitive);
    /// assert_eq!(PricingStrategyKind::classify(100.0, 100.0), PricingStrategyKind::Value);
    /// assert_eq!(PricingStrategyKind::classify(120.0, 100.0), PricingStrategyKind::Premium);
    /// ```
    pub fn classify(price: f64, competitor_price: f64) -> Self {
        if price < competitor_price * PENETRATION_THRESHOLD {
            PricingStrategyKind::Penetration
        } else if price < competitor_price * COMPETITIVE_THRESHOLD {
            PricingStrategyKind::Competitive
        } else if price <= competitor_price {
            PricingStrategyKind::Value
        } else {
            PricingStrategyKind::Premium
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            PricingStrategyKind::Penetration => "Penetration pricing",
            PricingStrategyKind::Competitive => "Competitive pricing",
            PricingStrategyKind::Value => "Value pricing",
            PricingStrategyKind::Premium => "Premium pricing",
        }
    }

    /// Fixed rationale for the strategy.
    pub fn reasoning(&self) -> [&'static str; 4] {
        match self {
            PricingStrategyKind::Penetration => [
                "Win market share quickly with a low price",
                "Suits products with a clear cost advantage",
                "Watch the long-term sustainability of the margin",
                "Pair with a large-scale promotion campaign",
            ],
            PricingStrategyKind::Competitive => [
                "Stay competitive while earning a reasonable profit",
                "Balance market share against profitability",
                "Suits products with features similar to the competitor",
                "Keep tracking competitor price changes",
            ],
            PricingStrategyKind::Value => [
                "Price on the product's distinctive value",
                "Suits products with clear differentiation",
                "Requires strong communication of product value",
                "Can earn a higher margin rate",
            ],
            PricingStrategyKind::Premium => [
                "Target the high end and capture a brand premium",
                "Suits products with a technology or brand lead",
                "Requires matching high-end positioning",
                "The addressable market may be smaller",
            ],
        }
    }
}

impl fmt::Display for PricingStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Inclusive price range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PriceRange {
    /// Lowest acceptable price
    pub min: f64,
    /// Highest advisable price
    pub max: f64,
}

impl PriceRange {
    /// Whether `price` lies inside the range.
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    /// Whether the range is non-empty.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// Recommended price, range, and strategy.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingStrategy {
    /// Recommended selling price (cents precision)
    pub recommended_price: f64,
    /// Acceptable range (cents precision)
    pub price_range: PriceRange,
    /// Strategy label
    pub strategy: PricingStrategyKind,
    /// Human-readable strategy name
    pub description: String,
    /// Rationale
    pub reasoning: Vec<String>,
    /// `false` when the margin floor lies above the competitive ceiling
    pub feasible: bool,
}

/// Recommend a selling price for `product` against `competitor`.
///
/// In the feasible case `cost < min ≤ recommended ≤ max ≤ competitorPrice`.
/// In the infeasible case the recommendation is the ceiling and the range
/// is reported as computed (`min > max`).
///
/// # Examples
///
/// ```
/// use compete_core::types::{CompetitorSpec, Dimensions, ProductSpec};
/// use compete_strategy::pricing::{generate_pricing_recommendations, PricingStrategyKind};
///
/// let product = ProductSpec::new(
///     60.0, 200.0, Dimensions::new(10.0, 5.0, 2.0), 12_000.0, 25.0, vec!["a".into()],
/// );
/// let competitor = CompetitorSpec::new(100.0, vec![]);
///
/// let pricing = generate_pricing_recommendations(&product, &competitor);
/// assert!(pricing.feasible);
/// assert_eq!(pricing.price_range.min, 85.72);
/// assert_eq!(pricing.price_range.max, 95.0);
/// assert_eq!(pricing.recommended_price, 85.72);
/// assert_eq!(pricing.strategy, PricingStrategyKind::Competitive);
/// ```
pub fn generate_pricing_recommendations(
    product: &ProductSpec,
    competitor: &CompetitorSpec,
) -> PricingStrategy {
    let competitor_price = competitor.price;
    let raw_min = product.cost / (1.0 - MIN_MARGIN_RATE_TARGET);
    let raw_max = competitor_price * MAX_PRICE_RATIO;

    let min = ceil_cents(raw_min);
    let max = floor_cents(raw_max);
    let feasible = min <= max;

    let recommended_price = if feasible {
        round2(raw_min.max(competitor_price * ANCHOR_PRICE_RATIO)).clamp(min, max)
    } else {
        warn!(
            cost = product.cost,
            competitor_price,
            min_price = min,
            max_price = max,
            "margin floor exceeds competitive ceiling; pricing is commercially infeasible"
        );
        max
    };

    let strategy = PricingStrategyKind::classify(recommended_price, competitor_price);

    PricingStrategy {
        recommended_price,
        price_range: PriceRange { min, max },
        strategy,
        description: strategy.name().to_string(),
        reasoning: strategy.reasoning().iter().map(|r| r.to_string()).collect(),
        feasible,
    }
}
