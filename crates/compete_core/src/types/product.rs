//! The user's own product.
//!
//! `ProductSpec` is the caller-owned description of the product being
//! positioned against a competitor: unit cost, physical size, the fixed
//! investment needed to launch it, expected monthly sales, and its feature
//! list. Units are the caller's (cost and investment in one currency,
//! weight in grams, dimensions in centimetres).

use serde::{Deserialize, Serialize};

/// Physical dimensions in centimetres.
///
/// # Examples
///
/// ```
/// use compete_core::types::Dimensions;
///
/// let dims = Dimensions::new(10.0, 5.0, 2.0);
/// assert_eq!(dims.volume(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length (cm)
    pub length: f64,
    /// Width (cm)
    pub width: f64,
    /// Height (cm)
    pub height: f64,
}

impl Dimensions {
    /// Create a new set of dimensions.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Volume as `length × width × height`.
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

/// The user's own product data.
///
/// # Examples
///
/// ```
/// use compete_core::types::{Dimensions, ProductSpec};
///
/// let product = ProductSpec::new(
///     60.0,
///     200.0,
///     Dimensions::new(10.0, 5.0, 2.0),
///     12_000.0,
///     25.0,
///     vec!["waterproof".to_string(), "usb-c".to_string()],
/// )
/// .with_id("p-001")
/// .with_name("Trail Lamp");
///
/// assert_eq!(product.feature_count(), 2);
/// assert_eq!(product.volume(), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSpec {
    /// Stable product identifier (used for cache fingerprints)
    #[serde(default)]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Unit (BOM) cost
    pub cost: f64,
    /// Weight in grams
    pub weight: f64,
    /// Physical dimensions
    pub dimensions: Dimensions,
    /// One-off investment (tooling, certification, ...)
    pub fixed_investment: f64,
    /// Expected units sold per month
    pub estimated_monthly_sales: f64,
    /// Feature list
    #[serde(default)]
    pub features: Vec<String>,
}

impl ProductSpec {
    /// Create a product with an empty id and name.
    pub fn new(
        cost: f64,
        weight: f64,
        dimensions: Dimensions,
        fixed_investment: f64,
        estimated_monthly_sales: f64,
        features: Vec<String>,
    ) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            cost,
            weight,
            dimensions,
            fixed_investment,
            estimated_monthly_sales,
            features,
        }
    }

    /// Set the product identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Return a copy with a different monthly sales estimate.
    pub fn with_monthly_sales(&self, estimated_monthly_sales: f64) -> Self {
        Self {
            estimated_monthly_sales,
            ..self.clone()
        }
    }

    /// Return a copy with a different unit cost.
    pub fn with_cost(&self, cost: f64) -> Self {
        Self {
            cost,
            ..self.clone()
        }
    }

    /// Number of listed features.
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Product volume in cubic centimetres.
    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }

    /// Name for display, falling back to a generic label.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Our product"
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProductSpec {
        ProductSpec::new(
            60.0,
            200.0,
            Dimensions::new(10.0, 5.0, 2.0),
            12_000.0,
            25.0,
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        )
    }

    #[test]
    fn test_dimensions_volume() {
        assert_eq!(Dimensions::new(2.0, 3.0, 4.0).volume(), 24.0);
    }

    #[test]
    fn test_product_builders() {
        let product = sample().with_id("p1").with_name("Lamp");
        assert_eq!(product.id, "p1");
        assert_eq!(product.display_name(), "Lamp");
        assert_eq!(product.feature_count(), 3);
    }

    #[test]
    fn test_product_display_name_fallback() {
        assert_eq!(sample().display_name(), "Our product");
    }

    #[test]
    fn test_with_monthly_sales_leaves_original_untouched() {
        let product = sample();
        let doubled = product.with_monthly_sales(50.0);
        assert_eq!(product.estimated_monthly_sales, 25.0);
        assert_eq!(doubled.estimated_monthly_sales, 50.0);
        assert_eq!(doubled.cost, product.cost);
    }

    #[test]
    fn test_product_json_uses_camel_case() {
        let json = r#"{
            "cost": 60.0,
            "weight": 200.0,
            "dimensions": { "length": 10.0, "width": 5.0, "height": 2.0 },
            "fixedInvestment": 12000.0,
            "estimatedMonthlySales": 25,
            "features": ["a"]
        }"#;
        let product: ProductSpec = serde_json::from_str(json).unwrap();
        assert_eq!(product.fixed_investment, 12_000.0);
        assert_eq!(product.estimated_monthly_sales, 25.0);
        assert!(product.id.is_empty());
    }
}
