//! Computation provenance attached to results.
//!
//! Every calculator returns its value wrapped in a [`CalculationResult`]
//! whose [`Explanation`] records the formula, the raw inputs, and any
//! intermediate values, so a presentation layer can show how a number was
//! obtained without re-deriving it.

use std::collections::BTreeMap;

use serde::Serialize;

/// Formula, inputs, and intermediate steps behind a computed value.
///
/// Inputs and steps are kept in insertion-independent (sorted) order so
/// that two explanations of the same computation compare equal.
///
/// # Examples
///
/// ```
/// use compete_core::explain::Explanation;
///
/// let explanation = Explanation::new("margin = price - cost")
///     .with_input("price", 100.0)
///     .with_input("cost", 60.0)
///     .with_step("margin", 40.0);
///
/// assert_eq!(explanation.input("price"), Some(100.0));
/// assert_eq!(explanation.step("margin"), Some(40.0));
/// assert_eq!(explanation.input("volume"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    /// Human-readable formula
    pub formula: String,
    /// Raw input values by name
    pub inputs: BTreeMap<String, f64>,
    /// Intermediate values by name
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub intermediate_steps: BTreeMap<String, f64>,
}

impl Explanation {
    /// Start an explanation for `formula` with no inputs.
    pub fn new(formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
            inputs: BTreeMap::new(),
            intermediate_steps: BTreeMap::new(),
        }
    }

    /// Record an input value.
    pub fn with_input(mut self, name: impl Into<String>, value: f64) -> Self {
        self.inputs.insert(name.into(), value);
        self
    }

    /// Record an intermediate value.
    pub fn with_step(mut self, name: impl Into<String>, value: f64) -> Self {
        self.intermediate_steps.insert(name.into(), value);
        self
    }

    /// Look up an input by name.
    pub fn input(&self, name: &str) -> Option<f64> {
        self.inputs.get(name).copied()
    }

    /// Look up an intermediate step by name.
    pub fn step(&self, name: &str) -> Option<f64> {
        self.intermediate_steps.get(name).copied()
    }
}

/// A computed value together with its [`Explanation`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult<T> {
    /// The computed value
    pub result: T,
    /// How it was computed
    pub details: Explanation,
}

impl<T> CalculationResult<T> {
    /// Bundle a value with its explanation.
    pub fn new(result: T, details: Explanation) -> Self {
        Self { result, details }
    }

    /// Discard the explanation.
    pub fn into_result(self) -> T {
        self.result
    }

    /// Transform the value, keeping the explanation.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CalculationResult<U> {
        CalculationResult {
            result: f(self.result),
            details: self.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explanation_builder_overwrites_duplicate_names() {
        let explanation = Explanation::new("f")
            .with_input("x", 1.0)
            .with_input("x", 2.0);
        assert_eq!(explanation.inputs.len(), 1);
        assert_eq!(explanation.input("x"), Some(2.0));
    }

    #[test]
    fn test_calculation_result_map_keeps_details() {
        let result = CalculationResult::new(12.0, Explanation::new("roi").with_input("a", 1.0));
        let mapped = result.map(|v| v / 2.0);
        assert_eq!(mapped.result, 6.0);
        assert_eq!(mapped.details.formula, "roi");
        assert_eq!(mapped.into_result(), 6.0);
    }

    #[test]
    fn test_explanation_serialises_camel_case_and_skips_empty_steps() {
        let json = serde_json::to_string(&Explanation::new("f").with_input("x", 1.0)).unwrap();
        assert!(json.contains("\"formula\":\"f\""));
        assert!(!json.contains("intermediateSteps"));

        let json = serde_json::to_string(&Explanation::new("f").with_step("y", 2.0)).unwrap();
        assert!(json.contains("intermediateSteps"));
    }
}
