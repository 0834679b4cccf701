//! Scenario file loading
//!
//! A scenario is a JSON document holding the user's product and either one
//! `competitor` or a `competitors` list (or both, the single one first):
//!
//! ```json
//! {
//!   "product": { "id": "p-1", "cost": 60, "weight": 200, ... },
//!   "competitor": { "price": 100, "features": ["waterproof"] }
//! }
//! ```

use std::path::Path;

use compete_core::types::{CompetitorSpec, ProductSpec};
use serde::Deserialize;
use tracing::debug;

use crate::{CliError, Result};

/// Parsed scenario file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioFile {
    /// The user's product
    pub product: ProductSpec,
    /// Single competitor
    #[serde(default)]
    pub competitor: Option<CompetitorSpec>,
    /// Additional competitors
    #[serde(default)]
    pub competitors: Vec<CompetitorSpec>,
}

impl ScenarioFile {
    /// Read and parse a scenario file.
    ///
    /// Fails when the file is missing, is not valid JSON, or names no
    /// competitor at all.
    pub fn load(path: &Path) -> Result<Self> {
        let shown = path.display().to_string();
        if !path.exists() {
            return Err(CliError::FileNotFound(shown));
        }

        let content = std::fs::read_to_string(path)?;
        let scenario = Self::parse(&content).map_err(|reason| CliError::Scenario {
            path: shown.clone(),
            reason,
        })?;

        debug!(
            path = %shown,
            competitors = scenario.competitors().len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    /// Parse scenario JSON.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let scenario: ScenarioFile = serde_json::from_str(content).map_err(|e| e.to_string())?;
        if scenario.competitor.is_none() && scenario.competitors.is_empty() {
            return Err("no competitor given; add `competitor` or `competitors`".to_string());
        }
        Ok(scenario)
    }

    /// Every competitor in file order.
    pub fn competitors(&self) -> Vec<CompetitorSpec> {
        self.competitor
            .iter()
            .chain(self.competitors.iter())
            .cloned()
            .collect()
    }

    /// The first competitor in file order.
    pub fn primary_competitor(&self) -> Option<&CompetitorSpec> {
        self.competitor.as_ref().or_else(|| self.competitors.first())
    }
}
