//! End-to-end analysis of one product against one or more competitors.
//!
//! The pipeline runs every stage in a fixed order:
//!
//! 1. validate the product/competitor pair
//! 2. complete profit analysis at the competitor price
//! 3. radar scores
//! 4. risk tier, price recommendation, sensitivity tables
//! 5. break-even at the recommended price (feasible pricing only)
//! 6. market opportunity and strength/weakness breakdown
//! 7. insights, plus the role rewrite when a role is given
//!
//! The first failing stage ends the run with its error.

use std::borrow::Borrow;

use chrono::{DateTime, Utc};
use compete_core::explain::Explanation;
use compete_core::types::{AnalysisError, CompetitorSpec, ProductSpec, RoleView};
use compete_core::validation::validate_scenario;
use compete_insights::{generate_intelligent_insights, generate_role_specific_insights, AnalysisInsights};
use compete_metrics::break_even::{calculate_break_even_point, BreakEvenAnalysis};
use compete_metrics::profit::{calculate_complete_profit_analysis, ProfitAnalysis};
use compete_metrics::radar::{calculate_radar_scores, RadarScores};
use compete_strategy::competitiveness::{analyze_competitiveness, CompetitiveAnalysis};
use compete_strategy::opportunity::{assess_market_opportunity, MarketOpportunity};
use compete_strategy::pricing::{generate_pricing_recommendations, PricingStrategy};
use compete_strategy::risk::{assess_profit_risk, RiskAssessment};
use compete_strategy::sensitivity::{
    perform_sensitivity_analysis_with, SensitivityAnalysis, SensitivityConfig,
};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, instrument};

/// Everything computed for one product/competitor pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Caller-supplied session identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Role the narrative was adapted for, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleView>,
    /// Margin, margin rate and payback
    pub profit_analysis: ProfitAnalysis,
    /// How the profit analysis was derived
    pub profit_explanation: Explanation,
    /// Five 0-10 scores
    pub radar_scores: RadarScores,
    /// How the radar scores were derived
    pub radar_explanation: Explanation,
    /// Risk tier
    pub risk: RiskAssessment,
    /// Price recommendation
    pub pricing: PricingStrategy,
    /// Cost, price and sales tables
    pub sensitivity: SensitivityAnalysis,
    /// Break-even at the recommended price, absent when pricing is infeasible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_even: Option<BreakEvenAnalysis>,
    /// Market opportunity tier
    pub market_opportunity: MarketOpportunity,
    /// Strengths and weaknesses
    pub competitive_analysis: CompetitiveAnalysis,
    /// Role-neutral insights
    pub insights: AnalysisInsights,
    /// Insights rewritten for [`role`](Self::role)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_insights: Option<AnalysisInsights>,
    /// When the analysis finished
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    /// Attach a session identifier.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Insights for display: the role rewrite when present, else the neutral set.
    pub fn display_insights(&self) -> &AnalysisInsights {
        self.role_insights.as_ref().unwrap_or(&self.insights)
    }
}

/// Analyse `product` against `competitor` with the default sensitivity grid.
///
/// # Errors
///
/// [`AnalysisError::Validation`] for bad inputs, [`AnalysisError::Calculation`]
/// when a composed calculation fails.
///
/// # Examples
///
/// ```
/// use compete_core::types::{CompetitorSpec, Dimensions, ProductSpec, RoleView};
/// use compete_engine::pipeline::analyze;
///
/// let product = ProductSpec::new(
///     60.0, 200.0, Dimensions::new(10.0, 5.0, 2.0), 12_000.0, 25.0,
///     vec!["waterproof".into()],
/// );
/// let competitor = CompetitorSpec::new(100.0, vec!["waterproof".into()]).with_weight(250.0);
///
/// let result = analyze(&product, &competitor, Some(RoleView::Retail))?;
/// assert_eq!(result.profit_analysis.margin, 40.0);
/// assert_eq!(result.profit_analysis.roi_months, 12.0);
/// assert!(result.role_insights.is_some());
/// # Ok::<(), compete_core::types::AnalysisError>(())
/// ```
pub fn analyze(
    product: &ProductSpec,
    competitor: &CompetitorSpec,
    role: Option<RoleView>,
) -> Result<AnalysisResult, AnalysisError> {
    analyze_with(product, competitor, role, &SensitivityConfig::default())
}

/// Analyse with a custom sensitivity grid.
#[instrument(
    skip_all,
    fields(product = %product.display_name(), competitor_price = competitor.price, role = ?role)
)]
pub fn analyze_with(
    product: &ProductSpec,
    competitor: &CompetitorSpec,
    role: Option<RoleView>,
    sensitivity_config: &SensitivityConfig,
) -> Result<AnalysisResult, AnalysisError> {
    validate_scenario(product, competitor)?;
    debug!("inputs validated");

    let profit = calculate_complete_profit_analysis(product, competitor.price)?;
    let radar = calculate_radar_scores(product, competitor, &profit.result)?;
    debug!(
        margin_rate = profit.result.margin_rate,
        roi_months = profit.result.roi_months,
        average_score = radar.result.average(),
        "metrics computed"
    );

    let risk = assess_profit_risk(&profit.result);
    let pricing = generate_pricing_recommendations(product, competitor);
    let sensitivity =
        perform_sensitivity_analysis_with(product, competitor.price, sensitivity_config)?;

    let break_even = if pricing.feasible {
        Some(calculate_break_even_point(product, pricing.recommended_price)?.into_result())
    } else {
        None
    };
    debug!(risk = ?risk.level, strategy = ?pricing.strategy, "strategy computed");

    let market_opportunity = assess_market_opportunity(&radar.result);
    let competitive_analysis = analyze_competitiveness(&radar.result);

    let insights = generate_intelligent_insights(&radar.result, &profit.result, product, competitor);
    let role_insights = role.map(|role| generate_role_specific_insights(&insights, role));

    Ok(AnalysisResult {
        session_id: None,
        role,
        profit_analysis: profit.result,
        profit_explanation: profit.details,
        radar_scores: radar.result,
        radar_explanation: radar.details,
        risk,
        pricing,
        sensitivity,
        break_even,
        market_opportunity,
        competitive_analysis,
        insights,
        role_insights,
        timestamp: Utc::now(),
    })
}

/// Analyse `product` against every competitor in parallel.
///
/// Results come back in the same order as `competitors`. One failing
/// competitor does not affect the others.
pub fn analyze_many(
    product: &ProductSpec,
    competitors: &[CompetitorSpec],
    role: Option<RoleView>,
) -> Vec<Result<AnalysisResult, AnalysisError>> {
    debug!(competitors = competitors.len(), "batch analysis");
    competitors
        .par_iter()
        .map(|competitor| analyze(product, competitor, role))
        .collect()
}

/// Index of the competitor against which `product` scores best.
///
/// Failed analyses are skipped. Ties keep the earliest competitor. Works on
/// owned results and on the shared ones handed out by the cache.
pub fn best_match<R: Borrow<AnalysisResult>>(results: &[Result<R, AnalysisError>]) -> Option<usize> {
    results
        .iter()
        .enumerate()
        .filter_map(|(index, result)| {
            result
                .as_ref()
                .ok()
                .map(|r| (index, r.borrow().radar_scores.average()))
        })
        .fold(None, |best: Option<(usize, f64)>, (index, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((index, score)),
        })
        .map(|(index, _)| index)
}
