//! Markdown report for a finished analysis.

use compete_core::format::{format_currency, format_percentage, format_time_period};
use compete_core::types::{CompetitorSpec, Currency, ProductSpec, RoleView};
use compete_core::types::competitor::MEDIUM_CONFIDENCE_THRESHOLD;
use compete_insights::{
    dimension_priority, generate_role_specific_insights, role_analysis_hints, role_profile,
    AnalysisInsights,
};
use compete_strategy::competitiveness::CompetitiveAnalysis;
use compete_strategy::opportunity::{MarketOpportunity, OpportunityLevel};
use compete_strategy::pricing::PricingStrategy;
use serde::Serialize;

use crate::pipeline::AnalysisResult;

/// Rendering options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Currency used for money amounts
    pub currency: Currency,
    /// Include the short/medium/long term plan
    pub include_execution_plan: bool,
    /// Include the competitor data quality note
    pub include_data_quality: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            include_execution_plan: true,
            include_data_quality: true,
        }
    }
}

/// Structured sections plus the assembled Markdown.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteReport {
    /// Overview section
    pub overview: String,
    /// Market opportunity
    pub market_opportunity: MarketOpportunity,
    /// Price recommendation
    pub pricing_strategy: PricingStrategy,
    /// Strengths and weaknesses
    pub competitive_analysis: CompetitiveAnalysis,
    /// Insights rewritten for the report's role
    pub insights: AnalysisInsights,
    /// Role focus hints
    pub role_hints: Vec<String>,
    /// Execution plan section, empty when disabled
    pub execution_plan: String,
    /// Full Markdown document
    pub full_report: String,
}

fn score_band(average: f64) -> &'static str {
    if average >= 8.0 {
        "🏆 **Excellent**: the product is strongly competitive"
    } else if average >= 6.0 {
        "✅ **Good**: the product has clear competitive advantages"
    } else if average >= 4.0 {
        "⚠️ **Fair**: the product needs further optimisation"
    } else {
        "❌ **Needs improvement**: the product has clear disadvantages and should be re-evaluated"
    }
}

fn opportunity_badge(level: OpportunityLevel) -> &'static str {
    match level {
        OpportunityLevel::High => "🟢",
        OpportunityLevel::Medium => "🟡",
        OpportunityLevel::Low => "🔴",
    }
}

fn weight_comparison(product: &ProductSpec, competitor: &CompetitorSpec) -> (String, &'static str) {
    match competitor.weight {
        Some(weight) if product.weight < weight => (format!("{}g", weight), "Ours is lighter"),
        Some(weight) if product.weight > weight => (format!("{}g", weight), "Competitor is lighter"),
        Some(weight) => (format!("{}g", weight), "Same weight"),
        None => ("Unknown".to_string(), "To be confirmed"),
    }
}

fn numbered(lines: &[String]) -> String {
    if lines.is_empty() {
        return "_None identified._".to_string();
    }
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| format!("{}. {}", index + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bulleted(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("- {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn overview(
    result: &AnalysisResult,
    product: &ProductSpec,
    competitor: &CompetitorSpec,
    role: RoleView,
    config: &ReportConfig,
) -> String {
    let profit = &result.profit_analysis;
    let average = result.radar_scores.average();
    let (competitor_weight, weight_note) = weight_comparison(product, competitor);

    let mut out = String::new();
    out.push_str("## Competitive Analysis Overview\n\n");
    out.push_str(&format!("**Subject:** {} vs competitor\n", product.display_name()));
    out.push_str(&format!(
        "**Analysed at:** {}\n",
        result.timestamp.format("%Y-%m-%d %H:%M UTC")
    ));
    out.push_str(&format!("**Perspective:** {}\n\n", role_profile(role).name));

    out.push_str("### Key figures\n\n");
    out.push_str("| Metric | Our product | Competitor | Comparison |\n");
    out.push_str("|--------|-------------|------------|------------|\n");
    out.push_str(&format!(
        "| Price | - | {} | Pricing reference |\n",
        format_currency(competitor.price, config.currency)
    ));
    out.push_str(&format!(
        "| Cost | {} | - | Cost base |\n",
        format_currency(product.cost, config.currency)
    ));
    out.push_str(&format!(
        "| Weight | {}g | {} | {} |\n",
        product.weight, competitor_weight, weight_note
    ));
    out.push_str(&format!(
        "| Margin rate | {} | - | Profit room |\n",
        format_percentage(profit.margin_rate, 1)
    ));
    out.push_str(&format!(
        "| Payback | {} | - | Return on investment |\n",
        format_time_period(profit.roi_months)
    ));

    out.push_str(&format!("\n### Overall competitiveness score: {:.1}/10\n\n", average));
    out.push_str(score_band(average));

    if config.include_data_quality {
        let confidence = &competitor.extraction_confidence;
        out.push_str(&format!(
            "\n\n**Competitor data quality:** {} ({:.2})",
            confidence.quality().label(),
            confidence.average()
        ));
        let uncertain = confidence.low_confidence_fields(MEDIUM_CONFIDENCE_THRESHOLD);
        if !uncertain.is_empty() {
            out.push_str(&format!(". Please confirm: {}", uncertain.join(", ")));
        }
    }

    out
}

fn execution_plan() -> String {
    [
        "## Execution Plan",
        "",
        "### Short term (1-3 months)",
        "- Polish product features and user experience",
        "- Draw up a detailed go-to-market plan",
        "- Set up the supply chain and production system",
        "",
        "### Medium term (3-12 months)",
        "- Refine the product based on market feedback",
        "- Widen market coverage and the user base",
        "- Build brand awareness and word of mouth",
        "",
        "### Long term (1 year and beyond)",
        "- Keep innovating and upgrading the technology",
        "- Extend the product line into new markets",
        "- Establish an industry-leading position",
    ]
    .join("\n")
}

/// Render the complete report with default options.
pub fn generate_complete_report(
    result: &AnalysisResult,
    product: &ProductSpec,
    competitor: &CompetitorSpec,
    role: RoleView,
) -> CompleteReport {
    generate_complete_report_with(result, product, competitor, role, &ReportConfig::default())
}

/// Render the complete report.
///
/// The role only changes wording. Every number comes from `result`.
///
/// # Examples
///
/// ```
/// use compete_core::types::{CompetitorSpec, Dimensions, ProductSpec, RoleView};
/// use compete_engine::pipeline::analyze;
/// use compete_engine::report::{generate_complete_report_with, ReportConfig};
///
/// let product = ProductSpec::new(
///     60.0, 200.0, Dimensions::new(10.0, 5.0, 2.0), 12_000.0, 25.0, vec!["a".into()],
/// )
/// .with_name("Trail bottle");
/// let competitor = CompetitorSpec::new(100.0, vec![]);
/// let result = analyze(&product, &competitor, None)?;
///
/// let report = generate_complete_report_with(
///     &result, &product, &competitor, RoleView::Retail, &ReportConfig::default(),
/// );
/// assert!(report.full_report.starts_with("## Competitive Analysis Overview"));
/// assert!(report.full_report.contains("Trail bottle"));
/// # Ok::<(), compete_core::types::AnalysisError>(())
/// ```
pub fn generate_complete_report_with(
    result: &AnalysisResult,
    product: &ProductSpec,
    competitor: &CompetitorSpec,
    role: RoleView,
    config: &ReportConfig,
) -> CompleteReport {
    let currency = config.currency;
    let insights = generate_role_specific_insights(&result.insights, role);
    let role_hints = role_analysis_hints(role, &result.radar_scores);
    let profile = role_profile(role);
    let opportunity = &result.market_opportunity;
    let pricing = &result.pricing;

    let overview = overview(result, product, competitor, role, config);
    let execution_plan = if config.include_execution_plan {
        execution_plan()
    } else {
        String::new()
    };

    let mut full = String::new();
    full.push_str(&overview);

    full.push_str("\n\n## Market Opportunity\n\n");
    full.push_str(&format!(
        "**Opportunity:** {} {}\n",
        opportunity_badge(opportunity.level),
        opportunity.level.label()
    ));
    full.push_str(&format!("**Score:** {}/10\n\n", opportunity.score));
    full.push_str(&format!("**Assessment:** {}\n\n", opportunity.description));
    full.push_str("**Key success factors:**\n");
    full.push_str(&format!("{}\n", opportunity.success_factors.join("\n")));

    full.push_str("\n## Pricing Strategy\n\n");
    full.push_str(&format!(
        "**Recommended price:** {}\n",
        format_currency(pricing.recommended_price, currency)
    ));
    full.push_str(&format!(
        "**Price range:** {} - {}\n",
        format_currency(pricing.price_range.min, currency),
        format_currency(pricing.price_range.max, currency)
    ));
    full.push_str(&format!("**Strategy:** {}\n", pricing.description));
    if !pricing.feasible {
        full.push_str("\n⚠️ The 30% margin floor is above the competitive ceiling, so no price is commercially feasible.\n");
    }
    full.push_str("\n**Rationale:**\n");
    full.push_str(&format!("{}\n", bulleted(&pricing.reasoning)));

    if let Some(break_even) = &result.break_even {
        full.push_str("\n## Break-even\n\n");
        full.push_str(&format!(
            "- Units to recover the investment: {}\n",
            break_even.break_even_units
        ));
        full.push_str(&format!(
            "- Time at the estimated sales rate: {}\n",
            format_time_period(break_even.break_even_months)
        ));
        full.push_str(&format!(
            "- Monthly units to break even within a year: {}\n",
            break_even.monthly_break_even_units
        ));
    }

    full.push_str("\n## Competitive Advantages\n\n");
    full.push_str(&format!("{}\n", numbered(&insights.advantages)));
    full.push_str("\n## Risks\n\n");
    full.push_str(&format!("{}\n", numbered(&insights.risks)));
    full.push_str("\n## Recommendations\n\n");
    full.push_str(&format!("{}\n", numbered(&insights.recommendations)));

    full.push_str(&format!("\n### Focus for the {}\n\n", profile.name));
    let priorities = dimension_priority(role)
        .into_iter()
        .map(|p| format!("{}. {}: {}", p.priority, p.name, p.description))
        .collect::<Vec<_>>()
        .join("\n");
    full.push_str(&format!("{}\n", priorities));
    if !role_hints.is_empty() {
        full.push_str(&format!("\n{}\n", bulleted(&role_hints)));
    }

    if !execution_plan.is_empty() {
        full.push_str(&format!("\n{}\n", execution_plan));
    }

    let angle = match role {
        RoleView::Retail => "a marketing angle",
        RoleView::Manufacturing => "a production angle",
    };
    full.push_str("\n## Summary\n\n");
    full.push_str(&format!(
        "Based on this analysis, approach the product from {} and lean on its core strengths while actively addressing the risks above.\n\n",
        angle
    ));
    full.push_str("**Key decision points:**\n");
    full.push_str("- Choice of pricing strategy\n");
    full.push_str("- Timing of market entry\n");
    full.push_str("- Priority of resource allocation\n");
    full.push_str("- Risk control measures\n");
    full.push_str("\n---\n");
    full.push_str(&format!(
        "*Report generated: {}*\n",
        result.timestamp.format("%Y-%m-%d %H:%M UTC")
    ));
    full.push_str(&format!("*Perspective: {}*", profile.name));

    CompleteReport {
        overview,
        market_opportunity: opportunity.clone(),
        pricing_strategy: pricing.clone(),
        competitive_analysis: result.competitive_analysis.clone(),
        insights,
        role_hints,
        execution_plan,
        full_report: full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::analyze;
    use compete_core::types::{Dimensions, ExtractionConfidence};

    fn product() -> ProductSpec {
        ProductSpec::new(
            60.0,
            200.0,
            Dimensions::new(10.0, 5.0, 2.0),
            12_000.0,
            25.0,
            vec!["waterproof".to_string()],
        )
        .with_name("Trail bottle")
    }

    #[test]
    fn test_score_bands() {
        assert!(score_band(8.0).contains("Excellent"));
        assert!(score_band(6.0).contains("Good"));
        assert!(score_band(4.0).contains("Fair"));
        assert!(score_band(3.9).contains("Needs improvement"));
    }

    #[test]
    fn test_weight_comparison() {
        let p = product();
        assert_eq!(
            weight_comparison(&p, &CompetitorSpec::new(1.0, vec![]).with_weight(250.0)).1,
            "Ours is lighter"
        );
        assert_eq!(
            weight_comparison(&p, &CompetitorSpec::new(1.0, vec![]).with_weight(150.0)).1,
            "Competitor is lighter"
        );
        assert_eq!(weight_comparison(&p, &CompetitorSpec::new(1.0, vec![])).0, "Unknown");
    }

    #[test]
    fn test_report_sections() {
        let competitor = CompetitorSpec::new(100.0, vec![]).with_weight(250.0);
        let result = analyze(&product(), &competitor, None).unwrap();
        let report = generate_complete_report(&result, &product(), &competitor, RoleView::Manufacturing);

        for heading in [
            "## Competitive Analysis Overview",
            "## Market Opportunity",
            "## Pricing Strategy",
            "## Break-even",
            "## Competitive Advantages",
            "## Risks",
            "## Recommendations",
            "## Execution Plan",
            "## Summary",
        ] {
            assert!(report.full_report.contains(heading), "missing {}", heading);
        }
        assert!(report.full_report.contains("$85.72"));
        assert!(report.full_report.contains("40.0%"));
        assert!(report.full_report.contains("Ours is lighter"));
        assert!(report.full_report.contains("a production angle"));
        assert!(report.full_report.ends_with("*Perspective: Factory production PM*"));
        assert_eq!(report.insights.recommendations.len(), result.insights.recommendations.len() + 3);
    }

    #[test]
    fn test_options_and_data_quality() {
        let competitor = CompetitorSpec::new(100.0, vec![])
            .with_confidence(ExtractionConfidence::new(0.9, 0.3, 0.4, 0.9));
        let result = analyze(&product(), &competitor, None).unwrap();
        let config = ReportConfig {
            currency: Currency::EUR,
            include_execution_plan: false,
            include_data_quality: true,
        };
        let report =
            generate_complete_report_with(&result, &product(), &competitor, RoleView::Retail, &config);

        assert!(report.execution_plan.is_empty());
        assert!(!report.full_report.contains("## Execution Plan"));
        assert!(report.full_report.contains("€100.00"));
        assert!(report.overview.contains("Please confirm: weight, dimensions"));
    }

    #[test]
    fn test_report_layout() {
        let competitor = CompetitorSpec::new(100.0, vec![]);
        let result = analyze(&product(), &competitor, None).unwrap();
        let report = generate_complete_report(&result, &product(), &competitor, RoleView::Retail);

        assert!(report.full_report.starts_with(&report.overview));
        assert!(report.overview.contains("| Cost | $60.00 | - | Cost base |\n"));
        assert!(report.full_report.contains("**Score:** "));
        assert!(report.full_report.contains("\n## Summary\n\n"));
        assert!(report.full_report.contains("- Risk control measures\n\n---\n*Report generated: "));

        let market = report.full_report.find("## Market Opportunity").unwrap();
        let pricing = report.full_report.find("## Pricing Strategy").unwrap();
        let summary = report.full_report.find("## Summary").unwrap();
        assert!(market < pricing && pricing < summary);
    }
}
