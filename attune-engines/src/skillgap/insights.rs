//! Insights, trends, and opportunities from the gap analysis.

use attune_core::{ImpactLevel, Insight, Opportunity, Trend, stats};

use super::policy::SkillGapPolicy;
use super::types::{GapAnalysis, GapInsights, SkillTrend};

/// Build the insights section of the result.
pub fn build_insights(analysis: &GapAnalysis, policy: &SkillGapPolicy) -> GapInsights {
    GapInsights {
        key_insights: key_insights(analysis, policy),
        trends: category_trends(analysis, policy),
        opportunities: opportunities(analysis, policy),
    }
}

/// Headline observations about the gap landscape.
pub fn key_insights(analysis: &GapAnalysis, policy: &SkillGapPolicy) -> Vec<Insight> {
    let mut insights = Vec::new();

    if analysis.overall_gap > policy.significant_gap_threshold {
        insights.push(Insight {
            insight: "Significant skill gaps detected requiring comprehensive development plan"
                .to_string(),
            category: "overall".to_string(),
            impact: ImpactLevel::High,
            confidence: 0.9,
        });
    }

    if !analysis.critical_gaps.is_empty() {
        insights.push(Insight {
            insight: format!(
                "{} critical skill gaps require immediate attention",
                analysis.critical_gaps.len()
            ),
            category: "critical".to_string(),
            impact: ImpactLevel::High,
            confidence: 0.95,
        });
    }

    if !analysis.quick_wins.is_empty() {
        insights.push(Insight {
            insight: format!(
                "{} quick win opportunities available for rapid improvement",
                analysis.quick_wins.len()
            ),
            category: "opportunities".to_string(),
            impact: ImpactLevel::Medium,
            confidence: 0.8,
        });
    }

    insights
}

/// Categories whose mean level gap reads as a decline.
pub fn category_trends(analysis: &GapAnalysis, policy: &SkillGapPolicy) -> Vec<SkillTrend> {
    analysis
        .category_gaps
        .iter()
        .filter_map(|category| {
            let gaps: Vec<f64> = category.skills.iter().map(|skill| skill.gap).collect();
            let mean_gap = stats::mean(&gaps).unwrap_or(0.0);
            if mean_gap > policy.trend_gap_threshold {
                Some(SkillTrend {
                    skill: category.category_name.clone(),
                    trend: Trend::Declining,
                    magnitude: mean_gap,
                    timeframe: "current_assessment".to_string(),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Development opportunities in the gap landscape.
pub fn opportunities(analysis: &GapAnalysis, policy: &SkillGapPolicy) -> Vec<Opportunity> {
    let mut opportunities = Vec::new();

    if !analysis.quick_wins.is_empty() {
        opportunities.push(Opportunity {
            opportunity: "Leverage quick wins for rapid skill improvement".to_string(),
            probability: 0.8,
            potential: 0.6,
            timeframe: "1-2 months".to_string(),
        });
    }

    let high_impact = analysis
        .category_gaps
        .iter()
        .flat_map(|category| &category.skills)
        .filter(|skill| skill.impact > policy.high_impact_threshold && skill.gap > 0.0)
        .count();
    if high_impact > 0 {
        opportunities.push(Opportunity {
            opportunity: format!("Focus on {high_impact} high-impact skills for maximum ROI"),
            probability: 0.7,
            potential: 0.8,
            timeframe: "3-6 months".to_string(),
        });
    }

    opportunities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skillgap::gaps;
    use crate::skillgap::test_support::sample_request;

    fn analysis() -> GapAnalysis {
        gaps::analyze(&sample_request(), &SkillGapPolicy::default())
    }

    #[test]
    fn critical_and_quick_win_insights_report_their_counts() {
        let insights = key_insights(&analysis(), &SkillGapPolicy::default());
        assert!(
            insights
                .iter()
                .any(|insight| insight.category == "critical")
        );
        assert!(
            insights
                .iter()
                .any(|insight| insight.category == "opportunities")
        );
    }

    #[test]
    fn significant_gap_insight_requires_a_large_overall_gap() {
        let policy = SkillGapPolicy::default();
        let mut wide = analysis();
        wide.overall_gap = 60.0;
        assert!(
            key_insights(&wide, &policy)
                .iter()
                .any(|insight| insight.category == "overall")
        );

        let mut narrow = analysis();
        narrow.overall_gap = 10.0;
        assert!(
            key_insights(&narrow, &policy)
                .iter()
                .all(|insight| insight.category != "overall")
        );
    }

    #[test]
    fn deep_category_gaps_read_as_declining_trends() {
        let policy = SkillGapPolicy::default();
        let mut request = sample_request();
        // Empty out current levels so every gap widens past the threshold.
        request.current_skills.assessed_skills.clear();
        let analysis = gaps::analyze(&request, &policy);

        let trends = category_trends(&analysis, &policy);
        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].trend, Trend::Declining);
        assert!(trends[0].magnitude > policy.trend_gap_threshold);
    }

    #[test]
    fn opportunities_cover_quick_wins_and_high_impact_skills() {
        let result = opportunities(&analysis(), &SkillGapPolicy::default());
        assert_eq!(result.len(), 2);
        assert!(result[0].opportunity.contains("quick wins"));
        assert!(result[1].opportunity.contains("high-impact"));
    }
}
