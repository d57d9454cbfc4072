//! Insights, trends, opportunities, and recommendations from the profile.

use attune_core::{ImpactLevel, Insight, Opportunity, Priority, TieredRecommendations, Trend, stats};

use super::path::gap_timeframe;
use super::policy::CompetencyPolicy;
use super::types::{
    CompetencyMappingRequest, CompetencyProfile, CompetencyRecommendations, CompetencyTrend,
    ImmediateCompetencyAction, LongTermCompetencyAction, MappingInsights, ShortTermCompetencyAction,
};

/// Build the insights section of the result.
pub fn build_insights(
    request: &CompetencyMappingRequest,
    profile: &CompetencyProfile,
    policy: &CompetencyPolicy,
) -> MappingInsights {
    let trends = if request.mapping_settings.include_trends {
        assessment_trends(request, policy)
    } else {
        Vec::new()
    };

    MappingInsights {
        key_insights: key_insights(profile, policy),
        trends,
        opportunities: opportunities(profile),
    }
}

/// Headline observations about the profile.
pub fn key_insights(profile: &CompetencyProfile, policy: &CompetencyPolicy) -> Vec<Insight> {
    let mut insights = Vec::new();

    if profile.overall_level < policy.low_overall_level {
        insights.push(Insight {
            insight: "Overall competency level indicates need for foundational development"
                .to_string(),
            category: "performance".to_string(),
            impact: ImpactLevel::High,
            confidence: 0.9,
        });
    }

    let domain_scores: Vec<f64> = profile.domain_profiles.iter().map(|d| d.score).collect();
    if let Some(variance) = stats::population_variance(&domain_scores) {
        if variance > policy.imbalance_variance {
            insights.push(Insight {
                insight: "Significant imbalance between competency domains detected".to_string(),
                category: "balance".to_string(),
                impact: ImpactLevel::Medium,
                confidence: 0.8,
            });
        }
    }

    let critical_count = profile
        .development_areas
        .iter()
        .filter(|area| area.priority == Priority::Critical)
        .count();
    if critical_count > 0 {
        insights.push(Insight {
            insight: format!(
                "{critical_count} critical development areas require immediate attention"
            ),
            category: "priority".to_string(),
            impact: ImpactLevel::High,
            confidence: 0.95,
        });
    }

    insights
}

/// Per-competency movement between the two most recent assessments.
pub fn assessment_trends(
    request: &CompetencyMappingRequest,
    policy: &CompetencyPolicy,
) -> Vec<CompetencyTrend> {
    let assessments = &request.historical_data.previous_assessments;
    if assessments.len() < 2 {
        return Vec::new();
    }

    let recent = &assessments[assessments.len() - 1];
    let previous = &assessments[assessments.len() - 2];

    recent
        .competency_scores
        .iter()
        .filter_map(|(competency_id, &recent_score)| {
            let previous_score = previous
                .competency_scores
                .get(competency_id)
                .copied()
                .unwrap_or(recent_score);
            let change = recent_score - previous_score;
            if change.abs() <= policy.trend_threshold {
                return None;
            }
            Some(CompetencyTrend {
                competency: request.competency_framework.competency_name(competency_id),
                trend: if change > 0.0 {
                    Trend::Improving
                } else {
                    Trend::Declining
                },
                magnitude: change.abs(),
                timeframe: "recent_assessment".to_string(),
            })
        })
        .collect()
}

/// Development opportunities surfaced by the profile shape.
pub fn opportunities(profile: &CompetencyProfile) -> Vec<Opportunity> {
    let mut opportunities = Vec::new();

    let near_threshold = profile
        .development_areas
        .iter()
        .filter(|area| area.current_level + 1 == area.target_level)
        .count();
    if near_threshold > 0 {
        opportunities.push(Opportunity {
            opportunity: format!(
                "{near_threshold} competencies near next level - quick wins available"
            ),
            probability: 0.8,
            potential: 0.7,
            timeframe: "1-2 months".to_string(),
        });
    }

    let high_impact = profile
        .development_areas
        .iter()
        .filter(|area| area.priority >= Priority::High)
        .count();
    if high_impact > 0 {
        opportunities.push(Opportunity {
            opportunity: format!("Focus on {high_impact} high-impact development areas"),
            probability: 0.6,
            potential: 0.9,
            timeframe: "3-6 months".to_string(),
        });
    }

    opportunities
}

/// Build the three-horizon recommendation set.
pub fn recommend(
    profile: &CompetencyProfile,
    policy: &CompetencyPolicy,
) -> CompetencyRecommendations {
    TieredRecommendations {
        immediate: immediate_actions(profile),
        short_term: short_term_actions(profile),
        long_term: long_term_actions(profile, policy),
    }
}

fn immediate_actions(profile: &CompetencyProfile) -> Vec<ImmediateCompetencyAction> {
    profile
        .development_areas
        .iter()
        .filter(|area| area.priority == Priority::Critical)
        .map(|area| ImmediateCompetencyAction {
            action: format!("Prioritize development of {}", area.competency),
            competency: area.competency.clone(),
            priority: Priority::Critical,
            rationale: format!("Critical gap identified ({} levels below target)", area.gap),
            expected_outcome: format!(
                "Achieve level {} within {}",
                area.target_level,
                gap_timeframe(area.gap)
            ),
        })
        .collect()
}

fn short_term_actions(profile: &CompetencyProfile) -> Vec<ShortTermCompetencyAction> {
    let high_priority: Vec<String> = profile
        .development_areas
        .iter()
        .filter(|area| area.priority == Priority::High)
        .map(|area| area.competency.clone())
        .collect();

    if high_priority.is_empty() {
        return Vec::new();
    }

    vec![ShortTermCompetencyAction {
        action: "Develop high-priority competencies".to_string(),
        timeframe: "Next 3 months".to_string(),
        competencies: high_priority,
        rationale: "Address high-priority development areas for balanced growth".to_string(),
        success_metrics: vec![
            "Achieve target levels".to_string(),
            "Improve overall competency score".to_string(),
            "Reduce critical gaps".to_string(),
        ],
    }]
}

fn long_term_actions(
    profile: &CompetencyProfile,
    policy: &CompetencyPolicy,
) -> Vec<LongTermCompetencyAction> {
    if profile.overall_level >= policy.foundation_level {
        return Vec::new();
    }

    vec![LongTermCompetencyAction {
        action: "Develop comprehensive competency foundation".to_string(),
        timeframe: "Next 12 months".to_string(),
        competencies: profile
            .development_areas
            .iter()
            .map(|area| area.competency.clone())
            .collect(),
        rationale: "Build solid foundation across all competency domains".to_string(),
        milestones: vec![
            "Achieve intermediate level".to_string(),
            "Balance domain competencies".to_string(),
            "Establish development habits".to_string(),
        ],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::competency::test_support::sample_request;
    use crate::competency::types::{DevelopmentArea, DomainProfile, PreviousAssessment};
    use std::collections::BTreeMap;

    fn profile(overall_level: u8, areas: Vec<DevelopmentArea>) -> CompetencyProfile {
        CompetencyProfile {
            overall_level,
            domain_profiles: Vec::new(),
            strengths: Vec::new(),
            development_areas: areas,
        }
    }

    fn critical_area(name: &str) -> DevelopmentArea {
        DevelopmentArea {
            competency: name.to_string(),
            current_level: 0,
            target_level: 1,
            gap: 1,
            priority: Priority::Critical,
            recommendations: Vec::new(),
        }
    }

    #[test]
    fn low_overall_level_triggers_foundational_insight() {
        let policy = CompetencyPolicy::default();
        let insights = key_insights(&profile(1, Vec::new()), &policy);
        assert!(insights.iter().any(|i| i.category == "performance"));

        let insights = key_insights(&profile(3, Vec::new()), &policy);
        assert!(insights.iter().all(|i| i.category != "performance"));
    }

    #[test]
    fn domain_imbalance_triggers_balance_insight() {
        let policy = CompetencyPolicy::default();
        let mut unbalanced = profile(3, Vec::new());
        unbalanced.domain_profiles = vec![
            DomainProfile {
                domain_id: "d1".to_string(),
                domain_name: "One".to_string(),
                level: 4,
                score: 90.0,
                competencies: Vec::new(),
            },
            DomainProfile {
                domain_id: "d2".to_string(),
                domain_name: "Two".to_string(),
                level: 1,
                score: 30.0,
                competencies: Vec::new(),
            },
        ];

        let insights = key_insights(&unbalanced, &policy);
        assert!(insights.iter().any(|i| i.category == "balance"));
    }

    #[test]
    fn critical_areas_surface_in_insights_and_immediate_actions() {
        let policy = CompetencyPolicy::default();
        let profile = profile(2, vec![critical_area("Planning"), critical_area("Budgeting")]);

        let insights = key_insights(&profile, &policy);
        assert!(insights.iter().any(|i| i.insight.starts_with("2 critical")));

        let recommendations = recommend(&profile, &policy);
        assert_eq!(recommendations.immediate.len(), 2);
        assert_eq!(recommendations.immediate[0].priority, Priority::Critical);
    }

    #[test]
    fn trends_compare_the_last_two_assessments() {
        let policy = CompetencyPolicy::default();
        let mut request = sample_request();

        let mut earlier = BTreeMap::new();
        earlier.insert("c1".to_string(), 50.0);
        earlier.insert("c2".to_string(), 70.0);
        let mut later = BTreeMap::new();
        later.insert("c1".to_string(), 65.0);
        later.insert("c2".to_string(), 68.0);

        request.historical_data.previous_assessments = vec![
            PreviousAssessment {
                id: "a1".to_string(),
                date: "2025-01-15".to_string(),
                competency_scores: earlier,
                overall_score: 60.0,
            },
            PreviousAssessment {
                id: "a2".to_string(),
                date: "2025-04-15".to_string(),
                competency_scores: later,
                overall_score: 66.0,
            },
        ];

        let trends = assessment_trends(&request, &policy);
        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].trend, Trend::Improving);
        assert_eq!(trends[0].magnitude, 15.0);
    }

    #[test]
    fn trends_need_at_least_two_assessments() {
        let policy = CompetencyPolicy::default();
        let request = sample_request();
        assert!(assessment_trends(&request, &policy).is_empty());
    }

    #[test]
    fn near_threshold_areas_become_quick_win_opportunities() {
        let result = opportunities(&profile(2, vec![critical_area("Planning")]));
        assert_eq!(result.len(), 2);
        assert!(result[0].opportunity.contains("quick wins"));
        assert!(result[1].opportunity.contains("high-impact"));
    }

    #[test]
    fn high_overall_level_suppresses_long_term_foundation_work() {
        let policy = CompetencyPolicy::default();
        let recommendations = recommend(&profile(3, Vec::new()), &policy);
        assert!(recommendations.long_term.is_empty());

        let recommendations = recommend(&profile(1, vec![critical_area("Planning")]), &policy);
        assert_eq!(recommendations.long_term.len(), 1);
    }
}
