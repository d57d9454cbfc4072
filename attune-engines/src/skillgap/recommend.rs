//! Tiered recommendations from the gap analysis.

use attune_core::Priority;

use super::gaps::gap_timeframe;
use super::policy::SkillGapPolicy;
use super::types::{
    GapAnalysis, ImmediateSkillAction, LongTermSkillAction, ShortTermSkillAction,
    SkillGapAnalysisRequest, SkillGapRecommendations,
};

/// Build the three-horizon recommendation set.
pub fn recommend(
    request: &SkillGapAnalysisRequest,
    analysis: &GapAnalysis,
    policy: &SkillGapPolicy,
) -> SkillGapRecommendations {
    SkillGapRecommendations {
        immediate: immediate_actions(analysis, policy),
        short_term: short_term_actions(analysis, policy),
        long_term: long_term_actions(request, analysis, policy),
    }
}

fn immediate_actions(analysis: &GapAnalysis, policy: &SkillGapPolicy) -> Vec<ImmediateSkillAction> {
    let mut actions = Vec::new();

    for gap in analysis.critical_gaps.iter().take(policy.critical_focus) {
        let timeframe = gap_timeframe(gap.gap);
        actions.push(ImmediateSkillAction {
            action: format!("Address critical gap in {}", gap.skill_name),
            skill: gap.skill_name.clone(),
            priority: Priority::Critical,
            rationale: format!(
                "Critical skill gap ({} levels) with high impact ({:.1}%)",
                gap.gap,
                gap.impact * 100.0
            ),
            expected_outcome: format!("Achieve target level within {timeframe}"),
            timeframe,
        });
    }

    for win in analysis.quick_wins.iter().take(policy.quick_win_focus) {
        actions.push(ImmediateSkillAction {
            action: format!("Quick win: Improve {}", win.skill_name),
            skill: win.skill_name.clone(),
            priority: Priority::High,
            rationale: "Low effort, high impact improvement opportunity".to_string(),
            expected_outcome: "Achieve target level quickly".to_string(),
            timeframe: win.timeframe.clone(),
        });
    }

    actions
}

fn short_term_actions(analysis: &GapAnalysis, policy: &SkillGapPolicy) -> Vec<ShortTermSkillAction> {
    let high_priority: Vec<String> = analysis
        .category_gaps
        .iter()
        .flat_map(|category| &category.skills)
        .filter(|skill| skill.priority == Priority::High && skill.gap > 0.0)
        .take(policy.high_priority_focus)
        .map(|skill| skill.skill_name.clone())
        .collect();

    if high_priority.is_empty() {
        return Vec::new();
    }

    vec![ShortTermSkillAction {
        action: "Address high-priority skill gaps".to_string(),
        skills: high_priority,
        timeframe: "Next 3 months".to_string(),
        rationale: "Focus on high-priority skills for balanced development".to_string(),
        success_metrics: vec![
            "Achieve target levels".to_string(),
            "Improve overall skill score".to_string(),
            "Reduce critical gaps".to_string(),
        ],
    }]
}

fn long_term_actions(
    request: &SkillGapAnalysisRequest,
    analysis: &GapAnalysis,
    policy: &SkillGapPolicy,
) -> Vec<LongTermSkillAction> {
    if analysis.overall_gap <= policy.overall_gap_threshold {
        return Vec::new();
    }

    vec![LongTermSkillAction {
        action: "Develop comprehensive skill foundation".to_string(),
        skills: request
            .skill_framework
            .categories
            .iter()
            .flat_map(|category| &category.skills)
            .map(|skill| skill.name.clone())
            .collect(),
        timeframe: "Next 12 months".to_string(),
        rationale: "Significant skill gaps require systematic development approach".to_string(),
        milestones: vec![
            "Achieve intermediate levels".to_string(),
            "Balance skill categories".to_string(),
            "Establish learning habits".to_string(),
        ],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skillgap::gaps;
    use crate::skillgap::test_support::sample_request;

    #[test]
    fn critical_gaps_lead_the_immediate_actions() {
        let policy = SkillGapPolicy::default();
        let request = sample_request();
        let analysis = gaps::analyze(&request, &policy);

        let recommendations = recommend(&request, &analysis, &policy);
        assert!(!recommendations.immediate.is_empty());
        assert_eq!(recommendations.immediate[0].priority, Priority::Critical);
        assert!(recommendations.immediate[0].action.contains("Rust"));
    }

    #[test]
    fn quick_wins_follow_as_high_priority_actions() {
        let policy = SkillGapPolicy::default();
        let request = sample_request();
        let analysis = gaps::analyze(&request, &policy);

        let recommendations = recommend(&request, &analysis, &policy);
        assert!(
            recommendations
                .immediate
                .iter()
                .any(|action| action.action.starts_with("Quick win"))
        );
    }

    #[test]
    fn modest_overall_gap_suppresses_the_foundation_action() {
        let policy = SkillGapPolicy::default();
        let request = sample_request();
        let mut analysis = gaps::analyze(&request, &policy);
        analysis.overall_gap = 10.0;

        let recommendations = recommend(&request, &analysis, &policy);
        assert!(recommendations.long_term.is_empty());
    }

    #[test]
    fn large_overall_gap_triggers_the_foundation_action() {
        let policy = SkillGapPolicy::default();
        let request = sample_request();
        let mut analysis = gaps::analyze(&request, &policy);
        analysis.overall_gap = 55.0;

        let recommendations = recommend(&request, &analysis, &policy);
        assert_eq!(recommendations.long_term.len(), 1);
        // The foundation action spans every skill in the framework.
        assert_eq!(recommendations.long_term[0].skills.len(), 3);
    }
}
