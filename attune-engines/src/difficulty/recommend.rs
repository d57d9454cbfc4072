//! Recommendation and optimization reporting.
//!
//! Straight-line rule-to-text mapping; no planning or search.

use attune_core::{Priority, TierShift, stats};

use super::policy::DifficultyPolicy;
use super::types::{
    DifficultyAdjustment, DifficultyRecommendations, ImmediateAction, LongTermAction,
    OptimizationReport, OptimizationTrack, PerformanceAnalysis, PerformanceLevel, ShortTermAction,
};

/// Build the three-horizon recommendation set.
pub fn recommend(
    analysis: &PerformanceAnalysis,
    adjustment: &DifficultyAdjustment,
) -> DifficultyRecommendations {
    DifficultyRecommendations {
        immediate: immediate_actions(analysis, adjustment),
        short_term: short_term_actions(analysis),
        long_term: long_term_actions(analysis),
    }
}

fn immediate_actions(
    analysis: &PerformanceAnalysis,
    adjustment: &DifficultyAdjustment,
) -> Vec<ImmediateAction> {
    let mut actions = Vec::new();

    if adjustment.adjustment != TierShift::Maintain {
        let direction = match adjustment.adjustment {
            TierShift::Increase => "Increase",
            _ => "Decrease",
        };
        actions.push(ImmediateAction {
            action: format!("{direction} difficulty level"),
            priority: Priority::High,
            rationale: adjustment.reasoning.clone(),
            expected_outcome: "Optimize challenge level for better learning outcomes".to_string(),
        });
    }

    if analysis.current_level == PerformanceLevel::BelowExpectation {
        actions.push(ImmediateAction {
            action: "Provide additional support and guidance".to_string(),
            priority: Priority::Critical,
            rationale: "Performance below expectation requires immediate intervention".to_string(),
            expected_outcome: "Improve performance and confidence".to_string(),
        });
    }

    actions
}

fn short_term_actions(analysis: &PerformanceAnalysis) -> Vec<ShortTermAction> {
    let mut actions = Vec::new();

    if analysis.readiness < 0.6 {
        actions.push(ShortTermAction {
            action: "Optimize learning environment and reduce distractions".to_string(),
            timeframe: "Next session".to_string(),
            rationale: "Low readiness indicates need for better learning conditions".to_string(),
            success_metrics: vec![
                "Improved focus".to_string(),
                "Better performance".to_string(),
                "Higher engagement".to_string(),
            ],
        });
    }

    actions
}

fn long_term_actions(analysis: &PerformanceAnalysis) -> Vec<LongTermAction> {
    let mut actions = Vec::new();

    if analysis.volatility > 0.3 {
        actions.push(LongTermAction {
            action: "Develop consistent learning strategies and habits".to_string(),
            timeframe: "Next 2 weeks".to_string(),
            rationale: "High performance volatility indicates need for more consistent approach"
                .to_string(),
            milestones: vec![
                "Establish study routine".to_string(),
                "Improve consistency".to_string(),
                "Reduce performance volatility".to_string(),
            ],
        });
    }

    actions
}

/// Build the current-vs-target optimality report.
pub fn optimize(analysis: &PerformanceAnalysis, policy: &DifficultyPolicy) -> OptimizationReport {
    OptimizationReport {
        difficulty: track(
            difficulty_optimality(analysis),
            policy,
            &[
                "Fine-tune difficulty adjustment thresholds",
                "Consider individual learning preferences",
                "Implement adaptive feedback mechanisms",
            ],
        ),
        engagement: track(
            analysis.readiness,
            policy,
            &[
                "Implement gamification elements",
                "Provide immediate feedback and rewards",
                "Create engaging learning scenarios",
            ],
        ),
        learning: track(
            // Lower volatility reads as steadier learning.
            1.0 - analysis.volatility,
            policy,
            &[
                "Implement spaced repetition techniques",
                "Provide varied question types",
                "Encourage active learning strategies",
            ],
        ),
    }
}

fn track(current: f64, policy: &DifficultyPolicy, levers: &[&str]) -> OptimizationTrack {
    let target = policy.target_optimality;
    let improvement = target - current;
    let recommendations = if improvement > 0.1 {
        levers.iter().map(|lever| (*lever).to_string()).collect()
    } else {
        Vec::new()
    };
    OptimizationTrack {
        current,
        target,
        improvement,
        recommendations,
    }
}

/// How close the current tier sits to the sweet spot.
fn difficulty_optimality(analysis: &PerformanceAnalysis) -> f64 {
    let mut optimality = 0.5;

    optimality += match analysis.current_level {
        PerformanceLevel::MeetingExpectation => 0.3,
        PerformanceLevel::ExceedingExpectation => 0.2,
        PerformanceLevel::BelowExpectation => -0.2,
    };
    optimality += (analysis.readiness - 0.5) * 0.2;
    optimality += (1.0 - analysis.volatility) * 0.1;

    stats::clamp_unit(optimality)
}
