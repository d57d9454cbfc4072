//! Tier decision rules.
//!
//! Ordered rule application over the analyzed metrics. The readiness
//! override replaces the trend-based candidate rather than compounding with
//! it, so the recommendation never moves more than one rung from the
//! current tier in a single call.

use attune_core::{OrdinalTier, TierShift, Trend, WeightedFactor, stats};

use super::policy::DifficultyPolicy;
use super::types::{
    AdaptiveDifficultyRequest, Difficulty, DifficultyAdjustment, PerformanceAnalysis,
    PerformanceLevel,
};

/// Produce the full adjustment decision for a validated request.
pub fn decide(
    request: &AdaptiveDifficultyRequest,
    analysis: &PerformanceAnalysis,
    policy: &DifficultyPolicy,
) -> DifficultyAdjustment {
    let current = request.current_performance.current_difficulty;
    let recommended = recommended_difficulty(request, analysis, policy);
    let adjustment = TierShift::between(current, recommended);

    DifficultyAdjustment {
        recommended_difficulty: recommended,
        adjustment,
        confidence: adjustment_confidence(request, analysis, policy),
        reasoning: reasoning(analysis, adjustment),
        factors: adjustment_factors(request, analysis),
    }
}

/// Apply the ordered decision rules and clamp onto the caller's bounds.
pub fn recommended_difficulty(
    request: &AdaptiveDifficultyRequest,
    analysis: &PerformanceAnalysis,
    policy: &DifficultyPolicy,
) -> Difficulty {
    let current = request.current_performance.current_difficulty;

    let mut recommended = current;
    if analysis.current_level == PerformanceLevel::ExceedingExpectation
        && analysis.trend == Trend::Improving
    {
        recommended = current.step_up();
    } else if analysis.current_level == PerformanceLevel::BelowExpectation
        && analysis.trend == Trend::Declining
    {
        recommended = current.step_down();
    }

    // Readiness override: last-applied wins, replacing the trend candidate.
    if analysis.readiness < policy.readiness_floor {
        recommended = current.step_down();
    } else if analysis.readiness > policy.readiness_ceiling {
        recommended = current.step_up();
    }

    let bounds = &request.adjustment_settings.bounds;
    recommended.clamp_between(bounds.min_difficulty, bounds.max_difficulty)
}

/// Confidence in the decision: consistency, data volume, context stability.
///
/// A weighted sum, not a probability.
pub fn adjustment_confidence(
    request: &AdaptiveDifficultyRequest,
    analysis: &PerformanceAnalysis,
    policy: &DifficultyPolicy,
) -> f64 {
    let mut confidence = 0.5;

    confidence += (1.0 - analysis.volatility) * 0.2;

    let samples = request.current_performance.recent_scores.len() as f64;
    let volume = (samples / policy.sample_target as f64).min(1.0);
    confidence += volume * 0.2;

    let context = &request.context;
    let stability = 1.0 - (context.fatigue + context.stress) / 2.0;
    confidence += stability * 0.1;

    stats::clamp_unit(confidence)
}

/// Human-readable justification for the adjustment direction.
pub fn reasoning(analysis: &PerformanceAnalysis, adjustment: TierShift) -> String {
    let level = analysis.current_level.as_str();
    let trend = analysis.trend.as_str();
    match adjustment {
        TierShift::Increase => format!(
            "Performance is {level} with {trend} trend, indicating readiness for increased challenge"
        ),
        TierShift::Decrease => format!(
            "Performance is {level} with {trend} trend, suggesting need for reduced difficulty"
        ),
        TierShift::Maintain => format!(
            "Performance is {level} with {trend} trend, maintaining current difficulty level"
        ),
    }
}

/// The weighted factor breakdown behind the decision.
pub fn adjustment_factors(
    request: &AdaptiveDifficultyRequest,
    analysis: &PerformanceAnalysis,
) -> Vec<WeightedFactor> {
    let level_impact = match analysis.current_level {
        PerformanceLevel::ExceedingExpectation => 0.8,
        PerformanceLevel::BelowExpectation => -0.8,
        PerformanceLevel::MeetingExpectation => 0.0,
    };
    let trend_impact = match analysis.trend {
        Trend::Improving => 0.6,
        Trend::Declining => -0.6,
        Trend::Stable => 0.0,
    };
    let context = &request.context;
    let context_impact = context.motivation - (context.fatigue + context.stress) / 2.0;

    vec![
        WeightedFactor {
            factor: "Performance Level".to_string(),
            impact: level_impact,
            weight: 0.4,
        },
        WeightedFactor {
            factor: "Performance Trend".to_string(),
            impact: trend_impact,
            weight: 0.3,
        },
        WeightedFactor {
            factor: "Learning Readiness".to_string(),
            // Center the unit-interval readiness onto [-1, 1].
            impact: (analysis.readiness - 0.5) * 2.0,
            weight: 0.2,
        },
        WeightedFactor {
            factor: "Context Factors".to_string(),
            impact: context_impact,
            weight: 0.1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::test_support::sample_request;
    use attune_core::{Insight, Validate};

    fn analysis_with(
        level: PerformanceLevel,
        trend: Trend,
        volatility: f64,
        readiness: f64,
    ) -> PerformanceAnalysis {
        PerformanceAnalysis {
            current_level: level,
            trend,
            volatility,
            readiness,
            insights: Vec::<Insight>::new(),
        }
    }

    #[test]
    fn exceeding_and_improving_steps_up() {
        let policy = DifficultyPolicy::default();
        let request = sample_request();
        let analysis = analysis_with(
            PerformanceLevel::ExceedingExpectation,
            Trend::Improving,
            0.1,
            0.6,
        );
        assert_eq!(
            recommended_difficulty(&request, &analysis, &policy),
            Difficulty::Hard
        );
    }

    #[test]
    fn below_and_declining_steps_down() {
        let policy = DifficultyPolicy::default();
        let request = sample_request();
        let analysis = analysis_with(
            PerformanceLevel::BelowExpectation,
            Trend::Declining,
            0.1,
            0.6,
        );
        assert_eq!(
            recommended_difficulty(&request, &analysis, &policy),
            Difficulty::Easy
        );
    }

    #[test]
    fn meeting_expectation_with_stable_trend_maintains() {
        let policy = DifficultyPolicy::default();
        let request = sample_request();
        let analysis = analysis_with(
            PerformanceLevel::MeetingExpectation,
            Trend::Stable,
            0.1,
            0.6,
        );
        assert_eq!(
            recommended_difficulty(&request, &analysis, &policy),
            Difficulty::Medium
        );
    }

    #[test]
    fn low_readiness_overrides_but_moves_one_step_only() {
        let policy = DifficultyPolicy::default();
        let mut request = sample_request();
        request.current_performance.current_difficulty = Difficulty::Hard;

        // Trend rules alone would step hard -> medium; the readiness
        // override replaces that candidate, still landing one rung down.
        let analysis = analysis_with(
            PerformanceLevel::BelowExpectation,
            Trend::Declining,
            0.1,
            0.2,
        );
        assert_eq!(
            recommended_difficulty(&request, &analysis, &policy),
            Difficulty::Medium
        );
    }

    #[test]
    fn high_readiness_forces_an_upward_step() {
        let policy = DifficultyPolicy::default();
        let request = sample_request();
        let analysis = analysis_with(
            PerformanceLevel::MeetingExpectation,
            Trend::Stable,
            0.1,
            0.9,
        );
        assert_eq!(
            recommended_difficulty(&request, &analysis, &policy),
            Difficulty::Hard
        );
    }

    #[test]
    fn recommendation_is_clamped_to_caller_bounds() {
        let policy = DifficultyPolicy::default();
        let mut request = sample_request();
        request.adjustment_settings.bounds.max_difficulty = Difficulty::Medium;

        let analysis = analysis_with(
            PerformanceLevel::ExceedingExpectation,
            Trend::Improving,
            0.1,
            0.9,
        );
        assert_eq!(
            recommended_difficulty(&request, &analysis, &policy),
            Difficulty::Medium
        );
    }

    #[test]
    fn confidence_grows_with_data_volume() {
        let policy = DifficultyPolicy::default();
        let analysis = analysis_with(
            PerformanceLevel::MeetingExpectation,
            Trend::Stable,
            0.0,
            0.6,
        );

        let mut sparse = sample_request();
        sparse.current_performance.recent_scores = vec![80.0];
        let mut dense = sample_request();
        dense.current_performance.recent_scores = vec![80.0; 12];

        let sparse_confidence = adjustment_confidence(&sparse, &analysis, &policy);
        let dense_confidence = adjustment_confidence(&dense, &analysis, &policy);
        assert!(dense_confidence > sparse_confidence);
        assert!(dense_confidence <= 1.0);
    }

    #[test]
    fn confidence_saturates_at_sample_target() {
        let policy = DifficultyPolicy::default();
        let analysis = analysis_with(
            PerformanceLevel::MeetingExpectation,
            Trend::Stable,
            0.0,
            0.6,
        );

        let mut at_target = sample_request();
        at_target.current_performance.recent_scores = vec![80.0; 10];
        let mut beyond = sample_request();
        beyond.current_performance.recent_scores = vec![80.0; 40];

        assert_eq!(
            adjustment_confidence(&at_target, &analysis, &policy),
            adjustment_confidence(&beyond, &analysis, &policy)
        );
    }

    #[test]
    fn decision_factors_validate_and_cover_all_inputs() {
        let policy = DifficultyPolicy::default();
        let request = sample_request();
        let analysis = analysis_with(
            PerformanceLevel::ExceedingExpectation,
            Trend::Improving,
            0.2,
            0.9,
        );

        let decision = decide(&request, &analysis, &policy);
        assert_eq!(decision.factors.len(), 4);
        assert!(decision.validate().is_ok());
        assert!(decision.reasoning.contains("exceeding expectation"));
    }
}
