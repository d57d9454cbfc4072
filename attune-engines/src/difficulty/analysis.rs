//! Performance analysis: raw sample arrays to summary statistics.

use attune_core::{ImpactLevel, Insight, Trend, stats};

use super::policy::DifficultyPolicy;
use super::types::{
    AdaptiveDifficultyRequest, CurrentPerformance, PerformanceAnalysis, PerformanceLevel,
};

/// Run the full analyzer over a validated request.
pub fn analyze(request: &AdaptiveDifficultyRequest, policy: &DifficultyPolicy) -> PerformanceAnalysis {
    let performance = &request.current_performance;
    PerformanceAnalysis {
        current_level: performance_level(performance, policy),
        trend: score_trend(&performance.recent_scores, policy),
        volatility: stats::normalized_volatility(&performance.recent_scores, policy.volatility_scale),
        readiness: readiness(request, policy),
        insights: extract_insights(performance, policy),
    }
}

/// Compare the current score against the expected band for the tier.
pub fn performance_level(
    performance: &CurrentPerformance,
    policy: &DifficultyPolicy,
) -> PerformanceLevel {
    let band = policy.expected_band(performance.current_difficulty);
    if performance.current_score < band.min {
        PerformanceLevel::BelowExpectation
    } else if performance.current_score > band.max {
        PerformanceLevel::ExceedingExpectation
    } else {
        PerformanceLevel::MeetingExpectation
    }
}

/// Classify the recent-score trend using two adjacent windows.
pub fn score_trend(recent_scores: &[f64], policy: &DifficultyPolicy) -> Trend {
    let delta = stats::windowed_delta(recent_scores, policy.trend_window);
    Trend::classify(delta, policy.trend_threshold)
}

/// Composite readiness for increased challenge.
///
/// A 0.5 base plus weighted contributions from accuracy, self-confidence,
/// and the situational context, clamped onto `[0, 1]`.
pub fn readiness(request: &AdaptiveDifficultyRequest, _policy: &DifficultyPolicy) -> f64 {
    let performance = &request.current_performance;
    let context = &request.context;

    let mut readiness = 0.5;

    if let Some(avg_accuracy) = stats::mean(&performance.accuracy) {
        readiness += avg_accuracy * 0.2;
    }
    if let Some(avg_confidence) = stats::mean(&performance.confidence) {
        readiness += avg_confidence * 0.2;
    }

    readiness += (1.0 - context.fatigue) * 0.1;
    readiness += (1.0 - context.stress) * 0.1;
    readiness += context.motivation * 0.1;

    stats::clamp_unit(readiness)
}

/// Emit categorized insights for notable patterns in the raw samples.
pub fn extract_insights(
    performance: &CurrentPerformance,
    policy: &DifficultyPolicy,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some(avg_accuracy) = stats::mean(&performance.accuracy) {
        if avg_accuracy < policy.low_accuracy_threshold {
            insights.push(Insight {
                insight: "Low accuracy indicates need for difficulty reduction".to_string(),
                category: "accuracy".to_string(),
                impact: ImpactLevel::High,
                confidence: 0.9,
            });
        }
    }

    if let Some(avg_response_time) = stats::mean(&performance.response_times) {
        if avg_response_time > policy.slow_response_threshold {
            insights.push(Insight {
                insight: "Slow response times suggest difficulty may be too high".to_string(),
                category: "response_time".to_string(),
                impact: ImpactLevel::Medium,
                confidence: 0.8,
            });
        }
    }

    if let Some(avg_confidence) = stats::mean(&performance.confidence) {
        if avg_confidence < policy.low_confidence_threshold {
            insights.push(Insight {
                insight: "Low confidence indicates need for support or difficulty adjustment"
                    .to_string(),
                category: "confidence".to_string(),
                impact: ImpactLevel::Medium,
                confidence: 0.85,
            });
        }
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::test_support::sample_request;
    use crate::difficulty::types::Difficulty;

    #[test]
    fn performance_level_uses_the_band_for_the_current_tier() {
        let policy = DifficultyPolicy::default();
        let mut request = sample_request();
        request.current_performance.current_difficulty = Difficulty::Medium;

        request.current_performance.current_score = 55.0;
        assert_eq!(
            performance_level(&request.current_performance, &policy),
            PerformanceLevel::BelowExpectation
        );

        request.current_performance.current_score = 75.0;
        assert_eq!(
            performance_level(&request.current_performance, &policy),
            PerformanceLevel::MeetingExpectation
        );

        request.current_performance.current_score = 95.0;
        assert_eq!(
            performance_level(&request.current_performance, &policy),
            PerformanceLevel::ExceedingExpectation
        );
    }

    #[test]
    fn band_edges_count_as_meeting_expectation() {
        let policy = DifficultyPolicy::default();
        let mut request = sample_request();
        request.current_performance.current_difficulty = Difficulty::Medium;

        for edge in [60.0, 90.0] {
            request.current_performance.current_score = edge;
            assert_eq!(
                performance_level(&request.current_performance, &policy),
                PerformanceLevel::MeetingExpectation
            );
        }
    }

    #[test]
    fn trend_matches_specified_boundary_sequences() {
        let policy = DifficultyPolicy::default();
        assert_eq!(
            score_trend(&[50.0, 50.0, 50.0, 80.0, 80.0, 80.0], &policy),
            Trend::Improving
        );
        assert_eq!(
            score_trend(&[80.0, 80.0, 80.0, 50.0, 50.0, 50.0], &policy),
            Trend::Declining
        );
        assert_eq!(
            score_trend(&[60.0, 61.0, 59.0, 60.0, 60.0, 61.0], &policy),
            Trend::Stable
        );
    }

    #[test]
    fn trend_is_stable_with_fewer_than_window_samples() {
        let policy = DifficultyPolicy::default();
        assert_eq!(score_trend(&[], &policy), Trend::Stable);
        assert_eq!(score_trend(&[90.0, 95.0], &policy), Trend::Stable);
    }

    #[test]
    fn readiness_stays_in_unit_interval_at_extremes() {
        let policy = DifficultyPolicy::default();

        let mut request = sample_request();
        request.current_performance.accuracy = vec![1.0; 5];
        request.current_performance.confidence = vec![1.0; 5];
        request.context.fatigue = 0.0;
        request.context.stress = 0.0;
        request.context.motivation = 1.0;
        assert_eq!(readiness(&request, &policy), 1.0);

        request.current_performance.accuracy = vec![0.0; 5];
        request.current_performance.confidence = vec![0.0; 5];
        request.context.fatigue = 1.0;
        request.context.stress = 1.0;
        request.context.motivation = 0.0;
        assert!((readiness(&request, &policy) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn readiness_without_samples_depends_only_on_context() {
        let policy = DifficultyPolicy::default();
        let mut request = sample_request();
        request.current_performance.accuracy = Vec::new();
        request.current_performance.confidence = Vec::new();
        request.context.fatigue = 0.5;
        request.context.stress = 0.5;
        request.context.motivation = 0.5;
        // 0.5 + 0.05 + 0.05 + 0.05
        assert!((readiness(&request, &policy) - 0.65).abs() < 1e-12);
    }

    #[test]
    fn insights_flag_low_accuracy_and_slow_responses() {
        let policy = DifficultyPolicy::default();
        let mut request = sample_request();
        request.current_performance.accuracy = vec![0.4, 0.5];
        request.current_performance.response_times = vec![150.0, 180.0];
        request.current_performance.confidence = vec![0.9];

        let insights = extract_insights(&request.current_performance, &policy);
        let categories: Vec<&str> = insights.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(categories, vec!["accuracy", "response_time"]);
    }

    #[test]
    fn no_insights_for_unremarkable_performance() {
        let policy = DifficultyPolicy::default();
        let mut request = sample_request();
        request.current_performance.accuracy = vec![0.9];
        request.current_performance.confidence = vec![0.8];
        request.current_performance.response_times = vec![30.0];

        assert!(extract_insights(&request.current_performance, &policy).is_empty());
    }
}
