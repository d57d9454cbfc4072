//! Adaptive difficulty: dynamic tier adjustment from performance and context.

mod analysis;
mod decision;
mod policy;
mod recommend;
mod types;

pub use policy::{DifficultyPolicy, ScoreBand};
pub use types::{
    AdaptiveDifficultyRequest, AdaptiveDifficultyResult, AdjustmentSettings, AssessmentContext,
    ChallengeLevel, CurrentPerformance, Difficulty, DifficultyAdjustment, DifficultyBounds,
    DifficultyRecommendations, DifficultyTransition, FeedbackFrequency, ImmediateAction,
    LearningPreferences, LearningProfile, LearningStyle, LongTermAction, OptimizationReport,
    OptimizationTrack, Pace, PerformanceAnalysis, PerformanceHistory, PerformanceLevel,
    PerformanceRecord, Sensitivity, ShortTermAction, SupportLevel, UpdateFrequency,
};

use attune_core::{
    Engine, EngineError, TieredRecommendations, TierShift, Trend, Validate, run_with_fallback,
};

/// The adaptive difficulty engine.
///
/// Stateless: every call is an independent pure computation over the
/// request. Construct once and share freely.
#[derive(Debug, Default)]
pub struct AdaptiveDifficulty {
    policy: DifficultyPolicy,
}

impl AdaptiveDifficulty {
    /// Engine with the default policy thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with caller-tuned policy thresholds.
    #[must_use]
    pub fn with_policy(policy: DifficultyPolicy) -> Self {
        Self { policy }
    }

    /// Recommend the next difficulty tier for this learner.
    ///
    /// Never fails: a malformed request or an internally inconsistent
    /// result yields the neutral maintain-current-difficulty fallback.
    #[tracing::instrument(skip_all, fields(user_id = %request.user_id, assessment_id = %request.assessment_id))]
    pub async fn adjust_difficulty(
        &self,
        request: AdaptiveDifficultyRequest,
    ) -> AdaptiveDifficultyResult {
        run_with_fallback(self, &request)
    }
}

impl Engine for AdaptiveDifficulty {
    type Request = AdaptiveDifficultyRequest;
    type Response = AdaptiveDifficultyResult;

    fn name(&self) -> &'static str {
        "adaptive_difficulty"
    }

    fn evaluate(&self, request: &Self::Request) -> Result<Self::Response, EngineError> {
        request.validate().map_err(EngineError::InvalidRequest)?;

        let analysis = analysis::analyze(request, &self.policy);
        let adjustment = decision::decide(request, &analysis, &self.policy);
        let recommendations = recommend::recommend(&analysis, &adjustment);
        let optimization = recommend::optimize(&analysis, &self.policy);

        tracing::debug!(
            recommended = adjustment.recommended_difficulty.as_str(),
            shift = adjustment.adjustment.as_str(),
            "difficulty decision"
        );

        let result = AdaptiveDifficultyResult {
            difficulty_adjustment: adjustment,
            performance_analysis: analysis,
            recommendations,
            optimization,
        };
        result.validate().map_err(EngineError::InvalidResult)?;
        Ok(result)
    }

    fn fallback(&self, request: &Self::Request) -> Self::Response {
        let neutral_track = || OptimizationTrack {
            current: 0.5,
            target: self.policy.target_optimality,
            improvement: self.policy.target_optimality - 0.5,
            recommendations: Vec::new(),
        };

        AdaptiveDifficultyResult {
            difficulty_adjustment: DifficultyAdjustment {
                recommended_difficulty: request.current_performance.current_difficulty,
                adjustment: TierShift::Maintain,
                confidence: 0.5,
                reasoning: "Unable to determine optimal adjustment - maintaining current difficulty"
                    .to_string(),
                factors: Vec::new(),
            },
            performance_analysis: PerformanceAnalysis {
                current_level: PerformanceLevel::MeetingExpectation,
                trend: Trend::Stable,
                volatility: 0.5,
                readiness: 0.5,
                insights: Vec::new(),
            },
            recommendations: TieredRecommendations::empty(),
            optimization: OptimizationReport {
                difficulty: neutral_track(),
                engagement: neutral_track(),
                learning: neutral_track(),
            },
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::types::*;

    /// A well-formed medium-difficulty request with unremarkable metrics.
    pub fn sample_request() -> AdaptiveDifficultyRequest {
        AdaptiveDifficultyRequest {
            user_id: "user-1".to_string(),
            assessment_id: "assessment-1".to_string(),
            current_performance: CurrentPerformance {
                current_score: 75.0,
                recent_scores: vec![70.0, 72.0, 75.0, 74.0, 76.0, 75.0],
                response_times: vec![45.0, 50.0, 40.0],
                accuracy: vec![0.5, 0.5, 0.5],
                confidence: vec![0.5, 0.5, 0.5],
                current_difficulty: Difficulty::Medium,
                questions_answered: 6,
                total_questions: 20,
            },
            learning_profile: LearningProfile {
                experience: 3.0,
                learning_style: LearningStyle::Visual,
                pace: Pace::Moderate,
                preferences: LearningPreferences {
                    challenge_level: ChallengeLevel::Challenging,
                    feedback_frequency: FeedbackFrequency::Medium,
                    support_level: SupportLevel::Moderate,
                },
            },
            historical_data: PerformanceHistory::default(),
            context: AssessmentContext {
                assessment_type: "skills-check".to_string(),
                time_pressure: false,
                fatigue: 0.8,
                stress: 0.8,
                motivation: 0.3,
            },
            adjustment_settings: AdjustmentSettings {
                sensitivity: Sensitivity::Moderate,
                update_frequency: UpdateFrequency::EveryQuestion,
                bounds: DifficultyBounds {
                    min_difficulty: Difficulty::Easy,
                    max_difficulty: Difficulty::Hard,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::sample_request;
    use super::*;

    #[tokio::test]
    async fn steady_performance_maintains_difficulty() {
        let engine = AdaptiveDifficulty::new();
        let result = engine.adjust_difficulty(sample_request()).await;

        assert_eq!(
            result.difficulty_adjustment.recommended_difficulty,
            Difficulty::Medium
        );
        assert_eq!(result.difficulty_adjustment.adjustment, TierShift::Maintain);
    }

    #[tokio::test]
    async fn malformed_request_yields_fallback_not_panic() {
        let engine = AdaptiveDifficulty::new();
        let mut request = sample_request();
        request.current_performance.current_score = f64::NAN;

        let result = engine.adjust_difficulty(request).await;

        assert_eq!(result.difficulty_adjustment.adjustment, TierShift::Maintain);
        assert_eq!(result.difficulty_adjustment.confidence, 0.5);
        assert!(result.recommendations.is_empty());
        assert!(result.difficulty_adjustment.factors.is_empty());
    }

    #[tokio::test]
    async fn fallback_preserves_current_difficulty() {
        let engine = AdaptiveDifficulty::new();
        let mut request = sample_request();
        request.user_id = String::new();
        request.current_performance.current_difficulty = Difficulty::Hard;

        let result = engine.adjust_difficulty(request).await;
        assert_eq!(
            result.difficulty_adjustment.recommended_difficulty,
            Difficulty::Hard
        );
    }

    #[tokio::test]
    async fn result_serializes_and_round_trips() {
        let engine = AdaptiveDifficulty::new();
        let result = engine.adjust_difficulty(sample_request()).await;

        let json = serde_json::to_string(&result).unwrap();
        let parsed: AdaptiveDifficultyResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[tokio::test]
    async fn custom_policy_changes_the_decision() {
        // Raise the readiness ceiling so the override can never fire.
        let mut policy = DifficultyPolicy::default();
        policy.readiness_ceiling = 2.0;
        let engine = AdaptiveDifficulty::with_policy(policy);

        let mut request = sample_request();
        request.current_performance.accuracy = vec![1.0; 5];
        request.current_performance.confidence = vec![1.0; 5];
        request.context.fatigue = 0.0;
        request.context.stress = 0.0;
        request.context.motivation = 1.0;

        let result = engine.adjust_difficulty(request).await;
        assert_eq!(result.difficulty_adjustment.adjustment, TierShift::Maintain);
    }
}
