//! Request and result types for the adaptive difficulty engine.

use serde::{Deserialize, Serialize};

use attune_core::validate::{self, Validate};
use attune_core::{
    Insight, OrdinalTier, Priority, TieredRecommendations, TierShift, Trend, ValidationError,
    WeightedFactor,
};

/// The three-tier difficulty ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

impl OrdinalTier for Difficulty {
    fn rank(self) -> u8 {
        self as u8
    }

    fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Easy),
            1 => Some(Self::Medium),
            2 => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Live performance measurements for the current assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPerformance {
    /// Current score on the 0–100 scale.
    pub current_score: f64,
    /// Most recent scores, oldest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recent_scores: Vec<f64>,
    /// Seconds spent per question.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response_times: Vec<f64>,
    /// Per-question accuracy samples in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accuracy: Vec<f64>,
    /// Per-question self-reported confidence in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub confidence: Vec<f64>,
    pub current_difficulty: Difficulty,
    pub questions_answered: u32,
    pub total_questions: u32,
}

impl Validate for CurrentPerformance {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::finite("current_performance.current_score", self.current_score)?;
        validate::all_finite("current_performance.recent_scores", &self.recent_scores)?;
        validate::all_finite("current_performance.response_times", &self.response_times)?;
        validate::all_unit("current_performance.accuracy", &self.accuracy)?;
        validate::all_unit("current_performance.confidence", &self.confidence)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    Reading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pace {
    Slow,
    Moderate,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeLevel {
    Comfortable,
    Challenging,
    VeryChallenging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackFrequency {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportLevel {
    Minimal,
    Moderate,
    Extensive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPreferences {
    pub challenge_level: ChallengeLevel,
    pub feedback_frequency: FeedbackFrequency,
    pub support_level: SupportLevel,
}

/// How the learner prefers to work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningProfile {
    /// Years of relevant experience.
    pub experience: f64,
    pub learning_style: LearningStyle,
    pub pace: Pace,
    pub preferences: LearningPreferences,
}

impl Validate for LearningProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::finite("learning_profile.experience", self.experience)
    }
}

/// One historical assessment outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub date: String,
    pub score: f64,
    pub difficulty: Difficulty,
    pub time_spent: f64,
    pub accuracy: f64,
}

impl Validate for PerformanceRecord {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::finite("performance_history.score", self.score)?;
        validate::finite("performance_history.time_spent", self.time_spent)?;
        validate::finite("performance_history.accuracy", self.accuracy)
    }
}

/// A past difficulty change and whether it worked out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyTransition {
    pub from_difficulty: Difficulty,
    pub to_difficulty: Difficulty,
    pub reason: String,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceHistory {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub performance_history: Vec<PerformanceRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub difficulty_progression: Vec<DifficultyTransition>,
}

impl Validate for PerformanceHistory {
    fn validate(&self) -> Result<(), ValidationError> {
        for record in &self.performance_history {
            record.validate()?;
        }
        Ok(())
    }
}

/// Situational modifiers for the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentContext {
    pub assessment_type: String,
    pub time_pressure: bool,
    /// Fatigue level in `[0, 1]`; higher is more fatigued.
    pub fatigue: f64,
    /// Stress level in `[0, 1]`.
    pub stress: f64,
    /// Motivation level in `[0, 1]`.
    pub motivation: f64,
}

impl Validate for AssessmentContext {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::unit("context.fatigue", self.fatigue)?;
        validate::unit("context.stress", self.stress)?;
        validate::unit("context.motivation", self.motivation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensitivity {
    Conservative,
    Moderate,
    Aggressive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateFrequency {
    Immediate,
    EveryQuestion,
    EverySection,
    EndOfAssessment,
}

/// Caller-specified limits on how far the tier may move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyBounds {
    pub min_difficulty: Difficulty,
    pub max_difficulty: Difficulty,
}

impl Validate for DifficultyBounds {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.min_difficulty > self.max_difficulty {
            return Err(ValidationError::InvertedBounds {
                field: "adjustment_settings.bounds".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentSettings {
    pub sensitivity: Sensitivity,
    pub update_frequency: UpdateFrequency,
    pub bounds: DifficultyBounds,
}

/// The full adaptive difficulty request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveDifficultyRequest {
    pub user_id: String,
    pub assessment_id: String,
    pub current_performance: CurrentPerformance,
    pub learning_profile: LearningProfile,
    #[serde(default)]
    pub historical_data: PerformanceHistory,
    pub context: AssessmentContext,
    pub adjustment_settings: AdjustmentSettings,
}

impl Validate for AdaptiveDifficultyRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty("user_id", &self.user_id)?;
        validate::non_empty("assessment_id", &self.assessment_id)?;
        self.current_performance.validate()?;
        self.learning_profile.validate()?;
        self.historical_data.validate()?;
        self.context.validate()?;
        self.adjustment_settings.bounds.validate()
    }
}

/// Where the current score sits relative to the expected band for the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    BelowExpectation,
    MeetingExpectation,
    ExceedingExpectation,
}

impl PerformanceLevel {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BelowExpectation => "below expectation",
            Self::MeetingExpectation => "meeting expectation",
            Self::ExceedingExpectation => "exceeding expectation",
        }
    }
}

/// Analyzer output: summary statistics over the raw performance arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    pub current_level: PerformanceLevel,
    pub trend: Trend,
    /// Normalized score spread in `[0, 1]`.
    pub volatility: f64,
    /// Composite readiness for increased challenge, in `[0, 1]`.
    pub readiness: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub insights: Vec<Insight>,
}

impl Validate for PerformanceAnalysis {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::unit("performance_analysis.volatility", self.volatility)?;
        validate::unit("performance_analysis.readiness", self.readiness)?;
        for insight in &self.insights {
            insight.validate()?;
        }
        Ok(())
    }
}

/// The decision: which tier to run next and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyAdjustment {
    pub recommended_difficulty: Difficulty,
    pub adjustment: TierShift,
    pub confidence: f64,
    pub reasoning: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub factors: Vec<WeightedFactor>,
}

impl Validate for DifficultyAdjustment {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::unit("difficulty_adjustment.confidence", self.confidence)?;
        for factor in &self.factors {
            factor.validate()?;
        }
        Ok(())
    }
}

/// An action for the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImmediateAction {
    pub action: String,
    pub priority: Priority,
    pub rationale: String,
    pub expected_outcome: String,
}

impl Validate for ImmediateAction {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty("recommendations.immediate.action", &self.action)
    }
}

/// An action for the next few sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortTermAction {
    pub action: String,
    pub timeframe: String,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub success_metrics: Vec<String>,
}

impl Validate for ShortTermAction {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty("recommendations.short_term.action", &self.action)
    }
}

/// A structural change over the coming weeks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongTermAction {
    pub action: String,
    pub timeframe: String,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<String>,
}

impl Validate for LongTermAction {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty("recommendations.long_term.action", &self.action)
    }
}

pub type DifficultyRecommendations =
    TieredRecommendations<ImmediateAction, ShortTermAction, LongTermAction>;

/// One current-vs-target optimality track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationTrack {
    pub current: f64,
    pub target: f64,
    /// `target - current`; negative when the target is already exceeded.
    pub improvement: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

impl Validate for OptimizationTrack {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::unit("optimization.current", self.current)?;
        validate::unit("optimization.target", self.target)?;
        validate::finite("optimization.improvement", self.improvement)
    }
}

/// Current vs. target optimality across the three tracked dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub difficulty: OptimizationTrack,
    pub engagement: OptimizationTrack,
    pub learning: OptimizationTrack,
}

impl Validate for OptimizationReport {
    fn validate(&self) -> Result<(), ValidationError> {
        self.difficulty.validate()?;
        self.engagement.validate()?;
        self.learning.validate()
    }
}

/// The full adaptive difficulty result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveDifficultyResult {
    pub difficulty_adjustment: DifficultyAdjustment,
    pub performance_analysis: PerformanceAnalysis,
    pub recommendations: DifficultyRecommendations,
    pub optimization: OptimizationReport,
}

impl Validate for AdaptiveDifficultyResult {
    fn validate(&self) -> Result<(), ValidationError> {
        self.difficulty_adjustment.validate()?;
        self.performance_analysis.validate()?;
        self.recommendations.validate()?;
        self.optimization.validate()
    }
}
