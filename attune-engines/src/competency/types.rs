//! Request and result types for the competency mapping engine.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use attune_core::validate::{self, Validate};
use attune_core::{Insight, Opportunity, Priority, TieredRecommendations, Trend, ValidationError};

fn default_true() -> bool {
    true
}

/// One proficiency level within a competency definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub level: u8,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indicators: Vec<String>,
}

/// A single competency and its level ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competency {
    pub id: String,
    pub name: String,
    pub description: String,
    pub levels: Vec<LevelDefinition>,
}

/// A domain grouping related competencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub description: String,
    pub competencies: Vec<Competency>,
}

/// The competency framework the profile is mapped against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyFramework {
    pub id: String,
    pub name: String,
    pub version: String,
    pub domains: Vec<Domain>,
}

impl CompetencyFramework {
    /// Resolve a competency id to its display name, falling back to the id.
    #[must_use]
    pub fn competency_name(&self, competency_id: &str) -> String {
        self.domains
            .iter()
            .flat_map(|domain| &domain.competencies)
            .find(|competency| competency.id == competency_id)
            .map(|competency| competency.name.clone())
            .unwrap_or_else(|| competency_id.to_string())
    }
}

/// One answered assessment question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub question_id: String,
    pub competency_id: String,
    pub domain_id: String,
    /// Free-form answer payload; quality is judged structurally.
    pub answer: serde_json::Value,
    pub confidence: f64,
    pub time_spent: f64,
}

impl Validate for AssessmentResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::unit("assessment_data.responses.confidence", self.confidence)?;
        validate::finite("assessment_data.responses.time_spent", self.time_spent)
    }
}

/// A previously observed per-competency movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternTrend {
    pub competency: String,
    pub direction: Trend,
    pub magnitude: f64,
}

/// Caller-observed response patterns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponsePatterns {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weaknesses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trends: Vec<PatternTrend>,
}

/// The raw assessment payload to score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentData {
    pub responses: Vec<AssessmentResponse>,
    /// Pre-aggregated scores keyed by competency id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub patterns: ResponsePatterns,
}

impl Validate for AssessmentData {
    fn validate(&self) -> Result<(), ValidationError> {
        for response in &self.responses {
            response.validate()?;
        }
        for (_, &score) in &self.scores {
            validate::finite("assessment_data.scores", score)?;
        }
        for trend in &self.patterns.trends {
            validate::finite("assessment_data.patterns.trends.magnitude", trend.magnitude)?;
        }
        Ok(())
    }
}

/// A completed historical assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviousAssessment {
    pub id: String,
    pub date: String,
    pub competency_scores: BTreeMap<String, f64>,
    pub overall_score: f64,
}

impl Validate for PreviousAssessment {
    fn validate(&self) -> Result<(), ValidationError> {
        for (_, &score) in &self.competency_scores {
            validate::finite("historical_data.previous_assessments.competency_scores", score)?;
        }
        validate::finite(
            "historical_data.previous_assessments.overall_score",
            self.overall_score,
        )
    }
}

/// A logged development activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentActivity {
    pub id: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub competency_id: String,
    pub date: String,
    pub impact: f64,
}

impl Validate for DevelopmentActivity {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::unit("historical_data.development_activities.impact", self.impact)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompetencyHistory {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous_assessments: Vec<PreviousAssessment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub development_activities: Vec<DevelopmentActivity>,
}

impl Validate for CompetencyHistory {
    fn validate(&self) -> Result<(), ValidationError> {
        for assessment in &self.previous_assessments {
            assessment.validate()?;
        }
        for activity in &self.development_activities {
            activity.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Basic,
    Detailed,
    Comprehensive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingCadence {
    Immediate,
    Daily,
    Weekly,
    Monthly,
}

/// Engine configuration supplied per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingSettings {
    pub granularity: Granularity,
    pub update_frequency: MappingCadence,
    #[serde(default = "default_true")]
    pub include_trends: bool,
    #[serde(default = "default_true")]
    pub include_recommendations: bool,
    /// Anchor date for development-path milestones. Supplied by the caller
    /// so repeated calls with the same request produce the same plan.
    pub plan_start: NaiveDate,
}

/// The full competency mapping request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyMappingRequest {
    pub user_id: String,
    pub competency_framework: CompetencyFramework,
    pub assessment_data: AssessmentData,
    #[serde(default)]
    pub historical_data: CompetencyHistory,
    pub mapping_settings: MappingSettings,
}

impl Validate for CompetencyMappingRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty("user_id", &self.user_id)?;
        validate::non_empty("competency_framework.id", &self.competency_framework.id)?;
        self.assessment_data.validate()?;
        self.historical_data.validate()
    }
}

/// Scored state of one competency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyScore {
    pub competency_id: String,
    pub competency_name: String,
    pub level: u8,
    /// 0–100.
    pub score: f64,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indicators: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gaps: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
}

impl Validate for CompetencyScore {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::range("competency_profile.score", self.score, 0.0, 100.0)?;
        validate::unit("competency_profile.confidence", self.confidence)
    }
}

/// Scored state of one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainProfile {
    pub domain_id: String,
    pub domain_name: String,
    pub level: u8,
    pub score: f64,
    pub competencies: Vec<CompetencyScore>,
}

impl Validate for DomainProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::range("competency_profile.domain.score", self.score, 0.0, 100.0)?;
        for competency in &self.competencies {
            competency.validate()?;
        }
        Ok(())
    }
}

/// A standout competency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthHighlight {
    pub competency: String,
    pub level: u8,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<String>,
}

/// A competency needing work, with its target level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentArea {
    pub competency: String,
    pub current_level: u8,
    pub target_level: u8,
    pub gap: u8,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

/// The full scored profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyProfile {
    pub overall_level: u8,
    pub domain_profiles: Vec<DomainProfile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<StrengthHighlight>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub development_areas: Vec<DevelopmentArea>,
}

impl Validate for CompetencyProfile {
    fn validate(&self) -> Result<(), ValidationError> {
        for domain in &self.domain_profiles {
            domain.validate()?;
        }
        for strength in &self.strengths {
            validate::finite("competency_profile.strengths.score", strength.score)?;
        }
        Ok(())
    }
}

/// Where the learner currently stands on the overall ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPosition {
    pub level: u8,
    pub description: String,
    pub next_milestone: String,
}

/// One structured development activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub description: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}

/// One step on the recommended development path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    pub step: u32,
    pub competency: String,
    pub target_level: u8,
    pub timeframe: String,
    pub activities: Vec<Activity>,
}

/// A dated milestone on the development path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub milestone: String,
    pub target_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub competencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub success_criteria: Vec<String>,
}

/// The full development path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentPath {
    pub current_position: CurrentPosition,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_path: Vec<PathStep>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<Milestone>,
}

/// A per-competency movement between the last two assessments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyTrend {
    pub competency: String,
    pub trend: Trend,
    pub magnitude: f64,
    pub timeframe: String,
}

/// Insights, trends, and opportunities derived from the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingInsights {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_insights: Vec<Insight>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trends: Vec<CompetencyTrend>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub opportunities: Vec<Opportunity>,
}

impl Validate for MappingInsights {
    fn validate(&self) -> Result<(), ValidationError> {
        for insight in &self.key_insights {
            insight.validate()?;
        }
        for trend in &self.trends {
            validate::finite("insights.trends.magnitude", trend.magnitude)?;
        }
        for opportunity in &self.opportunities {
            opportunity.validate()?;
        }
        Ok(())
    }
}

/// An action targeting one competency right away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImmediateCompetencyAction {
    pub action: String,
    pub competency: String,
    pub priority: Priority,
    pub rationale: String,
    pub expected_outcome: String,
}

impl Validate for ImmediateCompetencyAction {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty("recommendations.immediate.action", &self.action)
    }
}

/// A grouped action over the next few months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortTermCompetencyAction {
    pub action: String,
    pub timeframe: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub competencies: Vec<String>,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub success_metrics: Vec<String>,
}

impl Validate for ShortTermCompetencyAction {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty("recommendations.short_term.action", &self.action)
    }
}

/// A foundational action over the coming year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongTermCompetencyAction {
    pub action: String,
    pub timeframe: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub competencies: Vec<String>,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<String>,
}

impl Validate for LongTermCompetencyAction {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty("recommendations.long_term.action", &self.action)
    }
}

pub type CompetencyRecommendations = TieredRecommendations<
    ImmediateCompetencyAction,
    ShortTermCompetencyAction,
    LongTermCompetencyAction,
>;

/// The full competency mapping result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyMappingResult {
    pub competency_profile: CompetencyProfile,
    pub development_path: DevelopmentPath,
    pub insights: MappingInsights,
    pub recommendations: CompetencyRecommendations,
}

impl Validate for CompetencyMappingResult {
    fn validate(&self) -> Result<(), ValidationError> {
        self.competency_profile.validate()?;
        self.insights.validate()?;
        self.recommendations.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_resolves_competency_names_with_id_fallback() {
        let framework = CompetencyFramework {
            id: "fw".to_string(),
            name: "Framework".to_string(),
            version: "1".to_string(),
            domains: vec![Domain {
                id: "d1".to_string(),
                name: "Domain".to_string(),
                description: String::new(),
                competencies: vec![Competency {
                    id: "c1".to_string(),
                    name: "Strategic Thinking".to_string(),
                    description: String::new(),
                    levels: Vec::new(),
                }],
            }],
        };

        assert_eq!(framework.competency_name("c1"), "Strategic Thinking");
        assert_eq!(framework.competency_name("missing"), "missing");
    }

    #[test]
    fn response_rejects_out_of_range_confidence() {
        let response = AssessmentResponse {
            question_id: "q1".to_string(),
            competency_id: "c1".to_string(),
            domain_id: "d1".to_string(),
            answer: serde_json::json!("a considered answer"),
            confidence: 1.4,
            time_spent: 30.0,
        };
        assert!(response.validate().is_err());
    }

    #[test]
    fn mapping_settings_default_the_section_toggles_on() {
        let json = r#"{
            "granularity": "detailed",
            "update_frequency": "weekly",
            "plan_start": "2025-06-01"
        }"#;
        let settings: MappingSettings = serde_json::from_str(json).unwrap();
        assert!(settings.include_trends);
        assert!(settings.include_recommendations);
    }

    #[test]
    fn activity_type_serializes_under_its_wire_name() {
        let activity = Activity {
            activity_type: "learning".to_string(),
            description: "Study fundamentals".to_string(),
            duration: "2-4 weeks".to_string(),
            resources: Vec::new(),
        };
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["type"], "learning");
    }
}
