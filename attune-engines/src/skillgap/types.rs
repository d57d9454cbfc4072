//! Request and result types for the skill gap analysis engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use attune_core::validate::{self, Validate};
use attune_core::{Insight, Opportunity, Priority, TieredRecommendations, Trend, ValidationError};

/// One proficiency level within a skill definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub level: u8,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indicators: Vec<String>,
}

/// A skill and its level ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub levels: Vec<SkillLevel>,
}

/// A category grouping related skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
    pub skills: Vec<Skill>,
}

/// The skill framework the analysis runs against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillFramework {
    pub id: String,
    pub name: String,
    pub categories: Vec<SkillCategory>,
}

/// An externally assessed skill level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessedSkill {
    pub skill_id: String,
    pub category_id: String,
    pub current_level: f64,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<String>,
}

impl Validate for AssessedSkill {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::finite("current_skills.assessed_skills.current_level", self.current_level)?;
        validate::unit("current_skills.assessed_skills.confidence", self.confidence)
    }
}

/// A self-reported skill level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfAssessedSkill {
    pub skill_id: String,
    pub category_id: String,
    pub self_level: f64,
    pub confidence: f64,
}

impl Validate for SelfAssessedSkill {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::finite("current_skills.self_assessed_skills.self_level", self.self_level)?;
        validate::unit("current_skills.self_assessed_skills.confidence", self.confidence)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentSkills {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assessed_skills: Vec<AssessedSkill>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub self_assessed_skills: Vec<SelfAssessedSkill>,
}

impl Validate for CurrentSkills {
    fn validate(&self) -> Result<(), ValidationError> {
        for skill in &self.assessed_skills {
            skill.validate()?;
        }
        for skill in &self.self_assessed_skills {
            skill.validate()?;
        }
        Ok(())
    }
}

/// A skill the role demands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub skill_id: String,
    pub category_id: String,
    pub required_level: f64,
    pub priority: Priority,
    pub timeframe: String,
}

impl Validate for RequiredSkill {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::finite("target_skills.required_skills.required_level", self.required_level)
    }
}

/// Aspiration priority; desired skills never reach critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesiredPriority {
    Low,
    Medium,
    High,
}

/// A skill the learner wants beyond the role requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesiredSkill {
    pub skill_id: String,
    pub category_id: String,
    pub desired_level: f64,
    pub priority: DesiredPriority,
    pub timeframe: String,
}

impl Validate for DesiredSkill {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::finite("target_skills.desired_skills.desired_level", self.desired_level)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetSkills {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_skills: Vec<RequiredSkill>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub desired_skills: Vec<DesiredSkill>,
}

impl Validate for TargetSkills {
    fn validate(&self) -> Result<(), ValidationError> {
        for skill in &self.required_skills {
            skill.validate()?;
        }
        for skill in &self.desired_skills {
            skill.validate()?;
        }
        Ok(())
    }
}

/// Practical constraints on the development plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConstraints {
    /// Hours per week available for development.
    pub time_available: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub learning_preferences: Vec<String>,
}

impl Validate for PlanConstraints {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::finite("context.constraints.time_available", self.time_available)?;
        if let Some(budget) = self.budget {
            validate::finite("context.constraints.budget", budget)?;
        }
        Ok(())
    }
}

/// Who the learner is and what the plan must respect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisContext {
    pub role: String,
    pub industry: String,
    /// Years of experience.
    pub experience: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goals: Vec<String>,
    pub constraints: PlanConstraints,
    /// Anchor date for the development-plan timeline. Supplied by the
    /// caller so repeated calls with the same request produce the same plan.
    pub plan_start: NaiveDate,
}

impl Validate for AnalysisContext {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::finite("context.experience", self.experience)?;
        self.constraints.validate()
    }
}

/// The full skill gap analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapAnalysisRequest {
    pub user_id: String,
    pub assessment_id: String,
    pub skill_framework: SkillFramework,
    #[serde(default)]
    pub current_skills: CurrentSkills,
    #[serde(default)]
    pub target_skills: TargetSkills,
    pub context: AnalysisContext,
}

impl Validate for SkillGapAnalysisRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty("user_id", &self.user_id)?;
        validate::non_empty("assessment_id", &self.assessment_id)?;
        validate::non_empty("skill_framework.id", &self.skill_framework.id)?;
        self.current_skills.validate()?;
        self.target_skills.validate()?;
        self.context.validate()
    }
}

/// Gap state of one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill_id: String,
    pub skill_name: String,
    pub current_level: f64,
    pub target_level: f64,
    /// Levels still to close; never negative.
    pub gap: f64,
    pub priority: Priority,
    /// Estimated impact of closing the gap, in `[0, 1]`.
    pub impact: f64,
}

impl Validate for SkillGap {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::finite("gap_analysis.skills.gap", self.gap)?;
        validate::unit("gap_analysis.skills.impact", self.impact)
    }
}

/// Aggregated gap state of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGap {
    pub category_id: String,
    pub category_name: String,
    /// Share of the level ladder still to close, 0–100.
    pub gap: f64,
    pub priority: Priority,
    pub skills: Vec<SkillGap>,
}

impl Validate for CategoryGap {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::range("gap_analysis.category_gaps.gap", self.gap, 0.0, 100.0)?;
        for skill in &self.skills {
            skill.validate()?;
        }
        Ok(())
    }
}

/// How soon a critical gap must be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Immediate,
    ShortTerm,
    MediumTerm,
    LongTerm,
}

/// A must-close gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalGap {
    pub skill_id: String,
    pub skill_name: String,
    pub category_name: String,
    pub gap: f64,
    pub impact: f64,
    pub urgency: Urgency,
}

impl Validate for CriticalGap {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::finite("gap_analysis.critical_gaps.gap", self.gap)?;
        validate::unit("gap_analysis.critical_gaps.impact", self.impact)
    }
}

/// Relative effort to close a gap, ordered least to most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effort {
    Low,
    Medium,
    High,
}

/// A cheap, worthwhile gap to close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickWin {
    pub skill_id: String,
    pub skill_name: String,
    pub category_name: String,
    pub gap: f64,
    pub effort: Effort,
    pub timeframe: String,
}

/// The gap analysis section of the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    /// Share of the level ladder still to close overall, 0–100.
    pub overall_gap: f64,
    pub category_gaps: Vec<CategoryGap>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub critical_gaps: Vec<CriticalGap>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quick_wins: Vec<QuickWin>,
}

impl Validate for GapAnalysis {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::range("gap_analysis.overall_gap", self.overall_gap, 0.0, 100.0)?;
        for category in &self.category_gaps {
            category.validate()?;
        }
        for critical in &self.critical_gaps {
            critical.validate()?;
        }
        Ok(())
    }
}

/// An action closing one skill gap right away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImmediateSkillAction {
    pub action: String,
    pub skill: String,
    pub priority: Priority,
    pub rationale: String,
    pub expected_outcome: String,
    pub timeframe: String,
}

impl Validate for ImmediateSkillAction {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty("recommendations.immediate.action", &self.action)
    }
}

/// A grouped action over the next few months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortTermSkillAction {
    pub action: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    pub timeframe: String,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub success_metrics: Vec<String>,
}

impl Validate for ShortTermSkillAction {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty("recommendations.short_term.action", &self.action)
    }
}

/// A foundational action over the coming year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongTermSkillAction {
    pub action: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    pub timeframe: String,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<String>,
}

impl Validate for LongTermSkillAction {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty("recommendations.long_term.action", &self.action)
    }
}

pub type SkillGapRecommendations =
    TieredRecommendations<ImmediateSkillAction, ShortTermSkillAction, LongTermSkillAction>;

/// One structured activity within a learning phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseActivity {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub description: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}

/// One phase of the learning path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPhase {
    pub phase: u32,
    pub name: String,
    pub skills: Vec<String>,
    pub duration: String,
    pub activities: Vec<PhaseActivity>,
}

/// A dated milestone on the plan timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMilestone {
    pub milestone: String,
    pub target_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub success_criteria: Vec<String>,
}

/// The dated plan envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<PlanMilestone>,
}

/// A suggested course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub provider: String,
    pub duration: String,
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

/// A suggested mentor profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expertise: Vec<String>,
    pub availability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// A suggested tracking or practice tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub purpose: String,
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

/// Suggested resources for the plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourcePlan {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub courses: Vec<Course>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentors: Vec<Mentor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

/// The full development plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentPlan {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub learning_path: Vec<LearningPhase>,
    pub timeline: Timeline,
    pub resources: ResourcePlan,
}

/// A per-category movement observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTrend {
    pub skill: String,
    pub trend: Trend,
    pub magnitude: f64,
    pub timeframe: String,
}

/// Insights, trends, and opportunities from the gap analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapInsights {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_insights: Vec<Insight>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trends: Vec<SkillTrend>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub opportunities: Vec<Opportunity>,
}

impl Validate for GapInsights {
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

/// The full skill gap analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapAnalysisResult {
    pub gap_analysis: GapAnalysis,
    pub recommendations: SkillGapRecommendations,
    pub development_plan: DevelopmentPlan,
    pub insights: GapInsights,
}

impl Validate for SkillGapAnalysisResult {
    fn validate(&self) -> Result<(), ValidationError> {
        self.gap_analysis.validate()?;
        self.recommendations.validate()?;
        self.insights.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effort_orders_low_to_high() {
        assert!(Effort::Low < Effort::Medium);
        assert!(Effort::Medium < Effort::High);
    }

    #[test]
    fn urgency_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&Urgency::ShortTerm).unwrap(),
            "\"short_term\""
        );
    }

    #[test]
    fn assessed_skill_rejects_out_of_range_confidence() {
        let skill = AssessedSkill {
            skill_id: "s1".to_string(),
            category_id: "cat1".to_string(),
            current_level: 2.0,
            confidence: -0.1,
            evidence: Vec::new(),
        };
        assert!(skill.validate().is_err());
    }

    #[test]
    fn desired_priority_has_no_critical_variant() {
        assert!(serde_json::from_str::<DesiredPriority>("\"critical\"").is_err());
        assert_eq!(
            serde_json::from_str::<DesiredPriority>("\"high\"").unwrap(),
            DesiredPriority::High
        );
    }

    #[test]
    fn category_gap_must_stay_on_the_percent_scale() {
        let category = CategoryGap {
            category_id: "cat1".to_string(),
            category_name: "Technical".to_string(),
            gap: 130.0,
            priority: Priority::Low,
            skills: Vec::new(),
        };
        assert!(category.validate().is_err());
    }
}
