//! Skill gap analysis: current vs. target levels, gap landscape, and a
//! phased development plan.

mod gaps;
mod insights;
mod plan;
mod policy;
mod recommend;
mod types;

pub use policy::SkillGapPolicy;
pub use types::{
    AnalysisContext, AssessedSkill, CategoryGap, Course, CriticalGap, CurrentSkills,
    DesiredPriority, DesiredSkill, DevelopmentPlan, Effort, GapAnalysis, GapInsights,
    ImmediateSkillAction, LearningPhase, LongTermSkillAction, Mentor, PhaseActivity,
    PlanConstraints, PlanMilestone, QuickWin, RequiredSkill, ResourcePlan, SelfAssessedSkill,
    ShortTermSkillAction, Skill, SkillCategory, SkillFramework, SkillGap, SkillGapAnalysisRequest,
    SkillGapAnalysisResult, SkillGapRecommendations, SkillLevel, SkillTrend, TargetSkills,
    Timeline, Tool, Urgency,
};

use attune_core::{Engine, EngineError, TieredRecommendations, Validate, run_with_fallback};

/// The skill gap analysis engine.
///
/// Stateless; every call is an independent pure computation.
#[derive(Debug, Default)]
pub struct SkillGapAnalysis {
    policy: SkillGapPolicy,
}

impl SkillGapAnalysis {
    /// Engine with the default policy thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with caller-tuned policy thresholds.
    #[must_use]
    pub fn with_policy(policy: SkillGapPolicy) -> Self {
        Self { policy }
    }

    /// Analyze the gap between current and target skills.
    ///
    /// Never fails: malformed input yields the neutral no-gaps fallback.
    #[tracing::instrument(skip_all, fields(user_id = %request.user_id, assessment_id = %request.assessment_id))]
    pub async fn analyze_skill_gaps(
        &self,
        request: SkillGapAnalysisRequest,
    ) -> SkillGapAnalysisResult {
        run_with_fallback(self, &request)
    }
}

impl Engine for SkillGapAnalysis {
    type Request = SkillGapAnalysisRequest;
    type Response = SkillGapAnalysisResult;

    fn name(&self) -> &'static str {
        "skill_gap_analysis"
    }

    fn evaluate(&self, request: &Self::Request) -> Result<Self::Response, EngineError> {
        request.validate().map_err(EngineError::InvalidRequest)?;

        let gap_analysis = gaps::analyze(request, &self.policy);
        let recommendations = recommend::recommend(request, &gap_analysis, &self.policy);
        let development_plan =
            plan::build_plan(&gap_analysis, request.context.plan_start, &self.policy);
        let insights = insights::build_insights(&gap_analysis, &self.policy);

        tracing::debug!(
            overall_gap = gap_analysis.overall_gap,
            critical = gap_analysis.critical_gaps.len(),
            quick_wins = gap_analysis.quick_wins.len(),
            "gap analysis complete"
        );

        let result = SkillGapAnalysisResult {
            gap_analysis,
            recommendations,
            development_plan,
            insights,
        };
        result.validate().map_err(EngineError::InvalidResult)?;
        Ok(result)
    }

    fn fallback(&self, request: &Self::Request) -> Self::Response {
        let plan_start = request.context.plan_start;
        SkillGapAnalysisResult {
            gap_analysis: GapAnalysis {
                overall_gap: 0.0,
                category_gaps: Vec::new(),
                critical_gaps: Vec::new(),
                quick_wins: Vec::new(),
            },
            recommendations: TieredRecommendations::empty(),
            development_plan: DevelopmentPlan {
                learning_path: Vec::new(),
                timeline: Timeline {
                    start_date: plan_start,
                    end_date: plan_start,
                    milestones: Vec::new(),
                },
                resources: ResourcePlan::default(),
            },
            insights: GapInsights {
                key_insights: Vec::new(),
                trends: Vec::new(),
                opportunities: Vec::new(),
            },
        }
    }
}
