//! Competency mapping: profile, development path, and insights against a
//! competency framework.

mod insights;
mod path;
mod policy;
mod profile;
mod types;

pub use policy::CompetencyPolicy;
pub use types::{
    Activity, AssessmentData, AssessmentResponse, Competency, CompetencyFramework,
    CompetencyHistory, CompetencyMappingRequest, CompetencyMappingResult, CompetencyProfile,
    CompetencyRecommendations, CompetencyScore, CompetencyTrend, CurrentPosition,
    DevelopmentActivity, DevelopmentArea, DevelopmentPath, Domain, DomainProfile, Granularity,
    ImmediateCompetencyAction, LevelDefinition, LongTermCompetencyAction, MappingCadence,
    MappingInsights, MappingSettings, Milestone, PathStep, PatternTrend, PreviousAssessment,
    ResponsePatterns, ShortTermCompetencyAction, StrengthHighlight,
};

use attune_core::{Engine, EngineError, TieredRecommendations, Validate, run_with_fallback};

/// The competency mapping engine.
///
/// Stateless; every call is an independent pure computation.
#[derive(Debug, Default)]
pub struct CompetencyMapping {
    policy: CompetencyPolicy,
}

impl CompetencyMapping {
    /// Engine with the default policy thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with caller-tuned policy thresholds.
    #[must_use]
    pub fn with_policy(policy: CompetencyPolicy) -> Self {
        Self { policy }
    }

    /// Map assessment responses onto the competency framework.
    ///
    /// Never fails: malformed input yields the neutral beginner-profile
    /// fallback.
    #[tracing::instrument(skip_all, fields(user_id = %request.user_id, framework = %request.competency_framework.id))]
    pub async fn generate_competency_mapping(
        &self,
        request: CompetencyMappingRequest,
    ) -> CompetencyMappingResult {
        run_with_fallback(self, &request)
    }
}

impl Engine for CompetencyMapping {
    type Request = CompetencyMappingRequest;
    type Response = CompetencyMappingResult;

    fn name(&self) -> &'static str {
        "competency_mapping"
    }

    fn evaluate(&self, request: &Self::Request) -> Result<Self::Response, EngineError> {
        request.validate().map_err(EngineError::InvalidRequest)?;

        let competency_profile = profile::build_profile(request, &self.policy);
        let development_path = path::build_path(
            &competency_profile,
            request.mapping_settings.plan_start,
            &self.policy,
        );
        let insights = insights::build_insights(request, &competency_profile, &self.policy);
        let recommendations = if request.mapping_settings.include_recommendations {
            insights::recommend(&competency_profile, &self.policy)
        } else {
            TieredRecommendations::empty()
        };

        tracing::debug!(
            overall_level = competency_profile.overall_level,
            development_areas = competency_profile.development_areas.len(),
            "competency profile built"
        );

        let result = CompetencyMappingResult {
            competency_profile,
            development_path,
            insights,
            recommendations,
        };
        result.validate().map_err(EngineError::InvalidResult)?;
        Ok(result)
    }

    fn fallback(&self, _request: &Self::Request) -> Self::Response {
        CompetencyMappingResult {
            competency_profile: CompetencyProfile {
                overall_level: 1,
                domain_profiles: Vec::new(),
                strengths: Vec::new(),
                development_areas: Vec::new(),
            },
            development_path: DevelopmentPath {
                current_position: CurrentPosition {
                    level: 1,
                    description: "Beginner - Developing foundational competencies".to_string(),
                    next_milestone: "Achieve beginner level".to_string(),
                },
                recommended_path: Vec::new(),
                milestones: Vec::new(),
            },
            insights: MappingInsights {
                key_insights: Vec::new(),
                trends: Vec::new(),
                opportunities: Vec::new(),
            },
            recommendations: TieredRecommendations::empty(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::sample_request;
    use super::*;

    #[tokio::test]
    async fn mapping_produces_a_profile_for_every_domain() {
        let engine = CompetencyMapping::new();
        let result = engine.generate_competency_mapping(sample_request()).await;

        assert_eq!(result.competency_profile.domain_profiles.len(), 1);
        let domain = &result.competency_profile.domain_profiles[0];
        assert_eq!(domain.competencies.len(), 2);
        assert!(domain.score > 0.0 && domain.score <= 100.0);
    }

    #[tokio::test]
    async fn malformed_request_yields_beginner_fallback() {
        let engine = CompetencyMapping::new();
        let mut request = sample_request();
        request.assessment_data.responses[0].confidence = f64::NAN;

        let result = engine.generate_competency_mapping(request).await;

        assert_eq!(result.competency_profile.overall_level, 1);
        assert!(result.competency_profile.domain_profiles.is_empty());
        assert!(result.recommendations.is_empty());
        assert_eq!(
            result.development_path.current_position.next_milestone,
            "Achieve beginner level"
        );
    }

    #[tokio::test]
    async fn disabled_recommendations_setting_is_honored() {
        let engine = CompetencyMapping::new();
        let mut request = sample_request();
        request.mapping_settings.include_recommendations = false;
        // Force a development area so recommendations would otherwise fire.
        request.assessment_data.responses.clear();

        let result = engine.generate_competency_mapping(request).await;
        assert!(result.recommendations.is_empty());
    }

    #[tokio::test]
    async fn milestones_are_dated_from_the_plan_start() {
        let engine = CompetencyMapping::new();
        let mut request = sample_request();
        // No responses: both competencies default to 50 and become areas.
        request.assessment_data.responses.clear();

        let result = engine.generate_competency_mapping(request).await;
        assert!(!result.development_path.milestones.is_empty());
        for milestone in &result.development_path.milestones {
            assert!(milestone.target_date > request_plan_start());
        }
    }

    fn request_plan_start() -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn result_serializes_and_round_trips() {
        let engine = CompetencyMapping::new();
        let result = engine.generate_competency_mapping(sample_request()).await;

        let json = serde_json::to_string(&result).unwrap();
        let parsed: CompetencyMappingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
