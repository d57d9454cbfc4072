//! Profile construction: scoring competencies against the framework.

use attune_core::{Priority, stats};

use super::policy::CompetencyPolicy;
use super::types::{
    Competency, CompetencyMappingRequest, CompetencyProfile, CompetencyScore, DevelopmentArea,
    DomainProfile, StrengthHighlight,
};

// Answer-quality scores on the 0-100 scale.
const SUBSTANTIVE_TEXT_SCORE: f64 = 70.0;
const POSITIVE_NUMBER_SCORE: f64 = 60.0;
const WEAK_ANSWER_SCORE: f64 = 40.0;
const SUBSTANTIVE_TEXT_LEN: usize = 10;

/// Build the full competency profile for a validated request.
pub fn build_profile(request: &CompetencyMappingRequest, policy: &CompetencyPolicy) -> CompetencyProfile {
    let domain_profiles: Vec<DomainProfile> = request
        .competency_framework
        .domains
        .iter()
        .map(|domain| {
            let competencies: Vec<CompetencyScore> = domain
                .competencies
                .iter()
                .map(|competency| score_competency(request, competency, policy))
                .collect();

            let scores: Vec<f64> = competencies.iter().map(|c| c.score).collect();
            let domain_score = stats::mean(&scores).unwrap_or(policy.default_score);

            DomainProfile {
                domain_id: domain.id.clone(),
                domain_name: domain.name.clone(),
                level: policy.rounded_level(domain_score),
                score: domain_score,
                competencies,
            }
        })
        .collect();

    let domain_scores: Vec<f64> = domain_profiles.iter().map(|d| d.score).collect();
    let overall_score = stats::mean(&domain_scores).unwrap_or(policy.default_score);

    CompetencyProfile {
        overall_level: policy.rounded_level(overall_score),
        strengths: overall_strengths(&domain_profiles, policy),
        development_areas: development_areas(&domain_profiles, policy),
        domain_profiles,
    }
}

/// Score one competency from its matching responses.
pub fn score_competency(
    request: &CompetencyMappingRequest,
    competency: &Competency,
    policy: &CompetencyPolicy,
) -> CompetencyScore {
    let responses: Vec<_> = request
        .assessment_data
        .responses
        .iter()
        .filter(|response| response.competency_id == competency.id)
        .collect();

    let score = if responses.is_empty() {
        policy.default_score
    } else {
        let per_response: Vec<f64> = responses
            .iter()
            .map(|response| {
                let base = answer_quality(&response.answer);
                (base + response.confidence * policy.confidence_bonus).min(100.0)
            })
            .collect();
        stats::mean(&per_response).unwrap_or(policy.default_score)
    };

    let confidence = if responses.is_empty() {
        0.5
    } else {
        let confidences: Vec<f64> = responses.iter().map(|r| r.confidence).collect();
        stats::mean(&confidences).unwrap_or(0.5)
    };

    let level = policy.level_for_score(score, competency.levels.len());

    CompetencyScore {
        competency_id: competency.id.clone(),
        competency_name: competency.name.clone(),
        level,
        score,
        confidence,
        indicators: level_indicators(competency, level),
        gaps: competency_gaps(competency, level, score, policy),
        strengths: competency_strengths(level, score, policy),
    }
}

/// Judge the structural quality of a free-form answer.
fn answer_quality(answer: &serde_json::Value) -> f64 {
    match answer {
        serde_json::Value::String(text) if text.len() > SUBSTANTIVE_TEXT_LEN => {
            SUBSTANTIVE_TEXT_SCORE
        }
        serde_json::Value::Number(number) => {
            if number.as_f64().unwrap_or(0.0) > 0.0 {
                POSITIVE_NUMBER_SCORE
            } else {
                WEAK_ANSWER_SCORE
            }
        }
        _ => WEAK_ANSWER_SCORE,
    }
}

fn level_indicators(competency: &Competency, level: u8) -> Vec<String> {
    competency
        .levels
        .get(level as usize)
        .map(|definition| definition.indicators.clone())
        .unwrap_or_default()
}

fn competency_gaps(
    competency: &Competency,
    level: u8,
    score: f64,
    policy: &CompetencyPolicy,
) -> Vec<String> {
    let mut gaps = Vec::new();
    if score < policy.proficiency_threshold {
        gaps.push("Below proficiency threshold".to_string());
    }
    if !competency.levels.is_empty() && (level as usize) < competency.levels.len() - 1 {
        gaps.push(format!("Not yet at level {}", level + 2));
    }
    gaps
}

fn competency_strengths(level: u8, score: f64, policy: &CompetencyPolicy) -> Vec<String> {
    let mut strengths = Vec::new();
    if score > policy.strength_threshold {
        strengths.push("High proficiency".to_string());
    }
    if level > 0 {
        strengths.push(format!("Achieved level {}", level + 1));
    }
    strengths
}

/// The highest-scoring competencies across all domains, capped.
pub fn overall_strengths(
    domain_profiles: &[DomainProfile],
    policy: &CompetencyPolicy,
) -> Vec<StrengthHighlight> {
    let mut strengths: Vec<StrengthHighlight> = domain_profiles
        .iter()
        .flat_map(|domain| &domain.competencies)
        .filter(|competency| competency.score > policy.strength_threshold)
        .map(|competency| StrengthHighlight {
            competency: competency.competency_name.clone(),
            level: competency.level,
            score: competency.score,
            evidence: competency.strengths.clone(),
        })
        .collect();
    strengths.truncate(policy.top_strengths);
    strengths
}

/// Below-threshold competencies with targets, most severe first.
pub fn development_areas(
    domain_profiles: &[DomainProfile],
    policy: &CompetencyPolicy,
) -> Vec<DevelopmentArea> {
    let mut areas: Vec<DevelopmentArea> = domain_profiles
        .iter()
        .flat_map(|domain| &domain.competencies)
        .filter(|competency| competency.score < policy.development_threshold)
        .map(|competency| {
            let target_level = (competency.level + 1).min(policy.ladder_ceiling);
            DevelopmentArea {
                competency: competency.competency_name.clone(),
                current_level: competency.level,
                target_level,
                gap: target_level.saturating_sub(competency.level),
                priority: score_priority(competency.score, policy),
                recommendations: area_recommendations(),
            }
        })
        .collect();
    // Stable sort keeps insertion order among equal priorities.
    areas.sort_by_key(|area| std::cmp::Reverse(area.priority));
    areas
}

/// Priority of a development area by how far the score has fallen.
pub fn score_priority(score: f64, policy: &CompetencyPolicy) -> Priority {
    if score < policy.critical_threshold {
        Priority::Critical
    } else if score < policy.proficiency_threshold {
        Priority::High
    } else if score < policy.strength_threshold {
        Priority::Medium
    } else {
        Priority::Low
    }
}

fn area_recommendations() -> Vec<String> {
    vec![
        "Review foundational concepts".to_string(),
        "Practice practical applications".to_string(),
        "Seek feedback from experts".to_string(),
        "Engage in relevant projects".to_string(),
    ]
}
