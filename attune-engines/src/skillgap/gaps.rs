//! Gap analysis: current vs. target levels across the framework.

use attune_core::{Priority, stats};

use super::policy::SkillGapPolicy;
use super::types::{
    CategoryGap, CriticalGap, DesiredPriority, Effort, GapAnalysis, QuickWin, Skill,
    SkillGap, SkillGapAnalysisRequest, Urgency,
};

/// Run the full gap analysis for a validated request.
pub fn analyze(request: &SkillGapAnalysisRequest, policy: &SkillGapPolicy) -> GapAnalysis {
    let category_gaps = category_gaps(request, policy);
    let critical_gaps = critical_gaps(&category_gaps);
    let quick_wins = quick_wins(&category_gaps, policy);
    let overall_gap = overall_gap(&category_gaps);

    GapAnalysis {
        overall_gap,
        category_gaps,
        critical_gaps,
        quick_wins,
    }
}

/// Per-category gap aggregation over every skill in the framework.
pub fn category_gaps(request: &SkillGapAnalysisRequest, policy: &SkillGapPolicy) -> Vec<CategoryGap> {
    request
        .skill_framework
        .categories
        .iter()
        .map(|category| {
            let skills: Vec<SkillGap> = category
                .skills
                .iter()
                .map(|skill| skill_gap(request, skill))
                .collect();

            let level_gaps: Vec<f64> = skills.iter().map(|skill| skill.gap).collect();
            let mean_gap = stats::mean(&level_gaps).unwrap_or(0.0);

            CategoryGap {
                category_id: category.id.clone(),
                category_name: category.name.clone(),
                gap: policy.gap_percent(mean_gap),
                priority: category_priority(&skills),
                skills,
            }
        })
        .collect()
}

/// Gap state of one skill: target (required wins over desired) vs. current.
fn skill_gap(request: &SkillGapAnalysisRequest, skill: &Skill) -> SkillGap {
    let assessed = request
        .current_skills
        .assessed_skills
        .iter()
        .find(|current| current.skill_id == skill.id);
    let required = request
        .target_skills
        .required_skills
        .iter()
        .find(|target| target.skill_id == skill.id);
    let desired = request
        .target_skills
        .desired_skills
        .iter()
        .find(|target| target.skill_id == skill.id);

    let current_level = assessed.map(|skill| skill.current_level).unwrap_or(0.0);
    let target_level = required
        .map(|skill| skill.required_level)
        .or_else(|| desired.map(|skill| skill.desired_level))
        .unwrap_or(0.0);
    let priority = required
        .map(|skill| skill.priority)
        .or_else(|| desired.map(|skill| desired_as_priority(skill.priority)))
        .unwrap_or(Priority::Low);

    SkillGap {
        skill_id: skill.id.clone(),
        skill_name: skill.name.clone(),
        current_level,
        target_level,
        gap: (target_level - current_level).max(0.0),
        priority,
        impact: skill_impact(request, &skill.id),
    }
}

fn desired_as_priority(priority: DesiredPriority) -> Priority {
    match priority {
        DesiredPriority::Low => Priority::Low,
        DesiredPriority::Medium => Priority::Medium,
        DesiredPriority::High => Priority::High,
    }
}

/// Estimated impact of closing a skill's gap, from its target priority.
pub fn skill_impact(request: &SkillGapAnalysisRequest, skill_id: &str) -> f64 {
    let required = request
        .target_skills
        .required_skills
        .iter()
        .find(|target| target.skill_id == skill_id);
    let desired = request
        .target_skills
        .desired_skills
        .iter()
        .find(|target| target.skill_id == skill_id);

    match required.map(|skill| skill.priority) {
        Some(Priority::Critical) => 0.9,
        Some(Priority::High) => 0.7,
        _ => match desired.map(|skill| skill.priority) {
            Some(DesiredPriority::High) => 0.6,
            _ => 0.4,
        },
    }
}

/// The most urgent priority among a category's skills.
fn category_priority(skills: &[SkillGap]) -> Priority {
    skills
        .iter()
        .map(|skill| skill.priority)
        .max()
        .unwrap_or(Priority::Low)
}

/// Critical-priority skills with open gaps, highest impact first.
pub fn critical_gaps(category_gaps: &[CategoryGap]) -> Vec<CriticalGap> {
    let mut critical: Vec<CriticalGap> = category_gaps
        .iter()
        .flat_map(|category| {
            category.skills.iter().filter_map(|skill| {
                if skill.priority == Priority::Critical && skill.gap > 0.0 {
                    Some(CriticalGap {
                        skill_id: skill.skill_id.clone(),
                        skill_name: skill.skill_name.clone(),
                        category_name: category.category_name.clone(),
                        gap: skill.gap,
                        impact: skill.impact,
                        urgency: urgency(skill.gap, skill.impact),
                    })
                } else {
                    None
                }
            })
        })
        .collect();
    critical.sort_by(|a, b| b.impact.total_cmp(&a.impact));
    critical
}

/// Small, worthwhile gaps, least effort first.
pub fn quick_wins(category_gaps: &[CategoryGap], policy: &SkillGapPolicy) -> Vec<QuickWin> {
    let mut wins: Vec<QuickWin> = category_gaps
        .iter()
        .flat_map(|category| {
            category.skills.iter().filter_map(|skill| {
                if skill.gap <= policy.quick_win_max_gap && skill.impact > policy.quick_win_min_impact
                {
                    Some(QuickWin {
                        skill_id: skill.skill_id.clone(),
                        skill_name: skill.skill_name.clone(),
                        category_name: category.category_name.clone(),
                        gap: skill.gap,
                        effort: effort(skill.gap),
                        timeframe: gap_timeframe(skill.gap),
                    })
                } else {
                    None
                }
            })
        })
        .collect();
    // Stable sort keeps framework order among equal efforts.
    wins.sort_by_key(|win| win.effort);
    wins
}

/// Mean category gap percentage.
pub fn overall_gap(category_gaps: &[CategoryGap]) -> f64 {
    let gaps: Vec<f64> = category_gaps.iter().map(|category| category.gap).collect();
    stats::mean(&gaps).unwrap_or(0.0)
}

/// How soon a gap of this size and impact must be closed.
pub fn urgency(gap: f64, impact: f64) -> Urgency {
    if gap > 3.0 && impact > 0.7 {
        Urgency::Immediate
    } else if gap > 2.0 && impact > 0.5 {
        Urgency::ShortTerm
    } else if gap > 1.0 {
        Urgency::MediumTerm
    } else {
        Urgency::LongTerm
    }
}

/// Relative effort to close a gap of this many levels.
pub fn effort(gap: f64) -> Effort {
    if gap <= 1.0 {
        Effort::Low
    } else if gap <= 2.0 {
        Effort::Medium
    } else {
        Effort::High
    }
}

/// How long closing a gap of this many levels usually takes.
pub fn gap_timeframe(gap: f64) -> String {
    if gap <= 1.0 {
        "1-2 weeks".to_string()
    } else if gap <= 2.0 {
        "1-2 months".to_string()
    } else if gap <= 3.0 {
        "3-6 months".to_string()
    } else {
        "6-12 months".to_string()
    }
}
