//! Development plan: phased learning path, timeline, resources.

use chrono::{Days, NaiveDate};

use attune_core::Priority;

use super::policy::SkillGapPolicy;
use super::types::{
    Course, DevelopmentPlan, GapAnalysis, LearningPhase, Mentor, PhaseActivity, PlanMilestone,
    ResourcePlan, Timeline, Tool,
};

/// Build the full development plan from the gap analysis.
pub fn build_plan(
    analysis: &GapAnalysis,
    plan_start: NaiveDate,
    policy: &SkillGapPolicy,
) -> DevelopmentPlan {
    let learning_path = learning_path(analysis, policy);
    DevelopmentPlan {
        timeline: timeline(&learning_path, plan_start),
        resources: resources(analysis),
        learning_path,
    }
}

/// Critical skills first, then the high-priority remainder.
pub fn learning_path(analysis: &GapAnalysis, policy: &SkillGapPolicy) -> Vec<LearningPhase> {
    let mut phases = Vec::new();

    let critical_skills: Vec<String> = analysis
        .critical_gaps
        .iter()
        .take(policy.critical_focus)
        .map(|gap| gap.skill_name.clone())
        .collect();
    if !critical_skills.is_empty() {
        phases.push(LearningPhase {
            phase: 1,
            name: "Critical Skills Development".to_string(),
            activities: phase_activities(&critical_skills, true),
            skills: critical_skills,
            duration: "1-2 months".to_string(),
        });
    }

    let high_priority: Vec<String> = analysis
        .category_gaps
        .iter()
        .flat_map(|category| &category.skills)
        .filter(|skill| skill.priority == Priority::High && skill.gap > 0.0)
        .take(policy.high_priority_focus)
        .map(|skill| skill.skill_name.clone())
        .collect();
    if !high_priority.is_empty() {
        phases.push(LearningPhase {
            phase: phases.len() as u32 + 1,
            name: "High Priority Skills".to_string(),
            activities: phase_activities(&high_priority, false),
            skills: high_priority,
            duration: "3-6 months".to_string(),
        });
    }

    phases
}

fn phase_activities(skills: &[String], critical: bool) -> Vec<PhaseActivity> {
    let joined = skills.join(", ");
    vec![
        PhaseActivity {
            activity_type: "learning".to_string(),
            description: format!("Study {joined} fundamentals"),
            duration: if critical { "2-4 weeks" } else { "4-8 weeks" }.to_string(),
            resources: vec![
                "Online courses".to_string(),
                "Books".to_string(),
                "Tutorials".to_string(),
            ],
        },
        PhaseActivity {
            activity_type: "practice".to_string(),
            description: format!("Apply {joined} in real projects"),
            duration: if critical { "1-2 months" } else { "2-3 months" }.to_string(),
            resources: vec![
                "Project work".to_string(),
                "Mentorship".to_string(),
                "Peer review".to_string(),
            ],
        },
    ]
}

/// Date each phase cumulatively from the plan start.
pub fn timeline(learning_path: &[LearningPhase], plan_start: NaiveDate) -> Timeline {
    let mut current_date = plan_start;
    let milestones: Vec<PlanMilestone> = learning_path
        .iter()
        .map(|phase| {
            let target_date = current_date
                .checked_add_days(Days::new(phase_days(&phase.duration)))
                .unwrap_or(current_date);
            current_date = target_date;
            PlanMilestone {
                milestone: format!("Complete {}", phase.name),
                target_date,
                skills: phase.skills.clone(),
                success_criteria: success_criteria(phase),
            }
        })
        .collect();

    Timeline {
        start_date: plan_start,
        end_date: current_date,
        milestones,
    }
}

fn phase_days(duration: &str) -> u64 {
    if duration.contains("1-2 months") {
        45
    } else if duration.contains("3-6 months") {
        135
    } else {
        30
    }
}

fn success_criteria(phase: &LearningPhase) -> Vec<String> {
    vec![
        format!("Demonstrate {} at target levels", phase.skills.join(", ")),
        "Complete required activities".to_string(),
        "Pass skill assessments".to_string(),
        "Receive peer/mentor validation".to_string(),
    ]
}

/// Suggested resources keyed off the critical gaps.
pub fn resources(analysis: &GapAnalysis) -> ResourcePlan {
    let critical_skills: Vec<String> = analysis
        .critical_gaps
        .iter()
        .map(|gap| gap.skill_name.clone())
        .collect();

    let courses = critical_skills
        .iter()
        .map(|skill| Course {
            name: format!("{skill} Fundamentals"),
            provider: "Online Learning Platform".to_string(),
            duration: "4-6 weeks".to_string(),
            cost: 99.0,
            skills: vec![skill.clone()],
        })
        .collect();

    ResourcePlan {
        courses,
        mentors: vec![Mentor {
            name: "Industry Expert".to_string(),
            expertise: critical_skills.clone(),
            availability: "2 hours/week".to_string(),
            cost: Some(150.0),
        }],
        tools: vec![Tool {
            name: "Skill Assessment Platform".to_string(),
            purpose: "Track skill development progress".to_string(),
            cost: 29.0,
            skills: critical_skills,
        }],
    }
}
