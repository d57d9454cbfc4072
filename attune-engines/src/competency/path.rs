//! Development path construction: position, steps, milestones.

use chrono::{Days, NaiveDate};

use super::policy::CompetencyPolicy;
use super::types::{
    Activity, CompetencyProfile, CurrentPosition, DevelopmentArea, DevelopmentPath, Milestone,
    PathStep,
};

const POSITION_DESCRIPTIONS: [&str; 5] = [
    "Novice - Basic understanding and skills",
    "Beginner - Developing foundational competencies",
    "Intermediate - Solid foundation with room for growth",
    "Advanced - Strong competencies with expertise areas",
    "Expert - Mastery level with deep expertise",
];

const NEXT_MILESTONES: [&str; 5] = [
    "Achieve beginner level",
    "Reach intermediate level",
    "Attain advanced level",
    "Master expert level",
    "Maintain expert level",
];

/// Build the full development path from the profile.
pub fn build_path(
    profile: &CompetencyProfile,
    plan_start: NaiveDate,
    policy: &CompetencyPolicy,
) -> DevelopmentPath {
    let recommended_path = recommended_path(profile, policy);
    let milestones = milestones(&recommended_path, plan_start);
    DevelopmentPath {
        current_position: current_position(profile),
        recommended_path,
        milestones,
    }
}

/// Describe where the learner stands on the overall ladder.
pub fn current_position(profile: &CompetencyProfile) -> CurrentPosition {
    let level = profile.overall_level;
    let index = (level as usize).min(POSITION_DESCRIPTIONS.len() - 1);
    CurrentPosition {
        level,
        description: POSITION_DESCRIPTIONS[index].to_string(),
        next_milestone: NEXT_MILESTONES[index].to_string(),
    }
}

/// One path step per focus development area.
pub fn recommended_path(profile: &CompetencyProfile, policy: &CompetencyPolicy) -> Vec<PathStep> {
    profile
        .development_areas
        .iter()
        .take(policy.path_focus)
        .enumerate()
        .map(|(index, area)| PathStep {
            step: index as u32 + 1,
            competency: area.competency.clone(),
            target_level: area.target_level,
            timeframe: gap_timeframe(area.gap),
            activities: step_activities(area),
        })
        .collect()
}

/// Date each path step cumulatively from the plan start.
pub fn milestones(path: &[PathStep], plan_start: NaiveDate) -> Vec<Milestone> {
    let mut current_date = plan_start;
    path.iter()
        .map(|step| {
            let target_date = current_date
                .checked_add_days(Days::new(timeframe_days(&step.timeframe)))
                .unwrap_or(current_date);
            current_date = target_date;
            Milestone {
                milestone: format!("Achieve {} Level {}", step.competency, step.target_level),
                target_date,
                competencies: vec![step.competency.clone()],
                success_criteria: success_criteria(step),
            }
        })
        .collect()
}

/// How long closing a gap of this many levels usually takes.
pub fn gap_timeframe(gap: u8) -> String {
    match gap {
        1 => "1-2 months".to_string(),
        2 => "3-6 months".to_string(),
        _ => "6-12 months".to_string(),
    }
}

fn timeframe_days(timeframe: &str) -> u64 {
    if timeframe.contains("1-2 months") {
        45
    } else if timeframe.contains("3-6 months") {
        135
    } else {
        270
    }
}

fn step_activities(area: &DevelopmentArea) -> Vec<Activity> {
    vec![
        Activity {
            activity_type: "learning".to_string(),
            description: format!("Study {} fundamentals", area.competency),
            duration: "2-4 weeks".to_string(),
            resources: vec![
                "Online courses".to_string(),
                "Books".to_string(),
                "Tutorials".to_string(),
            ],
        },
        Activity {
            activity_type: "practice".to_string(),
            description: format!("Apply {} in real projects", area.competency),
            duration: "1-2 months".to_string(),
            resources: vec![
                "Project work".to_string(),
                "Mentorship".to_string(),
                "Peer review".to_string(),
            ],
        },
    ]
}

fn success_criteria(step: &PathStep) -> Vec<String> {
    vec![
        format!("Demonstrate {} at level {}", step.competency, step.target_level),
        "Complete required activities".to_string(),
        "Pass competency assessment".to_string(),
        "Receive peer/mentor validation".to_string(),
    ]
}
