//! Dashboard: progress overview derived entirely from the profile.

pub mod handlers;

use serde::Serialize;

use crate::models::profile::Profile;
use crate::models::view::{CallToAction, Gated, View};
use crate::recommendations::catalog::career_catalog;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressStep {
    pub title: &'static str,
    pub description: &'static str,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Completed,
    Pending,
    Available,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub title: &'static str,
    pub description: &'static str,
    pub status: ActivityStatus,
    pub view: View,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub greeting: String,
    pub quick_stats: Vec<QuickStat>,
    pub progress: Vec<ProgressStep>,
    pub recent_activities: Vec<Activity>,
    /// Views linked from the dashboard's shortcut panel.
    pub shortcuts: Vec<View>,
}

/// Builds the dashboard, or a call-to-action when the profile has no name yet.
pub fn build_dashboard(profile: &Profile) -> Gated<Dashboard> {
    if profile.name.is_empty() {
        return Gated::AssessmentRequired(CallToAction::start_assessment(
            "Welcome to Your Dashboard",
            "Start your career journey by completing the assessment to unlock personalized insights.",
        ));
    }

    let completed = profile.assessment_completed;
    let career_matches = if completed { career_catalog().len() } else { 0 };

    let quick_stats = vec![
        QuickStat {
            label: "Assessment Complete",
            value: if completed { "Yes" } else { "No" }.to_string(),
        },
        QuickStat {
            label: "Career Matches",
            value: career_matches.to_string(),
        },
        QuickStat {
            label: "Skills Identified",
            value: profile.skills.len().to_string(),
        },
        QuickStat {
            label: "Interests Mapped",
            value: profile.interests.len().to_string(),
        },
    ];

    let progress = vec![
        ProgressStep {
            title: "Career Assessment",
            description: "Complete personality, skills, and interests evaluation",
            completed,
        },
        ProgressStep {
            title: "Career Recommendations",
            description: "Review AI-generated career matches",
            completed,
        },
        ProgressStep {
            title: "Skill Gap Analysis",
            description: "Identify skills needed for your target career",
            completed: false,
        },
        ProgressStep {
            title: "Resume Optimization",
            description: "Optimize your resume for target positions",
            completed: false,
        },
        ProgressStep {
            title: "Learning Path",
            description: "Follow personalized skill development plan",
            completed: false,
        },
    ];

    let assessment_activity = if completed {
        Activity {
            title: "Completed Career Assessment",
            description: "Successfully completed all assessment sections",
            status: ActivityStatus::Completed,
            view: View::Assessment,
        }
    } else {
        Activity {
            title: "Assessment Pending",
            description: "Complete your assessment to get personalized recommendations",
            status: ActivityStatus::Pending,
            view: View::Assessment,
        }
    };
    let recent_activities = vec![
        assessment_activity,
        Activity {
            title: "AI Career Consultation Available",
            description: "Get personalized career advice from our AI advisor",
            status: ActivityStatus::Available,
            view: View::Chat,
        },
        Activity {
            title: "Skill Gap Analysis",
            description: "Identify skills to develop for your target career",
            status: ActivityStatus::Available,
            view: View::SkillGaps,
        },
    ];

    let first = if completed { View::Results } else { View::Assessment };
    let shortcuts = vec![first, View::Chat, View::SkillGaps, View::Resume];

    Gated::Ready(Dashboard {
        greeting: format!("Welcome back, {}!", profile.name),
        quick_stats,
        progress,
        recent_activities,
        shortcuts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(gated: Gated<Dashboard>) -> Dashboard {
        match gated {
            Gated::Ready(dashboard) => dashboard,
            Gated::AssessmentRequired(cta) => panic!("unexpected call-to-action: {cta:?}"),
        }
    }

    #[test]
    fn test_nameless_profile_gets_call_to_action() {
        match build_dashboard(&Profile::default()) {
            Gated::AssessmentRequired(cta) => assert_eq!(cta.target, View::Assessment),
            Gated::Ready(_) => panic!("expected call-to-action"),
        }
    }

    #[test]
    fn test_incomplete_assessment_stats() {
        let profile = Profile {
            name: "Ada".to_string(),
            skills: vec!["Leadership".to_string(), "Consulting".to_string()],
            ..Profile::default()
        };
        let dashboard = ready(build_dashboard(&profile));
        assert_eq!(dashboard.greeting, "Welcome back, Ada!");

        let values: Vec<&str> = dashboard.quick_stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["No", "0", "2", "0"]);
        assert!(dashboard.progress.iter().all(|p| !p.completed));
        assert_eq!(dashboard.recent_activities[0].status, ActivityStatus::Pending);
        assert_eq!(dashboard.shortcuts[0], View::Assessment);
    }

    #[test]
    fn test_completed_assessment_stats() {
        let profile = Profile {
            name: "Ada".to_string(),
            interests: vec!["Engineering".to_string()],
            assessment_completed: true,
            ..Profile::default()
        };
        let dashboard = ready(build_dashboard(&profile));

        let values: Vec<&str> = dashboard.quick_stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["Yes", "3", "0", "1"]);
        let done: Vec<bool> = dashboard.progress.iter().map(|p| p.completed).collect();
        assert_eq!(done, vec![true, true, false, false, false]);
        assert_eq!(dashboard.recent_activities[0].status, ActivityStatus::Completed);
        assert_eq!(dashboard.shortcuts[0], View::Results);
    }
}
