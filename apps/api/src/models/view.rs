use serde::Serialize;

/// Views a response can link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Assessment,
    Chat,
    Results,
    Resume,
    SkillGaps,
}

/// Shown in place of a view whose prerequisite is not met.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallToAction {
    pub title: String,
    pub message: String,
    pub action_label: String,
    pub target: View,
}

impl CallToAction {
    pub fn start_assessment(title: &str, message: &str) -> Self {
        CallToAction {
            title: title.to_string(),
            message: message.to_string(),
            action_label: "Start Assessment".to_string(),
            target: View::Assessment,
        }
    }
}

/// A view payload, or the call-to-action that replaces it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Gated<T> {
    Ready(T),
    AssessmentRequired(CallToAction),
}
