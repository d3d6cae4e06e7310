//! Axum route handlers for the Skill-Gap API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::skill_gap::{Priority, SkillGap};
use crate::models::view::{CallToAction, Gated};
use crate::skill_gap::generator::{analyze_gaps, is_supported, level_label, CAREER_OPTIONS};
use crate::state::AppState;

const DEFAULT_CAREER: &str = "Software Developer";

#[derive(Debug, Deserialize)]
pub struct SkillGapQuery {
    pub career: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CareerOption {
    pub name: &'static str,
    pub has_gap_data: bool,
}

#[derive(Debug, Serialize)]
pub struct LabeledGap {
    #[serde(flatten)]
    pub gap: SkillGap,
    pub current_label: &'static str,
    pub required_label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SkillGapView {
    pub career: String,
    pub gaps: Vec<LabeledGap>,
    pub high_priority: usize,
}

/// GET /api/v1/skill-gaps/careers
pub async fn handle_career_options() -> Json<Vec<CareerOption>> {
    Json(
        CAREER_OPTIONS
            .iter()
            .map(|&name| CareerOption {
                name,
                has_gap_data: is_supported(name),
            })
            .collect(),
    )
}

/// GET /api/v1/skill-gaps?career=<name>
///
/// Defaults to Software Developer. Careers without gap data return an
/// empty list, not an error.
pub async fn handle_skill_gaps(
    State(state): State<AppState>,
    Query(query): Query<SkillGapQuery>,
) -> Json<Gated<SkillGapView>> {
    let profile = state.profiles.snapshot().await;
    if !profile.assessment_completed {
        return Json(Gated::AssessmentRequired(CallToAction::start_assessment(
            "Complete Your Assessment First",
            "To analyze skill gaps for a target career, please complete your career assessment.",
        )));
    }

    let career = query.career.unwrap_or_else(|| DEFAULT_CAREER.to_string());
    let gaps = analyze_gaps(&career, &profile);
    if gaps.is_empty() {
        tracing::debug!("No skill-gap data for career '{career}'");
    }

    let high_priority = gaps.iter().filter(|g| g.priority == Priority::High).count();
    Json(Gated::Ready(SkillGapView {
        career,
        gaps: gaps
            .into_iter()
            .map(|gap| LabeledGap {
                current_label: level_label(gap.current_level),
                required_label: level_label(gap.required_level),
                gap,
            })
            .collect(),
        high_priority,
    }))
}
