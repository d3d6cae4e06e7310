//! Axum route handlers for the Recommendations API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::career::CareerEntry;
use crate::models::profile::Profile;
use crate::models::view::{CallToAction, Gated};
use crate::recommendations::catalog::career_catalog;
use crate::state::AppState;

const SUMMARY_ITEMS: usize = 3;

#[derive(Debug, Serialize)]
pub struct ProfileSummary {
    pub top_interests: Vec<String>,
    pub key_skills: Vec<String>,
    pub education: String,
    pub experience: String,
}

#[derive(Debug, Serialize)]
pub struct RankedCareer {
    /// 1-based position in the ranking.
    pub rank: usize,
    #[serde(flatten)]
    pub career: CareerEntry,
}

#[derive(Debug, Serialize)]
pub struct ResultsView {
    pub summary: ProfileSummary,
    pub recommendations: Vec<RankedCareer>,
    pub scorer_backend: &'static str,
}

/// GET /api/v1/recommendations
///
/// Ranked careers for the stored profile, or a call-to-action when the
/// assessment has not been completed.
pub async fn handle_get_recommendations(State(state): State<AppState>) -> Json<Gated<ResultsView>> {
    let profile = state.profiles.snapshot().await;
    if !profile.assessment_completed {
        return Json(Gated::AssessmentRequired(CallToAction::start_assessment(
            "Complete Your Assessment First",
            "To get personalized career recommendations, please complete your career assessment.",
        )));
    }

    let ranked = state.scorer.score_and_rank(&career_catalog(), &profile);
    Json(Gated::Ready(ResultsView {
        summary: summarize(&profile),
        recommendations: ranked
            .into_iter()
            .enumerate()
            .map(|(i, career)| RankedCareer { rank: i + 1, career })
            .collect(),
        scorer_backend: state.scorer.backend(),
    }))
}

fn summarize(profile: &Profile) -> ProfileSummary {
    ProfileSummary {
        top_interests: profile.interests.iter().take(SUMMARY_ITEMS).cloned().collect(),
        key_skills: profile.skills.iter().take(SUMMARY_ITEMS).cloned().collect(),
        education: profile.education.clone(),
        experience: profile.experience.clone(),
    }
}
