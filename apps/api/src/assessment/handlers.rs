//! Axum route handlers for the Assessment API.

use axum::{extract::State, Json};

use crate::assessment::steps::{completion_patch, wizard_steps, AssessmentSubmission, StepDefinition};
use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::state::AppState;

/// GET /api/v1/assessment
pub async fn handle_get_steps() -> Json<Vec<StepDefinition>> {
    Json(wizard_steps())
}

/// POST /api/v1/assessment
///
/// Completes the wizard: validates the answers and merges them into the
/// stored profile with the completion flag set.
pub async fn handle_complete_assessment(
    State(state): State<AppState>,
    Json(submission): Json<AssessmentSubmission>,
) -> Result<Json<Profile>, AppError> {
    let patch = completion_patch(submission)?;
    let profile = state.profiles.merge_save(patch).await?;
    tracing::info!(
        "Assessment completed with {} interest(s) and {} skill(s)",
        profile.interests.len(),
        profile.skills.len()
    );
    Ok(Json(profile))
}
