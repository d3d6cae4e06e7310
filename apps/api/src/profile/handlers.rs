//! Axum route handlers for the Profile API.

use axum::{extract::State, http::StatusCode, Json};

use crate::errors::AppError;
use crate::models::profile::{Profile, ProfilePatch};
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.profiles.snapshot().await)
}

/// PATCH /api/v1/profile
///
/// Merges the present fields into the stored profile.
pub async fn handle_patch_profile(
    State(state): State<AppState>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<Profile>, AppError> {
    let profile = state.profiles.merge_save(patch).await?;
    Ok(Json(profile))
}

/// DELETE /api/v1/profile
///
/// Explicit reset. The chat transcript goes with it, since its greeting
/// names the user.
pub async fn handle_clear_profile(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.profiles.clear().await?;
    state.chat.reset().await;
    Ok(StatusCode::NO_CONTENT)
}
