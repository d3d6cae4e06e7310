use axum::{extract::State, Json};

use crate::dashboard::{build_dashboard, Dashboard};
use crate::models::view::Gated;
use crate::state::AppState;

/// GET /api/v1/dashboard
pub async fn handle_get_dashboard(State(state): State<AppState>) -> Json<Gated<Dashboard>> {
    let profile = state.profiles.snapshot().await;
    Json(build_dashboard(&profile))
}
