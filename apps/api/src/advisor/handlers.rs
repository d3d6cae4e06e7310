//! Axum route handlers for the Chat API.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::advisor::session::{QuickAction, QUICK_ACTIONS};
use crate::errors::AppError;
use crate::models::chat::ChatMessage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub messages: Vec<ChatMessage>,
    /// True while a reply is pending; clients disable their send control.
    pub replying: bool,
}

/// GET /api/v1/chat
pub async fn handle_get_transcript(State(state): State<AppState>) -> Json<TranscriptResponse> {
    let profile = state.profiles.snapshot().await;
    Json(TranscriptResponse {
        messages: state.chat.transcript(&profile).await,
        replying: state.chat.is_replying(),
    })
}

/// POST /api/v1/chat/messages
///
/// Returns the advisor's reply once the simulated delay has elapsed. The
/// reply is recorded even if the client disconnects first.
/// Blank content is ignored with 204 No Content.
pub async fn handle_send_message(
    State(state): State<AppState>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Response, AppError> {
    let profile = state.profiles.snapshot().await;
    let reply = state
        .chat
        .send(&request.content, profile, state.rng.clone())
        .await?;

    Ok(match reply {
        Some(message) => Json(message).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// GET /api/v1/chat/quick-actions
pub async fn handle_quick_actions() -> Json<&'static [QuickAction]> {
    Json(QUICK_ACTIONS)
}
