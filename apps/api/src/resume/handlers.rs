//! Axum route handlers for the Resume Analysis API.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::AnalysisResult;
use crate::resume::sample::SAMPLE_RESUME;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct LatestAnalysisResponse {
    pub analysis: Option<AnalysisResult>,
    pub analyzing: bool,
}

#[derive(Debug, Serialize)]
pub struct SampleResumeResponse {
    pub resume_text: &'static str,
}

/// POST /api/v1/resume/analyze
///
/// Responds after the simulated analysis delay. Blank text is ignored with
/// 204 No Content and the previous result is kept.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Response, AppError> {
    let result = state
        .resume
        .run(&request.resume_text, state.rng.clone())
        .await?;

    Ok(match result {
        Some(analysis) => Json(analysis).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// GET /api/v1/resume/analysis
pub async fn handle_latest_analysis(State(state): State<AppState>) -> Json<LatestAnalysisResponse> {
    Json(LatestAnalysisResponse {
        analysis: state.resume.latest().await,
        analyzing: state.resume.is_analyzing(),
    })
}

/// GET /api/v1/resume/sample
pub async fn handle_sample_resume() -> Json<SampleResumeResponse> {
    Json(SampleResumeResponse {
        resume_text: SAMPLE_RESUME,
    })
}
