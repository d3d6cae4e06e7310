use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service version and the simulated latency clients should expect.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let config = &state.config;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "careerbuddy-api",
        "simulated_latency_ms": {
            "chat_min": config.chat_delay_min_ms,
            "chat_max": config.chat_delay_max_ms,
            "resume": config.resume_delay_ms
        },
        "seeded": config.rng_seed.is_some()
    }))
}
