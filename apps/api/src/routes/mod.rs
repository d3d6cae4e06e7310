pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as chat;
use crate::assessment::handlers as assessment;
use crate::dashboard::handlers as dashboard;
use crate::errors::AppError;
use crate::profile::handlers as profile;
use crate::recommendations::handlers as recommendations;
use crate::resume::handlers as resume;
use crate::skill_gap::handlers as skill_gap;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile Store
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile)
                .patch(profile::handle_patch_profile)
                .delete(profile::handle_clear_profile),
        )
        // Assessment wizard
        .route(
            "/api/v1/assessment",
            get(assessment::handle_get_steps).post(assessment::handle_complete_assessment),
        )
        // Advisor chat
        .route("/api/v1/chat", get(chat::handle_get_transcript))
        .route("/api/v1/chat/messages", post(chat::handle_send_message))
        .route("/api/v1/chat/quick-actions", get(chat::handle_quick_actions))
        // Results and dashboard
        .route(
            "/api/v1/recommendations",
            get(recommendations::handle_get_recommendations),
        )
        .route("/api/v1/dashboard", get(dashboard::handle_get_dashboard))
        // Resume analysis
        .route("/api/v1/resume/analyze", post(resume::handle_analyze))
        .route("/api/v1/resume/analysis", get(resume::handle_latest_analysis))
        .route("/api/v1/resume/sample", get(resume::handle_sample_resume))
        // Skill gaps
        .route(
            "/api/v1/skill-gaps/careers",
            get(skill_gap::handle_career_options),
        )
        .route("/api/v1/skill-gaps", get(skill_gap::handle_skill_gaps))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::advisor::{ChatService, ReplyDelay};
    use crate::config::Config;
    use crate::profile::ProfileStore;
    use crate::random::StdRandom;
    use crate::recommendations::scorer::RuleBasedScorer;
    use crate::resume::ResumeService;
    use crate::storage::MemoryStore;

    async fn test_router() -> Router {
        let profiles = ProfileStore::load(Arc::new(MemoryStore::new()))
            .await
            .unwrap();
        let state = AppState {
            config: Config {
                chat_delay_min_ms: 0,
                chat_delay_max_ms: 0,
                resume_delay_ms: 0,
                rng_seed: Some(42),
                ..Config::default()
            },
            profiles: Arc::new(profiles),
            chat: Arc::new(ChatService::new(ReplyDelay { min_ms: 0, max_ms: 0 })),
            resume: Arc::new(ResumeService::new(Duration::ZERO)),
            scorer: Arc::new(RuleBasedScorer),
            rng: Arc::new(StdRandom::seeded(42)),
        };
        build_router(state)
    }

    async fn call(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn submission() -> Value {
        json!({
            "personal": { "name": "  Ada ", "email": "ada@example.com" },
            "education": { "level": "Bachelor's Degree", "experience": "2-3 years" },
            "interests": { "selected": ["Technology & Programming", "Design & Creativity"] },
            "skills": { "selected": ["Programming/Coding", "Problem Solving"] },
            "personality": { "analytical": 5, "creativity": 4 }
        })
    }

    #[tokio::test]
    async fn test_health() {
        let router = test_router().await;
        let (status, body) = call(&router, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "careerbuddy-api");
        assert_eq!(body["simulated_latency_ms"]["chat_max"], 0);
        assert_eq!(body["seeded"], true);
    }

    #[tokio::test]
    async fn test_out_of_range_rating_is_json_400() {
        let router = test_router().await;
        for rating in [300, -1] {
            let (status, body) = call(
                &router,
                Method::PATCH,
                "/api/v1/profile",
                Some(json!({ "personality": { "analytical": rating } })),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "rating: {rating}");
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let router = test_router().await;
        let (status, body) = call(&router, Method::GET, "/api/v1/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_gated_views_before_assessment() {
        let router = test_router().await;
        for uri in ["/api/v1/recommendations", "/api/v1/dashboard", "/api/v1/skill-gaps"] {
            let (status, body) = call(&router, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::OK, "uri: {uri}");
            assert_eq!(body["status"], "assessment_required", "uri: {uri}");
            assert_eq!(body["target"], "assessment", "uri: {uri}");
        }
    }

    #[tokio::test]
    async fn test_assessment_unlocks_results() {
        let router = test_router().await;
        let (status, profile) =
            call(&router, Method::POST, "/api/v1/assessment", Some(submission())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(profile["name"], "Ada");
        assert_eq!(profile["assessmentCompleted"], true);

        let (_, results) = call(&router, Method::GET, "/api/v1/recommendations", None).await;
        assert_eq!(results["status"], "ready");
        let ranked = results["recommendations"].as_array().unwrap();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0]["rank"], 1);
        assert_eq!(ranked[0]["title"], "Software Developer");
        assert!(ranked[0]["match"].as_u64().unwrap() <= 98);

        let (_, dashboard) = call(&router, Method::GET, "/api/v1/dashboard", None).await;
        assert_eq!(dashboard["status"], "ready");
        assert_eq!(dashboard["greeting"], "Welcome back, Ada!");

        let (_, gaps) = call(&router, Method::GET, "/api/v1/skill-gaps?career=Data%20Scientist", None).await;
        assert_eq!(gaps["status"], "ready");
        assert_eq!(gaps["career"], "Data Scientist");
        assert_eq!(gaps["gaps"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_assessment_is_rejected() {
        let router = test_router().await;
        let mut body = submission();
        body["skills"]["selected"] = json!(["Telepathy"]);
        let (status, error) = call(&router, Method::POST, "/api/v1/assessment", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["error"]["code"], "VALIDATION_ERROR");

        let (_, profile) = call(&router, Method::GET, "/api/v1/profile", None).await;
        assert_eq!(profile["assessmentCompleted"], false);
    }

    #[tokio::test]
    async fn test_patch_then_clear_profile() {
        let router = test_router().await;
        let (status, profile) = call(
            &router,
            Method::PATCH,
            "/api/v1/profile",
            Some(json!({ "name": "Grace" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(profile["name"], "Grace");

        let (status, _) = call(&router, Method::DELETE, "/api/v1/profile", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, profile) = call(&router, Method::GET, "/api/v1/profile", None).await;
        assert_eq!(profile["name"], "");
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        let router = test_router().await;
        let (_, transcript) = call(&router, Method::GET, "/api/v1/chat", None).await;
        assert_eq!(transcript["messages"].as_array().unwrap().len(), 1);
        assert_eq!(transcript["replying"], false);

        let (status, reply) = call(
            &router,
            Method::POST,
            "/api/v1/chat/messages",
            Some(json!({ "content": "What are the market trends?" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply["sender"], "assistant");

        let (_, transcript) = call(&router, Method::GET, "/api/v1/chat", None).await;
        assert_eq!(transcript["messages"].as_array().unwrap().len(), 3);

        let (status, _) = call(
            &router,
            Method::POST,
            "/api/v1/chat/messages",
            Some(json!({ "content": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_resume_analysis_is_kept() {
        let router = test_router().await;
        let (_, sample) = call(&router, Method::GET, "/api/v1/resume/sample", None).await;
        let text = sample["resume_text"].as_str().unwrap().to_string();

        let (status, analysis) = call(
            &router,
            Method::POST,
            "/api/v1/resume/analyze",
            Some(json!({ "resume_text": text })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let score = analysis["overall_score"].as_u64().unwrap();
        assert!((75..=94).contains(&score));

        let (_, latest) = call(&router, Method::GET, "/api/v1/resume/analysis", None).await;
        assert_eq!(latest["analysis"], analysis);
        assert_eq!(latest["analyzing"], false);
    }

    #[tokio::test]
    async fn test_career_options_flag_gap_data() {
        let router = test_router().await;
        let (_, options) = call(&router, Method::GET, "/api/v1/skill-gaps/careers", None).await;
        let options = options.as_array().unwrap();
        assert_eq!(options.len(), 8);
        let with_data = options.iter().filter(|o| o["has_gap_data"] == true).count();
        assert_eq!(with_data, 3);
    }
}
