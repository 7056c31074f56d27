//! Integration tests for the Careline HTTP API.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use careline_api::http::router::build_router;
use careline_api::state::AppState;
use careline_core::chat::service::{ChatService, ChatSettings};
use careline_core::llm::box_provider::BoxLlmProvider;
use careline_core::llm::provider::LlmProvider;
use careline_core::session::InMemorySessionStore;
use careline_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities, StopReason, Usage,
};

/// Replies with fixed content, or fails with `error` when set.
struct CannedProvider {
    content: String,
    error: Option<fn() -> LlmError>,
    calls: Arc<AtomicUsize>,
    capabilities: ProviderCapabilities,
}

impl LlmProvider for CannedProvider {
    fn name(&self) -> &str {
        "canned"
    }

    fn capabilities(&self) -> &ProviderCapabilities {
        &self.capabilities
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.error {
            return Err(error());
        }
        Ok(CompletionResponse {
            id: "chatcmpl-test".to_string(),
            content: self.content.clone(),
            model: request.model.clone(),
            stop_reason: StopReason::EndTurn,
            usage: Usage::default(),
        })
    }
}

const TRIAGE_REPLY: &str = r#"{
    "intent": "symptom_triage",
    "entities": {"symptoms": ["sore throat"], "duration": "2 days"},
    "risk_level": "mild",
    "reply": "Do you have a fever?"
}"#;

fn app_with(content: &str, error: Option<fn() -> LlmError>) -> (axum::Router, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = CannedProvider {
        content: content.to_string(),
        error,
        calls: calls.clone(),
        capabilities: ProviderCapabilities {
            json_mode: true,
            max_output_tokens: 8_192,
        },
    };
    let service = ChatService::new(
        InMemorySessionStore::new(),
        BoxLlmProvider::new(provider),
        ChatSettings::default(),
    );
    (build_router(AppState::new(service)), calls)
}

fn test_app() -> (axum::Router, Arc<AtomicUsize>) {
    app_with(TRIAGE_REPLY, None)
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn get(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

async fn post_chat(app: &axum::Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chat")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
async fn test_start_returns_greeting() {
    let (app, calls) = test_app();

    let (status, json) = get(&app, "/start").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["intent"], "greeting");
    assert_eq!(json["entities"], json!({}));
    assert_eq!(
        json["reply"],
        "Hello! I’m your healthcare assistant. How can I help you today?"
    );
    assert!(!json["session_id"].as_str().unwrap().is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_full_session_flow() {
    let (app, calls) = test_app();

    // 1. Open a session
    let (_, json) = get(&app, "/start").await;
    let session_id = json["session_id"].as_str().unwrap().to_string();

    // 2. Five turns reach the model, same id every time
    for _ in 0..5 {
        let (status, json) =
            post_chat(&app, json!({"message": "sore throat", "session_id": session_id})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["session_id"], session_id);
        assert_eq!(json["intent"], "symptom_triage");
        assert_eq!(json["entities"]["duration"], "2 days");
        assert_eq!(json["reply"], "Do you have a fever?");
        // Only the forwarded keys are on the wire.
        assert!(json.get("risk_level").is_none());
    }
    assert_eq!(calls.load(Ordering::SeqCst), 5);

    // 3. Sixth turn closes the session without a model call
    let (status, json) =
        post_chat(&app, json!({"message": "still there?", "session_id": session_id})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["intent"], "session_end");
    assert_eq!(json["entities"], json!({}));
    assert_eq!(
        json["reply"],
        "Our session has ended. Please start a new chat if you need further help."
    );
    assert_eq!(calls.load(Ordering::SeqCst), 5);

    // 4. The id is forgotten: next contact greets again
    let (_, json) = post_chat(&app, json!({"message": "hi", "session_id": session_id})).await;
    assert_eq!(json["intent"], "greeting");
    assert_eq!(json["session_id"], session_id);
}

#[tokio::test]
async fn test_chat_without_session_id_greets() {
    let (app, calls) = test_app();

    let (status, json) = post_chat(&app, json!({"message": ""})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["intent"], "greeting");
    assert!(!json["session_id"].as_str().unwrap().is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_chat_with_null_session_id_greets() {
    let (app, _) = test_app();

    let (status, json) = post_chat(&app, json!({"message": "hi", "session_id": null})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["intent"], "greeting");
}

#[tokio::test]
async fn test_missing_reply_keys_use_defaults() {
    let (app, _) = app_with("{}", None);
    let (_, json) = get(&app, "/start").await;
    let session_id = json["session_id"].as_str().unwrap().to_string();

    let (status, json) =
        post_chat(&app, json!({"message": "hello", "session_id": session_id})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["intent"], "unknown");
    assert_eq!(json["entities"], json!({}));
    assert_eq!(json["reply"], "I'm here to help.");
}

#[tokio::test]
async fn test_malformed_reply_is_502_envelope() {
    let (app, _) = app_with("I am not JSON", None);
    let (_, json) = get(&app, "/start").await;
    let session_id = json["session_id"].as_str().unwrap().to_string();

    let (status, json) =
        post_chat(&app, json!({"message": "hello", "session_id": session_id})).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(json["data"].is_null());
    assert_eq!(json["errors"][0]["code"], "MALFORMED_LLM_REPLY");
    assert!(json["meta"]["request_id"].is_string());
}

#[tokio::test]
async fn test_rate_limited_provider_is_429() {
    let (app, _) = app_with(
        "",
        Some(|| LlmError::RateLimited {
            retry_after_ms: None,
        }),
    );
    let (_, json) = get(&app, "/start").await;
    let session_id = json["session_id"].as_str().unwrap().to_string();

    let (status, json) =
        post_chat(&app, json!({"message": "hello", "session_id": session_id})).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["errors"][0]["code"], "LLM_ERROR");
}

#[tokio::test]
async fn test_missing_message_is_rejected() {
    let (app, calls) = test_app();

    let (status, json) = post_chat(&app, json!({"session_id": "abc"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["errors"][0]["code"], "VALIDATION_ERROR");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_non_json_body_is_rejected() {
    let (app, _) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chat")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_reports_sessions() {
    let (app, _) = test_app();

    let (_, json) = get(&app, "/health").await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["active_sessions"], 0);

    get(&app, "/start").await;
    get(&app, "/start").await;

    let (status, json) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["active_sessions"], 2);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let (app, _) = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/chat")
                .header("origin", "http://localhost:3000")
                .header("access-control-request-method", "POST")
                .header("access-control-request-headers", "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
