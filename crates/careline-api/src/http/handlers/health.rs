//! Liveness endpoint.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use careline_core::session::SessionStore;

use crate::state::AppState;

/// GET /health -- process is up; reports live session count.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "active_sessions": state.chat_service.sessions().len(),
    }))
}
