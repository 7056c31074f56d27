//! Chat endpoint handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use careline_types::chat::{ChatRequest, ChatResponse};

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /start -- open a session and return the greeting.
pub async fn start_session(State(state): State<AppState>) -> Json<ChatResponse> {
    Json(state.chat_service.start())
}

/// POST /chat -- handle one user turn.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    let response = state.chat_service.handle(request).await?;
    Ok(Json(response))
}
