//! Application error type mapping to HTTP status codes and envelope format.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use careline_types::error::ChatError;
use careline_types::llm::LlmError;

use super::response::ErrorEnvelope;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat turn failed after the session bookkeeping ran.
    Chat(ChatError),
    /// Request body was not a valid `ChatRequest`.
    BadRequest(JsonRejection),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest(e)
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Chat(e @ (ChatError::MalformedReply(_) | ChatError::EmptyReply)) => {
                (StatusCode::BAD_GATEWAY, "MALFORMED_LLM_REPLY", e.to_string())
            }
            AppError::Chat(e @ ChatError::Llm(LlmError::RateLimited { .. })) => {
                (StatusCode::TOO_MANY_REQUESTS, "LLM_ERROR", e.to_string())
            }
            AppError::Chat(e @ ChatError::Llm(_)) => {
                (StatusCode::BAD_GATEWAY, "LLM_ERROR", e.to_string())
            }
            AppError::BadRequest(rejection) => {
                (rejection.status(), "VALIDATION_ERROR", rejection.body_text())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        let envelope = ErrorEnvelope::single(code, message.clone());

        if status.is_server_error() {
            tracing::error!(
                request_id = envelope.request_id(),
                code,
                error = %message,
                "Chat request failed"
            );
        } else {
            tracing::debug!(request_id = envelope.request_id(), code, "Chat request rejected");
        }

        (status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_reply_is_bad_gateway() {
        let (status, code, message) =
            AppError::from(ChatError::MalformedReply("expected value".into())).parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "MALFORMED_LLM_REPLY");
        assert!(message.contains("expected value"));
    }

    #[test]
    fn empty_reply_is_bad_gateway() {
        let (status, code, _) = AppError::from(ChatError::EmptyReply).parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "MALFORMED_LLM_REPLY");
    }

    #[test]
    fn rate_limit_is_429() {
        let err = ChatError::Llm(LlmError::RateLimited {
            retry_after_ms: None,
        });
        let (status, code, _) = AppError::from(err).parts();
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(code, "LLM_ERROR");
    }

    #[test]
    fn auth_failure_is_bad_gateway() {
        let (status, code, _) =
            AppError::from(ChatError::Llm(LlmError::AuthenticationFailed)).parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "LLM_ERROR");
    }
}
