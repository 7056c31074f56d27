//! Error envelope returned by every failing API call.
//!
//! ```json
//! {
//!   "data": null,
//!   "meta": { "request_id": "...", "timestamp": "..." },
//!   "errors": [{ "code": "MALFORMED_LLM_REPLY", "message": "..." }]
//! }
//! ```

use serde::Serialize;

/// Envelope wrapping an API error.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Always `null` on failure.
    pub data: Option<serde_json::Value>,
    pub meta: ApiMeta,
    pub errors: Vec<ApiErrorDetail>,
}

/// Metadata included in every envelope.
#[derive(Debug, Serialize)]
pub struct ApiMeta {
    /// Unique identifier for correlating with server logs.
    pub request_id: String,
    /// RFC 3339 timestamp of the response.
    pub timestamp: String,
}

/// Individual error detail.
#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorEnvelope {
    /// Envelope with a single error and a fresh request id.
    pub fn single(code: &str, message: impl Into<String>) -> Self {
        Self {
            data: None,
            meta: ApiMeta {
                request_id: uuid::Uuid::now_v7().to_string(),
                timestamp: chrono::Utc::now().to_rfc3339(),
            },
            errors: vec![ApiErrorDetail {
                code: code.to_string(),
                message: message.into(),
            }],
        }
    }

    pub fn request_id(&self) -> &str {
        &self.meta.request_id
    }
}
