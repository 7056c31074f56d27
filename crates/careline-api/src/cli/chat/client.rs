//! HTTP client for a running Careline server.

use anyhow::{Context, bail};
use serde_json::{Value, json};

use careline_types::chat::ChatResponse;

/// A server reply, kept both typed and raw (for `--json`).
#[derive(Debug)]
pub struct ServerReply {
    pub response: ChatResponse,
    pub raw: Value,
}

/// Thin wrapper over `reqwest::Client` bound to one server.
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChatClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /start`: open a session and fetch the greeting.
    pub async fn start(&self) -> anyhow::Result<ServerReply> {
        let response = self
            .http
            .get(format!("{}/start", self.base_url))
            .send()
            .await
            .with_context(|| format!("could not reach Careline at {}", self.base_url))?;
        read_reply(response).await
    }

    /// `POST /chat`: send one message within `session_id`.
    pub async fn send(&self, message: &str, session_id: &str) -> anyhow::Result<ServerReply> {
        let response = self
            .http
            .post(format!("{}/chat", self.base_url))
            .json(&json!({ "message": message, "session_id": session_id }))
            .send()
            .await
            .with_context(|| format!("could not reach Careline at {}", self.base_url))?;
        read_reply(response).await
    }
}

async fn read_reply(response: reqwest::Response) -> anyhow::Result<ServerReply> {
    let status = response.status();
    let raw: Value = response
        .json()
        .await
        .with_context(|| format!("server returned a non-JSON body (HTTP {})", status.as_u16()))?;

    if !status.is_success() {
        let message = envelope_message(&raw)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());
        bail!("HTTP {}: {message}", status.as_u16());
    }

    let response: ChatResponse =
        serde_json::from_value(raw.clone()).context("unexpected response shape")?;
    Ok(ServerReply { response, raw })
}

/// First error message from an error envelope, if the body is one.
pub fn envelope_message(body: &Value) -> Option<String> {
    let error = body.get("errors")?.as_array()?.first()?;
    let code = error.get("code").and_then(Value::as_str).unwrap_or("ERROR");
    let message = error.get("message").and_then(Value::as_str)?;
    Some(format!("{code}: {message}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ChatClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_envelope_message_extracts_first_error() {
        let body = json!({
            "data": null,
            "meta": {"request_id": "r", "timestamp": "t"},
            "errors": [{"code": "LLM_ERROR", "message": "authentication failed"}]
        });
        assert_eq!(
            envelope_message(&body).as_deref(),
            Some("LLM_ERROR: authentication failed")
        );
    }

    #[test]
    fn test_envelope_message_none_for_plain_body() {
        let body = json!({"session_id": "abc", "intent": "greeting"});
        assert!(envelope_message(&body).is_none());
    }
}
