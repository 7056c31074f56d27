use thiserror::Error;

use crate::llm::LlmError;

/// Errors from handling a chat turn.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("llm call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("model reply is not a JSON object: {0}")]
    MalformedReply(String),

    #[error("model returned an empty reply")]
    EmptyReply,
}

/// Errors from loading configuration or secrets at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not found in environment variables")]
    MissingSecret(String),

    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },
}
