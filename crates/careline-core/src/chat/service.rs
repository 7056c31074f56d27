//! Chat service: one call per user turn.
//!
//! Flow for [`ChatService::handle`]:
//! unknown session -> greeting (no LLM call);
//! exhausted session -> `session_end` and the session is removed;
//! otherwise -> count the turn, call the LLM with the fixed system prompt
//! and the raw user message, parse its JSON reply.

use chrono::Utc;
use tracing::{Instrument, Level, debug, info, info_span, warn};

use careline_types::chat::{ChatRequest, ChatResponse, RiskLevel, TriageReply};
use careline_types::config::{LlmConfig, SessionConfig};
use careline_types::error::ChatError;
use careline_types::llm::{CompletionRequest, ResponseFormat};
use careline_types::session::TurnOutcome;

use crate::llm::box_provider::BoxLlmProvider;
use crate::session::SessionStore;

use super::prompt::{SYSTEM_PROMPT, is_model_intent};
use super::reply::parse_reply;

/// Per-turn LLM and session settings.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: Option<f64>,
    pub max_turns: u32,
}

impl ChatSettings {
    /// Build settings from the `[llm]` and `[session]` config sections.
    pub fn from_config(llm: &LlmConfig, session: &SessionConfig) -> Self {
        Self {
            model: llm.model.clone(),
            max_tokens: llm.max_tokens,
            temperature: llm.temperature,
            max_turns: session.max_turns,
        }
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self::from_config(&LlmConfig::default(), &SessionConfig::default())
    }
}

/// Handles chat turns against a session store and an LLM provider.
pub struct ChatService<S: SessionStore> {
    sessions: S,
    provider: BoxLlmProvider,
    settings: ChatSettings,
}

impl<S: SessionStore> ChatService<S> {
    pub fn new(sessions: S, provider: BoxLlmProvider, settings: ChatSettings) -> Self {
        Self {
            sessions,
            provider,
            settings,
        }
    }

    /// Access the session store.
    pub fn sessions(&self) -> &S {
        &self.sessions
    }

    /// Open a new session and return the greeting.
    pub fn start(&self) -> ChatResponse {
        let session_id = self.sessions.create();
        info!(session_id = %session_id, "Session started");
        ChatResponse::greeting(session_id)
    }

    /// Handle one chat turn.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError`] if the LLM call fails or its reply is not a JSON
    /// object. The turn has already been counted by then.
    pub async fn handle(&self, request: ChatRequest) -> Result<ChatResponse, ChatError> {
        // An empty id counts as absent.
        let Some(session_id) = request.session_id.filter(|id| !id.is_empty()) else {
            return Ok(self.start());
        };

        match self.sessions.advance(&session_id, self.settings.max_turns) {
            TurnOutcome::Created => {
                info!(session_id = %session_id, "Session registered from client id");
                Ok(ChatResponse::greeting(session_id))
            }
            TurnOutcome::Expired { created_at } => {
                info!(
                    session_id = %session_id,
                    max_turns = self.settings.max_turns,
                    age_secs = (Utc::now() - created_at).num_seconds(),
                    "Turn limit reached, session closed"
                );
                Ok(ChatResponse::session_end(session_id))
            }
            TurnOutcome::Continue { turn } => {
                let reply = self
                    .triage(&request.message)
                    .instrument(info_span!("chat_turn", session_id = %session_id, turn))
                    .await?;
                Ok(reply.into_response(session_id))
            }
        }
    }

    /// Send one message to the model and parse its reply.
    async fn triage(&self, message: &str) -> Result<TriageReply, ChatError> {
        let request = self.build_request(message);

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.operation.name = "chat",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = ?request.temperature,
        );

        let response = self.provider.complete(&request).instrument(span).await?;

        debug!(
            response_id = %response.id,
            stop_reason = %response.stop_reason,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "LLM reply received"
        );

        let reply = parse_reply(&response.content).inspect_err(|e| {
            warn!(error = %e, "Could not parse LLM reply");
        })?;

        if !is_model_intent(&reply.intent) {
            debug!(intent = %reply.intent, "Model returned an unlisted intent");
        }

        if triage_log_level(reply.risk_level) == Level::WARN {
            warn!(
                intent = %reply.intent,
                assessment = ?reply.triage_assessment,
                "Emergency risk level reported"
            );
        } else {
            info!(
                intent = %reply.intent,
                risk_level = ?reply.risk_level,
                followups = reply.followup_questions.len(),
                "Triage reply parsed"
            );
        }

        Ok(reply)
    }

    /// Shape the request to what the provider supports.
    fn build_request(&self, message: &str) -> CompletionRequest {
        let capabilities = self.provider.capabilities();

        // The prompt still demands JSON, so the parser works either way.
        let response_format = if capabilities.json_mode {
            ResponseFormat::JsonObject
        } else {
            debug!(provider = self.provider.name(), "JSON mode unsupported, requesting text");
            ResponseFormat::Text
        };

        CompletionRequest {
            model: self.settings.model.clone(),
            system: Some(SYSTEM_PROMPT.to_string()),
            message: message.to_string(),
            max_tokens: self.settings.max_tokens.min(capabilities.max_output_tokens),
            temperature: self.settings.temperature,
            response_format,
        }
    }
}

/// Level at which a parsed triage reply is logged.
fn triage_log_level(risk_level: Option<RiskLevel>) -> Level {
    match risk_level {
        Some(RiskLevel::Emergency) => Level::WARN,
        _ => Level::INFO,
    }
}
