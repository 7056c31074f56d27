//! Chat request/response records and the parsed triage reply.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Intent emitted when a session is created.
pub const INTENT_GREETING: &str = "greeting";

/// Intent emitted when a session runs out of turns.
pub const INTENT_SESSION_END: &str = "session_end";

/// Intent used when the model omits one.
pub const INTENT_UNKNOWN: &str = "unknown";

/// Reply sent on first contact.
pub const GREETING_REPLY: &str = "Hello! I’m your healthcare assistant. How can I help you today?";

/// Reply sent when the turn budget is exhausted.
pub const SESSION_END_REPLY: &str =
    "Our session has ended. Please start a new chat if you need further help.";

/// Reply used when the model omits one.
pub const DEFAULT_REPLY: &str = "I'm here to help.";

/// Inbound chat turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Existing session to continue; a new one is created when absent.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Outbound chat turn, returned by both `/start` and `/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub intent: String,
    #[serde(default = "empty_entities")]
    pub entities: Value,
    pub reply: String,
}

/// The `{}` entities object.
pub fn empty_entities() -> Value {
    Value::Object(serde_json::Map::new())
}

impl ChatResponse {
    /// Greeting for a freshly created session.
    pub fn greeting(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            intent: INTENT_GREETING.to_string(),
            entities: empty_entities(),
            reply: GREETING_REPLY.to_string(),
        }
    }

    /// Termination message for an exhausted session.
    pub fn session_end(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            intent: INTENT_SESSION_END.to_string(),
            entities: empty_entities(),
            reply: SESSION_END_REPLY.to_string(),
        }
    }

    /// Whether this response closes the session.
    pub fn is_session_end(&self) -> bool {
        self.intent == INTENT_SESSION_END
    }
}

/// Urgency label the model attaches to a triage assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Mild,
    Moderate,
    High,
    Emergency,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Mild => write!(f, "mild"),
            RiskLevel::Moderate => write!(f, "moderate"),
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Emergency => write!(f, "emergency"),
        }
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "mild" => Ok(RiskLevel::Mild),
            "moderate" => Ok(RiskLevel::Moderate),
            "high" => Ok(RiskLevel::High),
            "emergency" => Ok(RiskLevel::Emergency),
            other => Err(format!("invalid risk level: '{other}'")),
        }
    }
}

/// Everything Careline reads out of one model reply.
///
/// Only `intent`, `entities` and `reply` reach the caller; the remaining
/// fields are kept for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageReply {
    pub intent: String,
    pub entities: Value,
    pub reply: String,
    pub triage_assessment: Option<String>,
    pub risk_level: Option<RiskLevel>,
    pub advice: Option<String>,
    pub followup_questions: Vec<String>,
}

impl TriageReply {
    /// Project the caller-visible fields into a response for `session_id`.
    pub fn into_response(self, session_id: impl Into<String>) -> ChatResponse {
        ChatResponse {
            session_id: session_id.into(),
            intent: self.intent,
            entities: self.entities,
            reply: self.reply,
        }
    }
}
