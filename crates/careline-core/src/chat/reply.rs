//! Parse the model's JSON reply into a [`TriageReply`].
//!
//! The body must be a JSON object. Individual keys are read best-effort:
//! a missing, `null`, or wrongly typed key takes its default instead of
//! failing the turn.

use serde_json::{Map, Value};

use careline_types::chat::{DEFAULT_REPLY, INTENT_UNKNOWN, RiskLevel, TriageReply, empty_entities};
use careline_types::error::ChatError;

/// Parse raw model output.
///
/// # Errors
///
/// - [`ChatError::EmptyReply`] if the content is blank
/// - [`ChatError::MalformedReply`] if it is not a JSON object
pub fn parse_reply(content: &str) -> Result<TriageReply, ChatError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ChatError::EmptyReply);
    }

    let value: Value =
        serde_json::from_str(trimmed).map_err(|e| ChatError::MalformedReply(e.to_string()))?;

    let Value::Object(map) = value else {
        return Err(ChatError::MalformedReply(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    };

    Ok(TriageReply {
        intent: string_field(&map, "intent").unwrap_or_else(|| INTENT_UNKNOWN.to_string()),
        entities: entities_field(&map),
        reply: string_field(&map, "reply").unwrap_or_else(|| DEFAULT_REPLY.to_string()),
        triage_assessment: non_empty(string_field(&map, "triage_assessment")),
        risk_level: string_field(&map, "risk_level").and_then(|s| s.parse::<RiskLevel>().ok()),
        advice: non_empty(string_field(&map, "advice")),
        followup_questions: map
            .get("followup_questions")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
    })
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

fn entities_field(map: &Map<String, Value>) -> Value {
    match map.get("entities") {
        Some(entities @ Value::Object(_)) => entities.clone(),
        Some(Value::Null) | None => empty_entities(),
        Some(other) => {
            tracing::debug!(kind = json_kind(other), "Ignoring non-object entities");
            empty_entities()
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
