//! Session types for Careline.
//!
//! A session is a short-lived conversation context keyed by an opaque
//! identifier. It lives only in process memory and is bounded by a turn limit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of LLM turns allowed per session.
pub const DEFAULT_MAX_TURNS: u32 = 5;

/// A single conversation context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    /// Number of turns that have been forwarded to the LLM.
    pub turns: u32,
    /// Whether the greeting has been sent for this session.
    pub greeted: bool,
    /// Logged as the session age when the turn limit closes it.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// A fresh session: zero turns, greeting already sent.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            turns: 0,
            greeted: true,
            created_at: Utc::now(),
        }
    }

    /// Whether the session has used up its turn budget.
    pub fn is_exhausted(&self, max_turns: u32) -> bool {
        self.turns >= max_turns
    }
}

/// Result of the per-request check-and-increment on a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The id was unknown; a fresh session was registered.
    Created,
    /// The turn budget was spent; the session was removed.
    Expired { created_at: DateTime<Utc> },
    /// The turn counter was incremented to `turn`.
    Continue { turn: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = Session::new("abc");
        assert_eq!(session.id, "abc");
        assert_eq!(session.turns, 0);
        assert!(session.greeted);
    }

    #[test]
    fn test_is_exhausted() {
        let mut session = Session::new("abc");
        assert!(!session.is_exhausted(DEFAULT_MAX_TURNS));
        session.turns = 4;
        assert!(!session.is_exhausted(DEFAULT_MAX_TURNS));
        session.turns = 5;
        assert!(session.is_exhausted(DEFAULT_MAX_TURNS));
    }
}
