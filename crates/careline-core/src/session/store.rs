//! SessionStore trait definition.

use careline_types::session::{Session, TurnOutcome};

/// Mapping from session id to session state.
///
/// Implementations must make [`SessionStore::advance`] atomic per id: two
/// concurrent calls for the same session never observe the same turn count.
pub trait SessionStore: Send + Sync {
    /// Register a session under a freshly generated id and return the id.
    fn create(&self) -> String;

    /// Snapshot of the session, if present.
    fn get(&self, id: &str) -> Option<Session>;

    /// Remove the session and return its last state.
    fn delete(&self, id: &str) -> Option<Session>;

    /// Check-and-increment step for one chat turn.
    ///
    /// - unknown id: register it, return [`TurnOutcome::Created`]
    /// - `turns >= max_turns`: remove it, return [`TurnOutcome::Expired`]
    /// - otherwise: increment, return [`TurnOutcome::Continue`]
    fn advance(&self, id: &str, max_turns: u32) -> TurnOutcome;

    /// Number of live sessions.
    fn len(&self) -> usize;

    /// Whether no sessions are live.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
