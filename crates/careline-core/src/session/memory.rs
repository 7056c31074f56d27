//! In-memory session store backed by `DashMap`.
//!
//! Sessions live for the lifetime of the process. Reads return cloned
//! snapshots so no `DashMap` guard outlives the call.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use careline_types::session::{Session, TurnOutcome};

use super::store::SessionStore;

/// Process-local session store.
///
/// Cloning produces a shared view of the same underlying map (backed by `Arc`).
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    inner: Arc<DashMap<String, Session>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn create(&self) -> String {
        let id = Uuid::now_v7().to_string();
        self.inner.insert(id.clone(), Session::new(id.clone()));
        id
    }

    fn get(&self, id: &str) -> Option<Session> {
        self.inner.get(id).map(|r| r.value().clone())
    }

    fn delete(&self, id: &str) -> Option<Session> {
        self.inner.remove(id).map(|(_, session)| session)
    }

    fn advance(&self, id: &str, max_turns: u32) -> TurnOutcome {
        // The entry guard holds the shard lock for the whole decision.
        match self.inner.entry(id.to_string()) {
            Entry::Vacant(vacant) => {
                vacant.insert(Session::new(id));
                TurnOutcome::Created
            }
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_exhausted(max_turns) {
                    let session = occupied.remove();
                    TurnOutcome::Expired {
                        created_at: session.created_at,
                    }
                } else {
                    let session = occupied.get_mut();
                    session.turns += 1;
                    TurnOutcome::Continue {
                        turn: session.turns,
                    }
                }
            }
        }
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
