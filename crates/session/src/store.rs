use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use phonehub_core::{Entity, SessionId};

use crate::state::SessionState;

/// Registry of live sessions, one [`SessionState`] per id.
///
/// Each session is mutated in place under the store's lock, so two requests
/// for the same session never interleave inside an update.
pub trait SessionStore: Send + Sync {
    /// Start a new session and return a snapshot of it.
    fn create(&self) -> SessionState;

    fn get(&self, id: SessionId) -> Option<SessionState>;

    /// Apply `f` to the session; `None` when the id is unknown.
    fn update<R>(&self, id: SessionId, f: impl FnOnce(&mut SessionState) -> R) -> Option<R>;

    /// End a session. Returns whether it existed.
    fn remove(&self, id: SessionId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> SessionStore for Arc<S>
where
    S: SessionStore,
{
    fn create(&self) -> SessionState {
        (**self).create()
    }

    fn get(&self, id: SessionId) -> Option<SessionState> {
        (**self).get(id)
    }

    fn update<R>(&self, id: SessionId, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        (**self).update(id, f)
    }

    fn remove(&self, id: SessionId) -> bool {
        (**self).remove(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Default bound on concurrently held sessions.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Default)]
struct Sessions {
    by_id: HashMap<SessionId, SessionState>,
    /// Creation order, oldest first.
    created: VecDeque<SessionId>,
}

/// In-memory session registry. Sessions end with the process.
///
/// Holds at most `max_sessions`; starting one more evicts the session that
/// was created first. A poisoned lock is recovered: every mutation leaves the
/// map consistent, so the data behind it is still valid.
#[derive(Debug)]
pub struct InMemorySessionStore {
    inner: RwLock<Sessions>,
    max_sessions: usize,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_max_sessions(DEFAULT_MAX_SESSIONS)
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `max_sessions` below 1 is raised to 1.
    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            inner: RwLock::new(Sessions::default()),
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    fn read(&self) -> RwLockReadGuard<'_, Sessions> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Sessions> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for InMemorySessionStore {
    fn create(&self) -> SessionState {
        let session = SessionState::new(SessionId::new(), Utc::now());
        let mut sessions = self.write();

        while sessions.by_id.len() >= self.max_sessions {
            let Some(oldest) = sessions.created.pop_front() else {
                break;
            };
            if sessions.by_id.remove(&oldest).is_some() {
                tracing::info!(session_id = %oldest, "session evicted");
            }
        }

        sessions.by_id.insert(*session.id(), session.clone());
        sessions.created.push_back(*session.id());
        drop(sessions);

        tracing::info!(session_id = %session.id(), "session started");
        session
    }

    fn get(&self, id: SessionId) -> Option<SessionState> {
        self.read().by_id.get(&id).cloned()
    }

    fn update<R>(&self, id: SessionId, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        self.write().by_id.get_mut(&id).map(f)
    }

    fn remove(&self, id: SessionId) -> bool {
        let removed = {
            let mut sessions = self.write();
            sessions.created.retain(|c| *c != id);
            sessions.by_id.remove(&id).is_some()
        };
        if removed {
            tracing::info!(session_id = %id, "session ended");
        }
        removed
    }

    fn len(&self) -> usize {
        self.read().by_id.len()
    }
}
