//! In-memory store of past brainstorm invocations.
//!
//! Process-lifetime only: the list is gone on restart, which is the
//! intended scope. Append-only, newest first, no dedup, no capacity bound.

use std::sync::Mutex;

use chrono::Utc;
use tracing::info;

use super::types::Session;

/// Managed as Tauri state; every access goes through one lock held for the
/// duration of a single command.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<Vec<Session>>,
}

impl SessionStore {
    /// Record a successful brainstorm. Prepends so `list` returns newest
    /// first without sorting.
    pub fn record(&self, industry: &str, problem: &str, trend: &str) -> Session {
        let now = Utc::now();
        let session = Session {
            id: now.timestamp_millis(),
            industry: industry.to_string(),
            problem: problem.to_string(),
            trend: trend.to_string(),
            created_at: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        let mut sessions = self.lock();
        sessions.insert(0, session.clone());
        info!(
            "Recorded session {} ({} total this run)",
            session.id,
            sessions.len()
        );
        session
    }

    /// All sessions, newest first.
    pub fn list(&self) -> Vec<Session> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Session>> {
        // A poisoned lock only means a panic mid-push; the Vec is still valid.
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
