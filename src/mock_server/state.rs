//! Mock server state management.
//!
//! Provides the in-memory store behind the fake Smocker admin API.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::verify::{HistoryVerification, MocksVerification, VerifyResult};

/// A session as recorded by the fake server.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: String,
    pub name: String,
    /// Mock definitions registered while this session was current, in order.
    pub mocks: Vec<serde_json::Value>,
}

/// Shared state for the mock server.
///
/// Wrapped in `Arc<RwLock<_>>` for concurrent access from handlers and tests.
#[derive(Debug)]
pub struct MockState {
    /// Sessions in creation order; the last one is current.
    pub sessions: Vec<Session>,

    /// Report served by `POST /sessions/verify`.
    pub verify_result: VerifyResult,

    /// Number of times `/reset` was called.
    pub resets: usize,

    next_session_id: u64,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            sessions: Vec::new(),
            verify_result: passing_report(),
            resets: 0,
            next_session_id: 1,
        }
    }
}

impl MockState {
    /// Create a new empty state whose verification passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Set the report served for verification.
    pub fn with_verify_result(mut self, result: VerifyResult) -> Self {
        self.verify_result = result;
        self
    }

    /// Forget every session and mock.
    pub fn reset(&mut self) {
        self.sessions.clear();
        self.resets += 1;
    }

    /// Open a new session and make it current.
    pub fn start_session(&mut self, name: Option<String>) -> &Session {
        let id = format!("session-{}", self.next_session_id);
        let name = name.unwrap_or_else(|| format!("Session #{}", self.next_session_id));
        self.next_session_id += 1;

        self.sessions.push(Session {
            id,
            name,
            mocks: Vec::new(),
        });
        &self.sessions[self.sessions.len() - 1]
    }

    /// The session mocks are currently registered into.
    pub fn current_session(&self) -> Option<&Session> {
        self.sessions.last()
    }

    /// Register mocks in the current session, opening one if there is none.
    pub fn add_mocks(&mut self, mocks: Vec<serde_json::Value>) {
        if self.sessions.is_empty() {
            self.start_session(None);
        }
        if let Some(session) = self.sessions.last_mut() {
            session.mocks.extend(mocks);
        }
    }
}

/// A report where every mock was used and the history is clean.
pub fn passing_report() -> VerifyResult {
    VerifyResult {
        mocks: MocksVerification {
            verified: true,
            all_used: true,
            message: "All mocks match expectations".to_string(),
        },
        history: HistoryVerification {
            verified: true,
            message: "History is clean".to_string(),
        },
    }
}
