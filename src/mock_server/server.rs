//! Mock Smocker admin server.
//!
//! Provides an axum-based HTTP server that stands in for Smocker's admin API.

use std::sync::Arc;

use axum::{routing::post, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::handlers;
use super::state::MockState;

/// A fake Smocker admin API for testing.
///
/// The server runs in the background on a random local port. It records what
/// the client sends and answers verification with whatever report the state
/// holds; it never matches real traffic against the registered mocks.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be inspected or modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new server whose verification passes.
    pub async fn start() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = router(shared_state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the server.
    ///
    /// Use this URL when creating a `SmockerClient` for testing.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }
}

/// Create the axum router with all admin routes.
pub fn router(state: Arc<RwLock<MockState>>) -> Router {
    Router::new()
        .route("/reset", post(handlers::reset))
        .route("/sessions", post(handlers::start_session))
        .route("/sessions/verify", post(handlers::verify_session))
        .route("/mocks", post(handlers::add_mocks))
        .with_state(state)
}
