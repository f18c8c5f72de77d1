//! Fake Smocker admin server for E2E testing.
//!
//! An in-memory stand-in for Smocker's admin API (`/reset`, `/sessions`,
//! `/mocks`, `/sessions/verify`). It records sessions and the definitions
//! posted to them, so tests can assert on what the client actually sent, and
//! serves a configurable verification report.
//!
//! # Example
//!
//! ```ignore
//! use smocker_client::mock_server::MockServer;
//! use smocker_client::SmockerClient;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let smocker = SmockerClient::new(server.url()).unwrap();
//!
//!     smocker.start_session("my session").await.unwrap();
//!     assert_eq!(server.state().read().await.sessions.len(), 1);
//!
//!     server.shutdown().await;
//! }
//! ```

mod handlers;
mod server;
mod state;

pub use server::{router, MockServer};
pub use state::{passing_report, MockState, Session};
