//! Smocker client library.
//!
//! A Rust library for configuring a [Smocker](https://smocker.dev) HTTP mock
//! server from test code: reset the server, open a named session, register
//! mock definitions and verify that every mock was used and no unexpected
//! calls were made.
//!
//! # Quick Start
//!
//! ```no_run
//! use smocker_client::mock::{with_call_limit, Definition, RequestBuilder, ResponseBuilder};
//! use smocker_client::SmockerClient;
//!
//! #[tokio::main]
//! async fn main() -> smocker_client::Result<()> {
//!     // Create client from environment variables
//!     let smocker = SmockerClient::from_env()?;
//!
//!     smocker.reset_all_sessions_and_mocks().await?;
//!     smocker.start_session("user service").await?;
//!
//!     let request = RequestBuilder::new("POST", "/users")
//!         .add_basic_auth("admin", "password")
//!         .add_json_body(r#"{"name": "John Smith"}"#)?
//!         .build();
//!     let response = ResponseBuilder::new(201)
//!         .add_json_body(r#"{"id": 1}"#)?
//!         .build();
//!     let definition = Definition::with_options(request, response, [with_call_limit(1)]);
//!
//!     smocker.add_mock(&definition).await?;
//!
//!     // ... exercise the code under test against Smocker's mock port ...
//!
//!     smocker.verify_mocks_in_current_session().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`mock`] - builders producing [`Definition`](mock::Definition) values
//!   and the [`MockDefinition`] trait for anything that renders to Smocker's
//!   mock JSON.
//! - [`SmockerClient`] - the four admin operations, one `POST` each.
//! - [`VerifyResult`] - the decoded verification report.
//!
//! # Configuration
//!
//! - `SMOCKER_URL` (optional) - admin API base URL (defaults to
//!   `http://localhost:8081`)

pub mod cli;
mod client;
mod error;
pub mod mock;
#[cfg(feature = "test-server")]
pub mod mock_server;
pub mod output;
mod verify;

// Re-export core types
pub use client::{SmockerClient, DEFAULT_SMOCKER_URL};
pub use error::{Operation, Result, SmockerError};
pub use mock::MockDefinition;
pub use verify::{HistoryVerification, MocksVerification, VerifyResult};
