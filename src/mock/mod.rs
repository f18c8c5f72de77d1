//! Mock definitions and the builders that assemble them.
//!
//! A mock definition pairs a [`Request`] matcher with a canned [`Response`]
//! and, optionally, a [`Context`] of extra constraints. Anything that can be
//! rendered to Smocker's mock-definition JSON implements [`MockDefinition`]
//! and can be handed to [`SmockerClient::add_mock`](crate::SmockerClient::add_mock).

mod body;
mod definition;
pub mod header;
mod multimap;
mod request;
mod response;

pub use body::{JsonBodyRejected, RequestBody, SHOULD_EQUAL_JSON};
pub use definition::{with_call_limit, Context, ContextOption, Definition};
pub use multimap::MultiMap;
pub use request::{Request, RequestBuilder};
pub use response::{Response, ResponseBuilder};

use crate::error::Result;

/// Anything that can be rendered as a single Smocker mock definition.
pub trait MockDefinition {
    /// The JSON object describing this mock (not wrapped in an array).
    ///
    /// # Errors
    ///
    /// Returns an error if the definition cannot be encoded.
    fn to_mock_definition_json(&self) -> Result<Vec<u8>>;
}

/// A mock definition supplied as ready-made JSON text.
///
/// The text is passed through untouched; Smocker reports problems with it
/// when it is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawJsonDefinition {
    json: String,
}

impl RawJsonDefinition {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.json
    }
}

impl MockDefinition for RawJsonDefinition {
    fn to_mock_definition_json(&self) -> Result<Vec<u8>> {
        Ok(self.json.as_bytes().to_vec())
    }
}
