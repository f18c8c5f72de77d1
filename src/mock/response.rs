//! Canned response half of a mock definition.

use serde::Serialize;

use super::body::{compact_json, JsonBodyRejected};
use super::header::{self, canonical_header_key};
use super::multimap::MultiMap;

/// The response Smocker returns when a mock matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub(crate) status: u16,
    #[serde(skip_serializing_if = "MultiMap::is_empty")]
    pub(crate) headers: MultiMap,
    #[serde(skip_serializing_if = "body_is_empty")]
    pub(crate) body: Option<String>,
}

fn body_is_empty(body: &Option<String>) -> bool {
    body.as_deref().map_or(true, str::is_empty)
}

impl Response {
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &MultiMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// Fluent builder for [`Response`].
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn new(status: u16) -> Self {
        Self {
            response: Response {
                status,
                headers: MultiMap::new(),
                body: None,
            },
        }
    }

    /// A `200 OK` response.
    pub fn ok() -> Self {
        Self::new(200)
    }

    /// A `204 No Content` response.
    pub fn no_content() -> Self {
        Self::new(204)
    }

    /// Set the values of header `key` (canonicalized), replacing earlier values.
    #[must_use]
    pub fn add_header<I, V>(self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.add_raw_header(canonical_header_key(key), values)
    }

    #[must_use]
    pub fn add_raw_header<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.response.headers.insert(key, values);
        self
    }

    /// Set the body text. It is sent verbatim.
    #[must_use]
    pub fn add_body(mut self, body: impl Into<String>) -> Self {
        self.response.body = Some(body.into());
        self
    }

    /// Set a compacted JSON body and `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`JsonBodyRejected`] wrapping
    /// [`SmockerError::MalformedJson`](crate::SmockerError::MalformedJson) if
    /// `json` is not valid JSON. The builder inside it is unchanged.
    pub fn add_json_body(self, json: &str) -> Result<Self, JsonBodyRejected<Self>> {
        match compact_json(json) {
            Ok(body) => Ok(self
                .add_raw_header(header::CONTENT_TYPE, ["application/json"])
                .add_body(body)),
            Err(e) => Err(JsonBodyRejected::new(self, e)),
        }
    }

    pub fn build(&self) -> Response {
        self.response.clone()
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::ok()
    }
}
