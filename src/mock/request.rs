//! Request matcher half of a mock definition.

use serde::Serialize;

use super::body::{JsonBodyRejected, RequestBody};
use super::header::{self, canonical_header_key};
use super::multimap::MultiMap;

/// The request a mock should match.
///
/// Built with [`RequestBuilder`]. Optional parts are left out of the JSON
/// entirely when they were never set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Request {
    pub(crate) method: String,
    pub(crate) path: String,
    #[serde(skip_serializing_if = "MultiMap::is_empty")]
    pub(crate) query_params: MultiMap,
    #[serde(skip_serializing_if = "MultiMap::is_empty")]
    pub(crate) headers: MultiMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) body: Option<RequestBody>,
}

impl Request {
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_params(&self) -> &MultiMap {
        &self.query_params
    }

    pub fn headers(&self) -> &MultiMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }
}

/// Fluent builder for [`Request`].
///
/// Every setter consumes the builder and hands it back, so a builder can be
/// cloned to derive variations without either copy affecting the other.
///
/// # Example
///
/// ```
/// use smocker_client::mock::RequestBuilder;
///
/// # fn example() -> smocker_client::Result<()> {
/// let request = RequestBuilder::new("PUT", "/foo/bar")
///     .add_query_param("filters", ["red", "green"])
///     .add_header("content-type", ["application/json"])
///     .add_bearer_auth_token("sv2361fr1o8ph3oin")
///     .add_json_body(r#"{"name": "John Smith"}"#)?
///     .build();
///
/// assert_eq!(request.headers().get("Content-Type").unwrap(), ["application/json"]);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    /// Start a request matching `method` on `path`.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            request: Request {
                method: method.into(),
                path: path.into(),
                query_params: MultiMap::new(),
                headers: MultiMap::new(),
                body: None,
            },
        }
    }

    /// Set the values of query parameter `key`, replacing earlier values.
    #[must_use]
    pub fn add_query_param<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.request.query_params.insert(key, values);
        self
    }

    /// Set the values of header `key`, replacing earlier values.
    ///
    /// The key is stored in canonical form, e.g. `content-type` becomes
    /// `Content-Type`.
    #[must_use]
    pub fn add_header<I, V>(self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.add_raw_header(canonical_header_key(key), values)
    }

    /// Like [`add_header`](Self::add_header) but keeps the key exactly as given.
    #[must_use]
    pub fn add_raw_header<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.request.headers.insert(key, values);
        self
    }

    /// Match requests carrying `Authorization: Bearer <token>`.
    #[must_use]
    pub fn add_bearer_auth_token(self, token: &str) -> Self {
        self.add_raw_header(header::AUTHORIZATION, [header::bearer_value(token)])
    }

    /// Match requests carrying HTTP basic credentials for `user`/`password`.
    #[must_use]
    pub fn add_basic_auth(self, user: &str, password: &str) -> Self {
        self.add_raw_header(header::AUTHORIZATION, [header::basic_value(user, password)])
    }

    /// Match requests whose body equals `json` structurally.
    ///
    /// # Errors
    ///
    /// Returns [`JsonBodyRejected`] wrapping
    /// [`SmockerError::MalformedJson`](crate::SmockerError::MalformedJson) if
    /// `json` is not valid JSON. The builder inside it has no body set.
    pub fn add_json_body(mut self, json: &str) -> Result<Self, JsonBodyRejected<Self>> {
        match RequestBody::json(json) {
            Ok(body) => {
                self.request.body = Some(body);
                Ok(self)
            }
            Err(e) => Err(JsonBodyRejected::new(self, e)),
        }
    }

    /// Snapshot the request built so far.
    pub fn build(&self) -> Request {
        self.request.clone()
    }
}
