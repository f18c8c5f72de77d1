//! Request body matchers.

use std::fmt;

use serde::de::IgnoredAny;
use serde::Serialize;

use crate::error::{Result, SmockerError};

/// Matcher that compares the request body to a JSON document structurally.
pub const SHOULD_EQUAL_JSON: &str = "ShouldEqualJSON";

/// A body matcher for a mocked request.
///
/// `value` is always valid, compacted JSON text; the only way to build one is
/// through [`RequestBody::json`], which validates its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestBody {
    matcher: String,
    value: String,
}

impl RequestBody {
    /// Create a `ShouldEqualJSON` matcher from JSON text.
    ///
    /// Whitespace between tokens is stripped and key order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`SmockerError::MalformedJson`] if `json` does not parse.
    pub fn json(json: &str) -> Result<Self> {
        Ok(Self {
            matcher: SHOULD_EQUAL_JSON.to_string(),
            value: compact_json(json)?,
        })
    }

    pub fn matcher(&self) -> &str {
        &self.matcher
    }

    /// The compacted JSON text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A JSON body a builder refused, handed back with the builder untouched.
///
/// Converts into [`SmockerError`] so `?` works in functions returning
/// [`crate::Result`]; use [`into_builder`](Self::into_builder) to carry on
/// with the configuration made so far.
#[derive(Debug)]
pub struct JsonBodyRejected<B> {
    builder: B,
    error: SmockerError,
}

impl<B> JsonBodyRejected<B> {
    pub(crate) fn new(builder: B, error: SmockerError) -> Self {
        Self { builder, error }
    }

    /// The builder as it was before the call. No body was set.
    pub fn into_builder(self) -> B {
        self.builder
    }

    pub fn error(&self) -> &SmockerError {
        &self.error
    }

    pub fn into_error(self) -> SmockerError {
        self.error
    }
}

impl<B> fmt::Display for JsonBodyRejected<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<B: fmt::Debug> std::error::Error for JsonBodyRejected<B> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.error)
    }
}

impl<B> From<JsonBodyRejected<B>> for SmockerError {
    fn from(rejected: JsonBodyRejected<B>) -> Self {
        rejected.error
    }
}

/// Validate `json` and strip the whitespace between its tokens.
///
/// Only insignificant whitespace is removed; number text, string escapes and
/// repeated keys are kept exactly as written.
pub(crate) fn compact_json(json: &str) -> Result<String> {
    serde_json::from_str::<IgnoredAny>(json).map_err(|source| SmockerError::MalformedJson {
        input: json.to_string(),
        source,
    })?;

    let mut compacted = String::with_capacity(json.len());
    let mut in_string = false;
    let mut escaped = false;
    for c in json.chars() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
        } else if matches!(c, ' ' | '\t' | '\n' | '\r') {
            continue;
        } else if c == '"' {
            in_string = true;
        }
        compacted.push(c);
    }
    Ok(compacted)
}
