//! Complete mock definitions.

use serde::Serialize;

use super::request::Request;
use super::response::Response;
use super::MockDefinition;
use crate::error::Result;

/// Extra constraints Smocker applies to a mock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Context {
    /// Maximum number of times the mock may be called. Zero means no limit
    /// and is left out of the JSON.
    #[serde(skip_serializing_if = "is_zero")]
    pub times: u32,
}

fn is_zero(times: &u32) -> bool {
    *times == 0
}

/// A modifier applied to the [`Context`] of a definition.
///
/// Options are applied in order, so when two options touch the same field the
/// last one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextOption {
    CallLimit(u32),
}

impl ContextOption {
    fn apply(self, context: Option<Context>) -> Context {
        let mut context = context.unwrap_or_default();
        match self {
            ContextOption::CallLimit(times) => context.times = times,
        }
        context
    }
}

/// Limit how many times the mock may be called.
pub fn with_call_limit(times: u32) -> ContextOption {
    ContextOption::CallLimit(times)
}

/// A request matcher paired with its canned response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    request: Request,
    response: Response,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<Context>,
}

impl Definition {
    pub fn new(request: Request, response: Response) -> Self {
        Self {
            request,
            response,
            context: None,
        }
    }

    /// Create a definition and apply `options` to its context.
    ///
    /// No context is attached when `options` is empty.
    pub fn with_options(
        request: Request,
        response: Response,
        options: impl IntoIterator<Item = ContextOption>,
    ) -> Self {
        options
            .into_iter()
            .fold(Self::new(request, response), Self::with_option)
    }

    /// Apply a single context option.
    #[must_use]
    pub fn with_option(mut self, option: ContextOption) -> Self {
        self.context = Some(option.apply(self.context));
        self
    }

    /// Shorthand for `with_option(with_call_limit(times))`.
    #[must_use]
    pub fn with_call_limit(self, times: u32) -> Self {
        self.with_option(with_call_limit(times))
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }
}

impl MockDefinition for Definition {
    fn to_mock_definition_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
