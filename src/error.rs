//! Error types for Smocker client operations.

use std::fmt;

use thiserror::Error;

/// The administrative operation that was being attempted when a request failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `POST /reset`
    Reset,
    /// `POST /sessions?name=...`
    StartSession(String),
    /// `POST /mocks`
    AddMock,
    /// `POST /sessions/verify`
    VerifySession,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Reset => write!(f, "reset all the sessions and mocks"),
            Operation::StartSession(name) => write!(f, "create a new session named {name}"),
            Operation::AddMock => write!(f, "add mock"),
            Operation::VerifySession => write!(f, "verify mocks in current session"),
        }
    }
}

/// Errors that can occur while building mock definitions or talking to Smocker.
#[derive(Debug, Error)]
pub enum SmockerError {
    /// Text handed to a JSON body builder is not valid JSON.
    #[error("unable to compact body json {input}: {source}")]
    MalformedJson {
        input: String,
        #[source]
        source: serde_json::Error,
    },

    /// A mock definition could not be converted to its wire JSON.
    #[error("unable to convert mock to json: {0}")]
    DefinitionEncoding(#[source] Box<SmockerError>),

    /// The request never produced a response (connection, DNS, timeout).
    #[error("smockerclient unable to {operation}: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// Smocker answered with something other than 200 OK.
    #[error("smockerclient unable to {operation}. received status:{status} and message:{body}")]
    UnexpectedStatus {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// Smocker answered 200 but the body could not be decoded.
    #[error("smockerclient unable to {operation}. invalid response body: {source}")]
    InvalidResponse {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// Verification found mocks in the current session that were never called.
    #[error("not all the mocks setup in the current session have been used: {message}")]
    UnusedMocks { message: String },

    /// Verification found calls that no mock in the current session matched.
    #[error("unexpected calls have been made in the current session: {message}")]
    UnexpectedCalls { message: String },

    /// JSON encoding or decoding error.
    #[error("Failed to process json: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Reading a mock definition from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Building the HTTP transport failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl SmockerError {
    /// Returns true for the two semantic verification failures.
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            SmockerError::UnusedMocks { .. } | SmockerError::UnexpectedCalls { .. }
        )
    }
}

/// Result type alias for Smocker operations.
pub type Result<T> = core::result::Result<T, SmockerError>;
