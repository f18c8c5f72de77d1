//! Smocker admin API client.
//!
//! Each administrative operation is one `POST` against the configured base
//! URL. The client keeps no session state; Smocker tracks the current session.

use std::env;
use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode};
use url::Url;

use crate::error::{Operation, Result, SmockerError};
use crate::mock::MockDefinition;
use crate::verify::VerifyResult;

/// Where Smocker's admin API listens unless told otherwise.
pub const DEFAULT_SMOCKER_URL: &str = "http://localhost:8081";

const USER_AGENT: &str = concat!("smocker-client/", env!("CARGO_PKG_VERSION"));

/// Client for Smocker's admin API.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use smocker_client::mock::{Definition, RequestBuilder, ResponseBuilder};
/// use smocker_client::SmockerClient;
///
/// # async fn example() -> smocker_client::Result<()> {
/// let smocker = SmockerClient::from_env()?;
///
/// smocker.reset_all_sessions_and_mocks().await?;
/// smocker.start_session("checkout tests").await?;
///
/// let request = RequestBuilder::new("GET", "/healthcheck")
///     .add_header("Accept", ["application/json"])
///     .build();
/// let response = ResponseBuilder::ok().add_body(r#"{"status": "OK"}"#).build();
/// smocker.add_mock(&Definition::new(request, response)).await?;
///
/// // ... exercise the code under test ...
///
/// smocker.verify_mocks_in_current_session().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SmockerClient {
    http: Client,
    base_url: Arc<Url>,
}

impl std::fmt::Debug for SmockerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmockerClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl SmockerClient {
    /// Create a client from the environment.
    ///
    /// Uses `SMOCKER_URL` when set, otherwise [`DEFAULT_SMOCKER_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("SMOCKER_URL").unwrap_or_else(|_| DEFAULT_SMOCKER_URL.to_string());
        Self::new(&base_url)
    }

    /// Create a client for a Smocker running at [`DEFAULT_SMOCKER_URL`].
    pub fn default_instance() -> Result<Self> {
        Self::new(DEFAULT_SMOCKER_URL)
    }

    /// Create a client for the admin API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(SmockerError::HttpClient)?;

        Self::with_http_client(http, base_url)
    }

    /// Create a client that sends requests through `http`.
    ///
    /// Use this to configure timeouts, proxies or TLS on the transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_http_client(http: Client, base_url: &str) -> Result<Self> {
        // Endpoints are joined relative to the base, so it must end with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        Ok(Self {
            http,
            base_url: Arc::new(Url::parse(&base_url_str)?),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Clear every session, mock and history entry on the server.
    #[tracing::instrument(skip(self))]
    pub async fn reset_all_sessions_and_mocks(&self) -> Result<()> {
        let operation = Operation::Reset;
        let url = self.base_url.join("reset")?;

        let response = self.send(&operation, self.http.post(url)).await?;
        Self::check_response(operation, response).await?;

        tracing::debug!("smocker reset");
        Ok(())
    }

    /// Start a new session; mocks added afterwards belong to it.
    #[tracing::instrument(skip(self))]
    pub async fn start_session(&self, name: &str) -> Result<()> {
        let operation = Operation::StartSession(name.to_string());
        let url = self
            .base_url
            .join(&format!("sessions?name={}", urlencoding::encode(name)))?;

        let response = self.send(&operation, self.http.post(url)).await?;
        Self::check_response(operation, response).await?;

        tracing::debug!("smocker session started");
        Ok(())
    }

    /// Register a mock in the current session.
    ///
    /// # Errors
    ///
    /// Returns [`SmockerError::DefinitionEncoding`] without contacting the
    /// server if the definition cannot be encoded.
    #[tracing::instrument(skip_all)]
    pub async fn add_mock<M: MockDefinition + ?Sized>(&self, definition: &M) -> Result<()> {
        let operation = Operation::AddMock;

        let json = definition
            .to_mock_definition_json()
            .map_err(|e| SmockerError::DefinitionEncoding(Box::new(e)))?;

        // The endpoint takes a list of definitions.
        let mut body = Vec::with_capacity(json.len() + 2);
        body.push(b'[');
        body.extend_from_slice(&json);
        body.push(b']');

        let url = self.base_url.join("mocks")?;
        let request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        let response = self.send(&operation, request).await?;
        Self::check_response(operation, response).await?;

        tracing::debug!("smocker mock added");
        Ok(())
    }

    /// Fetch Smocker's verification report for the current session without
    /// judging it.
    #[tracing::instrument(skip(self))]
    pub async fn verification_report(&self) -> Result<VerifyResult> {
        let operation = Operation::VerifySession;
        let url = self.base_url.join("sessions/verify")?;

        let response = self.send(&operation, self.http.post(url)).await?;
        let response = Self::check_response(operation.clone(), response).await?;

        let text = response
            .text()
            .await
            .map_err(|source| SmockerError::Transport {
                operation: operation.clone(),
                source,
            })?;

        serde_json::from_str(&text).map_err(|source| {
            tracing::warn!(body = %text, "smocker verify response is not a report");
            SmockerError::InvalidResponse { operation, source }
        })
    }

    /// Check that every mock in the current session was called and that no
    /// unexpected calls were made.
    ///
    /// # Errors
    ///
    /// Returns [`SmockerError::UnusedMocks`] if some mock was never called,
    /// otherwise [`SmockerError::UnexpectedCalls`] if the history holds calls
    /// no mock matched.
    #[tracing::instrument(skip(self))]
    pub async fn verify_mocks_in_current_session(&self) -> Result<()> {
        let report = self.verification_report().await?;

        if let Err(e) = report.into_result() {
            tracing::warn!(error = %e, "smocker session verification failed");
            return Err(e);
        }
        Ok(())
    }

    /// Send a request, attributing transport failures to `operation`.
    async fn send(
        &self,
        operation: &Operation,
        request: reqwest::RequestBuilder,
    ) -> Result<Response> {
        request
            .send()
            .await
            .map_err(|source| SmockerError::Transport {
                operation: operation.clone(),
                source,
            })
    }

    /// Anything but 200 OK becomes an error carrying the response text.
    async fn check_response(operation: Operation, response: Response) -> Result<Response> {
        let status = response.status();

        if status == StatusCode::OK {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(b) => b,
            Err(source) => return Err(SmockerError::Transport { operation, source }),
        };

        tracing::warn!(%status, %operation, "smocker rejected request");
        Err(SmockerError::UnexpectedStatus {
            operation,
            status: status.as_u16(),
            body,
        })
    }
}
