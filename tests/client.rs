//! Admin API client tests.
//!
//! Uses wiremock to stand in for Smocker and checks the exact requests the
//! client sends and how it interprets the answers.

use serde_json::json;
use smocker_client::mock::{Definition, RawJsonDefinition, RequestBuilder, ResponseBuilder};
use smocker_client::{MockDefinition, Operation, SmockerClient, SmockerError};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> SmockerClient {
    SmockerClient::new(&server.uri()).unwrap()
}

/// Every call answers 400 with a plain-text body.
async fn bad_request_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(400).set_body_string("400 Bad Request"))
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn verify_body(all_used: bool, history_verified: bool) -> serde_json::Value {
    json!({
        "mocks": {
            "verified": all_used,
            "all_used": all_used,
            "message": "mocks message"
        },
        "history": {
            "verified": history_verified,
            "message": "history message"
        }
    })
}

async fn verify_server(all_used: bool, history_verified: bool) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(verify_body(all_used, history_verified)))
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn assert_bad_request(err: &SmockerError) {
    let text = err.to_string();
    assert!(text.contains("400"), "missing status: {text}");
    assert!(text.contains("400 Bad Request"), "missing body: {text}");
}

// =============================================================================
// Reset
// =============================================================================

#[tokio::test]
async fn test_reset_posts_to_reset() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Reset successful"})))
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(client_for(&server).await.reset_all_sessions_and_mocks().await);
}

#[tokio::test]
async fn test_reset_non_200_is_an_error() {
    let server = bad_request_server().await;

    let err = assert_err!(client_for(&server).await.reset_all_sessions_and_mocks().await);

    assert_bad_request(&err);
    assert_eq!(
        err.to_string(),
        "smockerclient unable to reset all the sessions and mocks. \
         received status:400 and message:400 Bad Request"
    );
}

#[tokio::test]
async fn test_reset_transport_error_names_operation() {
    // Bind then release a port so nothing is listening on it.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let client = SmockerClient::new(&format!("http://{addr}")).unwrap();

    let err = assert_err!(client.reset_all_sessions_and_mocks().await);

    match &err {
        SmockerError::Transport { operation, .. } => assert_eq!(*operation, Operation::Reset),
        other => panic!("expected transport error, got {other:?}"),
    }
    assert!(err.to_string().contains("reset all the sessions and mocks"));
}

// =============================================================================
// Sessions
// =============================================================================

#[tokio::test]
async fn test_start_session_sends_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(query_param("name", "my-new-session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1d6d264b-4d13-4e0b-a51e-e44fc80eca9f",
            "name": "my-new-session"
        })))
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(client_for(&server).await.start_session("my-new-session").await);
}

#[tokio::test]
async fn test_start_session_escapes_name() {
    let name = "test !@£$%^&*()";
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(query_param("name", name))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(client_for(&server).await.start_session(name).await);

    let requests = server.received_requests().await.unwrap();
    let decoded: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(decoded, vec![("name".to_string(), name.to_string())]);
}

#[tokio::test]
async fn test_start_session_non_200_is_an_error() {
    let server = bad_request_server().await;

    let err = assert_err!(client_for(&server).await.start_session("my-new-session").await);

    assert_bad_request(&err);
    assert!(err
        .to_string()
        .contains("unable to create a new session named my-new-session"));
}

// =============================================================================
// Mocks
// =============================================================================

#[tokio::test]
async fn test_add_mock_wraps_definition_in_array() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mocks"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!([{"example": 1234}])))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Mocks registered successfully"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let definition = RawJsonDefinition::new(r#"{"example": 1234}"#);
    assert_ok!(client_for(&server).await.add_mock(&definition).await);
}

#[tokio::test]
async fn test_add_mock_sends_built_definition() {
    let request = RequestBuilder::new("GET", "/healthcheck")
        .add_header("accept", ["application/json"])
        .build();
    let response = ResponseBuilder::ok().add_body(r#"{"status": "OK"}"#).build();
    let definition = Definition::new(request, response).with_call_limit(2);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mocks"))
        .and(body_json(json!([{
            "request": {
                "method": "GET",
                "path": "/healthcheck",
                "headers": { "Accept": ["application/json"] }
            },
            "response": {
                "status": 200,
                "body": "{\"status\": \"OK\"}"
            },
            "context": { "times": 2 }
        }])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(client_for(&server).await.add_mock(&definition).await);
}

struct FailingDefinition;

impl MockDefinition for FailingDefinition {
    fn to_mock_definition_json(&self) -> smocker_client::Result<Vec<u8>> {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        Err(SmockerError::ParseError(source))
    }
}

#[tokio::test]
async fn test_add_mock_encoding_failure_makes_no_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = assert_err!(client_for(&server).await.add_mock(&FailingDefinition).await);

    assert!(matches!(err, SmockerError::DefinitionEncoding(_)));
    assert!(err.to_string().starts_with("unable to convert mock to json"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_mock_accepts_trait_objects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mocks"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let definitions: Vec<Box<dyn MockDefinition>> = vec![
        Box::new(RawJsonDefinition::new(r#"{"request": {}, "response": {}}"#)),
        Box::new(Definition::new(
            RequestBuilder::new("GET", "/").build(),
            ResponseBuilder::no_content().build(),
        )),
    ];

    let client = client_for(&server).await;
    for definition in &definitions {
        assert_ok!(client.add_mock(definition.as_ref()).await);
    }
}

#[tokio::test]
async fn test_add_mock_non_200_is_an_error() {
    let server = bad_request_server().await;

    let definition = RawJsonDefinition::new(r#"{"example": 1234}"#);
    let err = assert_err!(client_for(&server).await.add_mock(&definition).await);

    assert_bad_request(&err);
    assert_eq!(
        err.to_string(),
        "smockerclient unable to add mock. received status:400 and message:400 Bad Request"
    );
}

// =============================================================================
// Verification
// =============================================================================

#[tokio::test]
async fn test_verify_passes_when_everything_matched() {
    let server = verify_server(true, true).await;

    assert_ok!(client_for(&server).await.verify_mocks_in_current_session().await);
}

#[tokio::test]
async fn test_verify_reports_unused_mocks() {
    let server = verify_server(false, true).await;

    let err = assert_err!(client_for(&server).await.verify_mocks_in_current_session().await);

    assert!(matches!(err, SmockerError::UnusedMocks { .. }));
    assert!(err
        .to_string()
        .contains("not all the mocks setup in the current session have been used"));
}

#[tokio::test]
async fn test_verify_unused_mocks_win_over_unexpected_calls() {
    let server = verify_server(false, false).await;

    let err = assert_err!(client_for(&server).await.verify_mocks_in_current_session().await);

    assert!(matches!(err, SmockerError::UnusedMocks { .. }));
}

#[tokio::test]
async fn test_verify_reports_unexpected_calls() {
    let server = verify_server(true, false).await;

    let err = assert_err!(client_for(&server).await.verify_mocks_in_current_session().await);

    match err {
        SmockerError::UnexpectedCalls { message } => assert_eq!(message, "history message"),
        other => panic!("expected UnexpectedCalls, got {other:?}"),
    }
}

#[tokio::test]
async fn test_verification_report_is_returned_as_is() {
    let server = verify_server(false, false).await;

    let report = assert_ok!(client_for(&server).await.verification_report().await);

    assert!(!report.passed());
    assert_eq!(report.mocks.message, "mocks message");
    assert_eq!(report.history.message, "history message");
}

#[tokio::test]
async fn test_verify_non_200_is_an_error() {
    let server = bad_request_server().await;

    let err = assert_err!(client_for(&server).await.verify_mocks_in_current_session().await);

    assert_bad_request(&err);
    assert!(!err.is_verification_failure());
    assert!(err
        .to_string()
        .contains("unable to verify mocks in current session"));
}

#[tokio::test]
async fn test_verify_garbage_body_names_the_operation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sessions/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = assert_err!(client_for(&server).await.verify_mocks_in_current_session().await);

    assert!(matches!(
        err,
        SmockerError::InvalidResponse {
            operation: Operation::VerifySession,
            ..
        }
    ));
    assert!(err
        .to_string()
        .starts_with("smockerclient unable to verify mocks in current session. invalid response body:"));
}

// =============================================================================
// Base URL handling
// =============================================================================

#[tokio::test]
async fn test_base_url_path_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/reset"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = SmockerClient::new(&format!("{}/admin", server.uri())).unwrap();
    assert_ok!(client.reset_all_sessions_and_mocks().await);
}
