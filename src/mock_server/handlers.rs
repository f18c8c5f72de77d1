//! HTTP request handlers for the mock server.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::state::MockState;

type SharedState = State<Arc<RwLock<MockState>>>;

/// Query parameters for starting a session.
#[derive(Debug, Default, Deserialize)]
pub struct StartSessionQuery {
    pub name: Option<String>,
}

/// POST /reset
pub async fn reset(State(state): SharedState) -> impl IntoResponse {
    state.write().await.reset();
    Json(serde_json::json!({ "message": "Reset successful" }))
}

/// POST /sessions
pub async fn start_session(
    State(state): SharedState,
    Query(query): Query<StartSessionQuery>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    let session = state.start_session(query.name);
    Json(serde_json::json!({ "id": session.id, "name": session.name }))
}

/// POST /mocks
///
/// Accepts a JSON array of mock definitions. Each one needs at least a
/// `request` and a `response` object.
pub async fn add_mocks(
    State(state): SharedState,
    Json(mocks): Json<Vec<serde_json::Value>>,
) -> impl IntoResponse {
    for (index, mock) in mocks.iter().enumerate() {
        for field in ["request", "response"] {
            if !mock.get(field).is_some_and(serde_json::Value::is_object) {
                return (
                    StatusCode::BAD_REQUEST,
                    format!("mock {index}: the {field} field is required"),
                )
                    .into_response();
            }
        }
    }

    state.write().await.add_mocks(mocks);
    Json(serde_json::json!({ "message": "Mocks registered successfully" })).into_response()
}

/// POST /sessions/verify
pub async fn verify_session(State(state): SharedState) -> impl IntoResponse {
    let state = state.read().await;
    Json(state.verify_result.clone())
}
