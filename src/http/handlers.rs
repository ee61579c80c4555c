//! Route handlers.
//!
//! One handler exists: the greeting at `/`. It is a pure constant producer
//! with no input validation, no side effects, and no error path.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use crate::http::response::Greeting;
use crate::http::server::AppState;
use crate::http::X_REQUEST_ID;

/// `GET /`: return the static greeting payload.
pub async fn greeting(State(state): State<AppState>, headers: HeaderMap) -> Json<Greeting> {
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::debug!(
        request_id = %request_id,
        descriptor = %state.identity.descriptor,
        "Serving greeting"
    );

    Json(Greeting::for_identity(&state.identity))
}
