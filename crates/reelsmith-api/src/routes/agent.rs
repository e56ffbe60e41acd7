//! The agent endpoint: validate, dispatch, envelope.

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::post};
use serde_json::Value;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use reelsmith_core::error::AgentError;

use crate::error::ApiError;
use crate::{dispatch, schema};

/// POST /agent
///
/// The body is taken as raw bytes so that malformed JSON is reported
/// through the same error envelope as every other failure, not through an
/// extractor rejection.
#[instrument(skip(body))]
async fn agent(body: Bytes) -> Response {
    let correlation_id = Uuid::new_v4();

    let json: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            warn!(%correlation_id, "rejected unparseable request body");
            return ApiError::message(format!("invalid JSON body: {e}")).into_response();
        }
    };

    let request = match schema::parse_request(&json) {
        Ok(request) => request,
        Err(issues) => {
            info!(%correlation_id, issue_count = issues.len(), "request failed validation");
            return ApiError::from(AgentError::Validation(issues)).into_response();
        }
    };

    info!(%correlation_id, action = request.action(), "dispatching agent request");

    match dispatch::handle(request) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            error!(%correlation_id, %err, "generator fault downgraded to error envelope");
            ApiError::from(err).into_response()
        }
    }
}

/// Returns the agent router.
pub fn router() -> Router {
    Router::new().route("/agent", post(agent))
}
