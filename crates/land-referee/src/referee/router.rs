use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::UserProfile;
use super::{RefereeEngine, RefereeError};

/// Raw request body; categorical fields stay strings so validation failures
/// name the offending value instead of a serde parse error.
#[derive(Debug, Deserialize)]
pub(crate) struct EvaluateRequest {
    budget: String,
    risk_tolerance: String,
    time_horizon: String,
    #[serde(default)]
    location: Option<String>,
}

/// Router builder exposing the referee evaluation endpoints.
pub fn referee_router(engine: Arc<RefereeEngine>) -> Router {
    Router::new()
        .route("/api/v1/referee/evaluate", post(evaluate_handler))
        .route("/api/v1/referee/locations", get(locations_handler))
        .with_state(engine)
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<RefereeEngine>>,
    axum::Json(request): axum::Json<EvaluateRequest>,
) -> Response {
    let profile = match UserProfile::from_raw(
        &request.budget,
        &request.risk_tolerance,
        &request.time_horizon,
        request.location,
    ) {
        Ok(profile) => profile,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    match engine.evaluate(&profile) {
        Ok(report) => (StatusCode::OK, axum::Json(report.view())).into_response(),
        Err(error @ RefereeError::LocationNotFound { .. }) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn locations_handler(State(engine): State<Arc<RefereeEngine>>) -> Response {
    let payload = json!({ "locations": engine.catalog().locations() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
