//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::fleet::Distance;
use crate::stops::{StopPlanner, deadline_after, sorted_rows};
use crate::swapi::SwapiError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/calculate-stops", get(usage))
        .route("/calculate-stops/:distance", get(calculate_stops))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Help for callers that left the distance off the path.
async fn usage() -> Json<UsageResponse> {
    Json(UsageResponse::calculate_stops())
}

/// Fetch the fleet and compute resupply stops over the given distance.
async fn calculate_stops(
    State(state): State<AppState>,
    Path(distance): Path<String>,
) -> Result<Json<StopsResponse>, AppError> {
    let distance = Distance::parse(&distance).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let planner = StopPlanner::new(state.swapi.as_ref());
    let counts = planner
        .plan(distance, deadline_after(state.fetch_timeout))
        .await?;

    Ok(Json(StopsResponse {
        distance: distance.get(),
        results: sorted_rows(&counts),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    GatewayTimeout,
    Upstream { message: String },
}

impl From<SwapiError> for AppError {
    fn from(e: SwapiError) -> Self {
        if e.is_cancelled() {
            AppError::GatewayTimeout
        } else {
            AppError::Upstream {
                message: e.to_string(),
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::GatewayTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "fleet fetch exceeded the configured deadline".to_string(),
            ),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse::new(status, message));
        (status, body).into_response()
    }
}
