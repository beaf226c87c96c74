//! Data transfer objects for web responses.

use axum::http::StatusCode;
use serde::Serialize;

use crate::stops::StopRow;

/// Response for a stop calculation.
#[derive(Debug, Serialize)]
pub struct StopsResponse {
    /// Distance the fleet was measured against, in MGLT
    pub distance: i64,

    /// Per-vehicle stop counts, fewest stops first
    pub results: Vec<StopRow>,
}

/// Help shown when a caller leaves the distance off the path.
#[derive(Debug, Serialize)]
pub struct UsageResponse {
    /// Human-readable hint
    pub message: &'static str,

    /// A complete example path
    pub example: &'static str,

    /// Method and path template
    pub usage: &'static str,
}

impl UsageResponse {
    /// Usage text for the calculate-stops endpoint.
    pub fn calculate_stops() -> Self {
        Self {
            message: "Please provide a distance in MGLT after /calculate-stops/",
            example: "/calculate-stops/1000000",
            usage: "GET /calculate-stops/{distance}",
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Canonical reason phrase for the status code
    pub error: String,

    /// HTTP status code, repeated in the body
    pub code: u16,

    /// What went wrong
    pub message: String,
}

impl ErrorResponse {
    /// Build a body for the given status and detail message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_string(),
            code: status.as_u16(),
            message: message.into(),
        }
    }
}
