//! Shared helper functions for HTTP handlers

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::error::ApiError;

/// Fallback for every unknown path and every non-GET method
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Serialize a body into a JSON response
///
/// Serialization happens before anything is written, so a failure turns into
/// a JSON error response instead of a truncated body.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response, ApiError> {
    let bytes = serde_json::to_vec(body).map_err(|e| {
        error!(error = %e, "Failed to serialize response body");
        ApiError::Serialization(e.to_string())
    })?;

    Ok((
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        bytes,
    )
        .into_response())
}
