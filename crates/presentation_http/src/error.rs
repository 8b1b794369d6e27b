//! API error handling
//!
//! Every failure renders a flat `{"error": "..."}` body. Upstream causes are
//! logged by the service layer and never copied into the response.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Message for wrong method or path
pub const NOT_FOUND_MESSAGE: &str = "Not found";

/// Message for any forecast provider failure
pub const UPSTREAM_ERROR_MESSAGE: &str = "External weather service error";

/// Message for an empty forecast
pub const NO_DATA_MESSAGE: &str = "No weather data returned from external service";

/// Message for a response body that could not be serialized
pub const SERIALIZATION_ERROR_MESSAGE: &str = "Error serializing JSON";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed query parameter
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Wrong method or path
    #[error("Not found")]
    NotFound,

    /// Forecast provider call failed; the cause stays server-side
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Forecast provider returned no periods
    #[error("No forecast data")]
    NoForecastData,

    /// Response body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Status code and client-facing message
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string()),
            Self::ExternalService(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                UPSTREAM_ERROR_MESSAGE.to_string(),
            ),
            Self::NoForecastData => (
                StatusCode::INTERNAL_SERVER_ERROR,
                NO_DATA_MESSAGE.to_string(),
            ),
            Self::Serialization(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                SERIALIZATION_ERROR_MESSAGE.to_string(),
            ),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_client_error() {
            debug!(status = %status, error = %message, "Rejected request");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => e.into(),
            ApplicationError::ExternalService(cause) => Self::ExternalService(cause),
            ApplicationError::NoForecastData => Self::NoForecastData,
        }
    }
}
