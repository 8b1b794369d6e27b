//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The forecast provider call failed
    #[error("External service error: {0}")]
    ExternalService(String),

    /// The forecast provider answered with no periods
    #[error("No weather data returned from external service")]
    NoForecastData,
}
