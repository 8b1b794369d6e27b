//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required coordinate component was absent or empty
    #[error("Query parameter `{name}` is missing")]
    MissingParameter { name: String },

    /// A coordinate component could not be parsed as a floating-point number
    #[error("Unable to parse query parameter `{name}` as a floating-point number")]
    InvalidParameter { name: String },
}

impl DomainError {
    /// Create a missing parameter error
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Create an invalid parameter error
    pub fn invalid(name: impl Into<String>) -> Self {
        Self::InvalidParameter { name: name.into() }
    }

    /// Name of the offending parameter
    #[must_use]
    pub fn parameter(&self) -> &str {
        match self {
            Self::MissingParameter { name } | Self::InvalidParameter { name } => name,
        }
    }
}
