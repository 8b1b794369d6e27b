//! Geographic coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Query parameter name carrying the latitude
pub const LATITUDE_PARAM: &str = "lat";

/// Query parameter name carrying the longitude
pub const LONGITUDE_PARAM: &str = "lon";

/// A latitude/longitude pair
///
/// Only successful numeric parsing is required; values are not range checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from already-parsed values
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a coordinate from the raw `lat` and `lon` query values
    ///
    /// Latitude is checked completely before longitude, so the first
    /// failure reported always concerns `lat` when both are bad.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingParameter` for an absent or empty value
    /// and `DomainError::InvalidParameter` for a value that is not a number.
    pub fn from_query(
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Result<Self, DomainError> {
        let latitude = Self::parse_component(LATITUDE_PARAM, latitude)?;
        let longitude = Self::parse_component(LONGITUDE_PARAM, longitude)?;
        Ok(Self::new(latitude, longitude))
    }

    /// Parse a single coordinate component
    ///
    /// # Errors
    ///
    /// See [`Coordinate::from_query`].
    pub fn parse_component(name: &str, raw: Option<&str>) -> Result<f64, DomainError> {
        let raw = raw.filter(|s| !s.is_empty()).ok_or_else(|| DomainError::missing(name))?;
        raw.parse::<f64>().map_err(|_| DomainError::invalid(name))
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
