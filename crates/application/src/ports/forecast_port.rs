//! Forecast provider port
//!
//! Defines the interface for retrieving forecast periods for a coordinate.

use async_trait::async_trait;
use domain::{Coordinate, ForecastPeriod};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Get the ordered forecast periods for a coordinate
    ///
    /// The first element is the nearest-term period. An empty list is a
    /// valid answer; interpreting it is up to the caller.
    async fn forecast_periods(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Vec<ForecastPeriod>, ApplicationError>;
}
