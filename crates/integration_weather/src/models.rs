//! NWS API wire models
//!
//! Only the fields the client reads are modelled; the API returns many more.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Response of `GET /points/{lat},{lon}`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PointsResponse {
    pub properties: PointMetadata,
}

/// Gridpoint metadata for a coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointMetadata {
    /// Absolute URL of the 12-hour period forecast
    pub forecast: Option<String>,
}

/// Response of the gridpoint forecast endpoint
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastProperties {
    #[serde(default)]
    pub periods: Vec<Period>,
}

/// A single forecast period
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    /// Period label ("This Afternoon")
    #[serde(default)]
    pub name: String,
    /// Period start
    pub start_time: Option<DateTime<FixedOffset>>,
    /// Period end
    pub end_time: Option<DateTime<FixedOffset>>,
    /// Daytime flag
    #[serde(default)]
    pub is_daytime: bool,
    /// Temperature in `temperature_unit`
    pub temperature: f64,
    /// "F" or "C"
    #[serde(default)]
    pub temperature_unit: String,
    /// Short forecast ("Partly Cloudy")
    pub short_forecast: String,
}
