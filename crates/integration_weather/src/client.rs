//! National Weather Service client
//!
//! HTTP client for the two-step NWS forecast lookup: `/points/{lat},{lon}`
//! yields the gridpoint forecast URL, which yields the forecast periods.

use async_trait::async_trait;
use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ForecastResponse, Period, PointMetadata, PointsResponse};

/// Media type the NWS API serves by default
const GEO_JSON: &str = "application/geo+json";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The coordinate is outside the service's coverage
    #[error("Not found: {0}")]
    NotFound(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// NWS API base URL (default: <https://api.weather.gov>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent sent with every request; NWS rejects anonymous clients
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://api.weather.gov".to_string()
}

fn default_user_agent() -> String {
    concat!("weathervane/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

/// Weather client trait for fetching forecast data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Resolve a coordinate to its gridpoint metadata
    async fn get_point(&self, latitude: f64, longitude: f64)
    -> Result<PointMetadata, WeatherError>;

    /// Get the ordered forecast periods for a coordinate
    async fn get_forecast(&self, latitude: f64, longitude: f64)
    -> Result<Vec<Period>, WeatherError>;
}

/// NWS HTTP client implementation
#[derive(Debug)]
pub struct NwsClient {
    client: Client,
    config: WeatherConfig,
}

impl NwsClient {
    /// Create a new NWS client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GEO_JSON));

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Render a coordinate component with at most four decimals
    ///
    /// The points endpoint redirects requests carrying more precision.
    fn format_component(value: f64) -> String {
        let rendered = format!("{value:.4}");
        let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
        match trimmed {
            "-0" | "" => "0".to_string(),
            other => other.to_string(),
        }
    }

    /// Build the points URL for a coordinate
    fn build_points_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/points/{},{}",
            self.config.base_url.trim_end_matches('/'),
            Self::format_component(latitude),
            Self::format_component(longitude)
        )
    }

    /// Map a non-success status onto an error
    fn check_status(response: Response) -> Result<Response, WeatherError> {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::NotFound(format!(
                "HTTP {status} for {}",
                response.url().path()
            )));
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(response)
    }
}

#[async_trait]
impl WeatherClient for NwsClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_point(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<PointMetadata, WeatherError> {
        let url = self.build_points_url(latitude, longitude);
        debug!(url = %url, "Resolving gridpoint");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let points: PointsResponse = Self::check_status(response)?
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Ok(points.properties)
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Period>, WeatherError> {
        let point = self.get_point(latitude, longitude).await?;
        let forecast_url = point.forecast.ok_or_else(|| {
            WeatherError::ParseError("No forecast URL in points response".to_string())
        })?;

        debug!(url = %forecast_url, "Fetching gridpoint forecast");

        let response = self
            .client
            .get(&forecast_url)
            .query(&[("units", "us")])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let forecast: ForecastResponse = Self::check_status(response)?
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        debug!(periods = forecast.properties.periods.len(), "Received forecast");
        Ok(forecast.properties.periods)
    }
}
