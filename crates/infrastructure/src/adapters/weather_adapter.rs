//! Weather adapter - Implements ForecastPort using integration_weather

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::ForecastPort;
use async_trait::async_trait;
use domain::{Coordinate, ForecastPeriod};
use integration_weather::{NwsClient, Period, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for forecast retrieval using the National Weather Service
#[derive(Clone)]
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"<WeatherClient>")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = NwsClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Wrap an existing weather client
    pub fn with_client(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    ///
    /// Every provider failure is opaque to callers.
    fn map_error(err: WeatherError) -> ApplicationError {
        ApplicationError::ExternalService(err.to_string())
    }

    /// Convert an NWS period to a domain forecast period
    fn map_period(period: Period) -> ForecastPeriod {
        let mut mapped = ForecastPeriod::new(period.temperature, period.short_forecast)
            .with_daytime(period.is_daytime);
        if !period.name.is_empty() {
            mapped = mapped.with_name(period.name);
        }
        if !period.temperature_unit.is_empty() {
            mapped = mapped.with_temperature_unit(period.temperature_unit);
        }
        mapped.start_time = period.start_time;
        mapped.end_time = period.end_time;
        mapped
    }
}

#[async_trait]
impl ForecastPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    async fn forecast_periods(
        &self,
        coordinate: &Coordinate,
    ) -> Result<Vec<ForecastPeriod>, ApplicationError> {
        let result = self
            .client
            .get_forecast(coordinate.latitude(), coordinate.longitude())
            .await;

        match &result {
            Ok(periods) => {
                debug!(periods = periods.len(), "Retrieved forecast periods");
            },
            Err(e) => {
                debug!(error = %e, "Failed to get forecast periods");
            },
        }

        result
            .map(|periods| periods.into_iter().map(Self::map_period).collect())
            .map_err(Self::map_error)
    }
}
