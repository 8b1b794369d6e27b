//! Weather summary service
//!
//! Fetches forecast periods for a coordinate and classifies the nearest one.

use std::sync::Arc;

use domain::{Coordinate, WeatherSummary};
use tracing::{error, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::ForecastPort;

/// Service producing a classified summary for a coordinate
#[derive(Clone)]
pub struct WeatherSummaryService {
    forecast: Arc<dyn ForecastPort>,
}

impl std::fmt::Debug for WeatherSummaryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherSummaryService")
            .field("forecast", &"<ForecastPort>")
            .finish()
    }
}

impl WeatherSummaryService {
    /// Create a new service backed by the given forecast port
    pub fn new(forecast: Arc<dyn ForecastPort>) -> Self {
        Self { forecast }
    }

    /// Summarize the current forecast for a coordinate
    ///
    /// Uses the first period the provider returns. No retry is attempted.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::ExternalService` when the provider call
    /// fails and `ApplicationError::NoForecastData` when it returns no periods.
    #[instrument(skip_all)]
    pub async fn summarize(
        &self,
        coordinate: &Coordinate,
    ) -> Result<WeatherSummary, ApplicationError> {
        info!(
            lat = format_args!("{:.4}", coordinate.latitude()),
            lon = format_args!("{:.4}", coordinate.longitude()),
            "External weather request"
        );

        let periods = self
            .forecast
            .forecast_periods(coordinate)
            .await
            .inspect_err(|e| error!(error = %e, "External weather service error"))?;

        let Some(current) = periods.first() else {
            warn!("No weather data returned");
            return Err(ApplicationError::NoForecastData);
        };

        Ok(WeatherSummary::from_period(current))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use domain::{ForecastPeriod, TemperatureClass};

    use super::*;
    use crate::ports::MockForecastPort;

    fn chicago() -> Coordinate {
        Coordinate::new(41.837, -87.685)
    }

    /// In-memory sink for formatted log lines
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capturing_subscriber() -> (CapturedLogs, impl tracing::Subscriber + Send + Sync) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        (logs, subscriber)
    }

    #[tokio::test]
    async fn summarizes_first_period() {
        let mut mock = MockForecastPort::new();
        mock.expect_forecast_periods().times(1).returning(|_| {
            Ok(vec![
                ForecastPeriod::new(72.0, "Partly Cloudy"),
                ForecastPeriod::new(30.0, "Snow"),
            ])
        });

        let service = WeatherSummaryService::new(Arc::new(mock));
        let summary = service.summarize(&chicago()).await.unwrap();

        assert_eq!(summary.temperature, TemperatureClass::Moderate);
        assert_eq!(summary.forecast, "Partly Cloudy");
    }

    #[tokio::test]
    async fn passes_coordinate_through() {
        let mut mock = MockForecastPort::new();
        mock.expect_forecast_periods()
            .withf(|c| *c == Coordinate::new(41.837, -87.685))
            .returning(|_| Ok(vec![ForecastPeriod::new(90.0, "Sunny")]));

        let service = WeatherSummaryService::new(Arc::new(mock));
        let summary = service.summarize(&chicago()).await.unwrap();

        assert_eq!(summary.temperature, TemperatureClass::Hot);
    }

    #[tokio::test]
    async fn empty_forecast_is_no_data() {
        let mut mock = MockForecastPort::new();
        mock.expect_forecast_periods().returning(|_| Ok(vec![]));

        let service = WeatherSummaryService::new(Arc::new(mock));
        let err = service.summarize(&chicago()).await.unwrap_err();

        assert!(matches!(err, ApplicationError::NoForecastData));
    }

    #[tokio::test]
    async fn provider_failure_is_propagated() {
        let mut mock = MockForecastPort::new();
        mock.expect_forecast_periods()
            .returning(|_| Err(ApplicationError::ExternalService("HTTP 503".into())));

        let service = WeatherSummaryService::new(Arc::new(mock));
        let err = service.summarize(&chicago()).await.unwrap_err();

        let ApplicationError::ExternalService(cause) = err else {
            unreachable!("Expected ExternalService");
        };
        assert_eq!(cause, "HTTP 503");
    }

    #[tokio::test]
    async fn provider_failure_cause_is_logged() {
        let (logs, subscriber) = capturing_subscriber();
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut mock = MockForecastPort::new();
        mock.expect_forecast_periods().returning(|_| {
            Err(ApplicationError::ExternalService(
                "dial tcp 10.0.0.1:443: connection refused".into(),
            ))
        });

        let service = WeatherSummaryService::new(Arc::new(mock));
        assert!(service.summarize(&chicago()).await.is_err());

        let output = logs.contents();
        assert!(output.contains("External weather request"), "{output}");
        assert!(output.contains("lat=41.8370 lon=-87.6850"), "{output}");
        assert!(output.contains("ERROR"), "{output}");
        assert!(
            output.contains("dial tcp 10.0.0.1:443: connection refused"),
            "{output}"
        );
    }

    #[tokio::test]
    async fn every_request_logs_coordinate_once() {
        let (logs, subscriber) = capturing_subscriber();
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut mock = MockForecastPort::new();
        mock.expect_forecast_periods()
            .returning(|_| Ok(vec![ForecastPeriod::new(72.0, "Partly Cloudy")]));

        let service = WeatherSummaryService::new(Arc::new(mock));
        service.summarize(&chicago()).await.unwrap();

        let output = logs.contents();
        assert_eq!(output.matches("External weather request").count(), 1, "{output}");
        assert!(output.contains("lat=41.8370 lon=-87.6850"), "{output}");
        assert!(!output.contains("ERROR"), "{output}");
    }

    #[tokio::test]
    async fn empty_forecast_is_logged_as_warning() {
        let (logs, subscriber) = capturing_subscriber();
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut mock = MockForecastPort::new();
        mock.expect_forecast_periods().returning(|_| Ok(vec![]));

        let service = WeatherSummaryService::new(Arc::new(mock));
        assert!(service.summarize(&chicago()).await.is_err());

        let output = logs.contents();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("No weather data returned"), "{output}");
    }

    #[test]
    fn debug_hides_port() {
        let service = WeatherSummaryService::new(Arc::new(MockForecastPort::new()));
        assert!(format!("{service:?}").contains("WeatherSummaryService"));
    }
}
