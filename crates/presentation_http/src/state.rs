//! Application state shared across handlers

use std::sync::Arc;

use application::WeatherSummaryService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Weather summary use case
    pub weather_service: Arc<WeatherSummaryService>,
}
