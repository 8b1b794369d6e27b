//! Weather summary entity

use serde::{Deserialize, Serialize};

use crate::entities::ForecastPeriod;
use crate::value_objects::TemperatureClass;

/// Classified view of a single forecast period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Temperature label
    pub temperature: TemperatureClass,
    /// Short textual forecast
    pub forecast: String,
}

impl WeatherSummary {
    /// Classify a forecast period
    #[must_use]
    pub fn from_period(period: &ForecastPeriod) -> Self {
        Self {
            temperature: TemperatureClass::from_fahrenheit(period.temperature),
            forecast: period.summary.clone(),
        }
    }
}
