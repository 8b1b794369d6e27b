//! Forecast period entity

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One time-bounded forecast record as returned by the provider
///
/// Providers return periods nearest-term first. Only `temperature` and
/// `summary` feed the weather summary; the remaining fields are carried
/// for logging and future use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// Temperature, assumed degrees Fahrenheit
    pub temperature: f64,
    /// Short textual forecast ("Partly Cloudy")
    pub summary: String,
    /// Period label ("Tonight", "Thursday")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the period covers daytime hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_daytime: Option<bool>,
    /// Unit the provider reported the temperature in ("F")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_unit: Option<String>,
    /// Start of the period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<FixedOffset>>,
    /// End of the period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<FixedOffset>>,
}

impl ForecastPeriod {
    /// Create a period with just the fields the summary needs
    pub fn new(temperature: f64, summary: impl Into<String>) -> Self {
        Self {
            temperature,
            summary: summary.into(),
            name: None,
            is_daytime: None,
            temperature_unit: None,
            start_time: None,
            end_time: None,
        }
    }

    /// Attach a period label
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach the daytime flag
    #[must_use]
    pub const fn with_daytime(mut self, is_daytime: bool) -> Self {
        self.is_daytime = Some(is_daytime);
        self
    }

    /// Attach the reported temperature unit
    #[must_use]
    pub fn with_temperature_unit(mut self, unit: impl Into<String>) -> Self {
        self.temperature_unit = Some(unit.into());
        self
    }

    /// Attach the period bounds
    #[must_use]
    pub const fn with_time_range(
        mut self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }
}
