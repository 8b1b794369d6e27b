//! Temperature classification
//!
//! Maps a single Fahrenheit reading onto a coarse label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Readings at or below this value are `Cold`
pub const COLD_MAX_F: f64 = 40.0;

/// Readings at or above this value are `Hot`
pub const HOT_MIN_F: f64 = 85.0;

/// Coarse temperature label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureClass {
    /// t <= 40°F
    Cold,
    /// 40°F < t < 85°F
    Moderate,
    /// t >= 85°F
    Hot,
}

impl TemperatureClass {
    /// Classify a temperature in degrees Fahrenheit
    ///
    /// NaN compares false against both thresholds and lands in `Hot`.
    #[must_use]
    pub fn from_fahrenheit(temperature: f64) -> Self {
        if temperature <= COLD_MAX_F {
            Self::Cold
        } else if temperature < HOT_MIN_F {
            Self::Moderate
        } else {
            Self::Hot
        }
    }

    /// Label as rendered in responses
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cold => "Cold",
            Self::Moderate => "Moderate",
            Self::Hot => "Hot",
        }
    }
}

impl fmt::Display for TemperatureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
