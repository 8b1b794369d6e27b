//! National Weather Service integration
//!
//! Client for the NWS API (<https://www.weather.gov/documentation/services-web-api>).
//! Resolves a coordinate to its gridpoint forecast and returns the forecast
//! periods. No API key is required, but every request carries a User-Agent.

pub mod client;
mod models;

pub use client::{NwsClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{Period, PointMetadata};
