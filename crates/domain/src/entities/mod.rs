//! Domain entities - Per-request records produced and consumed by the service

mod forecast_period;
mod weather_summary;

pub use forecast_period::ForecastPeriod;
pub use weather_summary::WeatherSummary;
