//! Application services - Use case implementations

mod weather_summary_service;

pub use weather_summary_service::WeatherSummaryService;
