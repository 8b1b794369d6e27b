//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and hosts process-wide
//! concerns: configuration loading and the tracing subscriber.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use crate::adapters::WeatherAdapter;
pub use crate::config::{AppConfig, LogFormat, ServerConfig};
pub use crate::telemetry::init_tracing;
