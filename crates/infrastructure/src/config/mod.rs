//! Application configuration
//!
//! Layered from built-in defaults, an optional `config.toml` in the working
//! directory, and `WEATHERVANE_*` environment variables (nested keys joined
//! with `__`, e.g. `WEATHERVANE_SERVER__PORT=9090`).

mod server;

use serde::{Deserialize, Serialize};

pub use integration_weather::WeatherConfig;
pub use server::{LogFormat, ServerConfig};

/// Environment variable prefix
const ENV_PREFIX: &str = "WEATHERVANE";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Forecast provider settings
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(config::File::with_name("config").required(false))
    }

    /// Load configuration using the given file source beneath the environment
    pub fn load_with<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
