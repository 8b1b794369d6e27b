//! Weathervane HTTP Server
//!
//! Main entry point for the weather summary API.

use std::sync::Arc;

use application::WeatherSummaryService;
use infrastructure::{AppConfig, WeatherAdapter, init_tracing};
use presentation_http::{AppState, create_router};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config is loaded before tracing exists; a failure is reported once the
    // subscriber is installed.
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&config.server)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    info!("Weathervane v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    info!(
        host = %config.server.host,
        port = config.server.port,
        upstream = %config.weather.base_url,
        "Configuration loaded"
    );

    let adapter = WeatherAdapter::with_config(config.weather.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize forecast client: {e}"))?;

    let state = AppState {
        weather_service: Arc::new(WeatherSummaryService::new(Arc::new(adapter))),
    };

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
