//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// Create the router: one route, everything else is a JSON 404
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::weather::get_weather).fallback(handlers::common::not_found),
        )
        .fallback(handlers::common::not_found)
        .layer(RequestIdLayer::new())
        .with_state(state)
}
