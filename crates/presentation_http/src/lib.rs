//! Weathervane HTTP presentation layer
//!
//! This crate provides the single-route JSON API: `GET /?lat=..&lon=..`.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::RequestIdLayer;
pub use routes::create_router;
pub use state::AppState;
