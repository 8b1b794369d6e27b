//! Application layer - Use cases and orchestration
//!
//! Defines the forecast port and the weather summary use case. Adapters in
//! the infrastructure layer implement the port.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
