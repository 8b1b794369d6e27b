//! Domain layer for Weathervane
//!
//! Contains the coordinate and forecast types, the temperature classifier,
//! and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
