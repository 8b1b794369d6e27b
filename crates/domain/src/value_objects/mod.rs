//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod temperature_class;

pub use coordinate::{Coordinate, LATITUDE_PARAM, LONGITUDE_PARAM};
pub use temperature_class::{COLD_MAX_F, HOT_MIN_F, TemperatureClass};
