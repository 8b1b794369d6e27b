//! Property-based tests for query coordinate parsing

use domain::{Coordinate, DomainError, LATITUDE_PARAM, LONGITUDE_PARAM};
use proptest::prelude::*;

/// Strings that never parse as `f64`
fn non_numeric() -> impl Strategy<Value = String> {
    "[g-mo-z!@#%]{1,12}"
}

proptest! {
    #[test]
    fn finite_values_parse_back(
        lat in -1.0e9f64..1.0e9,
        lon in -1.0e9f64..1.0e9
    ) {
        let coord = Coordinate::from_query(Some(&lat.to_string()), Some(&lon.to_string())).unwrap();
        prop_assert_eq!(coord, Coordinate::new(lat, lon));
    }

    #[test]
    fn missing_latitude_wins_over_any_longitude(lon in ".*") {
        let err = Coordinate::from_query(None, Some(&lon)).unwrap_err();
        prop_assert_eq!(err, DomainError::missing(LATITUDE_PARAM));
    }

    #[test]
    fn garbage_latitude_is_reported_first(lat in non_numeric(), lon in non_numeric()) {
        let err = Coordinate::from_query(Some(&lat), Some(&lon)).unwrap_err();
        prop_assert_eq!(err, DomainError::invalid(LATITUDE_PARAM));
    }

    #[test]
    fn garbage_longitude_names_lon(lat in -90.0f64..=90.0, lon in non_numeric()) {
        let err = Coordinate::from_query(Some(&lat.to_string()), Some(&lon)).unwrap_err();
        prop_assert_eq!(err.parameter(), LONGITUDE_PARAM);
    }
}
