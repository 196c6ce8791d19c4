#![allow(dead_code)]

use approx::assert_relative_eq;
use sam::orbit_type::keplerian_element::KeplerianElements;

pub const EARTH_GRAVITATIONAL_PARAMETER: f64 = 3.98600441e14;

pub const EARTH_EQUATORIAL_RADIUS: f64 = 6_378_136.0;

pub fn deg(x: f64) -> f64 {
    x / 180.0 * std::f64::consts::PI
}

pub fn assert_orbit_close(
    actual: &KeplerianElements<f64>,
    expected: &KeplerianElements<f64>,
    max_relative: f64,
) {
    assert_eq!(actual.is_parabolic(), expected.is_parabolic());
    assert_relative_eq!(
        actual.size.value(),
        expected.size.value(),
        max_relative = max_relative
    );
    assert_relative_eq!(
        actual.eccentricity,
        expected.eccentricity,
        max_relative = max_relative
    );
    assert_relative_eq!(
        actual.inclination,
        expected.inclination,
        max_relative = max_relative
    );
    assert_relative_eq!(
        actual.periapsis_argument,
        expected.periapsis_argument,
        max_relative = max_relative
    );
    assert_relative_eq!(
        actual.ascending_node_longitude,
        expected.ascending_node_longitude,
        max_relative = max_relative
    );
    assert_relative_eq!(
        actual.true_anomaly,
        expected.true_anomaly,
        max_relative = max_relative
    );
}
