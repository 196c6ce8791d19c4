mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use sam::constants::GRAVITATIONAL_CONSTANT;
use sam::sam_errors::SamError;
use sam::two_body::{
    compute_circular_velocity, compute_kepler_mean_motion, compute_kepler_orbital_period,
    compute_vis_viva_velocity,
};

use crate::common::{EARTH_EQUATORIAL_RADIUS, EARTH_GRAVITATIONAL_PARAMETER};

/// Geostationary orbit, http://en.wikipedia.org/wiki/Geostationary_orbit
#[test]
fn test_semi_major_axis_to_mean_motion() {
    let satellite_mass = 1.0e3;
    let earth_gravitational_parameter = GRAVITATIONAL_CONSTANT * 5.9736e24;
    let distance_between_satellite_and_earth = 4.2164e7;

    let mean_motion = compute_kepler_mean_motion(
        distance_between_satellite_and_earth,
        earth_gravitational_parameter,
        satellite_mass,
    )
    .unwrap();

    assert_relative_eq!(mean_motion, 7.2921e-5, max_relative = 1.0e-7);
}

#[test]
fn test_geostationary_period_is_sidereal_day() {
    let period =
        compute_kepler_orbital_period(4.2164e7, EARTH_GRAVITATIONAL_PARAMETER, 0.0).unwrap();
    assert_abs_diff_eq!(period, 86_164.09, epsilon = 5.0);
}

#[test]
fn test_circular_velocity_zero_radius() {
    assert!(matches!(
        compute_circular_velocity(0.0, 0.0),
        Err(SamError::DomainError(_))
    ));
    assert!(matches!(
        compute_circular_velocity(0.0, EARTH_GRAVITATIONAL_PARAMETER),
        Err(SamError::DomainError(_))
    ));
}

/// Reference data from Wertz (2001), velocities in km/s.
#[test]
fn test_circular_velocity_around_the_earth() {
    let altitudes_km = [0.0, 200.0, 500.0, 1000.0, 35786.0];
    let expected_km_s = [7.905, 7.784, 7.613, 7.350, 3.075];

    for (altitude, expected) in altitudes_km.iter().zip(expected_km_s) {
        let velocity = compute_circular_velocity(
            EARTH_EQUATORIAL_RADIUS + altitude * 1.0e3,
            EARTH_GRAVITATIONAL_PARAMETER,
        )
        .unwrap();

        // the table is rounded to the metre per second
        assert_abs_diff_eq!(
            velocity / 1.0e3,
            expected,
            epsilon = 1.0e-4 * (1.0 + expected)
        );
    }
}

#[test]
fn test_vis_viva_matches_circular_velocity() {
    for altitude_km in [200.0, 500.0, 35786.0] {
        let radius = EARTH_EQUATORIAL_RADIUS + altitude_km * 1.0e3;
        let circular = compute_circular_velocity(radius, EARTH_GRAVITATIONAL_PARAMETER).unwrap();
        let vis_viva =
            compute_vis_viva_velocity(radius, radius, EARTH_GRAVITATIONAL_PARAMETER).unwrap();
        assert_relative_eq!(vis_viva, circular, max_relative = 1e-14);
    }
}

#[test]
fn test_formulas_are_thread_safe() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let radius = EARTH_EQUATORIAL_RADIUS + f64::from(i) * 1.0e5;
                compute_circular_velocity(radius, EARTH_GRAVITATIONAL_PARAMETER).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let radius = EARTH_EQUATORIAL_RADIUS + i as f64 * 1.0e5;
        let expected = compute_circular_velocity(radius, EARTH_GRAVITATIONAL_PARAMETER).unwrap();
        assert_eq!(handle.join().unwrap(), expected);
    }
}
