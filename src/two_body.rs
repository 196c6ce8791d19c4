//! # Two-body closed-form formulas
//!
//! Textbook relations of the unperturbed two-body problem, evaluated from scalar inputs:
//!
//! | Function | Formula |
//! |----------|---------|
//! | [`compute_kepler_mean_motion`] | `n = √(μ_total / a³)` |
//! | [`compute_kepler_orbital_period`] | `T = 2π / n` |
//! | [`compute_circular_velocity`] | `v = √(μ / r)` |
//! | [`compute_vis_viva_velocity`] | `v = √(μ (2/r − 1/a))` |
//!
//! where `μ_total = G·m + μ` is the sum of the gravitational parameters of the central
//! and orbiting bodies.
//!
//! Every function is generic over `T: RealField + Copy`, validates its inputs and
//! returns a [`SamError`] instead of silently producing `NaN` or `inf`.
//!
//! ## Units
//!
//! - Lengths: **m**
//! - Gravitational parameters: **m³ s⁻²**
//! - Masses: **kg**
//! - Angular rates: **rad/s**
//!
//! ## Example
//!
//! ```rust
//! use sam::two_body::{compute_circular_velocity, compute_kepler_mean_motion};
//!
//! let mu_earth: f64 = 3.98600441e14;
//! let v = compute_circular_velocity(6_378_136.0, mu_earth).unwrap();
//! assert!((v - 7905.366).abs() < 1e-2);
//!
//! let n = compute_kepler_mean_motion(4.2164e7, mu_earth, 0.0).unwrap();
//! assert!(n > 7.29e-5 && n < 7.30e-5);
//! ```

use nalgebra::{ComplexField, RealField};

use crate::{constants::GRAVITATIONAL_CONSTANT, sam_errors::SamError};

/// Reject anything that is not strictly positive (NaN included).
fn ensure_positive<T: RealField + Copy>(value: T, name: &str) -> Result<(), SamError> {
    if value > T::zero() {
        Ok(())
    } else {
        log::debug!("rejecting {name} = {value}: must be strictly positive");
        Err(SamError::DomainError(format!(
            "{name} must be strictly positive, got {value}"
        )))
    }
}

/// Reject negative or NaN values; zero is accepted.
fn ensure_non_negative<T: RealField + Copy>(value: T, name: &str) -> Result<(), SamError> {
    if value >= T::zero() {
        Ok(())
    } else {
        log::debug!("rejecting {name} = {value}: must be non-negative");
        Err(SamError::InvalidArgument(format!(
            "{name} must be non-negative, got {value}"
        )))
    }
}

/// Reject results that overflowed for extreme, but valid, inputs.
fn ensure_finite<T: RealField + Copy>(value: T, name: &str) -> Result<T, SamError> {
    if ComplexField::is_finite(&value) {
        Ok(value)
    } else {
        log::debug!("{name} is not representable: {value}");
        Err(SamError::DomainError(format!(
            "{name} is not representable, got {value}"
        )))
    }
}

/// Compute the two-body mean motion of a Kepler orbit.
///
/// The gravitational parameter of the orbiting body, `G·m`, is added to the one of the
/// central body before evaluating
///
/// ```text
/// n = √( (G·m + μ) / a³ )
/// ```
///
/// Pass `secondary_mass = 0` for a test particle.
///
/// Arguments
/// ---------
/// * `semi_major_axis`: semi-major axis `a` of the Kepler orbit (m), strictly positive.
/// * `gravitational_parameter`: gravitational parameter `μ` of the central body (m³ s⁻²).
/// * `secondary_mass`: mass `m` of the orbiting body (kg).
///
/// Return
/// ------
/// * The mean motion in rad/s.
///
/// Errors
/// ------
/// * [`SamError::DomainError`] if `semi_major_axis <= 0` or the mean motion overflows.
/// * [`SamError::InvalidArgument`] if `gravitational_parameter` or `secondary_mass` is negative.
///
/// See also
/// --------
/// * [`compute_kepler_orbital_period`] – Period derived from the mean motion.
pub fn compute_kepler_mean_motion<T: RealField + Copy>(
    semi_major_axis: T,
    gravitational_parameter: T,
    secondary_mass: T,
) -> Result<T, SamError> {
    ensure_positive(semi_major_axis, "semi-major axis")?;
    ensure_non_negative(gravitational_parameter, "gravitational parameter")?;
    ensure_non_negative(secondary_mass, "secondary mass")?;

    let big_g: T = nalgebra::convert(GRAVITATIONAL_CONSTANT);
    let total_gravitational_parameter = big_g * secondary_mass + gravitational_parameter;

    // √(μ/a)/a instead of √(μ/a³): the cube underflows for tiny semi-major axes
    let mean_motion = (total_gravitational_parameter / semi_major_axis).sqrt() / semi_major_axis;
    ensure_finite(mean_motion, "mean motion")
}

/// Compute the orbital period `T = 2π / n` of a Kepler orbit.
///
/// Arguments and validation are those of [`compute_kepler_mean_motion`]. A vanishing
/// total gravitational parameter has no finite period and is rejected with
/// [`SamError::DomainError`].
pub fn compute_kepler_orbital_period<T: RealField + Copy>(
    semi_major_axis: T,
    gravitational_parameter: T,
    secondary_mass: T,
) -> Result<T, SamError> {
    let mean_motion =
        compute_kepler_mean_motion(semi_major_axis, gravitational_parameter, secondary_mass)?;
    ensure_positive(mean_motion, "mean motion")?;
    Ok(T::two_pi() / mean_motion)
}

/// Compute the circular velocity at a given orbital radius.
///
/// ```text
/// v = √(μ / r)
/// ```
///
/// Arguments
/// ---------
/// * `radius`: distance between the orbiting body and the center of the central body (m).
/// * `gravitational_parameter`: gravitational parameter `μ` of the central body (m³ s⁻²).
///
/// Return
/// ------
/// * The circular velocity in m/s.
///
/// Errors
/// ------
/// * [`SamError::DomainError`] if `radius <= 0` (the division is never attempted), or if
///   the velocity overflows for a subnormal radius.
/// * [`SamError::InvalidArgument`] if `gravitational_parameter` is negative.
pub fn compute_circular_velocity<T: RealField + Copy>(
    radius: T,
    gravitational_parameter: T,
) -> Result<T, SamError> {
    ensure_positive(radius, "radius")?;
    ensure_non_negative(gravitational_parameter, "gravitational parameter")?;

    ensure_finite((gravitational_parameter / radius).sqrt(), "circular velocity")
}

/// Compute the orbital speed at `radius` on a conic of semi-major axis `semi_major_axis`
/// using the vis-viva equation `v² = μ (2/r − 1/a)`.
///
/// Hyperbolic orbits take a negative semi-major axis. The radius must be reachable on
/// the given orbit (`r ≤ 2a` for ellipses), otherwise a [`SamError::DomainError`] is
/// returned.
pub fn compute_vis_viva_velocity<T: RealField + Copy>(
    radius: T,
    semi_major_axis: T,
    gravitational_parameter: T,
) -> Result<T, SamError> {
    ensure_positive(radius, "radius")?;
    ensure_non_negative(gravitational_parameter, "gravitational parameter")?;

    // zero and NaN both fail the two comparisons
    if !(semi_major_axis > T::zero() || semi_major_axis < T::zero()) {
        log::debug!("rejecting semi-major axis = {semi_major_axis} in vis-viva equation");
        return Err(SamError::DomainError(format!(
            "semi-major axis must be non-zero, got {semi_major_axis}"
        )));
    }

    let two: T = nalgebra::convert(2.0);
    let specific_energy_term = two / radius - T::one() / semi_major_axis;
    if specific_energy_term < T::zero() {
        log::debug!("radius {radius} lies beyond the apoapsis of a = {semi_major_axis}");
        return Err(SamError::DomainError(format!(
            "radius {radius} is not reachable on an orbit with semi-major axis {semi_major_axis}"
        )));
    }

    Ok((gravitational_parameter * specific_energy_term).sqrt())
}
