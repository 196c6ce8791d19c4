//! # Anomaly conversions
//!
//! Closed-form conversions between the true anomaly `ν`, the eccentric anomaly
//! (`E` for ellipses, `F` for hyperbolas) and the mean anomaly `M`.
//!
//! Each conversion comes in three flavours: an elliptical one (`0 ≤ e < 1`), a hyperbolic
//! one (`e > 1`) and a wrapper dispatching on the eccentricity when the orbit type is not
//! known in advance. Parabolic orbits (`e = 1` within machine epsilon) are rejected by
//! the wrappers.
//!
//! Equations follow Chobotov, *Orbital Mechanics*, 3rd ed. (2002).

use nalgebra::{ComplexField, RealField};

use crate::sam_errors::SamError;

fn check_elliptical<T: RealField + Copy>(eccentricity: T) -> Result<(), SamError> {
    if eccentricity >= T::zero() && eccentricity < T::one() {
        Ok(())
    } else {
        log::debug!("eccentricity {eccentricity} is outside [0, 1)");
        Err(SamError::NonEllipticalEccentricity(format!(
            "expected 0 <= e < 1, got {eccentricity}"
        )))
    }
}

fn check_hyperbolic<T: RealField + Copy>(eccentricity: T) -> Result<(), SamError> {
    if eccentricity > T::one() {
        Ok(())
    } else {
        log::debug!("eccentricity {eccentricity} is not hyperbolic");
        Err(SamError::NonHyperbolicEccentricity(format!(
            "expected e > 1, got {eccentricity}"
        )))
    }
}

/// Classify the eccentricity for the dispatching wrappers.
///
/// Return
/// ------
/// * `Ok(true)` for an ellipse, `Ok(false)` for a hyperbola.
fn is_elliptical<T: RealField + Copy>(eccentricity: T) -> Result<bool, SamError> {
    if eccentricity < T::zero() {
        log::debug!("negative eccentricity {eccentricity}");
        return Err(SamError::NegativeEccentricity(format!("{eccentricity}")));
    }
    if ComplexField::abs(eccentricity - T::one()) < T::default_epsilon() {
        log::debug!("parabolic eccentricity {eccentricity}");
        return Err(SamError::ParabolicOrbit);
    }
    if eccentricity < T::one() {
        Ok(true)
    } else if eccentricity > T::one() {
        Ok(false)
    } else {
        // NaN ends up here
        Err(SamError::InvalidArgument(format!(
            "eccentricity is not a number: {eccentricity}"
        )))
    }
}

/// Convert a true anomaly to the eccentric anomaly of an elliptical orbit.
///
/// ```text
/// sin E = √(1 − e²) sin ν / (1 + e cos ν)
/// cos E = (e + cos ν) / (1 + e cos ν)
/// ```
///
/// Arguments
/// ---------
/// * `true_anomaly`: true anomaly `ν` (rad).
/// * `eccentricity`: eccentricity `e`, with `0 ≤ e < 1`.
///
/// Return
/// ------
/// * The elliptical eccentric anomaly `E` in `(-π, π]` (rad).
///
/// Errors
/// ------
/// * [`SamError::NonEllipticalEccentricity`] if `e < 0` or `e ≥ 1`.
pub fn true_to_elliptical_eccentric_anomaly<T: RealField + Copy>(
    true_anomaly: T,
    eccentricity: T,
) -> Result<T, SamError> {
    check_elliptical(eccentricity)?;

    let (sin_nu, cos_nu) = true_anomaly.sin_cos();
    let denominator = T::one() + eccentricity * cos_nu;

    let sin_e = (T::one() - eccentricity * eccentricity).sqrt() * sin_nu / denominator;
    let cos_e = (eccentricity + cos_nu) / denominator;

    Ok(sin_e.atan2(cos_e))
}

/// Convert a true anomaly to the hyperbolic eccentric anomaly `F` (`e > 1`).
///
/// ```text
/// sinh F = √(e² − 1) sin ν / (1 + cos ν)
/// cosh F = (cos ν + e) / (1 + cos ν)
/// F      = atanh(sinh F / cosh F)
/// ```
///
/// Errors
/// ------
/// * [`SamError::NonHyperbolicEccentricity`] if `e ≤ 1`.
pub fn true_to_hyperbolic_eccentric_anomaly<T: RealField + Copy>(
    true_anomaly: T,
    eccentricity: T,
) -> Result<T, SamError> {
    check_hyperbolic(eccentricity)?;

    let (sin_nu, cos_nu) = true_anomaly.sin_cos();
    let denominator = T::one() + cos_nu;

    let sinh_f = (eccentricity * eccentricity - T::one()).sqrt() * sin_nu / denominator;
    let cosh_f = (cos_nu + eccentricity) / denominator;

    Ok((sinh_f / cosh_f).atanh())
}

/// Convert a true anomaly to the eccentric anomaly, elliptical or hyperbolic depending on
/// the eccentricity.
///
/// Errors
/// ------
/// * [`SamError::NegativeEccentricity`] if `e < 0`.
/// * [`SamError::ParabolicOrbit`] if `e = 1` within machine epsilon.
///
/// See also
/// --------
/// * [`true_to_elliptical_eccentric_anomaly`]
/// * [`true_to_hyperbolic_eccentric_anomaly`]
pub fn true_to_eccentric_anomaly<T: RealField + Copy>(
    true_anomaly: T,
    eccentricity: T,
) -> Result<T, SamError> {
    if is_elliptical(eccentricity)? {
        true_to_elliptical_eccentric_anomaly(true_anomaly, eccentricity)
    } else {
        true_to_hyperbolic_eccentric_anomaly(true_anomaly, eccentricity)
    }
}

/// Kepler's equation for ellipses: `M = E − e sin E`.
///
/// Errors
/// ------
/// * [`SamError::NonEllipticalEccentricity`] if `e < 0` or `e ≥ 1`.
pub fn elliptical_eccentric_to_mean_anomaly<T: RealField + Copy>(
    eccentric_anomaly: T,
    eccentricity: T,
) -> Result<T, SamError> {
    check_elliptical(eccentricity)?;
    Ok(eccentric_anomaly - eccentricity * eccentric_anomaly.sin())
}

/// Kepler's equation for hyperbolas: `M = e sinh F − F`.
///
/// Errors
/// ------
/// * [`SamError::NonHyperbolicEccentricity`] if `e ≤ 1`.
pub fn hyperbolic_eccentric_to_mean_anomaly<T: RealField + Copy>(
    hyperbolic_eccentric_anomaly: T,
    eccentricity: T,
) -> Result<T, SamError> {
    check_hyperbolic(eccentricity)?;
    Ok(eccentricity * hyperbolic_eccentric_anomaly.sinh() - hyperbolic_eccentric_anomaly)
}

/// Convert an eccentric anomaly to the mean anomaly, dispatching on the eccentricity.
///
/// Same error conditions as [`true_to_eccentric_anomaly`].
pub fn eccentric_to_mean_anomaly<T: RealField + Copy>(
    eccentric_anomaly: T,
    eccentricity: T,
) -> Result<T, SamError> {
    if is_elliptical(eccentricity)? {
        elliptical_eccentric_to_mean_anomaly(eccentric_anomaly, eccentricity)
    } else {
        hyperbolic_eccentric_to_mean_anomaly(eccentric_anomaly, eccentricity)
    }
}
