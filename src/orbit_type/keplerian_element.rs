//! # Keplerian orbital elements
//!
//! This module defines the [`KeplerianElements`] struct and the conversion from a
//! Cartesian state vector, providing the **classical orbital element representation**
//! of the two-body problem.
//!
//! ## What are Keplerian elements?
//!
//! 1. **a** – Semi-major axis (m), or **p** – semi-latus rectum (m) for parabolic orbits
//! 2. **e** – Eccentricity (unitless)
//! 3. **i** – Inclination (radians)
//! 4. **ω** – Argument of periapsis (radians)
//! 5. **Ω** – Longitude of ascending node (radians)
//! 6. **ν** – True anomaly (radians)
//!
//! ## Degeneracies
//!
//! Classical Keplerian elements suffer from singularities. Within the tolerance of
//! [`ConversionParams`]:
//!
//! - **Parabolic orbits (`e → 1`)**: the semi-major axis is infinite.
//!   → the semi-latus rectum is stored instead, see [`ConicSize`].
//! - **Circular orbits (`e → 0`)**: ω is undefined.
//!   → set to `0.0`; ν is then measured from the ascending node.
//! - **Equatorial orbits (`i → 0` or `i → π`)**: Ω is undefined.
//!   → set to `0.0`; the node line is taken along the x axis. Retrograde equatorial
//!   orbits (`i = π`) measure ω and ν from +x towards −y.
//!
//! References: Chobotov, *Orbital Mechanics*, 3rd ed. (2002).

use std::fmt;

use nalgebra::{ComplexField, RealField, Vector3, Vector6};
use serde::{Deserialize, Serialize};

use crate::{
    orbit_type::{
        ConversionParams, ARGUMENT_OF_PERIAPSIS_INDEX, ECCENTRICITY_INDEX, INCLINATION_INDEX,
        LONGITUDE_OF_ASCENDING_NODE_INDEX, SEMI_MAJOR_AXIS_INDEX, TRUE_ANOMALY_INDEX,
        X_POSITION_INDEX, X_VELOCITY_INDEX, Y_POSITION_INDEX, Y_VELOCITY_INDEX,
        Z_POSITION_INDEX, Z_VELOCITY_INDEX,
    },
    sam_errors::SamError,
};

/// Size of the conic section.
///
/// The semi-major axis of a parabola is infinite, so the semi-latus rectum is carried
/// instead. Hyperbolic orbits carry a negative semi-major axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConicSize<T> {
    SemiMajorAxis(T),
    SemiLatusRectum(T),
}

impl<T: Copy> ConicSize<T> {
    /// The stored length, whichever it is.
    pub fn value(&self) -> T {
        match *self {
            ConicSize::SemiMajorAxis(a) => a,
            ConicSize::SemiLatusRectum(p) => p,
        }
    }
}

/// Keplerian orbital elements (osculating, two-body).
///
/// Units
/// -----
/// * `size`: meters.
/// * `eccentricity`: unitless.
/// * `inclination`, `periapsis_argument`, `ascending_node_longitude`, `true_anomaly`:
///   radians, in `[0, 2π)` (inclination in `[0, π]`).
///
/// See also
/// --------
/// * [`KeplerianElements::from_cartesian`] – Construction from a state vector.
/// * [`KeplerianElements::to_vector6`] – Index-ordered vector form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeplerianElements<T> {
    pub size: ConicSize<T>,
    pub eccentricity: T,
    pub inclination: T,
    pub periapsis_argument: T,
    pub ascending_node_longitude: T,
    pub true_anomaly: T,
}

impl<T: RealField + Copy> KeplerianElements<T> {
    /// Convert a Cartesian state vector to osculating Keplerian elements.
    ///
    /// The conversion computes the angular momentum `h = r × v`, the semi-latus rectum
    /// `p = |h|² / μ` and the eccentricity vector `e = (v × h)/μ − r/|r|`, then derives
    /// the angles from the node line `n = z × h/|h|`. Quadrants are resolved with the
    /// sign of `n_y` (node), `e_z` (periapsis) and `r · v` (true anomaly); the limit
    /// cases switch to the substitutes listed in the module documentation.
    ///
    /// Arguments
    /// ---------
    /// * `state`: Cartesian state `[x, y, z, vx, vy, vz]` in m and m/s.
    /// * `gravitational_parameter`: gravitational parameter `μ` of the central body (m³ s⁻²).
    /// * `params`: tolerance used to detect the limit cases.
    ///
    /// Return
    /// ------
    /// * The Keplerian elements; `size` is a semi-latus rectum for parabolic orbits.
    ///
    /// Errors
    /// ------
    /// * [`SamError::InvalidArgument`] if `μ <= 0`.
    /// * [`SamError::DegenerateState`] if the position or the angular momentum vanishes.
    pub fn from_cartesian(
        state: &Vector6<T>,
        gravitational_parameter: T,
        params: &ConversionParams<T>,
    ) -> Result<Self, SamError> {
        if !(gravitational_parameter > T::zero()) {
            log::debug!("rejecting gravitational parameter {gravitational_parameter}");
            return Err(SamError::InvalidArgument(format!(
                "gravitational parameter must be strictly positive, got {gravitational_parameter}"
            )));
        }

        let tolerance = params.tolerance;
        let two_pi = T::two_pi();

        let position = Vector3::new(
            state[X_POSITION_INDEX],
            state[Y_POSITION_INDEX],
            state[Z_POSITION_INDEX],
        );
        let velocity = Vector3::new(
            state[X_VELOCITY_INDEX],
            state[Y_VELOCITY_INDEX],
            state[Z_VELOCITY_INDEX],
        );

        let radius = position.norm();
        let angular_momentum = position.cross(&velocity);
        let angular_momentum_norm = angular_momentum.norm();
        if !(radius > T::zero()) || !(angular_momentum_norm > T::zero()) {
            log::debug!("no orbital plane: |r| = {radius}, |h| = {angular_momentum_norm}");
            return Err(SamError::DegenerateState(format!(
                "|r| = {radius}, |h| = {angular_momentum_norm}"
            )));
        }
        let position_unit = position / radius;

        let semi_latus_rectum = angular_momentum.norm_squared() / gravitational_parameter;

        let mut eccentricity_vector =
            velocity.cross(&angular_momentum) / gravitational_parameter - position_unit;
        let eccentricity = eccentricity_vector.norm();

        let size = if ComplexField::abs(eccentricity - T::one()) < tolerance {
            ConicSize::SemiLatusRectum(semi_latus_rectum)
        } else {
            ConicSize::SemiMajorAxis(
                semi_latus_rectum / (T::one() - eccentricity * eccentricity),
            )
        };

        let inclination =
            clamp_unit(angular_momentum.z / angular_momentum_norm).acos();

        // Node line; its norm is sin(i), so it vanishes for equatorial orbits.
        let node_vector = Vector3::z().cross(&(angular_momentum / angular_momentum_norm));
        let node_norm = node_vector.norm();
        let is_equatorial = node_norm < tolerance;

        // In-plane y axis of an equatorial orbit: +y when prograde, −y when retrograde.
        let equatorial_side = if angular_momentum.z < T::zero() {
            -T::one()
        } else {
            T::one()
        };

        let (node_unit, periapsis_quadrant) = if is_equatorial {
            (Vector3::x(), equatorial_side * eccentricity_vector.y)
        } else {
            (node_vector / node_norm, eccentricity_vector.z)
        };

        let mut ascending_node_longitude = clamp_unit(node_unit.x).acos();
        if node_unit.y < T::zero() {
            ascending_node_longitude = two_pi - ascending_node_longitude;
        }

        let mut true_anomaly_quadrant = position.dot(&velocity);

        let periapsis_argument = if eccentricity < tolerance {
            // Circular: measure the true anomaly from the node line instead of periapsis.
            eccentricity_vector = node_unit;
            true_anomaly_quadrant = if is_equatorial {
                equatorial_side * position.y
            } else {
                position.z
            };
            T::zero()
        } else {
            let mut argument =
                clamp_unit((eccentricity_vector / eccentricity).dot(&node_unit)).acos();
            if periapsis_quadrant < T::zero() {
                argument = two_pi - argument;
            }
            argument
        };

        let mut cos_true_anomaly = position_unit.dot(&eccentricity_vector.normalize());
        if ComplexField::abs(T::one() - cos_true_anomaly) < tolerance {
            cos_true_anomaly = T::one();
        }
        if ComplexField::abs(cos_true_anomaly) < tolerance {
            cos_true_anomaly = T::zero();
        }

        let mut true_anomaly = clamp_unit(cos_true_anomaly).acos();
        if true_anomaly_quadrant < T::zero() {
            true_anomaly = two_pi - true_anomaly;
        }

        Ok(KeplerianElements {
            size,
            eccentricity,
            inclination,
            periapsis_argument,
            ascending_node_longitude,
            true_anomaly,
        })
    }

    /// Same as [`KeplerianElements::from_cartesian`] with [`ConversionParams::default`].
    pub fn from_cartesian_default(
        state: &Vector6<T>,
        gravitational_parameter: T,
    ) -> Result<Self, SamError> {
        Self::from_cartesian(state, gravitational_parameter, &ConversionParams::default())
    }

    /// Whether the size slot holds a semi-latus rectum.
    pub fn is_parabolic(&self) -> bool {
        matches!(self.size, ConicSize::SemiLatusRectum(_))
    }

    /// Pack the elements into a vector ordered by the `*_INDEX` constants of
    /// [`crate::orbit_type`].
    pub fn to_vector6(&self) -> Vector6<T> {
        let mut elements = Vector6::zeros();
        elements[SEMI_MAJOR_AXIS_INDEX] = self.size.value();
        elements[ECCENTRICITY_INDEX] = self.eccentricity;
        elements[INCLINATION_INDEX] = self.inclination;
        elements[ARGUMENT_OF_PERIAPSIS_INDEX] = self.periapsis_argument;
        elements[LONGITUDE_OF_ASCENDING_NODE_INDEX] = self.ascending_node_longitude;
        elements[TRUE_ANOMALY_INDEX] = self.true_anomaly;
        elements
    }
}

/// Keep a cosine inside the domain of `acos` despite rounding.
fn clamp_unit<T: RealField + Copy>(cosine: T) -> T {
    cosine.clamp(-T::one(), T::one())
}

impl<T: RealField + Copy> fmt::Display for KeplerianElements<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rad_to_deg: T = nalgebra::convert(180.0 / std::f64::consts::PI);
        writeln!(f, "Keplerian Elements")?;
        writeln!(f, "-------------------------------------------")?;
        match self.size {
            ConicSize::SemiMajorAxis(a) => {
                writeln!(f, "  a   (semi-major axis)       = {a:.6} m")?
            }
            ConicSize::SemiLatusRectum(p) => {
                writeln!(f, "  p   (semi-latus rectum)     = {p:.6} m")?
            }
        }
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.6}°)",
            self.inclination,
            self.inclination * rad_to_deg
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis) = {:.6} rad ({:.6}°)",
            self.periapsis_argument,
            self.periapsis_argument * rad_to_deg
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6} rad ({:.6}°)",
            self.ascending_node_longitude,
            self.ascending_node_longitude * rad_to_deg
        )?;
        writeln!(
            f,
            "  ν   (true anomaly)          = {:.6} rad ({:.6}°)",
            self.true_anomaly,
            self.true_anomaly * rad_to_deg
        )
    }
}
