//! # Orbital state representations
//!
//! This module fixes the **index conventions** of the 6-vectors exchanged with the rest of
//! the crate and holds the numerical settings of the element conversions:
//!
//! - Cartesian states are [`nalgebra::Vector6`] ordered `[x, y, z, vx, vy, vz]`
//!   (m, m/s), see the `*_POSITION_INDEX` / `*_VELOCITY_INDEX` constants.
//! - Keplerian elements in vector form are ordered `[a | p, e, i, ω, Ω, ν | M]`, see the
//!   remaining `*_INDEX` constants. Slot 0 holds the semi-latus rectum instead of the
//!   semi-major axis for parabolic orbits, slot 5 the mean anomaly when the caller
//!   propagates with it.
//! - [`keplerian_element`](crate::orbit_type::keplerian_element) – the
//!   [`KeplerianElements`](crate::orbit_type::keplerian_element::KeplerianElements)
//!   struct and the Cartesian → Keplerian conversion.
//! - [`ConversionParams`] – tolerance used to detect the circular, equatorial and
//!   parabolic limit cases, built through [`ConversionParams::builder`].
//!
//! ## Typical workflow
//!
//! ```rust
//! use nalgebra::Vector6;
//! use sam::orbit_type::{ConversionParams, ECCENTRICITY_INDEX};
//! use sam::orbit_type::keplerian_element::KeplerianElements;
//!
//! let mu: f64 = 3.986004415e14;
//! let state = Vector6::new(3.75e6, 4.24e6, -1.39e6, -4.65e3, -2.21e3, 1.66e3);
//!
//! let params = ConversionParams::builder().tolerance(1e-12).build().unwrap();
//! let kep = KeplerianElements::from_cartesian(&state, mu, &params).unwrap();
//!
//! assert!((kep.to_vector6()[ECCENTRICITY_INDEX] - 0.949175203660321).abs() < 1e-12);
//! ```

use std::cmp::Ordering::{Greater, Less};

use nalgebra::RealField;
use serde::{Deserialize, Serialize};

use crate::sam_errors::SamError;

/// Classical Keplerian elements structure and the Cartesian conversion.
pub mod keplerian_element;

// -------------------------------------------------------------------------------------------------
// Cartesian element indices
// -------------------------------------------------------------------------------------------------

pub const X_POSITION_INDEX: usize = 0;
pub const Y_POSITION_INDEX: usize = 1;
pub const Z_POSITION_INDEX: usize = 2;
pub const X_VELOCITY_INDEX: usize = 3;
pub const Y_VELOCITY_INDEX: usize = 4;
pub const Z_VELOCITY_INDEX: usize = 5;

// -------------------------------------------------------------------------------------------------
// Keplerian element indices
// -------------------------------------------------------------------------------------------------

pub const SEMI_MAJOR_AXIS_INDEX: usize = 0;
/// Shares slot 0 with the semi-major axis (parabolic orbits only).
pub const SEMI_LATUS_RECTUM_INDEX: usize = 0;
pub const ECCENTRICITY_INDEX: usize = 1;
pub const INCLINATION_INDEX: usize = 2;
pub const ARGUMENT_OF_PERIAPSIS_INDEX: usize = 3;
pub const LONGITUDE_OF_ASCENDING_NODE_INDEX: usize = 4;
pub const TRUE_ANOMALY_INDEX: usize = 5;
/// Shares slot 5 with the true anomaly when elements carry the mean anomaly instead.
pub const MEAN_ANOMALY_INDEX: usize = 5;

/// Numerical settings of the element conversions.
///
/// Fields
/// ------
/// * `tolerance`: threshold below which the eccentricity (resp. `|e − 1|`, the norm of
///   the node vector) is treated as exactly circular (resp. parabolic, equatorial).
///   Defaults to `10 · ε` of the scalar type.
///
/// See also
/// --------
/// * [`ConversionParams::builder`] – Validated construction.
/// * [`keplerian_element::KeplerianElements::from_cartesian`] – Consumer of these settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionParams<T> {
    pub tolerance: T,
}

impl<T: RealField + Copy> ConversionParams<T> {
    /// Equivalent to [`ConversionParams::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`ConversionParamsBuilder`] initialized with the default values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sam::orbit_type::ConversionParams;
    ///
    /// let params = ConversionParams::builder().tolerance(1.0e-10).build().unwrap();
    /// assert_eq!(params.tolerance, 1.0e-10);
    ///
    /// assert!(ConversionParams::builder().tolerance(-1.0).build().is_err());
    /// ```
    pub fn builder() -> ConversionParamsBuilder<T> {
        ConversionParamsBuilder::new()
    }
}

impl<T: RealField + Copy> Default for ConversionParams<T> {
    fn default() -> Self {
        let ten: T = nalgebra::convert(10.0);
        ConversionParams {
            tolerance: ten * T::default_epsilon(),
        }
    }
}

/// Builder for [`ConversionParams`], with validation.
#[derive(Debug, Clone)]
pub struct ConversionParamsBuilder<T> {
    params: ConversionParams<T>,
}

impl<T: RealField + Copy> Default for ConversionParamsBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RealField + Copy> ConversionParamsBuilder<T> {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: ConversionParams::default(),
        }
    }

    pub fn tolerance(mut self, v: T) -> Self {
        self.params.tolerance = v;
        self
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `0 < tolerance < 1` – a tolerance of one or more would classify every bound
    ///   orbit as circular. NaN is rejected.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(ConversionParams)` if the values are valid.
    /// * `Err(SamError::InvalidConversionParams)` otherwise.
    pub fn build(self) -> Result<ConversionParams<T>, SamError> {
        let p = &self.params;

        let tolerance_ok = p.tolerance.partial_cmp(&T::zero()) == Some(Greater)
            && p.tolerance.partial_cmp(&T::one()) == Some(Less);
        if !tolerance_ok {
            log::debug!("rejecting conversion tolerance {}", p.tolerance);
            return Err(SamError::InvalidConversionParams(format!(
                "tolerance must lie in (0, 1), got {}",
                p.tolerance
            )));
        }

        Ok(self.params)
    }
}
