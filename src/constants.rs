//! # Constants and type definitions for SAM
//!
//! This module centralizes the **physical constants**, **time conversion factors** and
//! **unit type aliases** used throughout the `sam` library.
//!
//! All values are expressed in SI units. The constants are plain `f64`; generic code
//! lifts them into its scalar type with [`nalgebra::convert`].
//!
//! ## References
//!
//! - Standish, E.M. (1995), *Report of the IAU WGAS Sub-Group on Numerical Standards*,
//!   Highlights of Astronomy, Table 1.
//! - NASA (2012), Julian time scale definitions.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Universal gravitational constant G in m³ kg⁻¹ s⁻² (Standish, 1995)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67259e-11;

/// Number of seconds in a Julian day
pub const JULIAN_DAY_IN_SECONDS: f64 = 86_400.0;

/// Number of days in a Julian year
pub const JULIAN_YEAR_IN_DAYS: f64 = 365.25;

/// Number of seconds in a Julian year
pub const JULIAN_YEAR_IN_SECONDS: f64 = 3.15576e7;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Angle in degrees
pub type Degree = f64;
/// Distance in meters
pub type Meter = f64;
/// Speed in meters per second
pub type MeterPerSecond = f64;
/// Mass in kilograms
pub type Kilogram = f64;
/// Duration in seconds
pub type Second = f64;
/// Gravitational parameter μ = G·M in m³ s⁻²
pub type GravitationalParameter = f64;
