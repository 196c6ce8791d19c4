//! # SAM – Simple Astrodynamics Methods
//!
//! Closed-form relations of the unperturbed two-body problem:
//!
//! - [`two_body`] – mean motion, orbital period, circular and vis-viva velocities.
//! - [`anomaly`] – true, eccentric and mean anomaly conversions.
//! - [`orbit_type`] – state-vector conventions and the Cartesian → Keplerian conversion.
//! - [`constants`] – physical constants and unit aliases.
//!
//! Every routine is a pure function, generic over `T: nalgebra::RealField + Copy`, and
//! reports invalid physical inputs through [`sam_errors::SamError`].
pub mod anomaly;
pub mod constants;
pub mod orbit_type;
pub mod sam_errors;
pub mod two_body;
