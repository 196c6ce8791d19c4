use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamError {
    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Eccentricity is non-elliptical: {0}")]
    NonEllipticalEccentricity(String),

    #[error("Eccentricity is non-hyperbolic: {0}")]
    NonHyperbolicEccentricity(String),

    #[error("Eccentricity is negative: {0}")]
    NegativeEccentricity(String),

    #[error("Parabolic orbits are not supported by anomaly conversions")]
    ParabolicOrbit,

    #[error("Cartesian state does not define an orbital plane: {0}")]
    DegenerateState(String),

    #[error("Invalid conversion parameters: {0}")]
    InvalidConversionParams(String),
}

impl PartialEq for SamError {
    fn eq(&self, other: &Self) -> bool {
        use SamError::*;
        match (self, other) {
            (DomainError(a), DomainError(b)) => a == b,
            (InvalidArgument(a), InvalidArgument(b)) => a == b,
            (NonEllipticalEccentricity(a), NonEllipticalEccentricity(b)) => a == b,
            (NonHyperbolicEccentricity(a), NonHyperbolicEccentricity(b)) => a == b,
            (NegativeEccentricity(a), NegativeEccentricity(b)) => a == b,
            (DegenerateState(a), DegenerateState(b)) => a == b,
            (InvalidConversionParams(a), InvalidConversionParams(b)) => a == b,

            (ParabolicOrbit, ParabolicOrbit) => true,

            _ => false,
        }
    }
}
