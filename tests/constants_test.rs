use sam::constants::{
    GRAVITATIONAL_CONSTANT, JULIAN_DAY_IN_SECONDS, JULIAN_YEAR_IN_DAYS, JULIAN_YEAR_IN_SECONDS,
};

#[test]
fn test_definition_of_constants() {
    assert_eq!(GRAVITATIONAL_CONSTANT, 6.67259e-11);
    assert_eq!(JULIAN_DAY_IN_SECONDS, 86400.0);
    assert_eq!(JULIAN_YEAR_IN_DAYS, 365.25);
    assert_eq!(JULIAN_YEAR_IN_SECONDS, 3.15576e7);
}
