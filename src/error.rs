//! Error types for the subsolar simulation.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while validating inputs or running the simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid calendar date, or a date outside the simulated range.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// Numerical computation error (e.g., a non-finite intermediate value).
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
    /// The rotation scan did not find both day/night boundary crossings.
    ScanInconsistency {
        /// Number of crossings the scan recorded.
        crossings: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDate { message } => {
                write!(f, "invalid date: {message}")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
            Self::ScanInconsistency { crossings } => {
                write!(
                    f,
                    "rotation scan found {crossings} boundary crossing(s), expected 2"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }

    /// Creates a scan inconsistency error.
    #[must_use]
    pub const fn scan_inconsistency(crossings: usize) -> Self {
        Self::ScanInconsistency { crossings }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a polar angle θ is finite and within [0, π] radians.
///
/// # Errors
/// Returns `ComputationError` if θ is not finite or outside [0, π].
pub fn check_polar_angle(theta: f64) -> Result<f64> {
    if !theta.is_finite() {
        return Err(Error::computation_error("polar angle is not finite"));
    }
    if !(0.0..=core::f64::consts::PI).contains(&theta) {
        return Err(Error::computation_error(
            "polar angle must be between 0 and π",
        ));
    }
    Ok(theta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(66.56).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(-74.006).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
        assert!(check_longitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_polar_angle_validation() {
        assert!(check_polar_angle(0.0).is_ok());
        assert!(check_polar_angle(core::f64::consts::FRAC_PI_2).is_ok());
        assert!(check_polar_angle(core::f64::consts::PI).is_ok());

        assert!(check_polar_angle(-0.1).is_err());
        assert!(check_polar_angle(3.5).is_err());
        assert!(check_polar_angle(f64::NAN).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_date("month must be between 1 and 12");
        assert_eq!(
            err.to_string(),
            "invalid date: month must be between 1 and 12"
        );

        let err = Error::scan_inconsistency(1);
        assert_eq!(
            err.to_string(),
            "rotation scan found 1 boundary crossing(s), expected 2"
        );
    }
}
