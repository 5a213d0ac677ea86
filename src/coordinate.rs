//! Geographic and spherical coordinates.
//!
//! The spherical frame is attached so that the geographic point (0°, 0°) maps to
//! (θ, φ) = (π/2, 0). The polar angle θ grows with latitude: the south pole is
//! θ = 0, the equator θ = π/2 and the north pole θ = π. The azimuthal angle φ is
//! longitude measured eastwards and wrapped into [0, 2π).

use crate::error::check_coordinates;
use crate::math::{FRAC_PI_2, PI, TAU, normalize_radians_0_to_tau};
use crate::Result;

/// Observer location in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicCoordinate {
    /// Latitude in degrees (-90 to +90, positive north)
    latitude: f64,
    /// Longitude in degrees (-180 to +180, positive east)
    longitude: f64,
}

impl GeographicCoordinate {
    /// Creates a new geographic coordinate.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range values.
    ///
    /// # Example
    /// ```
    /// # use subsolar::coordinate::GeographicCoordinate;
    /// let helsinki = GeographicCoordinate::new(60.17, 24.94).unwrap();
    /// assert_eq!(helsinki.latitude(), 60.17);
    /// assert!(GeographicCoordinate::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Converts to the simulation's spherical frame.
    #[must_use]
    pub fn to_spherical(&self) -> SphericalCoordinate {
        let theta = FRAC_PI_2 + self.latitude / 90.0 * FRAC_PI_2;

        let phi = if self.longitude >= 0.0 {
            self.longitude / 180.0 * PI
        } else {
            TAU + self.longitude / 180.0 * PI
        };

        SphericalCoordinate {
            theta,
            phi: normalize_radians_0_to_tau(phi),
        }
    }
}

/// Point in the simulation's spherical frame, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoordinate {
    /// Polar angle (0 at the south pole, π/2 at the equator, π at the north pole)
    theta: f64,
    /// Azimuthal angle, wrapped into [0, 2π)
    phi: f64,
}

impl SphericalCoordinate {
    /// Creates a spherical coordinate; φ is normalized into [0, 2π).
    ///
    /// θ is taken as given; the simulation validates it where it is used.
    #[must_use]
    pub fn new(theta: f64, phi: f64) -> Self {
        Self {
            theta,
            phi: normalize_radians_0_to_tau(phi),
        }
    }

    /// Gets the polar angle θ in radians.
    #[must_use]
    pub const fn theta(&self) -> f64 {
        self.theta
    }

    /// Gets the azimuthal angle φ in radians.
    #[must_use]
    pub const fn phi(&self) -> f64 {
        self.phi
    }

    /// Checks if the point lies north of the equator (θ > π/2).
    #[must_use]
    pub fn is_northern(&self) -> bool {
        self.theta > FRAC_PI_2
    }
}

/// Converts geographic degrees straight to spherical radians.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
///
/// # Example
/// ```
/// # use subsolar::coordinate::to_spherical;
/// let point = to_spherical(0.0, 0.0).unwrap();
/// assert!((point.theta() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert_eq!(point.phi(), 0.0);
/// ```
pub fn to_spherical(latitude: f64, longitude: f64) -> Result<SphericalCoordinate> {
    Ok(GeographicCoordinate::new(latitude, longitude)?.to_spherical())
}
