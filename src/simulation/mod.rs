//! Subsolar point simulation.
//!
//! The Earth is a sphere on a circular orbit. Once per day the subsolar point's
//! polar angle θ moves by a fixed step between the two tropics and reflects
//! linearly when it would overshoot one. The reflection keeps θ inside the
//! tropics but is only a rough approximation of the declination curve near
//! the solstices, where the real declination changes sinusoidally.
//!
//! For the target date the half-day length follows from spherical
//! trigonometry, and [`scan`] turns it into clock minutes by rotating the
//! Earth in one-minute steps.
//!
//! Conventions follow [`crate::coordinate`]: θ > π/2 is north of the equator.

#[cfg(feature = "chrono")]
use chrono::Datelike;
use log::{debug, trace};

use crate::calendar::{CalendarDate, EPOCH, day_count};
use crate::coordinate::{GeographicCoordinate, SphericalCoordinate};
use crate::error::check_polar_angle;
use crate::math::{
    FRAC_PI_2, PI, acos_clamped, cos, degrees_to_radians, normalize_radians_0_to_tau, powi,
    radians_to_degrees, sqrt, tan,
};
use crate::types::SunriseResult;
use crate::{Error, Result};

pub mod scan;

/// Obliquity of the ecliptic in degrees.
pub const OBLIQUITY_DEGREES: f64 = 23.44;

/// Lowest polar angle the subsolar point reaches (Tropic of Capricorn, 66.56°).
pub const TROPIC_THETA_MIN: f64 = FRAC_PI_2 - degrees_to_radians(OBLIQUITY_DEGREES);

/// Highest polar angle the subsolar point reaches (Tropic of Cancer, 113.44°).
pub const TROPIC_THETA_MAX: f64 = FRAC_PI_2 + degrees_to_radians(OBLIQUITY_DEGREES);

/// Polar angle of the subsolar point on the epoch date: the Tropic of Capricorn.
pub const EPOCH_THETA: f64 = TROPIC_THETA_MIN;

/// Daily change of θ: the 46.88° seasonal swing spread over half a tropical year.
pub const DAILY_THETA_STEP: f64 = degrees_to_radians(2.0 * OBLIQUITY_DEGREES) / 182.62125;

/// Shift applied to a polar angle whose cosine squares to exactly 1.
const POLE_PERTURBATION: f64 = 1e-5;

/// Direction in which θ is currently moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// θ grows; the subsolar point moves north
    Increasing,
    /// θ shrinks; the subsolar point moves south
    Decreasing,
}

impl Direction {
    /// Gets the sign of the daily θ change (+1 or -1).
    #[must_use]
    pub const fn sign(&self) -> i8 {
        match self {
            Self::Increasing => 1,
            Self::Decreasing => -1,
        }
    }
}

/// Position of the subsolar point on a simulated day.
///
/// A state is only handed out after propagation has finished, so every public
/// method reads it without changing it.
///
/// # Example
/// ```
/// use subsolar::calendar::CalendarDate;
/// use subsolar::simulation::SubsolarState;
///
/// let june = CalendarDate::new(2009, 6, 21).unwrap();
/// let state = SubsolarState::on_date(june).unwrap();
/// assert!(state.theta() > std::f64::consts::FRAC_PI_2); // northern summer
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubsolarState {
    theta: f64,
    phi: f64,
    direction: Direction,
}

impl Default for SubsolarState {
    fn default() -> Self {
        Self::at_epoch()
    }
}

impl SubsolarState {
    /// State on the epoch date (2008-12-21): Tropic of Capricorn, φ = 0, moving north.
    #[must_use]
    pub const fn at_epoch() -> Self {
        Self {
            theta: EPOCH_THETA,
            phi: 0.0,
            direction: Direction::Increasing,
        }
    }

    /// State after `days` simulated days since the epoch.
    #[must_use]
    pub fn after_days(days: u32) -> Self {
        let mut state = Self::at_epoch();
        state.propagate(days);
        state
    }

    /// State on the given date.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the date precedes the 2008-12-21 epoch.
    pub fn on_date(date: CalendarDate) -> Result<Self> {
        if date < EPOCH {
            return Err(Error::invalid_date("date precedes the 2008-12-21 epoch"));
        }
        Ok(Self::after_days(day_count(EPOCH, date)))
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

    /// Gets the direction θ is moving in.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Gets the signed angle between the subsolar point and the equator (θ - π/2).
    #[must_use]
    pub fn declination(&self) -> f64 {
        self.theta - FRAC_PI_2
    }

    fn propagate(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_one_day();
        }
        debug!(
            "propagated {days} day(s): θ = {:.4}°, {:?}",
            radians_to_degrees(self.theta),
            self.direction
        );
    }

    /// Moves θ by one daily step, reflecting at the tropics.
    fn advance_one_day(&mut self) {
        match self.direction {
            Direction::Increasing if self.theta + DAILY_THETA_STEP >= TROPIC_THETA_MAX => {
                let overshoot = self.theta + DAILY_THETA_STEP - TROPIC_THETA_MAX;
                self.theta = TROPIC_THETA_MAX - overshoot;
                self.direction = Direction::Decreasing;
                trace!("reflected at θ max, overshoot {overshoot:e} rad");
            }
            Direction::Decreasing if self.theta - DAILY_THETA_STEP <= TROPIC_THETA_MIN => {
                let overshoot = TROPIC_THETA_MIN - (self.theta - DAILY_THETA_STEP);
                self.theta = TROPIC_THETA_MIN + overshoot;
                self.direction = Direction::Increasing;
                trace!("reflected at θ min, overshoot {overshoot:e} rad");
            }
            direction => self.theta += f64::from(direction.sign()) * DAILY_THETA_STEP,
        }
        // φ is sampled at the same instant every day, so only the wrap applies
        self.phi = normalize_radians_0_to_tau(self.phi);
    }

    /// Half of the angular day length at polar angle `theta2`, in [0, π].
    ///
    /// π means the location never leaves daylight, 0 that it never enters it.
    ///
    /// # Errors
    /// Returns `ComputationError` if `theta2` is not a finite angle in [0, π]
    /// or the trigonometry produces a non-finite value.
    pub fn half_day_length(&self, theta2: f64) -> Result<f64> {
        let theta2 = check_polar_angle(theta2)?;
        let alpha = self.declination();
        let beta = PI - theta2;

        let half_day = if alpha >= beta || -alpha >= theta2 {
            PI
        } else if alpha >= theta2 || -alpha >= beta {
            0.0
        } else if self.theta <= FRAC_PI_2 && FRAC_PI_2 <= theta2 {
            day_length_helper(-alpha, beta)?
        } else if self.theta >= FRAC_PI_2 && FRAC_PI_2 >= theta2 {
            day_length_helper(alpha, theta2)?
        } else if self.theta <= FRAC_PI_2 && theta2 <= FRAC_PI_2 {
            PI - day_length_helper(-alpha, theta2)?
        } else {
            PI - day_length_helper(alpha, beta)?
        };

        if !half_day.is_finite() {
            return Err(Error::computation_error("half-day length is not finite"));
        }
        Ok(half_day)
    }

    /// Azimuthal angles of the day/night boundary at polar angle `theta2`.
    ///
    /// Returns `(φ + h, φ - h)` wrapped into [0, 2π): the location leaves daylight
    /// at the first angle and enters it at the second.
    ///
    /// # Errors
    /// Propagates errors from [`Self::half_day_length`].
    pub fn rise_and_set_angles(&self, theta2: f64) -> Result<(f64, f64)> {
        let half_day = self.half_day_length(theta2)?;
        Ok((
            normalize_radians_0_to_tau(self.phi + half_day),
            normalize_radians_0_to_tau(self.phi - half_day),
        ))
    }

    /// Checks whether the subsolar point and polar angle `theta2` lie strictly on
    /// the same side of the equator.
    #[must_use]
    pub fn check_hemisphere(&self, theta2: f64) -> bool {
        (self.theta < FRAC_PI_2 && theta2 < FRAC_PI_2)
            || (self.theta > FRAC_PI_2 && theta2 > FRAC_PI_2)
    }

    /// Checks whether `(rise, set)` minutes, given in encounter order, are in
    /// sunrise/sunset order.
    ///
    /// Days are longer than 12 hours when the location shares the subsolar point's
    /// hemisphere, so the gap from sunrise to sunset must exceed 720 minutes there
    /// and stay below it elsewhere. Ambiguous within a few minutes of a 12-hour day.
    #[must_use]
    pub fn rise_or_set(&self, theta2: f64, rise: u32, set: u32) -> bool {
        let gap = i64::from(set) - i64::from(rise);
        if self.check_hemisphere(theta2) {
            gap > 720
        } else {
            gap < 720
        }
    }

    /// Sunrise and sunset for a location, on the date this state was propagated to.
    ///
    /// # Errors
    /// Returns `ComputationError` for invalid polar angles and `ScanInconsistency`
    /// if the rotation scan misses a boundary.
    pub fn scan_rotation(&self, location: SphericalCoordinate) -> Result<SunriseResult> {
        scan::scan_rotation(self, location)
    }
}

/// Half-day length for a location and subsolar point on the same side of the equator.
///
/// `alpha` is the subsolar point's angle from the equator, `beta` the location's
/// angle from the pole on that side.
fn day_length_helper(alpha: f64, beta: f64) -> Result<f64> {
    let beta = if powi(cos(beta), 2) == 1.0 {
        beta - POLE_PERTURBATION
    } else {
        beta
    };

    let cos_beta = cos(beta);
    let denominator = sqrt(1.0 - cos_beta * cos_beta);
    if denominator <= 0.0 {
        return Err(Error::computation_error(
            "location is too close to a pole for the day-length formula",
        ));
    }

    let half_day = acos_clamped(tan(alpha) * cos_beta / denominator);
    if half_day.is_nan() {
        return Err(Error::computation_error("day-length formula produced NaN"));
    }
    Ok(half_day)
}

/// Calculate sunrise and sunset as minutes after midnight UTC.
///
/// # Arguments
/// * `year` - Year (2008 or later)
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31), on or after 2008-12-21
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Errors
/// Returns error for invalid coordinates, invalid or pre-epoch dates, and
/// computation failures.
///
/// # Example
/// ```
/// use subsolar::{simulation, SunriseResult};
///
/// let result = simulation::sunrise_sunset_utc(2009, 3, 20, 0.0, 0.0).unwrap();
/// if let SunriseResult::RegularDay { sunrise, sunset } = result {
///     println!("sunrise {sunrise}, sunset {sunset} (UTC)");
/// }
/// ```
pub fn sunrise_sunset_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
) -> Result<SunriseResult> {
    let location = GeographicCoordinate::new(latitude, longitude)?;
    let date = CalendarDate::new(year, month, day)?;
    sunrise_sunset_for(date, location)
}

/// Calculate sunrise and sunset from already validated inputs.
///
/// # Errors
/// Returns `InvalidDate` for dates before the epoch, `ComputationError` or
/// `ScanInconsistency` if the simulation fails.
pub fn sunrise_sunset_for(
    date: CalendarDate,
    location: GeographicCoordinate,
) -> Result<SunriseResult> {
    let state = SubsolarState::on_date(date)?;
    state.scan_rotation(location.to_spherical())
}

/// Calculate sunrise and sunset as UTC date-times on the given civil date.
///
/// # Errors
/// Returns error for invalid coordinates, pre-epoch dates, and computation failures.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use subsolar::{simulation, SunriseResult};
///
/// let date = NaiveDate::from_ymd_opt(2009, 6, 21).unwrap();
/// let result = simulation::sunrise_sunset(date, 80.0, 0.0).unwrap();
/// assert_eq!(result, SunriseResult::AllDay);
/// ```
#[cfg(feature = "chrono")]
pub fn sunrise_sunset<D: Datelike>(
    date: D,
    latitude: f64,
    longitude: f64,
) -> Result<SunriseResult<chrono::DateTime<chrono::Utc>>> {
    let location = GeographicCoordinate::new(latitude, longitude)?;
    let calendar_date = CalendarDate::from_date_like(&date)?;
    let day = chrono::NaiveDate::from_ymd_opt(date.year(), date.month(), date.day())
        .ok_or(Error::invalid_date("date is not representable"))?;

    sunrise_sunset_for(calendar_date, location)?.try_map(|minute: crate::types::MinuteOfDay| {
        let (hour, minute) = minute.hour_and_minute();
        day.and_hms_opt(hour, minute, 0)
            .map(|naive| naive.and_utc())
            .ok_or(Error::computation_error("minute of day out of range"))
    })
}
