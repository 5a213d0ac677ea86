//! Result and value types for sunrise/sunset calculations.

use crate::{Error, Result};
use core::fmt;

/// Number of minutes in a UTC day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Minutes since midnight UTC on the calculation date (0 to 1439).
///
/// # Example
/// ```
/// # use subsolar::types::MinuteOfDay;
/// let sunrise = MinuteOfDay::new(359).unwrap();
/// assert_eq!(sunrise.hour_and_minute(), (5, 59));
/// assert_eq!(sunrise.to_string(), "05:59");
/// assert!(MinuteOfDay::new(1440).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteOfDay(u32);

impl MinuteOfDay {
    /// Creates a new minute-of-day value.
    ///
    /// # Errors
    /// Returns `ComputationError` if `minutes` is 1440 or more.
    pub const fn new(minutes: u32) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(Error::computation_error(
                "minute of day must be between 0 and 1439",
            ));
        }
        Ok(Self(minutes))
    }

    /// Gets the raw minutes since midnight UTC.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.0
    }

    /// Splits into whole hours and remaining minutes.
    #[must_use]
    pub const fn hour_and_minute(&self) -> (u32, u32) {
        (self.0 / 60, self.0 % 60)
    }

    /// Gets the time as fractional hours since midnight UTC.
    #[must_use]
    pub fn hours(&self) -> f64 {
        f64::from(self.0) / 60.0
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, minute) = self.hour_and_minute();
        write!(f, "{hour:02}:{minute:02}")
    }
}

/// Result of a sunrise/sunset calculation for one day.
///
/// The time payload defaults to [`MinuteOfDay`]; the chrono helpers return
/// `SunriseResult<chrono::DateTime<chrono::Utc>>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunriseResult<T = MinuteOfDay> {
    /// Regular day with distinct sunrise and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of sunset
        sunset: T,
    },
    /// Midnight sun - the location stays in daylight all day
    AllDay,
    /// Polar night - the location stays in darkness all day
    AllNight,
}

impl<T> SunriseResult<T> {
    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents midnight sun (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay)
    }

    /// Checks if this represents polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight)
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }

    /// Converts the time payload, keeping polar verdicts as they are.
    ///
    /// # Errors
    /// Propagates the first error returned by `f`.
    pub fn try_map<U, F>(self, mut f: F) -> Result<SunriseResult<U>>
    where
        F: FnMut(T) -> Result<U>,
    {
        Ok(match self {
            Self::RegularDay { sunrise, sunset } => SunriseResult::RegularDay {
                sunrise: f(sunrise)?,
                sunset: f(sunset)?,
            },
            Self::AllDay => SunriseResult::AllDay,
            Self::AllNight => SunriseResult::AllNight,
        })
    }
}

impl<T: fmt::Display> fmt::Display for SunriseResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegularDay { sunrise, sunset } => {
                write!(f, "sunrise {sunrise}, sunset {sunset} UTC")
            }
            Self::AllDay => f.write_str("Midnight sun"),
            Self::AllNight => f.write_str("Polar night"),
        }
    }
}
