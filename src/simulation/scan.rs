//! Rotation scan: from boundary angles to clock minutes.
//!
//! Starting at 00:00 UTC the location's azimuth is advanced one minute at a
//! time. The minute in which it sweeps past a day/night boundary angle is the
//! minute of sunrise or sunset. The two minutes are ordered by day length:
//! longer than 12 hours when the location shares the subsolar point's
//! hemisphere, shorter otherwise.

use log::{debug, trace};

use super::SubsolarState;
use crate::coordinate::SphericalCoordinate;
use crate::error::check_polar_angle;
use crate::math::{PI, TAU};
use crate::types::{MINUTES_PER_DAY, MinuteOfDay, SunriseResult};
use crate::{Error, Result};

/// Earth rotation per minute of the scan, in radians (≈ 2π / 1440).
pub const ROTATION_PER_MINUTE: f64 = 0.00437469;

/// Checks whether `angle` lies in the arc swept from `previous` to `current`.
///
/// `current` is not yet wrapped, so an arc that passes 2π continues at 0. The
/// arc is half-open, `(previous, current]`, so consecutive minutes never skip an
/// angle that falls exactly on a sample.
fn swept(angle: f64, previous: f64, current: f64) -> bool {
    (previous < angle && angle <= current) || angle + TAU <= current
}

/// Scans one day of rotation for the location and classifies the result.
///
/// # Errors
/// Returns `ComputationError` for an invalid polar angle and
/// `ScanInconsistency` if a boundary is never crossed.
pub fn scan_rotation(state: &SubsolarState, location: SphericalCoordinate) -> Result<SunriseResult> {
    let theta2 = check_polar_angle(location.theta())?;
    let (dusk_angle, dawn_angle) = state.rise_and_set_angles(theta2)?;

    let mut phi = location.phi() - PI;
    if phi < 0.0 {
        phi += TAU;
    }

    let mut dawn = None;
    let mut dusk = None;

    // The sweep is slightly longer than one revolution; keep first crossings only
    for minute in 0..MINUTES_PER_DAY {
        let previous = phi;
        let current = previous + ROTATION_PER_MINUTE;

        if dawn.is_none() && swept(dawn_angle, previous, current) {
            trace!("entered daylight in minute {minute}");
            dawn = Some(minute);
        }
        if dusk.is_none() && swept(dusk_angle, previous, current) {
            trace!("left daylight in minute {minute}");
            dusk = Some(minute);
        }

        phi = if current >= TAU { current - TAU } else { current };
    }

    classify(state, theta2, dawn, dusk)
}

/// Turns the recorded boundary minutes into a [`SunriseResult`].
fn classify(
    state: &SubsolarState,
    theta2: f64,
    dawn: Option<u32>,
    dusk: Option<u32>,
) -> Result<SunriseResult> {
    let (Some(dawn), Some(dusk)) = (dawn, dusk) else {
        let crossings = usize::from(dawn.is_some()) + usize::from(dusk.is_some());
        return Err(Error::scan_inconsistency(crossings));
    };

    if dawn == dusk {
        // Zero-length day or night
        return Ok(if state.check_hemisphere(theta2) {
            SunriseResult::AllDay
        } else {
            SunriseResult::AllNight
        });
    }

    // Order the two encountered minutes by day length
    let (first, second) = if dawn < dusk { (dawn, dusk) } else { (dusk, dawn) };
    let (sunrise, sunset) = if state.rise_or_set(theta2, first, second) {
        (first, second)
    } else {
        (second, first)
    };
    if (sunrise, sunset) != (dawn, dusk) {
        debug!(
            "boundary crossings give ({dawn}, {dusk}), day-length ordering gives \
             ({sunrise}, {sunset}); using the day-length ordering"
        );
    }

    Ok(SunriseResult::RegularDay {
        sunrise: MinuteOfDay::new(sunrise)?,
        sunset: MinuteOfDay::new(sunset)?,
    })
}
