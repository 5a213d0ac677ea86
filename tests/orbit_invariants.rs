//! Invariants of the reflected subsolar orbit.

use std::f64::consts::{FRAC_PI_2, PI};
use subsolar::calendar::{CalendarDate, EPOCH};
use subsolar::simulation::{
    DAILY_THETA_STEP, Direction, EPOCH_THETA, SubsolarState, TROPIC_THETA_MAX, TROPIC_THETA_MIN,
};

const EPSILON: f64 = 1e-9;

#[test]
fn test_theta_stays_between_tropics() {
    for days in 0..=4000 {
        let state = SubsolarState::after_days(days);
        assert!(
            state.theta() >= TROPIC_THETA_MIN && state.theta() <= TROPIC_THETA_MAX,
            "day {days}: θ = {}",
            state.theta()
        );
        assert_eq!(state.phi(), 0.0, "day {days}");
    }
}

#[test]
fn test_epoch_is_december_solstice() {
    let state = SubsolarState::on_date(EPOCH).unwrap();
    assert_eq!(state.theta(), EPOCH_THETA);
    // Day 0 sits exactly on the lower tropic, not a rounding step outside it
    assert_eq!(state.theta(), TROPIC_THETA_MIN);
    assert!((state.declination() + 23.44_f64.to_radians()).abs() < EPSILON);
    assert_eq!(state.direction(), Direction::Increasing);
}

#[test]
fn test_tropics_are_symmetric_about_equator() {
    assert!((TROPIC_THETA_MIN - 66.56_f64.to_radians()).abs() < EPSILON);
    assert!((TROPIC_THETA_MAX - 113.44_f64.to_radians()).abs() < EPSILON);
    assert!(((FRAC_PI_2 - TROPIC_THETA_MIN) - (TROPIC_THETA_MAX - FRAC_PI_2)).abs() < 1e-15);
}

#[test]
fn test_solstices_and_equinoxes() {
    let june = SubsolarState::on_date(CalendarDate::new(2009, 6, 21).unwrap()).unwrap();
    assert!(june.theta() > FRAC_PI_2);
    assert!((june.declination() - 23.44_f64.to_radians()).abs() < 0.01);

    let march = SubsolarState::on_date(CalendarDate::new(2009, 3, 21).unwrap()).unwrap();
    assert!(march.declination().abs() < 0.01);
    assert_eq!(march.direction(), Direction::Increasing);

    let september = SubsolarState::on_date(CalendarDate::new(2009, 9, 21).unwrap()).unwrap();
    assert!(september.declination().abs() < 0.01);
    assert_eq!(september.direction(), Direction::Decreasing);
}

#[test]
fn test_direction_changes_every_half_year() {
    let mut previous = SubsolarState::after_days(0);
    let mut reflections = Vec::new();

    for days in 1..=1470 {
        let state = SubsolarState::after_days(days);
        if state.direction() != previous.direction() {
            reflections.push(days);
        }
        previous = state;
    }

    assert_eq!(reflections.len(), 8, "{reflections:?}");
    for pair in reflections.windows(2) {
        let gap = pair[1] - pair[0];
        assert!((182..=183).contains(&gap), "{reflections:?}");
    }
}

#[test]
fn test_daily_motion_is_one_step() {
    for days in 0..400 {
        let today = SubsolarState::after_days(days);
        let tomorrow = SubsolarState::after_days(days + 1);
        let moved = (tomorrow.theta() - today.theta()).abs();
        assert!(moved <= DAILY_THETA_STEP + EPSILON, "day {days}");
    }
}

#[test]
fn test_roughly_periodic_over_one_year() {
    // One 365-day year is 0.24 days short of the model's period
    let start = SubsolarState::after_days(100);
    let year_later = SubsolarState::after_days(100 + 365);
    assert!((start.theta() - year_later.theta()).abs() < 2.0 * DAILY_THETA_STEP);
    assert!(year_later.theta() < PI);
}
