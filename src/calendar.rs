//! Gregorian calendar arithmetic used by the orbit propagation.
//!
//! Dates are plain `(year, month, day)` triples. Day counts are computed from
//! month tables rather than Julian day numbers, which is all the once-per-day
//! propagation needs.

use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::Datelike;
use core::fmt;
use core::str::FromStr;

/// Earliest year a [`CalendarDate`] accepts.
pub const MIN_YEAR: i32 = 1;

/// Latest year a [`CalendarDate`] accepts. Day counts across the whole range fit in a `u32`.
pub const MAX_YEAR: i32 = 9999;

/// Number of days in each month of a common year.
const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// December solstice 2008, the date at which the subsolar point starts its simulated orbit.
pub const EPOCH: CalendarDate = CalendarDate {
    year: 2008,
    month: 12,
    day: 21,
};

/// A validated Gregorian calendar date in years 1 through 9999.
///
/// The derived ordering compares year, then month, then day, which is
/// chronological order.
///
/// # Example
/// ```
/// # use subsolar::calendar::CalendarDate;
/// let date = CalendarDate::new(2012, 2, 29).unwrap();
/// assert_eq!(date.ordinal(), 60);
/// assert!(CalendarDate::new(2013, 2, 29).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a new date after checking year, month and day ranges.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the year is outside [`MIN_YEAR`]..=[`MAX_YEAR`],
    /// the month is outside 1-12 or the day does not exist in that month.
    pub const fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if year < MIN_YEAR || year > MAX_YEAR {
            return Err(Error::invalid_date("year must be between 1 and 9999"));
        }
        if month < 1 || month > 12 {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Creates a date from any chrono date-like value.
    ///
    /// # Errors
    /// Returns `InvalidDate` if chrono reports a month or day this calendar rejects.
    #[cfg(feature = "chrono")]
    pub fn from_date_like<D: Datelike>(date: &D) -> Result<Self> {
        Self::new(date.year(), date.month(), date.day())
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Day of the year, 1 for January 1st.
    #[must_use]
    pub const fn ordinal(&self) -> u32 {
        days_in_months_before(self.month, is_leap_year(self.year)) + self.day
    }

    /// Days remaining in the year after this date.
    const fn days_left_in_year(&self) -> u32 {
        days_in_year(self.year) - self.ordinal()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    /// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::invalid_date("expected a date formatted as YYYY-MM-DD"));
        };

        let year = year
            .parse::<i32>()
            .map_err(|_| Error::invalid_date("year is not a number"))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| Error::invalid_date("month is not a number"))?;
        let day = day
            .parse::<u32>()
            .map_err(|_| Error::invalid_date("day is not a number"))?;

        Self::new(year, month, day)
    }
}

/// Checks whether a year is a Gregorian leap year.
///
/// # Example
/// ```
/// # use subsolar::calendar::is_leap_year;
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// ```
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given year.
#[must_use]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Number of days in the given month, 0 for months outside 1-12.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => MONTH_LENGTHS[(month - 1) as usize],
        _ => 0,
    }
}

/// Total number of days in the months preceding `month`.
///
/// `days_in_months_before(1, _)` is 0; February adds 29 days when `is_leap` is set.
#[must_use]
pub const fn days_in_months_before(month: u32, is_leap: bool) -> u32 {
    let mut total = 0;
    let mut m = 1;
    while m < month && m <= 12 {
        total += MONTH_LENGTHS[(m - 1) as usize];
        if m == 2 && is_leap {
            total += 1;
        }
        m += 1;
    }
    total
}

/// Returns the two dates in chronological order.
#[must_use]
pub fn chronological_order(a: CalendarDate, b: CalendarDate) -> (CalendarDate, CalendarDate) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Number of days between two dates, in either order.
///
/// The count follows the proleptic Gregorian calendar exactly, so every leap
/// day between the two dates is included.
///
/// # Example
/// ```
/// # use subsolar::calendar::{day_count, CalendarDate, EPOCH};
/// let new_year = CalendarDate::new(2009, 1, 1).unwrap();
/// assert_eq!(day_count(EPOCH, new_year), 11);
/// assert_eq!(day_count(new_year, EPOCH), 11);
/// ```
#[must_use]
pub fn day_count(a: CalendarDate, b: CalendarDate) -> u32 {
    let (earlier, later) = chronological_order(a, b);

    if earlier.year == later.year {
        return later.ordinal() - earlier.ordinal();
    }

    let full_years: u32 = (earlier.year + 1..later.year).map(days_in_year).sum();
    earlier.days_left_in_year() + full_years + later.ordinal()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_leap_years() {
        for year in [2008, 2000, 2020, 2400] {
            assert!(is_leap_year(year), "{year} should be a leap year");
        }
        for year in [1900, 2001, 2023, 2100] {
            assert!(!is_leap_year(year), "{year} should not be a leap year");
        }
    }

    #[test]
    fn test_days_in_months_before() {
        assert_eq!(days_in_months_before(1, false), 0);
        assert_eq!(days_in_months_before(2, true), 31);
        assert_eq!(days_in_months_before(3, false), 59);
        assert_eq!(days_in_months_before(3, true), 60);
        assert_eq!(days_in_months_before(12, false), 334);
        assert_eq!(days_in_months_before(12, true), 335);
    }

    #[test]
    fn test_date_validation() {
        assert!(CalendarDate::new(2012, 2, 29).is_ok());
        assert!(CalendarDate::new(2011, 2, 29).is_err());
        assert!(CalendarDate::new(2011, 0, 1).is_err());
        assert!(CalendarDate::new(2011, 13, 1).is_err());
        assert!(CalendarDate::new(2011, 4, 31).is_err());
        assert!(CalendarDate::new(2011, 4, 0).is_err());
    }

    #[test]
    fn test_year_range() {
        assert!(CalendarDate::new(MIN_YEAR, 1, 1).is_ok());
        assert!(CalendarDate::new(MAX_YEAR, 12, 31).is_ok());
        assert!(CalendarDate::new(0, 1, 1).is_err());
        assert!(CalendarDate::new(-44, 3, 15).is_err());
        assert!(CalendarDate::new(10_000, 1, 1).is_err());
        assert!(CalendarDate::new(12_000_000, 1, 1).is_err());
        assert!("12000000-01-01".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_day_count_spans_whole_year_range() {
        // 9999 years of 365.2425 days
        let first = date(MIN_YEAR, 1, 1);
        let last = date(MAX_YEAR, 12, 31);
        assert_eq!(day_count(first, last), 3_652_058);
        assert_eq!(day_count(last, first), 3_652_058);
        assert_eq!(day_count(EPOCH, last), 2_918_662);
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(date(2009, 1, 1).ordinal(), 1);
        assert_eq!(date(2009, 12, 31).ordinal(), 365);
        assert_eq!(date(2012, 12, 31).ordinal(), 366);
        assert_eq!(EPOCH.ordinal(), 356);
    }

    #[test]
    fn test_day_count_same_year() {
        assert_eq!(day_count(date(2012, 2, 1), date(2012, 3, 1)), 29);
        assert_eq!(day_count(date(2013, 2, 1), date(2013, 3, 1)), 28);
        assert_eq!(day_count(date(2010, 6, 21), date(2010, 6, 21)), 0);
    }

    #[test]
    fn test_day_count_across_years() {
        assert_eq!(day_count(EPOCH, date(2009, 6, 21)), 182);
        assert_eq!(day_count(EPOCH, date(2009, 12, 21)), 365);
        assert_eq!(day_count(EPOCH, date(2012, 3, 1)), 1166);
        assert_eq!(day_count(date(2011, 12, 31), date(2012, 1, 1)), 1);
    }

    #[test]
    fn test_chronological_order() {
        let a = date(2010, 5, 1);
        let b = date(2009, 7, 30);
        assert_eq!(chronological_order(a, b), (b, a));
        assert_eq!(chronological_order(b, a), (b, a));
    }

    #[test]
    fn test_parse_and_display() {
        let parsed: CalendarDate = "2009-03-20".parse().unwrap();
        assert_eq!(parsed, date(2009, 3, 20));
        #[cfg(feature = "std")]
        assert_eq!(parsed.to_string(), "2009-03-20");

        assert!("2009-02-30".parse::<CalendarDate>().is_err());
        assert!("2009/03/20".parse::<CalendarDate>().is_err());
        assert!("2009-xx-20".parse::<CalendarDate>().is_err());
    }
}
