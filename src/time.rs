//! Calendar helpers used alongside visibility windows.
//!
//! The day count uses a simplified Julian calendar rule (one leap day every four
//! years, no century correction). Results therefore drift from the Gregorian calendar
//! outside 1901-2099, which is accepted for planning purposes.

use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Reference year of the J2000 epoch.
const J2000_YEAR: i32 = 2000;

/// Days in a common year.
const DAYS_PER_YEAR: i32 = 365;

/// Years per leap day under the Julian rule.
const YEARS_PER_LEAP_DAY: i32 = 4;

/// Signed day count since J2000 for a calendar year and zero-based day of year.
///
/// `days = years / 4 + years × 365 ± day_of_year` with `years = year − 2000` and
/// truncating division. The day of year is added for years from 2000 on and
/// subtracted for earlier years.
///
/// # Errors
/// Returns `InvalidDateTime` if `day_of_year` is not in 0..=365.
///
/// # Example
/// ```
/// # use sidereal_visibility::time::days_since_j2000;
/// assert_eq!(days_since_j2000(2000, 0).unwrap(), 0);
/// assert_eq!(days_since_j2000(2004, 10).unwrap(), 4 * 365 + 1 + 10);
/// ```
pub fn days_since_j2000(year: i32, day_of_year: u32) -> Result<i32> {
    let day_of_year = i32::try_from(day_of_year)
        .ok()
        .filter(|day| *day <= 365)
        .ok_or(Error::invalid_datetime(
            "day of year must be between 0 and 365",
        ))?;

    let years = year - J2000_YEAR;
    let mut days = years / YEARS_PER_LEAP_DAY + years * DAYS_PER_YEAR;
    if years >= 0 {
        days += day_of_year;
    } else {
        days -= day_of_year;
    }
    Ok(days)
}

/// Signed day count since J2000 for a timezone-aware date/time (evaluated in UTC).
///
/// # Errors
/// Propagates the day-of-year validation of [`days_since_j2000`].
#[cfg(feature = "chrono")]
pub fn days_since_j2000_from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<i32> {
    let utc = datetime.with_timezone(&Utc);
    days_since_j2000(utc.year(), utc.ordinal0())
}

/// Adds `seconds` (possibly negative) to `datetime`, rolling over minutes, hours,
/// days, months and years as needed.
///
/// # Errors
/// Returns `InvalidDateTime` if the result is outside the range chrono can represent.
///
/// # Example
/// ```
/// # use sidereal_visibility::time::add_seconds;
/// use chrono::{DateTime, Utc};
///
/// let new_year = "1999-12-31T23:59:30Z".parse::<DateTime<Utc>>().unwrap();
/// let later = add_seconds(45, new_year).unwrap();
/// assert_eq!(later.to_rfc3339(), "2000-01-01T00:00:15+00:00");
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn add_seconds<Tz: TimeZone>(seconds: i64, datetime: DateTime<Tz>) -> Result<DateTime<Tz>> {
    let delta = chrono::TimeDelta::try_seconds(seconds)
        .ok_or(Error::invalid_datetime("seconds offset out of range"))?;
    datetime
        .checked_add_signed(delta)
        .ok_or(Error::invalid_datetime("date/time overflow"))
}

/// A non-empty time range `[start, end)`.
///
/// Construction follows the same convention as never-visible objects: an invalid
/// range (end not after start) yields `None` rather than an error.
#[cfg(feature = "chrono")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange<Tz: TimeZone> {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
}

#[cfg(feature = "chrono")]
impl<Tz: TimeZone> TimeRange<Tz> {
    /// Creates a range, or `None` if `end <= start`.
    ///
    /// # Example
    /// ```
    /// # use sidereal_visibility::time::TimeRange;
    /// use chrono::{DateTime, Utc};
    ///
    /// let start = "2024-03-01T18:00:00Z".parse::<DateTime<Utc>>().unwrap();
    /// let end = "2024-03-02T06:00:00Z".parse::<DateTime<Utc>>().unwrap();
    ///
    /// assert!(TimeRange::new(start, end).is_some());
    /// assert!(TimeRange::new(end, start).is_none());
    /// assert!(TimeRange::new(start, start).is_none());
    /// ```
    #[must_use]
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Option<Self> {
        if end <= start {
            return None;
        }
        Some(Self { start, end })
    }

    /// Gets the start of the range.
    #[must_use]
    pub const fn start(&self) -> &DateTime<Tz> {
        &self.start
    }

    /// Gets the (exclusive) end of the range.
    #[must_use]
    pub const fn end(&self) -> &DateTime<Tz> {
        &self.end
    }

    /// Length of the range in whole seconds.
    #[must_use]
    pub fn duration_seconds(&self) -> i64 {
        self.end
            .clone()
            .signed_duration_since(self.start.clone())
            .num_seconds()
    }

    /// Checks whether `instant` lies in `[start, end)`.
    #[must_use]
    pub fn contains<Tz2: TimeZone>(&self, instant: &DateTime<Tz2>) -> bool {
        *instant >= self.start && *instant < self.end
    }
}
