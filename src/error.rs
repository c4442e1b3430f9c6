//! Error types for the visibility library.

use crate::math::PI;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while building coordinates or computing visibility windows.
///
/// An object that never reaches the requested altitude is not an error; it is reported
/// as [`VisibilityIntervals::Absent`](crate::VisibilityIntervals::Absent).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be finite).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid declination value (must be between -90 and +90 degrees).
    InvalidDeclination {
        /// The invalid declination value provided.
        value: f64,
    },
    /// Invalid right ascension value (must be finite).
    InvalidRightAscension {
        /// The invalid right ascension value provided.
        value: f64,
    },
    /// Invalid minimum altitude for visibility calculations (must be a number).
    InvalidAltitude {
        /// The invalid altitude value provided.
        value: f64,
    },
    /// Invalid sweep step (must be finite and in (0, π] radians).
    InvalidStep {
        /// The invalid step value provided.
        value: f64,
    },
    /// Invalid date/time or date/time arithmetic overflow.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
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
                write!(f, "invalid longitude {value}° (must be finite)")
            }
            Self::InvalidDeclination { value } => {
                write!(
                    f,
                    "invalid declination {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidRightAscension { value } => {
                write!(f, "invalid right ascension {value}° (must be finite)")
            }
            Self::InvalidAltitude { value } => {
                write!(
                    f,
                    "invalid altitude {value}° (must be a number)"
                )
            }
            Self::InvalidStep { value } => {
                write!(f, "invalid sweep step {value} rad (must be in (0, π])")
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
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

    /// Creates an invalid declination error.
    #[must_use]
    pub const fn invalid_declination(value: f64) -> Self {
        Self::InvalidDeclination { value }
    }

    /// Creates an invalid right ascension error.
    #[must_use]
    pub const fn invalid_right_ascension(value: f64) -> Self {
        Self::InvalidRightAscension { value }
    }

    /// Creates an invalid altitude error.
    #[must_use]
    pub const fn invalid_altitude(value: f64) -> Self {
        Self::InvalidAltitude { value }
    }

    /// Creates an invalid sweep step error.
    #[must_use]
    pub const fn invalid_step(value: f64) -> Self {
        Self::InvalidStep { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees or not a number.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is finite. Any finite value is accepted.
///
/// # Errors
/// Returns `InvalidLongitude` for NaN or infinite longitudes.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !longitude.is_finite() {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates declination is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidDeclination` if declination is outside -90 to +90 degrees or not a number.
pub fn check_declination(declination: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&declination) {
        return Err(Error::invalid_declination(declination));
    }
    Ok(())
}

/// Validates right ascension is finite.
///
/// # Errors
/// Returns `InvalidRightAscension` for NaN or infinite values.
pub fn check_right_ascension(right_ascension: f64) -> Result<()> {
    if !right_ascension.is_finite() {
        return Err(Error::invalid_right_ascension(right_ascension));
    }
    Ok(())
}

/// Validates a minimum altitude threshold.
///
/// Thresholds outside -90 to +90 degrees are accepted: above the zenith nothing is ever
/// visible, below the nadir everything always is.
///
/// # Errors
/// Returns `InvalidAltitude` if the altitude is NaN.
pub fn check_altitude(altitude: f64) -> Result<()> {
    if altitude.is_nan() {
        return Err(Error::invalid_altitude(altitude));
    }
    Ok(())
}

/// Validates a sweep step is finite, positive and at most half a turn.
///
/// # Errors
/// Returns `InvalidStep` otherwise.
pub fn check_step(step: f64) -> Result<()> {
    if !step.is_finite() || step <= 0.0 || step > PI {
        return Err(Error::invalid_step(step));
    }
    Ok(())
}
