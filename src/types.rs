//! Core data types for visibility calculations.

use crate::error::{check_declination, check_latitude, check_longitude, check_right_ascension};
use crate::math::{PI, TAU};
use crate::Result;
use alloc::string::String;
use alloc::vec::Vec;

/// Observer location on Earth in degrees.
///
/// # Example
/// ```
/// # use sidereal_visibility::GeographicCoordinate;
/// let location = GeographicCoordinate::new(80.5, 2.53).unwrap();
/// assert_eq!(location.latitude(), 80.5);
/// assert_eq!(location.longitude(), 2.53);
///
/// assert!(GeographicCoordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeographicCoordinate"))]
pub struct GeographicCoordinate {
    /// Latitude in degrees (-90 to +90)
    latitude: f64,
    /// Longitude in degrees, east positive; not normalized
    longitude: f64,
}

impl GeographicCoordinate {
    /// Creates a geographic coordinate.
    ///
    /// Longitude may be given in either the [-180, 180] or [0, 360) convention;
    /// it is only required to be finite.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
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
}

/// Position of an object on the celestial sphere in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawEquatorialCoordinate"))]
pub struct EquatorialCoordinate {
    /// Right ascension in degrees
    right_ascension: f64,
    /// Declination in degrees (-90 to +90)
    declination: f64,
}

impl EquatorialCoordinate {
    /// Creates an equatorial coordinate.
    ///
    /// # Errors
    /// Returns `InvalidRightAscension` or `InvalidDeclination` for out-of-range values.
    ///
    /// # Example
    /// ```
    /// # use sidereal_visibility::EquatorialCoordinate;
    /// let polaris = EquatorialCoordinate::new(37.95, 89.26).unwrap();
    /// assert_eq!(polaris.declination(), 89.26);
    /// assert!(EquatorialCoordinate::new(10.0, -90.5).is_err());
    /// ```
    pub fn new(right_ascension: f64, declination: f64) -> Result<Self> {
        check_right_ascension(right_ascension)?;
        check_declination(declination)?;
        Ok(Self {
            right_ascension,
            declination,
        })
    }

    /// Gets the right ascension in degrees.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Gets the declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }
}

/// Unchecked serialized form; deserialization goes through [`GeographicCoordinate::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeographicCoordinate {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeographicCoordinate> for GeographicCoordinate {
    type Error = crate::Error;

    fn try_from(raw: RawGeographicCoordinate) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

/// Unchecked serialized form; deserialization goes through [`EquatorialCoordinate::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawEquatorialCoordinate {
    right_ascension: f64,
    declination: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawEquatorialCoordinate> for EquatorialCoordinate {
    type Error = crate::Error;

    fn try_from(raw: RawEquatorialCoordinate) -> Result<Self> {
        Self::new(raw.right_ascension, raw.declination)
    }
}

/// A named observing site. The name is for display only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observatory {
    name: String,
    location: GeographicCoordinate,
}

impl Observatory {
    /// Creates an observatory at the given location.
    pub fn new(name: impl Into<String>, location: GeographicCoordinate) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    /// Gets the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the location.
    #[must_use]
    pub const fn location(&self) -> GeographicCoordinate {
        self.location
    }
}

impl From<GeographicCoordinate> for Observatory {
    fn from(location: GeographicCoordinate) -> Self {
        Self::new(String::new(), location)
    }
}

/// A named celestial object. The name is for display only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CelestialObject {
    name: String,
    position: EquatorialCoordinate,
}

impl CelestialObject {
    /// Creates a celestial object at the given position.
    pub fn new(name: impl Into<String>, position: EquatorialCoordinate) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    /// Gets the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the equatorial position.
    #[must_use]
    pub const fn position(&self) -> EquatorialCoordinate {
        self.position
    }
}

impl From<EquatorialCoordinate> for CelestialObject {
    fn from(position: EquatorialCoordinate) -> Self {
        Self::new(String::new(), position)
    }
}

/// A single visibility window `[start, end)` in hour-angle radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Creates an interval from its boundaries.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Gets the opening boundary in radians.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Gets the closing boundary in radians.
    #[must_use]
    pub const fn end(&self) -> f64 {
        self.end
    }

    /// Gets the angular length of the window in radians.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Checks whether `hour_angle` lies in `[start, end)`.
    ///
    /// A window ending past `π` (merged across the seam) also covers
    /// `hour_angle + 2π`.
    #[must_use]
    pub fn contains(&self, hour_angle: f64) -> bool {
        let inside = |h: f64| self.start <= h && h < self.end;
        inside(hour_angle) || (self.end > PI && inside(hour_angle + TAU))
    }
}

/// Ordered hour-angle boundaries of the visibility windows found for one sidereal rotation.
///
/// Boundaries are read pairwise as `[start, end)` windows. They are expressed in
/// sidereal-time radians relative to a longitude-independent reference, not in civil time.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalSet {
    boundaries: Vec<f64>,
    closed_at_scan_limit: bool,
}

impl IntervalSet {
    pub(crate) const fn new(boundaries: Vec<f64>, closed_at_scan_limit: bool) -> Self {
        Self {
            boundaries,
            closed_at_scan_limit,
        }
    }

    /// Gets the flat boundary sequence.
    #[must_use]
    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// Consumes the set, returning the flat boundary sequence.
    #[must_use]
    pub fn into_boundaries(self) -> Vec<f64> {
        self.boundaries
    }

    /// Number of boundaries (twice the number of windows).
    #[must_use]
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// Checks if no boundary was found.
    ///
    /// An empty set means the object can reach the altitude but no sample caught it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Checks whether the last window was still open at `+π` and closed there artificially.
    #[must_use]
    pub const fn closed_at_scan_limit(&self) -> bool {
        self.closed_at_scan_limit
    }

    /// Iterates over the windows.
    pub fn intervals(&self) -> impl Iterator<Item = Interval> + '_ {
        self.boundaries
            .chunks_exact(2)
            .map(|pair| Interval::new(pair[0], pair[1]))
    }

    /// Sum of window lengths in radians.
    #[must_use]
    pub fn total_coverage(&self) -> f64 {
        self.intervals().map(|interval| interval.length()).sum()
    }

    /// Checks whether `hour_angle` falls inside any window.
    #[must_use]
    pub fn contains(&self, hour_angle: f64) -> bool {
        self.intervals().any(|interval| interval.contains(hour_angle))
    }
}

/// Result of a visibility query.
///
/// `Absent` (the object never reaches the minimum altitude) is kept distinct from an
/// empty [`IntervalSet`] so the two cannot be confused.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisibilityIntervals {
    /// The object never reaches the minimum altitude; no sweep was performed.
    Absent,
    /// Windows found by the sweep (possibly empty).
    Intervals(IntervalSet),
}

impl VisibilityIntervals {
    /// Checks if the object is never visible.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Gets the interval set, if any.
    #[must_use]
    pub const fn interval_set(&self) -> Option<&IntervalSet> {
        match self {
            Self::Absent => None,
            Self::Intervals(set) => Some(set),
        }
    }

    /// Gets the boundary sequence, if any.
    #[must_use]
    pub fn boundaries(&self) -> Option<&[f64]> {
        self.interval_set().map(IntervalSet::boundaries)
    }

    /// Converts into the interval set, if any.
    #[must_use]
    pub fn into_interval_set(self) -> Option<IntervalSet> {
        match self {
            Self::Absent => None,
            Self::Intervals(set) => Some(set),
        }
    }
}
