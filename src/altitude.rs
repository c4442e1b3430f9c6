//! Altitude of an object as a function of hour angle, and the visibility gate.
//!
//! The horizontal-coordinate altitude formula
//!
//! ```text
//! alt = asin(sin(φ)·sin(δ) + cos(φ)·cos(δ)·cos(H))
//! ```
//!
//! is split into two terms that depend only on latitude φ and declination δ, computed
//! once per query, and the hour-angle dependent part evaluated per sample.
//!
//! Out-of-range latitude and declination are rejected when the coordinates are built.
//! The `asin` argument is clamped to [-1, 1] so rounding (for example
//! `sin²φ + cos²φ` slightly above one when φ = δ) never produces NaN.

use crate::math::{asin, clamp_unit, cos, deg_to_rad, sin};
use crate::{CelestialObject, EquatorialCoordinate, GeographicCoordinate, Observatory};

/// Latitude/declination dependent terms of the altitude formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeTerms {
    sin_term: f64,
    cos_term: f64,
}

impl AltitudeTerms {
    /// Precomputes `sin(φ)·sin(δ)` and `cos(φ)·cos(δ)` from radians.
    #[must_use]
    pub fn new(latitude_rad: f64, declination_rad: f64) -> Self {
        let sin_term = sin(latitude_rad) * sin(declination_rad);
        let cos_term = cos(latitude_rad) * cos(declination_rad);
        debug_assert!(
            cos_term.is_nan() || cos_term >= 0.0,
            "cos term must be non-negative for latitude/declination within ±90°"
        );
        Self { sin_term, cos_term }
    }

    /// Computes the terms for an observer location and an object position.
    #[must_use]
    pub fn from_coordinates(location: GeographicCoordinate, position: EquatorialCoordinate) -> Self {
        Self::new(
            deg_to_rad(location.latitude()),
            deg_to_rad(position.declination()),
        )
    }

    /// Gets `sin(φ)·sin(δ)`.
    #[must_use]
    pub const fn sin_term(&self) -> f64 {
        self.sin_term
    }

    /// Gets `cos(φ)·cos(δ)`.
    #[must_use]
    pub const fn cos_term(&self) -> f64 {
        self.cos_term
    }

    /// Altitude in radians at the given hour angle.
    #[must_use]
    pub fn altitude_at(&self, hour_angle_rad: f64) -> f64 {
        altitude_rad(self.sin_term, self.cos_term, hour_angle_rad)
    }

    /// Lowest altitude over a full rotation, in radians (reached at H = π).
    #[must_use]
    pub fn min_altitude(&self) -> f64 {
        asin(clamp_unit(self.sin_term - self.cos_term))
    }

    /// Highest altitude over a full rotation, in radians (reached at H = 0).
    #[must_use]
    pub fn max_altitude(&self) -> f64 {
        asin(clamp_unit(self.sin_term + self.cos_term))
    }

    /// Checks whether the altitude ever reaches `min_altitude_rad`.
    ///
    /// Since `cos(H)` spans [-1, 1] and the cos term is non-negative, the three samples
    /// `asin(s)`, `asin(s + c)` and `asin(s - c)` bracket the extremes exactly.
    #[must_use]
    pub fn is_ever_above(&self, min_altitude_rad: f64) -> bool {
        asin(clamp_unit(self.sin_term)) >= min_altitude_rad
            || self.max_altitude() >= min_altitude_rad
            || self.min_altitude() >= min_altitude_rad
    }
}

/// Altitude in radians: `asin(sin_term + cos_term·cos(hour_angle_rad))`.
///
/// The argument is clamped to [-1, 1]; NaN inputs propagate.
///
/// # Example
/// ```
/// # use sidereal_visibility::altitude_rad;
/// // Equatorial observer, object on the celestial equator, at the meridian
/// let alt = altitude_rad(0.0, 1.0, 0.0);
/// assert!((alt - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn altitude_rad(sin_term: f64, cos_term: f64, hour_angle_rad: f64) -> f64 {
    asin(clamp_unit(sin_term + cos_term * cos(hour_angle_rad)))
}

/// Checks whether `object` ever reaches `min_altitude_deg` as seen from `observer`.
///
/// Exact for valid coordinates: used as a cheap gate before the interval sweep.
///
/// # Example
/// ```
/// use sidereal_visibility::{
///     is_ever_visible, CelestialObject, EquatorialCoordinate, GeographicCoordinate, Observatory,
/// };
///
/// let observer = Observatory::new("North", GeographicCoordinate::new(60.0, 0.0).unwrap());
/// let southern = CelestialObject::new("South", EquatorialCoordinate::new(0.0, -45.0).unwrap());
///
/// assert!(!is_ever_visible(&observer, &southern, 0.0));
/// assert!(is_ever_visible(&observer, &southern, -30.0));
/// ```
#[must_use]
pub fn is_ever_visible(
    observer: &Observatory,
    object: &CelestialObject,
    min_altitude_deg: f64,
) -> bool {
    let terms = AltitudeTerms::from_coordinates(observer.location(), object.position());
    let visible = terms.is_ever_above(deg_to_rad(min_altitude_deg));
    log::debug!(
        "visibility gate for {:?} from {:?} at {min_altitude_deg}°: {visible}",
        object.name(),
        observer.name()
    );
    visible
}

/// Lowest and highest altitude (radians) reached by `object` over a full rotation.
#[must_use]
pub fn altitude_range(observer: &Observatory, object: &CelestialObject) -> (f64, f64) {
    let terms = AltitudeTerms::from_coordinates(observer.location(), object.position());
    (terms.min_altitude(), terms.max_altitude())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::math::{radians_to_degrees, PI};

    const EPSILON: f64 = 1e-12;

    fn observer(latitude: f64, longitude: f64) -> Observatory {
        GeographicCoordinate::new(latitude, longitude).unwrap().into()
    }

    fn object(right_ascension: f64, declination: f64) -> CelestialObject {
        EquatorialCoordinate::new(right_ascension, declination)
            .unwrap()
            .into()
    }

    #[test]
    fn test_altitude_formula() {
        let lat = deg_to_rad(48.21);
        let dec = deg_to_rad(-16.72);
        let terms = AltitudeTerms::new(lat, dec);

        for &h in &[-PI, -1.0, 0.0, 0.3, 2.0, PI] {
            let expected = asin(sin(lat) * sin(dec) + cos(lat) * cos(dec) * cos(h));
            assert!((terms.altitude_at(h) - expected).abs() < EPSILON);
            assert_eq!(
                terms.altitude_at(h),
                altitude_rad(terms.sin_term(), terms.cos_term(), h)
            );
        }
    }

    #[test]
    fn test_meridian_altitude() {
        // Upper culmination altitude is 90° - |φ - δ|
        let terms = AltitudeTerms::new(deg_to_rad(40.0), deg_to_rad(10.0));
        assert!((radians_to_degrees(terms.altitude_at(0.0)) - 60.0).abs() < 1e-9);
        assert!((radians_to_degrees(terms.max_altitude()) - 60.0).abs() < 1e-9);
        // Lower culmination altitude is φ + δ - 90°
        assert!((radians_to_degrees(terms.altitude_at(PI)) + 40.0).abs() < 1e-9);
        assert!((radians_to_degrees(terms.min_altitude()) + 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamps_rounding_at_zenith() {
        // φ = δ makes sin_term + cos_term land on 1 up to rounding
        let angle = deg_to_rad(80.5);
        let terms = AltitudeTerms::new(angle, angle);
        let alt = terms.altitude_at(0.0);
        assert!(alt.is_finite());
        assert!((alt - PI / 2.0).abs() < 1e-7);

        assert_eq!(altitude_rad(0.5, 0.5 + 1e-15, 0.0), PI / 2.0);
        assert_eq!(altitude_rad(-0.5, 0.5 + 1e-15, PI), -PI / 2.0);
        assert!(altitude_rad(f64::NAN, 0.5, 0.0).is_nan());
    }

    #[test]
    fn test_pole_observer_has_constant_altitude() {
        for &latitude in &[90.0, -90.0] {
            for &declination in &[-60.0, 0.0, 23.4, 89.0] {
                let terms = AltitudeTerms::new(deg_to_rad(latitude), deg_to_rad(declination));
                let expected = if latitude > 0.0 { declination } else { -declination };
                for i in 0..=16 {
                    let h = -PI + f64::from(i) * PI / 8.0;
                    let alt = radians_to_degrees(terms.altitude_at(h));
                    assert!(
                        (alt - expected).abs() < 1e-9,
                        "latitude {latitude}, declination {declination}: {alt} at H={h}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_cos_term_is_non_negative() {
        for lat_step in 0..=36 {
            for dec_step in 0..=36 {
                let latitude = -90.0 + f64::from(lat_step) * 5.0;
                let declination = -90.0 + f64::from(dec_step) * 5.0;
                let terms = AltitudeTerms::new(deg_to_rad(latitude), deg_to_rad(declination));
                assert!(
                    terms.cos_term() >= 0.0,
                    "negative cos term at latitude {latitude}, declination {declination}"
                );
            }
        }
    }

    #[test]
    fn test_is_ever_visible_gate() {
        // Circumpolar from 60° N
        assert!(is_ever_visible(&observer(60.0, 0.0), &object(0.0, 70.0), 0.0));
        // Never rises from 60° N
        assert!(!is_ever_visible(&observer(60.0, 0.0), &object(0.0, -40.0), 0.0));
        // Rises but stays low
        assert!(is_ever_visible(&observer(60.0, 0.0), &object(0.0, -20.0), 5.0));
        assert!(!is_ever_visible(&observer(60.0, 0.0), &object(0.0, -20.0), 15.0));
    }

    #[test]
    fn test_is_ever_visible_at_exact_maximum() {
        // Equator, equatorial object: max altitude is exactly 90°
        let site = observer(0.0, 0.0);
        let target = object(0.0, 0.0);
        assert!(is_ever_visible(&site, &target, 89.999));
        assert!(!is_ever_visible(&site, &target, 90.001));
    }

    #[test]
    fn test_altitude_range() {
        let (min, max) = altitude_range(&observer(40.0, 0.0), &object(0.0, 10.0));
        assert!((radians_to_degrees(min) + 40.0).abs() < 1e-9);
        assert!((radians_to_degrees(max) - 60.0).abs() < 1e-9);
        assert!(min <= max);
    }
}
