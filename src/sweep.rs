//! Visibility windows over one sidereal rotation.
//!
//! The default [`Strategy::Sweep`] samples the altitude at a fixed hour-angle step from
//! `-π` to `+π` and records every sample where visibility switches on or off.
//! [`Strategy::Analytic`] solves `altitude(H) = min` in closed form and lays the result
//! out the same way.
//!
//! Samples are taken at `hour_angle + longitude`, but the boundaries are reported in the
//! un-shifted `hour_angle`, a longitude-independent sidereal frame that callers combine
//! with Greenwich sidereal time themselves.
//!
//! A window still open at `+π` is closed there rather than wrapped around to `-π`,
//! unless [`SeamPolicy::Wrap`] is requested.

use crate::altitude::AltitudeTerms;
use crate::error::{check_altitude, check_step};
use crate::math::{acos, clamp_unit, deg_to_rad, normalize_radians_pm_pi, sin, PI, TAU};
use crate::types::IntervalSet;
use crate::{CelestialObject, Observatory, Result, VisibilityIntervals};
use alloc::vec::Vec;

/// Default hour-angle step in radians (about 52,560 samples per rotation).
///
/// Lower is more precise but slower.
pub const PRECISION_STEP: f64 = 0.000_119_543_099_451_666_409_378_334_984_143_055_665_304_306_293_736;

/// How the boundaries are found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Fixed-step sampling across the rotation.
    #[default]
    Sweep,
    /// Closed-form solution of `altitude(H) = min` via inverse cosine.
    Analytic,
}

/// Treatment of a window that spans the `±π` scan seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeamPolicy {
    /// Split the window at the seam: one piece opens at `-π`, the other is closed at `+π`.
    #[default]
    Truncate,
    /// Merge the two pieces into one window `[b, a + 2π)` placed last in the sequence.
    ///
    /// The final boundary may then exceed `π`.
    Wrap,
}

/// Immutable configuration of a visibility query.
///
/// # Example
/// ```
/// # use sidereal_visibility::{SweepConfig, Strategy, SeamPolicy, PRECISION_STEP};
/// let standard = SweepConfig::standard();
/// assert_eq!(standard.step(), PRECISION_STEP);
/// assert_eq!(standard.strategy(), Strategy::Sweep);
///
/// let coarse = SweepConfig::new(1e-3).unwrap().with_seam(SeamPolicy::Wrap);
/// assert_eq!(coarse.step(), 1e-3);
/// assert_eq!(coarse.seam(), SeamPolicy::Wrap);
///
/// assert!(SweepConfig::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSweepConfig"))]
pub struct SweepConfig {
    /// Hour-angle step in radians
    step: f64,
    strategy: Strategy,
    seam: SeamPolicy,
}

impl SweepConfig {
    /// Creates a sweep configuration with the given step.
    ///
    /// # Errors
    /// Returns `InvalidStep` unless the step is finite and in (0, π].
    pub fn new(step: f64) -> Result<Self> {
        check_step(step)?;
        Ok(Self {
            step,
            ..Self::standard()
        })
    }

    /// Default configuration: [`PRECISION_STEP`], fixed-step sweep, truncation at the seam.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            step: PRECISION_STEP,
            strategy: Strategy::Sweep,
            seam: SeamPolicy::Truncate,
        }
    }

    /// Returns a copy using `strategy`.
    #[must_use]
    pub const fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    /// Returns a copy using `seam`.
    #[must_use]
    pub const fn with_seam(self, seam: SeamPolicy) -> Self {
        Self { seam, ..self }
    }

    /// Gets the hour-angle step in radians.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Gets the boundary strategy.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Gets the seam policy.
    #[must_use]
    pub const fn seam(&self) -> SeamPolicy {
        self.seam
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSweepConfig {
    step: f64,
    strategy: Strategy,
    seam: SeamPolicy,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSweepConfig> for SweepConfig {
    type Error = crate::Error;

    fn try_from(raw: RawSweepConfig) -> Result<Self> {
        Ok(Self::new(raw.step)?
            .with_strategy(raw.strategy)
            .with_seam(raw.seam))
    }
}

/// Computes the visibility windows of `object` from `observer` with the standard configuration.
///
/// Returns [`VisibilityIntervals::Absent`] without sweeping when the object never reaches
/// `min_altitude_deg`.
///
/// Any threshold above the object's highest altitude (including one above 90°) gives
/// `Absent`; any threshold below its lowest altitude (including one below -90°) gives the
/// whole rotation `[-π, π]`.
///
/// # Errors
/// Returns `InvalidAltitude` if `min_altitude_deg` is NaN.
///
/// # Example
/// ```
/// use sidereal_visibility::{
///     visibility_intervals, CelestialObject, EquatorialCoordinate, GeographicCoordinate,
///     Observatory,
/// };
///
/// let site = Observatory::new("Alert", GeographicCoordinate::new(80.5, 2.53).unwrap());
/// let target = CelestialObject::new("Polaris", EquatorialCoordinate::new(10.0, 80.5).unwrap());
///
/// let result = visibility_intervals(&site, &target, 89.5).unwrap();
/// let set = result.interval_set().expect("passes near the zenith");
/// for window in set.intervals() {
///     println!("[{:.5}, {:.5})", window.start(), window.end());
/// }
/// ```
pub fn visibility_intervals(
    observer: &Observatory,
    object: &CelestialObject,
    min_altitude_deg: f64,
) -> Result<VisibilityIntervals> {
    visibility_intervals_with_config(observer, object, min_altitude_deg, &SweepConfig::standard())
}

/// Computes the visibility windows of `object` from `observer` using `config`.
///
/// # Errors
/// Returns `InvalidAltitude` if `min_altitude_deg` is NaN.
pub fn visibility_intervals_with_config(
    observer: &Observatory,
    object: &CelestialObject,
    min_altitude_deg: f64,
    config: &SweepConfig,
) -> Result<VisibilityIntervals> {
    check_altitude(min_altitude_deg)?;

    let location = observer.location();
    let terms = AltitudeTerms::from_coordinates(location, object.position());
    let min_altitude_rad = deg_to_rad(min_altitude_deg);

    if !terms.is_ever_above(min_altitude_rad) {
        log::debug!(
            "{:?} never reaches {min_altitude_deg}° from {:?}",
            object.name(),
            observer.name()
        );
        return Ok(VisibilityIntervals::Absent);
    }

    let longitude_rad = deg_to_rad(location.longitude());
    let set = match config.strategy() {
        Strategy::Sweep => sweep(&terms, longitude_rad, min_altitude_rad, config.step()),
        Strategy::Analytic => solve(&terms, longitude_rad, min_altitude_rad),
    };
    let set = match config.seam() {
        SeamPolicy::Truncate => set,
        SeamPolicy::Wrap => wrap_seam(set),
    };

    log::debug!(
        "{:?} from {:?} at {min_altitude_deg}°: {} boundaries ({:?})",
        object.name(),
        observer.name(),
        set.len(),
        config.strategy()
    );
    Ok(VisibilityIntervals::Intervals(set))
}

/// Fixed-step sweep from `-π` to `+π` inclusive.
fn sweep(terms: &AltitudeTerms, longitude_rad: f64, min_altitude_rad: f64, step: f64) -> IntervalSet {
    let mut boundaries = Vec::new();
    let mut open = false;

    let mut hour_angle = -PI;
    while hour_angle <= PI {
        let visible = terms.altitude_at(hour_angle + longitude_rad) >= min_altitude_rad;

        if open != visible {
            log::trace!(
                "{} at hour angle {hour_angle}",
                if visible { "open" } else { "close" }
            );
            boundaries.push(hour_angle);
            open = visible;
        }

        hour_angle += step;
    }

    if open {
        boundaries.push(PI);
    }
    IntervalSet::new(boundaries, open)
}

/// Closed-form boundaries: visible where `cos(h + λ) ≥ c`.
fn solve(terms: &AltitudeTerms, longitude_rad: f64, min_altitude_rad: f64) -> IntervalSet {
    // sin is not monotonic below -π/2
    if min_altitude_rad <= terms.min_altitude() {
        return IntervalSet::new(alloc::vec![-PI, PI], true);
    }

    let sin_term = terms.sin_term();
    let cos_term = terms.cos_term();
    let diff = sin(min_altitude_rad) - sin_term;

    if diff <= -cos_term {
        return IntervalSet::new(alloc::vec![-PI, PI], true);
    }
    if diff >= cos_term {
        // Touches the minimum at a single instant at most
        return IntervalSet::default();
    }

    let half_width = acos(clamp_unit(diff / cos_term));
    let center = normalize_radians_pm_pi(-longitude_rad);
    let start = center - half_width;
    let end = center + half_width;

    if start < -PI {
        IntervalSet::new(alloc::vec![-PI, end, start + TAU, PI], true)
    } else if end > PI {
        IntervalSet::new(alloc::vec![-PI, end - TAU, start, PI], true)
    } else {
        IntervalSet::new(alloc::vec![start, end], false)
    }
}

/// Joins the piece opening at `-π` with the piece closed at `+π`.
fn wrap_seam(set: IntervalSet) -> IntervalSet {
    let boundaries = set.boundaries();
    let len = boundaries.len();
    if !set.closed_at_scan_limit() || len < 4 || boundaries[0] > -PI {
        return set;
    }

    let first_close = boundaries[1];
    let mut merged = Vec::with_capacity(len - 2);
    merged.extend_from_slice(&boundaries[2..len - 1]);
    merged.push(first_close + TAU);
    IntervalSet::new(merged, false)
}
