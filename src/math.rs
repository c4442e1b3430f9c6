//! Angle conversion and trigonometry for altitude calculations.
//!
//! Trigonometric functions dispatch to the native `f64` methods with the `std`
//! feature and to `libm` otherwise, so the same code runs in `no_std` builds.

#[cfg(not(feature = "std"))]
use libm;

/// Half turn in radians.
pub const PI: f64 = core::f64::consts::PI;

/// Full turn in radians.
pub const TAU: f64 = core::f64::consts::TAU;

/// Converts degrees to radians.
///
/// A plain units conversion: out-of-range and non-finite inputs pass through unchanged.
///
/// # Example
/// ```
/// # use sidereal_visibility::deg_to_rad;
/// assert!((deg_to_rad(180.0) - core::f64::consts::PI).abs() < 1e-15);
/// assert!(deg_to_rad(f64::NAN).is_nan());
/// ```
#[inline]
#[must_use]
pub const fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Normalizes an angle in radians to the range [-π, π).
pub fn normalize_radians_pm_pi(radians: f64) -> f64 {
    let shifted = (radians + PI) % TAU;
    if shifted < 0.0 {
        shifted + TAU - PI
    } else {
        shifted - PI
    }
}

/// Clamps a sine/cosine argument into [-1, 1]. NaN is returned unchanged.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    if x > 1.0 {
        1.0
    } else if x < -1.0 {
        -1.0
    } else {
        x
    }
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}
