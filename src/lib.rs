//! # Sidereal Visibility
//!
//! Visibility windows of a celestial object above a minimum altitude, for a fixed observer,
//! over one full sidereal rotation.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Given an observer's geographic coordinates and an object's equatorial coordinates, the
//! library answers two questions:
//! - does the object *ever* reach the minimum altitude ([`is_ever_visible`])?
//! - if so, between which hour angles ([`visibility_intervals`])?
//!
//! Boundaries are hour angles in radians on `[-π, π]`, read pairwise as `[start, end)`
//! windows in a longitude-independent sidereal frame. Converting them to civil time is
//! left to the caller.
//!
//! ## Features
//!
//! - `std` (default): native math functions
//! - `chrono` (default): `DateTime<Tz>` based date helpers in [`time`]
//! - `libm`: pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` for the value types
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! sidereal-visibility = "0.1"
//!
//! # no_std, numeric API only
//! sidereal-visibility = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use sidereal_visibility::{
//!     visibility_intervals, CelestialObject, EquatorialCoordinate, GeographicCoordinate,
//!     Observatory, VisibilityIntervals,
//! };
//!
//! let site = Observatory::new("Paranal", GeographicCoordinate::new(-24.63, -70.40).unwrap());
//! let target = CelestialObject::new("Betelgeuse", EquatorialCoordinate::new(88.79, 7.41).unwrap());
//!
//! match visibility_intervals(&site, &target, 30.0).unwrap() {
//!     VisibilityIntervals::Absent => println!("never above 30°"),
//!     VisibilityIntervals::Intervals(set) => {
//!         for window in set.intervals() {
//!             println!("visible from {:.4} to {:.4} rad", window.start(), window.end());
//!         }
//!     }
//! }
//! ```
//!
//! ## Strategies
//!
//! The default fixed-step sweep samples the altitude every [`PRECISION_STEP`] radians.
//! [`Strategy::Analytic`] solves for the crossings in closed form instead; both report
//! boundaries in the same layout. See [`SweepConfig`].
//!
//! ## Known limitation
//!
//! A window that spans the `±π` seam is split into a piece opening at `-π` and a piece
//! closed artificially at `+π`. [`SeamPolicy::Wrap`] merges the two on request.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
)]

extern crate alloc;

// Public API exports
pub use crate::altitude::{altitude_range, altitude_rad, is_ever_visible, AltitudeTerms};
pub use crate::error::{Error, Result};
pub use crate::math::{deg_to_rad, radians_to_degrees};
pub use crate::sweep::{
    visibility_intervals, visibility_intervals_with_config, SeamPolicy, Strategy, SweepConfig,
    PRECISION_STEP,
};
pub use crate::types::{
    CelestialObject, EquatorialCoordinate, GeographicCoordinate, Interval, IntervalSet,
    Observatory, VisibilityIntervals,
};

// Algorithm modules
pub mod altitude;
pub mod sweep;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
