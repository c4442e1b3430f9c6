//! Prints the sidereal visibility windows of a star passing near the zenith.
//!
//! Output: every boundary (radians) separated by spaces, then the boundary count,
//! then the lower scan limit.

use sidereal_visibility::{
    visibility_intervals, CelestialObject, EquatorialCoordinate, GeographicCoordinate,
    Observatory, VisibilityIntervals,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let site = Observatory::new("Alert", GeographicCoordinate::new(80.5, 2.53)?);
    let target = CelestialObject::new("Polaris", EquatorialCoordinate::new(10.0, 80.5)?);

    let VisibilityIntervals::Intervals(set) = visibility_intervals(&site, &target, 89.5)? else {
        println!("{} never reaches 89.5° from {}", target.name(), site.name());
        return Ok(());
    };

    for boundary in set.boundaries() {
        print!("{boundary} ");
    }
    println!("{}", set.len());
    println!("{}", -std::f64::consts::PI);

    for window in set.intervals() {
        println!(
            "  [{:.6}, {:.6}) rad, {:.4}°",
            window.start(),
            window.end(),
            window.length().to_degrees()
        );
    }

    Ok(())
}
