//! Geodesic circle — the lowest-fidelity, always-available strategy.

use evr_core::{Coordinate, geo};

use crate::error::ShapeResult;
use crate::shape::{Accuracy, RangeShape};

/// Default number of circle steps.
pub const DEFAULT_STEPS: usize = 64;

/// Sample a true geodesic circle of `radius_mi` around `center`.
///
/// Returns an **open** ring of `steps` points at evenly spaced bearings;
/// [`RangeShape::new`] appends the closing point.  A circle on the sphere,
/// not in projected screen space, so the drawn radius is honest at any
/// latitude.
pub fn geodesic_circle(center: Coordinate, radius_mi: f64, steps: usize) -> Vec<Coordinate> {
    let step_deg = 360.0 / steps as f64;
    (0..steps)
        .map(|i| geo::destination(center, radius_mi, step_deg * i as f64))
        .collect()
}

/// [`geodesic_circle`] wrapped into a tagged [`RangeShape`].
///
/// # Errors
///
/// [`crate::ShapeError::DegenerateBoundary`] when `steps < 3`.
pub fn circle_shape(center: Coordinate, radius_mi: f64, steps: usize) -> ShapeResult<RangeShape> {
    RangeShape::new(
        geodesic_circle(center, radius_mi, steps),
        Accuracy::CircularFallback,
    )
}
