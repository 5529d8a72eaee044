//! Point metrics and fixed-length moves.

use nalgebra::Point2;

use crate::error::PlanarError;
use crate::heading::Heading;

/// Euclidean distance between two points.
///
/// # Example
///
/// ```
/// use cf_planar::distance;
/// use nalgebra::Point2;
///
/// let d = distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn distance(a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    nalgebra::distance(a, b)
}

/// Moves a point by `length` along `heading`.
///
/// Uses the crate-wide convention: `x += length·cos θ`, `y += length·sin θ`
/// with θ measured counter-clockwise from +X.
///
/// # Example
///
/// ```
/// use cf_planar::{Heading, translate};
/// use nalgebra::Point2;
///
/// let p = translate(&Point2::new(1.0, 1.0), 0.5, Heading::WEST);
/// assert!((p.x - 0.5).abs() < 1e-12);
/// assert!((p.y - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn translate(point: &Point2<f64>, length: f64, heading: Heading) -> Point2<f64> {
    *point + heading.unit_vector() * length
}

/// Returns an error if either coordinate is NaN or infinite.
///
/// # Errors
///
/// Returns [`PlanarError::NonFiniteCoordinate`] for non-finite input.
pub fn ensure_finite(point: &Point2<f64>) -> Result<(), PlanarError> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(PlanarError::NonFiniteCoordinate {
            x: point.x,
            y: point.y,
        })
    }
}
