//! Segment clearance queries against polygonal obstacles.
//!
//! All tests treat segments as **closed**: shared endpoints, a segment
//! ending on an edge, or collinear overlap all count as an intersection.
//! The search engine therefore never accepts a move that grazes an
//! obstacle boundary.
//!
//! # Example
//!
//! ```
//! use cf_planar::{Obstacle, segment_intersects_any};
//! use nalgebra::Point2;
//!
//! let wall = Obstacle::new(vec![
//!     Point2::new(2.0, -5.0),
//!     Point2::new(3.0, -5.0),
//!     Point2::new(3.0, 5.0),
//!     Point2::new(2.0, 5.0),
//! ])
//! .unwrap();
//!
//! let obstacles = vec![wall];
//! assert!(segment_intersects_any(&Point2::new(0.0, 0.0), &Point2::new(4.0, 0.0), &obstacles));
//! assert!(!segment_intersects_any(&Point2::new(0.0, 6.0), &Point2::new(4.0, 6.0), &obstacles));
//! ```

use std::cmp::Ordering;

use nalgebra::Point2;

use crate::obstacle::Obstacle;

/// Sign of the cross product `(b - a) × (c - a)`.
///
/// `Greater` means `c` is left of the directed line `a → b`.
fn orientation(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> Ordering {
    let cross = (b.x - a.x).mul_add(c.y - a.y, -((b.y - a.y) * (c.x - a.x)));
    cross.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

/// Returns `true` if `c`, already known to be collinear with `a`–`b`,
/// lies within the segment's bounding box.
fn within_span(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> bool {
    c.x >= a.x.min(b.x) && c.x <= a.x.max(b.x) && c.y >= a.y.min(b.y) && c.y <= a.y.max(b.y)
}

/// Returns `true` if the closed segments `p1–p2` and `q1–q2` share a point.
///
/// # Example
///
/// ```
/// use cf_planar::segments_intersect;
/// use nalgebra::Point2;
///
/// // Proper crossing
/// assert!(segments_intersect(
///     &Point2::new(-1.0, 0.0), &Point2::new(1.0, 0.0),
///     &Point2::new(0.0, -1.0), &Point2::new(0.0, 1.0),
/// ));
///
/// // Touching at an endpoint also counts
/// assert!(segments_intersect(
///     &Point2::new(0.0, 0.0), &Point2::new(1.0, 1.0),
///     &Point2::new(1.0, 1.0), &Point2::new(2.0, 0.0),
/// ));
///
/// // Parallel and apart
/// assert!(!segments_intersect(
///     &Point2::new(0.0, 0.0), &Point2::new(1.0, 0.0),
///     &Point2::new(0.0, 1.0), &Point2::new(1.0, 1.0),
/// ));
/// ```
#[must_use]
pub fn segments_intersect(
    p1: &Point2<f64>,
    p2: &Point2<f64>,
    q1: &Point2<f64>,
    q2: &Point2<f64>,
) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    let straddles_q = d1 != d2 && d1 != Ordering::Equal && d2 != Ordering::Equal;
    let straddles_p = d3 != d4 && d3 != Ordering::Equal && d4 != Ordering::Equal;
    if straddles_q && straddles_p {
        return true;
    }

    (d1 == Ordering::Equal && within_span(q1, q2, p1))
        || (d2 == Ordering::Equal && within_span(q1, q2, p2))
        || (d3 == Ordering::Equal && within_span(p1, p2, q1))
        || (d4 == Ordering::Equal && within_span(p1, p2, q2))
}

/// Returns `true` if segment `p1–p2` crosses or touches any edge of `obstacle`.
///
/// A segment entirely inside the ring that never reaches an edge is not
/// reported.
///
/// # Example
///
/// ```
/// use cf_planar::{Obstacle, segment_intersects_polygon};
/// use nalgebra::Point2;
///
/// let square = Obstacle::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ])
/// .unwrap();
///
/// assert!(segment_intersects_polygon(&Point2::new(-1.0, 0.5), &Point2::new(0.5, 0.5), &square));
/// assert!(!segment_intersects_polygon(&Point2::new(2.0, 0.0), &Point2::new(3.0, 1.0), &square));
/// ```
#[must_use]
pub fn segment_intersects_polygon(p1: &Point2<f64>, p2: &Point2<f64>, obstacle: &Obstacle) -> bool {
    // Cheap reject before walking the edges
    let bounds = obstacle.bounds();
    if p1.x.max(p2.x) < bounds.min.x
        || p1.x.min(p2.x) > bounds.max.x
        || p1.y.max(p2.y) < bounds.min.y
        || p1.y.min(p2.y) > bounds.max.y
    {
        return false;
    }

    obstacle
        .edges()
        .any(|(a, b)| segments_intersect(p1, p2, a, b))
}

/// Returns `true` if segment `p1–p2` intersects any obstacle in the slice.
#[must_use]
pub fn segment_intersects_any(p1: &Point2<f64>, p2: &Point2<f64>, obstacles: &[Obstacle]) -> bool {
    obstacles
        .iter()
        .any(|obstacle| segment_intersects_polygon(p1, p2, obstacle))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unit_square() -> Obstacle {
        Obstacle::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
        .unwrap()
    }

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    // ==================== segments_intersect ====================

    #[test]
    fn test_crossing_segments() {
        assert!(segments_intersect(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0)));
    }

    #[test]
    fn test_disjoint_segments() {
        assert!(!segments_intersect(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, -1.0), &p(2.0, 1.0)));
    }

    #[test]
    fn test_collinear_overlap() {
        assert!(segments_intersect(&p(0.0, 0.0), &p(2.0, 0.0), &p(1.0, 0.0), &p(3.0, 0.0)));
    }

    #[test]
    fn test_collinear_apart() {
        assert!(!segments_intersect(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0), &p(3.0, 0.0)));
    }

    #[test]
    fn test_t_junction() {
        assert!(segments_intersect(&p(0.0, 0.0), &p(2.0, 0.0), &p(1.0, 0.0), &p(1.0, 5.0)));
    }

    #[test]
    fn test_symmetric() {
        let (a, b, c, d) = (p(0.0, 0.0), p(3.0, 1.0), p(1.0, -1.0), p(2.0, 2.0));
        assert_eq!(
            segments_intersect(&a, &b, &c, &d),
            segments_intersect(&c, &d, &a, &b)
        );
    }

    // ==================== crossing vs. tangent policy ====================

    #[test]
    fn test_segment_crossing_square_once() {
        // Enters through the left edge and stops inside
        let square = unit_square();
        assert!(segment_intersects_polygon(&p(-0.5, 0.5), &p(0.5, 0.5), &square));
    }

    #[test]
    fn test_segment_passing_through_square() {
        let square = unit_square();
        assert!(segment_intersects_polygon(&p(-1.0, 0.5), &p(2.0, 0.5), &square));
    }

    #[test]
    fn test_segment_outside_square() {
        let square = unit_square();
        assert!(!segment_intersects_polygon(&p(-1.0, 2.0), &p(2.0, 2.0), &square));
        assert!(!segment_intersects_polygon(&p(1.5, -1.0), &p(1.5, 2.0), &square));
    }

    #[test]
    fn test_segment_near_but_outside_bounds_box() {
        // Inside the bounding box gap of a triangle but clear of its edges
        let triangle = Obstacle::new(vec![p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)]).unwrap();
        assert!(!segment_intersects_polygon(&p(3.0, 3.0), &p(4.0, 2.5), &triangle));
    }

    #[test]
    fn test_tangent_along_edge_counts() {
        let square = unit_square();
        assert!(segment_intersects_polygon(&p(-1.0, 1.0), &p(2.0, 1.0), &square));
    }

    #[test]
    fn test_tangent_through_vertex_counts() {
        let square = unit_square();
        // Diagonal line just touching the (1, 1) corner from outside
        assert!(segment_intersects_polygon(&p(2.0, 0.0), &p(0.0, 2.0), &square));
    }

    #[test]
    fn test_endpoint_on_edge_counts() {
        let square = unit_square();
        assert!(segment_intersects_polygon(&p(0.5, 2.0), &p(0.5, 1.0), &square));
    }

    #[test]
    fn test_segment_strictly_inside_is_clear() {
        let square = unit_square();
        assert!(!segment_intersects_polygon(&p(0.25, 0.25), &p(0.75, 0.75), &square));
    }

    #[test]
    fn test_intersects_any() {
        let far = Obstacle::new(vec![p(10.0, 10.0), p(11.0, 10.0), p(11.0, 11.0)]).unwrap();
        let obstacles = vec![far, unit_square()];
        assert!(segment_intersects_any(&p(-1.0, 0.5), &p(2.0, 0.5), &obstacles));
        assert!(!segment_intersects_any(&p(-1.0, 5.0), &p(2.0, 5.0), &obstacles));
        assert!(!segment_intersects_any(&p(-1.0, 0.5), &p(2.0, 0.5), &[]));
    }
}
