//! Cost estimates for the weighted best-first search.
//!
//! The search orders its frontier by `f = g + w·h`, where `g` is the path
//! length so far, `h` the straight-line distance to the goal and `w` the
//! configured heuristic weight, always greater than 1. Larger weights
//! trade path length for fewer expansions.
//!
//! # Example
//!
//! ```
//! use route_pathfind::heuristics::{priority, straight_line};
//! use nalgebra::Point2;
//!
//! let h = straight_line(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
//! assert!((h - 5.0).abs() < 1e-10);
//!
//! let f = priority(2.0, h, 1.5);
//! assert!((f - 9.5).abs() < 1e-10);
//! ```

use cf_planar::distance;
use nalgebra::Point2;

/// Straight-line (Euclidean) distance estimate.
///
/// Admissible for any heading set, since no sequence of moves can be
/// shorter than the straight line.
#[must_use]
pub fn straight_line(from: &Point2<f64>, goal: &Point2<f64>) -> f64 {
    distance(from, goal)
}

/// Weighted priority `g + weight·h`. Lower is expanded first.
#[must_use]
pub fn priority(cost_so_far: f64, estimate: f64, weight: f64) -> f64 {
    weight.mul_add(estimate, cost_so_far)
}
