//! Bounded 2-opt improvement of a closed tour.
//!
//! # Algorithm
//!
//! For every pair of positions `1 ≤ i < j ≤ N-1`, compare the two edges
//! around the segment `[i..=j]` with the edges it would have if reversed:
//!
//! ```text
//! delta = d(o[i-1], o[j]) + d(o[i], o[(j+1) % N]) - d(o[i-1], o[i]) - d(o[j], o[(j+1) % N])
//! ```
//!
//! The successor of the last position wraps to position 0, so the return
//! leg is part of the objective. The segment is reversed when the tour gets
//! shorter by more than the configured epsilon. Sweeps repeat until one
//! makes no change or the pass limit is reached.
//!
//! Position 0 is never part of a reversed segment.

use crate::distance::DistanceMatrix;

/// Change in tour length from reversing `order[i..=j]`.
#[must_use]
pub fn reversal_delta(order: &[usize], matrix: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = order.len();
    let before = order[i - 1];
    let first = order[i];
    let last = order[j];
    let after = order[(j + 1) % n];

    let old_cost = matrix.get(before, first) + matrix.get(last, after);
    let new_cost = matrix.get(before, last) + matrix.get(first, after);

    new_cost - old_cost
}

/// Improves `order` in place; returns the number of sweeps run.
///
/// Never increases the closed-tour length, never moves position 0 and
/// always leaves `order` a permutation of its input.
///
/// # Example
///
/// ```
/// use route_optimize::{DistanceMatrix, two_opt};
/// use nalgebra::Point2;
///
/// let matrix = DistanceMatrix::from_points(&[
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ]);
///
/// // Crossing tour 0 → 2 → 1 → 3
/// let mut order = vec![0, 2, 1, 3];
/// let passes = two_opt(&mut order, &matrix, 20, 1e-12);
///
/// assert!((matrix.tour_length(&order) - 4.0).abs() < 1e-12);
/// assert_eq!(order[0], 0);
/// assert!(passes >= 1);
/// ```
pub fn two_opt(order: &mut [usize], matrix: &DistanceMatrix, max_passes: usize, epsilon: f64) -> usize {
    let n = order.len();
    if n < 4 {
        // Any reversal of a 3-tour yields the same cycle
        return 0;
    }

    let mut passes = 0;
    let mut improved = true;

    while improved && passes < max_passes {
        improved = false;
        passes += 1;

        for i in 1..n - 1 {
            for j in (i + 1)..n {
                if reversal_delta(order, matrix, i, j) < -epsilon {
                    order[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    passes
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point2;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_uncrosses_square() {
        let matrix = square();
        let mut order = vec![0, 2, 1, 3];
        two_opt(&mut order, &matrix, 20, 1e-12);
        assert_relative_eq!(matrix.tour_length(&order), 4.0);
        assert_eq!(order[0], 0);
    }

    #[test]
    fn test_optimal_tour_single_pass() {
        let matrix = square();
        let mut order = vec![0, 1, 2, 3];
        let passes = two_opt(&mut order, &matrix, 20, 1e-12);
        assert_eq!(passes, 1);
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_delta_matches_length_change() {
        let matrix = DistanceMatrix::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 1.0),
            Point2::new(1.0, 3.0),
            Point2::new(5.0, 5.0),
            Point2::new(2.0, -1.0),
        ]);
        let order = vec![0, 1, 2, 3, 4];
        let before = matrix.tour_length(&order);

        for i in 1..4 {
            for j in (i + 1)..5 {
                let mut reversed = order.clone();
                reversed[i..=j].reverse();
                assert_relative_eq!(
                    matrix.tour_length(&reversed) - before,
                    reversal_delta(&order, &matrix, i, j),
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_pass_limit_respected() {
        let matrix = square();
        let mut order = vec![0, 2, 1, 3];
        assert_eq!(two_opt(&mut order, &matrix, 1, 1e-12), 1);
    }

    #[test]
    fn test_small_tours_untouched() {
        let matrix = DistanceMatrix::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ]);
        let mut order = vec![0, 2, 1];
        assert_eq!(two_opt(&mut order, &matrix, 20, 1e-12), 0);
        assert_eq!(order, vec![0, 2, 1]);
    }
}
