//! Nearest-neighbour tour construction.
//!
//! Starting from the identity order, each position `i` in turn receives the
//! not-yet-placed point nearest to the point at position `i - 1`. Position 0
//! never moves. O(N²) using the precomputed matrix.

use crate::distance::DistanceMatrix;

/// Rewrites `order` in place into a nearest-neighbour tour.
///
/// `order` must be a permutation of `0..matrix.len()` with the start at
/// position 0. Among equally near candidates the one at the earliest
/// position wins, so the result is deterministic.
///
/// # Example
///
/// ```
/// use route_optimize::{DistanceMatrix, greedy_order};
/// use nalgebra::Point2;
///
/// let matrix = DistanceMatrix::from_points(&[
///     Point2::new(0.0, 0.0),
///     Point2::new(9.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(5.0, 0.0),
/// ]);
///
/// let mut order: Vec<usize> = (0..4).collect();
/// greedy_order(&mut order, &matrix);
/// assert_eq!(order, vec![0, 2, 3, 1]);
/// ```
pub fn greedy_order(order: &mut [usize], matrix: &DistanceMatrix) {
    let n = order.len();
    for i in 1..n {
        let row = matrix.row(order[i - 1]);
        let mut nearest = i;
        let mut nearest_distance = row[order[i]];

        for k in (i + 1)..n {
            let d = row[order[k]];
            if d < nearest_distance {
                nearest = k;
                nearest_distance = d;
            }
        }

        order.swap(i, nearest);
    }
}
