//! Successor generation for heading-quantized search.
//!
//! Every allowed heading yields one candidate move of the configured step
//! length. Candidates whose segment crosses or touches an obstacle are
//! dropped.
//!
//! # Example
//!
//! ```
//! use route_pathfind::neighbors::SuccessorGenerator;
//! use route_types::HeadingSet;
//! use nalgebra::Point2;
//!
//! let headings = HeadingSet::uniform(90).unwrap();
//! let generator = SuccessorGenerator::new(&[], &headings, 1.0);
//!
//! let moves: Vec<_> = generator.successors(Point2::new(0.0, 0.0)).collect();
//! assert_eq!(moves.len(), 4);  // All four headings (no obstacles)
//! ```

use cf_planar::{Obstacle, segment_intersects_any};
use nalgebra::Point2;
use route_types::{HeadingSet, Move};

/// Generator for obstacle-free moves from a position.
///
/// # Example
///
/// ```
/// use route_pathfind::neighbors::SuccessorGenerator;
/// use route_types::HeadingSet;
/// use cf_planar::Obstacle;
/// use nalgebra::Point2;
///
/// // Wall directly east of the origin
/// let wall = Obstacle::new(vec![
///     Point2::new(0.5, -1.0),
///     Point2::new(0.6, -1.0),
///     Point2::new(0.6, 1.0),
///     Point2::new(0.5, 1.0),
/// ])
/// .unwrap();
/// let obstacles = [wall];
///
/// let headings = HeadingSet::uniform(90).unwrap();
/// let generator = SuccessorGenerator::new(&obstacles, &headings, 1.0);
///
/// // Should have 3 successors (4 - 1 blocked)
/// assert_eq!(generator.successors(Point2::new(0.0, 0.0)).count(), 3);
/// ```
pub struct SuccessorGenerator<'a> {
    /// Keep-out rings.
    obstacles: &'a [Obstacle],
    /// Allowed headings, ascending.
    headings: &'a HeadingSet,
    /// Length of every move.
    step_length: f64,
}

impl<'a> SuccessorGenerator<'a> {
    /// Creates a generator over the given obstacles and headings.
    #[must_use]
    pub const fn new(obstacles: &'a [Obstacle], headings: &'a HeadingSet, step_length: f64) -> Self {
        Self {
            obstacles,
            headings,
            step_length,
        }
    }

    /// Returns the move length.
    #[must_use]
    pub const fn step_length(&self) -> f64 {
        self.step_length
    }

    /// Returns the maximum number of successors per position.
    #[must_use]
    pub fn branching_factor(&self) -> usize {
        self.headings.len()
    }

    /// Returns `true` if the move's segment stays clear of every obstacle.
    #[must_use]
    pub fn is_clear(&self, mv: &Move) -> bool {
        !segment_intersects_any(&mv.from, &mv.to, self.obstacles)
    }

    /// Returns the obstacle-free moves from `from`, in ascending heading order.
    pub fn successors(&self, from: Point2<f64>) -> impl Iterator<Item = Move> + '_ {
        self.headings
            .iter()
            .map(move |heading| Move::step(from, heading, self.step_length))
            .filter(|mv| self.is_clear(mv))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cf_planar::Heading;

    fn box_around_origin(half: f64) -> Obstacle {
        Obstacle::new(vec![
            Point2::new(-half, -half),
            Point2::new(half, -half),
            Point2::new(half, half),
            Point2::new(-half, half),
        ])
        .unwrap()
    }

    #[test]
    fn test_all_headings_when_free() {
        let headings = HeadingSet::default();
        let generator = SuccessorGenerator::new(&[], &headings, 0.0003);
        let moves: Vec<_> = generator.successors(Point2::origin()).collect();

        assert_eq!(moves.len(), 36);
        assert_eq!(generator.branching_factor(), 36);
        for mv in &moves {
            assert_relative_eq!(mv.length(), 0.0003, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_ascending_heading_order() {
        let headings = HeadingSet::uniform(30).unwrap();
        let generator = SuccessorGenerator::new(&[], &headings, 1.0);
        let order: Vec<Heading> = generator.successors(Point2::origin()).map(|m| m.heading).collect();

        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
        assert_eq!(order[0], Heading::EAST);
    }

    #[test]
    fn test_enclosed_position_has_no_successors() {
        let obstacles = [box_around_origin(0.5)];
        let headings = HeadingSet::default();
        let generator = SuccessorGenerator::new(&obstacles, &headings, 1.0);
        assert_eq!(generator.successors(Point2::origin()).count(), 0);
    }

    #[test]
    fn test_short_step_inside_box_is_clear() {
        // Moves that stay strictly inside a ring never touch its edges
        let obstacles = [box_around_origin(5.0)];
        let headings = HeadingSet::uniform(90).unwrap();
        let generator = SuccessorGenerator::new(&obstacles, &headings, 1.0);
        assert_eq!(generator.successors(Point2::origin()).count(), 4);
    }

    #[test]
    fn test_move_ending_on_edge_is_blocked() {
        let obstacles = [box_around_origin(1.0)];
        let headings = HeadingSet::uniform(90).unwrap();
        let generator = SuccessorGenerator::new(&obstacles, &headings, 1.0);
        assert_eq!(generator.successors(Point2::origin()).count(), 0);
        assert_relative_eq!(generator.step_length(), 1.0);
    }
}
