//! Weighted best-first search over quantized headings.
//!
//! The search explores fixed-length moves along the allowed headings,
//! always expanding the frontier node with the lowest `g + w·h`. Each child
//! is goal-tested the moment it is generated, so the search stops as soon
//! as any move lands strictly within the tolerance radius.
//!
//! # Example
//!
//! ```
//! use route_pathfind::search::HeadingSearch;
//! use route_types::SearchConfig;
//! use cf_planar::Heading;
//! use nalgebra::Point2;
//!
//! let search = HeadingSearch::new(&[], SearchConfig::default());
//!
//! let outcome = search
//!     .find_path(Point2::new(0.0, 0.0), Point2::new(0.0009, 0.0), 0.0002)
//!     .expect("Path should exist");
//!
//! assert_eq!(outcome.path().len(), 3);
//! assert!(outcome.path().headings().all(|h| h == Heading::EAST));
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use cf_planar::{Heading, Obstacle, ensure_finite};
use nalgebra::Point2;
use route_types::{Move, MovePath, RoutingError, SearchConfig, SearchOutcome, SearchStats};
use tracing::debug;

use crate::closed::ClosedSet;
use crate::heuristics::{priority, straight_line};
use crate::neighbors::SuccessorGenerator;

/// A node in the search arena.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    point: Point2<f64>,
    /// Heading of the move that produced this node; `None` for the root.
    heading: Option<Heading>,
    cost_so_far: f64,
    parent: Option<usize>,
}

/// Frontier entry ordered so that `BinaryHeap` pops the lowest priority,
/// and among equal priorities the earliest inserted.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    priority: f64,
    sequence: u64,
    node: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behaviour
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Heading-quantized path search around polygonal obstacles.
///
/// The search is deterministic: identical inputs always produce the same
/// path, since children are generated in ascending heading order and
/// priority ties are broken first-in first-out.
///
/// # Example
///
/// ```
/// use route_pathfind::search::HeadingSearch;
/// use route_types::{HeadingSet, SearchConfig};
/// use cf_planar::Obstacle;
/// use nalgebra::Point2;
///
/// // Wall between start and goal
/// let wall = Obstacle::new(vec![
///     Point2::new(4.5, -3.0),
///     Point2::new(5.5, -3.0),
///     Point2::new(5.5, 3.0),
///     Point2::new(4.5, 3.0),
/// ])
/// .unwrap();
/// let obstacles = [wall];
///
/// let config = SearchConfig::default()
///     .with_step_length(1.0)
///     .with_headings(HeadingSet::uniform(45).unwrap());
/// let search = HeadingSearch::new(&obstacles, config);
///
/// let outcome = search
///     .find_path(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0), 0.75)
///     .unwrap();
/// assert!(outcome.path().len() > 10);  // Longer than the straight line
/// ```
pub struct HeadingSearch<'a> {
    /// Keep-out rings.
    obstacles: &'a [Obstacle],
    /// Algorithm configuration.
    config: SearchConfig,
}

impl<'a> HeadingSearch<'a> {
    /// Creates a search over the given obstacles.
    #[must_use]
    pub const fn new(obstacles: &'a [Obstacle], config: SearchConfig) -> Self {
        Self { obstacles, config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the obstacles.
    #[must_use]
    pub const fn obstacles(&self) -> &'a [Obstacle] {
        self.obstacles
    }

    /// Finds a move sequence from `start` ending strictly within `tolerance`
    /// of `goal`.
    ///
    /// Every move has the configured step length, uses an allowed heading
    /// and clears every obstacle. If `start` is already within tolerance the
    /// returned path is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration or tolerance is invalid ([`RoutingError::InvalidConfig`])
    /// - `start` or `goal` is not finite ([`RoutingError::Geometry`])
    /// - An obstacle ring separates `start` from `goal`, or the frontier
    ///   empties ([`RoutingError::NoPathFound`])
    /// - The expansion cap is reached ([`RoutingError::ExpansionLimit`])
    /// - The timeout elapses ([`RoutingError::Timeout`])
    pub fn find_path(
        &self,
        start: Point2<f64>,
        goal: Point2<f64>,
        tolerance: f64,
    ) -> Result<SearchOutcome, RoutingError> {
        self.config.validate()?;
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(RoutingError::invalid_config(format!(
                "tolerance must be positive and finite, got {tolerance}"
            )));
        }
        ensure_finite(&start)?;
        ensure_finite(&goal)?;

        let start_time = Instant::now();

        // Trivial case
        if straight_line(&start, &goal) < tolerance {
            return Ok(SearchOutcome::new(
                MovePath::new(start),
                SearchStats::new()
                    .with_nodes_generated(1)
                    .with_elapsed(start_time.elapsed()),
            ));
        }

        if let Some(ring) = self.separating_ring(&start, &goal, tolerance) {
            debug!(ring, "goal sealed off from start");
            return Err(RoutingError::NoPathFound { start, goal });
        }

        let generator = SuccessorGenerator::new(
            self.obstacles,
            self.config.headings(),
            self.config.step_length(),
        );
        let weight = self.config.heuristic_weight();
        let step = self.config.step_length();

        let mut arena = vec![SearchNode {
            point: start,
            heading: None,
            cost_so_far: 0.0,
            parent: None,
        }];
        let mut closed = ClosedSet::new(self.config.closed_set_cell());
        closed.insert(&start);

        let mut frontier = BinaryHeap::new();
        let mut sequence = 0u64;
        frontier.push(FrontierEntry {
            priority: priority(0.0, straight_line(&start, &goal), weight),
            sequence,
            node: 0,
        });

        let mut expanded = 0usize;

        while let Some(entry) = frontier.pop() {
            if expanded >= self.config.max_expansions() {
                debug!(expanded, frontier = frontier.len(), "search hit expansion cap");
                return Err(RoutingError::ExpansionLimit {
                    limit: self.config.max_expansions(),
                });
            }
            if let Some(timeout) = self.config.timeout() {
                if start_time.elapsed() >= timeout {
                    debug!(expanded, ?timeout, "search timed out");
                    return Err(RoutingError::Timeout(timeout));
                }
            }
            expanded += 1;

            let parent = arena[entry.node];
            let cost_so_far = parent.cost_so_far + step;

            for mv in generator.successors(parent.point) {
                let estimate = straight_line(&mv.to, &goal);

                if estimate < tolerance {
                    let path = reconstruct(&arena, entry.node, mv);
                    let stats = SearchStats::new()
                        .with_nodes_expanded(expanded)
                        .with_nodes_generated(arena.len() + 1)
                        .with_frontier_size(frontier.len())
                        .with_elapsed(start_time.elapsed());
                    debug!(
                        moves = path.len(),
                        expanded,
                        generated = stats.nodes_generated(),
                        frontier = stats.frontier_size(),
                        elapsed_us = stats.time_elapsed().as_micros(),
                        "search reached goal"
                    );
                    return Ok(SearchOutcome::new(path, stats));
                }

                if !closed.insert(&mv.to) {
                    continue;
                }

                let node = arena.len();
                arena.push(SearchNode {
                    point: mv.to,
                    heading: Some(mv.heading),
                    cost_so_far,
                    parent: Some(entry.node),
                });
                sequence += 1;
                frontier.push(FrontierEntry {
                    priority: priority(cost_so_far, estimate, weight),
                    sequence,
                    node,
                });
            }
        }

        debug!(
            expanded,
            generated = arena.len(),
            cells = closed.len(),
            "search frontier exhausted"
        );
        Err(RoutingError::NoPathFound { start, goal })
    }
}

impl HeadingSearch<'_> {
    /// Index of an obstacle that has exactly one of `start` and `goal`
    /// inside it while the whole tolerance disc around `goal` stays on the
    /// goal's side of its boundary.
    fn separating_ring(&self, start: &Point2<f64>, goal: &Point2<f64>, tolerance: f64) -> Option<usize> {
        self.obstacles.iter().position(|ring| {
            ring.contains(goal) != ring.contains(start) && ring.boundary_distance(goal) >= tolerance
        })
    }
}

/// Rebuilds the move sequence ending with `last`, whose parent is `tail`.
fn reconstruct(arena: &[SearchNode], tail: usize, last: Move) -> MovePath {
    let mut moves = vec![last];
    let mut current = tail;

    while let Some(parent) = arena[current].parent {
        let node = &arena[current];
        if let Some(heading) = node.heading {
            moves.push(Move::new(arena[parent].point, heading, node.point));
        }
        current = parent;
    }

    moves.reverse();
    MovePath::from_moves(arena[current].point, moves)
}

/// Convenience function for point-to-point search with a given step length.
///
/// Uses [`SearchConfig::default`] with the step length replaced.
///
/// # Errors
///
/// Same as [`HeadingSearch::find_path`].
///
/// # Example
///
/// ```
/// use route_pathfind::search::find_path;
/// use nalgebra::Point2;
///
/// let outcome = find_path(Point2::new(0.0, 0.0), Point2::new(0.0, 3.0), 0.5, 1.0, &[]);
/// assert!(outcome.is_ok());
/// ```
pub fn find_path(
    start: Point2<f64>,
    goal: Point2<f64>,
    tolerance: f64,
    step_length: f64,
    obstacles: &[Obstacle],
) -> Result<SearchOutcome, RoutingError> {
    let config = SearchConfig::default().with_step_length(step_length);
    HeadingSearch::new(obstacles, config).find_path(start, goal, tolerance)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cf_planar::{Bounds, segment_intersects_any};
    use route_types::HeadingSet;
    use std::time::Duration;

    fn square(cx: f64, cy: f64, half: f64) -> Obstacle {
        Obstacle::new(vec![
            Point2::new(cx - half, cy - half),
            Point2::new(cx + half, cy - half),
            Point2::new(cx + half, cy + half),
            Point2::new(cx - half, cy + half),
        ])
        .unwrap()
    }

    fn unit_config() -> SearchConfig {
        SearchConfig::default().with_step_length(1.0)
    }

    #[test]
    fn test_frontier_entry_ordering() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry {
            priority: 2.0,
            sequence: 0,
            node: 0,
        });
        heap.push(FrontierEntry {
            priority: 1.0,
            sequence: 2,
            node: 1,
        });
        heap.push(FrontierEntry {
            priority: 1.0,
            sequence: 1,
            node: 2,
        });

        assert_eq!(heap.pop().unwrap().node, 2);
        assert_eq!(heap.pop().unwrap().node, 1);
        assert_eq!(heap.pop().unwrap().node, 0);
    }

    #[test]
    fn test_three_east_moves() {
        let search = HeadingSearch::new(&[], SearchConfig::default());
        let outcome = search
            .find_path(Point2::origin(), Point2::new(0.0009, 0.0), 0.0002)
            .unwrap();

        let path = outcome.path();
        assert_eq!(path.len(), 3);
        assert!(path.headings().all(|h| h == Heading::EAST));
        assert_relative_eq!(path.end().x, 0.0009, epsilon = 1e-12);
        assert_eq!(path.end().y, 0.0);
        assert!(path.is_continuous());
    }

    #[test]
    fn test_start_within_tolerance_is_empty() {
        let search = HeadingSearch::new(&[], SearchConfig::default());
        let outcome = search
            .find_path(Point2::origin(), Point2::new(0.0001, 0.0), 0.0002)
            .unwrap();
        assert!(outcome.path().is_empty());
        assert_eq!(outcome.stats().nodes_expanded(), 0);
    }

    #[test]
    fn test_tolerance_is_strict() {
        // One east move lands exactly on the tolerance boundary, which is not
        // close enough, so the search must keep going.
        let config = unit_config().with_headings(HeadingSet::uniform(90).unwrap());
        let search = HeadingSearch::new(&[], config);
        let outcome = search
            .find_path(Point2::origin(), Point2::new(2.0, 0.0), 1.0)
            .unwrap();
        assert_eq!(outcome.path().len(), 2);
    }

    #[test]
    fn test_path_avoids_wall() {
        let obstacles = [Obstacle::new(vec![
            Point2::new(4.5, -4.0),
            Point2::new(5.5, -4.0),
            Point2::new(5.5, 4.0),
            Point2::new(4.5, 4.0),
        ])
        .unwrap()];
        let search = HeadingSearch::new(&obstacles, unit_config());
        let goal = Point2::new(10.0, 0.0);
        let outcome = search.find_path(Point2::origin(), goal, 0.5).unwrap();

        let path = outcome.path();
        assert!(path.is_continuous());
        assert!(nalgebra::distance(path.end(), &goal) < 0.5);
        for mv in path.moves() {
            assert_relative_eq!(mv.length(), 1.0, epsilon = 1e-12);
            assert!(!segment_intersects_any(&mv.from, &mv.to, &obstacles));
            assert!(search.config().headings().contains(mv.heading));
        }
        assert!(outcome.stats().nodes_expanded() > 0);
    }

    #[test]
    fn test_enclosed_goal_fails_without_searching() {
        let arena = Bounds::new(Point2::new(-10.0, -10.0), Point2::new(10.0, 10.0));
        let obstacles = [arena.to_obstacle().unwrap(), square(5.0, 5.0, 2.0)];
        // One expansion would hit the cap if the search ran
        let search = HeadingSearch::new(&obstacles, unit_config().with_max_expansions(1));

        let result = search.find_path(Point2::origin(), Point2::new(5.0, 5.0), 0.5);
        assert!(matches!(result, Err(RoutingError::NoPathFound { .. })));
    }

    #[test]
    fn test_goal_outside_confinement_fails_without_searching() {
        let arena = Bounds::new(Point2::new(-2.5, -2.5), Point2::new(2.5, 2.5));
        let obstacles = [arena.to_obstacle().unwrap()];
        let search = HeadingSearch::new(&obstacles, unit_config().with_max_expansions(1));

        let result = search.find_path(Point2::origin(), Point2::new(6.0, 0.0), 0.5);
        assert!(matches!(result, Err(RoutingError::NoPathFound { .. })));
    }

    #[test]
    fn test_confined_goal_is_reachable() {
        let arena = Bounds::new(Point2::new(-10.0, -10.0), Point2::new(10.0, 10.0));
        let obstacles = [arena.to_obstacle().unwrap()];
        let search = HeadingSearch::new(&obstacles, unit_config());

        let outcome = search
            .find_path(Point2::origin(), Point2::new(5.0, 0.0), 0.5)
            .unwrap();
        assert_eq!(outcome.path().len(), 5);
    }

    #[test]
    fn test_unreachable_goal_exhausts_frontier() {
        // The tolerance disc pokes inside the fence, but no lattice point lands in it
        let arena = Bounds::new(Point2::new(-2.5, -2.5), Point2::new(2.5, 2.5));
        let obstacles = [arena.to_obstacle().unwrap()];
        let config = unit_config().with_headings(HeadingSet::uniform(90).unwrap());
        let search = HeadingSearch::new(&obstacles, config);

        let result = search.find_path(Point2::origin(), Point2::new(3.0, 0.0), 0.6);
        assert!(matches!(result, Err(RoutingError::NoPathFound { .. })));
    }

    #[test]
    fn test_expansion_limit() {
        let obstacles = [square(5.0, 5.0, 2.0)];
        let search = HeadingSearch::new(&obstacles, unit_config().with_max_expansions(50));

        let result = search.find_path(Point2::origin(), Point2::new(1000.0, 0.0), 0.5);
        assert_eq!(result, Err(RoutingError::ExpansionLimit { limit: 50 }));
    }

    #[test]
    fn test_timeout() {
        let obstacles = [square(5.0, 5.0, 2.0)];
        let config = unit_config()
            .with_max_expansions(usize::MAX)
            .with_timeout(Duration::ZERO);
        let search = HeadingSearch::new(&obstacles, config);

        let result = search.find_path(Point2::origin(), Point2::new(1000.0, 0.0), 0.5);
        assert!(matches!(result, Err(RoutingError::Timeout(_))));
    }

    #[test]
    fn test_invalid_inputs() {
        let search = HeadingSearch::new(&[], SearchConfig::default());
        assert!(matches!(
            search.find_path(Point2::origin(), Point2::new(1.0, 0.0), 0.0),
            Err(RoutingError::InvalidConfig(_))
        ));
        assert!(matches!(
            search.find_path(Point2::new(f64::NAN, 0.0), Point2::new(1.0, 0.0), 0.1),
            Err(RoutingError::Geometry(_))
        ));

        let bad = HeadingSearch::new(&[], SearchConfig::default().with_heuristic_weight(0.5));
        assert!(bad.find_path(Point2::origin(), Point2::new(1.0, 0.0), 0.1).is_err());
    }

    #[test]
    fn test_deterministic() {
        let obstacles = [square(3.0, 0.5, 1.0), square(6.0, -1.0, 1.2)];
        let search = HeadingSearch::new(&obstacles, unit_config());
        let goal = Point2::new(10.0, 1.0);

        let first = search.find_path(Point2::origin(), goal, 0.6).unwrap();
        for _ in 0..5 {
            let again = search.find_path(Point2::origin(), goal, 0.6).unwrap();
            assert_eq!(again.path(), first.path());
            assert_eq!(
                again.stats().nodes_expanded(),
                first.stats().nodes_expanded()
            );
        }
    }

    #[test]
    fn test_convenience_function() {
        let outcome = find_path(Point2::origin(), Point2::new(0.0, 3.0), 0.1, 1.0, &[]).unwrap();
        assert_eq!(outcome.path().len(), 3);
        assert!(outcome.path().headings().all(|h| h == Heading::NORTH));
    }
}
