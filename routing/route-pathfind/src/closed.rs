//! Duplicate-state pruning on a quantized grid.

use hashbrown::HashSet;
use nalgebra::Point2;

/// Set of grid cells already reached by the search.
///
/// Continuous positions are snapped to square cells of a fixed size; a child
/// landing in a cell that was already reached is dropped. This bounds the
/// search on any finite region.
///
/// # Example
///
/// ```
/// use route_pathfind::closed::ClosedSet;
/// use nalgebra::Point2;
///
/// let mut closed = ClosedSet::new(0.5);
/// assert!(closed.insert(&Point2::new(0.1, 0.1)));
/// assert!(!closed.insert(&Point2::new(0.4, 0.2)));  // same cell
/// assert!(closed.insert(&Point2::new(0.6, 0.2)));
/// assert_eq!(closed.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ClosedSet {
    cell_size: f64,
    cells: HashSet<(i64, i64)>,
}

impl ClosedSet {
    /// Creates an empty set with the given cell size.
    #[must_use]
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            cells: HashSet::new(),
        }
    }

    /// Returns the cell containing `point`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn cell_of(&self, point: &Point2<f64>) -> (i64, i64) {
        // Saturating float-to-int cast; coordinates are finite
        (
            (point.x / self.cell_size).floor() as i64,
            (point.y / self.cell_size).floor() as i64,
        )
    }

    /// Marks the cell of `point`; returns `false` if it was already marked.
    pub fn insert(&mut self, point: &Point2<f64>) -> bool {
        let cell = self.cell_of(point);
        self.cells.insert(cell)
    }

    /// Number of marked cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell is marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
