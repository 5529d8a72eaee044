//! Closed polygonal obstacles.

use nalgebra::Point2;

use crate::bounds::Bounds;
use crate::error::PlanarError;
use crate::point::ensure_finite;

/// A closed polygonal keep-out ring.
///
/// Vertices are stored in order; the edge list is every consecutive pair
/// plus the closing edge from the last vertex back to the first. Rings
/// that repeat their first vertex at the end (as GeoJSON does) are accepted
/// and the duplicate is dropped.
///
/// # Example
///
/// ```
/// use cf_planar::Obstacle;
/// use nalgebra::Point2;
///
/// let triangle = Obstacle::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(0.0, 4.0),
///     Point2::new(0.0, 0.0), // closing vertex is optional
/// ])
/// .unwrap()
/// .with_name("library");
///
/// assert_eq!(triangle.vertex_count(), 3);
/// assert_eq!(triangle.edges().count(), 3);
/// assert!(triangle.contains(&Point2::new(1.0, 1.0)));
/// assert_eq!(triangle.name(), Some("library"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ObstacleRepr"))]
pub struct Obstacle {
    /// Ring vertices without a closing duplicate.
    vertices: Vec<Point2<f64>>,
    /// Optional label used in diagnostics.
    name: Option<String>,
}

impl Obstacle {
    /// Creates an obstacle from an ordered ring of vertices.
    ///
    /// # Errors
    ///
    /// Returns [`PlanarError::DegenerateObstacle`] if fewer than three
    /// vertices remain after dropping a closing duplicate, or
    /// [`PlanarError::NonFiniteCoordinate`] if any vertex is NaN/infinite.
    pub fn new(mut vertices: Vec<Point2<f64>>) -> Result<Self, PlanarError> {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }

        let obstacle = Self {
            vertices,
            name: None,
        };
        obstacle.validate()?;
        Ok(obstacle)
    }

    /// Checks the ring invariants: at least three vertices, all finite.
    ///
    /// # Errors
    ///
    /// Returns [`PlanarError::DegenerateObstacle`] or
    /// [`PlanarError::NonFiniteCoordinate`].
    pub fn validate(&self) -> Result<(), PlanarError> {
        if self.vertices.len() < 3 {
            return Err(PlanarError::DegenerateObstacle {
                vertices: self.vertices.len(),
            });
        }
        for vertex in &self.vertices {
            ensure_finite(vertex)?;
        }
        Ok(())
    }

    /// Attaches a diagnostic label.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the diagnostic label, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the ring vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Point2<f64>] {
        &self.vertices
    }

    /// Returns the number of distinct ring vertices (always at least 3).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over ring edges, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2<f64>, &Point2<f64>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }

    /// Returns the axis-aligned bounds of the ring.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(&self.vertices)
            .unwrap_or_else(|| Bounds::new(Point2::origin(), Point2::origin()))
    }

    /// Returns `true` if the point lies inside the ring (even-odd rule).
    ///
    /// Points exactly on an edge may be classified either way.
    #[must_use]
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        if !self.bounds().contains(point) {
            return false;
        }

        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > point.y) != (b.y > point.y) {
                let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
                if point.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Shortest distance from `point` to any edge of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// use cf_planar::Obstacle;
    /// use nalgebra::Point2;
    ///
    /// let square = Obstacle::new(vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(4.0, 0.0),
    ///     Point2::new(4.0, 4.0),
    ///     Point2::new(0.0, 4.0),
    /// ])
    /// .unwrap();
    ///
    /// assert!((square.boundary_distance(&Point2::new(1.0, 2.0)) - 1.0).abs() < 1e-12);
    /// assert!((square.boundary_distance(&Point2::new(7.0, 8.0)) - 5.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn boundary_distance(&self, point: &Point2<f64>) -> f64 {
        self.edges()
            .map(|(a, b)| point_segment_distance(point, a, b))
            .fold(f64::INFINITY, f64::min)
    }
}

fn point_segment_distance(p: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq <= 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Wire form of [`Obstacle`]; decoding goes through [`Obstacle::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ObstacleRepr {
    vertices: Vec<Point2<f64>>,
    #[serde(default)]
    name: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<ObstacleRepr> for Obstacle {
    type Error = PlanarError;

    fn try_from(repr: ObstacleRepr) -> Result<Self, Self::Error> {
        let mut obstacle = Self::new(repr.vertices)?;
        obstacle.name = repr.name;
        Ok(obstacle)
    }
}
