//! Axis-aligned planar bounds.

use nalgebra::Point2;

use crate::error::PlanarError;
use crate::obstacle::Obstacle;

/// An axis-aligned rectangle.
///
/// Typically used to describe the confinement area an agent must stay
/// inside. [`Bounds::to_obstacle`] turns it into a ring whose edges the
/// path search will refuse to cross.
///
/// # Example
///
/// ```
/// use cf_planar::Bounds;
/// use nalgebra::Point2;
///
/// // Corners can be given in any order
/// let area = Bounds::new(Point2::new(4.0, 3.0), Point2::new(0.0, 0.0));
/// assert_eq!(area.min, Point2::new(0.0, 0.0));
/// assert!(area.contains(&Point2::new(2.0, 2.0)));
///
/// let boundary = area.to_obstacle().unwrap();
/// assert_eq!(boundary.vertex_count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Minimum corner.
    pub min: Point2<f64>,
    /// Maximum corner.
    pub max: Point2<f64>,
}

impl Bounds {
    /// Creates bounds from two opposite corners.
    #[must_use]
    pub fn new(a: Point2<f64>, b: Point2<f64>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Returns the smallest bounds enclosing all points, or `None` if empty.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2<f64>>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Self::new(first, first), |acc, p| acc.expanded_to(p)))
    }

    /// Returns these bounds grown to include `point`.
    #[must_use]
    pub fn expanded_to(self, point: &Point2<f64>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(point.x), self.min.y.min(point.y)),
            max: Point2::new(self.max.x.max(point.x), self.max.y.max(point.y)),
        }
    }

    /// Extent along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns `true` if the point is inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Converts the rectangle into a counter-clockwise obstacle ring.
    ///
    /// # Errors
    ///
    /// Returns [`PlanarError::InvalidBounds`] when width or height is zero,
    /// or [`PlanarError::NonFiniteCoordinate`] for non-finite corners.
    pub fn to_obstacle(&self) -> Result<Obstacle, PlanarError> {
        let (width, height) = (self.width(), self.height());
        if width <= 0.0 || height <= 0.0 {
            return Err(PlanarError::InvalidBounds { width, height });
        }

        Obstacle::new(vec![
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ])
        .map(|ring| ring.with_name("confinement"))
    }
}
