//! Precomputed pairwise distances.

use cf_planar::distance;
use nalgebra::Point2;
use route_types::RoutingError;

/// Symmetric matrix of Euclidean distances, stored flat in row-major order.
///
/// Built once from a point list and read-only afterwards. Index 0 is the
/// tour start by convention.
///
/// # Example
///
/// ```
/// use route_optimize::DistanceMatrix;
/// use nalgebra::Point2;
///
/// let matrix = DistanceMatrix::from_points(&[
///     Point2::new(0.0, 0.0),
///     Point2::new(3.0, 0.0),
///     Point2::new(3.0, 4.0),
/// ]);
///
/// assert_eq!(matrix.len(), 3);
/// assert!((matrix.get(0, 2) - 5.0).abs() < 1e-12);
/// assert!((matrix.tour_length(&[0, 1, 2]) - 12.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DistanceMatrixRepr"))]
pub struct DistanceMatrix {
    size: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes all pairwise distances.
    #[must_use]
    pub fn from_points(points: &[Point2<f64>]) -> Self {
        let size = points.len();
        let mut data = vec![0.0; size * size];

        for i in 0..size {
            for j in (i + 1)..size {
                let d = distance(&points[i], &points[j]);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }

        Self { size, data }
    }

    /// Builds a matrix from raw row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] unless `data` holds
    /// `size × size` finite, non-negative entries with a zero diagonal and
    /// `data[i][j] == data[j][i]`.
    #[allow(clippy::float_cmp)]
    pub fn from_raw(size: usize, data: Vec<f64>) -> Result<Self, RoutingError> {
        if size.checked_mul(size) != Some(data.len()) {
            return Err(RoutingError::invalid_config(format!(
                "distance matrix of size {size} needs {size}² entries, got {}",
                data.len()
            )));
        }
        if data.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return Err(RoutingError::invalid_config(
                "distances must be finite and non-negative",
            ));
        }
        for i in 0..size {
            if data[i * size + i] != 0.0 {
                return Err(RoutingError::invalid_config(format!(
                    "distance from point {i} to itself must be zero"
                )));
            }
            for j in (i + 1)..size {
                if data[i * size + j] != data[j * size + i] {
                    return Err(RoutingError::invalid_config(format!(
                        "distance matrix is not symmetric at ({i}, {j})"
                    )));
                }
            }
        }
        Ok(Self { size, data })
    }

    /// Distance between points `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }

    /// Distances from point `i` to every point.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Number of points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Length of the closed tour visiting `order` and returning to its first
    /// entry.
    #[must_use]
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        if order.len() < 2 {
            return 0.0;
        }
        order
            .iter()
            .zip(order.iter().cycle().skip(1))
            .map(|(&a, &b)| self.get(a, b))
            .sum()
    }
}

/// Wire form of [`DistanceMatrix`]; decoding goes through
/// [`DistanceMatrix::from_raw`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DistanceMatrixRepr {
    size: usize,
    data: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<DistanceMatrixRepr> for DistanceMatrix {
    type Error = RoutingError;

    fn try_from(repr: DistanceMatrixRepr) -> Result<Self, Self::Error> {
        Self::from_raw(repr.size, repr.data)
    }
}
