//! Visiting-order optimizer combining greedy construction and 2-opt.

use nalgebra::Point2;
use route_types::{RoutingError, TourConfig};
use tracing::{debug, info};

use crate::distance::DistanceMatrix;
use crate::greedy::greedy_order;
use crate::two_opt::two_opt;

/// Summary of one optimization run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourSummary {
    /// Closed-tour length of the identity order.
    pub initial_length: f64,
    /// Closed-tour length after greedy construction.
    pub greedy_length: f64,
    /// Closed-tour length after 2-opt.
    pub final_length: f64,
    /// Number of 2-opt sweeps run.
    pub passes: usize,
}

/// Computes a short closed visiting order over a set of points.
///
/// Index 0 is the start and stays first in the order.
///
/// # Example
///
/// ```
/// use route_optimize::TourOptimizer;
/// use route_types::TourConfig;
/// use nalgebra::Point2;
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
/// ];
///
/// let mut optimizer = TourOptimizer::new(&points, TourConfig::default()).unwrap();
/// optimizer.optimize();
///
/// assert_eq!(optimizer.visit_order()[0], 0);
/// assert!((optimizer.tour_length() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct TourOptimizer {
    matrix: DistanceMatrix,
    order: Vec<usize>,
    config: TourConfig,
}

impl TourOptimizer {
    /// Builds the distance matrix and the identity order.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] if the configuration is invalid.
    pub fn new(points: &[Point2<f64>], config: TourConfig) -> Result<Self, RoutingError> {
        config.validate()?;
        Ok(Self {
            matrix: DistanceMatrix::from_points(points),
            order: (0..points.len()).collect(),
            config,
        })
    }

    /// Runs greedy construction followed by bounded 2-opt.
    ///
    /// Tours of fewer than three points are left as they are.
    pub fn optimize(&mut self) -> TourSummary {
        let initial_length = self.tour_length();

        greedy_order(&mut self.order, &self.matrix);
        let greedy_length = self.tour_length();

        let passes = two_opt(
            &mut self.order,
            &self.matrix,
            self.config.max_passes(),
            self.config.improvement_epsilon(),
        );
        let final_length = self.tour_length();

        debug!(order = ?self.order, "visiting order");
        info!(
            points = self.matrix.len(),
            initial_length,
            greedy_length,
            final_length,
            passes,
            "optimized tour"
        );

        TourSummary {
            initial_length,
            greedy_length,
            final_length,
            passes,
        }
    }

    /// Current visiting order; index 0 first.
    #[must_use]
    pub fn visit_order(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the optimizer and returns the order.
    #[must_use]
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Read-only access to the distance matrix.
    #[must_use]
    pub const fn distance_matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &TourConfig {
        &self.config
    }

    /// Closed-tour length of the current order.
    #[must_use]
    pub fn tour_length(&self) -> f64 {
        self.matrix.tour_length(&self.order)
    }
}
