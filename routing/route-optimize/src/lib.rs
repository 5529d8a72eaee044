//! Visiting-order optimization for round trips.
//!
//! This crate approximates the Euclidean travelling-salesman tour over a
//! start point and a set of targets, returning an order that begins at the
//! start and implicitly closes back to it.
//!
//! # Overview
//!
//! - **Distance matrix** ([`distance`]): Symmetric pairwise distances, computed once
//! - **Greedy construction** ([`greedy`]): Nearest-neighbour order in O(N²)
//! - **2-opt** ([`two_opt`]): Segment reversals bounded by a pass limit
//! - **Optimizer** ([`tour`]): Runs both and reports tour lengths
//!
//! # Quick Start
//!
//! ```
//! use route_optimize::TourOptimizer;
//! use route_types::TourConfig;
//! use nalgebra::Point2;
//!
//! // Start, then three targets
//! let points = vec![
//!     Point2::new(-3.1878, 55.9444),
//!     Point2::new(-3.1862, 55.9452),
//!     Point2::new(-3.1890, 55.9435),
//!     Point2::new(-3.1871, 55.9439),
//! ];
//!
//! let mut optimizer = TourOptimizer::new(&points, TourConfig::default()).unwrap();
//! let summary = optimizer.optimize();
//!
//! assert_eq!(optimizer.visit_order()[0], 0);
//! assert!(summary.final_length <= summary.greedy_length + 1e-12);
//! ```
//!
//! # Using the Pieces Directly
//!
//! ```
//! use route_optimize::{DistanceMatrix, greedy_order, two_opt};
//! use nalgebra::Point2;
//!
//! let matrix = DistanceMatrix::from_points(&[
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! let mut order: Vec<usize> = (0..matrix.len()).collect();
//! greedy_order(&mut order, &matrix);
//! two_opt(&mut order, &matrix, 20, 1e-12);
//!
//! assert!((matrix.tour_length(&order) - 8.0).abs() < 1e-12);
//! ```

#![doc(html_root_url = "https://docs.rs/route-optimize/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod distance;
pub mod greedy;
pub mod tour;
pub mod two_opt;

// Re-export main types
pub use distance::DistanceMatrix;
pub use greedy::greedy_order;
pub use tour::{TourOptimizer, TourSummary};
pub use two_opt::{reversal_delta, two_opt};
