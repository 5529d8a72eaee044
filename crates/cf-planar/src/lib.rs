//! Planar geometry kernel for CortenForge flight planning.
//!
//! This crate provides the small set of 2D primitives that the routing crates
//! need to plan obstacle-avoiding flights:
//!
//! - [`Heading`] - Quantized travel direction in whole degrees
//! - [`distance`] and [`translate`] - Point metrics and fixed-length moves
//! - [`Obstacle`] - Closed polygonal keep-out ring
//! - [`Bounds`] - Axis-aligned rectangle, convertible to a confinement obstacle
//! - [`segments_intersect`], [`segment_intersects_polygon`],
//!   [`segment_intersects_any`] - Segment clearance queries
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with no engine dependencies. Everything here is
//! pure and side-effect free.
//!
//! # Coordinate System
//!
//! Points are [`nalgebra::Point2<f64>`]:
//! - X: easting (longitude when working in geographic degrees)
//! - Y: northing (latitude when working in geographic degrees)
//!
//! Headings are measured counter-clockwise from the +X axis:
//! 0° points east, 90° north, 180° west and 270° south. A move of length `l`
//! along heading `θ` adds `(l·cos θ, l·sin θ)`.
//!
//! # Example
//!
//! ```
//! use cf_planar::{Heading, Obstacle, distance, segment_intersects_polygon, translate};
//! use nalgebra::Point2;
//!
//! let start = Point2::new(0.0, 0.0);
//! let moved = translate(&start, 2.0, Heading::NORTH);
//! assert!((moved.y - 2.0).abs() < 1e-12);
//! assert!((distance(&start, &moved) - 2.0).abs() < 1e-12);
//!
//! let square = Obstacle::new(vec![
//!     Point2::new(1.0, 1.0),
//!     Point2::new(3.0, 1.0),
//!     Point2::new(3.0, 3.0),
//!     Point2::new(1.0, 3.0),
//! ])
//! .expect("valid ring");
//!
//! assert!(segment_intersects_polygon(
//!     &Point2::new(0.0, 2.0),
//!     &Point2::new(4.0, 2.0),
//!     &square,
//! ));
//! ```
//!
//! # Boundary Contact
//!
//! Segment tests operate on **closed** segments: a segment that merely
//! touches an obstacle edge (ends on it, passes through a vertex, or runs
//! along an edge) is reported as intersecting. Only polygon edges are tested,
//! so a segment lying strictly inside a ring does not intersect it.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod error;
mod heading;
mod intersect;
mod obstacle;
mod point;

pub use bounds::Bounds;
pub use error::PlanarError;
pub use heading::Heading;
pub use intersect::{segment_intersects_any, segment_intersects_polygon, segments_intersect};
pub use obstacle::Obstacle;
pub use point::{distance, ensure_finite, translate};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};
