//! Heading-quantized path search around polygonal obstacles.
//!
//! This crate finds fixed-length move sequences between two planar points
//! that never cross or touch an obstacle edge, using `cf-planar` geometry
//! and the `route-types` domain types.
//!
//! # Overview
//!
//! - **Search** ([`search::HeadingSearch`]): Weighted best-first search over
//!   an explicit [`route_types::HeadingSet`], bounded by a closed set, an
//!   expansion cap and an optional timeout
//! - **Successors** ([`neighbors::SuccessorGenerator`]): One move per allowed
//!   heading, filtered against the obstacles
//! - **Closed set** ([`closed::ClosedSet`]): Grid-quantized duplicate pruning
//! - **Heuristics** ([`heuristics`]): Straight-line estimate and `g + w·h`
//!
//! # Quick Start
//!
//! ```
//! use route_pathfind::HeadingSearch;
//! use route_types::SearchConfig;
//! use cf_planar::{Bounds, Obstacle};
//! use nalgebra::Point2;
//!
//! // Keep the search inside a confinement area
//! let area = Bounds::new(Point2::new(-20.0, -20.0), Point2::new(20.0, 20.0));
//! let obstacles = vec![
//!     area.to_obstacle().unwrap(),
//!     Obstacle::new(vec![
//!         Point2::new(3.0, -2.0),
//!         Point2::new(4.0, -2.0),
//!         Point2::new(4.0, 2.0),
//!         Point2::new(3.0, 2.0),
//!     ])
//!     .unwrap(),
//! ];
//!
//! let search = HeadingSearch::new(&obstacles, SearchConfig::default().with_step_length(1.0));
//! let outcome = search
//!     .find_path(Point2::new(0.0, 0.0), Point2::new(8.0, 0.0), 0.5)
//!     .expect("Path should exist");
//!
//! assert!(outcome.path().is_continuous());
//! ```
//!
//! # Search Properties
//!
//! | Property | Behaviour |
//! |----------|-----------|
//! | Move length | Exactly the configured step |
//! | Headings | Only those in the configured set |
//! | Goal test | On generation, strictly inside the tolerance radius |
//! | Ordering | Lowest `g + w·h` first, ties first-in first-out |
//! | Termination | Goal, empty frontier, expansion cap or timeout |
//!
//! The weight is always above 1, so the path is not guaranteed shortest;
//! the default of 1.5 favours fewer expansions.

#![doc(html_root_url = "https://docs.rs/route-pathfind/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod closed;
pub mod heuristics;
pub mod neighbors;
pub mod search;

// Re-export main types for convenience
pub use closed::ClosedSet;
pub use heuristics::{priority, straight_line};
pub use neighbors::SuccessorGenerator;
pub use search::{HeadingSearch, find_path};
