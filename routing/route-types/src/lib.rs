//! Core types for planar flight routing: headings, targets, moves and logs.
//!
//! This crate provides the vocabulary shared by the search, tour and flight
//! crates.
//!
//! # Overview
//!
//! - **Headings**: The explicit set of directions a search may use ([`HeadingSet`])
//! - **Targets**: Locations to visit with an opaque identifier ([`Target`])
//! - **Paths**: Fixed-length moves and sequences of them ([`Move`], [`MovePath`])
//! - **Log**: The committed, 1-based flight record ([`FlightLog`], [`LogEntry`])
//! - **Configuration**: Algorithm settings ([`SearchConfig`], [`TourConfig`], [`FlightConfig`])
//! - **Results**: Search output with metadata ([`SearchOutcome`], [`SearchStats`])
//!
//! # Example
//!
//! ```
//! use route_types::{FlightConfig, HeadingSet, SearchConfig, Target};
//! use nalgebra::Point2;
//!
//! // A sensor to read
//! let target = Target::new("index.fog.trace", Point2::new(-3.1860, 55.9450));
//!
//! // Eight compass headings, one-metre steps
//! let search = SearchConfig::default()
//!     .with_step_length(1.0)
//!     .with_headings(HeadingSet::uniform(45).unwrap());
//!
//! let config = FlightConfig::default().with_search(search);
//! assert!(config.validate().is_ok());
//!
//! // Paths would be computed by the route-pathfind crate
//! ```
//!
//! # Integration with cf-planar
//!
//! This crate builds on the `cf-planar` foundation, using:
//!
//! - [`cf_planar::Heading`] for move directions
//! - [`cf_planar::translate`] to build fixed-length moves
//! - [`cf_planar::PlanarError`], wrapped by [`RoutingError::Geometry`]
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

#![doc(html_root_url = "https://docs.rs/route-types/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod config;
pub mod error;
pub mod heading_set;
pub mod log;
pub mod path;
pub mod route;
pub mod target;

// Re-export main types at crate root for convenience
pub use config::{
    DEFAULT_MOVE_BUDGET, DEFAULT_RETURN_TOLERANCE, DEFAULT_STEP_LENGTH, DEFAULT_TARGET_TOLERANCE,
    FlightConfig, SearchConfig, TourConfig,
};
pub use error::RoutingError;
pub use heading_set::HeadingSet;
pub use log::{FlightLog, LogEntry};
pub use path::{Move, MovePath};
pub use route::{SearchOutcome, SearchStats};
pub use target::Target;
