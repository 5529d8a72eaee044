//! Search results with metadata.
//!
//! # Example
//!
//! ```
//! use route_types::{MovePath, SearchOutcome, SearchStats};
//! use nalgebra::Point2;
//! use std::time::Duration;
//!
//! let outcome = SearchOutcome::new(
//!     MovePath::new(Point2::origin()),
//!     SearchStats::new()
//!         .with_nodes_expanded(12)
//!         .with_elapsed(Duration::from_micros(40)),
//! );
//!
//! assert!(outcome.path().is_empty());
//! assert_eq!(outcome.stats().nodes_expanded(), 12);
//! ```

use std::time::Duration;

use crate::path::MovePath;

/// Statistics about one path search.
///
/// # Example
///
/// ```
/// use route_types::SearchStats;
/// use std::time::Duration;
///
/// let stats = SearchStats::new()
///     .with_nodes_expanded(1500)
///     .with_frontier_size(320)
///     .with_elapsed(Duration::from_millis(4));
/// assert_eq!(stats.frontier_size(), 320);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Number of nodes popped and expanded.
    nodes_expanded: usize,
    /// Number of nodes created, including the root.
    nodes_generated: usize,
    /// Number of entries left in the frontier at completion.
    frontier_size: usize,
    /// Time taken.
    time_elapsed: Duration,
}

impl SearchStats {
    /// Creates zeroed statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes_expanded: 0,
            nodes_generated: 0,
            frontier_size: 0,
            time_elapsed: Duration::ZERO,
        }
    }

    /// Sets the number of nodes expanded.
    #[must_use]
    pub const fn with_nodes_expanded(mut self, count: usize) -> Self {
        self.nodes_expanded = count;
        self
    }

    /// Sets the number of nodes generated.
    #[must_use]
    pub const fn with_nodes_generated(mut self, count: usize) -> Self {
        self.nodes_generated = count;
        self
    }

    /// Sets the frontier size at completion.
    #[must_use]
    pub const fn with_frontier_size(mut self, size: usize) -> Self {
        self.frontier_size = size;
        self
    }

    /// Sets the time elapsed.
    #[must_use]
    pub const fn with_elapsed(mut self, duration: Duration) -> Self {
        self.time_elapsed = duration;
        self
    }

    /// Returns the number of nodes expanded.
    #[must_use]
    pub const fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Returns the number of nodes generated.
    #[must_use]
    pub const fn nodes_generated(&self) -> usize {
        self.nodes_generated
    }

    /// Returns the frontier size at completion.
    #[must_use]
    pub const fn frontier_size(&self) -> usize {
        self.frontier_size
    }

    /// Returns the time elapsed.
    #[must_use]
    pub const fn time_elapsed(&self) -> Duration {
        self.time_elapsed
    }
}

/// A found path together with the statistics of the search that found it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    path: MovePath,
    stats: SearchStats,
}

impl SearchOutcome {
    /// Creates an outcome.
    #[must_use]
    pub const fn new(path: MovePath, stats: SearchStats) -> Self {
        Self { path, stats }
    }

    /// Returns the path.
    #[must_use]
    pub const fn path(&self) -> &MovePath {
        &self.path
    }

    /// Returns the search statistics.
    #[must_use]
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Consumes the outcome and returns the path.
    #[must_use]
    pub fn into_path(self) -> MovePath {
        self.path
    }
}
