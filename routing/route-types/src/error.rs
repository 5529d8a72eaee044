//! Error types for routing operations.
//!
//! This module defines the [`RoutingError`] enum which represents every
//! failure the search, tour and flight crates can report.

use std::time::Duration;

use cf_planar::PlanarError;
use nalgebra::Point2;

/// Errors that can occur during routing operations.
///
/// Search failures ([`NoPathFound`](Self::NoPathFound),
/// [`ExpansionLimit`](Self::ExpansionLimit), [`Timeout`](Self::Timeout)) and
/// [`BudgetExhausted`](Self::BudgetExhausted) are recoverable: the flight
/// controller records them per target and carries on. Configuration and
/// geometry errors are fatal at construction time.
///
/// # Example
///
/// ```
/// use route_types::RoutingError;
/// use nalgebra::Point2;
///
/// let error = RoutingError::NoPathFound {
///     start: Point2::new(0.0, 0.0),
///     goal: Point2::new(1.0, 1.0),
/// };
///
/// assert!(error.to_string().contains("no path found"));
/// assert!(error.is_search_failure());
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum RoutingError {
    /// The search frontier emptied before reaching the goal.
    ///
    /// Every reachable position was explored; the goal is enclosed by
    /// obstacles or unreachable with the allowed headings.
    #[error("no path found from {start} to {goal}")]
    NoPathFound {
        /// Where the search started.
        start: Point2<f64>,
        /// The point the search was trying to reach.
        goal: Point2<f64>,
    },

    /// The search expanded its maximum number of nodes.
    #[error("search gave up after expanding {limit} nodes")]
    ExpansionLimit {
        /// The configured expansion cap.
        limit: usize,
    },

    /// The search exceeded its wall-clock limit.
    #[error("search timed out after {0:?}")]
    Timeout(Duration),

    /// Committing another move would exceed the move budget.
    #[error("move budget of {budget} exhausted")]
    BudgetExhausted {
        /// The configured move budget.
        budget: usize,
    },

    /// An invalid configuration parameter was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input geometry was malformed.
    #[error("geometry error: {0}")]
    Geometry(#[from] PlanarError),
}

impl RoutingError {
    /// Creates an invalid configuration error with the given message.
    ///
    /// # Example
    ///
    /// ```
    /// use route_types::RoutingError;
    ///
    /// let error = RoutingError::invalid_config("step_length must be positive");
    /// assert!(error.to_string().contains("step_length"));
    /// ```
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns `true` if this is a "no path found" error.
    #[must_use]
    pub const fn is_no_path_found(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }

    /// Returns `true` for any failure of a single path search.
    ///
    /// This covers an exhausted frontier as well as a tripped expansion cap
    /// or timeout.
    ///
    /// # Example
    ///
    /// ```
    /// use route_types::RoutingError;
    /// use std::time::Duration;
    ///
    /// assert!(RoutingError::Timeout(Duration::from_millis(5)).is_search_failure());
    /// assert!(!RoutingError::BudgetExhausted { budget: 150 }.is_search_failure());
    /// ```
    #[must_use]
    pub const fn is_search_failure(&self) -> bool {
        matches!(
            self,
            Self::NoPathFound { .. } | Self::ExpansionLimit { .. } | Self::Timeout(_)
        )
    }
}
