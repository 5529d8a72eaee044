//! Configuration types for search, tour optimization and flights.
//!
//! All three follow the same builder pattern: start from `default()`, adjust
//! with `with_*` methods, then call `validate()` before use.
//!
//! # Example
//!
//! ```
//! use route_types::{FlightConfig, SearchConfig, TourConfig};
//! use std::time::Duration;
//!
//! let config = FlightConfig::default()
//!     .with_move_budget(200)
//!     .with_search(
//!         SearchConfig::default()
//!             .with_heuristic_weight(1.2)
//!             .with_timeout(Duration::from_secs(2)),
//!     )
//!     .with_tour(TourConfig::default().with_max_passes(50));
//!
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use crate::error::RoutingError;
use crate::heading_set::HeadingSet;

/// Default distance covered by one move.
pub const DEFAULT_STEP_LENGTH: f64 = 0.0003;

/// Default radius within which a target counts as visited.
pub const DEFAULT_TARGET_TOLERANCE: f64 = 0.0002;

/// Default radius within which the start counts as reached again.
pub const DEFAULT_RETURN_TOLERANCE: f64 = 0.0003;

/// Default cap on moves per flight.
pub const DEFAULT_MOVE_BUDGET: usize = 150;

fn ensure_positive(name: &str, value: f64) -> Result<(), RoutingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RoutingError::invalid_config(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}

/// Configuration for the heading-quantized path search.
///
/// Controls move geometry, the greediness of the priority, duplicate-state
/// pruning and resource limits.
///
/// # Example
///
/// ```
/// use route_types::{HeadingSet, SearchConfig};
///
/// let config = SearchConfig::default()
///     .with_step_length(1.0)
///     .with_headings(HeadingSet::uniform(45).unwrap())
///     .with_max_expansions(5_000);
///
/// assert_eq!(config.headings().len(), 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Exact length of every move.
    step_length: f64,
    /// Allowed headings.
    headings: HeadingSet,
    /// Multiplier on the straight-line estimate in `g + w·h`.
    heuristic_weight: f64,
    /// Closed-set cell size as a fraction of the step length.
    closed_set_resolution: f64,
    /// Maximum number of node expansions.
    max_expansions: usize,
    /// Optional wall-clock limit.
    timeout: Option<Duration>,
}

impl SearchConfig {
    /// Creates a search configuration with default settings.
    ///
    /// Defaults:
    /// - Step length: 0.0003
    /// - Headings: every 10°
    /// - Heuristic weight: 1.5
    /// - Closed-set resolution: 0.5
    /// - Max expansions: 20 000
    /// - No timeout
    #[must_use]
    pub fn new() -> Self {
        Self {
            step_length: DEFAULT_STEP_LENGTH,
            headings: HeadingSet::default(),
            heuristic_weight: 1.5,
            closed_set_resolution: 0.5,
            max_expansions: 20_000,
            timeout: None,
        }
    }

    /// Sets the move length.
    #[must_use]
    pub const fn with_step_length(mut self, length: f64) -> Self {
        self.step_length = length;
        self
    }

    /// Sets the allowed headings.
    #[must_use]
    pub fn with_headings(mut self, headings: HeadingSet) -> Self {
        self.headings = headings;
        self
    }

    /// Sets the heuristic weight.
    ///
    /// Must be greater than `1.0`. Larger values expand fewer nodes at the
    /// cost of longer paths.
    #[must_use]
    pub const fn with_heuristic_weight(mut self, weight: f64) -> Self {
        self.heuristic_weight = weight;
        self
    }

    /// Sets the closed-set cell size as a fraction of the step length.
    #[must_use]
    pub const fn with_closed_set_resolution(mut self, resolution: f64) -> Self {
        self.closed_set_resolution = resolution;
        self
    }

    /// Sets the maximum number of node expansions.
    #[must_use]
    pub const fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = max;
        self
    }

    /// Sets the timeout duration.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Removes the timeout.
    #[must_use]
    pub const fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Returns the move length.
    #[must_use]
    pub const fn step_length(&self) -> f64 {
        self.step_length
    }

    /// Returns the allowed headings.
    #[must_use]
    pub const fn headings(&self) -> &HeadingSet {
        &self.headings
    }

    /// Returns the heuristic weight.
    #[must_use]
    pub const fn heuristic_weight(&self) -> f64 {
        self.heuristic_weight
    }

    /// Returns the closed-set resolution.
    #[must_use]
    pub const fn closed_set_resolution(&self) -> f64 {
        self.closed_set_resolution
    }

    /// Returns the closed-set cell size in world units.
    #[must_use]
    pub fn closed_set_cell(&self) -> f64 {
        self.step_length * self.closed_set_resolution
    }

    /// Returns the expansion cap.
    #[must_use]
    pub const fn max_expansions(&self) -> usize {
        self.max_expansions
    }

    /// Returns the timeout duration, if set.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] for a non-positive step length
    /// or resolution, a heuristic weight not above 1, or a zero expansion cap.
    pub fn validate(&self) -> Result<(), RoutingError> {
        ensure_positive("step_length", self.step_length)?;
        ensure_positive("closed_set_resolution", self.closed_set_resolution)?;

        if !self.heuristic_weight.is_finite() || self.heuristic_weight <= 1.0 {
            return Err(RoutingError::invalid_config(format!(
                "heuristic_weight must be greater than 1, got {}",
                self.heuristic_weight
            )));
        }
        if self.max_expansions == 0 {
            return Err(RoutingError::invalid_config("max_expansions must be positive"));
        }
        if self.headings.is_empty() {
            return Err(RoutingError::invalid_config("heading set must not be empty"));
        }

        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for visiting-order optimization.
///
/// # Example
///
/// ```
/// use route_types::TourConfig;
///
/// let config = TourConfig::default().with_max_passes(5);
/// assert_eq!(config.max_passes(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourConfig {
    /// Upper bound on full 2-opt sweeps.
    max_passes: usize,
    /// Minimum length reduction for a reversal to be applied.
    improvement_epsilon: f64,
}

impl TourConfig {
    /// Creates a tour configuration with 20 passes and a 1e-12 epsilon.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_passes: 20,
            improvement_epsilon: 1e-12,
        }
    }

    /// Sets the maximum number of 2-opt passes.
    #[must_use]
    pub const fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = passes;
        self
    }

    /// Sets the minimum improvement a reversal must achieve.
    #[must_use]
    pub const fn with_improvement_epsilon(mut self, epsilon: f64) -> Self {
        self.improvement_epsilon = epsilon;
        self
    }

    /// Returns the maximum number of 2-opt passes.
    #[must_use]
    pub const fn max_passes(&self) -> usize {
        self.max_passes
    }

    /// Returns the minimum improvement epsilon.
    #[must_use]
    pub const fn improvement_epsilon(&self) -> f64 {
        self.improvement_epsilon
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] for zero passes or a negative
    /// or non-finite epsilon.
    pub fn validate(&self) -> Result<(), RoutingError> {
        if self.max_passes == 0 {
            return Err(RoutingError::invalid_config("max_passes must be positive"));
        }
        if !self.improvement_epsilon.is_finite() || self.improvement_epsilon < 0.0 {
            return Err(RoutingError::invalid_config(format!(
                "improvement_epsilon must be non-negative, got {}",
                self.improvement_epsilon
            )));
        }
        Ok(())
    }
}

impl Default for TourConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a complete round-trip flight.
///
/// Bundles the search and tour settings with the per-flight tolerances and
/// move budget.
///
/// # Example
///
/// ```
/// use route_types::FlightConfig;
///
/// let config = FlightConfig::default();
/// assert_eq!(config.move_budget(), 150);
/// assert!((config.target_tolerance() - 0.0002).abs() < 1e-15);
/// assert!((config.search().step_length() - 0.0003).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightConfig {
    search: SearchConfig,
    tour: TourConfig,
    /// Tolerance for targets that do not carry their own.
    target_tolerance: f64,
    /// Tolerance for arriving back at the start.
    return_tolerance: f64,
    /// Maximum number of committed moves.
    move_budget: usize,
}

impl FlightConfig {
    /// Creates a flight configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            search: SearchConfig::new(),
            tour: TourConfig::new(),
            target_tolerance: DEFAULT_TARGET_TOLERANCE,
            return_tolerance: DEFAULT_RETURN_TOLERANCE,
            move_budget: DEFAULT_MOVE_BUDGET,
        }
    }

    /// Sets the search configuration.
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Sets the tour configuration.
    #[must_use]
    pub const fn with_tour(mut self, tour: TourConfig) -> Self {
        self.tour = tour;
        self
    }

    /// Sets the default target tolerance.
    #[must_use]
    pub const fn with_target_tolerance(mut self, tolerance: f64) -> Self {
        self.target_tolerance = tolerance;
        self
    }

    /// Sets the return tolerance.
    #[must_use]
    pub const fn with_return_tolerance(mut self, tolerance: f64) -> Self {
        self.return_tolerance = tolerance;
        self
    }

    /// Sets the move budget. Zero is allowed and yields an empty flight.
    #[must_use]
    pub const fn with_move_budget(mut self, budget: usize) -> Self {
        self.move_budget = budget;
        self
    }

    /// Returns the search configuration.
    #[must_use]
    pub const fn search(&self) -> &SearchConfig {
        &self.search
    }

    /// Returns the tour configuration.
    #[must_use]
    pub const fn tour(&self) -> &TourConfig {
        &self.tour
    }

    /// Returns the default target tolerance.
    #[must_use]
    pub const fn target_tolerance(&self) -> f64 {
        self.target_tolerance
    }

    /// Returns the return tolerance.
    #[must_use]
    pub const fn return_tolerance(&self) -> f64 {
        self.return_tolerance
    }

    /// Returns the move budget.
    #[must_use]
    pub const fn move_budget(&self) -> usize {
        self.move_budget
    }

    /// Validates this configuration and the nested ones.
    ///
    /// # Errors
    ///
    /// Returns the first [`RoutingError::InvalidConfig`] found.
    pub fn validate(&self) -> Result<(), RoutingError> {
        self.search.validate()?;
        self.tour.validate()?;
        ensure_positive("target_tolerance", self.target_tolerance)?;
        ensure_positive("return_tolerance", self.return_tolerance)?;
        Ok(())
    }
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_search_defaults() {
        let config = SearchConfig::default();
        assert_relative_eq!(config.step_length(), 0.0003);
        assert_eq!(config.headings().len(), 36);
        assert_relative_eq!(config.heuristic_weight(), 1.5);
        assert_relative_eq!(config.closed_set_cell(), 0.000_15);
        assert_eq!(config.max_expansions(), 20_000);
        assert!(config.timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_search_builder() {
        let config = SearchConfig::new()
            .with_step_length(2.0)
            .with_heuristic_weight(2.0)
            .with_closed_set_resolution(0.25)
            .with_timeout(Duration::from_millis(10))
            .with_max_expansions(7);

        assert_eq!(config.step_length(), 2.0);
        assert_eq!(config.heuristic_weight(), 2.0);
        assert_eq!(config.closed_set_cell(), 0.5);
        assert_eq!(config.timeout(), Some(Duration::from_millis(10)));
        assert_eq!(config.max_expansions(), 7);
        assert!(config.without_timeout().timeout().is_none());
    }

    #[test]
    fn test_search_validate_rejects_bad_values() {
        assert!(SearchConfig::new().with_step_length(0.0).validate().is_err());
        assert!(SearchConfig::new().with_step_length(-1.0).validate().is_err());
        assert!(SearchConfig::new().with_step_length(f64::NAN).validate().is_err());
        assert!(SearchConfig::new().with_heuristic_weight(0.9).validate().is_err());
        assert!(SearchConfig::new().with_heuristic_weight(f64::INFINITY).validate().is_err());
        assert!(
            SearchConfig::new()
                .with_closed_set_resolution(0.0)
                .validate()
                .is_err()
        );
        assert!(SearchConfig::new().with_max_expansions(0).validate().is_err());
    }

    #[test]
    fn test_search_weight_must_exceed_one() {
        let err = SearchConfig::new().with_heuristic_weight(1.0).validate().unwrap_err();
        assert!(err.to_string().contains("greater than 1"));
        assert!(SearchConfig::new().with_heuristic_weight(1.01).validate().is_ok());
    }

    #[test]
    fn test_tour_validate() {
        assert!(TourConfig::default().validate().is_ok());
        assert_eq!(TourConfig::default().max_passes(), 20);
        assert!(TourConfig::new().with_max_passes(0).validate().is_err());
        assert!(
            TourConfig::new()
                .with_improvement_epsilon(-1.0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_flight_defaults() {
        let config = FlightConfig::default();
        assert_eq!(config.move_budget(), DEFAULT_MOVE_BUDGET);
        assert_relative_eq!(config.target_tolerance(), DEFAULT_TARGET_TOLERANCE);
        assert_relative_eq!(config.return_tolerance(), DEFAULT_RETURN_TOLERANCE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flight_validate_nested() {
        let config = FlightConfig::new().with_tour(TourConfig::new().with_max_passes(0));
        assert!(matches!(config.validate(), Err(RoutingError::InvalidConfig(_))));

        let config = FlightConfig::new().with_return_tolerance(0.0);
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("return_tolerance"));

        assert!(FlightConfig::new().with_move_budget(0).validate().is_ok());
    }
}
