//! Mutable flight state: position, budget, log and visit flags.

use nalgebra::Point2;
use route_types::{FlightLog, Move, RoutingError};
use tracing::debug;

/// Phase of a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlightPhase {
    /// Not started.
    #[default]
    Idle,
    /// Computing the visiting order.
    Planning,
    /// Flying to targets.
    EnRoute,
    /// Flying back to the start.
    Returning,
    /// Finished.
    Complete,
}

/// State carried through one flight.
///
/// The move counter never exceeds the budget: [`FlightState::commit`]
/// refuses a move that would.
///
/// # Example
///
/// ```
/// use route_flight::FlightState;
/// use route_types::Move;
/// use cf_planar::Heading;
/// use nalgebra::Point2;
///
/// let mut state = FlightState::new(Point2::origin(), 1, 1);
///
/// let first = Move::step(Point2::origin(), Heading::EAST, 1.0);
/// assert_eq!(state.commit(&first).unwrap(), 1);
///
/// let second = Move::step(*state.position(), Heading::EAST, 1.0);
/// assert!(state.commit(&second).is_err());
/// assert_eq!(state.moves_used(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct FlightState {
    position: Point2<f64>,
    moves_used: usize,
    budget: usize,
    log: FlightLog,
    visited: Vec<bool>,
    phase: FlightPhase,
}

impl FlightState {
    /// Creates the state at `start` with `target_count` unvisited targets.
    #[must_use]
    pub fn new(start: Point2<f64>, target_count: usize, budget: usize) -> Self {
        Self {
            position: start,
            moves_used: 0,
            budget,
            log: FlightLog::new(),
            visited: vec![false; target_count],
            phase: FlightPhase::Idle,
        }
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> &Point2<f64> {
        &self.position
    }

    /// Moves committed so far.
    #[must_use]
    pub const fn moves_used(&self) -> usize {
        self.moves_used
    }

    /// Move budget.
    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// Moves still available.
    #[must_use]
    pub const fn remaining_budget(&self) -> usize {
        self.budget.saturating_sub(self.moves_used)
    }

    /// Returns `true` once no further move can be committed.
    #[must_use]
    pub const fn is_budget_spent(&self) -> bool {
        self.moves_used >= self.budget
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> FlightPhase {
        self.phase
    }

    /// Moves to `phase`.
    pub fn enter(&mut self, phase: FlightPhase) {
        debug!(from = ?self.phase, to = ?phase, "flight phase");
        self.phase = phase;
    }

    /// Commits one move and returns its 1-based log index.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::BudgetExhausted`] if the budget is already
    /// spent; nothing is changed in that case.
    pub fn commit(&mut self, mv: &Move) -> Result<usize, RoutingError> {
        if self.is_budget_spent() {
            return Err(RoutingError::BudgetExhausted {
                budget: self.budget,
            });
        }
        self.moves_used += 1;
        self.position = mv.to;
        Ok(self.log.record(mv))
    }

    /// Records target `index` as visited.
    pub fn mark_visited(&mut self, index: usize) {
        if let Some(flag) = self.visited.get_mut(index) {
            *flag = true;
        }
    }

    /// Stamps `id` on the last committed move.
    ///
    /// Returns `false` if no move has been flown yet.
    pub fn stamp_last(&mut self, id: &str) -> bool {
        self.log.stamp_last(id)
    }

    /// Returns `true` if target `index` has been visited.
    #[must_use]
    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.get(index).copied().unwrap_or(false)
    }

    /// Number of visited targets.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }

    /// Log of committed moves.
    #[must_use]
    pub const fn log(&self) -> &FlightLog {
        &self.log
    }

    /// Consumes the state and returns the log.
    #[must_use]
    pub fn into_log(self) -> FlightLog {
        self.log
    }
}
