//! Flight results.

use std::fmt;

use nalgebra::Point2;
use route_types::FlightLog;

/// What happened to one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisitStatus {
    /// Reached within its tolerance.
    Visited,
    /// The search found no path, hit its expansion cap or timed out.
    PathNotFound,
    /// The budget ran out partway through the leg.
    BudgetExhausted,
    /// The leg was flown but the final position was outside the tolerance.
    ///
    /// Set only by the controller's distance re-check after a leg; the
    /// search never returns a path ending outside the tolerance.
    OutOfRange,
    /// The budget was spent before this leg began.
    NotAttempted,
}

impl VisitStatus {
    /// Returns `true` for [`VisitStatus::Visited`].
    #[must_use]
    pub const fn is_visited(self) -> bool {
        matches!(self, Self::Visited)
    }
}

impl fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Visited => "visited",
            Self::PathNotFound => "path not found",
            Self::BudgetExhausted => "budget exhausted",
            Self::OutOfRange => "out of range",
            Self::NotAttempted => "not attempted",
        };
        f.write_str(text)
    }
}

/// Outcome for one target, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitSummary {
    /// Target identifier.
    pub id: String,
    /// What happened.
    pub status: VisitStatus,
}

/// Outcome of the return leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReturnOutcome {
    /// Back within the return tolerance of the start.
    Returned,
    /// The search toward the start failed.
    PathNotFound,
    /// The budget ran out on the way back.
    BudgetExhausted,
    /// The budget was spent before the return leg began.
    Skipped,
}

/// Everything a finished flight produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightReport {
    start: Point2<f64>,
    log: FlightLog,
    visits: Vec<VisitSummary>,
    tour_order: Vec<usize>,
    return_outcome: ReturnOutcome,
}

impl FlightReport {
    /// Assembles a report.
    #[must_use]
    pub const fn new(
        start: Point2<f64>,
        log: FlightLog,
        visits: Vec<VisitSummary>,
        tour_order: Vec<usize>,
        return_outcome: ReturnOutcome,
    ) -> Self {
        Self {
            start,
            log,
            visits,
            tour_order,
            return_outcome,
        }
    }

    /// Start point of the flight.
    #[must_use]
    pub const fn start(&self) -> &Point2<f64> {
        &self.start
    }

    /// Every committed move.
    #[must_use]
    pub const fn log(&self) -> &FlightLog {
        &self.log
    }

    /// Per-target outcomes, in input order.
    #[must_use]
    pub fn visits(&self) -> &[VisitSummary] {
        &self.visits
    }

    /// Planned order over `[start, targets…]`; index 0 is the start.
    #[must_use]
    pub fn tour_order(&self) -> &[usize] {
        &self.tour_order
    }

    /// Number of moves flown.
    #[must_use]
    pub fn total_moves(&self) -> usize {
        self.log.len()
    }

    /// Outcome of the return leg.
    #[must_use]
    pub const fn return_outcome(&self) -> ReturnOutcome {
        self.return_outcome
    }

    /// Number of targets visited.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visits.iter().filter(|v| v.status.is_visited()).count()
    }

    /// Status of the target with identifier `id`.
    #[must_use]
    pub fn status_of(&self, id: &str) -> Option<VisitStatus> {
        self.visits.iter().find(|v| v.id == id).map(|v| v.status)
    }

    /// Returns `true` if every target was visited and the flight returned.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.return_outcome == ReturnOutcome::Returned
            && self.visits.iter().all(|v| v.status.is_visited())
    }

    /// The flown polyline: the start followed by every move endpoint.
    #[must_use]
    pub fn flight_path(&self) -> Vec<Point2<f64>> {
        std::iter::once(self.start)
            .chain(self.log.entries().iter().map(|e| e.to))
            .collect()
    }
}
