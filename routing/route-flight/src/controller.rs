//! The round-trip flight controller.
//!
//! A flight runs in four phases:
//!
//! 1. **Planning**: the optimizer orders `[start, targets…]`.
//! 2. **En route**: each target is searched for from the current position
//!    and the resulting moves are committed one at a time against the
//!    budget. A target counts as visited only if the final position is
//!    strictly within its tolerance.
//! 3. **Returning**: one search back toward the start.
//! 4. **Complete**.
//!
//! Failures on a single leg are recorded in the report and the flight
//! carries on with the next target.

use cf_planar::{Obstacle, distance, ensure_finite};
use nalgebra::Point2;
use route_optimize::TourOptimizer;
use route_pathfind::HeadingSearch;
use route_types::{FlightConfig, RoutingError, Target};
use tracing::{debug, info, warn};

use crate::report::{FlightReport, ReturnOutcome, VisitStatus, VisitSummary};
use crate::state::{FlightPhase, FlightState};

/// Result of flying one leg.
#[derive(Debug)]
enum Leg {
    /// Within tolerance after `moves` committed moves.
    Arrived { moves: usize },
    /// The search failed.
    NoPath(RoutingError),
    /// A commit was refused partway.
    OutOfBudget { moves: usize },
    /// All moves committed but the end is outside the tolerance. The search
    /// only returns paths ending inside it, so this is a re-check that should
    /// not fire.
    Short { remaining: f64 },
}

/// Plans and flies a round trip over a set of targets.
///
/// # Example
///
/// ```
/// use route_flight::{FlightController, ReturnOutcome, VisitStatus};
/// use route_types::{FlightConfig, Target};
/// use nalgebra::Point2;
///
/// let targets = vec![Target::new("east", Point2::new(0.0009, 0.0))];
///
/// let controller =
///     FlightController::new(Point2::origin(), targets, Vec::new(), FlightConfig::default())
///         .unwrap();
/// let report = controller.run();
///
/// assert_eq!(report.status_of("east"), Some(VisitStatus::Visited));
/// assert_eq!(report.return_outcome(), ReturnOutcome::Returned);
/// assert!(report.log().is_continuous_from(&Point2::origin()));
/// ```
#[derive(Debug, Clone)]
pub struct FlightController {
    start: Point2<f64>,
    targets: Vec<Target>,
    obstacles: Vec<Obstacle>,
    config: FlightConfig,
    optimizer: TourOptimizer,
}

impl FlightController {
    /// Validates the inputs and prepares the tour.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] for an invalid configuration
    /// or a non-positive target tolerance, and [`RoutingError::Geometry`]
    /// for a non-finite start or target or an obstacle with fewer than
    /// three vertices.
    pub fn new(
        start: Point2<f64>,
        targets: Vec<Target>,
        obstacles: Vec<Obstacle>,
        config: FlightConfig,
    ) -> Result<Self, RoutingError> {
        config.validate()?;
        ensure_finite(&start)?;
        for obstacle in &obstacles {
            obstacle.validate()?;
        }

        for target in &targets {
            ensure_finite(target.point())?;
            let tolerance = target.tolerance_or(config.target_tolerance());
            if !tolerance.is_finite() || tolerance <= 0.0 {
                return Err(RoutingError::invalid_config(format!(
                    "tolerance of target {} must be positive and finite, got {tolerance}",
                    target.id()
                )));
            }
        }

        let points: Vec<Point2<f64>> = std::iter::once(start)
            .chain(targets.iter().map(|t| *t.point()))
            .collect();
        let optimizer = TourOptimizer::new(&points, *config.tour())?;

        Ok(Self {
            start,
            targets,
            obstacles,
            config,
            optimizer,
        })
    }

    /// Start point.
    #[must_use]
    pub const fn start(&self) -> &Point2<f64> {
        &self.start
    }

    /// Targets in input order.
    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Obstacles every move must avoid.
    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Flight configuration.
    #[must_use]
    pub const fn config(&self) -> &FlightConfig {
        &self.config
    }

    /// Flies the whole round trip.
    ///
    /// Never fails: unreachable targets, a spent budget and a failed return
    /// are all recorded in the report.
    #[must_use]
    pub fn run(mut self) -> FlightReport {
        let mut state = FlightState::new(self.start, self.targets.len(), self.config.move_budget());

        state.enter(FlightPhase::Planning);
        self.optimizer.optimize();
        let order = self.optimizer.visit_order().to_vec();

        let search = HeadingSearch::new(&self.obstacles, self.config.search().clone());
        let mut statuses = vec![VisitStatus::NotAttempted; self.targets.len()];

        state.enter(FlightPhase::EnRoute);
        for &point_index in order.iter().skip(1) {
            let index = point_index - 1;
            let Some(target) = self.targets.get(index) else {
                continue;
            };

            if state.is_budget_spent() {
                warn!(id = target.id(), "budget spent; target not attempted");
                continue;
            }

            let tolerance = target.tolerance_or(self.config.target_tolerance());
            statuses[index] = match fly(&search, &mut state, *target.point(), tolerance) {
                Leg::Arrived { moves } => {
                    state.mark_visited(index);
                    if moves > 0 {
                        state.stamp_last(target.id());
                    }
                    debug!(id = target.id(), moves, "target visited");
                    VisitStatus::Visited
                }
                Leg::NoPath(err) => {
                    warn!(id = target.id(), error = %err, "skipping unreachable target");
                    VisitStatus::PathNotFound
                }
                Leg::OutOfBudget { moves } => {
                    warn!(
                        id = target.id(),
                        moves,
                        budget = state.budget(),
                        "budget exhausted en route"
                    );
                    VisitStatus::BudgetExhausted
                }
                Leg::Short { remaining } => {
                    warn!(id = target.id(), remaining, tolerance, "arrived out of range");
                    VisitStatus::OutOfRange
                }
            };
        }

        state.enter(FlightPhase::Returning);
        let return_outcome = self.fly_home(&search, &mut state);

        state.enter(FlightPhase::Complete);

        let visits: Vec<VisitSummary> = self
            .targets
            .iter()
            .zip(statuses)
            .map(|(target, status)| VisitSummary {
                id: target.id().to_owned(),
                status,
            })
            .collect();

        info!(
            targets = self.targets.len(),
            visited = state.visited_count(),
            moves = state.moves_used(),
            budget = state.budget(),
            ?return_outcome,
            "flight complete"
        );

        FlightReport::new(self.start, state.into_log(), visits, order, return_outcome)
    }

    fn fly_home(&self, search: &HeadingSearch<'_>, state: &mut FlightState) -> ReturnOutcome {
        let tolerance = self.config.return_tolerance();

        if state.is_budget_spent() {
            if distance(state.position(), &self.start) < tolerance {
                return ReturnOutcome::Returned;
            }
            warn!(budget = state.budget(), "budget spent; return skipped");
            return ReturnOutcome::Skipped;
        }

        match fly(search, state, self.start, tolerance) {
            Leg::Arrived { moves } => {
                debug!(moves, "returned to start");
                ReturnOutcome::Returned
            }
            Leg::NoPath(err) => {
                warn!(error = %err, "no path back to start");
                ReturnOutcome::PathNotFound
            }
            Leg::OutOfBudget { moves } => {
                warn!(moves, budget = state.budget(), "budget exhausted on return");
                ReturnOutcome::BudgetExhausted
            }
            Leg::Short { remaining } => {
                warn!(remaining, tolerance, "return ended out of range");
                ReturnOutcome::PathNotFound
            }
        }
    }
}

/// Searches from the current position to `goal` and commits the moves.
fn fly(search: &HeadingSearch<'_>, state: &mut FlightState, goal: Point2<f64>, tolerance: f64) -> Leg {
    let outcome = match search.find_path(*state.position(), goal, tolerance) {
        Ok(outcome) => outcome,
        Err(err) => return Leg::NoPath(err),
    };

    let stats = *outcome.stats();
    let path = outcome.into_path();
    debug!(
        moves = path.len(),
        expanded = stats.nodes_expanded(),
        frontier = stats.frontier_size(),
        elapsed = ?stats.time_elapsed(),
        "leg planned"
    );

    let mut moves = 0;
    for mv in path.into_moves() {
        if state.commit(&mv).is_err() {
            return Leg::OutOfBudget { moves };
        }
        moves += 1;
    }

    let remaining = distance(state.position(), &goal);
    if remaining < tolerance {
        Leg::Arrived { moves }
    } else {
        Leg::Short { remaining }
    }
}
