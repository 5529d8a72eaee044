//! Round-trip flight control over a set of targets.
//!
//! This crate ties the tour optimizer and the heading search together: it
//! orders the targets, flies to each one in turn within a move budget, and
//! returns to the start.
//!
//! # Overview
//!
//! - **Controller** ([`controller::FlightController`]): Runs the flight phases
//! - **State** ([`state::FlightState`]): Position, budget, log and visit flags
//! - **Report** ([`report::FlightReport`]): Log, per-target outcomes, tour
//!   order and the flown polyline
//!
//! # Quick Start
//!
//! ```
//! use route_flight::{FlightController, VisitStatus};
//! use route_types::{FlightConfig, Target};
//! use cf_planar::{Bounds, Obstacle};
//! use nalgebra::Point2;
//!
//! let start = Point2::new(-3.1878, 55.9444);
//! let targets = vec![
//!     Target::new("north.gate", Point2::new(-3.1878, 55.9453)),
//!     Target::new("east.gate", Point2::new(-3.1866, 55.9444)),
//! ];
//!
//! // Confine the flight to a campus rectangle
//! let campus = Bounds::new(Point2::new(-3.1920, 55.9420), Point2::new(-3.1840, 55.9470));
//! let obstacles = vec![campus.to_obstacle().unwrap()];
//!
//! let report = FlightController::new(start, targets, obstacles, FlightConfig::default())
//!     .unwrap()
//!     .run();
//!
//! assert_eq!(report.status_of("north.gate"), Some(VisitStatus::Visited));
//! assert!(report.total_moves() <= 150);
//! assert!(report.log().is_continuous_from(&start));
//! ```
//!
//! # Outcomes
//!
//! A flight never fails once constructed. Each target ends in one
//! [`VisitStatus`], and the return leg in one [`ReturnOutcome`].
//!
//! | Situation | Target status |
//! |-----------|---------------|
//! | Reached within tolerance | `Visited` |
//! | No path, expansion cap or timeout | `PathNotFound` |
//! | Budget ran out on the leg | `BudgetExhausted` |
//! | Leg flown, final check failed | `OutOfRange` |
//! | Budget already spent | `NotAttempted` |

#![doc(html_root_url = "https://docs.rs/route-flight/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod controller;
pub mod report;
pub mod state;

// Re-export main types
pub use controller::FlightController;
pub use report::{FlightReport, ReturnOutcome, VisitStatus, VisitSummary};
pub use state::{FlightPhase, FlightState};
