//! End-to-end flight scenarios.
//!
//! Run with: cargo test -p route-flight --test flight_scenarios

#![allow(clippy::unwrap_used)]

use cf_planar::{Bounds, Heading, Obstacle};
use nalgebra::Point2;
use route_flight::{FlightController, FlightReport, ReturnOutcome, VisitStatus};
use route_types::{FlightConfig, SearchConfig, Target};

// =============================================================================
// Helpers
// =============================================================================

fn fly(targets: Vec<Target>, obstacles: Vec<Obstacle>, config: FlightConfig) -> FlightReport {
    FlightController::new(Point2::origin(), targets, obstacles, config)
        .unwrap()
        .run()
}

fn square(center: Point2<f64>, half: f64) -> Obstacle {
    Obstacle::new(vec![
        Point2::new(center.x - half, center.y - half),
        Point2::new(center.x + half, center.y - half),
        Point2::new(center.x + half, center.y + half),
        Point2::new(center.x - half, center.y + half),
    ])
    .unwrap()
}

/// Three targets on the corners of a square with the start on the fourth.
fn square_tour() -> Vec<Target> {
    vec![
        Target::new("t1", Point2::new(0.0024, 0.0)),
        Target::new("t2", Point2::new(0.0024, 0.0024)),
        Target::new("t3", Point2::new(0.0, 0.0024)),
    ]
}

// =============================================================================
// Reaching targets
// =============================================================================

#[test]
fn single_target_in_three_moves() {
    let report = fly(
        vec![Target::new("east", Point2::new(0.0009, 0.0))],
        Vec::new(),
        FlightConfig::default(),
    );

    let entries = report.log().entries();
    assert!(entries.len() >= 3);
    for entry in &entries[..3] {
        assert_eq!(entry.heading, Heading::EAST);
    }
    assert_eq!(entries[2].move_index, 3);
    assert_eq!(entries[2].visited.as_deref(), Some("east"));
    assert!(entries[..2].iter().all(|e| e.visited.is_none()));
    assert_eq!(report.return_outcome(), ReturnOutcome::Returned);
}

#[test]
fn enclosed_target_fails_while_others_succeed() {
    let campus = Bounds::new(Point2::new(-0.005, -0.005), Point2::new(0.005, 0.005));
    let fenced = Point2::new(-0.003, 0.003);
    let obstacles = vec![campus.to_obstacle().unwrap(), square(fenced, 0.0005)];

    let targets = vec![
        Target::new("a", Point2::new(0.0009, 0.0)),
        Target::new("fenced", fenced),
        Target::new("c", Point2::new(0.0, 0.0009)),
    ];
    let report = fly(targets, obstacles, FlightConfig::default());

    assert_eq!(report.status_of("a"), Some(VisitStatus::Visited));
    assert_eq!(report.status_of("c"), Some(VisitStatus::Visited));
    assert_eq!(report.status_of("fenced"), Some(VisitStatus::PathNotFound));
    assert_eq!(report.visited_count(), 2);
    assert!(!report.is_complete());

    let stamped: Vec<&str> = report.log().visited_ids().collect();
    assert_eq!(stamped.len(), 2);
    assert!(!stamped.contains(&"fenced"));

    assert!(report.log().is_continuous_from(&Point2::origin()));
    assert_eq!(report.return_outcome(), ReturnOutcome::Returned);
}

// =============================================================================
// Move budget
// =============================================================================

#[test]
fn budget_cuts_flight_short() {
    let config = FlightConfig::default().with_move_budget(10);
    let report = fly(square_tour(), Vec::new(), config);

    // 8 moves to t1, 2 toward t2, none after
    assert_eq!(report.total_moves(), 10);
    assert_eq!(report.status_of("t1"), Some(VisitStatus::Visited));
    assert_eq!(report.status_of("t2"), Some(VisitStatus::BudgetExhausted));
    assert_eq!(report.status_of("t3"), Some(VisitStatus::NotAttempted));
    assert_eq!(report.return_outcome(), ReturnOutcome::Skipped);
    assert_eq!(report.log().entries()[7].visited.as_deref(), Some("t1"));
}

#[test]
fn budget_never_exceeded() {
    for budget in 0..=40 {
        let config = FlightConfig::default().with_move_budget(budget);
        let report = fly(square_tour(), Vec::new(), config);

        assert!(report.total_moves() <= budget, "budget {budget}");
        assert!(report.log().is_continuous_from(&Point2::origin()));
        for (i, entry) in report.log().entries().iter().enumerate() {
            assert_eq!(entry.move_index, i + 1);
        }
    }
}

#[test]
fn generous_budget_completes_round_trip() {
    let report = fly(square_tour(), Vec::new(), FlightConfig::default());

    assert!(report.is_complete());
    assert_eq!(report.tour_order(), &[0, 1, 2, 3]);
    let stamped: Vec<&str> = report.log().visited_ids().collect();
    assert_eq!(stamped, vec!["t1", "t2", "t3"]);
}

// =============================================================================
// Return leg
// =============================================================================

#[test]
fn failed_return_is_recorded() {
    // Each outbound leg takes three expansions; the way back needs six
    let search = SearchConfig::default().with_max_expansions(4);
    let config = FlightConfig::default()
        .with_search(search)
        .with_return_tolerance(0.0001);
    let targets = vec![
        Target::new("near", Point2::new(0.0009, 0.0)),
        Target::new("far", Point2::new(0.0018, 0.0)),
    ];
    let report = fly(targets, Vec::new(), config);

    assert_eq!(report.status_of("near"), Some(VisitStatus::Visited));
    assert_eq!(report.status_of("far"), Some(VisitStatus::Visited));
    assert_eq!(report.return_outcome(), ReturnOutcome::PathNotFound);
    assert_eq!(report.total_moves(), 6);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn repeated_flights_match() {
    let obstacles = vec![square(Point2::new(0.0012, 0.0012), 0.0003)];
    let first = fly(square_tour(), obstacles.clone(), FlightConfig::default());
    let second = fly(square_tour(), obstacles, FlightConfig::default());
    assert_eq!(first, second);
}
