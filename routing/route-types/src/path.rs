//! Discrete move sequences.
//!
//! A [`MovePath`] is a start point followed by fixed-length [`Move`]s, each
//! along a quantized heading. It is what the search engine returns and what
//! the flight controller commits one move at a time.
//!
//! # Example
//!
//! ```
//! use route_types::{Move, MovePath};
//! use cf_planar::Heading;
//! use nalgebra::Point2;
//!
//! let mut path = MovePath::new(Point2::new(0.0, 0.0));
//! path.push(Move::step(*path.end(), Heading::EAST, 1.0));
//! path.push(Move::step(*path.end(), Heading::NORTH, 1.0));
//!
//! assert_eq!(path.len(), 2);
//! assert!((path.end().x - 1.0).abs() < 1e-12);
//! assert!((path.end().y - 1.0).abs() < 1e-12);
//! assert!((path.length() - 2.0).abs() < 1e-12);
//! ```

use cf_planar::{Heading, distance, translate};
use nalgebra::Point2;

/// One fixed-length move along a heading.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Position before the move.
    pub from: Point2<f64>,
    /// Direction of travel.
    pub heading: Heading,
    /// Position after the move.
    pub to: Point2<f64>,
}

impl Move {
    /// Creates a move from explicit endpoints.
    #[must_use]
    pub const fn new(from: Point2<f64>, heading: Heading, to: Point2<f64>) -> Self {
        Self { from, heading, to }
    }

    /// Creates a move of `length` from `from` along `heading`.
    #[must_use]
    pub fn step(from: Point2<f64>, heading: Heading, length: f64) -> Self {
        Self {
            from,
            heading,
            to: translate(&from, length, heading),
        }
    }

    /// Distance covered by this move.
    #[must_use]
    pub fn length(&self) -> f64 {
        distance(&self.from, &self.to)
    }
}

/// A start point followed by an ordered sequence of moves.
///
/// Each move's `from` is expected to equal the previous move's `to`; use
/// [`MovePath::is_continuous`] to check.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovePath {
    start: Point2<f64>,
    moves: Vec<Move>,
}

impl MovePath {
    /// Creates an empty path at `start`.
    #[must_use]
    pub const fn new(start: Point2<f64>) -> Self {
        Self {
            start,
            moves: Vec::new(),
        }
    }

    /// Creates a path from a start point and moves.
    #[must_use]
    pub const fn from_moves(start: Point2<f64>, moves: Vec<Move>) -> Self {
        Self { start, moves }
    }

    /// Appends a move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Returns the start point.
    #[must_use]
    pub const fn start(&self) -> &Point2<f64> {
        &self.start
    }

    /// Returns the final position (the start if there are no moves).
    #[must_use]
    pub fn end(&self) -> &Point2<f64> {
        self.moves.last().map_or(&self.start, |mv| &mv.to)
    }

    /// Returns the moves in order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Consumes the path and returns its moves.
    #[must_use]
    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if the path has no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Sum of move lengths.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.moves.iter().map(Move::length).sum()
    }

    /// Headings of each move in order.
    pub fn headings(&self) -> impl Iterator<Item = Heading> + '_ {
        self.moves.iter().map(|mv| mv.heading)
    }

    /// Start point followed by every move endpoint.
    #[must_use]
    pub fn points(&self) -> Vec<Point2<f64>> {
        std::iter::once(self.start)
            .chain(self.moves.iter().map(|mv| mv.to))
            .collect()
    }

    /// Returns `true` if every move starts where the previous one ended.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        let mut at = self.start;
        for mv in &self.moves {
            if mv.from != at {
                return false;
            }
            at = mv.to;
        }
        true
    }
}
