//! The per-move flight log.

use cf_planar::Heading;
use nalgebra::Point2;

use crate::path::Move;

/// One committed move.
///
/// `move_index` is 1-based and contiguous across the whole flight.
/// `visited` carries the target identifier on the last move of a leg that
/// reached its target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    /// 1-based position of this move in the flight.
    pub move_index: usize,
    /// Position before the move.
    pub from: Point2<f64>,
    /// Direction of travel.
    pub heading: Heading,
    /// Position after the move.
    pub to: Point2<f64>,
    /// Identifier of the target visited on arrival, if any.
    pub visited: Option<String>,
}

/// Ordered record of every committed move.
///
/// # Example
///
/// ```
/// use route_types::{FlightLog, Move};
/// use cf_planar::Heading;
/// use nalgebra::Point2;
///
/// let mut log = FlightLog::new();
/// log.record(&Move::step(Point2::origin(), Heading::EAST, 1.0));
/// log.stamp_last("first.target.id");
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.entries()[0].move_index, 1);
/// assert_eq!(log.entries()[0].visited.as_deref(), Some("first.target.id"));
/// assert!(log.is_continuous_from(&Point2::origin()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightLog {
    entries: Vec<LogEntry>,
}

impl FlightLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a move and returns its 1-based index.
    pub fn record(&mut self, mv: &Move) -> usize {
        let move_index = self.entries.len() + 1;
        self.entries.push(LogEntry {
            move_index,
            from: mv.from,
            heading: mv.heading,
            to: mv.to,
            visited: None,
        });
        move_index
    }

    /// Marks the most recent entry as visiting `id`.
    ///
    /// Returns `false` if the log is empty.
    pub fn stamp_last(&mut self, id: impl Into<String>) -> bool {
        match self.entries.last_mut() {
            Some(entry) => {
                entry.visited = Some(id.into());
                true
            }
            None => false,
        }
    }

    /// Returns all entries.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifiers stamped on entries, in flight order.
    pub fn visited_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().filter_map(|e| e.visited.as_deref())
    }

    /// Returns `true` if indices run `1..=len` and each entry starts where
    /// the previous one ended, the first one at `start`.
    #[must_use]
    pub fn is_continuous_from(&self, start: &Point2<f64>) -> bool {
        let mut at = *start;
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.move_index != i + 1 || entry.from != at {
                return false;
            }
            at = entry.to;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_assigns_contiguous_indices() {
        let mut log = FlightLog::new();
        let mut at = Point2::origin();
        for expected in 1..=3 {
            let mv = Move::step(at, Heading::NORTH, 0.5);
            assert_eq!(log.record(&mv), expected);
            at = mv.to;
        }
        assert_eq!(log.len(), 3);
        assert!(log.is_continuous_from(&Point2::origin()));
        assert!(!log.is_continuous_from(&Point2::new(1.0, 0.0)));
        assert_eq!(log.last().map(|e| e.move_index), Some(3));
    }

    #[test]
    fn test_stamp_last() {
        let mut log = FlightLog::new();
        assert!(!log.stamp_last("nothing"));

        log.record(&Move::step(Point2::origin(), Heading::EAST, 1.0));
        log.record(&Move::step(Point2::new(1.0, 0.0), Heading::EAST, 1.0));
        assert!(log.stamp_last("b"));

        assert!(log.entries()[0].visited.is_none());
        assert_eq!(log.visited_ids().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_broken_chain_detected() {
        let mut log = FlightLog::new();
        log.record(&Move::step(Point2::origin(), Heading::EAST, 1.0));
        log.record(&Move::step(Point2::new(9.0, 9.0), Heading::EAST, 1.0));
        assert!(!log.is_continuous_from(&Point2::origin()));
    }
}
