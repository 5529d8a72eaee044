//! Locations a flight must visit.

use nalgebra::Point2;

/// A location to visit, with an opaque external identifier.
///
/// The identifier is never interpreted by the planner; it is copied into the
/// flight log when the visit succeeds. A target without its own tolerance
/// uses the flight-wide default.
///
/// # Example
///
/// ```
/// use route_types::Target;
/// use nalgebra::Point2;
///
/// let target = Target::new("slips.mass.baking", Point2::new(-3.1882, 55.9442));
/// assert_eq!(target.id(), "slips.mass.baking");
/// assert_eq!(target.tolerance_or(0.0002), 0.0002);
///
/// let strict = target.with_tolerance(0.0001);
/// assert_eq!(strict.tolerance(), Some(0.0001));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    id: String,
    point: Point2<f64>,
    tolerance: Option<f64>,
}

impl Target {
    /// Creates a target using the flight-wide tolerance.
    #[must_use]
    pub fn new(id: impl Into<String>, point: Point2<f64>) -> Self {
        Self {
            id: id.into(),
            point,
            tolerance: None,
        }
    }

    /// Overrides the visit tolerance for this target.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Returns the external identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the location.
    #[must_use]
    pub const fn point(&self) -> &Point2<f64> {
        &self.point
    }

    /// Returns the target-specific tolerance, if set.
    #[must_use]
    pub const fn tolerance(&self) -> Option<f64> {
        self.tolerance
    }

    /// Returns the target-specific tolerance or `default`.
    #[must_use]
    pub fn tolerance_or(&self, default: f64) -> f64 {
        self.tolerance.unwrap_or(default)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_target_accessors() {
        let target = Target::new(String::from("a.b.c"), Point2::new(1.0, 2.0));
        assert_eq!(target.id(), "a.b.c");
        assert_eq!(target.point(), &Point2::new(1.0, 2.0));
        assert_eq!(target.tolerance(), None);
        assert_eq!(target.tolerance_or(0.5), 0.5);
    }

    #[test]
    fn test_target_tolerance_override() {
        let target = Target::new("x", Point2::origin()).with_tolerance(0.1);
        assert_eq!(target.tolerance_or(0.5), 0.1);
    }
}
