//! The set of headings a search may move along.

use cf_planar::Heading;

use crate::error::RoutingError;

/// A non-empty, de-duplicated, ascending set of allowed headings.
///
/// The set is an explicit value handed to every search; there is no global
/// direction table.
///
/// # Example
///
/// ```
/// use route_types::HeadingSet;
/// use cf_planar::Heading;
///
/// let set = HeadingSet::uniform(90).unwrap();
/// assert_eq!(set.len(), 4);
/// assert!(set.contains(Heading::NORTH));
///
/// let custom = HeadingSet::from_headings([Heading::new(270), Heading::EAST, Heading::EAST]).unwrap();
/// assert_eq!(custom.as_slice(), &[Heading::EAST, Heading::SOUTH]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "HeadingSetRepr"))]
pub struct HeadingSet {
    headings: Vec<Heading>,
}

impl HeadingSet {
    /// Builds `0°, step, 2·step, …` up to but excluding 360°.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] if `step` is zero or 360 and above.
    pub fn uniform(step: u16) -> Result<Self, RoutingError> {
        if step == 0 || step >= 360 {
            return Err(RoutingError::invalid_config(format!(
                "heading step must be in 1..360, got {step}"
            )));
        }
        Ok(Self {
            headings: (0..360).step_by(usize::from(step)).map(Heading::new).collect(),
        })
    }

    /// Builds a set from arbitrary headings, sorting and removing duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] if no heading is given.
    pub fn from_headings(headings: impl IntoIterator<Item = Heading>) -> Result<Self, RoutingError> {
        let mut headings: Vec<Heading> = headings.into_iter().collect();
        headings.sort_unstable();
        headings.dedup();
        if headings.is_empty() {
            return Err(RoutingError::invalid_config("heading set must not be empty"));
        }
        Ok(Self { headings })
    }

    /// Number of distinct headings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.headings.len()
    }

    /// Always `false`; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    /// Returns `true` if `heading` is allowed.
    #[must_use]
    pub fn contains(&self, heading: Heading) -> bool {
        self.headings.binary_search(&heading).is_ok()
    }

    /// Headings in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[Heading] {
        &self.headings
    }

    /// Iterates over headings in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Heading> + '_ {
        self.headings.iter().copied()
    }
}

impl Default for HeadingSet {
    /// Every 10°, 36 headings.
    fn default() -> Self {
        Self {
            headings: (0..360).step_by(10).map(Heading::new).collect(),
        }
    }
}

/// Wire form of [`HeadingSet`]; decoding sorts, de-duplicates and rejects
/// an empty list.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HeadingSetRepr {
    headings: Vec<Heading>,
}

#[cfg(feature = "serde")]
impl TryFrom<HeadingSetRepr> for HeadingSet {
    type Error = RoutingError;

    fn try_from(repr: HeadingSetRepr) -> Result<Self, Self::Error> {
        Self::from_headings(repr.headings)
    }
}
