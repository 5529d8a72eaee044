//! Quantized travel headings.

use std::fmt;

use nalgebra::Vector2;

/// A travel direction in whole degrees, normalized to `[0, 360)`.
///
/// Angles are measured counter-clockwise from the +X axis, so
/// [`Heading::EAST`] is 0° and [`Heading::NORTH`] is 90°.
///
/// # Example
///
/// ```
/// use cf_planar::Heading;
///
/// assert_eq!(Heading::new(370).degrees(), 10);
/// assert_eq!(Heading::from(450), Heading::NORTH);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u16"))]
pub struct Heading(u16);

impl Heading {
    /// 0°, along +X.
    pub const EAST: Self = Self(0);
    /// 90°, along +Y.
    pub const NORTH: Self = Self(90);
    /// 180°, along -X.
    pub const WEST: Self = Self(180);
    /// 270°, along -Y.
    pub const SOUTH: Self = Self(270);

    /// Creates a heading, wrapping values of 360 and above.
    #[must_use]
    pub const fn new(degrees: u16) -> Self {
        Self(degrees % 360)
    }

    /// Returns the heading in degrees.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        self.0
    }

    /// Returns the heading in radians.
    #[must_use]
    pub fn radians(self) -> f64 {
        f64::from(self.0).to_radians()
    }

    /// Returns the unit direction vector `(cos θ, sin θ)`.
    ///
    /// The four cardinal headings return exact axis vectors so that moves
    /// along them do not pick up rounding drift on the other axis.
    #[must_use]
    pub fn unit_vector(self) -> Vector2<f64> {
        match self.0 {
            0 => Vector2::new(1.0, 0.0),
            90 => Vector2::new(0.0, 1.0),
            180 => Vector2::new(-1.0, 0.0),
            270 => Vector2::new(0.0, -1.0),
            _ => {
                let (sin, cos) = self.radians().sin_cos();
                Vector2::new(cos, sin)
            }
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl From<u16> for Heading {
    fn from(degrees: u16) -> Self {
        Self::new(degrees)
    }
}
