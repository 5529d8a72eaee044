//! Error types for planar geometry.

/// Errors that can occur while building geometry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PlanarError {
    /// A polygon ring needs at least three distinct vertices.
    #[error("obstacle ring needs at least 3 vertices, got {vertices}")]
    DegenerateObstacle {
        /// Number of vertices after dropping a closing duplicate.
        vertices: usize,
    },

    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate {
        /// X component.
        x: f64,
        /// Y component.
        y: f64,
    },

    /// Bounds with zero width or height cannot enclose anything.
    #[error("bounds have zero area: width {width}, height {height}")]
    InvalidBounds {
        /// Extent along X.
        width: f64,
        /// Extent along Y.
        height: f64,
    },
}
