//! Error types for compression and wrinkle displacement.

use thiserror::Error;

/// Result type alias for wrinkle operations.
pub type WrinkleResult<T> = Result<T, WrinkleError>;

/// Errors that can occur while computing compression or displacing a mesh.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WrinkleError {
    /// Two buffers that must describe the same vertices have different lengths.
    #[error("{what} has {actual} entries, expected {expected}")]
    ShapeMismatch {
        /// Which buffer is the wrong length.
        what: &'static str,
        /// Length required by the rest state.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// A scalar or vector parameter is outside its valid range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// What the parameter must satisfy.
        reason: &'static str,
    },

    /// An adjacency entry points outside the vertex buffer.
    #[error("vertex {vertex} lists neighbour {neighbor}, but there are only {vertex_count} vertices")]
    InvalidNeighbor {
        /// Vertex whose list holds the bad entry.
        vertex: usize,
        /// The out-of-range neighbour index.
        neighbor: u32,
        /// Number of vertices available.
        vertex_count: usize,
    },
}

impl WrinkleError {
    /// Create a shape mismatch error.
    #[must_use]
    pub const fn shape_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            what,
            expected,
            actual,
        }
    }

    /// Create an invalid parameter error.
    #[must_use]
    pub const fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
