//! Error types for fur generation.
//!
//! Failures are precondition violations in the mesh handed over by the
//! loader. They are surfaced to the caller rather than recovered from.

use mesh_densify::DensifyError;
use thiserror::Error;

/// Result type alias for fur operations.
pub type FurResult<T> = Result<T, FurError>;

/// Errors that can occur during fur generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FurError {
    /// Vertex and normal arrays differ in length.
    #[error("fur input has {vertices} vertices but {normals} normals")]
    InputShapeMismatch {
        /// Number of vertices.
        vertices: usize,
        /// Number of normals.
        normals: usize,
    },

    /// Densifying the strand roots failed.
    #[error("densification failed: {0}")]
    Densify(#[from] DensifyError),
}

impl FurError {
    /// Create a shape mismatch error.
    #[must_use]
    pub const fn shape_mismatch(vertices: usize, normals: usize) -> Self {
        Self::InputShapeMismatch { vertices, normals }
    }
}
