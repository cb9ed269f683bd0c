//! Error types for mesh construction.

use thiserror::Error;

/// Result type alias for mesh construction.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors raised while building a mesh from loader buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Position and normal buffers describe different vertex counts.
    #[error("mesh buffers hold {vertices} positions but {normals} normals")]
    InputShapeMismatch {
        /// Number of positions.
        vertices: usize,
        /// Number of normals.
        normals: usize,
    },
}
