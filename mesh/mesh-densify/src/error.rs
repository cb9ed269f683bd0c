//! Error types for mesh densification.

use thiserror::Error;

/// Errors that can occur during densification.
///
/// Every variant is a precondition failure detected before any output
/// buffer is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DensifyError {
    /// A face references a vertex outside the vertex array.
    #[error("Face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    InvalidIndex {
        /// Position of the offending face in the face list.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A face is not a triangle.
    #[error("Face {face} has {arity} vertices; only triangles can be densified")]
    UnsupportedFaceArity {
        /// Position of the offending face in the face list.
        face: usize,
        /// Number of vertex indices in the face.
        arity: usize,
    },

    /// Vertex and normal arrays differ in length.
    #[error("Mesh has {vertices} vertices but {normals} normals")]
    InputShapeMismatch {
        /// Number of vertices.
        vertices: usize,
        /// Number of normals.
        normals: usize,
    },

    /// Mesh would exceed maximum size.
    #[error("Densification would exceed maximum mesh size ({current} -> {projected} faces, max {max})")]
    MeshTooLarge {
        /// Current face count.
        current: usize,
        /// Projected face count after densification (saturated on overflow).
        projected: usize,
        /// Maximum allowed face count.
        max: usize,
    },
}

/// Result type for densification operations.
pub type DensifyResult<T> = std::result::Result<T, DensifyError>;
