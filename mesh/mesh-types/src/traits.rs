//! Read-only mesh access.

use crate::Triangle;
use nalgebra::{Point3, Vector3};

/// Indexed access to vertices, their normals and triangle faces.
pub trait MeshTopology {
    /// Get the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Get the number of faces (triangles).
    fn face_count(&self) -> usize;

    /// Check if there are no vertices.
    ///
    /// A vertex set without faces is not empty; fur can still grow from it.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Get a vertex position by index.
    ///
    /// Returns `None` if the index is out of bounds.
    fn vertex(&self, index: usize) -> Option<Point3<f32>>;

    /// Get the normal paired with a vertex.
    ///
    /// Returns `None` if the index is out of bounds.
    fn normal(&self, index: usize) -> Option<Vector3<f32>>;

    /// Get a face by index.
    ///
    /// Returns `None` if the index is out of bounds.
    /// The returned array contains vertex indices.
    fn face(&self, index: usize) -> Option<[u32; 3]>;

    /// Get a triangle by face index with resolved vertex positions.
    ///
    /// Returns `None` if the face index or any of its vertex indices is out
    /// of bounds.
    fn triangle(&self, face_index: usize) -> Option<Triangle>;

    /// Iterate over all faces as vertex index triples.
    fn faces(&self) -> impl Iterator<Item = [u32; 3]>;
}
