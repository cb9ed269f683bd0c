//! Result types for densification operations.

// Face counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]

use mesh_types::IndexedMesh;

/// Result of mesh densification.
#[derive(Debug, Clone)]
pub struct DensificationResult {
    /// The densified mesh.
    pub mesh: IndexedMesh,

    /// Number of faces in original mesh.
    pub original_faces: usize,

    /// Number of faces in densified mesh.
    pub final_faces: usize,

    /// Number of vertices in original mesh.
    pub original_vertices: usize,

    /// Number of vertices in densified mesh.
    pub final_vertices: usize,

    /// Number of recursion levels applied.
    pub levels: u32,
}

impl DensificationResult {
    /// Get the face multiplication factor.
    #[must_use]
    pub fn face_ratio(&self) -> f64 {
        if self.original_faces == 0 {
            1.0
        } else {
            self.final_faces as f64 / self.original_faces as f64
        }
    }

    /// Number of centroid vertices appended to the vertex array.
    #[must_use]
    pub const fn added_vertices(&self) -> usize {
        self.final_vertices.saturating_sub(self.original_vertices)
    }

    /// Check if any densification occurred.
    #[must_use]
    pub const fn was_densified(&self) -> bool {
        self.levels > 0 && self.final_faces > self.original_faces
    }

    /// Consume the result and return the densified mesh.
    #[must_use]
    pub fn into_mesh(self) -> IndexedMesh {
        self.mesh
    }
}

impl std::fmt::Display for DensificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Densification: {} → {} faces ({:.1}x), +{} centroids, {} levels",
            self.original_faces,
            self.final_faces,
            self.face_ratio(),
            self.added_vertices(),
            self.levels
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(levels: u32, final_faces: usize, final_vertices: usize) -> DensificationResult {
        DensificationResult {
            mesh: IndexedMesh::new(),
            original_faces: 100,
            final_faces,
            original_vertices: 50,
            final_vertices,
            levels,
        }
    }

    #[test]
    fn test_face_ratio() {
        let result = sample(1, 300, 150);
        assert!((result.face_ratio() - 3.0).abs() < 0.001);
        assert_eq!(result.added_vertices(), 100);
    }

    #[test]
    fn test_was_densified() {
        assert!(!sample(0, 100, 50).was_densified());
        assert!(sample(2, 900, 450).was_densified());
    }

    #[test]
    fn test_display() {
        let display = format!("{}", sample(1, 300, 150));
        assert!(display.contains("100"));
        assert!(display.contains("300"));
        assert!(display.contains("3.0x"));
        assert!(display.contains("+100"));
    }
}
