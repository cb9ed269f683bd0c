//! Densification parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default face budget for a densified mesh.
pub const DEFAULT_MAX_FACES: usize = 10_000_000; // 10M faces max

/// Parameters for mesh densification.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DensifyParams {
    /// Recursion depth. Each level replaces every face with three.
    pub levels: u32,

    /// Maximum faces allowed in result (prevents memory blow-up).
    pub max_faces: usize,

    /// Process faces on the rayon thread pool.
    ///
    /// Output is identical to the sequential path.
    pub parallel: bool,
}

impl Default for DensifyParams {
    fn default() -> Self {
        Self {
            levels: 1,
            max_faces: DEFAULT_MAX_FACES,
            parallel: false,
        }
    }
}

impl DensifyParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of recursion levels.
    #[must_use]
    pub const fn with_levels(mut self, levels: u32) -> Self {
        self.levels = levels;
        self
    }

    /// Set maximum faces allowed.
    #[must_use]
    pub const fn with_max_faces(mut self, max_faces: usize) -> Self {
        self.max_faces = max_faces;
        self
    }

    /// Enable or disable parallel face processing.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of leaf faces produced from one input face (`3^levels`).
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub const fn faces_per_face(&self) -> Option<usize> {
        3usize.checked_pow(self.levels)
    }

    /// Number of centroid vertices inserted for one input face
    /// (`(3^levels - 1) / 2`).
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub const fn centroids_per_face(&self) -> Option<usize> {
        match self.faces_per_face() {
            Some(faces) => Some((faces - 1) / 2),
            None => None,
        }
    }

    /// Calculate expected face count after densification.
    ///
    /// Each level multiplies face count by 3. Returns `None` on overflow.
    #[must_use]
    pub const fn expected_faces(&self, current_faces: usize) -> Option<usize> {
        match self.faces_per_face() {
            Some(per_face) => current_faces.checked_mul(per_face),
            None => None,
        }
    }

    /// Calculate expected vertex count after densification.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub const fn expected_vertices(
        &self,
        current_vertices: usize,
        current_faces: usize,
    ) -> Option<usize> {
        match self.centroids_per_face() {
            Some(per_face) => match current_faces.checked_mul(per_face) {
                Some(added) => current_vertices.checked_add(added),
                None => None,
            },
            None => None,
        }
    }
}
