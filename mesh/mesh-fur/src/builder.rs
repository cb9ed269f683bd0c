//! Fluent builder API for fur generation.
//!
//! # Example
//!
//! ```
//! use mesh_fur::FurBuilder;
//! use mesh_types::unit_tetrahedron;
//!
//! let mesh = unit_tetrahedron();
//! let fur = FurBuilder::new(&mesh)
//!     .length(0.2)
//!     .angle_degrees(15.0)
//!     .density(1)
//!     .build()?;
//!
//! assert_eq!(fur.strand_count(), 8);
//! # Ok::<(), mesh_fur::FurError>(())
//! ```

use mesh_types::IndexedMesh;

use crate::error::FurResult;
use crate::extrude::extrude_mesh;
use crate::geometry::FurGeometry;
use crate::params::{BendProfile, FurParams};

/// Fluent builder for fur generation.
///
/// `FurBuilder` provides a chainable API for configuring fur parameters
/// before extruding strands from a mesh.
#[derive(Debug, Clone)]
pub struct FurBuilder<'a> {
    mesh: &'a IndexedMesh,
    params: FurParams,
}

impl<'a> FurBuilder<'a> {
    /// Create a new `FurBuilder` for the given mesh with default parameters.
    #[must_use]
    pub fn new(mesh: &'a IndexedMesh) -> Self {
        Self {
            mesh,
            params: FurParams::default(),
        }
    }

    /// Start from existing parameters.
    #[must_use]
    pub const fn with_params(mesh: &'a IndexedMesh, params: FurParams) -> Self {
        Self { mesh, params }
    }

    /// Set the strand length.
    #[must_use]
    pub const fn length(mut self, length: f32) -> Self {
        self.params.length = length;
        self
    }

    /// Set the bend angle in radians.
    #[must_use]
    pub const fn angle(mut self, angle: f32) -> Self {
        self.params.angle = angle;
        self
    }

    /// Set the bend angle in degrees.
    #[must_use]
    pub fn angle_degrees(mut self, degrees: f32) -> Self {
        self.params.angle = degrees.to_radians();
        self
    }

    /// Set the densification level.
    #[must_use]
    pub const fn density(mut self, density: u32) -> Self {
        self.params.density = density;
        self
    }

    /// Set the bend profile.
    #[must_use]
    pub const fn bend(mut self, bend: BendProfile) -> Self {
        self.params.bend = bend;
        self
    }

    /// The parameters configured so far.
    #[must_use]
    pub const fn params(&self) -> &FurParams {
        &self.params
    }

    /// Extrude the fur.
    ///
    /// # Errors
    ///
    /// See [`crate::extrude`].
    pub fn build(self) -> FurResult<FurGeometry> {
        extrude_mesh(self.mesh, &self.params)
    }
}
