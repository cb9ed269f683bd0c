//! Mesh densification and fur generation.
//!
//! This umbrella crate re-exports the mesh-* crates behind one API. None of
//! them touch graphics state; rendering backends plug in through
//! [`fur::Renderable`].
//!
//! # Quick Start
//!
//! ```
//! use mesh::prelude::*;
//!
//! // A mesh as a loader would supply it
//! let mut base = mesh::types::unit_tetrahedron();
//! base.normals.clear();
//! base.compute_vertex_normals();
//!
//! // Grow fur, with one extra root per face
//! let fur = FurBuilder::new(&base)
//!     .length(0.2)
//!     .angle_degrees(10.0)
//!     .density(1)
//!     .build()?;
//! assert_eq!(fur.strand_count(), 8);
//!
//! // Or drive models interactively
//! let mut scene = FurScene::new(NullRenderer);
//! let id = scene.add_model(base, FurParams::new())?;
//! scene.apply(FurCommand::IncreaseLength)?;
//! assert_eq!(scene.model(id).map(FurModel::generation), Some(1));
//! # Ok::<(), mesh::fur::FurError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `IndexedMesh`, `Triangle`, `MeshTopology`
//! - [`densify`] - Recursive centroid densification
//! - [`fur`] - Fur extrusion, models, controls and scenes
//!
//! # Feature Flags
//!
//! - `serde` - Serialize/deserialize meshes and parameter types

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `IndexedMesh`, `Triangle`, `MeshTopology`.
pub use mesh_types as types;

/// Recursive centroid densification.
pub use mesh_densify as densify;

/// Fur extrusion, models, controls and scenes.
pub use mesh_fur as fur;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for fur generation.
///
/// # Usage
///
/// ```
/// use mesh::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mesh_types::{IndexedMesh, MeshTopology, Point3, Triangle, Vector3};

    // Densification
    pub use mesh_densify::{DensifyParams, densify_mesh};

    // Fur (main use case)
    pub use mesh_fur::{
        BendProfile, FurBuilder, FurCommand, FurControls, FurGeometry, FurModel, FurParams,
        FurScene, NullRenderer, Renderable, extrude_mesh,
    };
}

// =============================================================================
// Tests
// =============================================================================
