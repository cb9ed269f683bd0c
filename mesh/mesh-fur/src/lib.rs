//! Fur strand generation for triangle meshes.
//!
//! Every vertex of a mesh grows one strand made of two line segments: a
//! straight inner segment along the vertex normal covering a third of the
//! strand length, and an outer segment bent by a fixed angle. Denser fur is
//! obtained by densifying the mesh first, which adds strand roots at face
//! centroids while leaving the rendered mesh untouched.
//!
//! # Layers
//!
//! - [`extrude`], [`extrude_mesh`], [`extrude_strands`]: pure functions from
//!   buffers and [`FurParams`] to [`FurGeometry`].
//! - [`FurBuilder`]: fluent configuration over a borrowed mesh.
//! - [`FurModel`]: a base mesh and its current fur, rebuilt in place when
//!   the parameters change.
//! - [`FurControls`] and [`FurCommand`]: the interactive control surface.
//! - [`FurScene`]: models plus a [`Renderable`] backend that receives every
//!   rebuilt buffer.
//!
//! # Example
//!
//! ```
//! use mesh_fur::{BendProfile, FurParams, extrude_mesh};
//! use mesh_types::unit_tetrahedron;
//!
//! let mesh = unit_tetrahedron();
//! let params = FurParams::new()
//!     .with_length(0.3)
//!     .with_angle_degrees(20.0)
//!     .with_density(1)
//!     .with_bend(BendProfile::Tilted);
//!
//! let fur = extrude_mesh(&mesh, &params)?;
//!
//! // 4 vertices + 4 face centroids, four line points each
//! assert_eq!(fur.strand_count(), 8);
//! assert_eq!(fur.vertices.len(), 32);
//! # Ok::<(), mesh_fur::FurError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod builder;
mod control;
mod error;
mod extrude;
mod geometry;
mod model;
mod params;
mod render;
mod scene;
mod strand;

pub use builder::FurBuilder;
pub use control::{
    ControlOutcome, DEFAULT_LENGTH_STEP, DEFAULT_MAX_DENSITY, DEFAULT_MAX_RANDOM_ANGLE, FurCommand,
    FurControls,
};
pub use error::{FurError, FurResult};
pub use extrude::{extrude, extrude_mesh, extrude_strands};
pub use geometry::{FurGeometry, LineVertex, POINTS_PER_STRAND, Primitive};
pub use model::{FurModel, ModelId};
pub use params::{BendProfile, DEFAULT_FUR_LENGTH, FurParams, ROOT_FRACTION};
pub use render::{NullRenderer, Renderable};
pub use scene::FurScene;
pub use strand::FurStrand;
