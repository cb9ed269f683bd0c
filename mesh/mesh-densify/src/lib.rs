//! Recursive centroid densification for triangle meshes.
//!
//! Densification adds a vertex at the centroid of every face and splits the
//! face into three triangles that share it. Repeating this `levels` times
//! yields `3^levels` faces and `(3^levels - 1) / 2` new vertices per input
//! face. Normals are densified alongside positions using the plain
//! arithmetic mean of the corner normals.
//!
//! The fur extruder uses this to add strand roots inside faces without
//! touching the mesh that is rendered.
//!
//! # Examples
//!
//! Densify raw buffers:
//!
//! ```
//! use mesh_densify::densify;
//! use mesh_types::{Point3, Vector3};
//!
//! let vertices = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let normals = [Vector3::z(); 3];
//! let faces = [[0u32, 1, 2]];
//!
//! let mesh = densify(&vertices, &normals, &faces, 2)?;
//!
//! // 1 * 3^2 faces, 3 + (3^2 - 1) / 2 vertices
//! assert_eq!(mesh.faces.len(), 9);
//! assert_eq!(mesh.vertices.len(), 7);
//! # Ok::<(), mesh_densify::DensifyError>(())
//! ```
//!
//! Densify a mesh with statistics and a size guard:
//!
//! ```
//! use mesh_densify::{densify_mesh, DensifyParams};
//! use mesh_types::unit_tetrahedron;
//!
//! let params = DensifyParams::new()
//!     .with_levels(3)
//!     .with_max_faces(1_000)
//!     .with_parallel(true);
//!
//! let result = densify_mesh(&unit_tetrahedron(), &params)?;
//! assert_eq!(result.final_faces, 108);
//! println!("{result}");
//! # Ok::<(), mesh_densify::DensifyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod densify;
mod error;
mod params;
mod result;

pub use densify::{densify, densify_buffers, densify_mesh};
pub use error::{DensifyError, DensifyResult};
pub use params::{DEFAULT_MAX_FACES, DensifyParams};
pub use result::DensificationResult;
