//! Core mesh types for fur generation.
//!
//! This crate provides the foundational types shared by the densifier and
//! the fur extruder:
//!
//! - [`IndexedMesh`] - Positions, a parallel normal buffer and triangle faces
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`MeshTopology`] - Read-only access shared by mesh representations
//!
//! # Precision
//!
//! Coordinates are `f32` so that buffers can be handed to a GPU without
//! conversion.
//!
//! # Buffer Layout
//!
//! Positions and normals are stored as two parallel arrays of equal length,
//! the way a mesh loader hands them over and the way a renderer uploads them.
//! Normals are not required to be unit length.
//!
//! # Example
//!
//! ```
//! use mesh_types::{IndexedMesh, MeshTopology, Point3, Vector3};
//!
//! let mut mesh = IndexedMesh::new();
//! mesh.push_vertex(Point3::new(0.0, 0.0, 0.0), Vector3::z());
//! mesh.push_vertex(Point3::new(1.0, 0.0, 0.0), Vector3::z());
//! mesh.push_vertex(Point3::new(0.0, 1.0, 0.0), Vector3::z());
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(mesh.is_consistent());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod mesh;
mod traits;
mod triangle;

pub use error::{MeshError, MeshResult};
pub use mesh::{IndexedMesh, unit_tetrahedron};
pub use traits::MeshTopology;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
