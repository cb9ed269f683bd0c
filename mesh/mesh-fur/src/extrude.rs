//! Fur extrusion.
//!
//! Strand roots are the vertices of the (optionally densified) base mesh.
//! The base mesh itself is never modified.

use mesh_densify::densify_buffers;
use mesh_types::IndexedMesh;
use nalgebra::{Point3, Vector3};
use tracing::debug;

use crate::error::{FurError, FurResult};
use crate::geometry::FurGeometry;
use crate::params::FurParams;
use crate::strand::FurStrand;

/// Generate fur over raw mesh buffers.
///
/// With `params.density == 0` one strand grows from every input vertex and
/// the faces are not read. Otherwise the buffers are densified by
/// `params.density` levels first and one strand grows from every vertex of
/// the densified mesh, original vertices first.
///
/// # Errors
///
/// Returns [`FurError::InputShapeMismatch`] if the vertex and normal arrays
/// differ in length, and [`FurError::Densify`] if densification rejects the
/// faces.
///
/// # Example
///
/// ```
/// use mesh_fur::{FurParams, extrude};
/// use mesh_types::{Point3, Vector3};
///
/// let vertices = [Point3::new(0.0, 0.0, 0.0)];
/// let normals = [Vector3::z()];
/// let faces: [[u32; 3]; 0] = [];
///
/// let fur = extrude(&vertices, &normals, &faces, &FurParams::new().with_length(0.3))?;
/// assert_eq!(fur.vertices.len(), 4);
/// # Ok::<(), mesh_fur::FurError>(())
/// ```
pub fn extrude<F: AsRef<[u32]>>(
    vertices: &[Point3<f32>],
    normals: &[Vector3<f32>],
    faces: &[F],
    params: &FurParams,
) -> FurResult<FurGeometry> {
    if vertices.len() != normals.len() {
        return Err(FurError::shape_mismatch(vertices.len(), normals.len()));
    }

    if params.density == 0 {
        return extrude_strands(vertices, normals, params);
    }

    let dense = densify_buffers(vertices, normals, faces, &params.densify_params())?;
    debug!(
        "Densified fur roots: {} -> {} vertices",
        dense.original_vertices, dense.final_vertices
    );

    extrude_strands(&dense.mesh.vertices, &dense.mesh.normals, params)
}

/// Generate fur for an indexed mesh.
///
/// # Errors
///
/// See [`extrude`].
pub fn extrude_mesh(mesh: &IndexedMesh, params: &FurParams) -> FurResult<FurGeometry> {
    extrude(&mesh.vertices, &mesh.normals, &mesh.faces, params)
}

/// Grow one strand per root without densification.
///
/// # Errors
///
/// Returns [`FurError::InputShapeMismatch`] if the vertex and normal arrays
/// differ in length.
pub fn extrude_strands(
    vertices: &[Point3<f32>],
    normals: &[Vector3<f32>],
    params: &FurParams,
) -> FurResult<FurGeometry> {
    if vertices.len() != normals.len() {
        return Err(FurError::shape_mismatch(vertices.len(), normals.len()));
    }

    let mut geometry = FurGeometry::with_capacity(vertices.len());
    for (root, normal) in vertices.iter().zip(normals) {
        geometry.push_strand(&FurStrand::grow(*root, *normal, params));
    }

    debug!(
        "Extruded {} fur strands (length={}, angle={}, density={})",
        geometry.strand_count(),
        params.length,
        params.angle,
        params.density
    );

    Ok(geometry)
}
