//! Indexed triangle mesh with a parallel normal buffer.

use crate::error::{MeshError, MeshResult};
use crate::{MeshTopology, Triangle};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// Stores vertex positions and per-vertex normals as parallel arrays, with
/// faces referencing both by index.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Point3<f32>>` - Vertex positions
/// - `normals`: `Vec<Vector3<f32>>` - One normal per vertex, same length as `vertices`
/// - `faces`: `Vec<[u32; 3]>` - Triangle faces as vertex indices
///
/// The fields are public so loaders can fill them directly. Use
/// [`IndexedMesh::is_consistent`] to check the length and index invariants.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, MeshTopology, Point3, Vector3};
///
/// let mesh = IndexedMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     vec![Vector3::z(); 3],
///     vec![[0, 1, 2]],
/// );
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f32>>,

    /// Per-vertex normals, parallel to `vertices`. Not necessarily unit length.
    pub normals: Vec<Vector3<f32>>,

    /// Triangle faces as indices into the vertex and normal arrays.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Expected number of vertices (and normals)
    /// * `face_count` - Expected number of faces
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices, normals and faces.
    ///
    /// No validation is performed; see [`IndexedMesh::is_consistent`].
    #[inline]
    #[must_use]
    pub const fn from_parts(
        vertices: Vec<Point3<f32>>,
        normals: Vec<Vector3<f32>>,
        faces: Vec<[u32; 3]>,
    ) -> Self {
        Self {
            vertices,
            normals,
            faces,
        }
    }

    /// Create a mesh from flat coordinate, normal and index arrays.
    ///
    /// # Arguments
    ///
    /// * `positions` - Flat array of vertex positions `[x0, y0, z0, x1, y1, z1, ...]`
    /// * `normals` - Flat array of normals in the same layout as `positions`
    /// * `indices` - Flat array of face indices `[v0a, v1a, v2a, v0b, v1b, v2b, ...]`
    ///
    /// Returns an empty mesh if any array length is not divisible by 3.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InputShapeMismatch`] if `positions` and `normals`
    /// describe different numbers of vertices.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, MeshTopology};
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let normals = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
    /// let indices = [0, 1, 2];
    ///
    /// let mesh = IndexedMesh::from_raw(&positions, &normals, &indices)?;
    /// assert_eq!(mesh.vertex_count(), 3);
    /// assert_eq!(mesh.face_count(), 1);
    /// # Ok::<(), mesh_types::MeshError>(())
    /// ```
    pub fn from_raw(positions: &[f32], normals: &[f32], indices: &[u32]) -> MeshResult<Self> {
        if positions.len() % 3 != 0 || normals.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Ok(Self::new());
        }
        if positions.len() != normals.len() {
            return Err(MeshError::InputShapeMismatch {
                vertices: positions.len() / 3,
                normals: normals.len() / 3,
            });
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();

        let normals = normals
            .chunks_exact(3)
            .map(|c| Vector3::new(c[0], c[1], c[2]))
            .collect();

        let faces = indices
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Ok(Self {
            vertices,
            normals,
            faces,
        })
    }

    /// Append a vertex together with its normal.
    ///
    /// Returns the index of the new vertex.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, so vertex counts > 4B are unsupported
    pub fn push_vertex(&mut self, position: Point3<f32>, normal: Vector3<f32>) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        index
    }

    /// Check the buffer invariants: equal vertex and normal counts, and
    /// every face index inside the vertex array.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let n = self.vertices.len();
        self.normals.len() == n
            && self
                .faces
                .iter()
                .all(|face| face.iter().all(|&i| (i as usize) < n))
    }

    /// Recompute per-vertex normals from the faces.
    ///
    /// Each vertex normal is the normalized average of the unit normals of
    /// its adjacent faces. Degenerate faces are skipped, and vertices with no
    /// usable face get a zero normal. Faces with out-of-range indices are
    /// ignored.
    ///
    /// Use this when a loader supplies positions without normals.
    pub fn compute_vertex_normals(&mut self) {
        let vertex_count = self.vertices.len();
        let mut normals = vec![Vector3::zeros(); vertex_count];

        for face in &self.faces {
            let Some(face_normal) = self.resolve(*face).and_then(|tri| tri.normal()) else {
                continue;
            };
            for &vertex_idx in face {
                normals[vertex_idx as usize] += face_normal;
            }
        }

        for normal in &mut normals {
            let len = normal.norm();
            if len > 1e-10 {
                *normal /= len;
            }
        }

        self.normals = normals;
    }

    /// Translate mesh by the given vector. Normals are unaffected.
    pub fn translate(&mut self, offset: Vector3<f32>) {
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
    }

    /// Merge another mesh into this one.
    ///
    /// The other mesh's vertices, normals and faces are appended, with face
    /// indices adjusted appropriately.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, so vertex counts > 4B are unsupported
    pub fn merge(&mut self, other: &Self) {
        let vertex_offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);

        for face in &other.faces {
            self.faces.push([
                face[0] + vertex_offset,
                face[1] + vertex_offset,
                face[2] + vertex_offset,
            ]);
        }
    }

    fn resolve(&self, [i0, i1, i2]: [u32; 3]) -> Option<Triangle> {
        Some(Triangle {
            v0: *self.vertices.get(i0 as usize)?,
            v1: *self.vertices.get(i1 as usize)?,
            v2: *self.vertices.get(i2 as usize)?,
        })
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<Point3<f32>> {
        self.vertices.get(index).copied()
    }

    fn normal(&self, index: usize) -> Option<Vector3<f32>> {
        self.normals.get(index).copied()
    }

    fn face(&self, index: usize) -> Option<[u32; 3]> {
        self.faces.get(index).copied()
    }

    fn triangle(&self, face_index: usize) -> Option<Triangle> {
        self.faces
            .get(face_index)
            .and_then(|&face| self.resolve(face))
    }

    fn faces(&self) -> impl Iterator<Item = [u32; 3]> {
        self.faces.iter().copied()
    }
}

/// Helper function to create a regular tetrahedron mesh.
///
/// The four corners lie on alternating corners of the cube `[-1, 1]^3`.
/// Normals point radially outward and faces wind counter-clockwise when
/// viewed from outside.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_tetrahedron, MeshTopology};
///
/// let tet = unit_tetrahedron();
/// assert_eq!(tet.vertex_count(), 4);
/// assert_eq!(tet.face_count(), 4);
/// assert!(tet.is_consistent());
/// ```
#[must_use]
pub fn unit_tetrahedron() -> IndexedMesh {
    let corners = [
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(1.0, -1.0, -1.0),
        Point3::new(-1.0, 1.0, -1.0),
        Point3::new(-1.0, -1.0, 1.0),
    ];

    let mut mesh = IndexedMesh::with_capacity(4, 4);
    for corner in corners {
        mesh.push_vertex(corner, corner.coords.normalize());
    }

    mesh.faces.push([0, 2, 3]);
    mesh.faces.push([0, 3, 1]);
    mesh.faces.push([0, 1, 2]);
    mesh.faces.push([1, 3, 2]);

    mesh
}
