//! Centroid densification.
//!
//! Every face `(a, b, c)` gets a centroid vertex `i` whose position and
//! normal are the arithmetic means of the corners. The face is replaced by
//! `(a, b, i)`, `(a, c, i)` and `(b, c, i)`, and each child is densified again
//! until the requested depth is reached.
//!
//! Centroids are appended in depth-first pre-order: a face's own centroid
//! precedes the centroids of its children. Every input face therefore owns
//! a contiguous block of `(3^levels - 1) / 2` new vertices starting at
//! `vertex_count + face_index * block_len`, which is what lets the parallel
//! path produce the same buffers as the sequential one.

// Mesh indices are u32; the size guard rejects meshes that would not fit.
#![allow(clippy::cast_possible_truncation)]

use mesh_types::{IndexedMesh, Triangle};
use nalgebra::{Point3, Vector3};
use rayon::prelude::*;
use tracing::debug;

use crate::error::{DensifyError, DensifyResult};
use crate::params::DensifyParams;
use crate::result::DensificationResult;

/// Densify raw buffers by `levels` recursion levels.
///
/// `levels == 0` returns a copy of the input. Faces may be any index
/// container; anything other than a triangle is rejected.
///
/// # Errors
///
/// Returns an error if:
/// - `vertices` and `normals` differ in length
/// - a face is not a triangle
/// - a face references a vertex outside `vertices`
/// - the result would exceed the default face budget
///
/// # Examples
///
/// ```
/// use mesh_densify::densify;
/// use mesh_types::{Point3, Vector3};
///
/// let vertices = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// let normals = [Vector3::z(); 3];
///
/// let mesh = densify(&vertices, &normals, &[[0u32, 1, 2]], 1)?;
///
/// assert_eq!(mesh.vertices.len(), 4);
/// assert_eq!(mesh.faces, vec![[0, 1, 3], [0, 2, 3], [1, 2, 3]]);
/// # Ok::<(), mesh_densify::DensifyError>(())
/// ```
pub fn densify<F: AsRef<[u32]>>(
    vertices: &[Point3<f32>],
    normals: &[Vector3<f32>],
    faces: &[F],
    levels: u32,
) -> DensifyResult<IndexedMesh> {
    let params = DensifyParams::new().with_levels(levels);
    densify_buffers(vertices, normals, faces, &params).map(DensificationResult::into_mesh)
}

/// Densify a mesh using the specified parameters.
///
/// # Errors
///
/// See [`densify_buffers`].
///
/// # Examples
///
/// ```
/// use mesh_densify::{densify_mesh, DensifyParams};
/// use mesh_types::unit_tetrahedron;
///
/// let params = DensifyParams::new().with_levels(2);
/// let result = densify_mesh(&unit_tetrahedron(), &params)?;
///
/// assert_eq!(result.final_faces, 4 * 9);
/// assert_eq!(result.final_vertices, 4 + 4 * 4);
/// # Ok::<(), mesh_densify::DensifyError>(())
/// ```
pub fn densify_mesh(
    mesh: &IndexedMesh,
    params: &DensifyParams,
) -> DensifyResult<DensificationResult> {
    densify_buffers(&mesh.vertices, &mesh.normals, &mesh.faces, params)
}

/// Densify raw buffers using the specified parameters.
///
/// All validation happens before any output buffer is allocated.
///
/// # Errors
///
/// Returns an error if:
/// - `vertices` and `normals` differ in length
/// - a face is not a triangle
/// - a face references a vertex outside `vertices`
/// - the projected face count exceeds `params.max_faces`, or the projected
///   vertex count does not fit 32-bit indices
pub fn densify_buffers<F: AsRef<[u32]>>(
    vertices: &[Point3<f32>],
    normals: &[Vector3<f32>],
    faces: &[F],
    params: &DensifyParams,
) -> DensifyResult<DensificationResult> {
    let triangles = validate_input(vertices, normals, faces)?;

    let original_faces = triangles.len();
    let original_vertices = vertices.len();

    // Check projected size. A faceless mesh never grows at any level.
    let projected_faces = params.expected_faces(original_faces);
    let projected_vertices = params.expected_vertices(original_vertices, original_faces);
    let (final_faces, final_vertices) = match (projected_faces, projected_vertices) {
        _ if original_faces == 0 => (0, original_vertices),
        (Some(f), Some(v)) if f <= params.max_faces && v <= u32::MAX as usize => (f, v),
        _ => {
            return Err(DensifyError::MeshTooLarge {
                current: original_faces,
                projected: projected_faces.unwrap_or(usize::MAX),
                max: params.max_faces,
            });
        }
    };

    debug!(
        "Densifying mesh: {} faces, {} vertices, {} levels (parallel: {})",
        original_faces, original_vertices, params.levels, params.parallel
    );

    let mut mesh = IndexedMesh::with_capacity(final_vertices, final_faces);
    mesh.vertices.extend_from_slice(vertices);
    mesh.normals.extend_from_slice(normals);

    // Block length per input face; cannot overflow after the guard above.
    let block_len = (final_vertices - original_vertices)
        .checked_div(original_faces)
        .unwrap_or(0);
    let base_of = |face_index: usize| (original_vertices + face_index * block_len) as u32;

    if params.parallel {
        let blocks: Vec<FaceBlock> = triangles
            .par_iter()
            .enumerate()
            .map(|(fi, &face)| densify_face(vertices, normals, face, params.levels, base_of(fi)))
            .collect();
        for block in blocks {
            block.append_to(&mut mesh);
        }
    } else {
        for (fi, &face) in triangles.iter().enumerate() {
            densify_face(vertices, normals, face, params.levels, base_of(fi)).append_to(&mut mesh);
        }
    }

    debug!(
        "Densified to {} faces, {} vertices",
        mesh.faces.len(),
        mesh.vertices.len()
    );

    Ok(DensificationResult {
        original_faces,
        final_faces: mesh.faces.len(),
        original_vertices,
        final_vertices: mesh.vertices.len(),
        levels: params.levels,
        mesh,
    })
}

/// Check buffer shape, face arity and index range.
///
/// Returns the faces as index triples.
fn validate_input<F: AsRef<[u32]>>(
    vertices: &[Point3<f32>],
    normals: &[Vector3<f32>],
    faces: &[F],
) -> DensifyResult<Vec<[u32; 3]>> {
    if vertices.len() != normals.len() {
        return Err(DensifyError::InputShapeMismatch {
            vertices: vertices.len(),
            normals: normals.len(),
        });
    }

    let vertex_count = vertices.len();
    faces
        .iter()
        .enumerate()
        .map(|(fi, face)| {
            let &[a, b, c] = face.as_ref() else {
                return Err(DensifyError::UnsupportedFaceArity {
                    face: fi,
                    arity: face.as_ref().len(),
                });
            };
            if let Some(&index) = [a, b, c].iter().find(|&&i| i as usize >= vertex_count) {
                return Err(DensifyError::InvalidIndex {
                    face: fi,
                    index,
                    vertex_count,
                });
            }
            Ok([a, b, c])
        })
        .collect()
}

/// Centroids and leaf faces generated from one input face.
#[derive(Debug, Default)]
struct FaceBlock {
    vertices: Vec<Point3<f32>>,
    normals: Vec<Vector3<f32>>,
    faces: Vec<[u32; 3]>,
}

impl FaceBlock {
    fn append_to(self, mesh: &mut IndexedMesh) {
        mesh.vertices.extend(self.vertices);
        mesh.normals.extend(self.normals);
        mesh.faces.extend(self.faces);
    }
}

/// Densifies one input face into a block whose first centroid has index `base`.
struct FaceDensifier<'a> {
    vertices: &'a [Point3<f32>],
    normals: &'a [Vector3<f32>],
    base: u32,
    block: FaceBlock,
}

impl FaceDensifier<'_> {
    fn position(&self, index: u32) -> Point3<f32> {
        if index >= self.base {
            self.block.vertices[(index - self.base) as usize]
        } else {
            self.vertices[index as usize]
        }
    }

    fn normal(&self, index: u32) -> Vector3<f32> {
        if index >= self.base {
            self.block.normals[(index - self.base) as usize]
        } else {
            self.normals[index as usize]
        }
    }

    fn subdivide(&mut self, face: [u32; 3], levels: u32) {
        if levels == 0 {
            self.block.faces.push(face);
            return;
        }

        let [a, b, c] = face;
        let centroid =
            Triangle::new(self.position(a), self.position(b), self.position(c)).centroid();
        // Plain mean, not renormalized
        let normal = (self.normal(a) + self.normal(b) + self.normal(c)) / 3.0;

        let i = self.base + self.block.vertices.len() as u32;
        self.block.vertices.push(centroid);
        self.block.normals.push(normal);

        self.subdivide([a, b, i], levels - 1);
        self.subdivide([a, c, i], levels - 1);
        self.subdivide([b, c, i], levels - 1);
    }
}

fn densify_face(
    vertices: &[Point3<f32>],
    normals: &[Vector3<f32>],
    face: [u32; 3],
    levels: u32,
    base: u32,
) -> FaceBlock {
    let mut densifier = FaceDensifier {
        vertices,
        normals,
        base,
        block: FaceBlock::default(),
    };
    densifier.subdivide(face, levels);
    densifier.block
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::cast_precision_loss
)]
mod tests {
    use super::*;
    use mesh_types::unit_tetrahedron;

    fn triangle_buffers() -> (Vec<Point3<f32>>, Vec<Vector3<f32>>, Vec<[u32; 3]>) {
        (
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![Vector3::z(); 3],
            vec![[0, 1, 2]],
        )
    }

    fn assert_point_eq(a: Point3<f32>, b: Point3<f32>) {
        assert!((a - b).norm() < 1e-6, "{a:?} != {b:?}");
    }

    #[test]
    fn test_zero_levels_is_identity() {
        let mesh = unit_tetrahedron();
        let out = densify(&mesh.vertices, &mesh.normals, &mesh.faces, 0).expect("densify failed");
        assert_eq!(out, mesh);
    }

    #[test]
    fn test_single_triangle_one_level() {
        let (v, n, f) = triangle_buffers();
        let out = densify(&v, &n, &f, 1).expect("densify failed");

        assert_eq!(out.vertices.len(), 4);
        assert_eq!(out.normals.len(), 4);
        assert_eq!(out.faces, vec![[0, 1, 3], [0, 2, 3], [1, 2, 3]]);
        assert_point_eq(out.vertices[3], Point3::new(1.0 / 3.0, 1.0 / 3.0, 0.0));
        assert!((out.normals[3] - Vector3::z()).norm() < 1e-6);

        // Originals are carried over untouched
        assert_eq!(&out.vertices[..3], &v[..]);
    }

    #[test]
    fn test_two_levels_preorder() {
        let (v, n, f) = triangle_buffers();
        let out = densify(&v, &n, &f, 2).expect("densify failed");

        assert_eq!(out.vertices.len(), 7);
        assert_eq!(
            out.faces,
            vec![
                [0, 1, 4],
                [0, 3, 4],
                [1, 3, 4],
                [0, 2, 5],
                [0, 3, 5],
                [2, 3, 5],
                [1, 2, 6],
                [1, 3, 6],
                [2, 3, 6],
            ]
        );

        // Vertex 4 is the centroid of child face (0, 1, 3)
        let expected = Triangle::new(out.vertices[0], out.vertices[1], out.vertices[3]).centroid();
        assert_point_eq(out.vertices[4], expected);
    }

    #[test]
    fn test_counts_follow_formula() {
        let mesh = unit_tetrahedron();
        for levels in 0..5 {
            let out =
                densify(&mesh.vertices, &mesh.normals, &mesh.faces, levels).expect("densify failed");
            let per_face = 3usize.pow(levels);
            assert_eq!(out.faces.len(), 4 * per_face);
            assert_eq!(out.vertices.len(), 4 + 4 * (per_face - 1) / 2);
            assert_eq!(out.normals.len(), out.vertices.len());
        }
    }

    #[test]
    fn test_centroid_invariant() {
        let mesh = unit_tetrahedron();
        let out = densify(&mesh.vertices, &mesh.normals, &mesh.faces, 1).expect("densify failed");

        // With one level, the face (a, b, i) always carries its parent's corners
        for (fi, chunk) in out.faces.chunks(3).enumerate() {
            let [a, b, i] = chunk[0];
            let c = chunk[1][1];
            assert_eq!(i as usize, 4 + fi);
            let expected = Point3::from(
                (out.vertices[a as usize].coords
                    + out.vertices[b as usize].coords
                    + out.vertices[c as usize].coords)
                    / 3.0,
            );
            assert_point_eq(out.vertices[i as usize], expected);
        }
    }

    #[test]
    fn test_centroid_normal_is_not_normalized() {
        let (v, _, f) = triangle_buffers();
        let n = vec![Vector3::x(), Vector3::y(), Vector3::z()];
        let out = densify(&v, &n, &f, 1).expect("densify failed");

        let third = 1.0 / 3.0;
        assert!((out.normals[3] - Vector3::new(third, third, third)).norm() < 1e-6);
        assert!(out.normals[3].norm() < 0.6);
    }

    #[test]
    fn test_invalid_index() {
        let (v, n, _) = triangle_buffers();
        let result = densify(&v, &n, &[[5u32, 0, 1]], 1);
        assert_eq!(
            result,
            Err(DensifyError::InvalidIndex {
                face: 0,
                index: 5,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_invalid_index_rejected_at_zero_levels() {
        let (v, n, _) = triangle_buffers();
        let result = densify(&v, &n, &[[0u32, 1, 2], [0, 1, 3]], 0);
        assert!(matches!(
            result,
            Err(DensifyError::InvalidIndex { face: 1, index: 3, .. })
        ));
    }

    #[test]
    fn test_quad_face_rejected() {
        let (mut v, mut n, _) = triangle_buffers();
        v.push(Point3::new(1.0, 1.0, 0.0));
        n.push(Vector3::z());
        let faces: Vec<Vec<u32>> = vec![vec![0, 1, 2], vec![0, 1, 3, 2]];

        let result = densify(&v, &n, &faces, 1);
        assert_eq!(
            result,
            Err(DensifyError::UnsupportedFaceArity { face: 1, arity: 4 })
        );
    }

    #[test]
    fn test_polygon_triangles_accepted() {
        let (v, n, _) = triangle_buffers();
        let faces: Vec<Vec<u32>> = vec![vec![0, 1, 2]];
        let out = densify(&v, &n, &faces, 1).expect("densify failed");
        assert_eq!(out.faces.len(), 3);
    }

    #[test]
    fn test_shape_mismatch() {
        let (v, _, f) = triangle_buffers();
        let result = densify(&v, &[Vector3::z()], &f, 1);
        assert_eq!(
            result,
            Err(DensifyError::InputShapeMismatch {
                vertices: 3,
                normals: 1
            })
        );
    }

    #[test]
    fn test_too_large() {
        let mesh = unit_tetrahedron();
        let params = DensifyParams::new().with_levels(3).with_max_faces(100); // 4 * 27 = 108 > 100
        let result = densify_mesh(&mesh, &params);
        assert!(matches!(
            result,
            Err(DensifyError::MeshTooLarge {
                current: 4,
                projected: 108,
                max: 100
            })
        ));
    }

    #[test]
    fn test_overflowing_levels_rejected() {
        let mesh = unit_tetrahedron();
        let params = DensifyParams::new().with_levels(u32::MAX);
        let result = densify_mesh(&mesh, &params);
        assert!(matches!(
            result,
            Err(DensifyError::MeshTooLarge {
                projected: usize::MAX,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_mesh_is_valid() {
        let faces: [[u32; 3]; 0] = [];
        let out = densify(&[], &[], &faces, 3).expect("densify failed");
        assert_eq!(out, IndexedMesh::new());
    }

    #[test]
    fn test_vertex_only_mesh_ignores_level_overflow() {
        let faces: [[u32; 3]; 0] = [];
        let vertices = [Point3::new(1.0, 2.0, 3.0)];
        let normals = [Vector3::z()];

        for levels in [41, u32::MAX] {
            let params = DensifyParams::new().with_levels(levels).with_parallel(true);
            let result =
                densify_buffers(&vertices, &normals, &faces, &params).expect("densify failed");
            assert_eq!(result.final_faces, 0);
            assert_eq!(result.final_vertices, 1);
            assert_eq!(result.mesh.vertices, vertices.to_vec());
            assert_eq!(result.mesh.normals, normals.to_vec());
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mesh = unit_tetrahedron();
        let sequential = DensifyParams::new().with_levels(3);
        let parallel = sequential.clone().with_parallel(true);

        let a = densify_mesh(&mesh, &sequential).expect("densify failed");
        let b = densify_mesh(&mesh, &parallel).expect("densify failed");
        assert_eq!(a.mesh, b.mesh);
    }

    #[test]
    fn test_sequential_calls_compose_face_counts() {
        let mesh = unit_tetrahedron();
        let once = densify(&mesh.vertices, &mesh.normals, &mesh.faces, 1).expect("densify failed");
        let twice = densify(&once.vertices, &once.normals, &once.faces, 2).expect("densify failed");
        let direct = densify(&mesh.vertices, &mesh.normals, &mesh.faces, 3).expect("densify failed");

        assert_eq!(direct.faces.len(), 4 * 27);
        assert_eq!(twice.faces.len(), direct.faces.len());
        assert_eq!(twice.vertices.len(), direct.vertices.len());
    }

    #[test]
    fn test_result_statistics() {
        let params = DensifyParams::new().with_levels(2);
        let result = densify_mesh(&unit_tetrahedron(), &params).expect("densify failed");

        assert_eq!(result.original_faces, 4);
        assert_eq!(result.final_faces, 36);
        assert_eq!(result.original_vertices, 4);
        assert_eq!(result.final_vertices, 20);
        assert_eq!(result.added_vertices(), 16);
        assert!(result.was_densified());
        assert!((result.face_ratio() - 9.0).abs() < 1e-9);
    }
}
