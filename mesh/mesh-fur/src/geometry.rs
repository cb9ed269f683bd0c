//! Fur line-list buffers.
//!
//! # Memory Layout
//!
//! [`FurGeometry`] stores four points per strand in line-list order:
//! root, midpoint, midpoint, tip. Every point carries the root normal.
//! [`LineVertex`] is the interleaved 32-byte record handed to GPU backends.

use bytemuck::{Pod, Zeroable};
use nalgebra::{Point3, Vector3};

use crate::strand::FurStrand;

/// Number of line-list points emitted per strand.
pub const POINTS_PER_STRAND: usize = 4;

/// Topology used to draw a set of buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Primitive {
    /// Independent segments, two points each.
    Lines,
}

/// Generated fur for one model.
///
/// `vertices` and `normals` always have `4 * strand_count` entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FurGeometry {
    /// Line-list point positions.
    pub vertices: Vec<Point3<f32>>,
    /// Per-point normals.
    pub normals: Vec<Vector3<f32>>,
}

impl FurGeometry {
    /// Create empty geometry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// Create geometry with room for `strands` strands.
    #[must_use]
    pub fn with_capacity(strands: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(strands * POINTS_PER_STRAND),
            normals: Vec::with_capacity(strands * POINTS_PER_STRAND),
        }
    }

    /// Append one strand.
    pub fn push_strand(&mut self, strand: &FurStrand) {
        self.vertices.extend_from_slice(&strand.line_points());
        self.normals.extend_from_slice(&[strand.normal; POINTS_PER_STRAND]);
    }

    /// Number of strands.
    #[must_use]
    pub fn strand_count(&self) -> usize {
        self.vertices.len() / POINTS_PER_STRAND
    }

    /// Check if there are no strands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Topology of these buffers.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn primitive(&self) -> Primitive {
        Primitive::Lines
    }

    /// Iterate over line segments as point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point3<f32>, Point3<f32>)> + '_ {
        self.vertices.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Iterate over strands.
    pub fn strands(&self) -> impl Iterator<Item = FurStrand> + '_ {
        self.vertices
            .chunks_exact(POINTS_PER_STRAND)
            .zip(self.normals.chunks_exact(POINTS_PER_STRAND))
            .map(|(points, normals)| FurStrand {
                root: points[0],
                midpoint: points[1],
                tip: points[3],
                normal: normals[0],
            })
    }

    /// Interleave positions and normals into GPU records.
    #[must_use]
    pub fn to_gpu_vertices(&self) -> Vec<LineVertex> {
        self.vertices
            .iter()
            .zip(&self.normals)
            .map(|(p, n)| LineVertex::new([p.x, p.y, p.z], [n.x, n.y, n.z]))
            .collect()
    }
}

/// GPU-friendly line vertex.
///
/// Uses 4-component vectors for proper GPU alignment (vec4 = 16 bytes).
/// The fourth component is padding and not used.
///
/// # Memory Layout
///
/// Total size: 32 bytes
/// - position: 16 bytes (vec4)
/// - normal: 16 bytes (vec4)
///
/// # Example
///
/// ```
/// use mesh_fur::LineVertex;
///
/// let v = LineVertex::new([1.0, 2.0, 3.0], [0.0, 0.0, 1.0]);
/// assert_eq!(std::mem::size_of::<LineVertex>(), 32);
/// assert_eq!(LineVertex::as_bytes(&[v]).len(), 32);
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Point position (xyz) + padding.
    pub position: [f32; 4],
    /// Point normal (xyz) + padding.
    pub normal: [f32; 4],
}

impl LineVertex {
    /// Create a line vertex from position and normal.
    #[must_use]
    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self {
            position: [position[0], position[1], position[2], 0.0],
            normal: [normal[0], normal[1], normal[2], 0.0],
        }
    }

    /// View a slice of vertices as raw bytes for buffer upload.
    #[must_use]
    pub fn as_bytes(vertices: &[Self]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}
