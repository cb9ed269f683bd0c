//! Resolved triangles.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A face with its corner positions looked up.
///
/// Corners are ordered counter-clockwise seen from the side the normal
/// points to.
///
/// # Example
///
/// ```
/// use mesh_types::{Point3, Triangle, Vector3};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(3.0, 0.0, 0.0),
///     Point3::new(0.0, 3.0, 0.0),
/// );
///
/// assert_eq!(tri.scaled_normal(), Vector3::new(0.0, 0.0, 9.0));
/// assert_eq!(tri.centroid(), Point3::new(1.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// Corner `a`.
    pub v0: Point3<f32>,
    /// Corner `b`.
    pub v1: Point3<f32>,
    /// Corner `c`.
    pub v2: Point3<f32>,
}

impl Triangle {
    /// Build a triangle from its corners.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f32>, v1: Point3<f32>, v2: Point3<f32>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Cross product of the two edges leaving `v0`.
    ///
    /// Its length is twice the area.
    #[inline]
    #[must_use]
    pub fn scaled_normal(&self) -> Vector3<f32> {
        (self.v1 - self.v0).cross(&(self.v2 - self.v0))
    }

    /// Unit face normal, or `None` when the corners are collinear.
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f32>> {
        self.scaled_normal().try_normalize(f32::EPSILON)
    }

    /// Arithmetic mean of the corners.
    #[inline]
    #[must_use]
    pub fn centroid(&self) -> Point3<f32> {
        Point3::from((self.v0.coords + self.v1.coords + self.v2.coords) / 3.0)
    }
}
