//! A single fur strand.

use nalgebra::{Point3, Vector3};

use crate::params::FurParams;

/// One two-segment fur strand.
///
/// The inner segment grows along the surface normal for a third of the
/// length. The outer segment leaves the midpoint along the bend offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FurStrand {
    /// Surface point the strand grows from.
    pub root: Point3<f32>,
    /// End of the inner segment and start of the outer one.
    pub midpoint: Point3<f32>,
    /// Free end of the strand.
    pub tip: Point3<f32>,
    /// Surface normal at the root, carried by every strand point.
    pub normal: Vector3<f32>,
}

impl FurStrand {
    /// Grow a strand from `root` along `normal`.
    ///
    /// The normal is used as given. Non-unit normals scale the inner
    /// segment accordingly.
    #[must_use]
    pub fn grow(root: Point3<f32>, normal: Vector3<f32>, params: &FurParams) -> Self {
        let midpoint = root + normal * params.root_length();
        let tip = midpoint + params.bend.tip_offset(params.angle, params.tip_length());
        Self {
            root,
            midpoint,
            tip,
            normal,
        }
    }

    /// The two line segments `(root, midpoint)` and `(midpoint, tip)`.
    #[must_use]
    pub const fn segments(&self) -> [(Point3<f32>, Point3<f32>); 2] {
        [(self.root, self.midpoint), (self.midpoint, self.tip)]
    }

    /// Line-list points in draw order: root, midpoint, midpoint, tip.
    #[must_use]
    pub const fn line_points(&self) -> [Point3<f32>; 4] {
        [self.root, self.midpoint, self.midpoint, self.tip]
    }

    /// Polyline length of both segments.
    #[must_use]
    pub fn length(&self) -> f32 {
        (self.midpoint - self.root).norm() + (self.tip - self.midpoint).norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::BendProfile;

    fn approx_eq(a: Point3<f32>, b: Point3<f32>) -> bool {
        (a - b).norm() < 1e-5
    }

    #[test]
    fn test_grow_straight_up() {
        let params = FurParams::new().with_length(0.3);
        let strand = FurStrand::grow(Point3::origin(), Vector3::z(), &params);

        assert!(approx_eq(strand.midpoint, Point3::new(0.0, 0.0, 0.1)));
        assert!(approx_eq(strand.tip, Point3::new(0.2, 0.0, 0.1)));
        assert!((strand.length() - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_grow_swept() {
        let params = FurParams::new()
            .with_length(0.3)
            .with_bend(BendProfile::Swept);
        let strand = FurStrand::grow(Point3::origin(), Vector3::z(), &params);

        assert!(approx_eq(strand.tip, Point3::new(0.2, 0.0, 0.3)));
    }

    #[test]
    fn test_zero_length_is_degenerate() {
        let params = FurParams::new().with_length(0.0);
        let root = Point3::new(1.0, 2.0, 3.0);
        let strand = FurStrand::grow(root, Vector3::x(), &params);

        assert_eq!(strand.midpoint, root);
        assert_eq!(strand.tip, root);
    }

    #[test]
    fn test_negative_length_points_inward() {
        let params = FurParams::new().with_length(-0.3);
        let strand = FurStrand::grow(Point3::origin(), Vector3::z(), &params);

        assert!(strand.midpoint.z < 0.0);
    }

    #[test]
    fn test_line_points_share_midpoint() {
        let params = FurParams::new().with_angle(0.7);
        let strand = FurStrand::grow(Point3::new(1.0, 0.0, 0.0), Vector3::x(), &params);
        let points = strand.line_points();

        assert_eq!(points[0], strand.root);
        assert_eq!(points[1], points[2]);
        assert_eq!(points[3], strand.tip);
        assert_eq!(strand.segments()[1], (points[2], points[3]));
    }
}
