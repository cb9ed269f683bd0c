//! Fur generation parameters.

use mesh_densify::DensifyParams;
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default strand length in model units.
pub const DEFAULT_FUR_LENGTH: f32 = 0.1;

/// Fraction of the strand length that grows straight along the normal.
pub const ROOT_FRACTION: f32 = 1.0 / 3.0;

/// How the outer segment of a strand is bent away from the normal.
///
/// Both profiles scale the offset by the tip length `s = 2L/3` and ignore
/// the surface normal, so the bend is expressed in model space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BendProfile {
    /// Offset `s * (cos²a, sin a, sin a·cos a)`.
    ///
    /// The offset vector has unit direction for every angle, so the tip
    /// segment is always exactly `s` long.
    #[default]
    Tilted,

    /// Offset `s * (cos a, sin a, 1)`.
    ///
    /// Sweeps the tip along +Z as well, giving a longer and more visibly
    /// combed tip segment.
    Swept,
}

impl BendProfile {
    /// Offset from the strand midpoint to its tip.
    #[must_use]
    pub fn tip_offset(self, angle: f32, tip_length: f32) -> Vector3<f32> {
        let (sin, cos) = angle.sin_cos();
        let dir = match self {
            Self::Tilted => Vector3::new(cos * cos, sin, sin * cos),
            Self::Swept => Vector3::new(cos, sin, 1.0),
        };
        dir * tip_length
    }
}

/// Parameters for fur generation.
///
/// A model's fur is a pure function of its base mesh and these parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FurParams {
    /// Total strand length. Zero and negative lengths are accepted and
    /// produce degenerate or inward-pointing strands.
    pub length: f32,

    /// Bend angle in radians.
    pub angle: f32,

    /// Densification levels applied to the base mesh before extrusion.
    pub density: u32,

    /// Shape of the outer segment.
    pub bend: BendProfile,
}

impl Default for FurParams {
    fn default() -> Self {
        Self {
            length: DEFAULT_FUR_LENGTH,
            angle: 0.0,
            density: 0,
            bend: BendProfile::Tilted,
        }
    }
}

impl FurParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strand length.
    #[must_use]
    pub const fn with_length(mut self, length: f32) -> Self {
        self.length = length;
        self
    }

    /// Set the bend angle in radians.
    #[must_use]
    pub const fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Set the bend angle in degrees.
    #[must_use]
    pub fn with_angle_degrees(mut self, degrees: f32) -> Self {
        self.angle = degrees.to_radians();
        self
    }

    /// Set the densification level.
    #[must_use]
    pub const fn with_density(mut self, density: u32) -> Self {
        self.density = density;
        self
    }

    /// Set the bend profile.
    #[must_use]
    pub const fn with_bend(mut self, bend: BendProfile) -> Self {
        self.bend = bend;
        self
    }

    /// Length of the straight inner segment (`L/3`).
    #[must_use]
    pub fn root_length(&self) -> f32 {
        self.length * ROOT_FRACTION
    }

    /// Length scale of the bent outer segment (`2L/3`).
    #[must_use]
    pub fn tip_length(&self) -> f32 {
        self.length * 2.0 * ROOT_FRACTION
    }

    /// Densification parameters matching [`Self::density`].
    #[must_use]
    pub fn densify_params(&self) -> DensifyParams {
        DensifyParams::new().with_levels(self.density)
    }
}
