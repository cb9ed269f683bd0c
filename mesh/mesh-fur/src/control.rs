//! Interactive control surface for fur parameters.
//!
//! Commands map the current [`FurParams`] to new ones. Whether and how the
//! fur is rebuilt is left to the caller, usually
//! [`FurScene`](crate::FurScene).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::params::FurParams;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default length change per step.
pub const DEFAULT_LENGTH_STEP: f32 = 0.1;

/// Default densification ceiling for interactive input.
pub const DEFAULT_MAX_DENSITY: u32 = 6;

/// Default upper bound of the random bend angle (30 degrees, in radians).
pub const DEFAULT_MAX_RANDOM_ANGLE: f32 = std::f32::consts::FRAC_PI_6;

/// A request to change fur parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FurCommand {
    /// Lengthen strands by one step.
    IncreaseLength,
    /// Shorten strands by one step. Lengths may become zero or negative.
    DecreaseLength,
    /// Draw a new bend angle uniformly from the configured range.
    RandomizeAngle,
    /// Add one densification level, up to the ceiling.
    IncreaseDensity,
    /// Remove one densification level, down to zero.
    DecreaseDensity,
    /// Set the strand length.
    SetLength(f32),
    /// Set the bend angle in radians.
    SetAngle(f32),
    /// Set the densification level, clamped to the ceiling.
    SetDensity(u32),
}

/// Result of applying a command.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlOutcome {
    /// The command produced new parameters.
    Changed(FurParams),
    /// The command had no effect.
    Unchanged,
}

impl ControlOutcome {
    /// Check if the parameters changed.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}

/// Step sizes and limits for interactive fur editing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FurControls {
    /// Length change per increase/decrease step.
    pub length_step: f32,

    /// Highest density reachable through commands.
    pub max_density: u32,

    /// Random angles are drawn from `[0, max_random_angle)` radians.
    pub max_random_angle: f32,

    /// Seed for angle randomization. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for FurControls {
    fn default() -> Self {
        Self {
            length_step: DEFAULT_LENGTH_STEP,
            max_density: DEFAULT_MAX_DENSITY,
            max_random_angle: DEFAULT_MAX_RANDOM_ANGLE,
            seed: None,
        }
    }
}

impl FurControls {
    /// Create controls with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls with fixed seed for reproducible randomization.
    #[must_use]
    pub fn reproducible(seed: u64) -> Self {
        Self::default().with_seed(seed)
    }

    /// Set the length step.
    #[must_use]
    pub const fn with_length_step(mut self, step: f32) -> Self {
        self.length_step = step;
        self
    }

    /// Set the density ceiling.
    #[must_use]
    pub const fn with_max_density(mut self, max_density: u32) -> Self {
        self.max_density = max_density;
        self
    }

    /// Set the random angle bound in radians.
    #[must_use]
    pub const fn with_max_random_angle(mut self, angle: f32) -> Self {
        self.max_random_angle = angle;
        self
    }

    /// Set the randomization seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create the random number generator used for [`FurCommand::RandomizeAngle`].
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Apply a command to `current`.
    ///
    /// Limits are enforced here: density stays within `0..=max_density`.
    /// Rejected commands are logged and reported as
    /// [`ControlOutcome::Unchanged`].
    pub fn apply<R: Rng + ?Sized>(
        &self,
        current: &FurParams,
        command: FurCommand,
        rng: &mut R,
    ) -> ControlOutcome {
        let mut next = current.clone();

        match command {
            FurCommand::IncreaseLength => next.length += self.length_step,
            FurCommand::DecreaseLength => next.length -= self.length_step,
            FurCommand::RandomizeAngle => next.angle = self.random_angle(rng),
            FurCommand::IncreaseDensity => {
                if current.density >= self.max_density {
                    warn!("Cannot increase fur density beyond {}", self.max_density);
                    return ControlOutcome::Unchanged;
                }
                next.density += 1;
            }
            FurCommand::DecreaseDensity => {
                if current.density == 0 {
                    warn!("Cannot decrease fur density any further");
                    return ControlOutcome::Unchanged;
                }
                next.density -= 1;
            }
            FurCommand::SetLength(length) => next.length = length,
            FurCommand::SetAngle(angle) => next.angle = angle,
            FurCommand::SetDensity(density) => {
                if density > self.max_density {
                    warn!(
                        "Requested fur density {density} clamped to {}",
                        self.max_density
                    );
                }
                next.density = density.min(self.max_density);
            }
        }

        if next == *current {
            ControlOutcome::Unchanged
        } else {
            ControlOutcome::Changed(next)
        }
    }

    fn random_angle<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max_random_angle > 0.0 {
            rng.gen_range(0.0..self.max_random_angle)
        } else {
            0.0
        }
    }
}
