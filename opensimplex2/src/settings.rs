//! Serde-backed noise configuration.
//!
//! [`NoiseSettings`] is plain data: callers load it with whatever serde format
//! they already use, then [`build`](NoiseSettings::build) it into an
//! [`OrientedNoise`]. Missing fields fall back to seed 0 and the classic
//! orientation for every dimension.

use glam::{DVec2, DVec3, DVec4};
use serde::{Deserialize, Serialize};

use crate::generator::OpenSimplex2;
use crate::orientation::{Orientation2, Orientation3, Orientation4};

/// Seed and per-dimension orientation choice.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
    /// Seed for the permutation table.
    pub seed: i64,
    /// Orientation used by [`OrientedNoise::sample2`].
    pub orientation_2d: Orientation2,
    /// Orientation used by [`OrientedNoise::sample3`].
    pub orientation_3d: Orientation3,
    /// Orientation used by [`OrientedNoise::sample4`].
    pub orientation_4d: Orientation4,
}

impl NoiseSettings {
    /// Settings with the given seed and classic orientations.
    #[must_use]
    pub fn with_seed(seed: i64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Build the generator these settings describe.
    #[must_use]
    pub fn build(&self) -> OrientedNoise {
        tracing::debug!(
            seed = self.seed,
            orientation_2d = %self.orientation_2d,
            orientation_3d = %self.orientation_3d,
            orientation_4d = %self.orientation_4d,
            "building oriented noise"
        );
        OrientedNoise {
            noise: OpenSimplex2::new(self.seed),
            settings: *self,
        }
    }
}

/// A generator bound to a fixed orientation per dimension.
#[derive(Debug, Clone)]
pub struct OrientedNoise {
    noise: OpenSimplex2,
    settings: NoiseSettings,
}

impl OrientedNoise {
    /// The settings this generator was built from.
    #[must_use]
    pub const fn settings(&self) -> &NoiseSettings {
        &self.settings
    }

    /// The underlying generator.
    #[must_use]
    pub const fn inner(&self) -> &OpenSimplex2 {
        &self.noise
    }

    /// 2D noise with the configured orientation.
    #[inline]
    #[must_use]
    pub fn sample2(&self, x: f64, y: f64) -> f64 {
        self.noise.sample2(self.settings.orientation_2d, x, y)
    }

    /// 3D noise with the configured orientation.
    #[inline]
    #[must_use]
    pub fn sample3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise.sample3(self.settings.orientation_3d, x, y, z)
    }

    /// 4D noise with the configured orientation.
    #[inline]
    #[must_use]
    pub fn sample4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.noise.sample4(self.settings.orientation_4d, x, y, z, w)
    }

    /// [`sample2`](Self::sample2) taking a vector.
    #[inline]
    #[must_use]
    pub fn sample2_vec(&self, p: DVec2) -> f64 {
        self.sample2(p.x, p.y)
    }

    /// [`sample3`](Self::sample3) taking a vector.
    #[inline]
    #[must_use]
    pub fn sample3_vec(&self, p: DVec3) -> f64 {
        self.sample3(p.x, p.y, p.z)
    }

    /// [`sample4`](Self::sample4) taking a vector.
    #[inline]
    #[must_use]
    pub fn sample4_vec(&self, p: DVec4) -> f64 {
        self.sample4(p.x, p.y, p.z, p.w)
    }
}
