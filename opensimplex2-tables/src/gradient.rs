//! Gradient catalogues for the 2D, 3D and 4D kernels.
//!
//! The raw directions are scaled by the per-dimension normalisation divisor so
//! that the quartic falloff kernel yields values of roughly unit magnitude.

use crate::PSIZE;

/// A 2D gradient direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grad2 {
    /// X component.
    pub dx: f64,
    /// Y component.
    pub dy: f64,
}

/// A 3D gradient direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grad3 {
    /// X component.
    pub dx: f64,
    /// Y component.
    pub dy: f64,
    /// Z component.
    pub dz: f64,
}

/// A 4D gradient direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grad4 {
    /// X component.
    pub dx: f64,
    /// Y component.
    pub dy: f64,
    /// Z component.
    pub dz: f64,
    /// W component.
    pub dw: f64,
}

#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
mod generated {
    use super::{Grad2, Grad3, Grad4};

    include!(concat!(env!("OUT_DIR"), "/gradients.rs"));
}

pub use generated::{N2, N3, N4};

/// An immutable catalogue of gradient directions.
///
/// The permutation table addresses a set as if it were repeated cyclically up
/// to [`PSIZE`] entries; [`cyclic`](GradientSet::cyclic) performs that lookup
/// without materialising the repetition.
#[derive(Debug)]
pub struct GradientSet<G: 'static> {
    vectors: &'static [G],
}

impl<G: Copy> GradientSet<G> {
    const fn new(vectors: &'static [G]) -> Self {
        Self { vectors }
    }

    /// The distinct directions of this set.
    #[must_use]
    pub const fn vectors(&self) -> &'static [G] {
        self.vectors
    }

    /// Number of distinct directions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Always `false`; every catalogue holds at least one direction.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// The direction at `index` of the set broadcast to [`PSIZE`] entries.
    #[inline]
    #[must_use]
    pub fn cyclic(&self, index: usize) -> G {
        debug_assert!(index < PSIZE);
        self.vectors[index % self.vectors.len()]
    }
}

/// 24 directions evenly spaced around the circle.
pub static GRADIENTS_2D: GradientSet<Grad2> = GradientSet::new(&generated::GRADIENT_VECTORS_2D);

/// 48 directions of equal length covering the sphere.
pub static GRADIENTS_3D: GradientSet<Grad3> = GradientSet::new(&generated::GRADIENT_VECTORS_3D);

/// 160 unit directions covering the 3-sphere.
pub static GRADIENTS_4D: GradientSet<Grad4> = GradientSet::new(&generated::GRADIENT_VECTORS_4D);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_sizes() {
        assert_eq!(GRADIENTS_2D.len(), 24);
        assert_eq!(GRADIENTS_3D.len(), 48);
        assert_eq!(GRADIENTS_4D.len(), 160);
    }

    #[test]
    fn gradients_2d_are_normalised_unit_vectors() {
        for g in GRADIENTS_2D.vectors() {
            let len = (g.dx * g.dx + g.dy * g.dy).sqrt() * N2;
            assert!((len - 1.0).abs() < 1e-9, "2D gradient {g:?} has length {len}");
        }
    }

    #[test]
    fn gradients_3d_share_one_length() {
        let first = GRADIENTS_3D.vectors()[0];
        let expected = (first.dx * first.dx + first.dy * first.dy + first.dz * first.dz).sqrt();
        for g in GRADIENTS_3D.vectors() {
            let len = (g.dx * g.dx + g.dy * g.dy + g.dz * g.dz).sqrt();
            assert!(
                (len - expected).abs() / expected < 1e-9,
                "3D gradient {g:?} has length {len}, expected {expected}"
            );
        }
    }

    #[test]
    fn gradients_4d_are_normalised_unit_vectors() {
        for g in GRADIENTS_4D.vectors() {
            let len = (g.dx * g.dx + g.dy * g.dy + g.dz * g.dz + g.dw * g.dw).sqrt() * N4;
            assert!((len - 1.0).abs() < 1e-9, "4D gradient {g:?} has length {len}");
        }
    }

    #[test]
    fn first_2d_gradient_matches_raw_value() {
        let g = GRADIENTS_2D.vectors()[0];
        #[allow(clippy::float_cmp)]
        {
            assert_eq!(g.dx, 0.130_526_192_220_052 / N2);
            assert_eq!(g.dy, 0.991_444_861_373_81 / N2);
        }
    }

    #[test]
    fn cyclic_lookup_wraps_every_catalogue() {
        assert_eq!(GRADIENTS_2D.cyclic(24), GRADIENTS_2D.cyclic(0));
        assert_eq!(GRADIENTS_3D.cyclic(48 * 3 + 5), GRADIENTS_3D.cyclic(5));
        assert_eq!(GRADIENTS_4D.cyclic(PSIZE - 1), GRADIENTS_4D.vectors()[(PSIZE - 1) % 160]);
    }
}
