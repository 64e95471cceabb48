//! Seeded permutation table and its gradient projections.
//!
//! A [`PermutationTable`] is a seed-derived bijection on `[0, PSIZE)` plus one
//! gradient projection per dimensionality, so that hashing a lattice vertex
//! ends in a single array load of the gradient to use.

use std::fmt;

use opensimplex2_tables::{
    GRADIENTS_2D, GRADIENTS_3D, GRADIENTS_4D, Grad2, Grad3, Grad4, PMASK, PSIZE,
};

/// Multiplier of the seed recurrence (Knuth's MMIX LCG).
#[allow(clippy::unreadable_literal)]
const SEED_MULTIPLIER: i64 = 6364136223846793005;
/// Increment of the seed recurrence.
#[allow(clippy::unreadable_literal)]
const SEED_INCREMENT: i64 = 1442695040888963407;

/// Advance the seed recurrence by one step: `seed * C1 + C2`, wrapping.
#[inline]
#[must_use]
pub const fn mix_seed(seed: i64) -> i64 {
    seed.wrapping_mul(SEED_MULTIPLIER).wrapping_add(SEED_INCREMENT)
}

/// Fold a lattice coordinate into `[0, PSIZE)`.
#[inline]
const fn wrap(coord: i32) -> usize {
    (coord & PMASK) as usize
}

/// Seed-derived permutation of `[0, PSIZE)` with per-dimension gradient projections.
///
/// Immutable once built; share it freely between threads.
#[derive(Clone)]
pub struct PermutationTable {
    perm: Box<[u16]>,
    grad2: Box<[Grad2]>,
    grad3: Box<[Grad3]>,
    grad4: Box<[Grad4]>,
}

impl PermutationTable {
    /// Build the table for `seed`.
    ///
    /// Draws a Fisher-Yates shuffle from the identity sequence, advancing the
    /// seed recurrence once per drawn slot.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        let mut source: Vec<u16> = (0..PSIZE as u16).collect();
        let mut perm = vec![0u16; PSIZE].into_boxed_slice();

        let mut state = seed;
        for i in (0..PSIZE).rev() {
            state = mix_seed(state);
            let r = state.wrapping_add(31).rem_euclid(i as i64 + 1) as usize;
            perm[i] = source[r];
            source[r] = source[i];
        }

        let grad2 = perm
            .iter()
            .map(|&p| GRADIENTS_2D.cyclic(usize::from(p)))
            .collect();
        let grad3 = perm
            .iter()
            .map(|&p| GRADIENTS_3D.cyclic(usize::from(p)))
            .collect();
        let grad4 = perm
            .iter()
            .map(|&p| GRADIENTS_4D.cyclic(usize::from(p)))
            .collect();

        tracing::debug!(seed, size = PSIZE, "built permutation table");

        Self {
            perm,
            grad2,
            grad3,
            grad4,
        }
    }

    /// The permutation itself.
    #[must_use]
    pub fn perm(&self) -> &[u16] {
        &self.perm
    }

    #[inline]
    fn p(&self, coord: usize) -> usize {
        usize::from(self.perm[coord])
    }

    /// Gradient assigned to the 2D lattice vertex `(x, y)`.
    #[inline]
    #[must_use]
    pub fn grad2(&self, x: i32, y: i32) -> Grad2 {
        self.grad2[self.p(wrap(x)) ^ wrap(y)]
    }

    /// Gradient assigned to the 3D lattice vertex `(x, y, z)`.
    #[inline]
    #[must_use]
    pub fn grad3(&self, x: i32, y: i32, z: i32) -> Grad3 {
        self.grad3[self.p(self.p(wrap(x)) ^ wrap(y)) ^ wrap(z)]
    }

    /// Gradient assigned to the 4D lattice vertex `(x, y, z, w)`.
    #[inline]
    #[must_use]
    pub fn grad4(&self, x: i32, y: i32, z: i32, w: i32) -> Grad4 {
        self.grad4[self.p(self.p(self.p(wrap(x)) ^ wrap(y)) ^ wrap(z)) ^ wrap(w)]
    }
}

impl fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermutationTable")
            .field("size", &self.perm.len())
            .field("head", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}
