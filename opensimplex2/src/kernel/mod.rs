//! Per-dimension noise kernels.
//!
//! A kernel takes coordinates that an [`Orientation`](crate::orientation)
//! adapter has already skewed into lattice space, walks the candidate lattice
//! vertices near that point and sums their attenuated gradient contributions.
//! Everything a kernel reads arrives through its [`KernelContext`].
//!
//! Each contribution is `(0.5 - |d|^2)^4 * dot(gradient, d)` for the offset `d`
//! from the vertex to the query point, and vertices beyond the falloff radius
//! contribute nothing.

mod noise2;
mod noise3;
mod noise4;

pub use noise2::noise2;
pub use noise3::noise3;
pub use noise4::noise4;

use opensimplex2_tables::{LatticeTopology, TOPOLOGY};

use crate::permutation::PermutationTable;

/// Squared falloff radius shared by all kernels.
const FALLOFF_RADIUS_SQ: f64 = 0.5;

/// The read-only state a kernel evaluates against.
#[derive(Debug, Clone, Copy)]
pub struct KernelContext<'a> {
    /// Seeded permutation and gradient projections.
    pub table: &'a PermutationTable,
    /// Candidate-vertex tables.
    pub lattice: &'a LatticeTopology,
}

impl<'a> KernelContext<'a> {
    /// Pair `table` with the process-wide lattice topology.
    #[must_use]
    pub const fn new(table: &'a PermutationTable) -> Self {
        Self {
            table,
            lattice: &TOPOLOGY,
        }
    }
}

/// Observer of the lattice walk, called once per tested vertex.
pub trait LatticeProbe {
    /// A vertex was tested; `contributed` is whether it lay inside the falloff radius.
    fn visit(&mut self, contributed: bool);
}

/// Probe that records nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProbe;

impl LatticeProbe for NoProbe {
    #[inline(always)]
    fn visit(&mut self, _contributed: bool) {}
}

/// Counts of the vertices a single query tested.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KernelTrace {
    /// Vertices tested against the falloff radius.
    pub visited: u32,
    /// Vertices that passed the test and were accumulated.
    pub contributed: u32,
}

impl LatticeProbe for KernelTrace {
    #[inline]
    fn visit(&mut self, contributed: bool) {
        self.visited += 1;
        if contributed {
            self.contributed += 1;
        }
    }
}
