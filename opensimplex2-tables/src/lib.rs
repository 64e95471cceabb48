//! Static gradient and lattice tables for OpenSimplex2 noise.
//!
//! Every table in this crate is generated at build time from
//! `build_assets/gradients.json` and the lattice rules in `build/lattice.rs`,
//! then embedded as immutable `static` data. Nothing here is ever mutated, so
//! the tables can be read from any number of threads without synchronisation.
//!
//! # Key Types
//!
//! - [`GradientSet`] - A catalogue of normalised gradient directions
//! - [`LatticeTopology`] - The candidate vertices tested by each noise kernel
//! - [`LatticePoint3D`] - A node of the pruned 3D decision chain

mod gradient;
mod lattice;

pub use gradient::{
    GRADIENTS_2D, GRADIENTS_3D, GRADIENTS_4D, Grad2, Grad3, Grad4, GradientSet, N2, N3, N4,
};
pub use lattice::{
    HALF_LATTICE_OFFSET, LatticePoint2D, LatticePoint3D, LatticePoint4D, LatticeTopology,
    TOPOLOGY, UNSKEW_2D, UNSKEW_4D, VERTEX_BIAS_4D,
};

/// Size of the permutation table and of every broadcast gradient set.
pub const PSIZE: usize = 2048;

/// Mask folding a lattice coordinate into `[0, PSIZE)`.
pub const PMASK: i32 = 2047;
