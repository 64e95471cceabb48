//! Lattice topologies: which relative vertices each kernel tests, and in what order.

/// A triangle corner of the 2D lattice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePoint2D {
    /// Skewed X offset from the cell origin.
    pub xsv: i32,
    /// Skewed Y offset from the cell origin.
    pub ysv: i32,
    /// Unskewed X delta from the cell origin to this corner, negated.
    pub dx: f64,
    /// Unskewed Y delta from the cell origin to this corner, negated.
    pub dy: f64,
}

/// A node of an octant's candidate chain on the body-centred-cubic lattice.
///
/// The lattice is two interleaved cubic half-lattices; points of the second
/// half-lattice carry [`HALF_LATTICE_OFFSET`] in their hash offsets so the two
/// never share permutation entries. Links index into the same octant's chain,
/// and `None` ends the walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePoint3D {
    /// X offset from the cell origin, including the half-lattice hash offset.
    pub xrv: i32,
    /// Y offset from the cell origin, including the half-lattice hash offset.
    pub yrv: i32,
    /// Z offset from the cell origin, including the half-lattice hash offset.
    pub zrv: i32,
    /// Negated X distance from the cell origin to this point.
    pub dxr: f64,
    /// Negated Y distance from the cell origin to this point.
    pub dyr: f64,
    /// Negated Z distance from the cell origin to this point.
    pub dzr: f64,
    /// Next node to test when this one lies outside the falloff radius.
    pub next_on_failure: Option<u8>,
    /// Next node to test when this one contributed.
    pub next_on_success: Option<u8>,
}

/// A vertex of the 4D lattice's unit hypercube.
///
/// Besides the offset and delta of the vertex itself, each entry stores the
/// step that re-expresses the fractional coordinates relative to this vertex,
/// so the kernel can walk from one vertex to the next without redoing the skew.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePoint4D {
    /// X offset, biased by [`VERTEX_BIAS_4D`].
    pub xsv: i32,
    /// Y offset, biased by [`VERTEX_BIAS_4D`].
    pub ysv: i32,
    /// Z offset, biased by [`VERTEX_BIAS_4D`].
    pub zsv: i32,
    /// W offset, biased by [`VERTEX_BIAS_4D`].
    pub wsv: i32,
    /// Unskewed X delta, negated.
    pub dx: f64,
    /// Unskewed Y delta, negated.
    pub dy: f64,
    /// Unskewed Z delta, negated.
    pub dz: f64,
    /// Unskewed W delta, negated.
    pub dw: f64,
    /// Step applied to the fractional X coordinate after visiting this vertex.
    pub xsi: f64,
    /// Step applied to the fractional Y coordinate after visiting this vertex.
    pub ysi: f64,
    /// Step applied to the fractional Z coordinate after visiting this vertex.
    pub zsi: f64,
    /// Step applied to the fractional W coordinate after visiting this vertex.
    pub wsi: f64,
    /// Step applied to the running skew sum after visiting this vertex.
    pub ssi_delta: f64,
}

#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
mod generated {
    use super::{LatticePoint2D, LatticePoint3D, LatticePoint4D};

    include!(concat!(env!("OUT_DIR"), "/lattice.rs"));
}

pub use generated::{HALF_LATTICE_OFFSET, UNSKEW_2D, UNSKEW_4D, VERTEX_BIAS_4D};

/// The candidate-vertex tables of all three kernels.
#[derive(Debug)]
pub struct LatticeTopology {
    /// Triangle corners of the 2D lattice.
    pub lookup_2d: &'static [LatticePoint2D; 4],
    /// Per-octant candidate chains of the 3D lattice; node 0 is the root.
    pub lookup_3d: &'static [[LatticePoint3D; 8]; 8],
    /// Hypercube vertices of the 4D lattice, indexed by axis bitmask.
    pub vertices_4d: &'static [LatticePoint4D; 16],
}

/// The process-wide lattice topology.
pub static TOPOLOGY: LatticeTopology = LatticeTopology {
    lookup_2d: &generated::LOOKUP_2D,
    lookup_3d: &generated::LOOKUP_3D,
    vertices_4d: &generated::VERTICES_4D,
};
