use proc_macro2::TokenStream;
use quote::quote;

/// Unskew factor for the 2D triangular lattice: `(1 / sqrt(3) - 1) / 2`.
#[allow(clippy::unreadable_literal)]
const UNSKEW_2D: f64 = -0.211324865405187;
/// Unskew factor for the 4D lattice.
#[allow(clippy::unreadable_literal)]
const UNSKEW_4D: f64 = 0.309016994374947;
/// Hash offset separating the two cubic half-lattices of the BCC lattice.
const HALF_LATTICE_OFFSET: i32 = 1024;
/// Per-vertex hash bias of the 4D lattice; five steps span `PSIZE`.
const VERTEX_BIAS_4D: i32 = 409;

/// Index of a node inside an octant's eight-entry chain.
type Node = u8;

fn lattice_point_2d(xsv: i32, ysv: i32) -> TokenStream {
    let ssv = f64::from(xsv + ysv) * UNSKEW_2D;
    let dx = f64::from(-xsv) - ssv;
    let dy = f64::from(-ysv) - ssv;
    quote! { LatticePoint2D { xsv: #xsv, ysv: #ysv, dx: #dx, dy: #dy } }
}

fn lattice_point_3d(
    (xrv, yrv, zrv): (i32, i32, i32),
    lattice: i32,
    next_on_failure: Option<Node>,
    next_on_success: Option<Node>,
) -> TokenStream {
    let half = f64::from(lattice) * 0.5;
    let dxr = f64::from(-xrv) + half;
    let dyr = f64::from(-yrv) + half;
    let dzr = f64::from(-zrv) + half;
    let offset = lattice * HALF_LATTICE_OFFSET;
    let xrv = xrv + offset;
    let yrv = yrv + offset;
    let zrv = zrv + offset;
    let next_on_failure = link(next_on_failure);
    let next_on_success = link(next_on_success);
    quote! {
        LatticePoint3D {
            xrv: #xrv, yrv: #yrv, zrv: #zrv,
            dxr: #dxr, dyr: #dyr, dzr: #dzr,
            next_on_failure: #next_on_failure,
            next_on_success: #next_on_success,
        }
    }
}

fn link(next: Option<Node>) -> TokenStream {
    match next {
        Some(node) => quote! { Some(#node) },
        None => quote! { None },
    }
}

/// The eight candidate nodes of one octant together with their decision links.
///
/// Nodes 0 and 1 (one per half-lattice) are always tested. Nodes 2..=4 are
/// single steps on the first half-lattice, nodes 5..=7 on the second. A hit on
/// one half-lattice rules out the rest of that half-lattice, and a hit on node
/// 2 also rules out node 5.
fn octant_chain(octant: i32) -> TokenStream {
    let i1 = octant & 1;
    let j1 = (octant >> 1) & 1;
    let k1 = (octant >> 2) & 1;
    let i2 = i1 ^ 1;
    let j2 = j1 ^ 1;
    let k2 = k1 ^ 1;

    let nodes = [
        lattice_point_3d((i1, j1, k1), 0, Some(1), Some(1)),
        lattice_point_3d((i1 + i2, j1 + j2, k1 + k2), 1, Some(2), Some(2)),
        lattice_point_3d((i1 ^ 1, j1, k1), 0, Some(3), Some(6)),
        lattice_point_3d((i1, j1 ^ 1, k1), 0, Some(4), Some(5)),
        lattice_point_3d((i1, j1, k1 ^ 1), 0, Some(5), Some(5)),
        lattice_point_3d((i1 + (i2 ^ 1), j1 + j2, k1 + k2), 1, Some(6), None),
        lattice_point_3d((i1 + i2, j1 + (j2 ^ 1), k1 + k2), 1, Some(7), None),
        lattice_point_3d((i1 + i2, j1 + j2, k1 + (k2 ^ 1)), 1, None, None),
    ];

    quote! { [#(#nodes),*] }
}

fn lattice_point_4d(vertex: i32) -> TokenStream {
    let xsv = vertex & 1;
    let ysv = (vertex >> 1) & 1;
    let zsv = (vertex >> 2) & 1;
    let wsv = (vertex >> 3) & 1;

    let ssv = f64::from(xsv + ysv + zsv + wsv) * UNSKEW_4D;
    let dx = f64::from(-xsv) - ssv;
    let dy = f64::from(-ysv) - ssv;
    let dz = f64::from(-zsv) - ssv;
    let dw = f64::from(-wsv) - ssv;
    let xsi = 0.2 - f64::from(xsv);
    let ysi = 0.2 - f64::from(ysv);
    let zsi = 0.2 - f64::from(zsv);
    let wsi = 0.2 - f64::from(wsv);
    let ssi_delta =
        (0.8 - f64::from(xsv) - f64::from(ysv) - f64::from(zsv) - f64::from(wsv)) * UNSKEW_4D;

    let xsv = xsv + VERTEX_BIAS_4D;
    let ysv = ysv + VERTEX_BIAS_4D;
    let zsv = zsv + VERTEX_BIAS_4D;
    let wsv = wsv + VERTEX_BIAS_4D;

    quote! {
        LatticePoint4D {
            xsv: #xsv, ysv: #ysv, zsv: #zsv, wsv: #wsv,
            dx: #dx, dy: #dy, dz: #dz, dw: #dw,
            xsi: #xsi, ysi: #ysi, zsi: #zsi, wsi: #wsi,
            ssi_delta: #ssi_delta,
        }
    }
}

/// Generate the lattice topology tables for all three dimensions.
pub(crate) fn build() -> TokenStream {
    let lookup_2d = [(1, 0), (0, 0), (1, 1), (0, 1)]
        .into_iter()
        .map(|(xsv, ysv)| lattice_point_2d(xsv, ysv));
    let lookup_3d = (0..8).map(octant_chain);
    let vertices_4d = (0..16).map(lattice_point_4d);

    quote! {
        /// Unskew factor for the 2D triangular lattice.
        pub const UNSKEW_2D: f64 = #UNSKEW_2D;
        /// Unskew factor for the 4D lattice.
        pub const UNSKEW_4D: f64 = #UNSKEW_4D;
        /// Hash offset separating the two cubic half-lattices of the 3D lattice.
        pub const HALF_LATTICE_OFFSET: i32 = #HALF_LATTICE_OFFSET;
        /// Per-vertex hash bias of the 4D lattice.
        pub const VERTEX_BIAS_4D: i32 = #VERTEX_BIAS_4D;

        /// Triangle corners of the skewed unit rhombus; a query reads three
        /// consecutive entries starting at 0 or 1.
        pub static LOOKUP_2D: [LatticePoint2D; 4] = [#(#lookup_2d),*];

        /// Candidate chains of the 3D lattice, one per octant of the unit cell.
        pub static LOOKUP_3D: [[LatticePoint3D; 8]; 8] = [#(#lookup_3d),*];

        /// The sixteen unit-hypercube vertices of the 4D lattice, indexed by axis bitmask.
        pub static VERTICES_4D: [LatticePoint4D; 16] = [#(#vertices_4d),*];
    }
}
