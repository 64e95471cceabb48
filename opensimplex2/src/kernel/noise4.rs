//! 4D kernel: five-vertex walk with incremental re-basing.

use std::mem;

use opensimplex2_tables::UNSKEW_4D;

use super::{FALLOFF_RADIUS_SQ, KernelContext, LatticeProbe};
use crate::math::floor;

/// Number of lattice vertices every 4D query visits.
pub(crate) const VERTICES_PER_QUERY: usize = 5;

/// Evaluate 4D noise at skewed coordinates `(xs, ys, zs, ws)`.
///
/// The lattice is five interleaved copies of the integer lattice, each offset
/// by `(0.2, 0.2, 0.2, 0.2)` from the previous. The first vertex is chosen on
/// the unit hypercube of the query; every following vertex is the closest one
/// on the copy based at the vertex just visited, found by stepping the
/// fractional coordinates with that vertex's stored deltas.
#[inline]
#[allow(clippy::many_single_char_names, clippy::similar_names)]
pub fn noise4<P: LatticeProbe>(
    ctx: &KernelContext<'_>,
    xs: f64,
    ys: f64,
    zs: f64,
    ws: f64,
    probe: &mut P,
) -> f64 {
    let mut xsb = floor(xs);
    let mut ysb = floor(ys);
    let mut zsb = floor(zs);
    let mut wsb = floor(ws);
    let mut xsi = xs - f64::from(xsb);
    let mut ysi = ys - f64::from(ysb);
    let mut zsi = zs - f64::from(zsb);
    let mut wsi = ws - f64::from(wsb);

    // Flip the lower half of the hypercube onto the upper half so one set of
    // cases covers both; the flip is undone once the vertex is chosen.
    let mut si_sum = xsi + ysi + zsi + wsi;
    let mut ssi = si_sum * UNSKEW_4D;
    let in_lower_half = si_sum < 2.0;
    if in_lower_half {
        xsi = 1.0 - xsi;
        ysi = 1.0 - ysi;
        zsi = 1.0 - zsi;
        wsi = 1.0 - wsi;
        si_sum = 4.0 - si_sum;
    }

    let mut vertex_index = first_vertex(xsi, ysi, zsi, wsi, si_sum);

    if in_lower_half {
        xsi = 1.0 - xsi;
        ysi = 1.0 - ysi;
        zsi = 1.0 - zsi;
        wsi = 1.0 - wsi;
        vertex_index ^= 0b1111;
    }

    let mut value = 0.0;
    for i in 0..VERTICES_PER_QUERY {
        let c = &ctx.lattice.vertices_4d[vertex_index];
        xsb = xsb.wrapping_add(c.xsv);
        ysb = ysb.wrapping_add(c.ysv);
        zsb = zsb.wrapping_add(c.zsv);
        wsb = wsb.wrapping_add(c.wsv);

        let xi = xsi + ssi;
        let yi = ysi + ssi;
        let zi = zsi + ssi;
        let wi = wsi + ssi;
        let dx = xi + c.dx;
        let dy = yi + c.dy;
        let dz = zi + c.dz;
        let dw = wi + c.dw;
        let attn = FALLOFF_RADIUS_SQ - dx * dx - dy * dy - dz * dz - dw * dw;
        if attn > 0.0 {
            probe.visit(true);

            let grad = ctx.table.grad4(xsb, ysb, zsb, wsb);
            let ramped = grad.dx * dx + grad.dy * dy + grad.dz * dz + grad.dw * dw;

            let attn = attn * attn;
            value += attn * attn * ramped;
        } else {
            probe.visit(false);
        }

        if i == VERTICES_PER_QUERY - 1 {
            break;
        }

        // Re-base the fractional coordinates on the vertex just visited.
        xsi += c.xsi;
        ysi += c.ysi;
        zsi += c.zsi;
        wsi += c.wsi;
        ssi += c.ssi_delta;

        let score0 = 1.0 + ssi * (-1.0 / UNSKEW_4D);
        vertex_index = next_vertex(xsi, ysi, zsi, wsi, score0);
    }

    value
}

/// Pick the first vertex on the upper half of the unit hypercube.
///
/// The strongest of the three diagonal scores decides which pair of axes the
/// point leans toward; the two remaining axes then decide whether to move to a
/// more extreme vertex near the cell boundary.
#[inline]
fn first_vertex(xsi: f64, ysi: f64, zsi: f64, wsi: f64, si_sum: f64) -> usize {
    let aabb = xsi + ysi - zsi - wsi;
    let abab = xsi - ysi + zsi - wsi;
    let abba = xsi - ysi - zsi + wsi;
    let aabb_score = aabb.abs();
    let abab_score = abab.abs();
    let abba_score = abba.abs();

    let (vertex_index, mut via, vib, mut asi, mut bsi) =
        if aabb_score > abab_score && aabb_score > abba_score {
            if aabb > 0.0 {
                (0b0011, 0b0111, 0b1011, zsi, wsi)
            } else {
                (0b1100, 0b1101, 0b1110, xsi, ysi)
            }
        } else if abab_score > abba_score {
            if abab > 0.0 {
                (0b0101, 0b0111, 0b1101, ysi, wsi)
            } else {
                (0b1010, 0b1011, 0b1110, xsi, zsi)
            }
        } else if abba > 0.0 {
            (0b1001, 0b1011, 0b1101, ysi, zsi)
        } else {
            (0b0110, 0b0111, 0b1110, xsi, wsi)
        };

    if bsi > asi {
        via = vib;
        mem::swap(&mut asi, &mut bsi);
    }

    if si_sum + asi > 3.0 {
        if si_sum + bsi > 4.0 { 0b1111 } else { via }
    } else {
        vertex_index
    }
}

/// Closest vertex of the lattice copy based at the previously visited vertex.
#[inline]
fn next_vertex(xsi: f64, ysi: f64, zsi: f64, wsi: f64, score0: f64) -> usize {
    if xsi >= ysi && xsi >= zsi && xsi >= wsi && xsi >= score0 {
        0b0001
    } else if ysi > xsi && ysi >= zsi && ysi >= wsi && ysi >= score0 {
        0b0010
    } else if zsi > xsi && zsi > ysi && zsi >= wsi && zsi >= score0 {
        0b0100
    } else if wsi > xsi && wsi > ysi && wsi > zsi && wsi >= score0 {
        0b1000
    } else {
        0b0000
    }
}
