//! 3D kernel: pruned candidate search on the body-centred-cubic lattice.

use super::{FALLOFF_RADIUS_SQ, KernelContext, LatticeProbe};
use crate::math::floor;

/// Evaluate 3D noise at rotated coordinates `(xr, yr, zr)`.
///
/// The octant of the unit cell holding the point selects a chain of eight
/// candidates. The first two are always tested; after that a hit on either
/// half-lattice rules out the remaining candidates of that half-lattice, so at
/// most four vertices ever contribute.
#[inline]
pub fn noise3<P: LatticeProbe>(
    ctx: &KernelContext<'_>,
    xr: f64,
    yr: f64,
    zr: f64,
    probe: &mut P,
) -> f64 {
    let xrb = floor(xr);
    let yrb = floor(yr);
    let zrb = floor(zr);
    let xri = xr - f64::from(xrb);
    let yri = yr - f64::from(yrb);
    let zri = zr - f64::from(zrb);

    let xht = octant_bit(xri);
    let yht = octant_bit(yri);
    let zht = octant_bit(zri);
    let chain = &ctx.lattice.lookup_3d[xht | (yht << 1) | (zht << 2)];

    let mut value = 0.0;
    let mut next = Some(0u8);
    while let Some(node) = next {
        let c = &chain[usize::from(node)];
        let dxr = xri + c.dxr;
        let dyr = yri + c.dyr;
        let dzr = zri + c.dzr;
        let attn = FALLOFF_RADIUS_SQ - dxr * dxr - dyr * dyr - dzr * dzr;
        if attn < 0.0 {
            probe.visit(false);
            next = c.next_on_failure;
        } else {
            probe.visit(true);

            let grad = ctx.table.grad3(
                xrb.wrapping_add(c.xrv),
                yrb.wrapping_add(c.yrv),
                zrb.wrapping_add(c.zrv),
            );
            let extrapolation = grad.dx * dxr + grad.dy * dyr + grad.dz * dzr;

            let attn = attn * attn;
            value += attn * attn * extrapolation;
            next = c.next_on_success;
        }
    }
    value
}

/// Which half of the unit interval a fractional coordinate lies in.
#[inline]
fn octant_bit(fraction: f64) -> usize {
    // Saturating cast; only non-finite input can push this past 1.
    ((fraction + 0.5) as usize).min(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{KernelTrace, NoProbe};
    use crate::permutation::PermutationTable;

    #[test]
    fn credits_at_most_four_vertices() {
        let table = PermutationTable::new(0);
        let ctx = KernelContext::new(&table);
        let mut max_contributed = 0;
        for i in 0..20_000 {
            let t = f64::from(i);
            let mut trace = KernelTrace::default();
            noise3(&ctx, t * 0.0173, t * -0.0291 + 3.0, t * 0.0077 - 9.0, &mut trace);
            assert!(trace.contributed <= 4, "{trace:?} at step {i}");
            assert!(trace.visited >= 2 && trace.visited <= 8, "{trace:?} at step {i}");
            max_contributed = max_contributed.max(trace.contributed);
        }
        assert!(max_contributed >= 2);
    }

    #[test]
    fn cell_centre_of_first_octant_walks_the_whole_chain() {
        let table = PermutationTable::new(5);
        let ctx = KernelContext::new(&table);
        let mut trace = KernelTrace::default();
        noise3(&ctx, 0.25, 0.25, 0.25, &mut trace);
        assert_eq!(trace, KernelTrace { visited: 8, contributed: 2 });
    }

    #[test]
    fn octant_bit_thresholds_at_one_half() {
        assert_eq!(octant_bit(0.0), 0);
        assert_eq!(octant_bit(0.499), 0);
        assert_eq!(octant_bit(0.5), 1);
        assert_eq!(octant_bit(0.999), 1);
        assert_eq!(octant_bit(f64::INFINITY), 1);
        assert_eq!(octant_bit(f64::NAN), 0);
    }

    #[test]
    fn non_finite_input_yields_nan_without_panicking() {
        let table = PermutationTable::new(1);
        let ctx = KernelContext::new(&table);
        assert!(noise3(&ctx, 0.3, f64::NAN, 0.1, &mut NoProbe).is_nan());
        let _ = noise3(&ctx, f64::INFINITY, f64::NEG_INFINITY, 0.0, &mut NoProbe);
    }
}
