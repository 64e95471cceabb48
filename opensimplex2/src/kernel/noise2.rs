//! 2D kernel: triangle walk on the skewed simplex lattice.

use opensimplex2_tables::UNSKEW_2D;

use super::{FALLOFF_RADIUS_SQ, KernelContext, LatticeProbe};
use crate::math::floor;

/// Evaluate 2D noise at skewed coordinates `(xs, ys)`.
///
/// The skewed unit cell is a rhombus split into two triangles; the corners of
/// the one containing the point are the three consecutive `lookup_2d` entries
/// starting at 0 (lower-right triangle) or 1 (upper-left triangle).
#[inline]
pub fn noise2<P: LatticeProbe>(ctx: &KernelContext<'_>, xs: f64, ys: f64, probe: &mut P) -> f64 {
    let xsb = floor(xs);
    let ysb = floor(ys);
    let xsi = xs - f64::from(xsb);
    let ysi = ys - f64::from(ysb);

    // Saturating cast; only non-finite input can push this past 1.
    let index = (((ysi - xsi) / 2.0 + 1.0) as usize).min(1);

    let ssi = (xsi + ysi) * UNSKEW_2D;
    let xi = xsi + ssi;
    let yi = ysi + ssi;

    let mut value = 0.0;
    for c in &ctx.lattice.lookup_2d[index..index + 3] {
        let dx = xi + c.dx;
        let dy = yi + c.dy;
        let attn = FALLOFF_RADIUS_SQ - dx * dx - dy * dy;
        if attn <= 0.0 {
            probe.visit(false);
            continue;
        }
        probe.visit(true);

        let grad = ctx.table.grad2(xsb.wrapping_add(c.xsv), ysb.wrapping_add(c.ysv));
        let extrapolation = grad.dx * dx + grad.dy * dy;

        let attn = attn * attn;
        value += attn * attn * extrapolation;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{KernelTrace, NoProbe};
    use crate::permutation::PermutationTable;

    #[test]
    fn visits_exactly_three_corners() {
        let table = PermutationTable::new(0);
        let ctx = KernelContext::new(&table);
        for i in 0..1000 {
            let x = f64::from(i) * 0.137 - 50.0;
            let y = f64::from(i) * -0.291 + 20.0;
            let mut trace = KernelTrace::default();
            noise2(&ctx, x, y, &mut trace);
            assert_eq!(trace.visited, 3);
            assert!(trace.contributed <= 3);
        }
    }

    #[test]
    fn lattice_vertices_are_zero_crossings() {
        let table = PermutationTable::new(99);
        let ctx = KernelContext::new(&table);
        for (x, y) in [(0.0, 0.0), (3.0, -7.0), (-12.0, 5.0)] {
            let v = noise2(&ctx, x, y, &mut NoProbe);
            assert!(v.abs() < 1e-12, "noise at vertex ({x}, {y}) is {v}");
        }
    }

    #[test]
    fn non_finite_input_yields_nan_without_panicking() {
        let table = PermutationTable::new(1);
        let ctx = KernelContext::new(&table);
        assert!(noise2(&ctx, f64::NAN, 0.0, &mut NoProbe).is_nan());
        let v = noise2(&ctx, f64::INFINITY, 1.0, &mut NoProbe);
        assert!(!v.is_finite() || v == 0.0);
    }
}
