//! The public noise generator.
//!
//! [`OpenSimplex2`] owns one seeded [`PermutationTable`] and answers every
//! query by skewing the input with an orientation adapter and handing the
//! result to the kernel for that dimension.

use std::sync::Arc;

use glam::{DVec2, DVec3, DVec4};

use crate::kernel::{self, KernelContext, KernelTrace, LatticeProbe, NoProbe};
use crate::orientation::{Orientation2, Orientation3, Orientation4};
use crate::permutation::PermutationTable;

/// Seeded OpenSimplex2 (fast variant) noise over 2D, 3D and 4D.
///
/// Construction is the only costly step; every query afterwards is a pure
/// read, so one generator can be shared across threads behind a reference or
/// cloned cheaply.
#[derive(Debug, Clone)]
pub struct OpenSimplex2 {
    seed: i64,
    table: Arc<PermutationTable>,
}

impl OpenSimplex2 {
    /// Build a generator for `seed`.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        let _span = tracing::debug_span!("opensimplex2_new", seed).entered();
        Self {
            seed,
            table: Arc::new(PermutationTable::new(seed)),
        }
    }

    /// The seed this generator was built from.
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.seed
    }

    /// The permutation table backing this generator.
    #[must_use]
    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    #[inline]
    fn context(&self) -> KernelContext<'_> {
        KernelContext::new(&self.table)
    }

    #[inline]
    fn eval2<P: LatticeProbe>(&self, o: Orientation2, x: f64, y: f64, probe: &mut P) -> f64 {
        let (xs, ys) = o.skew(x, y);
        kernel::noise2(&self.context(), xs, ys, probe)
    }

    #[inline]
    fn eval3<P: LatticeProbe>(
        &self,
        o: Orientation3,
        x: f64,
        y: f64,
        z: f64,
        probe: &mut P,
    ) -> f64 {
        let (xr, yr, zr) = o.skew(x, y, z);
        kernel::noise3(&self.context(), xr, yr, zr, probe)
    }

    #[inline]
    #[allow(clippy::many_single_char_names)]
    fn eval4<P: LatticeProbe>(
        &self,
        o: Orientation4,
        x: f64,
        y: f64,
        z: f64,
        w: f64,
        probe: &mut P,
    ) -> f64 {
        let (xs, ys, zs, ws) = o.skew(x, y, z, w);
        kernel::noise4(&self.context(), xs, ys, zs, ws, probe)
    }

    // ── Orientation-parameterised queries ───────────────────────────────────

    /// 2D noise at `(x, y)` with the given orientation.
    #[inline]
    #[must_use]
    pub fn sample2(&self, orientation: Orientation2, x: f64, y: f64) -> f64 {
        self.eval2(orientation, x, y, &mut NoProbe)
    }

    /// 3D noise at `(x, y, z)` with the given orientation.
    #[inline]
    #[must_use]
    pub fn sample3(&self, orientation: Orientation3, x: f64, y: f64, z: f64) -> f64 {
        self.eval3(orientation, x, y, z, &mut NoProbe)
    }

    /// 4D noise at `(x, y, z, w)` with the given orientation.
    #[inline]
    #[must_use]
    pub fn sample4(&self, orientation: Orientation4, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.eval4(orientation, x, y, z, w, &mut NoProbe)
    }

    /// [`sample2`](Self::sample2) taking a vector.
    #[inline]
    #[must_use]
    pub fn sample2_vec(&self, orientation: Orientation2, p: DVec2) -> f64 {
        self.sample2(orientation, p.x, p.y)
    }

    /// [`sample3`](Self::sample3) taking a vector.
    #[inline]
    #[must_use]
    pub fn sample3_vec(&self, orientation: Orientation3, p: DVec3) -> f64 {
        self.sample3(orientation, p.x, p.y, p.z)
    }

    /// [`sample4`](Self::sample4) taking a vector.
    #[inline]
    #[must_use]
    pub fn sample4_vec(&self, orientation: Orientation4, p: DVec4) -> f64 {
        self.sample4(orientation, p.x, p.y, p.z, p.w)
    }

    // ── Instrumented queries ────────────────────────────────────────────────

    /// Like [`sample2`](Self::sample2), also reporting how many lattice
    /// vertices were tested and credited.
    #[must_use]
    pub fn trace2(&self, orientation: Orientation2, x: f64, y: f64) -> (f64, KernelTrace) {
        let mut trace = KernelTrace::default();
        let value = self.eval2(orientation, x, y, &mut trace);
        (value, trace)
    }

    /// Like [`sample3`](Self::sample3), also reporting the lattice walk.
    #[must_use]
    pub fn trace3(&self, orientation: Orientation3, x: f64, y: f64, z: f64) -> (f64, KernelTrace) {
        let mut trace = KernelTrace::default();
        let value = self.eval3(orientation, x, y, z, &mut trace);
        (value, trace)
    }

    /// Like [`sample4`](Self::sample4), also reporting the lattice walk.
    #[must_use]
    pub fn trace4(
        &self,
        orientation: Orientation4,
        x: f64,
        y: f64,
        z: f64,
        w: f64,
    ) -> (f64, KernelTrace) {
        let mut trace = KernelTrace::default();
        let value = self.eval4(orientation, x, y, z, w, &mut trace);
        (value, trace)
    }

    // ── Named variants ──────────────────────────────────────────────────────

    /// 2D noise, standard lattice orientation.
    #[inline]
    #[must_use]
    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        self.sample2(Orientation2::Classic, x, y)
    }

    /// 2D noise with Y pointing down the main diagonal.
    ///
    /// Better suited to side-on worlds where Y is vertical.
    #[inline]
    #[must_use]
    pub fn noise2_x_before_y(&self, x: f64, y: f64) -> f64 {
        self.sample2(Orientation2::XBeforeY, x, y)
    }

    /// 3D noise, classic rotation. Use [`noise3_xy_before_z`](Self::noise3_xy_before_z)
    /// or [`noise3_xz_before_y`](Self::noise3_xz_before_y) when one axis is
    /// vertical or time.
    #[inline]
    #[must_use]
    pub fn noise3_classic(&self, x: f64, y: f64, z: f64) -> f64 {
        self.sample3(Orientation3::Classic, x, y, z)
    }

    /// 3D noise tuned for XY slices; Z is vertical or time.
    #[inline]
    #[must_use]
    pub fn noise3_xy_before_z(&self, x: f64, y: f64, z: f64) -> f64 {
        self.sample3(Orientation3::XYBeforeZ, x, y, z)
    }

    /// 3D noise tuned for XZ slices; Y is vertical or time.
    #[inline]
    #[must_use]
    pub fn noise3_xz_before_y(&self, x: f64, y: f64, z: f64) -> f64 {
        self.sample3(Orientation3::XZBeforeY, x, y, z)
    }

    /// 4D noise, classic lattice orientation.
    #[inline]
    #[must_use]
    pub fn noise4_classic(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.sample4(Orientation4::Classic, x, y, z, w)
    }

    /// 4D noise with XY and ZW as triangular-lattice planes.
    #[inline]
    #[must_use]
    pub fn noise4_xy_before_zw(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.sample4(Orientation4::XYBeforeZW, x, y, z, w)
    }

    /// 4D noise with XZ and YW as triangular-lattice planes.
    #[inline]
    #[must_use]
    pub fn noise4_xz_before_yw(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.sample4(Orientation4::XZBeforeYW, x, y, z, w)
    }

    /// 4D noise with XYZ oriented like the 3D lattice and W as time.
    #[inline]
    #[must_use]
    pub fn noise4_xyz_before_w(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.sample4(Orientation4::XYZBeforeW, x, y, z, w)
    }
}
