//! Orientation adapters: the coordinate transforms applied before a kernel.
//!
//! Each variant skews input space onto the lattice of its dimension. The
//! `Classic` variants treat all axes alike. The others give one axis (or a
//! pair of axes) priority, for example so that 3D noise sliced along Z shows
//! fewer grid artifacts in the XY plane, or so that 4D noise reads well when W
//! is used as time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;

/// Skew of the 2D triangular lattice: `(sqrt(3) - 1) / 2`.
#[allow(clippy::unreadable_literal)]
const SKEW_2D: f64 = 0.366025403784439;
/// `1 / sqrt(2)`.
#[allow(clippy::unreadable_literal)]
const FRAC_1_SQRT_2: f64 = 0.7071067811865476;
/// `sqrt(3 / 2)`.
#[allow(clippy::unreadable_literal)]
const SQRT_3_OVER_2: f64 = 1.224744871380249;

/// Rotation onto the 3D lattice's main diagonal: `2 / 3`.
const ROTATE_3D: f64 = 2.0 / 3.0;
/// In-plane unskew used when the third axis is privileged.
#[allow(clippy::unreadable_literal)]
const ROTATE_3D_PLANE: f64 = -0.211324865405187;
/// `1 / sqrt(3)`.
#[allow(clippy::unreadable_literal)]
const FRAC_1_SQRT_3: f64 = 0.577350269189626;

/// Skew of the 4D lattice: `(1 / sqrt(5) - 1) / 4`.
#[allow(clippy::unreadable_literal)]
const SKEW_4D: f64 = -0.138196601125011;
#[allow(clippy::unreadable_literal)]
const PAIR_SKEW_SAME: f64 = -0.178275657951399372;
#[allow(clippy::unreadable_literal)]
const PAIR_SKEW_CROSS: f64 = 0.215623393288842828;
#[allow(clippy::unreadable_literal)]
const PAIR_SKEW_OTHER_SAME: f64 = -0.403949762580207112;
#[allow(clippy::unreadable_literal)]
const PAIR_SKEW_OTHER_CROSS: f64 = -0.375199083010075342;
/// `1 / sqrt(20)`.
#[allow(clippy::unreadable_literal)]
const TIME_SCALE_4D: f64 = 0.2236067977499788;
#[allow(clippy::unreadable_literal)]
const TRIPLE_SKEW: f64 = -0.16666666666666666;

/// Generates the name table, `Display` and `FromStr` for an orientation enum.
macro_rules! orientation_names {
    ($ty:ident, $dimension:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The snake_case name used by `Display`, `FromStr` and serde.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = NoiseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(NoiseError::UnknownOrientation {
                        dimension: $dimension,
                        name: s.to_owned(),
                        expected: [$($name),+].join(", "),
                    }),
                }
            }
        }
    };
}

/// Axis priority for 2D noise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation2 {
    /// Standard skew; all directions treated alike.
    #[default]
    #[serde(rename = "classic")]
    Classic,
    /// Y points down the main diagonal. Suits side-on 2D worlds where Y is
    /// vertical; slightly worse for heightmaps.
    #[serde(rename = "x_before_y")]
    XBeforeY,
}

impl Orientation2 {
    /// Map `(x, y)` into the skewed lattice space of the 2D kernel.
    #[inline]
    #[must_use]
    pub fn skew(self, x: f64, y: f64) -> (f64, f64) {
        match self {
            Self::Classic => {
                let s = SKEW_2D * (x + y);
                (x + s, y + s)
            }
            Self::XBeforeY => {
                let xx = x * FRAC_1_SQRT_2;
                let yy = y * SQRT_3_OVER_2;
                (yy + xx, yy - xx)
            }
        }
    }
}

orientation_names!(Orientation2, 2, {
    Classic => "classic",
    XBeforeY => "x_before_y",
});

/// Axis priority for 3D noise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation3 {
    /// Rotation that keeps all three axes alike.
    #[default]
    #[serde(rename = "classic")]
    Classic,
    /// Z points up the lattice's main diagonal; use when Z is vertical or time
    /// and XY slices should look best.
    #[serde(rename = "xy_before_z")]
    XYBeforeZ,
    /// Y points up the lattice's main diagonal; use when Y is vertical or time
    /// and XZ slices should look best.
    #[serde(rename = "xz_before_y")]
    XZBeforeY,
}

impl Orientation3 {
    /// Map `(x, y, z)` into the rotated lattice space of the 3D kernel.
    #[inline]
    #[must_use]
    pub fn skew(self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        match self {
            Self::Classic => {
                let r = ROTATE_3D * (x + y + z);
                (r - x, r - y, r - z)
            }
            Self::XYBeforeZ => {
                let xy = x + y;
                let s2 = xy * ROTATE_3D_PLANE;
                let zz = z * FRAC_1_SQRT_3;
                (x + s2 - zz, y + s2 - zz, xy * FRAC_1_SQRT_3 + zz)
            }
            Self::XZBeforeY => {
                let xz = x + z;
                let s2 = xz * ROTATE_3D_PLANE;
                let yy = y * FRAC_1_SQRT_3;
                (x + s2 - yy, xz * FRAC_1_SQRT_3 + yy, z + s2 - yy)
            }
        }
    }
}

orientation_names!(Orientation3, 3, {
    Classic => "classic",
    XYBeforeZ => "xy_before_z",
    XZBeforeY => "xz_before_y",
});

/// Axis priority for 4D noise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation4 {
    /// Skew that keeps all four axes alike.
    #[default]
    #[serde(rename = "classic")]
    Classic,
    /// XY and ZW each form a triangular-lattice plane. Suits terrain with X and
    /// Y horizontal, and the `(x, y, sin t, cos t)` looping-animation trick.
    #[serde(rename = "xy_before_zw")]
    XYBeforeZW,
    /// XZ and YW each form a triangular-lattice plane. Suits terrain with X and
    /// Z horizontal.
    #[serde(rename = "xz_before_yw")]
    XZBeforeYW,
    /// XYZ is oriented like the 3D lattice with W along its main diagonal.
    /// Suits 3D fields animated with W as time.
    #[serde(rename = "xyz_before_w")]
    XYZBeforeW,
}

impl Orientation4 {
    /// Map `(x, y, z, w)` into the skewed lattice space of the 4D kernel.
    #[inline]
    #[must_use]
    pub fn skew(self, x: f64, y: f64, z: f64, w: f64) -> (f64, f64, f64, f64) {
        match self {
            Self::Classic => {
                let s = SKEW_4D * (x + y + z + w);
                (x + s, y + s, z + s, w + s)
            }
            Self::XYBeforeZW => {
                let s2 = (x + y) * PAIR_SKEW_SAME + (z + w) * PAIR_SKEW_CROSS;
                let t2 = (z + w) * PAIR_SKEW_OTHER_SAME + (x + y) * PAIR_SKEW_OTHER_CROSS;
                (x + s2, y + s2, z + t2, w + t2)
            }
            Self::XZBeforeYW => {
                let s2 = (x + z) * PAIR_SKEW_SAME + (y + w) * PAIR_SKEW_CROSS;
                let t2 = (y + w) * PAIR_SKEW_OTHER_SAME + (x + z) * PAIR_SKEW_OTHER_CROSS;
                (x + s2, y + t2, z + s2, w + t2)
            }
            Self::XYZBeforeW => {
                let xyz = x + y + z;
                let ww = w * TIME_SCALE_4D;
                let s2 = xyz * TRIPLE_SKEW + ww;
                (x + s2, y + s2, z + s2, -0.5 * xyz + ww)
            }
        }
    }
}

orientation_names!(Orientation4, 4, {
    Classic => "classic",
    XYBeforeZW => "xy_before_zw",
    XZBeforeYW => "xz_before_yw",
    XYZBeforeW => "xyz_before_w",
});
