//! OpenSimplex2 (fast variant) coherent gradient noise in 2D, 3D and 4D.
//!
//! ```
//! let noise = opensimplex2::create(1234);
//! let height = noise.noise2(10.0 * 0.01, 42.0 * 0.01);
//! assert!(height.abs() <= 1.2);
//! ```
//!
//! A generator is built once from a 64-bit seed and then queried through
//! `&self`. Output is deterministic for a given seed and input, continuous in
//! the input, and bounded in practice to roughly `[-1, 1]`.

pub mod error;
pub mod generator;
pub mod kernel;
pub mod math;
pub mod orientation;
pub mod permutation;
pub mod settings;

pub use error::NoiseError;
pub use generator::OpenSimplex2;
pub use kernel::KernelTrace;
pub use orientation::{Orientation2, Orientation3, Orientation4};
pub use permutation::PermutationTable;
pub use settings::{NoiseSettings, OrientedNoise};

/// Build a generator for `seed`.
#[must_use]
pub fn create(seed: i64) -> OpenSimplex2 {
    OpenSimplex2::new(seed)
}
