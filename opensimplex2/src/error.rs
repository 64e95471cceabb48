//! Error types for the parts of the crate that accept untrusted names.
//!
//! Noise queries themselves are total and never fail.

use thiserror::Error;

/// Errors produced while interpreting noise configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NoiseError {
    /// An orientation name did not match any variant for its dimension.
    #[error("unknown {dimension}D orientation `{name}` (expected one of: {expected})")]
    UnknownOrientation {
        /// Dimensionality the name was parsed for.
        dimension: u8,
        /// The rejected name.
        name: String,
        /// Comma-separated list of accepted names.
        expected: String,
    },
}
