// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for the few fallible constructors in the core.

use thiserror::Error;

/// Failure constructing or mutating a geometry value.
///
/// Queries never fail; only writes that would break a type invariant do.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// A circle radius must be zero or positive.
    #[error("invalid argument: circle radius must be >= 0, got {radius}")]
    NegativeRadius {
        /// The rejected radius, widened to `f64`.
        radius: f64,
    },
    /// A grid cell size must be strictly positive.
    #[error("invalid argument: grid cell size must be > 0, got {cell_size}")]
    InvalidCellSize {
        /// The rejected cell size, widened to `f64`.
        cell_size: f64,
    },
}
