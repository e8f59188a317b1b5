// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::module_name_repetitions,
    clippy::float_cmp
)]
#![doc = r"2D collision queries and tile-grid raycasting for real-time game logic.

This crate provides:
- Directed intervals (`Interval`) and segments (`Segment`).
- Axis-aligned rectangles that may carry a negative size (`Rect`).
- Circles with an enforced non-negative radius (`Circle`).
- Inclusive/exclusive overlap and distance queries through the `Collide`
  and `Distance` traits, with one canonical implementation per shape pair.
- A tile raycaster (`TileRaycaster`) that walks a segment across a grid and
  reports the first hit against a world supplied through `TileLookup`.

Design notes:
- Generic over a `Scalar` (`f32`, `f64`); no host-engine types in the core.
  Adapters for interop types live in `tilecast-mint`.
- Pure value semantics: no shared state, no I/O. Safe to call from any
  number of threads as long as the tile lookup is not mutated mid-query.
- Degenerate inputs have defined answers; the only failures are a negative
  circle radius and a non-positive grid cell size (`GeomError`).
"]

/// Shape-pair dispatch traits.
pub mod collide;
/// Error type for fallible constructors.
pub mod error;
/// Tile-grid raycasting.
pub mod raycast;
/// Numeric scalar abstraction.
pub mod scalar;
/// Geometry value types.
pub mod types;

pub use collide::{Collide, Distance};
pub use error::GeomError;
pub use raycast::{
    GridSpec, PassingTiles, TileCoord, TileHit, TileLookup, TileRaycaster, DEFAULT_CELL_SIZE,
};
pub use scalar::Scalar;
pub use types::circle::Circle;
pub use types::interval::Interval;
pub use types::rect::Rect;
pub use types::segment::Segment;
pub use types::vec2::Vec2;

/// Glob-importable set of the types and traits most callers need.
pub mod prelude {
    pub use crate::collide::{Collide, Distance};
    pub use crate::error::GeomError;
    pub use crate::raycast::{GridSpec, TileCoord, TileHit, TileLookup, TileRaycaster};
    pub use crate::scalar::Scalar;
    pub use crate::types::{
        circle::Circle, interval::Interval, rect::Rect, segment::Segment, vec2::Vec2,
    };
}
