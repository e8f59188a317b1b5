// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Value types of the geometry core.
//!
//! Semantics shared by all types:
//! - Plain `Copy` values; no type holds a reference to another.
//! - Inclusive queries treat boundary contact as a hit, exclusive (`_i`)
//!   queries require interior overlap.
//! - Degenerate inputs (point intervals, zero-length segments, zero-area
//!   rectangles, zero-radius circles) get defined answers instead of errors.

#[doc = "2D circle with an enforced non-negative radius."]
pub mod circle;
#[doc = "Directed 1D interval."]
pub mod interval;
#[doc = "Axis-aligned rectangle with a possibly negative size."]
pub mod rect;
#[doc = "Directed 2D line segment."]
pub mod segment;
#[doc = "2D point/direction vector."]
pub mod vec2;
