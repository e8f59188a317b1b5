// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for tilecast crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`world`] - In-memory tile world implementing `TileLookup`
//! - [`reference`] - Brute-force first-hit search used as a test oracle
//! - [`trace`] - Tracing subscriber setup for tests

pub mod reference;
pub mod trace;
pub mod world;

pub use reference::brute_force_first_hit;
pub use trace::init_test_tracing;
pub use world::{GridWorld, LayoutError, TileKind, DEFAULT_ONE_WAY_DEPTH};
