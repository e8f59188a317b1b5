// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Tile-grid raycasting.
//!
//! A [`TileRaycaster`] walks a segment across a uniform grid
//! ([`GridSpec`]) and asks a [`TileLookup`] for each visited cell's collision
//! rectangle. Cells are produced lazily and strictly in travel order, so the
//! first rectangle the segment hits is also the one nearest its start.
//!
//! Cost is `O(cells visited)`. Nothing here locks, allocates per cell or
//! blocks; a caller wanting to stop early just drops the iterator.

use tracing::{debug, trace};

use crate::scalar::Scalar;
use crate::types::rect::Rect;
use crate::types::segment::Segment;
use crate::types::vec2::Vec2;

#[doc = "Grid shape and cell addressing."]
pub mod grid;
#[doc = "Port to the world's per-cell collision geometry."]
pub mod lookup;
#[doc = "Lazy, ordered walk of the cells under a segment."]
pub mod passing;

pub use grid::{GridSpec, TileCoord, DEFAULT_CELL_SIZE};
pub use lookup::TileLookup;
pub use passing::PassingTiles;

/// First contact between a segment and the tile world.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TileHit<S> {
    /// Cell whose rectangle was hit.
    pub tile: TileCoord,
    /// The rectangle returned by the lookup for that cell.
    pub rect: Rect<S>,
    /// Contact point on the segment.
    pub point: Vec2<S>,
    /// Distance from the segment start to `point`.
    pub distance: S,
}

/// Raycaster bound to one grid shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TileRaycaster<S> {
    grid: GridSpec<S>,
}

impl<S: Scalar> TileRaycaster<S> {
    /// Creates a raycaster over `grid`.
    pub const fn new(grid: GridSpec<S>) -> Self {
        Self { grid }
    }

    /// The grid this raycaster walks.
    pub fn grid(&self) -> &GridSpec<S> {
        &self.grid
    }

    /// Cells under `segment`, lazily and in travel order.
    ///
    /// Each call starts a fresh walk.
    pub fn passing_tiles(&self, segment: &Segment<S>) -> PassingTiles<S> {
        let tiles = PassingTiles::new(self.grid, segment);
        if tiles.clipped().is_none() {
            debug!(?segment, "segment misses the world; no tiles to walk");
        }
        tiles
    }

    /// First point where `segment` hits a tile rectangle, walking from its
    /// start; `None` when it reaches its end unobstructed.
    ///
    /// `segment.delta()` is passed to the lookup as the travel direction, so
    /// one-way surfaces can decide whether they block this approach.
    pub fn collide_position_with_tile<L>(
        &self,
        segment: &Segment<S>,
        lookup: &L,
        ignore_one_way: bool,
    ) -> Option<TileHit<S>>
    where
        L: TileLookup<S> + ?Sized,
    {
        let travel = segment.delta();
        for tile in self.passing_tiles(segment) {
            let Some(rect) = lookup.tile_rect(tile, travel, ignore_one_way) else {
                continue;
            };
            trace!(x = tile.x, y = tile.y, ?rect, "candidate tile rect");
            if let Some(point) = segment.collide_position(&rect) {
                let distance = segment.start.distance(point);
                trace!(x = tile.x, y = tile.y, ?point, "first tile hit");
                return Some(TileHit {
                    tile,
                    rect,
                    point,
                    distance,
                });
            }
        }
        None
    }
}
