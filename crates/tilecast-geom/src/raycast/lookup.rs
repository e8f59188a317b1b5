// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::raycast::grid::TileCoord;
use crate::scalar::Scalar;
use crate::types::rect::Rect;
use crate::types::vec2::Vec2;

/// Port to the world that owns the tiles.
///
/// The raycaster asks one cell at a time for the rectangle a moving query
/// could hit there. Implementations decide per approach:
/// - `None` for empty or non-solid cells;
/// - a full or partial (e.g. half-height) rectangle for solid geometry;
/// - for one-way ("solid-top") surfaces, a rectangle only when `travel`
///   approaches from the open side and `ignore_one_way` is `false`.
///
/// Returned rectangles are in world coordinates and must lie within the
/// cell's own bounds; the raycaster relies on that to treat the first hit
/// in walk order as the nearest one. Lookups run on the caller's thread and
/// must not change for the duration of a query.
pub trait TileLookup<S: Scalar> {
    /// Collision rectangle for `coord` when approached along `travel`.
    fn tile_rect(&self, coord: TileCoord, travel: Vec2<S>, ignore_one_way: bool)
        -> Option<Rect<S>>;
}

impl<S, F> TileLookup<S> for F
where
    S: Scalar,
    F: Fn(TileCoord, Vec2<S>, bool) -> Option<Rect<S>>,
{
    fn tile_rect(
        &self,
        coord: TileCoord,
        travel: Vec2<S>,
        ignore_one_way: bool,
    ) -> Option<Rect<S>> {
        self(coord, travel, ignore_one_way)
    }
}
