// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Brute-force first-hit search used as a test oracle.

use tilecast_geom::{GridSpec, Segment, TileCoord, TileHit, TileLookup};

/// Scans every cell of `grid`, keeping the hit nearest `segment.start`.
///
/// Ignores walk order entirely, so it can check that the ordered raycast
/// returns the same distance. Ties keep the first cell in row-major order.
pub fn brute_force_first_hit<L>(
    grid: &GridSpec<f32>,
    lookup: &L,
    segment: &Segment<f32>,
    ignore_one_way: bool,
) -> Option<TileHit<f32>>
where
    L: TileLookup<f32> + ?Sized,
{
    let columns = i32::try_from(grid.columns()).unwrap_or(i32::MAX);
    let rows = i32::try_from(grid.rows()).unwrap_or(i32::MAX);
    let travel = segment.delta();
    let mut best: Option<TileHit<f32>> = None;
    for y in 0..rows {
        for x in 0..columns {
            let tile = TileCoord::new(x, y);
            let Some(rect) = lookup.tile_rect(tile, travel, ignore_one_way) else {
                continue;
            };
            let Some(point) = segment.collide_position(&rect) else {
                continue;
            };
            let distance = segment.start.distance(point);
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(TileHit {
                    tile,
                    rect,
                    point,
                    distance,
                });
            }
        }
    }
    best
}
