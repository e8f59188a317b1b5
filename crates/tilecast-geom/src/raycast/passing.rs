// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::iter::FusedIterator;

use crate::raycast::grid::{GridSpec, TileCoord};
use crate::scalar::Scalar;
use crate::types::interval::Interval;
use crate::types::segment::Segment;

/// Inclusive integer walk `first, first + step, ..., last`.
#[derive(Debug, Copy, Clone)]
struct Steps {
    next: Option<i32>,
    last: i32,
    step: i32,
}

impl Steps {
    fn new(first: i32, last: i32, step: i32) -> Self {
        // A walk that would have to move against `step` collapses to `first`.
        let last = if (last - first).signum() * step < 0 {
            first
        } else {
            last
        };
        Self {
            next: Some(first),
            last,
            step,
        }
    }

    fn empty() -> Self {
        Self {
            next: None,
            last: 0,
            step: 1,
        }
    }
}

impl Iterator for Steps {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let v = self.next?;
        self.next = if v == self.last {
            None
        } else {
            Some(v + self.step)
        };
        Some(v)
    }
}

/// Lazy walk over the cells a segment passes through, in travel order.
///
/// Columns are visited from the segment's start column to its end column;
/// inside each column the rows covered by that column's slice of the segment
/// are visited in the vertical travel direction. A coordinate exactly on a
/// cell boundary belongs to the cell ahead in the direction of travel.
///
/// The iterator owns a copy of everything it needs; clone it (or ask the
/// raycaster again) to walk the same cells twice.
#[derive(Debug, Clone)]
pub struct PassingTiles<S> {
    grid: GridSpec<S>,
    clipped: Option<Segment<S>>,
    columns: Steps,
    rows: Option<(i32, Steps)>,
}

impl<S: Scalar> PassingTiles<S> {
    /// Starts a walk of `segment` across `grid`. A segment that lies fully
    /// outside the world yields nothing.
    pub fn new(grid: GridSpec<S>, segment: &Segment<S>) -> Self {
        let clipped = if grid.columns() == 0 || grid.rows() == 0 {
            None
        } else {
            segment.cut_by_rect(&grid.world_bounds())
        };
        let columns = clipped.map_or_else(Steps::empty, |c| {
            let travel = c.delta().x;
            Steps::new(
                grid.column_of(c.start.x, travel),
                grid.column_of(c.end.x, travel),
                step_for(travel),
            )
        });
        Self {
            grid,
            clipped,
            columns,
            rows: None,
        }
    }

    /// The segment after clipping to the world, if any part of it is inside.
    pub fn clipped(&self) -> Option<Segment<S>> {
        self.clipped
    }

    /// Row walk for one column, or `None` if the clipped segment misses it.
    fn rows_of_column(&self, column: i32) -> Option<Steps> {
        let clipped = self.clipped?;
        let cell = self.grid.cell_size();
        let left = S::from_i32(column) * cell;
        let piece = clipped.cut_by_x(Interval::new(left, left + cell))?;
        let travel = clipped.delta().y;
        Some(Steps::new(
            self.grid.row_of(piece.start.y, travel),
            self.grid.row_of(piece.end.y, travel),
            step_for(travel),
        ))
    }
}

fn step_for<S: Scalar>(travel: S) -> i32 {
    if travel < S::zero() {
        -1
    } else {
        1
    }
}

impl<S: Scalar> Iterator for PassingTiles<S> {
    type Item = TileCoord;

    fn next(&mut self) -> Option<TileCoord> {
        loop {
            if let Some((column, rows)) = &mut self.rows {
                if let Some(row) = rows.next() {
                    return Some(TileCoord::new(*column, row));
                }
                self.rows = None;
            }
            let column = self.columns.next()?;
            self.rows = self.rows_of_column(column).map(|rows| (column, rows));
        }
    }
}

impl<S: Scalar> FusedIterator for PassingTiles<S> {}
