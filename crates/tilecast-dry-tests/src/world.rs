// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory tile world for raycast tests.

use std::cell::Cell;

use thiserror::Error;
use tilecast_geom::{GridSpec, Rect, TileCoord, TileLookup, Vec2};

/// Depth of the blocking strip on top of a one-way tile, in world units.
///
/// Stands in for the distance a body can sink into a platform in one frame
/// before the platform stops catching it.
pub const DEFAULT_ONE_WAY_DEPTH: f32 = 4.0;

/// What occupies one cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TileKind {
    /// Nothing to hit.
    #[default]
    Empty,
    /// The whole cell is solid.
    Solid,
    /// Only the upper half of the cell is solid.
    HalfTop,
    /// Only the lower half of the cell is solid.
    HalfBottom,
    /// A platform that only blocks downward travel, on its top strip.
    OneWay,
}

impl TileKind {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | ' ' => Some(Self::Empty),
            '#' => Some(Self::Solid),
            '^' => Some(Self::HalfTop),
            'v' => Some(Self::HalfBottom),
            '=' => Some(Self::OneWay),
            _ => None,
        }
    }
}

/// Failure parsing an ASCII layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The layout has no rows.
    #[error("layout is empty")]
    Empty,
    /// Rows must all have the same width.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Offending row.
        row: usize,
        /// Cells found in that row.
        found: usize,
        /// Cells in the first row.
        expected: usize,
    },
    /// A character outside `. #^v=`.
    #[error("unknown tile {tile:?} at column {column}, row {row}")]
    UnknownTile {
        /// The character.
        tile: char,
        /// Its column.
        column: usize,
        /// Its row.
        row: usize,
    },
    /// More rows or columns than a grid can address.
    #[error("layout is too large")]
    TooLarge,
}

/// Fixed tile world backed by a `Vec<TileKind>`.
///
/// Counts lookups so tests can check that a raycast stops at its first hit.
///
/// # Example
///
/// ```
/// use tilecast_dry_tests::GridWorld;
///
/// let world = GridWorld::from_ascii(&[
///     "....",
///     "..#.",
///     "====",
/// ])
/// .unwrap();
/// assert_eq!(world.grid().columns(), 4);
/// assert_eq!(world.grid().rows(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct GridWorld {
    grid: GridSpec<f32>,
    tiles: Vec<TileKind>,
    one_way_depth: f32,
    lookups: Cell<usize>,
}

impl GridWorld {
    /// An all-empty world of `columns × rows` 16-unit cells.
    pub fn empty(columns: u32, rows: u32) -> Self {
        let len = columns as usize * rows as usize;
        Self {
            grid: GridSpec::new(columns, rows),
            tiles: vec![TileKind::Empty; len],
            one_way_depth: DEFAULT_ONE_WAY_DEPTH,
            lookups: Cell::new(0),
        }
    }

    /// Parses one string per row: `.` empty, `#` solid, `^` upper half,
    /// `v` lower half, `=` one-way platform.
    pub fn from_ascii(rows: &[&str]) -> Result<Self, LayoutError> {
        let expected = rows.first().ok_or(LayoutError::Empty)?.chars().count();
        let columns = u32::try_from(expected).map_err(|_| LayoutError::TooLarge)?;
        let row_count = u32::try_from(rows.len()).map_err(|_| LayoutError::TooLarge)?;
        let mut world = Self::empty(columns, row_count);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(LayoutError::Ragged {
                    row,
                    found,
                    expected,
                });
            }
            for (column, tile) in line.chars().enumerate() {
                let kind = TileKind::from_char(tile).ok_or(LayoutError::UnknownTile {
                    tile,
                    column,
                    row,
                })?;
                world.tiles[row * expected + column] = kind;
            }
        }
        Ok(world)
    }

    /// Replaces the one-way strip depth.
    pub fn with_one_way_depth(mut self, depth: f32) -> Self {
        self.one_way_depth = depth;
        self
    }

    /// Sets one cell; out-of-range coordinates are ignored.
    pub fn set(&mut self, coord: TileCoord, kind: TileKind) {
        if let Some(i) = self.index(coord) {
            self.tiles[i] = kind;
        }
    }

    /// The tile at `coord`; `Empty` outside the grid.
    pub fn get(&self, coord: TileCoord) -> TileKind {
        self.index(coord).map_or(TileKind::Empty, |i| self.tiles[i])
    }

    /// Shape of this world.
    pub fn grid(&self) -> &GridSpec<f32> {
        &self.grid
    }

    /// Number of `tile_rect` calls since construction or the last reset.
    pub fn lookup_count(&self) -> usize {
        self.lookups.get()
    }

    /// Zeroes the lookup counter.
    pub fn reset_lookup_count(&self) {
        self.lookups.set(0);
    }

    fn index(&self, coord: TileCoord) -> Option<usize> {
        if !self.grid.contains(coord) {
            return None;
        }
        let x = usize::try_from(coord.x).ok()?;
        let y = usize::try_from(coord.y).ok()?;
        Some(y * self.grid.columns() as usize + x)
    }
}

impl TileLookup<f32> for GridWorld {
    fn tile_rect(
        &self,
        coord: TileCoord,
        travel: Vec2<f32>,
        ignore_one_way: bool,
    ) -> Option<Rect<f32>> {
        self.lookups.set(self.lookups.get() + 1);
        let cell = self.grid.cell_rect(coord);
        let half = self.grid.cell_size() / 2.0;
        match self.get(coord) {
            TileKind::Empty => None,
            TileKind::Solid => Some(cell),
            TileKind::HalfTop => Some(Rect::new(cell.left(), cell.top(), cell.width(), half)),
            TileKind::HalfBottom => {
                Some(Rect::new(cell.left(), cell.top() + half, cell.width(), half))
            }
            TileKind::OneWay => {
                // Only a downward approach lands on a platform.
                if ignore_one_way || travel.y <= 0.0 {
                    return None;
                }
                let depth = self.one_way_depth.clamp(0.0, self.grid.cell_size());
                Some(Rect::new(cell.left(), cell.top(), cell.width(), depth))
            }
        }
    }
}
