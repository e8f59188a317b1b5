// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::GeomError;
use crate::scalar::Scalar;
use crate::types::rect::Rect;

/// Side length of one tile in world units when none is configured.
pub const DEFAULT_CELL_SIZE: f32 = 16.0;

/// Integer cell address `(column, row)` in a tile grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileCoord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl TileCoord {
    /// Creates a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for TileCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<TileCoord> for (i32, i32) {
    fn from(coord: TileCoord) -> Self {
        (coord.x, coord.y)
    }
}

/// Shape of a uniform tile world: `columns × rows` square cells of
/// `cell_size` world units, covering `0..columns*cell_size` horizontally and
/// `0..rows*cell_size` vertically.
///
/// Invariant: `cell_size > 0`, checked by [`GridSpec::with_cell_size`] and on
/// deserialization.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridSpec<S> {
    cell_size: S,
    columns: u32,
    rows: u32,
}

impl<S: Scalar> GridSpec<S> {
    /// Grid of `columns × rows` cells of [`DEFAULT_CELL_SIZE`].
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            cell_size: S::from_f32(DEFAULT_CELL_SIZE),
            columns,
            rows,
        }
    }

    /// Replaces the cell size, rejecting zero, negative and NaN sizes.
    pub fn with_cell_size(self, cell_size: S) -> Result<Self, GeomError> {
        if cell_size > S::zero() {
            Ok(Self { cell_size, ..self })
        } else {
            Err(GeomError::InvalidCellSize {
                cell_size: cell_size.to_f64(),
            })
        }
    }

    /// Side length of one cell.
    pub fn cell_size(&self) -> S {
        self.cell_size
    }

    /// Number of columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// The whole world as a normalized rectangle anchored at the origin.
    pub fn world_bounds(&self) -> Rect<S> {
        Rect::new(
            S::zero(),
            S::zero(),
            S::from_i32(count_to_i32(self.columns)) * self.cell_size,
            S::from_i32(count_to_i32(self.rows)) * self.cell_size,
        )
    }

    /// World-space rectangle of one cell.
    pub fn cell_rect(&self, coord: TileCoord) -> Rect<S> {
        Rect::new(
            S::from_i32(coord.x) * self.cell_size,
            S::from_i32(coord.y) * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// `true` when `coord` addresses a cell inside the grid.
    pub fn contains(&self, coord: TileCoord) -> bool {
        (0..count_to_i32(self.columns)).contains(&coord.x)
            && (0..count_to_i32(self.rows)).contains(&coord.y)
    }

    /// Index of the cell owning coordinate `v` on one axis.
    ///
    /// A coordinate on a cell boundary belongs to the cell in the direction
    /// of travel: with `travel >= 0`, `v = 32` (16-unit cells) is in cell 2;
    /// with `travel < 0` it is in cell 1. The result is not clamped.
    pub fn cell_index(&self, v: S, travel: S) -> i32 {
        let scaled = v / self.cell_size;
        if travel < S::zero() {
            scaled.ceil().to_i32().saturating_sub(1)
        } else {
            scaled.floor().to_i32()
        }
    }

    /// [`cell_index`](Self::cell_index) clamped into `0..columns`.
    pub(crate) fn column_of(&self, x: S, travel: S) -> i32 {
        clamp_index(self.cell_index(x, travel), self.columns)
    }

    /// [`cell_index`](Self::cell_index) clamped into `0..rows`.
    pub(crate) fn row_of(&self, y: S, travel: S) -> i32 {
        clamp_index(self.cell_index(y, travel), self.rows)
    }
}

fn count_to_i32(count: u32) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

fn clamp_index(index: i32, count: u32) -> i32 {
    index.clamp(0, count_to_i32(count).saturating_sub(1).max(0))
}

#[cfg(feature = "serde")]
impl<'de, S> serde::Deserialize<'de> for GridSpec<S>
where
    S: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw<S> {
            // A missing field reads as `None`.
            cell_size: Option<S>,
            columns: u32,
            rows: u32,
        }
        let raw = Raw::<S>::deserialize(deserializer)?;
        let grid = Self::new(raw.columns, raw.rows);
        match raw.cell_size {
            Some(size) => grid.with_cell_size(size).map_err(serde::de::Error::custom),
            None => Ok(grid),
        }
    }
}
