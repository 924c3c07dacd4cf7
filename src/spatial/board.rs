//! Board of optional tiles with placement and occupancy queries
//!
//! Cells are stored row-major in an `Array2` indexed `(y, x)`: `x` grows to the
//! right and `y` grows downward, so row 0 is the top of the board. Every
//! placed tile receives a `TileId` that survives gravity moves and collapses.

use crate::io::configuration::{MAX_BOARD_DIMENSION, TILE_CELLS};
use crate::io::error::{GameError, Result, invalid_parameter, invariant_violation};
use crate::spatial::shapes::ColorName;
use crate::spatial::tile::Tile;
use ndarray::Array2;
use std::fmt;

/// Stable identity of a tile for the lifetime of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Occupant {
    id: TileId,
    tile: Tile,
}

/// Fixed-size board that exclusively owns its tiles
#[derive(Debug, Clone)]
pub struct Board {
    cells: Array2<Option<Occupant>>,
    width: usize,
    height: usize,
    next_id: u64,
}

impl Board {
    /// Create an empty board
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or exceeds
    /// `MAX_BOARD_DIMENSION`
    pub fn new(width: usize, height: usize) -> Result<Self> {
        for (parameter, value) in [("width", width), ("height", height)] {
            if value == 0 || value > MAX_BOARD_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_BOARD_DIMENSION}"),
                ));
            }
        }

        Ok(Self {
            cells: Array2::default((height, width)),
            width,
            height,
            next_id: 0,
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether the coordinates lie on the board
    pub const fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// True iff the cell is in bounds and empty
    pub fn can_place(&self, x: usize, y: usize) -> bool {
        matches!(self.cells.get((y, x)), Some(None))
    }

    /// Whether the cell holds a tile
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        matches!(self.cells.get((y, x)), Some(Some(_)))
    }

    /// Store a tile, taking ownership
    ///
    /// # Errors
    ///
    /// Returns `OccupiedCell` if the cell is occupied or out of bounds; the
    /// board is left untouched.
    pub fn place(&mut self, tile: Tile, x: usize, y: usize) -> Result<TileId> {
        if !self.can_place(x, y) {
            return Err(GameError::OccupiedCell { x, y });
        }
        let id = TileId(self.next_id);
        let cell = self
            .cells
            .get_mut((y, x))
            .ok_or(GameError::OccupiedCell { x, y })?;
        *cell = Some(Occupant { id, tile });
        self.next_id += 1;
        Ok(id)
    }

    /// Clear a cell, handing back the tile it held
    pub fn remove(&mut self, x: usize, y: usize) -> Option<Tile> {
        self.cells
            .get_mut((y, x))
            .and_then(Option::take)
            .map(|occupant| occupant.tile)
    }

    /// Tile at a cell
    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        self.cells
            .get((y, x))
            .and_then(Option::as_ref)
            .map(|occupant| &occupant.tile)
    }

    /// Identity of the tile at a cell
    pub fn tile_id(&self, x: usize, y: usize) -> Option<TileId> {
        self.cells
            .get((y, x))
            .and_then(Option::as_ref)
            .map(|occupant| occupant.id)
    }

    pub(crate) fn tile_mut(&mut self, x: usize, y: usize) -> Option<&mut Tile> {
        self.cells
            .get_mut((y, x))
            .and_then(Option::as_mut)
            .map(|occupant| &mut occupant.tile)
    }

    /// Relocate a tile to an empty cell, keeping its identity
    pub(crate) fn move_tile(&mut self, from: (usize, usize), to: (usize, usize)) -> Result<TileId> {
        if !self.can_place(to.0, to.1) {
            return Err(GameError::OccupiedCell { x: to.0, y: to.1 });
        }
        let occupant = self
            .cells
            .get_mut((from.1, from.0))
            .and_then(Option::take)
            .ok_or_else(|| {
                invariant_violation("move_tile", &format!("no tile at ({}, {})", from.0, from.1))
            })?;
        let id = occupant.id;
        if let Some(cell) = self.cells.get_mut((to.1, to.0)) {
            *cell = Some(occupant);
        }
        Ok(id)
    }

    /// Lowest empty row of a column, scanning up from the bottom
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        (0..self.height).rev().find(|&y| self.can_place(column, y))
    }

    /// Columns that still have room for a tile
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&x| self.can_place(x, 0))
            .collect()
    }

    /// Coordinates of every occupied cell, row by row from the top
    pub fn occupied(&self) -> Vec<(usize, usize)> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_some())
            .map(|((y, x), _)| (x, y))
            .collect()
    }

    /// Number of tiles on the board
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Total number of colored slots over all tiles
    ///
    /// Every resolved match removes at least one slot, so this only shrinks
    /// while a turn resolves.
    pub fn slot_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .map(|occupant| occupant.tile.shape().slot_count())
            .sum()
    }
}

impl fmt::Display for Board {
    /// Two text lines per board row, `.` for empty sub-cells
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for sub_row in 0..TILE_CELLS {
                let mut line = String::new();
                for x in 0..self.width {
                    match self.tile(x, y) {
                        Some(tile) => {
                            let left = tile.color_at(sub_row, 0).map_or(".", ColorName::as_str);
                            let right = tile.color_at(sub_row, 1).map_or(".", ColorName::as_str);
                            line.push_str(&format!("[{left:<6} {right:<6}] "));
                        }
                        None => line.push_str("[.      .     ] "),
                    }
                }
                writeln!(f, "{}", line.trim_end())?;
            }
        }
        Ok(())
    }
}
