//! Level bootstrap structures
//!
//! A level is consumed once to size the board, place its starting tiles, seed
//! the goal counter and queue the first falling tile. Reading levels from disk
//! belongs to the caller; these types only carry already-decoded values.

use crate::io::configuration::TILE_CELLS;
use crate::io::error::Result;
use crate::spatial::factory::TileFactory;
use crate::spatial::shapes::{ColorName, Shape};
use crate::spatial::tile::Tile;

/// Row-major colors of a tile: `[top-left, top-right, bottom-left, bottom-right]`
pub type TileColors = [ColorName; TILE_CELLS * TILE_CELLS];

/// A tile placed on the board when the level starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSpec {
    /// Board column
    pub x: usize,
    /// Board row
    pub y: usize,
    /// Shape tag
    pub shape: Shape,
    /// Row-major colors
    pub colors: TileColors,
}

/// The first tile waiting to be committed to a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextTileSpec {
    /// Shape tag
    pub shape: Shape,
    /// Row-major colors
    pub colors: TileColors,
}

/// Everything needed to start a level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelData {
    /// Board width in tiles
    pub width: usize,
    /// Board height in tiles
    pub height: usize,
    /// Tile resolutions required to complete the level
    pub goal_count: i32,
    /// Tiles present before the first move
    pub starting_tiles: Vec<TileSpec>,
    /// First tile to commit
    pub next_tile: NextTileSpec,
}

fn parse_colors(colors: [&str; TILE_CELLS * TILE_CELLS]) -> Result<TileColors> {
    let [a, b, c, d] = colors;
    Ok([a.parse()?, b.parse()?, c.parse()?, d.parse()?])
}

const fn row_major(tile: &Tile) -> TileColors {
    let [[a, b], [c, d]] = *tile.cells();
    [a, b, c, d]
}

impl TileSpec {
    /// Build a spec from textual shape and color names
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` or `InvalidColor` for names outside the vocabulary
    pub fn parse(x: usize, y: usize, shape: &str, colors: [&str; TILE_CELLS * TILE_CELLS]) -> Result<Self> {
        Ok(Self {
            x,
            y,
            shape: shape.parse()?,
            colors: parse_colors(colors)?,
        })
    }

    /// Materialize the tile
    ///
    /// # Errors
    ///
    /// Returns `LayoutMismatch` if the colors do not follow the shape
    pub fn to_tile(&self) -> Result<Tile> {
        Tile::from_row_major(self.shape, self.colors)
    }
}

impl NextTileSpec {
    /// Build a spec from textual shape and color names
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` or `InvalidColor` for names outside the vocabulary
    pub fn parse(shape: &str, colors: [&str; TILE_CELLS * TILE_CELLS]) -> Result<Self> {
        Ok(Self {
            shape: shape.parse()?,
            colors: parse_colors(colors)?,
        })
    }

    /// Describe an existing tile
    pub const fn from_tile(tile: &Tile) -> Self {
        Self {
            shape: tile.shape(),
            colors: row_major(tile),
        }
    }

    /// Materialize the tile
    ///
    /// # Errors
    ///
    /// Returns `LayoutMismatch` if the colors do not follow the shape
    pub fn to_tile(&self) -> Result<Tile> {
        Tile::from_row_major(self.shape, self.colors)
    }
}

impl LevelData {
    /// Level with random tiles filling the bottom `prefill_rows` rows
    ///
    /// Rows beyond the board height are ignored. Tile colors and shapes come
    /// from the factory, so the same seed yields the same level.
    pub fn generated(
        width: usize,
        height: usize,
        goal_count: i32,
        prefill_rows: usize,
        factory: &mut TileFactory,
    ) -> Self {
        let first_row = height.saturating_sub(prefill_rows);
        let mut starting_tiles = Vec::with_capacity(width * (height - first_row));
        for y in first_row..height {
            for x in 0..width {
                let tile = factory.random_tile();
                starting_tiles.push(TileSpec {
                    x,
                    y,
                    shape: tile.shape(),
                    colors: row_major(&tile),
                });
            }
        }

        Self {
            width,
            height,
            goal_count,
            starting_tiles,
            next_tile: NextTileSpec::from_tile(&factory.random_tile()),
        }
    }
}
