//! Composite 2x2 tile holding a shape tag and its colored micro-grid

use crate::io::configuration::{MAX_SLOTS, TILE_CELLS};
use crate::io::error::Result;
use crate::spatial::shapes::{Cells, ColorName, Footprint, Shape};

/// One colored region of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Slot index within the shape (0 = `c1`)
    pub index: usize,
    /// Color shared by every position of the slot
    pub color: ColorName,
    /// Rectangle the slot covers
    pub footprint: Footprint,
}

/// A tile occupying one board cell
///
/// `cells` always equals the canonical layout of `shape`: the constructors
/// build or validate it and the collapse resolver rewrites both together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    shape: Shape,
    cells: Cells,
}

impl Tile {
    /// Build a tile from per-slot colors (`c1`..`c4`)
    pub fn new(shape: Shape, slot_colors: [ColorName; MAX_SLOTS]) -> Self {
        Self {
            shape,
            cells: shape.layout(slot_colors),
        }
    }

    /// Single-colored tile
    pub fn uniform(color: ColorName) -> Self {
        Self::new(Shape::Single, [color; MAX_SLOTS])
    }

    /// Build a tile from explicit cells
    ///
    /// # Errors
    ///
    /// Returns `LayoutMismatch` if the cells do not follow the shape's layout
    pub fn from_cells(shape: Shape, cells: Cells) -> Result<Self> {
        shape.check_layout(&cells)?;
        Ok(Self { shape, cells })
    }

    /// Build a tile from four row-major colors, as level data lists them
    ///
    /// # Errors
    ///
    /// Returns `LayoutMismatch` if the colors do not follow the shape's layout
    pub fn from_row_major(shape: Shape, colors: [ColorName; TILE_CELLS * TILE_CELLS]) -> Result<Self> {
        let [a, b, c, d] = colors;
        Self::from_cells(shape, [[a, b], [c, d]])
    }

    /// Current shape tag
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Current micro-grid colors
    pub const fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Color at a micro-grid position
    pub fn color_at(&self, row: usize, col: usize) -> Option<ColorName> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Colored regions in slot order
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..self.shape.slot_count()).filter_map(move |index| {
            let footprint = self.shape.footprint(index)?;
            let color = self.color_at(footprint.top, footprint.left)?;
            Some(Slot {
                index,
                color,
                footprint,
            })
        })
    }

    /// Whether any sub-cell carries the color
    pub fn has_color(&self, color: ColorName) -> bool {
        self.cells.iter().flatten().any(|&c| c == color)
    }

    /// Replace shape and colors together
    pub(crate) fn reshape(&mut self, shape: Shape, slot_colors: [ColorName; MAX_SLOTS]) {
        self.shape = shape;
        self.cells = shape.layout(slot_colors);
    }
}
