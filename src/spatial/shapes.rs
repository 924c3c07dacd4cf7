//! Shape vocabulary and color palette
//!
//! Every tile is a 2x2 micro-grid whose colors follow one of eight canonical
//! layouts. A layout partitions the micro-grid into slots (`c1`..`c4`); all
//! positions of a slot share one color. The tables here are pure data and carry
//! no rendering concerns.

use crate::io::configuration::{MAX_SLOTS, PALETTE_SIZE, TILE_CELLS};
use crate::io::error::GameError;
use std::fmt;
use std::str::FromStr;

/// Colors of a tile's micro-grid, indexed `[row][col]`
pub type Cells = [[ColorName; TILE_CELLS]; TILE_CELLS];

/// Palette of sub-cell colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorName {
    /// Red
    Red,
    /// Yellow
    Yellow,
    /// Blue
    Blue,
    /// Green
    Green,
    /// Purple
    Purple,
    /// Orange
    Orange,
}

/// Palette in factory sampling order
pub const PALETTE: [ColorName; PALETTE_SIZE] = [
    ColorName::Red,
    ColorName::Blue,
    ColorName::Yellow,
    ColorName::Green,
    ColorName::Purple,
    ColorName::Orange,
];

impl ColorName {
    /// Lowercase color name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorName {
    type Err = GameError;

    /// Parse a color name (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PALETTE
            .iter()
            .copied()
            .find(|color| color.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::InvalidColor {
                name: s.to_string(),
            })
    }
}

/// The eight canonical tile layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// One color over the whole tile
    Single,
    /// Two side-by-side columns
    TwoVertical,
    /// Two stacked rows
    TwoHorizontal,
    /// Four distinct quadrants
    Square2x2,
    /// Top bar over two bottom cells
    LShape,
    /// Two top cells over a bottom bar
    LShapeMirrored,
    /// Left bar beside two right cells
    MixedShape,
    /// Two left cells beside a right bar
    MixedShapeMirrored,
}

/// Rectangle covered by one slot inside the micro-grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    /// First row covered
    pub top: usize,
    /// First column covered
    pub left: usize,
    /// Rows covered
    pub height: usize,
    /// Columns covered
    pub width: usize,
}

impl Footprint {
    /// Whether the two footprints cover exactly the same columns
    pub const fn same_columns(&self, other: &Self) -> bool {
        self.left == other.left && self.width == other.width
    }

    /// Whether the two footprints have identical dimensions
    pub const fn same_size(&self, other: &Self) -> bool {
        self.height == other.height && self.width == other.width
    }

    /// Whether the footprint covers the given row
    pub const fn covers_row(&self, row: usize) -> bool {
        row >= self.top && row < self.top + self.height
    }

    /// Whether the footprint shares at least one row with another
    pub const fn shares_row(&self, other: &Self) -> bool {
        self.top < other.top + other.height && other.top < self.top + self.height
    }
}

impl Shape {
    /// All shapes in declaration order
    pub const ALL: [Self; 8] = [
        Self::Single,
        Self::TwoVertical,
        Self::TwoHorizontal,
        Self::Square2x2,
        Self::LShape,
        Self::LShapeMirrored,
        Self::MixedShape,
        Self::MixedShapeMirrored,
    ];

    /// Slot index (0 = `c1` .. 3 = `c4`) at each micro-grid position
    pub const fn slot_layout(self) -> [[usize; TILE_CELLS]; TILE_CELLS] {
        match self {
            Self::Single => [[0, 0], [0, 0]],
            Self::TwoVertical => [[0, 1], [0, 1]],
            Self::TwoHorizontal => [[0, 0], [1, 1]],
            Self::Square2x2 => [[0, 1], [2, 3]],
            Self::LShape => [[0, 0], [1, 2]],
            Self::LShapeMirrored => [[1, 2], [0, 0]],
            Self::MixedShape => [[0, 1], [0, 2]],
            Self::MixedShapeMirrored => [[1, 0], [2, 0]],
        }
    }

    /// Number of distinct color slots
    pub const fn slot_count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::TwoVertical | Self::TwoHorizontal => 2,
            Self::Square2x2 => MAX_SLOTS,
            Self::LShape | Self::LShapeMirrored | Self::MixedShape | Self::MixedShapeMirrored => 3,
        }
    }

    /// Number of distinct colors the factory draws for this shape
    pub const fn required_distinct_colors(self) -> usize {
        self.slot_count()
    }

    /// Slot occupying a micro-grid position
    pub fn slot_at(self, row: usize, col: usize) -> Option<usize> {
        self.slot_layout()
            .get(row)
            .and_then(|slots| slots.get(col))
            .copied()
    }

    /// Bounding rectangle of a slot
    ///
    /// Every slot of every canonical layout is a full rectangle, so the
    /// bounding box is the slot itself.
    pub fn footprint(self, slot: usize) -> Option<Footprint> {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for (row, slots) in self.slot_layout().iter().enumerate() {
            for (col, &candidate) in slots.iter().enumerate() {
                if candidate != slot {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (row, col, row, col),
                    Some((top, left, bottom, right)) => {
                        (top.min(row), left.min(col), bottom.max(row), right.max(col))
                    }
                });
            }
        }
        bounds.map(|(top, left, bottom, right)| Footprint {
            top,
            left,
            height: bottom - top + 1,
            width: right - left + 1,
        })
    }

    /// Build the canonical cells from per-slot colors
    ///
    /// `slot_colors[i]` colors slot `c(i+1)`; entries beyond the shape's slot
    /// count are ignored.
    pub fn layout(self, slot_colors: [ColorName; MAX_SLOTS]) -> Cells {
        let slots = self.slot_layout();
        let [fallback, ..] = slot_colors;
        let mut cells = [[fallback; TILE_CELLS]; TILE_CELLS];
        for (cell_row, slot_row) in cells.iter_mut().zip(slots.iter()) {
            for (cell, &slot) in cell_row.iter_mut().zip(slot_row.iter()) {
                *cell = slot_colors.get(slot).copied().unwrap_or(fallback);
            }
        }
        cells
    }

    /// Check that `cells` is a canonical layout of this shape
    ///
    /// Every slot must be uniformly colored and no two slots may share a
    /// color, otherwise the cells would describe a different shape.
    ///
    /// # Errors
    ///
    /// Returns `LayoutMismatch` naming the first slot with two different colors
    /// or the first slot repeating an earlier slot's color
    pub fn check_layout(self, cells: &Cells) -> Result<(), GameError> {
        let mut seen: [Option<ColorName>; MAX_SLOTS] = [None; MAX_SLOTS];
        for (row, slots) in self.slot_layout().iter().enumerate() {
            for (col, &slot) in slots.iter().enumerate() {
                let color = cells
                    .get(row)
                    .and_then(|r| r.get(col))
                    .copied()
                    .ok_or_else(|| GameError::LayoutMismatch {
                        shape: self,
                        reason: format!("missing cell ({row}, {col})"),
                    })?;
                match seen.get_mut(slot) {
                    Some(Some(expected)) if *expected != color => {
                        return Err(GameError::LayoutMismatch {
                            shape: self,
                            reason: format!(
                                "slot c{} is both {expected} and {color} (cell {row}, {col})",
                                slot + 1
                            ),
                        });
                    }
                    Some(entry) => *entry = Some(color),
                    None => {
                        return Err(GameError::LayoutMismatch {
                            shape: self,
                            reason: format!("slot index {slot} out of range"),
                        });
                    }
                }
            }
        }

        let colors: Vec<ColorName> = seen.iter().flatten().copied().collect();
        for (slot, color) in colors.iter().enumerate() {
            if colors.iter().take(slot).any(|earlier| earlier == color) {
                return Err(GameError::LayoutMismatch {
                    shape: self,
                    reason: format!("slot c{} repeats the color {color}", slot + 1),
                });
            }
        }
        Ok(())
    }

    /// Shape name as used by level data
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::TwoVertical => "TwoVertical",
            Self::TwoHorizontal => "TwoHorizontal",
            Self::Square2x2 => "Square2x2",
            Self::LShape => "LShape",
            Self::LShapeMirrored => "LShapeMirrored",
            Self::MixedShape => "MixedShape",
            Self::MixedShapeMirrored => "MixedShapeMirrored",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = GameError;

    /// Parse a shape name (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::InvalidShape {
                name: s.to_string(),
            })
    }
}
