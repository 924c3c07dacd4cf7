//! Re-normalization of matched tiles into smaller canonical shapes
//!
//! A matched color removes every slot of that color from the tile. The
//! remaining slots, ordered top-to-bottom then left-to-right, are classified by
//! count and geometry and rewritten as one canonical layout:
//!
//! | Survivors | Result |
//! |-----------|--------|
//! | 0 | tile destroyed |
//! | 1 | `Single` |
//! | 2, stacked or widths differ | `TwoHorizontal` (upper color on top) |
//! | 2, side by side, heights differ or diagonal | `TwoVertical` (left color on the left) |
//! | 3, odd cell in row 0 | `LShape` |
//! | 3, odd cell in row 1 | `LShapeMirrored` |
//!
//! The plan is computed before anything is written, so a failed collapse leaves
//! both the tile and the board untouched.

use crate::algorithm::slots::SlotSet;
use crate::io::configuration::MAX_SLOTS;
use crate::io::error::{Result, invariant_violation};
use crate::spatial::board::{Board, TileId};
use crate::spatial::shapes::{Cells, ColorName, Shape};
use crate::spatial::tile::{Slot, Tile};

/// What happened to a tile after its matched colors were removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollapseOutcome {
    /// Every slot was matched; the board cell is now empty
    Destroyed,
    /// Surviving slots were re-normalized into a new layout
    Reshaped {
        /// Shape after collapse
        shape: Shape,
        /// Canonical cells for that shape
        cells: Cells,
    },
}

/// Collapse of one board tile, reported to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTile {
    /// Identity of the collapsed tile
    pub id: TileId,
    /// Board column
    pub x: usize,
    /// Board row
    pub y: usize,
    /// Colors removed from the tile
    pub colors: Vec<ColorName>,
    /// Resulting layout, or destruction
    pub outcome: CollapseOutcome,
}

type Plan = Option<(Shape, [ColorName; MAX_SLOTS])>;

/// Remove the matched colors from a tile and re-normalize it in place
///
/// On `Destroyed` the tile is left as it was; the caller owns clearing the
/// board cell.
///
/// # Errors
///
/// Returns `InvariantViolation` if none of the colors are present on the tile
/// or the survivors cannot be classified
pub fn collapse_tile(tile: &mut Tile, matched: &[ColorName]) -> Result<CollapseOutcome> {
    match plan(tile, matched)? {
        None => Ok(CollapseOutcome::Destroyed),
        Some((shape, slot_colors)) => {
            tile.reshape(shape, slot_colors);
            Ok(CollapseOutcome::Reshaped {
                shape,
                cells: *tile.cells(),
            })
        }
    }
}

/// Compute the collapse outcome without touching the tile
///
/// # Errors
///
/// Returns `InvariantViolation` under the same conditions as `collapse_tile`
pub fn preview(tile: &Tile, matched: &[ColorName]) -> Result<CollapseOutcome> {
    Ok(match plan(tile, matched)? {
        None => CollapseOutcome::Destroyed,
        Some((shape, slot_colors)) => CollapseOutcome::Reshaped {
            shape,
            cells: shape.layout(slot_colors),
        },
    })
}

/// Collapse the tile at a board cell, clearing the cell when nothing survives
///
/// # Errors
///
/// Returns `InvariantViolation` if the cell is empty, none of the colors are
/// present on the tile, or the survivors cannot be classified
pub fn resolve_tile(
    board: &mut Board,
    x: usize,
    y: usize,
    matched: &[ColorName],
) -> Result<ResolvedTile> {
    let id = board
        .tile_id(x, y)
        .ok_or_else(|| invariant_violation("resolve_tile", &format!("no tile at ({x}, {y})")))?;
    let tile = board
        .tile_mut(x, y)
        .ok_or_else(|| invariant_violation("resolve_tile", &format!("no tile at ({x}, {y})")))?;

    let outcome = collapse_tile(tile, matched)?;
    if outcome == CollapseOutcome::Destroyed {
        board.remove(x, y);
    }

    Ok(ResolvedTile {
        id,
        x,
        y,
        colors: matched.to_vec(),
        outcome,
    })
}

fn plan(tile: &Tile, matched: &[ColorName]) -> Result<Plan> {
    let removed = SlotSet::matching(tile, matched);
    if removed.is_empty() {
        return Err(invariant_violation(
            "collapse",
            &format!(
                "{} tile carries none of the matched colors {matched:?}",
                tile.shape()
            ),
        ));
    }

    let mut survivors: Vec<Slot> = tile
        .slots()
        .filter(|slot| !removed.contains(slot.index))
        .collect();
    survivors.sort_by_key(|slot| (slot.footprint.top, slot.footprint.left));

    match survivors.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some((Shape::Single, [only.color; MAX_SLOTS]))),
        [first, second] => two_survivors(first, second).map(Some),
        [first, second, third] => three_survivors([first, second, third]).map(Some),
        _ => Err(invariant_violation(
            "collapse",
            &format!("{} survivors cannot be classified", survivors.len()),
        )),
    }
}

const fn stacked(top: ColorName, bottom: ColorName) -> (Shape, [ColorName; MAX_SLOTS]) {
    (Shape::TwoHorizontal, [top, bottom, top, bottom])
}

const fn side_by_side(left: ColorName, right: ColorName) -> (Shape, [ColorName; MAX_SLOTS]) {
    (Shape::TwoVertical, [left, right, left, right])
}

fn left_first<'a>(a: &'a Slot, b: &'a Slot) -> (&'a Slot, &'a Slot) {
    if a.footprint.left <= b.footprint.left {
        (a, b)
    } else {
        (b, a)
    }
}

/// Two survivors, `upper` sorting before `lower` by (top, left)
fn two_survivors(upper: &Slot, lower: &Slot) -> Result<(Shape, [ColorName; MAX_SLOTS])> {
    let (a, b) = (&upper.footprint, &lower.footprint);

    if a.same_size(b) {
        if a.same_columns(b) {
            return Ok(stacked(upper.color, lower.color));
        }
        // Same row, or diagonal quadrants: each survivor widens down its own column
        let (left, right) = left_first(upper, lower);
        return Ok(side_by_side(left.color, right.color));
    }

    let widths_differ = a.width != b.width;
    let heights_differ = a.height != b.height;
    match (widths_differ, heights_differ) {
        (true, false) if !a.shares_row(b) => Ok(stacked(upper.color, lower.color)),
        (false, true) => {
            let (left, right) = left_first(upper, lower);
            if left.footprint.left + left.footprint.width <= right.footprint.left {
                Ok(side_by_side(left.color, right.color))
            } else {
                Err(invariant_violation(
                    "collapse",
                    &"survivors of different height overlap in columns",
                ))
            }
        }
        _ => Err(invariant_violation(
            "collapse",
            &format!("cannot merge survivors of size {}x{} and {}x{}", a.width, a.height, b.width, b.height),
        )),
    }
}

fn three_survivors(slots: [&Slot; 3]) -> Result<(Shape, [ColorName; MAX_SLOTS])> {
    let [first, second, third] = slots;
    let (odd, pair) = if !first.footprint.shares_row(&second.footprint)
        && !first.footprint.shares_row(&third.footprint)
    {
        (first, (second, third))
    } else if !second.footprint.shares_row(&first.footprint)
        && !second.footprint.shares_row(&third.footprint)
    {
        (second, (first, third))
    } else if !third.footprint.shares_row(&first.footprint)
        && !third.footprint.shares_row(&second.footprint)
    {
        (third, (first, second))
    } else {
        return Err(invariant_violation(
            "collapse",
            &"three survivors without a cell on its own row",
        ));
    };

    let (left, right) = left_first(pair.0, pair.1);
    let shape = if odd.footprint.covers_row(0) {
        Shape::LShape
    } else {
        Shape::LShapeMirrored
    };
    Ok((shape, [odd.color, left.color, right.color, right.color]))
}
