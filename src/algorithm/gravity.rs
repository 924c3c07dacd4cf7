//! Column compaction after tiles are cleared

use crate::io::error::Result;
use crate::spatial::board::{Board, TileId};

/// One tile falling to a lower cell in its column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileDrop {
    /// Identity of the moved tile
    pub id: TileId,
    /// Source cell `(x, y)`
    pub from: (usize, usize),
    /// Destination cell `(x, y)`
    pub to: (usize, usize),
}

/// Let every tile fall until no tile has an empty cell beneath it
///
/// Returns whether anything moved. Once this returns `false` the board is a
/// fixed point and further calls change nothing.
///
/// # Errors
///
/// Propagates a failed tile move from `settle`
pub fn drop_all(board: &mut Board) -> Result<bool> {
    Ok(!settle(board)?.is_empty())
}

/// Run gravity passes to a fixed point, recording every move
///
/// Each pass walks every column upward from the second-to-bottom row. A tile
/// above a gap moves straight to the lowest empty row of that gap in one
/// step. Passes repeat until one moves nothing.
///
/// # Errors
///
/// Returns `OccupiedCell` or `InvariantViolation` if the board refuses a move
/// the pass planned, which means the board changed under the scan
pub fn settle(board: &mut Board) -> Result<Vec<TileDrop>> {
    let mut drops = Vec::new();
    loop {
        let moved = drop_pass(board, &mut drops)?;
        if moved == 0 {
            return Ok(drops);
        }
    }
}

fn drop_pass(board: &mut Board, drops: &mut Vec<TileDrop>) -> Result<usize> {
    let mut moved = 0;
    let height = board.height();

    for x in 0..board.width() {
        for y in (0..height.saturating_sub(1)).rev() {
            if !board.is_occupied(x, y) {
                continue;
            }

            let mut drop_y = y;
            while drop_y + 1 < height && board.can_place(x, drop_y + 1) {
                drop_y += 1;
            }
            if drop_y == y {
                continue;
            }

            let id = board.move_tile((x, y), (x, drop_y))?;
            drops.push(TileDrop {
                id,
                from: (x, y),
                to: (x, drop_y),
            });
            moved += 1;
        }
    }

    Ok(moved)
}
