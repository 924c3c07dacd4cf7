//! Cross-tile adjacency matching
//!
//! Neighboring tiles match where sub-cells on their shared edge carry the same
//! color. Only the right and upper neighbors are tested, which still covers
//! every shared edge exactly once.

use crate::spatial::board::Board;
use crate::spatial::shapes::ColorName;
use crate::spatial::tile::Tile;
use std::collections::HashSet;

/// One sub-cell of one tile taking part in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchRecord {
    /// Board column of the tile
    pub tile_x: usize,
    /// Board row of the tile
    pub tile_y: usize,
    /// Micro-grid row of the matched sub-cell
    pub sub_row: usize,
    /// Micro-grid column of the matched sub-cell
    pub sub_col: usize,
    /// Color shared across the edge
    pub color: ColorName,
}

/// All colors matched on one tile during a single scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMatches {
    /// Board column of the tile
    pub x: usize,
    /// Board row of the tile
    pub y: usize,
    /// Matched colors in first-encounter order
    pub colors: Vec<ColorName>,
}

#[derive(Clone, Copy)]
enum Direction {
    Right,
    Up,
}

// Sub-cell pairs compared across each edge: (own row, own col, neighbor row, neighbor col)
const RIGHT_EDGE: [(usize, usize, usize, usize); 2] = [(0, 1, 0, 0), (1, 1, 1, 0)];
const UP_EDGE: [(usize, usize, usize, usize); 2] = [(0, 0, 1, 0), (0, 1, 1, 1)];

/// Scan the board for matching sub-cells
///
/// Rows are visited from the bottom (`y = height - 1`) to the top, columns left
/// to right, and the right neighbor before the upper one. Candidates are
/// deduplicated by `(tile_x, tile_y, color)`, keeping the first sub-cell seen,
/// and returned in first-encounter order. An empty result means the board is
/// stable.
pub fn find_matches(board: &Board) -> Vec<MatchRecord> {
    let mut candidates = Vec::new();

    for y in (0..board.height()).rev() {
        for x in 0..board.width() {
            let Some(tile) = board.tile(x, y) else {
                continue;
            };
            for direction in [Direction::Right, Direction::Up] {
                collect_edge(board, tile, x, y, direction, &mut candidates);
            }
        }
    }

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|record| seen.insert((record.tile_x, record.tile_y, record.color)))
        .collect()
}

fn collect_edge(
    board: &Board,
    tile: &Tile,
    x: usize,
    y: usize,
    direction: Direction,
    out: &mut Vec<MatchRecord>,
) {
    let (neighbor_pos, pairs) = match direction {
        Direction::Right => (x.checked_add(1).map(|nx| (nx, y)), RIGHT_EDGE),
        Direction::Up => (y.checked_sub(1).map(|ny| (x, ny)), UP_EDGE),
    };
    let Some((nx, ny)) = neighbor_pos else {
        return;
    };
    let Some(neighbor) = board.tile(nx, ny) else {
        return;
    };

    for (row, col, n_row, n_col) in pairs {
        let (Some(color), Some(other)) = (tile.color_at(row, col), neighbor.color_at(n_row, n_col))
        else {
            continue;
        };
        if color != other {
            continue;
        }
        out.push(MatchRecord {
            tile_x: x,
            tile_y: y,
            sub_row: row,
            sub_col: col,
            color,
        });
        out.push(MatchRecord {
            tile_x: nx,
            tile_y: ny,
            sub_row: n_row,
            sub_col: n_col,
            color,
        });
    }
}

/// Group match records by tile, keeping first-encounter order for tiles and colors
pub fn group_by_tile(matches: &[MatchRecord]) -> Vec<TileMatches> {
    let mut groups: Vec<TileMatches> = Vec::new();
    for record in matches {
        match groups
            .iter_mut()
            .find(|group| group.x == record.tile_x && group.y == record.tile_y)
        {
            Some(group) => {
                if !group.colors.contains(&record.color) {
                    group.colors.push(record.color);
                }
            }
            None => groups.push(TileMatches {
                x: record.tile_x,
                y: record.tile_y,
                colors: vec![record.color],
            }),
        }
    }
    groups
}
