//! Tests for board placement, occupancy queries and text rendering

#[cfg(test)]
mod tests {
    use quadmatch::GameError;
    use quadmatch::io::configuration::MAX_BOARD_DIMENSION;
    use quadmatch::spatial::board::{Board, TileId};
    use quadmatch::spatial::shapes::{ColorName, Shape};
    use quadmatch::spatial::tile::Tile;

    // Tests dimension validation
    // Verified by accepting zero-height boards
    #[test]
    fn test_new_rejects_bad_dimensions() {
        assert!(matches!(
            Board::new(0, 4),
            Err(GameError::InvalidParameter {
                parameter: "width",
                ..
            })
        ));
        assert!(matches!(
            Board::new(4, MAX_BOARD_DIMENSION + 1),
            Err(GameError::InvalidParameter {
                parameter: "height",
                ..
            })
        ));
        assert!(Board::new(MAX_BOARD_DIMENSION, 1).is_ok());
    }

    // Tests placement fills a cell and refuses a second tile
    // Verified by overwriting occupied cells in place
    #[test]
    fn test_place_and_occupancy() {
        let mut board = Board::new(3, 2).expect("valid board");
        assert!(board.can_place(2, 1));

        board
            .place(Tile::uniform(ColorName::Red), 2, 1)
            .expect("empty cell");
        assert!(!board.can_place(2, 1));
        assert!(board.is_occupied(2, 1));

        let result = board.place(Tile::uniform(ColorName::Blue), 2, 1);
        assert!(matches!(result, Err(GameError::OccupiedCell { x: 2, y: 1 })));
        assert_eq!(
            board.tile(2, 1).map(Tile::shape),
            Some(Shape::Single)
        );
        assert!(board.tile(2, 1).is_some_and(|t| t.has_color(ColorName::Red)));
    }

    // Tests out-of-bounds placement is reported as an occupied cell
    // Verified by growing the board on demand
    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new(2, 2).expect("valid board");
        assert!(!board.can_place(2, 0));
        assert!(!board.in_bounds(0, 2));
        let result = board.place(Tile::uniform(ColorName::Red), 0, 5);
        assert!(matches!(result, Err(GameError::OccupiedCell { x: 0, y: 5 })));
        assert_eq!(board.tile_count(), 0);
    }

    // Tests tile identities are assigned in placement order
    // Verified by reusing the identity counter after removal
    #[test]
    fn test_tile_ids() {
        let mut board = Board::new(2, 2).expect("valid board");
        let first = board
            .place(Tile::uniform(ColorName::Red), 0, 0)
            .expect("empty cell");
        let second = board
            .place(Tile::uniform(ColorName::Blue), 1, 0)
            .expect("empty cell");
        assert_eq!(first, TileId(0));
        assert_eq!(second, TileId(1));
        assert_eq!(board.tile_id(1, 0), Some(TileId(1)));

        board.remove(0, 0);
        let third = board
            .place(Tile::uniform(ColorName::Green), 0, 0)
            .expect("cleared cell");
        assert_eq!(third, TileId(2));
        assert_eq!(third.to_string(), "#2");
    }

    // Tests removal hands back the tile and clears the cell
    // Verified by leaving the occupant in place on removal
    #[test]
    fn test_remove() {
        let mut board = Board::new(1, 1).expect("valid board");
        board
            .place(Tile::uniform(ColorName::Orange), 0, 0)
            .expect("empty cell");
        let removed = board.remove(0, 0).expect("tile present");
        assert!(removed.has_color(ColorName::Orange));
        assert!(board.can_place(0, 0));
        assert!(board.remove(0, 0).is_none());
    }

    // Tests the lowest empty row is found from the bottom
    // Verified by scanning from the top of the column
    #[test]
    fn test_lowest_empty_row() {
        let mut board = Board::new(2, 3).expect("valid board");
        assert_eq!(board.lowest_empty_row(0), Some(2));

        board
            .place(Tile::uniform(ColorName::Red), 0, 2)
            .expect("empty cell");
        assert_eq!(board.lowest_empty_row(0), Some(1));

        board
            .place(Tile::uniform(ColorName::Red), 0, 1)
            .expect("empty cell");
        board
            .place(Tile::uniform(ColorName::Red), 0, 0)
            .expect("empty cell");
        assert_eq!(board.lowest_empty_row(0), None);
        assert_eq!(board.lowest_empty_row(7), None);
        assert_eq!(board.open_columns(), vec![1]);
    }

    // Tests occupancy listing and slot totals
    // Verified by counting tiles instead of slots
    #[test]
    fn test_occupied_and_slot_count() {
        let mut board = Board::new(3, 2).expect("valid board");
        board
            .place(
                Tile::new(
                    Shape::Square2x2,
                    [
                        ColorName::Red,
                        ColorName::Blue,
                        ColorName::Green,
                        ColorName::Yellow,
                    ],
                ),
                1,
                1,
            )
            .expect("empty cell");
        board
            .place(Tile::uniform(ColorName::Red), 2, 0)
            .expect("empty cell");

        assert_eq!(board.occupied(), vec![(2, 0), (1, 1)]);
        assert_eq!(board.tile_count(), 2);
        assert_eq!(board.slot_count(), 5);
    }

    // Tests the text grid has two lines per row and marks empty cells
    // Verified by rendering one line per board row
    #[test]
    fn test_display() {
        let mut board = Board::new(2, 2).expect("valid board");
        board
            .place(
                Tile::new(
                    Shape::TwoHorizontal,
                    [
                        ColorName::Red,
                        ColorName::Blue,
                        ColorName::Red,
                        ColorName::Blue,
                    ],
                ),
                0,
                1,
            )
            .expect("empty cell");

        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines.first().copied(), Some("[.      .     ] [.      .     ]"));
        assert_eq!(lines.get(2).copied(), Some("[red    red   ] [.      .     ]"));
        assert_eq!(lines.get(3).copied(), Some("[blue   blue  ] [.      .     ]"));
    }
}
