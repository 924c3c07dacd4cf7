//! Tests for game constants and runtime defaults

#[cfg(test)]
mod tests {
    use quadmatch::io::configuration::{
        DEFAULT_GAMES, DEFAULT_GOAL, DEFAULT_HEIGHT, DEFAULT_MAX_MOVES, DEFAULT_SEED,
        DEFAULT_WIDTH, MAX_BOARD_DIMENSION, MAX_INDIVIDUAL_PROGRESS_BARS, MAX_SLOTS,
        PALETTE_SIZE, PROGRESS_BAR_WIDTH, TILE_CELLS,
    };
    use quadmatch::spatial::board::Board;
    use quadmatch::spatial::shapes::PALETTE;

    // Tests tile geometry constants agree with each other
    // Verified by changing the micro-grid size
    #[test]
    fn test_tile_geometry() {
        assert_eq!(TILE_CELLS, 2);
        assert_eq!(MAX_SLOTS, TILE_CELLS * TILE_CELLS);
    }

    // Tests the palette can color a four-slot tile with distinct colors
    // Verified by shrinking the palette to three colors
    #[test]
    fn test_palette_size() {
        assert_eq!(PALETTE_SIZE, PALETTE.len());
        assert_eq!(PALETTE_SIZE, 6);
        assert_eq!(MAX_SLOTS, 4);
    }

    // Tests default board dimensions are accepted by the board
    // Verified by setting the default width above the maximum
    #[test]
    fn test_default_board_within_limits() {
        assert!(Board::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).is_ok());
        assert!(Board::new(MAX_BOARD_DIMENSION, MAX_BOARD_DIMENSION).is_ok());
        assert_eq!((DEFAULT_WIDTH, DEFAULT_HEIGHT), (6, 8));
    }

    // Tests simulation defaults
    // Verified by changing default values
    #[test]
    fn test_simulation_defaults() {
        assert_eq!(DEFAULT_SEED, 42);
        assert_eq!(DEFAULT_GAMES, 1);
        assert_eq!(DEFAULT_GOAL, 20);
        assert_eq!(DEFAULT_MAX_MOVES, 500);
    }

    // Tests progress display constants
    // Verified by changing progress settings
    #[test]
    fn test_progress_settings() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
    }
}
