//! Game constants and runtime configuration defaults

/// Number of colors in the tile palette
pub const PALETTE_SIZE: usize = 6;

/// Side length of the micro-grid inside every tile
pub const TILE_CELLS: usize = 2;

/// Most color slots a single tile can carry
pub const MAX_SLOTS: usize = TILE_CELLS * TILE_CELLS;

// Keeps generated boards small enough to render and iterate quickly
/// Maximum allowed board dimension
pub const MAX_BOARD_DIMENSION: usize = 256;

// Default values for configurable parameters
/// Fixed seed for reproducible simulations
pub const DEFAULT_SEED: u64 = 42;

/// Default board width in tiles
pub const DEFAULT_WIDTH: usize = 6;

/// Default board height in tiles
pub const DEFAULT_HEIGHT: usize = 8;

/// Default number of tile resolutions required to clear a level
pub const DEFAULT_GOAL: i32 = 20;

/// Default number of simulated games
pub const DEFAULT_GAMES: usize = 1;

/// Default cap on committed tiles per simulated game
pub const DEFAULT_MAX_MOVES: usize = 500;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
