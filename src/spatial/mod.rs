//! Spatial data structures for the puzzle board
//!
//! This module contains:
//! - The shape vocabulary and color palette
//! - Tiles and their colored slots
//! - The seeded tile factory
//! - The board that owns placed tiles

/// Board storage, placement and occupancy queries
pub mod board;
/// Randomly colored tile construction
pub mod factory;
/// Canonical shape layouts and the color palette
pub mod shapes;
/// Tile state and slot views
pub mod tile;

pub use board::{Board, TileId};
pub use tile::Tile;
