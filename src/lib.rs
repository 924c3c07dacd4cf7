//! Board state machine for a match-3 puzzle built from composite 2x2 tiles
//!
//! Every board cell holds a tile subdivided into a 2x2 micro-grid of colors.
//! Placing a tile starts a turn: same-colored sub-cells touching across tile
//! edges are matched, matched tiles lose the colored regions involved and
//! re-normalize into a canonical shape, tiles fall to fill gaps, and the cycle
//! repeats until the board is stable.

#![forbid(unsafe_code)]

/// Matching, collapse, gravity and turn coordination
pub mod algorithm;
/// Level bootstrap and the game session
pub mod game;
/// Command-line interface, configuration, errors and progress display
pub mod io;
/// Headless autoplay and simulation statistics
pub mod simulation;
/// Shapes, tiles, the tile factory and the board
pub mod spatial;

pub use io::error::{GameError, Result};
