//! Level bootstrap and the playable game session

/// Level data consumed when a level starts
pub mod level;
/// Board, turn and tile queue owned together
pub mod session;

pub use level::LevelData;
pub use session::Game;
