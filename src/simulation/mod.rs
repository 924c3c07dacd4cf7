//! Headless play of generated levels for smoke testing and tuning

/// Random-column autoplayer
pub mod autoplay;
/// Per-game and aggregated statistics
pub mod report;
