//! Command-line surface, configuration, errors and progress display

/// Command-line parsing and the simulation runner
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Terminal progress bars for simulation batches
pub mod progress;
