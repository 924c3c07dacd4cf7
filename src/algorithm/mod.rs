/// Re-normalization of matched tiles
pub mod collapse;
/// Column compaction to a fixed point
pub mod gravity;
/// Cross-tile adjacency matching
pub mod matching;
/// Compact slot membership sets
pub mod slots;
/// Phase-by-phase turn coordination
pub mod turn;
