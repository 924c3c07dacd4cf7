//! Error types for board mutation, tile construction and turn resolution

use crate::algorithm::turn::Phase;
use crate::spatial::shapes::Shape;
use std::fmt;

/// Main error type for all board and turn operations
#[derive(Debug)]
pub enum GameError {
    /// Placement requested on a non-empty or out-of-bounds cell
    OccupiedCell {
        /// Column of the rejected placement
        x: usize,
        /// Row of the rejected placement
        y: usize,
    },

    /// Shape name does not belong to the shape vocabulary
    InvalidShape {
        /// The unrecognized name
        name: String,
    },

    /// Color name does not belong to the palette
    InvalidColor {
        /// The unrecognized name
        name: String,
    },

    /// Explicit tile colors do not follow the layout of the requested shape
    LayoutMismatch {
        /// Shape the colors were supposed to describe
        shape: Shape,
        /// Which slot broke the layout
        reason: String,
    },

    /// Collapse input that cannot be classified
    ///
    /// Indicates the match list and the board disagree, which is a logic
    /// defect rather than a recoverable condition.
    InvariantViolation {
        /// Operation that detected the violation
        operation: &'static str,
        /// Description of the inconsistent state
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A gameplay move arrived while the previous turn was still resolving
    TurnInProgress {
        /// Phase the coordinator was in when the move arrived
        phase: Phase,
    },

    /// Failed to write the simulation report
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OccupiedCell { x, y } => {
                write!(f, "Cannot place tile at ({x}, {y}): cell is occupied or out of bounds")
            }
            Self::InvalidShape { name } => write!(f, "Invalid tile shape '{name}'"),
            Self::InvalidColor { name } => write!(f, "Invalid tile color '{name}'"),
            Self::LayoutMismatch { shape, reason } => {
                write!(f, "Colors do not form a {shape} layout: {reason}")
            }
            Self::InvariantViolation { operation, reason } => {
                write!(f, "Invariant violated in {operation}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::TurnInProgress { phase } => {
                write!(f, "Cannot commit a tile while the turn is in the {phase} phase")
            }
            Self::Output { source } => write!(f, "Failed to write output: {source}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Convenience type alias for game results
pub type Result<T> = std::result::Result<T, GameError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GameError {
    GameError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invariant violation error
pub fn invariant_violation(operation: &'static str, reason: &impl ToString) -> GameError {
    GameError::InvariantViolation {
        operation,
        reason: reason.to_string(),
    }
}
