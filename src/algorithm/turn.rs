//! Turn coordination: match, collapse, drop, repeat until stable
//!
//! The coordinator is a small state machine over an externally owned board.
//! Each phase is a separate call so a presentation layer can run arbitrarily
//! long animations between phases; the coordinator never waits. Calling a phase
//! operation while the coordinator is in a different phase changes nothing,
//! which makes every operation safe to repeat.
//!
//! ```text
//! Idle -> Matching -> Collapsing -> Dropping -> Matching -> ... -> Idle
//! ```
//!
//! At every phase boundary each board cell holds a canonical layout, so a turn
//! may be abandoned between calls by simply dropping the board.
//!
//! `LevelComplete` is handed out once by `take_completion`; `advance` forwards
//! it, while callers stepping the phases themselves call it after each scan.

use crate::algorithm::collapse::{ResolvedTile, preview, resolve_tile};
use crate::algorithm::gravity::{TileDrop, settle};
use crate::algorithm::matching::{MatchRecord, find_matches, group_by_tile};
use crate::io::error::{GameError, Result, invariant_violation};
use crate::spatial::board::{Board, TileId};
use std::fmt;

/// Phase token of the turn state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No pending board changes
    Idle,
    /// Next call scans for matches
    Matching,
    /// Next call collapses the pending matched tiles
    Collapsing,
    /// Next call lets tiles fall
    Dropping,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Matching => "matching",
            Self::Collapsing => "collapsing",
            Self::Dropping => "dropping",
        };
        f.write_str(name)
    }
}

/// Signals emitted for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A tile entered the board
    TilePlaced {
        /// Identity assigned by the board
        id: TileId,
        /// Board column
        x: usize,
        /// Board row
        y: usize,
    },
    /// A matched tile was re-normalized or destroyed
    TileCollapsed(ResolvedTile),
    /// A tile fell within its column
    TileDropped(TileDrop),
    /// The goal counter was decremented
    GoalUpdated {
        /// Counter value after the decrement
        remaining: i32,
    },
    /// The turn ended with the goal counter at or below zero
    LevelComplete,
}

/// Drives a board through match, collapse and gravity until it is stable
#[derive(Debug, Clone)]
pub struct TurnCoordinator {
    phase: Phase,
    pending: Vec<MatchRecord>,
    remaining_goals: i32,
    cycles: usize,
    resolved_tiles: usize,
    completion_reported: bool,
}

impl TurnCoordinator {
    /// Create an idle coordinator with a goal countdown
    pub const fn new(goal: i32) -> Self {
        Self {
            phase: Phase::Idle,
            pending: Vec::new(),
            remaining_goals: goal,
            cycles: 0,
            resolved_tiles: 0,
            completion_reported: false,
        }
    }

    /// Current phase token
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Goal counter value
    pub const fn remaining_goals(&self) -> i32 {
        self.remaining_goals
    }

    /// Completed match, collapse and drop cycles in the current turn
    pub const fn cycles(&self) -> usize {
        self.cycles
    }

    /// Tiles resolved in the current turn
    pub const fn resolved_tiles(&self) -> usize {
        self.resolved_tiles
    }

    /// Matches found by the last scan and not yet collapsed
    pub fn pending_matches(&self) -> &[MatchRecord] {
        &self.pending
    }

    /// Whether the coordinator is idle with the goal reached
    pub const fn is_level_complete(&self) -> bool {
        matches!(self.phase, Phase::Idle) && self.remaining_goals <= 0
    }

    /// Start resolving a turn after the board changed
    ///
    /// # Errors
    ///
    /// Returns `TurnInProgress` unless the coordinator is idle
    pub fn begin_turn(&mut self) -> Result<()> {
        if self.phase != Phase::Idle {
            return Err(GameError::TurnInProgress { phase: self.phase });
        }
        self.phase = Phase::Matching;
        self.cycles = 0;
        self.resolved_tiles = 0;
        Ok(())
    }

    /// Scan for matches
    ///
    /// In the `Matching` phase an empty scan ends the turn (`Idle`) and a
    /// non-empty one moves to `Collapsing`. In any other phase the pending
    /// matches are returned unchanged.
    pub fn compute_matches(&mut self, board: &Board) -> &[MatchRecord] {
        if self.phase == Phase::Matching {
            self.pending = find_matches(board);
            self.phase = if self.pending.is_empty() {
                Phase::Idle
            } else {
                Phase::Collapsing
            };
        }
        &self.pending
    }

    /// Collapse every tile named by the pending matches
    ///
    /// Each resolved tile decrements the goal counter once, whatever number of
    /// colors it lost. All collapses are checked before the first one is
    /// applied, so an error leaves the board as it was.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if a pending match names an empty cell or a
    /// tile whose survivors cannot be classified
    pub fn resolve_collapse(&mut self, board: &mut Board) -> Result<Vec<BoardEvent>> {
        if self.phase != Phase::Collapsing {
            return Ok(Vec::new());
        }

        let groups = group_by_tile(&self.pending);
        for group in &groups {
            let tile = board.tile(group.x, group.y).ok_or_else(|| {
                invariant_violation(
                    "resolve_collapse",
                    &format!("match names empty cell ({}, {})", group.x, group.y),
                )
            })?;
            preview(tile, &group.colors)?;
        }

        let mut events = Vec::with_capacity(groups.len() * 2);
        for group in groups {
            let resolved = resolve_tile(board, group.x, group.y, &group.colors)?;
            events.push(BoardEvent::TileCollapsed(resolved));
            self.remaining_goals = self.remaining_goals.saturating_sub(1);
            self.resolved_tiles += 1;
            events.push(BoardEvent::GoalUpdated {
                remaining: self.remaining_goals,
            });
        }

        self.pending.clear();
        self.phase = Phase::Dropping;
        Ok(events)
    }

    /// Let tiles fall to a fixed point, then return to `Matching`
    ///
    /// # Errors
    ///
    /// Propagates a failed tile move; the phase stays `Dropping`
    pub fn resolve_gravity(&mut self, board: &mut Board) -> Result<Vec<BoardEvent>> {
        if self.phase != Phase::Dropping {
            return Ok(Vec::new());
        }
        let events = settle(board)?
            .into_iter()
            .map(BoardEvent::TileDropped)
            .collect();
        self.cycles += 1;
        self.phase = Phase::Matching;
        Ok(events)
    }

    /// Take the one-shot `LevelComplete` event
    ///
    /// Returns it the first time the coordinator is idle with the goal
    /// reached and `None` on every later call. `advance` calls this after each
    /// scan; callers driving the phase operations directly call it after
    /// `compute_matches`.
    pub fn take_completion(&mut self) -> Option<BoardEvent> {
        let newly_complete = self.is_level_complete() && !self.completion_reported;
        self.completion_reported |= newly_complete;
        newly_complete.then_some(BoardEvent::LevelComplete)
    }

    /// Run the operation the current phase calls for
    ///
    /// Emits `LevelComplete` once, on the scan that ends a turn with the goal
    /// reached.
    ///
    /// # Errors
    ///
    /// Propagates collapse and gravity errors
    pub fn advance(&mut self, board: &mut Board) -> Result<Vec<BoardEvent>> {
        match self.phase {
            Phase::Idle => Ok(Vec::new()),
            Phase::Matching => {
                self.compute_matches(board);
                Ok(self.take_completion().into_iter().collect())
            }
            Phase::Collapsing => self.resolve_collapse(board),
            Phase::Dropping => self.resolve_gravity(board),
        }
    }

    /// Advance until the coordinator is idle, collecting every event
    ///
    /// Terminates because each cycle with matches removes at least one slot
    /// from every matched tile and the board holds finitely many slots.
    ///
    /// # Errors
    ///
    /// Propagates collapse and gravity errors
    pub fn resolve_turn(&mut self, board: &mut Board) -> Result<Vec<BoardEvent>> {
        let mut events = Vec::new();
        while self.phase != Phase::Idle {
            events.extend(self.advance(board)?);
        }
        Ok(events)
    }
}
