//! Game session owning the board, turn coordinator and tile queue

use crate::algorithm::turn::{BoardEvent, Phase, TurnCoordinator};
use crate::game::level::LevelData;
use crate::io::error::{GameError, Result};
use crate::spatial::board::Board;
use crate::spatial::factory::TileFactory;
use crate::spatial::tile::Tile;

/// One level in play
///
/// Accepts the two input events of the core: placing a tile during setup and
/// committing the queued tile to a column during play. Both are validated
/// against `Board::can_place` and never overwrite a tile.
pub struct Game {
    board: Board,
    turn: TurnCoordinator,
    factory: TileFactory,
    next_tile: Tile,
    moves: usize,
}

impl Game {
    /// Start a level
    ///
    /// Starting tiles are placed as given; they do not trigger a turn.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The board dimensions are invalid
    /// - A starting or next tile does not follow its shape layout
    /// - Two starting tiles share a cell, or one lies off the board
    pub fn from_level(level: &LevelData, seed: u64) -> Result<Self> {
        let mut board = Board::new(level.width, level.height)?;
        for spec in &level.starting_tiles {
            board.place(spec.to_tile()?, spec.x, spec.y)?;
        }

        Ok(Self {
            board,
            turn: TurnCoordinator::new(level.goal_count),
            factory: TileFactory::new(seed),
            next_tile: level.next_tile.to_tile()?,
            moves: 0,
        })
    }

    /// Current board
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Turn state machine
    pub const fn turn(&self) -> &TurnCoordinator {
        &self.turn
    }

    /// Tile waiting to be committed
    pub const fn next_tile(&self) -> &Tile {
        &self.next_tile
    }

    /// Tiles committed so far
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Current phase token
    pub const fn phase(&self) -> Phase {
        self.turn.phase()
    }

    /// Goal counter value
    pub const fn remaining_goals(&self) -> i32 {
        self.turn.remaining_goals()
    }

    /// Whether the level is complete
    pub const fn is_complete(&self) -> bool {
        self.turn.is_level_complete()
    }

    /// Whether no column can take another tile
    pub fn is_board_full(&self) -> bool {
        self.board.open_columns().is_empty()
    }

    /// Place a tile during level setup
    ///
    /// # Errors
    ///
    /// Returns `TurnInProgress` if a turn is resolving, or `OccupiedCell` if the
    /// cell is taken or off the board
    pub fn place_tile(&mut self, tile: Tile, x: usize, y: usize) -> Result<BoardEvent> {
        self.ensure_idle()?;
        let id = self.board.place(tile, x, y)?;
        Ok(BoardEvent::TilePlaced { id, x, y })
    }

    /// Drop the queued tile into a column and start a turn
    ///
    /// The tile lands on the lowest empty row of the column. The queue is
    /// refilled with a factory tile of random shape.
    ///
    /// # Errors
    ///
    /// Returns `TurnInProgress` if the previous turn is unresolved, or
    /// `OccupiedCell` if the column is full or off the board
    pub fn commit_next_tile(&mut self, column: usize) -> Result<Vec<BoardEvent>> {
        self.ensure_idle()?;
        let row = self
            .board
            .lowest_empty_row(column)
            .ok_or(GameError::OccupiedCell { x: column, y: 0 })?;

        let id = self.board.place(self.next_tile.clone(), column, row)?;
        self.next_tile = self.factory.random_tile();
        self.moves += 1;
        self.turn.begin_turn()?;

        Ok(vec![BoardEvent::TilePlaced { id, x: column, y: row }])
    }

    /// Run the next phase of the current turn
    ///
    /// # Errors
    ///
    /// Propagates collapse and gravity errors
    pub fn advance(&mut self) -> Result<Vec<BoardEvent>> {
        self.turn.advance(&mut self.board)
    }

    /// Run the current turn until the board is stable
    ///
    /// # Errors
    ///
    /// Propagates collapse and gravity errors
    pub fn resolve_turn(&mut self) -> Result<Vec<BoardEvent>> {
        self.turn.resolve_turn(&mut self.board)
    }

    /// Commit the queued tile to a column and resolve the whole turn
    ///
    /// # Errors
    ///
    /// Returns any error from `commit_next_tile` or `resolve_turn`
    pub fn play_column(&mut self, column: usize) -> Result<Vec<BoardEvent>> {
        let mut events = self.commit_next_tile(column)?;
        events.extend(self.resolve_turn()?);
        Ok(events)
    }

    fn ensure_idle(&self) -> Result<()> {
        match self.turn.phase() {
            Phase::Idle => Ok(()),
            phase => Err(GameError::TurnInProgress { phase }),
        }
    }
}
