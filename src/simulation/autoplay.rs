//! Random-column autoplayer for exercising the turn engine end to end

use crate::game::level::LevelData;
use crate::game::session::Game;
use crate::io::error::{Result, invalid_parameter};
use crate::simulation::report::{GameOutcome, GameSummary};
use crate::spatial::factory::TileFactory;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Parameters of a generated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayConfig {
    /// Board width in tiles
    pub width: usize,
    /// Board height in tiles
    pub height: usize,
    /// Tile resolutions required to complete the level
    pub goal: i32,
    /// Cap on committed tiles
    pub max_moves: usize,
    /// Bottom rows filled with random tiles before the first move
    pub prefill_rows: usize,
}

/// A finished game together with its statistics
pub struct Playthrough {
    /// Statistics of the game
    pub summary: GameSummary,
    /// Final game state
    pub game: Game,
}

/// Plays generated levels by committing each tile to a random open column
///
/// The level, the tile queue and the column choices all derive from one seed,
/// so a seed always replays the same game.
pub struct Autoplayer {
    config: AutoplayConfig,
    seed: u64,
    rng: StdRng,
}

impl Autoplayer {
    /// Create an autoplayer for one seed
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the prefill would leave no open row
    pub fn new(config: AutoplayConfig, seed: u64) -> Result<Self> {
        if config.height > 0 && config.prefill_rows >= config.height {
            return Err(invalid_parameter(
                "prefill_rows",
                &config.prefill_rows,
                &format!("must be less than the board height {}", config.height),
            ));
        }

        Ok(Self {
            config,
            seed,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Play one game to completion, stall or move cap
    ///
    /// # Errors
    ///
    /// Returns an error if the board dimensions are invalid or a turn fails
    pub fn play(&mut self) -> Result<Playthrough> {
        self.play_with(|_| {})
    }

    /// Play one game, reporting the move count after every resolved turn
    ///
    /// # Errors
    ///
    /// Returns an error if the board dimensions are invalid or a turn fails
    pub fn play_with<F>(&mut self, mut on_move: F) -> Result<Playthrough>
    where
        F: FnMut(usize),
    {
        let mut factory = TileFactory::new(self.seed);
        let level = LevelData::generated(
            self.config.width,
            self.config.height,
            self.config.goal,
            self.config.prefill_rows,
            &mut factory,
        );
        let mut game = Game::from_level(&level, self.seed.wrapping_add(1))?;

        let mut cycles = 0;
        let mut tiles_resolved = 0;
        let mut longest_cascade = 0;

        let outcome = loop {
            if game.is_complete() {
                break GameOutcome::Completed;
            }
            if game.moves() >= self.config.max_moves {
                break GameOutcome::MoveCapReached;
            }

            let open = game.board().open_columns();
            let Some(&column) = open.get(self.rng.random_range(0..open.len().max(1))) else {
                break GameOutcome::Stalled;
            };

            game.play_column(column)?;

            let turn = game.turn();
            cycles += turn.cycles();
            tiles_resolved += turn.resolved_tiles();
            longest_cascade = longest_cascade.max(turn.cycles());
            on_move(game.moves());
        };

        let summary = GameSummary {
            seed: self.seed,
            outcome,
            moves: game.moves(),
            cycles,
            tiles_resolved,
            longest_cascade,
            remaining_goals: game.remaining_goals(),
        };

        Ok(Playthrough { summary, game })
    }
}
