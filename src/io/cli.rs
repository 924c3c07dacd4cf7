//! Command-line interface for batch simulation of generated levels

use crate::io::configuration::{
    DEFAULT_GAMES, DEFAULT_GOAL, DEFAULT_HEIGHT, DEFAULT_MAX_MOVES, DEFAULT_SEED, DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::simulation::autoplay::{AutoplayConfig, Autoplayer};
use crate::simulation::report::{GameSummary, SimulationReport};
use clap::Parser;
use std::io::Write;

#[derive(Parser)]
#[command(name = "quadmatch")]
#[command(
    author,
    version,
    about = "Simulate match-3 games played with composite 2x2 tiles"
)]
/// Command-line arguments for the simulation tool
pub struct Cli {
    /// Random seed of the first game; later games use consecutive seeds
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of games to simulate
    #[arg(short, long, default_value_t = DEFAULT_GAMES)]
    pub games: usize,

    /// Board width in tiles
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Board height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Tile resolutions required to complete a level
    #[arg(long, default_value_t = DEFAULT_GOAL)]
    pub goal: i32,

    /// Maximum committed tiles per game
    #[arg(short, long, default_value_t = DEFAULT_MAX_MOVES)]
    pub max_moves: usize,

    /// Bottom rows filled with random tiles before the first move
    #[arg(short, long, default_value_t = 0)]
    pub prefill_rows: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the final board of every game
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Game parameters shared by every simulated game
    pub const fn autoplay_config(&self) -> AutoplayConfig {
        AutoplayConfig {
            width: self.width,
            height: self.height,
            goal: self.goal,
            max_moves: self.max_moves,
            prefill_rows: self.prefill_rows,
        }
    }

    /// Seed of the game at `index`
    pub const fn game_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }
}

/// Plays the requested games with progress tracking and prints the report
pub struct SimulationRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SimulationRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Play every game and write the report to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if a game cannot be set up, a turn fails, or stdout
    /// cannot be written
    pub fn run(&mut self) -> Result<SimulationReport> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Play every game and write the report to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if a game cannot be set up, a turn fails, or `out`
    /// cannot be written
    pub fn run_to<W: Write>(&mut self, out: &mut W) -> Result<SimulationReport> {
        let config = self.cli.autoplay_config();
        if config.goal <= 0 {
            Self::warn_goal_met(config.goal);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.games);
        }

        let mut summaries = Vec::with_capacity(self.cli.games);
        let mut final_boards = Vec::new();

        for index in 0..self.cli.games {
            let seed = self.cli.game_seed(index);
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_game(index, seed, config.max_moves);
            }

            let mut player = Autoplayer::new(config, seed)?;
            let progress = &mut self.progress_manager;
            let playthrough = player.play_with(|moves| {
                if let Some(pm) = progress.as_mut() {
                    pm.update_moves(index, moves);
                }
            })?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_game(index, playthrough.summary.outcome);
            }

            if self.cli.verbose {
                final_boards.push(playthrough.game.board().to_string());
            }
            summaries.push(playthrough.summary);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        if self.cli.verbose {
            for (summary, board) in summaries.iter().zip(&final_boards) {
                Self::write_game(out, summary, board)?;
            }
        }

        let report: SimulationReport = summaries.iter().collect();
        writeln!(out, "{report}")?;
        Ok(report)
    }

    #[allow(clippy::print_stderr)]
    fn warn_goal_met(goal: i32) {
        eprintln!("Warning: goal {goal} is already met, every game completes before its first move");
    }

    fn write_game<W: Write>(out: &mut W, summary: &GameSummary, board: &str) -> Result<()> {
        writeln!(
            out,
            "seed {}: {} after {} moves, {} goals remaining",
            summary.seed, summary.outcome, summary.moves, summary.remaining_goals
        )?;
        writeln!(out, "{board}")?;
        Ok(())
    }
}
