//! Per-game progress tracking with automatic batching for large runs

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use crate::simulation::report::GameOutcome;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for a batch of simulated games
///
/// Shows one bar per game for small batches and adds a batch bar once the
/// number of games exceeds what fits on screen; the per-game bars then show a
/// rolling window of the most recent games.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    game_bars: Vec<ProgressBar>,
    /// Stores (`label`, `moves`, `max_moves`) for rolling window display
    game_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static GAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{prefix}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Games: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            game_bars: Vec::new(),
            game_states: Vec::new(),
        }
    }

    /// Create bars for a run of `game_count` games
    pub fn initialize(&mut self, game_count: usize) {
        if game_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(game_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..game_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(0);
            pb.set_style(GAME_STYLE.clone());
            self.game_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Configure the bar for a new game
    pub fn start_game(&mut self, index: usize, seed: u64, max_moves: usize) {
        if index >= self.game_states.len() {
            self.game_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.game_states.get_mut(index) {
            *state = (format!("seed {seed}"), 0, max_moves);
        }
        self.update_bars();
    }

    /// Report the number of committed tiles
    pub fn update_moves(&mut self, index: usize, moves: usize) {
        if let Some(state) = self.game_states.get_mut(index) {
            state.1 = moves;
        }
        self.update_bars();
    }

    /// Mark a game as finished and advance the batch bar
    pub fn complete_game(&mut self, index: usize, outcome: GameOutcome) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.game_states.get_mut(index) {
            let mark = if outcome == GameOutcome::Completed {
                "✓"
            } else {
                "✗"
            };
            state.0 = format!("{mark} {} ({outcome})", state.0);
            state.2 = state.1;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All games played");
        }
        let _ = self.multi_progress.clear();
    }

    /// Number of games that have been started
    pub fn started_games(&self) -> usize {
        self.game_states
            .iter()
            .filter(|(label, _, _)| !label.is_empty())
            .count()
    }

    /// Update all bars to show the last N started games
    fn update_bars(&self) {
        let active: Vec<_> = self
            .game_states
            .iter()
            .filter(|(label, _, _)| !label.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar, (label, moves, max)) in self.game_bars.iter().zip(visible) {
            bar.set_length(*max as u64);
            bar.set_position(*moves as u64);
            let max_width = max.to_string().len();
            bar.set_message(format!("{moves:>max_width$}/{max}"));
            bar.set_prefix(label.clone());
        }

        for bar in self.game_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
