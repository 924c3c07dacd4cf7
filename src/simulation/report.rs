//! Per-game summaries and the aggregated simulation report

use std::fmt;

/// How a simulated game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// Goal counter reached zero
    Completed,
    /// No column could take another tile
    Stalled,
    /// Move cap reached first
    MoveCapReached,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Completed => "completed",
            Self::Stalled => "stalled",
            Self::MoveCapReached => "move cap",
        };
        f.write_str(label)
    }
}

/// Statistics collected while playing one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    /// Seed the game was generated from
    pub seed: u64,
    /// How the game ended
    pub outcome: GameOutcome,
    /// Tiles committed to a column
    pub moves: usize,
    /// Match, collapse and drop cycles across all turns
    pub cycles: usize,
    /// Tiles re-normalized or destroyed across all turns
    pub tiles_resolved: usize,
    /// Most cycles in a single turn
    pub longest_cascade: usize,
    /// Goal counter when the game ended
    pub remaining_goals: i32,
}

/// Totals over a batch of simulated games
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationReport {
    /// Games played
    pub games: usize,
    /// Games that reached their goal
    pub completions: usize,
    /// Games that ended with a full board
    pub stalls: usize,
    /// Tiles committed over all games
    pub moves: usize,
    /// Cycles over all games
    pub cycles: usize,
    /// Tiles resolved over all games
    pub tiles_resolved: usize,
    /// Most cycles in a single turn of any game
    pub longest_cascade: usize,
}

impl SimulationReport {
    /// Empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one game into the totals
    pub fn record(&mut self, summary: &GameSummary) {
        self.games += 1;
        match summary.outcome {
            GameOutcome::Completed => self.completions += 1,
            GameOutcome::Stalled => self.stalls += 1,
            GameOutcome::MoveCapReached => {}
        }
        self.moves += summary.moves;
        self.cycles += summary.cycles;
        self.tiles_resolved += summary.tiles_resolved;
        self.longest_cascade = self.longest_cascade.max(summary.longest_cascade);
    }

    /// Games that hit the move cap
    pub const fn capped(&self) -> usize {
        self.games.saturating_sub(self.completions + self.stalls)
    }

    /// Fraction of games that reached their goal
    pub const fn completion_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.completions as f64 / self.games as f64
        }
    }
}

impl<'a> FromIterator<&'a GameSummary> for SimulationReport {
    fn from_iter<I: IntoIterator<Item = &'a GameSummary>>(iter: I) -> Self {
        let mut report = Self::new();
        for summary in iter {
            report.record(summary);
        }
        report
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "games:           {}", self.games)?;
        writeln!(
            f,
            "completed:       {} ({:.1}%)",
            self.completions,
            self.completion_rate() * 100.0
        )?;
        writeln!(f, "stalled:         {}", self.stalls)?;
        writeln!(f, "move cap:        {}", self.capped())?;
        writeln!(f, "moves:           {}", self.moves)?;
        writeln!(f, "cycles:          {}", self.cycles)?;
        writeln!(f, "tiles resolved:  {}", self.tiles_resolved)?;
        write!(f, "longest cascade: {}", self.longest_cascade)
    }
}
