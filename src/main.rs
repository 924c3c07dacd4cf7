//! CLI entry point for simulating quadmatch games

use clap::Parser;
use quadmatch::io::cli::{Cli, SimulationRunner};

fn main() -> quadmatch::Result<()> {
    let cli = Cli::parse();
    let mut runner = SimulationRunner::new(cli);
    runner.run()?;
    Ok(())
}
