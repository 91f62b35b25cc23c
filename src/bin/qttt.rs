//! qttt CLI - tabular Q-learning for tic-tac-toe
//!
//! - `qttt train` learns by self-play against a random opponent
//! - `qttt play` plays one game against a human
//! - `qttt` with no subcommand trains, then plays

use anyhow::Result;
use clap::{Parser, Subcommand};
use qttt::cli::commands::{play, run, train};

#[derive(Parser)]
#[command(name = "qttt")]
#[command(version, about = "Tabular Q-learning tic-tac-toe agent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the agent against a random opponent
    Train(train::TrainArgs),

    /// Play one game against the trained agent
    Play(play::PlayArgs),

    /// Train, then play one game (the default)
    Run(train::TrainArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Train(args)) => train::execute(args),
        Some(Commands::Play(args)) => play::execute(args),
        Some(Commands::Run(args)) => run::execute(args),
        None => run::execute(train::TrainArgs::parse_from(["qttt-run"])),
    }
}
