//! Default command - train, then play one game with the same agent

use anyhow::Result;

use super::{play, train::{self, TrainArgs}};
use crate::cli::output;

pub fn execute(args: TrainArgs) -> Result<()> {
    let (mut agent, result) = train::train(&args)?;
    output::print_training_result(&result);
    println!();
    play::play_with(&mut agent)
}
