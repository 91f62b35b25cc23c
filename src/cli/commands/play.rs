//! Play command - one game against the trained agent

use std::io;

use anyhow::Result;
use clap::Parser;

use crate::{
    Error,
    adapters::HumanOpponent,
    app::App,
    cli::config::AgentArgs,
    pipeline::InteractiveSession,
    q_learning::QLearningAgent,
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Play one game against the trained agent")]
pub struct PlayArgs {
    #[command(flatten)]
    pub agent: AgentArgs,
}

/// Play one game on stdin/stdout. Closing the input ends the game quietly.
pub fn play_with(agent: &mut QLearningAgent) -> Result<()> {
    let stdin = io::stdin();
    let mut human = HumanOpponent::new(stdin.lock(), io::stdout());
    let mut session = InteractiveSession::new(io::stdout());

    match session.play(agent, &mut human) {
        Ok(_) => Ok(()),
        Err(Error::InputClosed) => {
            println!();
            log::info!("input closed, leaving the game");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let player = args.agent.agent_player()?;
    let config = args.agent.to_agent_config()?;
    let mut agent = App::new(&args.agent.table).create_agent(player, &config)?;
    play_with(&mut agent)
}
