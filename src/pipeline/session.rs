//! Interactive game between a trained agent and a human

use std::io::Write;

use crate::{
    Error, Result,
    ports::Opponent,
    q_learning::QLearningAgent,
    tictactoe::{Game, GameOutcome},
};

/// Plays one game with the agent moving first, as in a training episode.
/// The agent's table is read but never updated.
pub struct InteractiveSession<W> {
    output: W,
}

impl<W: Write> InteractiveSession<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play a full game and announce the result
    pub fn play(
        &mut self,
        agent: &mut QLearningAgent,
        human: &mut dyn Opponent,
    ) -> Result<GameOutcome> {
        let mut game = Game::new();
        let agent_player = agent.player();
        let mut to_move = agent_player;

        while !game.is_over() {
            let position = if to_move == agent_player {
                let action = agent.choose_action(&game.available_moves(), &game.state_key())?;
                writeln!(self.output, "AI plays: {action}")?;
                action
            } else {
                human.select_move(&game)?
            };

            if !game.make_move(position, to_move) {
                return Err(Error::RejectedMove { position });
            }
            to_move = to_move.opponent();
        }

        let outcome = game.outcome().ok_or(Error::NoValidMoves)?;
        writeln!(self.output, "{}", game.board())?;
        writeln!(self.output, "Game over!")?;
        match outcome {
            GameOutcome::Win(winner) => writeln!(self.output, "Winner: {winner}")?,
            GameOutcome::Draw => writeln!(self.output, "Draw!")?,
        }
        Ok(outcome)
    }
}
