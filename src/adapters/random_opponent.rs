//! Uniformly random opponent used for training

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{Result, error::Error, ports::Opponent, tictactoe::Game};

/// Plays a uniformly random empty cell
pub struct RandomOpponent {
    name: String,
    rng: StdRng,
}

impl RandomOpponent {
    /// Create a new random opponent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Create a new random opponent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Opponent for RandomOpponent {
    fn select_move(&mut self, game: &Game) -> Result<usize> {
        game.available_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
