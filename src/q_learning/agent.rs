//! Q-learning agent
//!
//! ε-greedy action selection over a [`QTable`] and the one-step
//! temporal-difference update.

use std::{fmt, str::FromStr};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    app::AgentConfig,
    error::{Error, Result},
    q_learning::{q_table::QTable, reward::RewardSchedule},
    tictactoe::{GameOutcome, Player},
    types::{QKey, StateKey},
};

/// Action set the next-state maximum `max_a' Q(s', a')` ranges over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapScope {
    /// Every board index 0-8, occupied or not. Unseen entries count as zero,
    /// so the maximum is never negative.
    #[default]
    AllActions,
    /// Only the moves still legal in the next state; zero when it is terminal.
    LegalActions,
}

impl BootstrapScope {
    fn actions(self, next_state: &StateKey) -> Result<Vec<usize>> {
        match self {
            BootstrapScope::AllActions => Ok((0..9).collect()),
            BootstrapScope::LegalActions => Ok(next_state.to_board()?.legal_moves()),
        }
    }
}

impl FromStr for BootstrapScope {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "all-actions" => Ok(BootstrapScope::AllActions),
            "legal" | "legal-actions" => Ok(BootstrapScope::LegalActions),
            other => Err(Error::InvalidConfiguration {
                message: format!("invalid bootstrap scope '{other}', expected 'all' or 'legal'"),
            }),
        }
    }
}

impl fmt::Display for BootstrapScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapScope::AllActions => f.write_str("all"),
            BootstrapScope::LegalActions => f.write_str("legal"),
        }
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Tabular Q-learning agent playing one mark.
///
/// The agent owns its value table in memory; persisting it is the job of a
/// [`crate::ports::QTableRepository`].
#[derive(Debug, Clone)]
pub struct QLearningAgent {
    player: Player,
    q_table: QTable,
    epsilon: f64,
    learning_rate: f64,
    discount_factor: f64,
    bootstrap: BootstrapScope,
    rewards: RewardSchedule,
    rng: StdRng,
}

impl QLearningAgent {
    /// Create an agent with an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the configuration does not
    /// validate.
    pub fn new(player: Player, config: &AgentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            player,
            q_table: QTable::new(),
            epsilon: config.epsilon,
            learning_rate: config.learning_rate,
            discount_factor: config.discount_factor,
            bootstrap: config.bootstrap,
            rewards: config.rewards,
            rng: build_rng(config.seed),
        })
    }

    /// Replace the in-memory table, e.g. with one loaded from storage
    pub fn with_table(mut self, q_table: QTable) -> Self {
        self.q_table = q_table;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// ε-greedy action selection.
    ///
    /// With probability ε a legal move is drawn uniformly. Otherwise the
    /// legal moves with the highest Q-value at `state` are collected and,
    /// if several tie, one of them is drawn uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] if `legal_moves` is empty.
    pub fn choose_action(&mut self, legal_moves: &[usize], state: &StateKey) -> Result<usize> {
        if legal_moves.is_empty() {
            return Err(Error::NoValidMoves);
        }

        if self.rng.random::<f64>() < self.epsilon {
            return legal_moves
                .choose(&mut self.rng)
                .copied()
                .ok_or(Error::NoValidMoves);
        }

        let best = self.q_table.best_actions(state, legal_moves);
        match best.as_slice() {
            [only] => Ok(*only),
            tied => tied.choose(&mut self.rng).copied().ok_or(Error::NoValidMoves),
        }
    }

    /// One-step Q-learning update
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// Returns the new value of Q(s,a).
    ///
    /// # Errors
    ///
    /// Returns an error if `action` is not a board index, or if the
    /// bootstrap scope needs the legal moves of a `next_state` that does not
    /// decode to a board.
    pub fn update(
        &mut self,
        state: &StateKey,
        next_state: &StateKey,
        action: usize,
        reward: f64,
    ) -> Result<f64> {
        let key = QKey::new(state.clone(), action)?;
        let current_q = self.q_table.get(state, action);
        let next_actions = self.bootstrap.actions(next_state)?;
        let max_next_q = self.q_table.max_q(next_state, &next_actions);

        let td_target = reward + self.discount_factor * max_next_q;
        let new_q = current_q + self.learning_rate * (td_target - current_q);
        self.q_table.insert(key, new_q);
        Ok(new_q)
    }

    /// Terminal reward for `outcome` from this agent's side
    pub fn reward_for(&self, outcome: GameOutcome) -> f64 {
        self.rewards.reward_for(outcome, self.player)
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    pub fn into_q_table(self) -> QTable {
        self.q_table
    }
}
