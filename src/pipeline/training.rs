//! Self-play training loop

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::{Observer, Opponent, QTableRepository},
    q_learning::QLearningAgent,
    tictactoe::{Game, GameOutcome, Player},
    types::StateKey,
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training episodes
    pub num_games: usize,

    /// When the opponent's move ends the episode, also update the agent's
    /// last transition with the loss or draw reward
    pub credit_opponent_finish: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_games: 1000,
            credit_opponent_finish: false,
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total games played
    pub total_games: usize,

    /// Number of wins
    pub wins: usize,

    /// Number of draws
    pub draws: usize,

    /// Number of losses
    pub losses: usize,

    /// Win rate
    pub win_rate: f64,

    /// Draw rate
    pub draw_rate: f64,

    /// Loss rate
    pub loss_rate: f64,

    /// Q-values held in memory after the last episode
    pub q_table_size: usize,
}

impl TrainingResult {
    /// Create a new training result
    pub fn new(wins: usize, draws: usize, losses: usize, q_table_size: usize) -> Self {
        let total_games = wins + draws + losses;
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
            q_table_size,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Training pipeline: episodes of the agent against one opponent.
///
/// Every episode starts on an empty board with the agent to move. The agent
/// learns only from the transition that ends the game, and the in-memory
/// table is saved to the repository after each episode.
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run all configured episodes
    pub fn run(
        &mut self,
        agent: &mut QLearningAgent,
        opponent: &mut dyn Opponent,
        repository: &dyn QTableRepository,
    ) -> Result<TrainingResult> {
        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;

        log::info!(
            "training agent {} against {} for {} episodes",
            agent.player(),
            opponent.name(),
            self.config.num_games
        );

        for observer in &mut self.observers {
            observer.on_training_start(self.config.num_games)?;
        }

        for game_num in 0..self.config.num_games {
            let outcome = self.play_episode(agent, opponent)?;
            repository.save(agent.q_table())?;

            match outcome {
                GameOutcome::Win(winner) if winner == agent.player() => wins += 1,
                GameOutcome::Win(_) => losses += 1,
                GameOutcome::Draw => draws += 1,
            }
            log::debug!("episode {game_num}: {outcome:?}");

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        let result = TrainingResult::new(wins, draws, losses, agent.q_table().size());
        log::info!(
            "training finished: {} wins, {} draws, {} losses; {} Q-values",
            result.wins,
            result.draws,
            result.losses,
            result.q_table_size
        );
        Ok(result)
    }

    /// Play one episode, applying the terminal update, and return its outcome
    pub fn play_episode(
        &self,
        agent: &mut QLearningAgent,
        opponent: &mut dyn Opponent,
    ) -> Result<GameOutcome> {
        let mut game = Game::new();
        let agent_player = agent.player();
        let mut to_move = agent_player;
        let mut last_transition: Option<(StateKey, usize)> = None;

        while !game.is_over() {
            if to_move == agent_player {
                let state = game.state_key();
                let action = agent.choose_action(&game.available_moves(), &state)?;
                apply_move(&mut game, action, agent_player)?;

                if let Some(outcome) = game.outcome() {
                    let reward = agent.reward_for(outcome);
                    agent.update(&state, &game.state_key(), action, reward)?;
                } else {
                    last_transition = Some((state, action));
                }
            } else {
                let action = opponent.select_move(&game)?;
                apply_move(&mut game, action, to_move)?;

                if let Some(outcome) = game.outcome() {
                    if self.config.credit_opponent_finish {
                        if let Some((state, action)) = last_transition.take() {
                            let reward = agent.reward_for(outcome);
                            agent.update(&state, &game.state_key(), action, reward)?;
                        }
                    }
                }
            }
            to_move = to_move.opponent();
        }

        game.outcome().ok_or(Error::NoValidMoves)
    }
}

fn apply_move(game: &mut Game, position: usize, player: Player) -> Result<()> {
    if game.make_move(position, player) {
        Ok(())
    } else {
        Err(Error::RejectedMove { position })
    }
}
