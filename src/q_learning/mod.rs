//! Tabular Q-learning
//!
//! The agent keeps a table of action values Q(s, a) keyed by board state and
//! cell index, picks moves ε-greedily, and moves Q(s, a) toward the one-step
//! target `r + γ max_a' Q(s', a')` after the transition that ends an episode.
//!
//! ## Usage Example
//!
//! ```
//! use qttt::{app::AgentConfig, q_learning::QLearningAgent, tictactoe::{Game, Player}};
//!
//! let mut agent = QLearningAgent::new(Player::X, &AgentConfig::new().with_seed(1))?;
//! let mut game = Game::new();
//! let state = game.state_key();
//! let action = agent.choose_action(&game.available_moves(), &state)?;
//! assert!(game.make_move(action, Player::X));
//! # Ok::<(), qttt::Error>(())
//! ```

pub mod agent;
pub mod q_table;
pub mod reward;
pub mod serialization;

// Public re-exports
pub use agent::{BootstrapScope, QLearningAgent};
pub use q_table::{DEFAULT_Q_VALUE, QTable};
pub use reward::RewardSchedule;
pub use serialization::{SavedEntry, SavedQTable};
