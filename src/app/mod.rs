//! Application layer: agent configuration and the dependency container.
//!
//! # Usage
//!
//! ```no_run
//! use qttt::app::{AgentConfig, App};
//! use qttt::tictactoe::Player;
//!
//! let app = App::new("qtable.json");
//! let agent = app.create_agent(Player::X, &AgentConfig::new().with_seed(7))?;
//! # Ok::<(), qttt::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::AgentConfig;
pub use container::{App, AppBuilder, DEFAULT_TABLE_PATH};
