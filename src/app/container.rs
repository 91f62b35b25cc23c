//! Dependency container wiring the value-table store to agents.

use std::{path::PathBuf, sync::Arc};

use super::config::AgentConfig;
use crate::{
    Result,
    adapters::JsonFileRepository,
    ports::QTableRepository,
    q_learning::QLearningAgent,
    tictactoe::Player,
};

/// Default location of the persisted table
pub const DEFAULT_TABLE_PATH: &str = "qtable.json";

/// Application with dependency injection.
///
/// Owns the Q-table repository and builds agents whose in-memory table
/// starts from whatever the repository holds.
///
/// # Examples
///
/// ```
/// use qttt::adapters::InMemoryRepository;
/// use qttt::app::{AgentConfig, App};
/// use qttt::tictactoe::Player;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .with_default_seed(42)
///     .build();
/// let agent = app.create_agent(Player::X, &AgentConfig::new())?;
/// assert!(agent.q_table().is_empty());
/// # Ok::<(), qttt::Error>(())
/// ```
pub struct App {
    repository: Arc<dyn QTableRepository + Send + Sync>,
    default_seed: Option<u64>,
}

impl App {
    /// Create an app storing its table as JSON at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            repository: Arc::new(JsonFileRepository::new(path)),
            default_seed: None,
        }
    }

    /// Create a builder for constructing app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Get the Q-table repository.
    pub fn repository(&self) -> Arc<dyn QTableRepository + Send + Sync> {
        Arc::clone(&self.repository)
    }

    /// Create an agent for `player`, seeded with the stored table.
    ///
    /// A missing or corrupt store yields an empty table. The seed comes from
    /// `config`, falling back to the container default.
    pub fn create_agent(&self, player: Player, config: &AgentConfig) -> Result<QLearningAgent> {
        let mut config = config.clone();
        if config.seed.is_none() {
            config.seed = self.default_seed;
        }
        let table = self.repository.load();
        Ok(QLearningAgent::new(player, &config)?.with_table(table))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_PATH)
    }
}

/// Builder for [`App`] with injected dependencies.
pub struct AppBuilder {
    repository: Option<Arc<dyn QTableRepository + Send + Sync>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            repository: None,
            default_seed: None,
        }
    }

    pub fn with_repository<R>(mut self, repository: R) -> Self
    where
        R: QTableRepository + Send + Sync + 'static,
    {
        self.repository = Some(Arc::new(repository));
        self
    }

    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app, falling back to the JSON store at
    /// [`DEFAULT_TABLE_PATH`].
    pub fn build(self) -> App {
        App {
            repository: self
                .repository
                .unwrap_or_else(|| Arc::new(JsonFileRepository::new(DEFAULT_TABLE_PATH))),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
