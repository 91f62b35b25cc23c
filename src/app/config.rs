//! Configuration types for agent creation.

use crate::q_learning::{BootstrapScope, RewardSchedule};

/// Configuration for creating a Q-learning agent.
///
/// Parameters are fixed for the agent's lifetime; there is no decay
/// schedule.
///
/// # Examples
///
/// ```
/// use qttt::app::AgentConfig;
/// use qttt::q_learning::BootstrapScope;
///
/// let config = AgentConfig::new()
///     .with_epsilon(0.2)
///     .with_seed(42)
///     .with_bootstrap(BootstrapScope::LegalActions);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    /// Exploration rate ε
    pub epsilon: f64,
    /// Learning rate α
    pub learning_rate: f64,
    /// Discount factor γ
    pub discount_factor: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Action set the next-state maximum ranges over
    pub bootstrap: BootstrapScope,
    /// Terminal rewards
    pub rewards: RewardSchedule,
}

impl AgentConfig {
    /// Create a configuration with the default parameters
    /// (ε = 0.1, α = 0.5, γ = 0.9, no seed).
    pub fn new() -> Self {
        Self {
            epsilon: 0.1,
            learning_rate: 0.5,
            discount_factor: 0.9,
            seed: None,
            bootstrap: BootstrapScope::default(),
            rewards: RewardSchedule::default(),
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_bootstrap(mut self, bootstrap: BootstrapScope) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    pub fn with_rewards(mut self, rewards: RewardSchedule) -> Self {
        self.rewards = rewards;
        self
    }

    /// Check that ε, α and γ lie in [0, 1] and that rewards are finite.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] naming the first bad
    /// parameter.
    pub fn validate(&self) -> crate::Result<()> {
        for (name, value) in [
            ("epsilon", self.epsilon),
            ("learning rate", self.learning_rate),
            ("discount factor", self.discount_factor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(crate::Error::InvalidConfiguration {
                    message: format!("{name} must be within [0, 1], got {value}"),
                });
            }
        }
        if !self.rewards.is_finite() {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("rewards must be finite, got {}", self.rewards),
            });
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}
