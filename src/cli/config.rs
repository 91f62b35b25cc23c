//! Shared command-line options

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Args;

use crate::{
    app::{AgentConfig, DEFAULT_TABLE_PATH},
    q_learning::{BootstrapScope, RewardSchedule},
    tictactoe::Player,
};

/// Options describing the agent and where its table lives
#[derive(Args, Debug, Clone)]
pub struct AgentArgs {
    /// Q-table file (created on first save)
    #[arg(long, short = 't', default_value = DEFAULT_TABLE_PATH)]
    pub table: PathBuf,

    /// Which mark the agent plays (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub player: String,

    /// Exploration rate ε
    #[arg(long, default_value_t = 0.1)]
    pub epsilon: f64,

    /// Learning rate α
    #[arg(long, default_value_t = 0.5)]
    pub alpha: f64,

    /// Discount factor γ
    #[arg(long, default_value_t = 0.9)]
    pub gamma: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reward schedule (win=1,draw=0.5,loss=-1)
    #[arg(long)]
    pub rewards: Option<String>,

    /// Next-state maximum over `all` board indices or only `legal` moves
    #[arg(long, default_value = "all")]
    pub bootstrap: String,
}

impl AgentArgs {
    pub fn agent_player(&self) -> Result<Player> {
        parse_player_token(&self.player, "--player")
    }

    pub fn to_agent_config(&self) -> Result<AgentConfig> {
        let rewards = match &self.rewards {
            Some(text) => text
                .parse::<RewardSchedule>()
                .context("invalid --rewards")?,
            None => RewardSchedule::default(),
        };
        let bootstrap: BootstrapScope = self.bootstrap.parse().context("invalid --bootstrap")?;

        let mut config = AgentConfig::new()
            .with_epsilon(self.epsilon)
            .with_learning_rate(self.alpha)
            .with_discount_factor(self.gamma)
            .with_bootstrap(bootstrap)
            .with_rewards(rewards);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" => Ok(Player::X),
        "o" | "second" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        agent: AgentArgs,
    }

    #[test]
    fn test_defaults_match_agent_config() {
        let args = Harness::parse_from(["qttt"]).agent;
        assert_eq!(args.table, PathBuf::from("qtable.json"));
        assert_eq!(args.agent_player().unwrap(), Player::X);
        assert_eq!(args.to_agent_config().unwrap(), AgentConfig::new());
    }

    #[test]
    fn test_flags_are_applied() {
        let args = Harness::parse_from([
            "qttt",
            "--player",
            "o",
            "--epsilon",
            "0",
            "--seed",
            "5",
            "--rewards",
            "win=2",
            "--bootstrap",
            "legal",
        ])
        .agent;
        let config = args.to_agent_config().unwrap();
        assert_eq!(args.agent_player().unwrap(), Player::O);
        assert_eq!(config.epsilon, 0.0);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.rewards.win, 2.0);
        assert_eq!(config.bootstrap, BootstrapScope::LegalActions);
    }

    #[test]
    fn test_bad_values_are_reported() {
        let args = Harness::parse_from(["qttt", "--gamma", "1.5"]).agent;
        assert!(args.to_agent_config().is_err());
        let args = Harness::parse_from(["qttt", "--player", "z"]).agent;
        assert!(args.agent_player().is_err());
    }
}
