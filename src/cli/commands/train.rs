//! Train command - self-play against a random opponent

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::RandomOpponent,
    app::App,
    cli::{config::AgentArgs, output},
    pipeline::{MetricsObserver, ProgressObserver, TrainingConfig, TrainingPipeline, TrainingResult},
    q_learning::QLearningAgent,
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Train the agent against a random opponent", allow_negative_numbers = true)]
pub struct TrainArgs {
    #[command(flatten)]
    pub agent: AgentArgs,

    /// Number of training episodes
    #[arg(long, short = 'e', default_value_t = 1000)]
    pub episodes: usize,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// Log outcome rates every N episodes
    #[arg(long)]
    pub metrics_window: Option<usize>,

    /// Also learn from episodes the opponent finishes (loss or draw)
    #[arg(long, default_value_t = false)]
    pub credit_opponent_finish: bool,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

/// Train and return the agent together with the run's statistics
pub fn train(args: &TrainArgs) -> Result<(QLearningAgent, TrainingResult)> {
    let player = args.agent.agent_player()?;
    let config = args.agent.to_agent_config()?;

    let app = App::new(&args.agent.table);
    let mut agent = app.create_agent(player, &config)?;
    let mut opponent = match config.seed {
        Some(seed) => RandomOpponent::with_seed("Random".to_string(), seed.wrapping_add(1)),
        None => RandomOpponent::new("Random".to_string()),
    };

    let mut pipeline = TrainingPipeline::new(TrainingConfig {
        num_games: args.episodes,
        credit_opponent_finish: args.credit_opponent_finish,
    });
    if !args.no_progress {
        pipeline = pipeline.with_observer(Box::new(ProgressObserver::new(player)));
    }
    if let Some(window) = args.metrics_window {
        pipeline = pipeline.with_observer(Box::new(MetricsObserver::new(player, window)));
    }

    let repository = app.repository();
    let result = pipeline
        .run(&mut agent, &mut opponent, &*repository)
        .with_context(|| format!("training with table {}", args.agent.table.display()))?;

    if let Some(path) = &args.summary {
        result
            .save(path)
            .with_context(|| format!("writing summary to {}", path.display()))?;
    }

    Ok((agent, result))
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let (_, result) = train(&args)?;
    output::print_training_result(&result);
    Ok(())
}
