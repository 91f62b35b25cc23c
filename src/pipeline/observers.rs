//! Observers for training pipelines

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{GameOutcome, Player},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    wins: usize,
    draws: usize,
    losses: usize,
}

impl Tally {
    fn record(&mut self, outcome: GameOutcome, agent_player: Player) {
        match outcome {
            GameOutcome::Win(winner) if winner == agent_player => self.wins += 1,
            GameOutcome::Win(_) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    fn total(&self) -> usize {
        self.wins + self.draws + self.losses
    }
}

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    agent_player: Player,
    progress_bar: Option<ProgressBar>,
    tally: Tally,
}

impl ProgressObserver {
    /// Create a new progress observer counting results for `agent_player`
    pub fn new(agent_player: Player) -> Self {
        Self {
            agent_player,
            progress_bar: None,
            tally: Tally::default(),
        }
    }

    fn message(&self) -> String {
        format!(
            "{} D:{} L:{}",
            self.tally.wins, self.tally.draws, self.tally.losses
        )
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (W:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        self.tally.record(outcome, self.agent_player);

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Logs win/draw/loss rates over consecutive windows of episodes.
pub struct MetricsObserver {
    agent_player: Player,
    window: usize,
    current: Tally,
    last_game: Option<usize>,
    history: Vec<WindowSummary>,
}

/// Outcome rates for one window of episodes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSummary {
    /// Index of the last episode in the window
    pub last_game: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
}

impl MetricsObserver {
    /// Report every `window` episodes (a zero window is treated as one)
    pub fn new(agent_player: Player, window: usize) -> Self {
        Self {
            agent_player,
            window: window.max(1),
            current: Tally::default(),
            last_game: None,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[WindowSummary] {
        &self.history
    }

    fn close_window(&mut self, last_game: usize) {
        let total = self.current.total();
        if total == 0 {
            return;
        }
        let total_f = total as f64;
        let summary = WindowSummary {
            last_game,
            win_rate: self.current.wins as f64 / total_f,
            draw_rate: self.current.draws as f64 / total_f,
            loss_rate: self.current.losses as f64 / total_f,
        };
        log::info!(
            "episodes {:>6}-{:<6} win {:>5.1}%  draw {:>5.1}%  loss {:>5.1}%",
            last_game + 1 - total,
            last_game,
            summary.win_rate * 100.0,
            summary.draw_rate * 100.0,
            summary.loss_rate * 100.0
        );
        self.history.push(summary);
        self.current = Tally::default();
    }
}

impl Observer for MetricsObserver {
    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        self.current.record(outcome, self.agent_player);
        self.last_game = Some(game_num);
        if self.current.total() == self.window {
            self.close_window(game_num);
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(last_game) = self.last_game {
            self.close_window(last_game);
        }
        Ok(())
    }
}
