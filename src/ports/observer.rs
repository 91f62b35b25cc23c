//! Observer port - abstraction for training observation
//!
//! Observers receive training events so progress reporting and metrics stay
//! out of the training loop itself.

use crate::{Result, tictactoe::GameOutcome};

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// 1. `on_training_start(total_games)` - once at the beginning
/// 2. `on_game_end(game_num, outcome)` - after every episode
/// 3. `on_training_end()` - once at the end
///
/// # Examples
///
/// ```
/// use qttt::{ports::Observer, tictactoe::GameOutcome};
///
/// struct CountingObserver {
///     games: usize,
/// }
///
/// impl Observer for CountingObserver {
///     fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> qttt::Result<()> {
///         self.games += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer {
    /// Called when training starts, with the number of episodes planned.
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each episode has finished and been saved.
    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
