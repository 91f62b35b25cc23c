//! Terminal reward schedule

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::tictactoe::{GameOutcome, Player};

/// Reward assigned to the transition that ends an episode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardSchedule {
    pub win: f64,
    pub draw: f64,
    pub loss: f64,
}

impl Default for RewardSchedule {
    fn default() -> Self {
        RewardSchedule {
            win: 1.0,
            draw: 0.5,
            loss: -1.0,
        }
    }
}

impl RewardSchedule {
    /// Reward for `outcome` seen from `role`'s side of the board
    pub fn reward_for(&self, outcome: GameOutcome, role: Player) -> f64 {
        match outcome {
            GameOutcome::Win(winner) if winner == role => self.win,
            GameOutcome::Win(_) => self.loss,
            GameOutcome::Draw => self.draw,
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.win.is_finite() && self.draw.is_finite() && self.loss.is_finite()
    }
}

/// Parses `win=1,draw=0.5,loss=-1`. Keys may be given in any order and
/// omitted keys keep their default value.
impl FromStr for RewardSchedule {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: String| crate::Error::InvalidConfiguration { message };
        let mut schedule = RewardSchedule::default();

        for part in s.split(',') {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                continue;
            }
            let (key, value_str) = trimmed.split_once('=').ok_or_else(|| {
                invalid(format!(
                    "invalid reward entry '{trimmed}', expected key=value"
                ))
            })?;
            let value: f64 = value_str
                .trim()
                .parse()
                .map_err(|_| {
                    invalid(format!(
                        "invalid numeric reward '{value_str}' in '{trimmed}'"
                    ))
                })?;
            match key.trim().to_ascii_lowercase().as_str() {
                "win" => schedule.win = value,
                "draw" => schedule.draw = value,
                "loss" => schedule.loss = value,
                other => {
                    return Err(invalid(format!(
                        "unknown reward key '{other}', expected win, draw, or loss"
                    )));
                }
            }
        }

        Ok(schedule)
    }
}

impl fmt::Display for RewardSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "win={},draw={},loss={}", self.win, self.draw, self.loss)
    }
}
