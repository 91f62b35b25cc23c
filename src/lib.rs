//! Tabular Q-learning for Tic-Tac-Toe
//!
//! This crate provides:
//! - A Tic-Tac-Toe rules engine
//! - A Q-learning agent with ε-greedy action selection and one-step TD updates
//! - A persistent value-table store with an explicit merge-on-save policy
//! - A self-play training loop against a random opponent
//! - An interactive session for playing the trained agent

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod tictactoe;
pub mod types;

pub use error::{Error, Result};
pub use types::{QKey, StateKey};
