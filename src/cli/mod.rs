//! Command-line interface: training, interactive play, and the default
//! train-then-play run.

pub mod commands;
pub mod config;
pub mod output;
