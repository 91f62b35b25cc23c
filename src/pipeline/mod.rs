//! Training and play pipelines
//!
//! - Self-play training of the agent against an [`Opponent`]
//! - Observers for progress and metrics
//! - A single interactive game against a human

pub mod observers;
pub mod session;
pub mod training;

pub use observers::{MetricsObserver, ProgressObserver, WindowSummary};
pub use session::InteractiveSession;
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::{Observer, Opponent};
