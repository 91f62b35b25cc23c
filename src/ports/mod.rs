//! Ports (trait boundaries) for external dependencies.
//!
//! These traits are owned by the learning core and implemented by adapters:
//! storage for the value table, the player across the board, and training
//! observers.

pub mod observer;
pub mod opponent;
pub mod repository;

pub use observer::Observer;
pub use opponent::Opponent;
pub use repository::QTableRepository;
