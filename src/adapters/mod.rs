//! Adapters implementing domain ports.
//!
//! Infrastructure implementations of the traits in [`crate::ports`]: value
//! table stores and the opponents an agent can face.

pub mod human_opponent;
pub mod in_memory_repository;
pub mod json_repository;
pub mod random_opponent;

pub use human_opponent::HumanOpponent;
pub use in_memory_repository::InMemoryRepository;
pub use json_repository::JsonFileRepository;
pub use random_opponent::RandomOpponent;
