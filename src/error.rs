//! Error types for the qttt crate

use thiserror::Error;

/// Main error type for the qttt crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board key has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must differ by at most one)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("action {action} is not a board index (must be 0-8)")]
    InvalidAction { action: usize },

    #[error("move at position {position} was rejected by the game engine")]
    RejectedMove { position: usize },

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("unsupported Q-table format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("input closed before a move was entered")]
    InputClosed,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
