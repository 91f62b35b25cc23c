//! Newtype wrappers for value-table keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tictactoe::BoardState;

/// Fixed-length key of a board position.
///
/// Nine characters, one per cell, left-to-right and top-to-bottom:
/// `.` for an empty cell, `X` or `O` for a mark. Keys are always validated
/// on construction from external text, so every `StateKey` in a table
/// decodes back to a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateKey(String);

impl StateKey {
    /// Parse and validate a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not nine valid cells or if the mark
    /// counts could not arise from alternating play.
    pub fn parse(key: &str) -> Result<Self, crate::Error> {
        BoardState::from_key(key).map(|board| board.key())
    }

    /// Key of the empty board.
    pub fn empty() -> Self {
        BoardState::new().key()
    }

    /// Build a key from an already-encoded board, skipping validation.
    pub(crate) fn from_encoded(encoded: String) -> Self {
        StateKey(encoded)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Decode the key back into a board.
    pub fn to_board(&self) -> Result<BoardState, crate::Error> {
        BoardState::from_key(&self.0)
    }
}

impl TryFrom<String> for StateKey {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StateKey::parse(&value)
    }
}

impl From<StateKey> for String {
    fn from(key: StateKey) -> Self {
        key.0
    }
}

impl From<&BoardState> for StateKey {
    fn from(board: &BoardState) -> Self {
        board.key()
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Composite value-table key: a board position and the cell played from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QKey {
    pub state: StateKey,
    pub action: usize,
}

impl QKey {
    /// Create a key, validating the action index.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAction`] if `action` is not in 0..=8.
    pub fn new(state: StateKey, action: usize) -> Result<Self, crate::Error> {
        if action < 9 {
            Ok(QKey { state, action })
        } else {
            Err(crate::Error::InvalidAction { action })
        }
    }
}

impl fmt::Display for QKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.state, self.action)
    }
}
