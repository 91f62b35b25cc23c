//! In-memory Q-table repository for testing.
//!
//! Holds the encoded document in memory, exercising the same codec and merge
//! policy as the file store without touching the file system.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    Result,
    error::Error,
    ports::QTableRepository,
    q_learning::{
        QTable,
        serialization::{decode_table, encode_table},
    },
};

#[derive(Debug, Default)]
struct Slot {
    contents: Option<String>,
    writes: usize,
}

/// In-memory repository for testing.
///
/// Clones share the same storage.
///
/// # Examples
///
/// ```
/// use qttt::adapters::InMemoryRepository;
/// use qttt::ports::QTableRepository;
///
/// // A corrupt document recovers to an empty table.
/// let repo = InMemoryRepository::with_contents("{ not json");
/// assert!(repo.load().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<Slot>>,
}

impl InMemoryRepository {
    /// Create an empty repository (as if the file did not exist).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding raw document text, valid or not.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let repo = Self::new();
        repo.slot().contents = Some(contents.into());
        repo
    }

    /// The stored document text, if any.
    pub fn contents(&self) -> Option<String> {
        self.slot().contents.clone()
    }

    /// Number of completed writes.
    pub fn write_count(&self) -> usize {
        self.slot().writes
    }

    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.storage
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl QTableRepository for InMemoryRepository {
    fn try_load(&self) -> Result<QTable> {
        let contents = self.slot().contents.clone();
        match contents {
            Some(text) => decode_table(&text),
            None => Err(Error::Io {
                operation: "read in-memory Q-table".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "nothing stored"),
            }),
        }
    }

    fn write(&self, table: &QTable) -> Result<()> {
        let text = encode_table(table)?;
        let mut slot = self.slot();
        slot.contents = Some(text);
        slot.writes += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory store".to_string()
    }
}
