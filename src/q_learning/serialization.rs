//! Versioned JSON document for persisted Q-tables.
//!
//! Each entry carries its composite key as separate `state` and `action`
//! fields, so decoding never has to split or evaluate a key string:
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": [
//!     { "state": "X...O....", "action": 8, "value": 0.5 }
//!   ]
//! }
//! ```

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    q_learning::q_table::QTable,
    types::{QKey, StateKey},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedEntry {
    pub state: StateKey,
    pub action: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedQTable {
    pub version: u32,
    pub entries: Vec<SavedEntry>,
}

impl SavedQTable {
    pub const VERSION: u32 = 1;

    /// Snapshot a table, entries sorted by (state, action)
    pub fn from_table(table: &QTable) -> Self {
        let mut entries: Vec<SavedEntry> = table
            .iter()
            .map(|(key, &value)| SavedEntry {
                state: key.state.clone(),
                action: key.action,
                value,
            })
            .collect();
        entries.sort_by(|a, b| (&a.state, a.action).cmp(&(&b.state, b.action)));

        Self {
            version: Self::VERSION,
            entries,
        }
    }

    /// Rebuild the table.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown format version or an action index
    /// outside 0-8.
    pub fn to_table(&self) -> Result<QTable> {
        if self.version != Self::VERSION {
            return Err(Error::UnsupportedVersion {
                found: self.version,
                expected: Self::VERSION,
            });
        }

        self.entries
            .iter()
            .map(|entry| {
                QKey::new(entry.state.clone(), entry.action).map(|key| (key, entry.value))
            })
            .collect()
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Decode a whole document straight into a table
pub fn decode_table(text: &str) -> Result<QTable> {
    SavedQTable::from_json(text)?.to_table()
}

/// Encode a table as a pretty-printed document
pub fn encode_table(table: &QTable) -> Result<String> {
    SavedQTable::from_table(table).to_json()
}
