//! Repository port for Q-table persistence.
//!
//! This module defines the trait boundary between the learning code and the
//! storage medium backing the value table.

use crate::{Result, q_learning::QTable};

/// Port for persisting and loading a Q-table.
///
/// Implementors supply the raw read ([`try_load`](Self::try_load)) and the
/// full overwrite ([`write`](Self::write)); the recovery and merge policy of
/// [`load`](Self::load) and [`save`](Self::save) is shared.
///
/// There is no locking: two processes saving to the same store can lose each
/// other's updates.
///
/// # Examples
///
/// ```
/// use qttt::adapters::InMemoryRepository;
/// use qttt::ports::QTableRepository;
/// use qttt::q_learning::QTable;
/// use qttt::types::StateKey;
///
/// let repo = InMemoryRepository::new();
/// let mut table = QTable::new();
/// table.set(StateKey::empty(), 4, 0.5);
///
/// repo.save(&table)?;
/// assert_eq!(repo.load().get(&StateKey::empty(), 4), 0.5);
/// # Ok::<(), qttt::Error>(())
/// ```
pub trait QTableRepository {
    /// Read the stored table.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing resource is absent, unreadable, or
    /// does not decode.
    fn try_load(&self) -> Result<QTable>;

    /// Replace the stored table with `table`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be encoded or written.
    fn write(&self, table: &QTable) -> Result<()>;

    /// Human-readable name of the backing resource, for log lines
    fn describe(&self) -> String;

    /// Read the stored table, recovering to an empty one.
    ///
    /// A missing or corrupt store is not fatal; the reason is logged at info
    /// level.
    fn load(&self) -> QTable {
        match self.try_load() {
            Ok(table) => {
                log::info!("loaded {} Q-values from {}", table.size(), self.describe());
                table
            }
            Err(err) => {
                log::info!("starting with an empty Q-table ({}: {err})", self.describe());
                QTable::new()
            }
        }
    }

    /// Merge `table` into whatever is stored and write the result back.
    ///
    /// Keys present in both take the value from `table`.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged table cannot be written.
    fn save(&self, table: &QTable) -> Result<()> {
        let persisted = self.try_load().unwrap_or_else(|err| {
            log::debug!("ignoring unreadable {} on save: {err}", self.describe());
            QTable::new()
        });
        let merged = QTable::merge(&persisted, table);
        self.write(&merged)?;
        log::debug!("saved {} Q-values to {}", merged.size(), self.describe());
        Ok(())
    }
}
