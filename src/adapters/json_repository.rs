//! JSON file implementation of the Q-table repository.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{
    Result,
    error::Error,
    ports::QTableRepository,
    q_learning::{QTable, SavedQTable},
};

/// File-backed Q-table store.
///
/// The table lives in a single pretty-printed JSON document (see
/// [`crate::q_learning::serialization`]). Writes go to a temporary file in
/// the same directory that is then renamed over the target, so readers see
/// either the old or the new table, never a partial one. An existing file's
/// permissions carry over to its replacement; a new file gets the
/// temporary file's owner-only mode.
///
/// # Examples
///
/// ```no_run
/// use qttt::adapters::JsonFileRepository;
/// use qttt::ports::QTableRepository;
///
/// let repo = JsonFileRepository::new("qtable.json");
/// let table = repo.load(); // empty if the file is missing or corrupt
/// repo.save(&table)?;
/// # Ok::<(), qttt::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl QTableRepository for JsonFileRepository {
    fn try_load(&self) -> Result<QTable> {
        let file = File::open(&self.path).map_err(|source| Error::Io {
            operation: format!("open file {:?}", self.path),
            source,
        })?;
        SavedQTable::read_from(BufReader::new(file))?.to_table()
    }

    fn write(&self, table: &QTable) -> Result<()> {
        let mut temp = NamedTempFile::new_in(self.directory()).map_err(|source| Error::Io {
            operation: format!("create temporary file in {:?}", self.directory()),
            source,
        })?;

        if let Ok(metadata) = fs::metadata(&self.path) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|source| Error::Io {
                    operation: format!("copy permissions of {:?}", self.path),
                    source,
                })?;
        }

        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            SavedQTable::from_table(table).write_to(&mut writer)?;
            writer.flush().map_err(|source| Error::Io {
                operation: format!("write Q-table for {:?}", self.path),
                source,
            })?;
        }

        temp.persist(&self.path).map_err(|err| Error::Io {
            operation: format!("replace file {:?}", self.path),
            source: err.error,
        })?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
