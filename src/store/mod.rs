//! Key-value persistence: the storage trait, its backends, and typed cells

mod cell;
mod file;
mod kv;
mod sqlite;

pub use cell::{PersistentCell, read, write};
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore, StorageError, StorageResult};
pub use sqlite::SqliteStore;

use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// File name of the database used by the SQLite backend.
pub const SQLITE_FILE: &str = "quill.db";

/// Which key-value backend holds the data directory's state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One JSON file per key.
    #[default]
    File,
    /// A single SQLite database file.
    Sqlite,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::File => write!(f, "file"),
            Backend::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Opens the chosen backend inside `dir`.
pub fn open_backend(backend: Backend, dir: &Path) -> StorageResult<Box<dyn KeyValueStore>> {
    match backend {
        Backend::File => Ok(Box::new(FileStore::open(dir)?)),
        Backend::Sqlite => Ok(Box::new(SqliteStore::open(&dir.join(SQLITE_FILE))?)),
    }
}
