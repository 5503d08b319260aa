//! Typed values persisted under a single key.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

use super::kv::{KeyValueStore, StorageError, StorageResult};

/// Reads and parses the value under `key`, or produces `initial` if the key
/// was never written.
///
/// # Errors
///
/// Returns `StorageError::Corrupt` if the stored string does not parse as `T`.
pub fn read<T, S, F>(store: &S, key: &str, initial: F) -> StorageResult<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
    F: FnOnce() -> T,
{
    match store.get(key)? {
        Some(json) => {
            debug!(key, bytes = json.len(), "loaded stored value");
            serde_json::from_str(&json).map_err(|e| StorageError::Corrupt {
                key: key.to_string(),
                source: e,
            })
        }
        None => {
            debug!(key, "no stored value, using initial value");
            Ok(initial())
        }
    }
}

/// Serializes `value` and stores it under `key`, replacing what was there.
pub fn write<T, S>(store: &mut S, key: &str, value: &T) -> StorageResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
        key: key.to_string(),
        source: e,
    })?;
    store.set(key, &json)?;
    debug!(key, bytes = json.len(), "persisted value");
    Ok(())
}

/// A value mirrored to a key-value store.
///
/// The current value is held as a shared snapshot. [`PersistentCell::replace`]
/// writes the new value to the store first and only then swaps the snapshot,
/// so a failed write leaves the cell unchanged. Callers can compare snapshots
/// with [`Arc::ptr_eq`] to tell whether anything changed.
#[derive(Debug)]
pub struct PersistentCell<T> {
    key: String,
    value: Arc<T>,
}

impl<T> PersistentCell<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Loads the cell, falling back to `initial` when the key is unset.
    pub fn load_or<S>(store: &S, key: impl Into<String>, initial: T) -> StorageResult<Self>
    where
        S: KeyValueStore + ?Sized,
    {
        Self::load_or_else(store, key, || initial)
    }

    /// Loads the cell, calling `initial` only when the key is unset.
    pub fn load_or_else<S, F>(store: &S, key: impl Into<String>, initial: F) -> StorageResult<Self>
    where
        S: KeyValueStore + ?Sized,
        F: FnOnce() -> T,
    {
        let key = key.into();
        let value = read(store, &key, initial)?;
        Ok(Self {
            key,
            value: Arc::new(value),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The current snapshot.
    pub fn get(&self) -> &Arc<T> {
        &self.value
    }

    /// Persists `value`, then makes it the current snapshot.
    pub fn replace<S>(&mut self, store: &mut S, value: T) -> StorageResult<()>
    where
        S: KeyValueStore + ?Sized,
    {
        write(store, &self.key, &value)?;
        self.value = Arc::new(value);
        Ok(())
    }
}
