//! Typed values bound to storage keys.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::{StorageBackend, StorageResult};

/// One typed value synced to one storage key.
///
/// Reads come from an in-memory cache; writes go through to the backend.
/// Missing or corrupt stored entries fall back to the caller's default
/// instead of failing, so loading a `StoredValue` always succeeds.
pub struct StoredValue<T> {
    backend: Arc<dyn StorageBackend>,
    key: String,
    value: T,
}

impl<T> StoredValue<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Load the value stored under `key`, or fall back to `default`.
    ///
    /// The resolved value is written back so the key exists afterwards;
    /// a failed write-back is ignored here (the cache is authoritative
    /// until the next [`set`](Self::set)).
    pub fn load_or(backend: Arc<dyn StorageBackend>, key: impl Into<String>, default: T) -> Self {
        Self::load_or_else(backend, key, || default)
    }

    /// Like [`load_or`](Self::load_or) with a lazily computed default.
    pub fn load_or_else(
        backend: Arc<dyn StorageBackend>,
        key: impl Into<String>,
        default: impl FnOnce() -> T,
    ) -> Self {
        let key = key.into();
        let value = match backend.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(key = %key, error = %_e, "corrupt stored value, using default");
                    default()
                }
            },
            Ok(None) => default(),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(key = %key, error = %_e, "storage read failed, using default");
                default()
            }
        };
        let stored = Self {
            backend,
            key,
            value,
        };
        let _ = stored.write_through();
        stored
    }

    /// The bound storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The current (cached) value.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and write it through to the backend.
    ///
    /// The cache is updated even when the backend write fails, so the UI
    /// keeps working with the new value; the error is surfaced for callers
    /// that care.
    pub fn set(&mut self, value: T) -> StorageResult<()> {
        self.value = value;
        self.write_through()
    }

    /// Mutate the value in place and write it through to the backend.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) -> StorageResult<()> {
        f(&mut self.value);
        self.write_through()
    }

    /// Re-read the value from the backend, keeping the cache on failure.
    pub fn reload(&mut self) -> StorageResult<()> {
        if let Some(raw) = self.backend.get(&self.key)? {
            self.value = serde_json::from_str(&raw)
                .map_err(|e| crate::storage::StorageError::Serialization(e.to_string()))?;
        }
        Ok(())
    }

    fn write_through(&self) -> StorageResult<()> {
        let raw = serde_json::to_string(&self.value)
            .map_err(|e| crate::storage::StorageError::Serialization(e.to_string()))?;
        self.backend.set(&self.key, &raw)
    }
}

impl<T: fmt::Debug> fmt::Debug for StoredValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredValue")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("backend", &self.backend.name())
            .finish()
    }
}
