#![forbid(unsafe_code)]

//! Injected storage for UI state.
//!
//! Instead of reaching for a global storage singleton, callers hand their
//! components a [`StorageBackend`] capability: a keyed string store with
//! `get`/`set`/`remove`/`clear`. [`MemoryStorage`] covers tests and
//! session-scoped state; [`FileStorage`] (feature `file-storage`) covers
//! cross-session persistence with atomic write-rename. [`StoredValue`]
//! binds one typed value to one key over any backend.
//!
//! # Design Invariants
//!
//! 1. **Graceful degradation**: storage failures never panic; operations
//!    return [`StorageResult`]. Missing or corrupt entries fall back to
//!    the caller's default.
//! 2. **Atomic writes**: the file backend writes a temp file and renames
//!    it over the target, so a crash never leaves a half-written file.
//! 3. **Opaque values**: backends store strings (JSON documents) and never
//!    interpret them; typing lives in [`StoredValue`].

pub mod storage;
pub mod value;

#[cfg(feature = "file-storage")]
pub use storage::FileStorage;
pub use storage::{MemoryStorage, StorageBackend, StorageError, StorageResult};
pub use value::StoredValue;
