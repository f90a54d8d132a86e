//! # Storage Layer
//!
//! The [`KeyValueStore`] trait is the only thing sprout knows about durable
//! storage: a synchronous `get`/`set` pair over string keys and string values.
//! What the value means (a serialized plant collection) is decided one layer
//! up, in [`crate::persistence`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file per key
//!   - Atomic writes (temp file, then rename)
//!   - Root directory created on first write
//!
//! - [`memory::MemStore`]: In-memory storage for testing
//!   - Can simulate write failures
//!   - Can be seeded with arbitrary raw values (e.g. corrupt records)
//!
//! - [`NoopStore`]: Stores nothing. For exercising registry logic with no
//!   store attached.
//!
//! ## Storage Layout
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── plants.json         # The plant collection (key "plants")
//! └── config.json         # Configuration, see crate::config
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for raw key-value I/O.
///
/// Methods take `&self`; backends needing mutation use interior mutability,
/// since sprout is single-threaded.
pub trait KeyValueStore {
    /// Read the raw value for `key`. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// A store that never holds anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStore;

impl KeyValueStore for NoopStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
