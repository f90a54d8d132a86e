//! # Persistence Adapter
//!
//! Serializes the whole plant collection as one JSON array under a fixed key.
//!
//! Neither operation can fail from the caller's point of view. I/O and
//! (de)serialization problems are logged and turned into the "nothing loaded"
//! or "write dropped" outcome; the registry's in-memory state stays
//! authoritative for the running session.

use crate::model::Plant;
use crate::store::KeyValueStore;
use std::collections::HashSet;

pub const DEFAULT_STORAGE_KEY: &str = "plants";

/// Post-mutation hook the registry calls, plus the one-time load.
pub trait Persistence {
    /// Load the stored collection. `None` when absent or unusable.
    fn load(&self) -> Option<Vec<Plant>>;

    /// Persist the full collection, replacing whatever was stored.
    fn save(&self, plants: &[Plant]);
}

/// [`Persistence`] over a [`KeyValueStore`].
pub struct KvPersistence<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KvPersistence<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> Persistence for KvPersistence<S> {
    fn load(&self) -> Option<Vec<Plant>> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::error!(key = %self.key, "Error reading plants from store: {}", e);
                return None;
            }
        };

        let plants: Vec<Plant> = match serde_json::from_str(&raw) {
            Ok(plants) => plants,
            Err(e) => {
                tracing::warn!(key = %self.key, "Ignoring malformed plant record: {}", e);
                return None;
            }
        };

        if let Some(problem) = record_problem(&plants) {
            tracing::warn!(key = %self.key, "Ignoring malformed plant record: {}", problem);
            return None;
        }

        tracing::debug!(key = %self.key, count = plants.len(), "Loaded plants");
        Some(plants)
    }

    fn save(&self, plants: &[Plant]) {
        let raw = match serde_json::to_string(plants) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(key = %self.key, "Error serializing plants: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(&self.key, &raw) {
            tracing::error!(key = %self.key, "Error saving plants to store: {}", e);
        }
    }
}

/// First invariant violation found in a decoded record, if any.
fn record_problem(plants: &[Plant]) -> Option<String> {
    let mut seen = HashSet::new();
    for plant in plants {
        if !plant.is_valid() {
            return Some(format!("plant {} has a blank name or a frequency out of range", plant.id));
        }
        if !seen.insert(plant.id) {
            return Some(format!("duplicate plant id {}", plant.id));
        }
    }
    None
}
