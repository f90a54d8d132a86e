use super::KeyValueStore;
use crate::error::{Result, SproutError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory key-value store for testing.
///
/// Uses `RefCell` for interior mutability since sprout is single-threaded.
#[derive(Default)]
pub struct MemStore {
    values: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Store a raw value directly, bypassing any serialization.
    pub fn with_raw(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Raw value currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(SproutError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Plant, PlantId};
    use chrono::{DateTime, Duration, Utc};

    /// Builds a `MemStore` pre-populated with a plant record.
    pub struct StoreFixture {
        key: String,
        now: DateTime<Utc>,
        plants: Vec<Plant>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new("plants")
        }
    }

    impl StoreFixture {
        pub fn new(key: &str) -> Self {
            Self {
                key: key.to_string(),
                now: Utc::now(),
                plants: Vec::new(),
            }
        }

        /// Pins the instant `days_ago` counts back from.
        pub fn at(mut self, now: DateTime<Utc>) -> Self {
            self.now = now;
            self
        }

        /// Appends a plant watered `days_ago` days before the fixture's now.
        /// Appending keeps the record order, so the first call ends up first
        /// in the list.
        pub fn with_plant(mut self, name: &str, frequency: u32, days_ago: i64) -> Self {
            let id = PlantId(self.plants.len() as u64 + 1);
            let last_watered = self.now - Duration::days(days_ago);
            self.plants.push(Plant::new(id, name, frequency, last_watered));
            self
        }

        pub fn build(self) -> MemStore {
            let raw = serde_json::to_string(&self.plants).unwrap();
            MemStore::new().with_raw(&self.key, &raw)
        }
    }
}
