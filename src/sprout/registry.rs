//! # Plant Registry
//!
//! The registry owns the plant collection for a session and is the only code
//! allowed to mutate it. The collection is kept newest-first: new plants are
//! prepended.
//!
//! Every successful mutation is followed by a full save through the injected
//! [`Persistence`] hook. Rejected input and lookup misses change nothing and
//! save nothing; they are reported through the return value only.

use crate::model::{Plant, PlantId, MAX_FREQUENCY};
use crate::persistence::Persistence;
use chrono::{DateTime, Utc};

/// Issues strictly increasing plant ids.
///
/// Ids track creation time in epoch milliseconds, the format already used by
/// stored collections, but never repeat: a second id within the same
/// millisecond (or after the clock steps back) is bumped past the last one.
/// Once `u64::MAX` has been handed out the allocator is exhausted.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    /// An allocator that will never hand out `existing` or anything below it.
    pub fn seeded(existing: impl IntoIterator<Item = PlantId>) -> Self {
        let last = existing.into_iter().map(|id| id.0).max().unwrap_or(0);
        Self { last }
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> Option<PlantId> {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last.checked_add(1)?);
        self.last = id;
        Some(PlantId(id))
    }
}

type Clock = Box<dyn Fn() -> DateTime<Utc>>;

pub struct Registry<P: Persistence> {
    plants: Vec<Plant>,
    ids: IdAllocator,
    persistence: P,
    clock: Clock,
}

impl<P: Persistence> Registry<P> {
    /// Builds a registry and loads its collection once from `persistence`.
    /// Absent or unusable stored data yields an empty collection.
    pub fn open(persistence: P) -> Self {
        let mut registry = Self {
            plants: Vec::new(),
            ids: IdAllocator::default(),
            persistence,
            clock: Box::new(Utc::now),
        };
        registry.reload();
        registry
    }

    /// Replace the time source used for ids and watering timestamps.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the in-memory collection wholesale with the stored one.
    pub fn reload(&mut self) {
        self.plants = self.persistence.load().unwrap_or_default();
        self.ids = IdAllocator::seeded(self.plants.iter().map(|p| p.id));
    }

    /// Adds a plant watered now, at the front of the list.
    ///
    /// `name` is trimmed. Returns `None` without touching anything when the
    /// trimmed name is empty, `frequency` is outside `1..=MAX_FREQUENCY`, or
    /// no id is left to hand out.
    pub fn create(&mut self, name: &str, frequency: i64) -> Option<PlantId> {
        let name = name.trim();
        if name.is_empty() || !(1..=i64::from(MAX_FREQUENCY)).contains(&frequency) {
            tracing::debug!(plant = name, frequency, "Rejected plant");
            return None;
        }
        let frequency = u32::try_from(frequency).ok()?;

        let now = (self.clock)();
        let Some(id) = self.ids.next(now) else {
            tracing::warn!(plant = name, "Rejected plant, no plant ids left");
            return None;
        };
        self.plants.insert(0, Plant::new(id, name, frequency, now));
        tracing::debug!(%id, plant = name, frequency, "Created plant");

        self.persist();
        Some(id)
    }

    /// Sets `last_watered` to now. Returns `false` if no plant has `id`.
    pub fn mark_watered(&mut self, id: PlantId) -> bool {
        let now = (self.clock)();
        let Some(plant) = self.plants.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(%id, "Water skipped, plant not found");
            return false;
        };
        plant.last_watered = now;
        tracing::debug!(%id, "Marked plant watered");

        self.persist();
        true
    }

    /// Removes the plant with `id`. Returns `false` if it was not there.
    pub fn delete(&mut self, id: PlantId) -> bool {
        let Some(pos) = self.plants.iter().position(|p| p.id == id) else {
            tracing::debug!(%id, "Delete skipped, plant not found");
            return false;
        };
        self.plants.remove(pos);
        tracing::debug!(%id, "Deleted plant");

        self.persist();
        true
    }

    /// All plants, newest first.
    pub fn list(&self) -> &[Plant] {
        &self.plants
    }

    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// The current time according to this registry's clock.
    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    fn persist(&self) {
        self.persistence.save(&self.plants);
    }
}
