//! Reality store: keyed persistence of saved realities, the active profile,
//! and the active-reality pointer.
//!
//! [`Store`] holds all the logic once and runs over any
//! [`KeyValueBackend`]: the SQLite [`Database`](crate::db::Database) on
//! disk, or [`MemoryBackend`] for tests and embedding. Callers get a store
//! instance handed to them; nothing reaches for global state.
//!
//! The backend sees exactly three keys ([`REALITIES_KEY`], [`PROFILE_KEY`],
//! [`ACTIVE_REALITY_KEY`]). A missing key reads as empty, never as an error.
//! Every write is checked against the store's byte quota before it reaches
//! the backend, and multi-key writes commit atomically, so a failed `save`
//! leaves nothing behind.

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::broadcast;

use crate::error::{LabError, Result};

pub mod artifacts;
pub mod memory;
pub mod profile;

pub use memory::MemoryBackend;

/// Key holding the serialized, insertion-ordered reality list.
pub const REALITIES_KEY: &str = "realitylab.realities";
/// Key holding the serialized active profile.
pub const PROFILE_KEY: &str = "realitylab.profile";
/// Key holding the id of the active reality, as plain text.
pub const ACTIVE_REALITY_KEY: &str = "realitylab.active_reality";

/// Default quota, the same 5 MiB a browser grants local storage.
pub const DEFAULT_CAPACITY: usize = 5 * 1024 * 1024;

const EVENT_BUFFER: usize = 64;

/// Byte-oriented key-value persistence.
pub trait KeyValueBackend {
    /// Reads one value; `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `sets` and deletes `removes` as one atomic unit.
    fn commit(&mut self, sets: &[(&str, String)], removes: &[&str]) -> Result<()>;

    /// Bytes currently used by all keys and values.
    fn usage(&self) -> Result<usize>;
}

/// Change signal sent after every successful store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Saved { id: String },
    Deleted { id: String },
    ProfileSaved,
    ActiveChanged { id: Option<String> },
    Cleared,
}

/// Quota usage snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StorageInfo {
    pub used: usize,
    /// Quota in bytes; 0 when the store is unbounded
    pub total: usize,
    pub percentage: f64,
}

/// Reality store over a key-value backend.
pub struct Store<B> {
    backend: B,
    capacity: Option<usize>,
    events: broadcast::Sender<StoreEvent>,
}

impl<B: KeyValueBackend> Store<B> {
    /// Wraps a backend with the default quota and a fresh event channel.
    pub fn new(backend: B) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            backend,
            capacity: Some(DEFAULT_CAPACITY),
            events,
        }
    }

    /// Sets the byte quota; `None` removes it.
    pub fn with_capacity(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity;
        self
    }

    /// Publishes change events on an existing channel instead of a private one.
    pub fn with_events(mut self, events: broadcast::Sender<StoreEvent>) -> Self {
        self.events = events;
        self
    }

    /// Subscribes to change events. The store keeps no subscriber list;
    /// dropped receivers simply stop receiving.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the store, returning the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Current usage against the quota.
    pub fn storage_info(&self) -> Result<StorageInfo> {
        let used = self.backend.usage()?;
        let total = self.capacity.unwrap_or(0);
        let percentage = if total == 0 {
            0.0
        } else {
            used as f64 / total as f64 * 100.0
        };
        Ok(StorageInfo {
            used,
            total,
            percentage,
        })
    }

    /// Removes every key the store owns.
    pub fn clear_all(&mut self) -> Result<()> {
        self.write(&[], &[REALITIES_KEY, PROFILE_KEY, ACTIVE_REALITY_KEY])?;
        self.notify(StoreEvent::Cleared);
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.backend.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        Ok(serde_json::to_string(value)?)
    }

    /// Checks the quota, then commits. Writes that shrink usage always pass
    /// so an over-quota store can still be cleaned up.
    fn write(&mut self, sets: &[(&str, String)], removes: &[&str]) -> Result<()> {
        if let Some(capacity) = self.capacity {
            let current = self.backend.usage()?;
            let mut projected = current;
            for key in sets.iter().map(|(k, _)| *k).chain(removes.iter().copied()) {
                if let Some(existing) = self.backend.get(key)? {
                    projected = projected.saturating_sub(key.len() + existing.len());
                }
            }
            projected += sets
                .iter()
                .map(|(key, value)| key.len() + value.len())
                .sum::<usize>();

            if projected > capacity && projected > current {
                return Err(LabError::StorageFull {
                    required: projected,
                    capacity,
                });
            }
        }
        self.backend.commit(sets, removes)
    }

    fn notify(&self, event: StoreEvent) {
        // No receivers is not an error
        let _ = self.events.send(event);
    }
}
