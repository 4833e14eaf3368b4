//! High-level async API over the reality store.
//!
//! [`Lab`] is what interfaces talk to. Every operation opens the SQLite
//! store inside [`tokio::task::spawn_blocking`], runs one synchronous
//! [`Store`] call, and hands the result back. Mutations also take the lab's
//! write lock first, so two concurrent saves cannot both read the artifact
//! list and then overwrite each other's additions.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Lab`] instances with configuration
//! - [`reality_ops`]: Save, import, fork, lookup, delete, and lineage
//! - [`merge_ops`]: Compare and merge two saved realities
//! - [`profile_ops`]: Profile, active pointer, and storage housekeeping
//!
//! # Usage Examples
//!
//! ```rust
//! use realitylab_core::{params::ImportGeneration, ImportOutcome, LabBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let lab = LabBuilder::new()
//!     .with_database_path(Some("realities.db"))
//!     .build()
//!     .await?;
//!
//! let outcome = lab
//!     .import_generation(&ImportGeneration {
//!         text: r#"{"reality_name": "Pilot", "timeline_phases":
//!             [{"phase": "Ground school", "action": "Study", "duration": "6 months"}]}"#
//!             .to_string(),
//!         prompt: "Become a pilot".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! if let ImportOutcome::Saved(reality) = outcome {
//!     println!("Saved {}", reality.id);
//! }
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::{
    sync::{broadcast, Mutex},
    task,
};

use crate::{
    db::Database,
    error::{LabError, Result},
    store::{Store, StoreEvent},
};

pub mod builder;
pub mod merge_ops;
pub mod profile_ops;
pub mod reality_ops;


pub use builder::LabBuilder;
pub use reality_ops::ImportOutcome;

/// Main interface for managing saved realities.
///
/// Cloning is cheap; clones share the write lock and the event channel.
#[derive(Clone)]
pub struct Lab {
    pub(crate) db_path: PathBuf,
    pub(crate) capacity: Option<usize>,
    events: broadcast::Sender<StoreEvent>,
    write_lock: Arc<Mutex<()>>,
}

impl Lab {
    pub(crate) fn new(
        db_path: PathBuf,
        capacity: Option<usize>,
        events: broadcast::Sender<StoreEvent>,
    ) -> Self {
        Self {
            db_path,
            capacity,
            events,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Path of the SQLite file this lab persists to.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Subscribes to store change events from this lab and its clones.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Runs a read-only store call on the blocking pool.
    pub(crate) async fn read<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Store<Database>) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        let capacity = self.capacity;
        let events = self.events.clone();

        task::spawn_blocking(move || {
            let store = open_store(&db_path, capacity, events)?;
            op(&store)
        })
        .await
        .map_err(|e| LabError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Runs a mutating store call on the blocking pool under the write lock.
    pub(crate) async fn write<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Store<Database>) -> Result<T> + Send + 'static,
    {
        let _guard = self.write_lock.lock().await;
        let db_path = self.db_path.clone();
        let capacity = self.capacity;
        let events = self.events.clone();

        task::spawn_blocking(move || {
            let mut store = open_store(&db_path, capacity, events)?;
            op(&mut store)
        })
        .await
        .map_err(|e| LabError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

fn open_store(
    db_path: &Path,
    capacity: Option<usize>,
    events: broadcast::Sender<StoreEvent>,
) -> Result<Store<Database>> {
    let db = Database::new(db_path)?;
    Ok(Store::new(db).with_capacity(capacity).with_events(events))
}
