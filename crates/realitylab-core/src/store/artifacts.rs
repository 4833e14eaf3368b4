//! Saved-reality operations: save, lookup, delete, and lineage queries.

use std::collections::{HashMap, HashSet};

use jiff::Timestamp;
use log::{debug, warn};
use uuid::Uuid;

use super::{KeyValueBackend, Store, StoreEvent, ACTIVE_REALITY_KEY, REALITIES_KEY};
use crate::{
    error::{LabError, Result},
    models::{PlanDocument, Profile, SavedArtifact},
};

/// Issues a fresh reality id.
pub fn generate_id() -> String {
    format!("reality_{}", Uuid::new_v4().simple())
}

impl<B: KeyValueBackend> Store<B> {
    /// Saves a new reality and makes it the active one.
    ///
    /// `parent_id`, when given, must name a saved reality; the parent itself
    /// is not touched. If the backend write fails (including
    /// [`LabError::StorageFull`]) nothing is stored and the active pointer is
    /// unchanged.
    pub fn save(
        &mut self,
        name: &str,
        document: PlanDocument,
        profile: Profile,
        prompt: &str,
        parent_id: Option<&str>,
    ) -> Result<SavedArtifact> {
        let mut artifacts = self.get_all()?;

        if let Some(parent) = parent_id {
            if !artifacts.iter().any(|a| a.id == parent) {
                return Err(LabError::RealityNotFound {
                    id: parent.to_string(),
                });
            }
        }

        let mut id = generate_id();
        while artifacts.iter().any(|a| a.id == id) {
            id = generate_id();
        }

        let artifact = SavedArtifact {
            id,
            name: name.to_string(),
            parent_id: parent_id.map(String::from),
            created_at: Timestamp::now(),
            document,
            profile,
            prompt: prompt.to_string(),
        };
        artifacts.push(artifact.clone());

        let list = Self::to_json(&artifacts)?;
        self.write(
            &[
                (REALITIES_KEY, list),
                (ACTIVE_REALITY_KEY, artifact.id.clone()),
            ],
            &[],
        )?;

        debug!("Saved reality {} ({})", artifact.id, artifact.name);
        self.notify(StoreEvent::Saved {
            id: artifact.id.clone(),
        });
        Ok(artifact)
    }

    /// All saved realities in insertion order.
    pub fn get_all(&self) -> Result<Vec<SavedArtifact>> {
        Ok(self.read_json(REALITIES_KEY)?.unwrap_or_default())
    }

    /// Retrieves a reality by its ID.
    pub fn get_by_id(&self, id: &str) -> Result<Option<SavedArtifact>> {
        Ok(self.get_all()?.into_iter().find(|a| a.id == id))
    }

    /// Deletes a reality. Unknown ids are a silent no-op (returns `false`).
    ///
    /// Children keep their `parent_id`; their lineage simply ends at the gap.
    /// Deleting the active reality clears the active pointer.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let artifacts = self.get_all()?;
        let before = artifacts.len();
        let remaining: Vec<SavedArtifact> = artifacts.into_iter().filter(|a| a.id != id).collect();
        if remaining.len() == before {
            debug!("Delete of unknown reality {id} ignored");
            return Ok(false);
        }

        let was_active = self.active_id()?.as_deref() == Some(id);
        let list = Self::to_json(&remaining)?;
        let removes: &[&str] = if was_active {
            &[ACTIVE_REALITY_KEY]
        } else {
            &[]
        };
        self.write(&[(REALITIES_KEY, list)], removes)?;

        self.notify(StoreEvent::Deleted { id: id.to_string() });
        if was_active {
            self.notify(StoreEvent::ActiveChanged { id: None });
        }
        Ok(true)
    }

    /// Direct children of a reality (not recursive), in insertion order.
    pub fn get_children(&self, parent_id: &str) -> Result<Vec<SavedArtifact>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|a| a.parent_id.as_deref() == Some(parent_id))
            .collect())
    }

    /// The reality a given one was forked from, if it still exists.
    pub fn get_parent(&self, artifact: &SavedArtifact) -> Result<Option<SavedArtifact>> {
        match &artifact.parent_id {
            Some(parent_id) => self.get_by_id(parent_id),
            None => Ok(None),
        }
    }

    /// Lineage from the oldest reachable ancestor down to `id` inclusive.
    ///
    /// Empty when `id` is unknown. A parent link to a deleted reality ends
    /// the chain there. A parent link cycle is reported as
    /// [`LabError::CorruptLineage`] instead of looping.
    pub fn get_ancestry_chain(&self, id: &str) -> Result<Vec<SavedArtifact>> {
        let by_id: HashMap<String, SavedArtifact> = self
            .get_all()?
            .into_iter()
            .map(|a| (a.id.clone(), a))
            .collect();

        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = by_id.get(id);

        while let Some(artifact) = current {
            if !visited.insert(artifact.id.as_str()) {
                return Err(LabError::CorruptLineage { id: id.to_string() });
            }
            chain.push(artifact.clone());
            current = match artifact.parent_id.as_deref() {
                Some(parent_id) => {
                    let parent = by_id.get(parent_id);
                    if parent.is_none() {
                        warn!("Reality {} points at missing parent {parent_id}", artifact.id);
                    }
                    parent
                }
                None => None,
            };
        }

        chain.reverse();
        Ok(chain)
    }
}
