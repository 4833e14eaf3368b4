//! Active profile and active-reality pointer.

use super::{KeyValueBackend, Store, StoreEvent, ACTIVE_REALITY_KEY, PROFILE_KEY};
use crate::{
    error::{LabError, Result},
    models::{Profile, SavedArtifact},
};

impl<B: KeyValueBackend> Store<B> {
    /// The saved profile, if one was ever saved.
    pub fn profile(&self) -> Result<Option<Profile>> {
        self.read_json(PROFILE_KEY)
    }

    /// The saved profile, or the first-use default.
    pub fn profile_or_default(&self) -> Result<Profile> {
        Ok(self.profile()?.unwrap_or_default())
    }

    /// Replaces the profile wholesale.
    pub fn save_profile(&mut self, profile: &Profile) -> Result<()> {
        let json = Self::to_json(profile)?;
        self.write(&[(PROFILE_KEY, json)], &[])?;
        self.notify(StoreEvent::ProfileSaved);
        Ok(())
    }

    pub fn active_id(&self) -> Result<Option<String>> {
        self.backend.get(ACTIVE_REALITY_KEY)
    }

    /// Points the active pointer at a saved reality.
    pub fn set_active(&mut self, id: &str) -> Result<()> {
        if self.get_by_id(id)?.is_none() {
            return Err(LabError::RealityNotFound { id: id.to_string() });
        }
        self.write(&[(ACTIVE_REALITY_KEY, id.to_string())], &[])?;
        self.notify(StoreEvent::ActiveChanged {
            id: Some(id.to_string()),
        });
        Ok(())
    }

    pub fn clear_active(&mut self) -> Result<()> {
        self.write(&[], &[ACTIVE_REALITY_KEY])?;
        self.notify(StoreEvent::ActiveChanged { id: None });
        Ok(())
    }

    /// The active reality. `None` when unset or when it no longer exists.
    pub fn active(&self) -> Result<Option<SavedArtifact>> {
        match self.active_id()? {
            Some(id) => self.get_by_id(&id),
            None => Ok(None),
        }
    }
}
