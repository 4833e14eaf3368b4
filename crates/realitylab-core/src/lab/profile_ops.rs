//! Profile, active-reality, and storage operations for the Lab.

use super::Lab;
use crate::{
    error::Result,
    models::{Profile, SavedArtifact},
    params::Id,
    store::StorageInfo,
};

impl Lab {
    /// The saved profile, or the first-use default.
    pub async fn profile(&self) -> Result<Profile> {
        self.read(|store| store.profile_or_default()).await
    }

    /// Replaces the saved profile.
    pub async fn save_profile(&self, profile: &Profile) -> Result<()> {
        let profile = profile.clone();
        self.write(move |store| store.save_profile(&profile)).await
    }

    /// The active reality, if set and still saved.
    pub async fn active_reality(&self) -> Result<Option<SavedArtifact>> {
        self.read(|store| store.active()).await
    }

    /// Makes an existing reality the active one.
    pub async fn set_active_reality(&self, params: &Id) -> Result<()> {
        let id = params.id.clone();
        self.write(move |store| store.set_active(&id)).await
    }

    /// Usage against the configured quota.
    pub async fn storage_info(&self) -> Result<StorageInfo> {
        self.read(|store| store.storage_info()).await
    }

    /// Removes every reality, the profile, and the active pointer.
    pub async fn clear_all(&self) -> Result<()> {
        self.write(|store| store.clear_all()).await
    }
}
