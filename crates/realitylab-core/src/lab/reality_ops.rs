//! Reality operations for the Lab.

use log::info;

use super::Lab;
use crate::{
    error::{LabError, Result},
    generation::{parse_generation_output, GenerationOutput},
    models::SavedArtifact,
    params::{ForkReality, Id, ImportGeneration, SaveReality},
};

/// Result of importing generator output.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportOutcome {
    /// The output held a plan, which is now saved and active
    Saved(SavedArtifact),
    /// The output held no usable plan; nothing was saved
    Opaque { text: String, reason: String },
}

impl Lab {
    /// Saves a plan document as a new reality and makes it active.
    ///
    /// The current profile is snapshotted into the reality.
    pub async fn save_reality(&self, params: &SaveReality) -> Result<SavedArtifact> {
        params.validate()?;
        let params = params.clone();

        self.write(move |store| {
            let profile = store.profile_or_default()?;
            store.save(
                &params.name,
                params.document,
                profile,
                &params.prompt,
                params.parent_id.as_deref(),
            )
        })
        .await
    }

    /// Parses raw generator output and saves it when it holds a plan.
    ///
    /// Output without a usable plan is handed back untouched as
    /// [`ImportOutcome::Opaque`] and nothing is written.
    pub async fn import_generation(&self, params: &ImportGeneration) -> Result<ImportOutcome> {
        let document = match parse_generation_output(&params.text) {
            GenerationOutput::Plan(document) => document,
            GenerationOutput::Opaque { text, reason } => {
                return Ok(ImportOutcome::Opaque { text, reason });
            }
        };

        let name = params
            .name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| display_name(&document.name));

        let saved = self
            .save_reality(&SaveReality {
                name,
                document,
                prompt: params.prompt.clone(),
                parent_id: params.parent_id.clone(),
            })
            .await?;
        info!("Imported generated reality {}", saved.id);
        Ok(ImportOutcome::Saved(saved))
    }

    /// Saves a new reality whose parent is an existing one.
    pub async fn fork_reality(&self, params: &ForkReality) -> Result<SavedArtifact> {
        let parent = self
            .show_reality(&Id::from(params.parent_id.as_str()))
            .await?
            .ok_or_else(|| LabError::RealityNotFound {
                id: params.parent_id.clone(),
            })?;

        let name = params
            .name
            .clone()
            .unwrap_or_else(|| format!("{} (fork)", parent.name));

        self.save_reality(&SaveReality {
            name,
            document: params.document.clone().unwrap_or(parent.document),
            prompt: params.prompt.clone().unwrap_or(parent.prompt),
            parent_id: Some(parent.id),
        })
        .await
    }

    /// All saved realities in insertion order.
    pub async fn list_realities(&self) -> Result<Vec<SavedArtifact>> {
        self.read(|store| store.get_all()).await
    }

    /// Retrieves a reality by its ID.
    pub async fn show_reality(&self, params: &Id) -> Result<Option<SavedArtifact>> {
        let id = params.id.clone();
        self.read(move |store| store.get_by_id(&id)).await
    }

    /// Deletes a reality. Returns whether anything was deleted.
    pub async fn delete_reality(&self, params: &Id) -> Result<bool> {
        let id = params.id.clone();
        self.write(move |store| store.delete(&id)).await
    }

    /// Direct children of a reality.
    pub async fn children(&self, params: &Id) -> Result<Vec<SavedArtifact>> {
        let id = params.id.clone();
        self.read(move |store| store.get_children(&id)).await
    }

    /// Lineage of a reality, oldest ancestor first.
    pub async fn ancestry(&self, params: &Id) -> Result<Vec<SavedArtifact>> {
        let id = params.id.clone();
        self.read(move |store| store.get_ancestry_chain(&id)).await
    }
}

fn display_name(generated: &str) -> String {
    if generated.trim().is_empty() {
        "Untitled reality".to_string()
    } else {
        generated.to_string()
    }
}
