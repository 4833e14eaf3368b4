//! Compare and merge operations for the Lab.

use log::info;

use super::Lab;
use crate::{
    error::{LabError, Result},
    merge::{compare, merge_with_mode, ComparisonReport, MergeOutcome},
    models::SavedArtifact,
    params::{ComparePair, MergeRealities},
};

impl Lab {
    /// Loads both realities of a pair, failing if either is missing.
    async fn load_pair(&self, pair: &ComparePair) -> Result<(SavedArtifact, SavedArtifact)> {
        let pair = pair.clone();
        self.read(move |store| {
            let find = |id: &str| {
                store
                    .get_by_id(id)?
                    .ok_or_else(|| LabError::RealityNotFound { id: id.to_string() })
            };
            Ok((find(&pair.a)?, find(&pair.b)?))
        })
        .await
    }

    /// Set-level comparison of two saved realities.
    pub async fn compare(&self, params: &ComparePair) -> Result<ComparisonReport> {
        let (a, b) = self.load_pair(params).await?;
        Ok(compare(&a, &b))
    }

    /// Merges two saved realities without saving the result.
    pub async fn merge(&self, params: &MergeRealities) -> Result<MergeOutcome> {
        let (a, b) = self.load_pair(&params.pair()).await?;
        Ok(merge_with_mode(&a, &b, &params.resolutions, params.mode))
    }

    /// Merges two saved realities and saves the merged document.
    ///
    /// The merged reality carries both prompts joined with `" + "` and a
    /// snapshot of the current profile. It has no parent.
    ///
    /// # Errors
    ///
    /// * `LabError::InvalidInput` - When a conflict that needs a choice has
    ///   none; nothing is saved
    pub async fn merge_and_save(
        &self,
        params: &MergeRealities,
    ) -> Result<(MergeOutcome, SavedArtifact)> {
        let (a, b) = self.load_pair(&params.pair()).await?;
        let outcome = merge_with_mode(&a, &b, &params.resolutions, params.mode);

        let unresolved = outcome.unresolved();
        if !unresolved.is_empty() {
            let pending: Vec<String> = unresolved
                .iter()
                .map(|(index, c)| format!("{index} ({})", c.conflict.id))
                .collect();
            return Err(LabError::invalid_input("resolutions").with_reason(format!(
                "{} conflict(s) still need a choice: {}",
                pending.len(),
                pending.join(", ")
            )));
        }

        let name = params
            .save_as
            .clone()
            .unwrap_or_else(|| outcome.merged.name.clone());
        let document = outcome.merged.clone();
        let prompt = format!("{} + {}", a.prompt, b.prompt);

        let saved = self
            .write(move |store| {
                let profile = store.profile_or_default()?;
                store.save(&name, document, profile, &prompt, None)
            })
            .await?;
        info!("Saved merge of {} and {} as {}", a.id, b.id, saved.id);
        Ok((outcome, saved))
    }
}
