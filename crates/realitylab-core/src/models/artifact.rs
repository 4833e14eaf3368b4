//! Saved reality model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{PlanDocument, Profile};

/// A plan document persisted in the store, with its fork lineage.
///
/// Saved realities are never mutated; edits and merges produce new ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedArtifact {
    /// Opaque unique identifier issued by the store
    pub id: String,

    /// Display name chosen at save time
    pub name: String,

    /// Reality this one was forked from, if any
    pub parent_id: Option<String>,

    /// Timestamp when the reality was saved (UTC)
    pub created_at: Timestamp,

    /// The plan itself
    #[serde(alias = "data")]
    pub document: PlanDocument,

    /// Profile active when the reality was saved
    pub profile: Profile,

    /// Prompt the plan was generated from
    pub prompt: String,
}

impl SavedArtifact {
    /// Whether this reality was forked from another one.
    pub fn is_fork(&self) -> bool {
        self.parent_id.is_some()
    }
}
