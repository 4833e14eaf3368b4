//! Parameter structures for reality lab operations.
//!
//! These structures are shared by every interface over [`Lab`](crate::Lab)
//! and carry no framework-specific derives. Interface layers (the CLI's clap
//! argument structs, for instance) define their own wrappers and convert
//! into these with `From`:
//!
//! ```ignore
//! #[derive(Args)]
//! pub struct CompareArgs {
//!     pub a: String,
//!     pub b: String,
//! }
//!
//! impl From<CompareArgs> for ComparePair {
//!     fn from(args: CompareArgs) -> Self {
//!         ComparePair { a: args.a, b: args.b }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    merge::MergeMode,
    models::{ConflictResolution, PlanDocument},
};

/// Generic parameters for operations requiring just a reality ID.
///
/// Used for show, delete, children, ancestry and set-active.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the reality to operate on
    pub id: String,
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

/// Parameters for saving an already-built plan document.
///
/// The current profile is snapshotted into the saved reality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveReality {
    /// Display name of the reality
    pub name: String,
    /// The plan to save
    pub document: PlanDocument,
    /// Prompt that produced the plan
    #[serde(default)]
    pub prompt: String,
    /// Reality this one was forked from
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Parameters for importing raw generator output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportGeneration {
    /// Raw text returned by the generator
    pub text: String,
    /// Prompt the text answers
    #[serde(default)]
    pub prompt: String,
    /// Overrides the name the generator gave the plan
    #[serde(default)]
    pub name: Option<String>,
    /// Reality this one was forked from
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Parameters for forking an existing reality.
///
/// Without a replacement document the fork starts as a copy of its parent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForkReality {
    /// ID of the reality to fork from
    pub parent_id: String,
    /// Name of the fork; defaults to "<parent name> (fork)"
    #[serde(default)]
    pub name: Option<String>,
    /// Document of the fork; defaults to the parent's document
    #[serde(default)]
    pub document: Option<PlanDocument>,
    /// Prompt of the fork; defaults to the parent's prompt
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Two realities to compare.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparePair {
    pub a: String,
    pub b: String,
}

/// Parameters for merging two realities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeRealities {
    /// ID of the first reality
    pub a: String,
    /// ID of the second reality
    pub b: String,
    /// User choices, by conflict index or conflict id
    #[serde(default)]
    pub resolutions: Vec<ConflictResolution>,
    #[serde(default)]
    pub mode: MergeMode,
    /// Name for the saved merge; defaults to the merged document's name
    #[serde(default)]
    pub save_as: Option<String>,
}

impl MergeRealities {
    pub fn pair(&self) -> ComparePair {
        ComparePair {
            a: self.a.clone(),
            b: self.b.clone(),
        }
    }
}

impl SaveReality {
    /// Validates the parameters before anything touches the store.
    ///
    /// # Errors
    ///
    /// * `LabError::InvalidInput` - When the name is blank
    /// * `LabError::InvalidInput` - When the document has no timeline phases
    pub fn validate(&self) -> crate::Result<()> {
        if self.name.trim().is_empty() {
            return Err(crate::LabError::invalid_input("name")
                .with_reason("Reality name must not be empty"));
        }
        self.document.validate()
    }
}
