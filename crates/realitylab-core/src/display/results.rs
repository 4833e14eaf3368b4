//! Result wrapper types for displaying operation outcomes.
//!
//! This module formats the results of save and delete operations, and the
//! comparison, merge, and storage reports, with consistent messaging.

use std::fmt;

use crate::{
    merge::{ComparisonReport, MergeOutcome, SetComparison},
    models::SavedArtifact,
    store::StorageInfo,
};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use realitylab_core::{
///     display::CreateResult,
///     models::{PlanDocument, Profile, SavedArtifact},
/// };
///
/// let reality = SavedArtifact {
///     id: "reality_42".to_string(),
///     name: "Product Designer".to_string(),
///     parent_id: None,
///     created_at: Timestamp::now(),
///     document: PlanDocument::new("Product Designer"),
///     profile: Profile::default(),
///     prompt: "Design things".to_string(),
/// };
///
/// let output = CreateResult::new(reality).to_string();
/// assert!(output.starts_with("Saved reality with ID: reality_42"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<SavedArtifact> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved reality with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<SavedArtifact> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted reality '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

fn fmt_set<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    set: &SetComparison<T>,
) -> fmt::Result {
    writeln!(f, "## {title}")?;
    writeln!(f)?;
    for (label, items) in [
        ("Shared", &set.common),
        ("Only in A", &set.unique_a),
        ("Only in B", &set.unique_b),
    ] {
        if items.is_empty() {
            continue;
        }
        writeln!(f, "**{label}**")?;
        writeln!(f)?;
        for item in items {
            writeln!(f, "- {item}")?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Comparison")?;
        writeln!(f)?;
        writeln!(f, "- Duration A: {} months", self.total_duration_a)?;
        writeln!(f, "- Duration B: {} months", self.total_duration_b)?;
        writeln!(f)?;
        fmt_set(f, "SDG Alignment", &self.sdgs)?;
        fmt_set(f, "Glitches", &self.glitches)
    }
}

impl fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Merge: {}", self.merged.name)?;
        writeln!(f)?;
        writeln!(f, "- Status: {}", self.merged.status.with_icon())?;
        writeln!(
            f,
            "- Conflicts: {} ({} auto-resolvable)",
            self.conflicts.len(),
            self.auto_resolved_count
        )?;

        let unresolved = self.unresolved();
        if !unresolved.is_empty() {
            let refs: Vec<String> = unresolved
                .iter()
                .map(|(index, c)| format!("{index} ({})", c.conflict.id))
                .collect();
            writeln!(f, "- Needs a choice: {}", refs.join(", "))?;
        }
        writeln!(f)?;

        if !self.conflicts.is_empty() {
            writeln!(f, "## Conflicts")?;
            writeln!(f)?;
            for (index, conflict) in self.conflicts.iter().enumerate() {
                writeln!(f, "{index}.")?;
                write!(f, "{conflict}")?;
                writeln!(f)?;
            }
        }

        writeln!(f, "## Merged Timeline")?;
        writeln!(f)?;
        for phase in &self.merged.timeline_phases {
            writeln!(f, "- **{}** ({}): {}", phase.phase, phase.duration, phase.action)?;
        }
        Ok(())
    }
}

impl fmt::Display for StorageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Storage")?;
        writeln!(f)?;
        writeln!(f, "- Used: {} bytes", self.used)?;
        if self.total == 0 {
            writeln!(f, "- Quota: unlimited")
        } else {
            writeln!(f, "- Quota: {} bytes", self.total)?;
            writeln!(f, "- Usage: {:.1}%", self.percentage)
        }
    }
}
