//! Collection wrapper types for displaying groups of saved realities.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    ops::Index,
};

use super::datetime::LocalDateTime;
use crate::models::SavedArtifact;

/// Newtype wrapper for displaying a flat list of saved realities.
///
/// Each reality gets a one-section summary; empty lists say so.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use realitylab_core::{
///     display::Realities,
///     models::{PlanDocument, Profile, SavedArtifact},
/// };
///
/// let reality = SavedArtifact {
///     id: "reality_1".to_string(),
///     name: "Data Engineer".to_string(),
///     parent_id: None,
///     created_at: Timestamp::now(),
///     document: PlanDocument::new("Data Engineer"),
///     profile: Profile::default(),
///     prompt: String::new(),
/// };
///
/// let output = Realities(vec![reality]).to_string();
/// assert!(output.contains("## Data Engineer (ID: reality_1)"));
/// ```
pub struct Realities(pub Vec<SavedArtifact>);

impl Realities {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SavedArtifact> {
        self.0.iter()
    }
}

impl Index<usize> for Realities {
    type Output = SavedArtifact;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Realities {
    type Item = SavedArtifact;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Realities {
    type Item = &'a SavedArtifact;
    type IntoIter = std::slice::Iter<'a, SavedArtifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Realities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No realities found.");
        }
        for reality in &self.0 {
            let doc = &reality.document;
            writeln!(f, "## {} (ID: {})", reality.name, reality.id)?;
            writeln!(f)?;
            writeln!(f, "- **Status**: {}", doc.status.with_icon())?;
            writeln!(
                f,
                "- **Duration**: {} months over {} phase(s)",
                crate::extract::total_months(&doc.timeline_phases),
                doc.timeline_phases.len()
            )?;
            if let Some(parent) = &reality.parent_id {
                writeln!(f, "- **Forked from**: {parent}")?;
            }
            writeln!(f, "- **Created**: {}", LocalDateTime(&reality.created_at))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Lineage forest of saved realities.
///
/// Realities without a parent, or whose parent is not in the collection,
/// are roots; forks are nested under their parent in insertion order.
pub struct RealityTree(pub Vec<SavedArtifact>);

impl RealityTree {
    fn fmt_node(
        f: &mut fmt::Formatter<'_>,
        node: &SavedArtifact,
        children: &HashMap<&str, Vec<&SavedArtifact>>,
        depth: usize,
        seen: &mut HashSet<String>,
    ) -> fmt::Result {
        if !seen.insert(node.id.clone()) {
            return Ok(());
        }
        writeln!(
            f,
            "{}- **{}** `{}` {}",
            "  ".repeat(depth),
            node.name,
            node.id,
            node.document.status.with_icon()
        )?;
        if let Some(kids) = children.get(node.id.as_str()) {
            for child in kids {
                Self::fmt_node(f, child, children, depth + 1, seen)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for RealityTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No realities found.");
        }

        let known: HashSet<&str> = self.0.iter().map(|a| a.id.as_str()).collect();
        let mut children: HashMap<&str, Vec<&SavedArtifact>> = HashMap::new();
        let mut roots = Vec::new();
        for artifact in &self.0 {
            match artifact.parent_id.as_deref() {
                Some(parent) if known.contains(parent) => {
                    children.entry(parent).or_default().push(artifact);
                }
                _ => roots.push(artifact),
            }
        }

        let mut seen = HashSet::new();
        for root in roots {
            Self::fmt_node(f, root, &children, 0, &mut seen)?;
        }
        Ok(())
    }
}

/// An ancestry chain, oldest ancestor first.
pub struct Ancestry(pub Vec<SavedArtifact>);

impl fmt::Display for Ancestry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No lineage found.");
        }
        for (generation, artifact) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{}. **{}** `{}` ({})",
                generation + 1,
                artifact.name,
                artifact.id,
                LocalDateTime(&artifact.created_at)
            )?;
        }
        Ok(())
    }
}
