//! Read-only side-by-side comparison of two realities.

use serde::Serialize;

use super::{difference, intersection};
use crate::{
    extract::total_months,
    models::{Glitch, PlanDocument, SavedArtifact},
};

/// Intersection and both differences of two value lists.
///
/// `common` keeps the order of the first list, so `common` of (a, b) and of
/// (b, a) hold the same items but not necessarily in the same order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetComparison<T> {
    pub common: Vec<T>,
    pub unique_a: Vec<T>,
    pub unique_b: Vec<T>,
}

impl<T: PartialEq + Clone> SetComparison<T> {
    pub fn of(a: &[T], b: &[T]) -> Self {
        Self {
            common: intersection(a, b),
            unique_a: difference(a, b),
            unique_b: difference(b, a),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub sdgs: SetComparison<String>,
    pub glitches: SetComparison<Glitch>,
    pub total_duration_a: u32,
    pub total_duration_b: u32,
}

/// Compares two saved realities.
pub fn compare(a: &SavedArtifact, b: &SavedArtifact) -> ComparisonReport {
    compare_documents(&a.document, &b.document)
}

/// Compares two documents. Pure; never mutates or persists anything.
pub fn compare_documents(a: &PlanDocument, b: &PlanDocument) -> ComparisonReport {
    ComparisonReport {
        sdgs: SetComparison::of(&a.sdg_alignment, &b.sdg_alignment),
        glitches: SetComparison::of(&a.glitches, &b.glitches),
        total_duration_a: total_months(&a.timeline_phases),
        total_duration_b: total_months(&b.timeline_phases),
    }
}
