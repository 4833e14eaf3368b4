//! Conflict detection, reconciliation, and read-only comparison of two
//! realities.
//!
//! ```text
//!   PlanDocument A ─┐                      ┌─▶ Vec<Conflict>
//!                   ├─▶ detect_conflicts ──┤
//!   PlanDocument B ─┘                      └─▶ merge ─▶ MergeOutcome
//!                                                 ▲
//!                              resolutions ───────┘
//! ```
//!
//! Everything here is pure: no function fails, touches storage, or depends
//! on anything but its arguments. Set-like fields are compared by value.

pub mod compare;
pub mod detect;
pub mod reconcile;

#[cfg(test)]
mod tests;

pub use compare::{compare, compare_documents, ComparisonReport, SetComparison};
pub use detect::{detect_conflicts, MAX_COMBINED_MONTHS};
pub use reconcile::{
    merge, merge_documents, merge_timelines, merge_with_mode, MergeMode, MergeOutcome,
    ResolvedConflict,
};

/// Order-preserving union with value-equality deduplication.
pub(crate) fn union<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(a.len() + b.len());
    for item in a.iter().chain(b) {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Items of `a` that do not occur in `b`, in `a`'s order.
pub(crate) fn difference<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| !b.contains(item)).cloned().collect()
}

/// Items of `a` that also occur in `b`, in `a`'s order.
pub(crate) fn intersection<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|item| b.contains(item)).cloned().collect()
}
