//! Conflict detection between two plan documents.

use log::debug;

use super::difference;
use crate::{
    extract::total_months,
    models::{Conflict, ConflictSubject, ConflictValue, PlanDocument, RealityStatus},
};

/// Combined timeline length, in months, above which two plans conflict.
pub const MAX_COMBINED_MONTHS: u32 = 36;

/// Compares two documents and returns their conflicts.
///
/// Rules run in a fixed order (duration, status, phase count, divergent
/// risks) and each emits at most one conflict. Resolutions may reference
/// conflicts by position, so that order is part of the contract.
pub fn detect_conflicts(a: &PlanDocument, b: &PlanDocument) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    let months_a = total_months(&a.timeline_phases);
    let months_b = total_months(&b.timeline_phases);
    let combined = months_a.saturating_add(months_b);
    if combined > MAX_COMBINED_MONTHS {
        conflicts.push(Conflict::new(
            ConflictSubject::TotalDuration,
            format!(
                "Combined timeline is {combined} months (too long for practical career planning)"
            ),
            format!("{months_a} months ({})", a.name),
            format!("{months_b} months ({})", b.name),
            false,
            Some(ConflictValue::Number(months_a.min(months_b))),
        ));
    }

    if a.status != b.status {
        conflicts.push(Conflict::new(
            ConflictSubject::Status,
            "Realities have different stability statuses",
            a.status.as_str(),
            b.status.as_str(),
            true,
            Some(ConflictValue::from(RealityStatus::Stable.as_str())),
        ));
    }

    let phases_a = a.timeline_phases.len();
    let phases_b = b.timeline_phases.len();
    if phases_a.abs_diff(phases_b) > 1 {
        let larger = u32::try_from(phases_a.max(phases_b)).unwrap_or(u32::MAX);
        conflicts.push(Conflict::new(
            ConflictSubject::PhaseCount,
            "Different number of career phases",
            format!("{phases_a} phases"),
            format!("{phases_b} phases"),
            true,
            Some(ConflictValue::Number(larger)),
        ));
    }

    let unique_a = difference(&a.glitches, &b.glitches);
    let unique_b = difference(&b.glitches, &a.glitches);
    if !unique_a.is_empty() && !unique_b.is_empty() {
        conflicts.push(Conflict::new(
            ConflictSubject::DivergentRisks,
            "Different risk factors identified",
            format!("{} unique risks from {}", unique_a.len(), a.name),
            format!("{} unique risks from {}", unique_b.len(), b.name),
            true,
            Some(ConflictValue::from("Combine all risks")),
        ));
    }

    debug!(
        "Detected {} conflict(s) between '{}' and '{}'",
        conflicts.len(),
        a.name,
        b.name
    );
    conflicts
}
